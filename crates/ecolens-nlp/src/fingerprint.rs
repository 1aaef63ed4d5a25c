//! Deterministic dedupe fingerprinting.

use md5::{Digest, Md5};

/// Compute the dedupe fingerprint over the stable review fields.
///
/// Basis string is `product_id|text|rating` (empty string for a missing
/// rating), hashed with MD5 to a hex digest. A best-effort duplicate
/// detection key, not a security primitive — determinism is the contract.
pub fn fingerprint(product_id: &str, text: &str, rating: Option<f64>) -> String {
    let rating_part = rating.map(|r| r.to_string()).unwrap_or_default();
    let basis = format!("{product_id}|{text}|{rating_part}");

    let mut hasher = Md5::new();
    hasher.update(basis.as_bytes());
    hex::encode(hasher.finalize())
}
