//! Best-effort language identification.

/// Sentinel returned when detection fails or the text is empty.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Detect the natural language of `text`, returning a lowercase ISO 639-3
/// code (e.g. "eng"). Detection failure is never fatal: empty, ambiguous,
/// or script-less input yields [`UNKNOWN_LANGUAGE`].
pub fn detect_language(text: &str) -> String {
    if text.is_empty() {
        return UNKNOWN_LANGUAGE.to_string();
    }
    match whatlang::detect(text) {
        Some(info) => info.lang().code().to_string(),
        None => UNKNOWN_LANGUAGE.to_string(),
    }
}
