//! EcoLens Store — SQLite persistence and aggregation queries for
//! annotated reviews.

pub mod schema;
pub mod sqlite;
pub mod types;

pub use sqlite::ReviewStore;
pub use types::*;
