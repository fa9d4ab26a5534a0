//! SQLite access for the task store.
//!
//! Connection setup lives in `connection`, table definitions in `schema`.

mod connection;
pub mod schema;

pub use connection::{DEFAULT_DB_FILE, DbPath, open};
