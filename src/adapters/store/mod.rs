//! Brief store adapters
//!
//! Both stores share one [`Database`] snapshot type:
//!
//! - [`MemoryStore`] keeps it behind a mutex (tests, one-shot runs)
//! - [`JsonFileStore`] reads and rewrites it as a JSON file per operation

mod database;
mod file;
mod memory;

pub use database::Database;
pub use file::{JsonFileStore, STORE_FILE};
pub use memory::MemoryStore;
