//! Adapter implementations for port traits
//!
//! This module contains concrete collaborators for the core:
//!
//! - `sources/` - Static county, listing, HOA and neighborhood providers
//! - `normalizer` - Regex-based address normalization
//! - `store/` - In-memory and JSON file brief stores
//! - `openai/` - Chat completion narrator (HTTP client behind `llm`)

pub mod normalizer;
pub mod openai;
pub mod sources;
pub mod store;

pub use normalizer::RegexNormalizer;
pub use sources::{StaticSourceProvider, default_providers};
pub use store::{JsonFileStore, MemoryStore};
