//! Port traits (interfaces) for external collaborators
//!
//! These traits define the boundaries between the pure reconciliation core
//! and everything it does not own: data providers, address normalization,
//! persistence and language-model enrichment.
//!
//! Implementations live in the `adapters` module.

mod brief_store;
mod narrative;
mod normalizer;
mod source_provider;

pub use brief_store::BriefStore;
pub use narrative::{EnrichmentError, NarrativeService};
pub use normalizer::AddressNormalizer;
pub use source_provider::SourceProvider;
