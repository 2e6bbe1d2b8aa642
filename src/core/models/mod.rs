//! Domain models for propbrief
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`SourceRecord`] - One provider's raw fields for an address
//! - [`MergeInput`] - Source name to record, the input of a merge
//! - [`MergedBrief`] - Winning values, provenance and conflicts
//! - [`Brief`] - A merged brief plus its completeness score
//! - [`Contribution`] - A user-submitted correction, pending review

mod brief;
mod contribution;
mod property;
mod record;
mod summary;

pub use brief::{Brief, Conflict, MergedBrief};
pub use contribution::{Contribution, ContributionStatus, NewContribution, ParseError};
pub use property::{Property, SourceDatum};
pub use record::{FieldValue, MergeInput, SourceRecord};
pub use summary::{FallbackReason, Summary, SummarySource};
