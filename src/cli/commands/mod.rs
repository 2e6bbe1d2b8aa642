//! Command implementations

mod contribution;
mod property;
mod reconcile;
mod summary;

pub use contribution::{contribute, contributions, parse_value, review};
pub use property::{brief, ingest, list, refresh, sources};
pub use reconcile::reconcile;
pub use summary::summary;
