//! Core domain logic for propbrief
//!
//! This module contains pure reconciliation and scoring logic with no I/O
//! dependencies. All external interactions are abstracted through port
//! traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`SourceRecord`, `MergedBrief`, `Conflict`, `Contribution`)
//! - `services/` - Reconciler, scorer and summary logic
//! - `ports/` - Trait definitions for external collaborators

pub mod models;
pub mod ports;
pub mod services;
