//! propbrief - Reconcile property data from disagreeing providers
//!
//! Ingests an address from every known source, merges the results into a
//! scored brief and manages user-submitted corrections.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, missing_debug_implementations)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

mod cli;

/// Main entry point for the propbrief CLI
fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
