//! Centralized path definitions for propbrief
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.config/propbrief/
//! └── config.toml              # Priority table, scoring, enrichment
//!
//! ~/.local/share/propbrief/
//! └── store.json               # Properties, source data, briefs, contributions
//! ```
//!
//! Both locations follow the platform conventions of the `dirs` crate and
//! can be overridden from the command line.

use std::path::PathBuf;

/// Application directory name under the platform config/data roots
const APP_DIR: &str = "propbrief";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Fallback root when the platform exposes no home directory
fn fallback_root() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".propbrief")
}

/// Get the config directory.
///
/// Returns `~/.config/propbrief/` on Linux.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(fallback_root, |d| d.join(APP_DIR))
}

/// Get the default config file path.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Get the default data directory.
///
/// Returns `~/.local/share/propbrief/` on Linux.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(fallback_root, |d| d.join(APP_DIR))
}
