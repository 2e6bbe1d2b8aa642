//! Reconcile command - merge a file of source records without storing

use std::fs;
use std::path::Path;

use anyhow::Context as _;
use propbrief::api::{self, Context};
use propbrief::core::models::MergeInput;
use propbrief::output::{OutputMode, Render};

/// Reconcile `{source: {field: value}}` read from a JSON file
pub fn reconcile(ctx: &Context, file: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let content =
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
    let sources: MergeInput = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a map of source records", file.display()))?;

    api::reconcile_sources(ctx, &sources).render(mode);
    Ok(())
}
