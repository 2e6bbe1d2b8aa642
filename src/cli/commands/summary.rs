//! Summary command - narrative description of a brief

use propbrief::api::{self, Context, SummaryRequest};
use propbrief::output::{OutputMode, Render};

/// Summarise a property's brief
pub fn summary(
    ctx: &Context,
    id: u64,
    prompt_override: Option<String>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    api::summary(ctx, id, &SummaryRequest { prompt_override })?.render(mode);
    Ok(())
}
