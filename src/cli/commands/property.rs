//! Property commands - ingest, refresh and inspect briefs

use propbrief::api::{self, Context, IngestRequest};
use propbrief::output::{OutputMode, Render};

/// Ingest an address from every source
pub fn ingest(ctx: &Context, address: &str, mode: OutputMode) -> anyhow::Result<()> {
    let data = api::ingest(
        ctx,
        &IngestRequest {
            address: address.to_string(),
        },
    )?;
    data.render(mode);
    Ok(())
}

/// Rebuild a property's brief from fresh source data
pub fn refresh(ctx: &Context, id: u64, mode: OutputMode) -> anyhow::Result<()> {
    api::refresh(ctx, id)?.render(mode);
    Ok(())
}

/// Show a property's brief
pub fn brief(ctx: &Context, id: u64, mode: OutputMode) -> anyhow::Result<()> {
    api::get_brief(ctx, id)?.render(mode);
    Ok(())
}

/// Show a property's stored source records
pub fn sources(ctx: &Context, id: u64, mode: OutputMode) -> anyhow::Result<()> {
    api::get_sources(ctx, id)?.render(mode);
    Ok(())
}

/// List properties
pub fn list(ctx: &Context, mode: OutputMode) -> anyhow::Result<()> {
    api::list_properties(ctx)?.render(mode);
    Ok(())
}
