//! Contribution commands - propose and review corrections

use propbrief::api::{self, Context, CreateContributionRequest, ReviewContributionRequest};
use propbrief::core::models::FieldValue;
use propbrief::output::{OutputMode, Render};

/// Interpret a command-line value as JSON, falling back to a plain string
///
/// `2700` becomes a number and `true` a boolean, while `0.25 acres` stays
/// text.
#[must_use]
pub fn parse_value(raw: &str) -> FieldValue {
    serde_json::from_str(raw).unwrap_or_else(|_| FieldValue::String(raw.to_string()))
}

/// Submit a contribution
pub fn contribute(
    ctx: &Context,
    id: u64,
    req: &CreateContributionRequest,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let contribution = api::create_contribution(ctx, id, req)?;
    if mode == OutputMode::Human {
        println!("Recorded contribution (pending review):");
    }
    contribution.render(mode);
    Ok(())
}

/// List contributions for a property
pub fn contributions(ctx: &Context, id: u64, mode: OutputMode) -> anyhow::Result<()> {
    api::list_contributions(ctx, id)?.render(mode);
    Ok(())
}

/// Accept or reject a contribution
pub fn review(ctx: &Context, id: u64, status: &str, mode: OutputMode) -> anyhow::Result<()> {
    let req = ReviewContributionRequest {
        status: status.to_string(),
    };
    api::review_contribution(ctx, id, &req)?.render(mode);
    Ok(())
}
