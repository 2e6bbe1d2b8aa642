//! Output formatting for human and JSON modes
//!
//! Every command result implements [`Render`]: JSON mode prints the
//! serialized value, human mode prints a short readable report.

use colored::Colorize;
use serde::Serialize;

use crate::api::{
    BriefData, ContributionsData, IngestData, PropertiesData, ReconcileData, RefreshData,
    SourcesData,
};
use crate::core::models::{Contribution, MergedBrief, Summary};
use crate::core::services::coerce;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A result that can be printed in either output mode
pub trait Render: Serialize {
    /// Print for a person
    fn render_human(&self);

    /// Print as pretty JSON
    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }

    /// Render the result based on output mode
    fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }
}

fn score_label(score: u8) -> String {
    let text = format!("{score}/100");
    match score {
        80..=100 => text.green().to_string(),
        50..=79 => text.yellow().to_string(),
        _ => text.red().to_string(),
    }
}

fn print_fields(merged: &MergedBrief) {
    if merged.is_empty() {
        println!("  (no fields)");
        return;
    }
    let width = merged.fields.keys().map(String::len).max().unwrap_or(0);
    for (field, value) in &merged.fields {
        let source = merged.provenance.get(field).map_or("?", String::as_str);
        println!("  {field:<width$}  {}  [{}]", coerce::display(value), source.dimmed());
    }
}

fn print_conflicts(merged: &MergedBrief) {
    for conflict in &merged.conflicts {
        let values: Vec<String> = conflict
            .values
            .iter()
            .map(|(s, v)| format!("{s}={}", coerce::display(v)))
            .collect();
        println!(
            "  {} {}: {} ({})",
            "conflict".yellow().bold(),
            conflict.field,
            conflict.reason,
            values.join(", ")
        );
    }
}

impl Render for IngestData {
    fn render_human(&self) {
        println!("Ingested property {}: {}", self.property.id, self.property.address);
        println!("  Key:          {}", self.property.normalized_address);
        println!("  Completeness: {}", score_label(self.completeness_score));
        if self.sources_used.is_empty() {
            println!("  Sources:      none returned data");
        } else {
            println!("  Sources:      {}", self.sources_used.join(", "));
        }
        if self.conflicts > 0 {
            println!("  Conflicts:    {}", self.conflicts.to_string().yellow());
        }
    }
}

impl Render for RefreshData {
    fn render_human(&self) {
        println!("Refreshed property {} at {}", self.id, self.refreshed_at.to_rfc3339());
        println!("  Completeness: {}", score_label(self.completeness));
        println!("  Conflicts:    {}", self.conflicts_count);
    }
}

impl Render for BriefData {
    fn render_human(&self) {
        let merged = &self.brief.merged;
        println!("Brief for property {}: {}", self.property.id, self.property.address);
        println!("  Completeness: {}", score_label(self.brief.completeness_score));
        println!("  Merged at:    {}", merged.merged_at.to_rfc3339());
        let sources: Vec<&str> = merged.sources_used.iter().map(String::as_str).collect();
        println!("  Sources:      {}\n", sources.join(", "));
        print_fields(merged);
        if !merged.conflicts.is_empty() {
            println!();
            print_conflicts(merged);
        }
        if !self.missing_fields.is_empty() {
            println!("\n  Missing: {}", self.missing_fields.join(", "));
        }
    }
}

impl Render for SourcesData {
    fn render_human(&self) {
        if self.sources.is_empty() {
            println!("No source data for property {}.", self.property_id);
            return;
        }
        println!("Sources for property {}:", self.property_id);
        for datum in &self.sources {
            println!(
                "  - {}: {} field(s), fetched {}",
                datum.source_name,
                datum.data.len(),
                datum.fetched_at.to_rfc3339()
            );
        }
    }
}

impl Render for PropertiesData {
    fn render_human(&self) {
        if self.properties.is_empty() {
            println!("No properties ingested yet.");
            return;
        }
        for p in &self.properties {
            let score = p.completeness_score.map_or_else(|| "-".to_string(), score_label);
            println!("  [{}] {}  {}", p.id, p.address, score);
        }
    }
}

impl Render for Contribution {
    fn render_human(&self) {
        println!("Contribution {} ({})", self.id, self.status);
        println!("  Property: {}", self.property_id);
        println!("  Field:    {} -> {}", self.field, coerce::display(&self.proposed_value));
        if !self.reason.is_empty() {
            println!("  Reason:   {}", self.reason);
        }
        println!("  By:       {}", self.contributor);
    }
}

impl Render for ContributionsData {
    fn render_human(&self) {
        if self.contributions.is_empty() {
            println!("No contributions for property {}.", self.property_id);
            return;
        }
        println!("Contributions for property {}:\n", self.property_id);
        for c in &self.contributions {
            println!(
                "  [{}] {} -> {}  ({}, by {})",
                c.id,
                c.field,
                coerce::display(&c.proposed_value),
                c.status,
                c.contributor
            );
        }
    }
}

impl Render for Summary {
    fn render_human(&self) {
        println!("{}", self.text);
        let origin = self
            .model
            .as_ref()
            .map_or_else(|| self.source.to_string(), |m| format!("{} ({m})", self.source));
        println!("\n  Source:       {}", origin.dimmed());
        println!("  Completeness: {}", score_label(self.completeness_score));
        if let Some(fallback) = &self.fallback {
            println!("  Fallback:     {} - {}", fallback.kind, fallback.message);
        }
    }
}

impl Render for ReconcileData {
    fn render_human(&self) {
        println!("Completeness: {}\n", score_label(self.completeness_score));
        print_fields(&self.merged);
        if !self.merged.conflicts.is_empty() {
            println!();
            print_conflicts(&self.merged);
        }
    }
}
