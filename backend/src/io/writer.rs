//! Row-based report output for a generated plan.
//!
//! Layout, in order: a title row, a header row naming the nine room
//! attributes, then per segment a blank row, a label row
//! `"<Phase label> - <start> to <end>"`, and one row per assigned room.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::SchedulePlan;

const TITLE: &str = "--- Generated Schedule ---";

const ATTRIBUTE_HEADER: [&str; 9] = [
    "Building",
    "Room",
    "Capacity",
    "Computers Available",
    "Seating Available",
    "Seating Type",
    "Food Allowed",
    "Priority",
    "Room Type",
];

/// Serializes a `SchedulePlan` to the external report formats.
pub struct ScheduleWriter;

impl ScheduleWriter {
    /// Write the CSV report to `path`. A write failure is fatal and the
    /// error names the attempted filename.
    pub fn write_csv(plan: &SchedulePlan, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("failed to create schedule file \"{}\"", path.display()))?;
        Self::write_csv_to(plan, file)
            .with_context(|| format!("failed to write schedule file \"{}\"", path.display()))?;
        log::info!("schedule written to {}", path.display());
        Ok(())
    }

    /// Write the CSV report to any writer.
    pub fn write_csv_to<W: Write>(plan: &SchedulePlan, writer: W) -> Result<()> {
        // Rows vary in width (title, label, blank, and room rows), so the
        // writer must accept flexible-length records.
        let mut out = csv::WriterBuilder::new().flexible(true).from_writer(writer);

        out.write_record([TITLE])?;
        out.write_record(ATTRIBUTE_HEADER)?;

        for segment in &plan.segments {
            // A zero-field record emits a genuinely blank line; a record
            // holding one empty string would be quoted as `""`.
            out.write_record(None::<&[u8]>)?;
            out.write_record([segment.label()])?;
            for room in &segment.rooms {
                out.write_record(room.to_record())?;
            }
        }

        out.flush()?;
        Ok(())
    }

    /// Supplementary machine-readable export of the plan.
    pub fn plan_to_json(plan: &SchedulePlan) -> Result<String> {
        serde_json::to_string_pretty(plan).context("failed to serialize plan to JSON")
    }
}
