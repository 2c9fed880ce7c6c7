// src/summary.rs
//
// The run's single artifact: team display name to average win percentage,
// serialized once as indented JSON. Key order is insertion order, which the
// aggregator keeps equal to catalog order.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

/// Where the aggregator writes its output, relative to the working dir.
pub const SUMMARY_PATH: &str = "data/team_win_pct.json";

/// Insertion-ordered mapping from team name to average win percentage.
/// Teams whose filtered history was empty carry a `null` entry.
#[derive(Debug, Default)]
pub struct Summary {
    entries: Map<String, Value>,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a team's average, rounded to three decimals. `None` records
    /// an explicit null.
    pub fn record(&mut self, team_name: &str, avg_win_pct: Option<f64>) {
        let value = match avg_win_pct {
            Some(v) => Value::from((v * 1000.0).round() / 1000.0),
            None => Value::Null,
        };
        self.entries.insert(team_name.to_string(), value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serialize the summary to `path` as JSON with 4-space indentation,
/// overwriting whatever is there. Creates the parent directory if needed.
pub fn write_summary(path: impl AsRef<Path>, summary: &Summary) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut ser =
        serde_json::Serializer::with_formatter(BufWriter::new(file), PrettyFormatter::with_indent(b"    "));
    summary
        .entries
        .serialize(&mut ser)
        .with_context(|| format!("failed to write summary to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_teams_in_insertion_order_with_four_space_indent() {
        let mut summary = Summary::new();
        summary.record("TEAM_A", Some(0.5));
        summary.record("TEAM_B", Some(0.52));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("team_win_pct.json");
        write_summary(&path, &summary).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "{\n    \"TEAM_A\": 0.5,\n    \"TEAM_B\": 0.52\n}"
        );
    }

    #[test]
    fn averages_round_to_three_decimals() {
        let mut summary = Summary::new();
        summary.record("TEAM_A", Some(0.5124999));
        let json = serde_json::to_string(&summary.entries).unwrap();
        assert_eq!(json, r#"{"TEAM_A":0.512}"#);
    }

    #[test]
    fn empty_history_records_null() {
        let mut summary = Summary::new();
        summary.record("TEAM_A", None);
        let json = serde_json::to_string(&summary.entries).unwrap();
        assert_eq!(json, r#"{"TEAM_A":null}"#);
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "stale").unwrap();

        let mut summary = Summary::new();
        summary.record("TEAM_A", Some(0.5));
        write_summary(&path, &summary).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with('{'));
        assert!(!written.contains("stale"));
    }
}
