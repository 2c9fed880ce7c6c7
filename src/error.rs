// src/error.rs

use thiserror::Error;

/// Everything that can go wrong between a team code and its season table.
/// None of these are retried; the run aborts on the first one.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("must provide a team")]
    MissingTeam,

    #[error("navigation failed for {url}: {reason}")]
    Navigation { url: String, reason: String },

    #[error("table `{0}` not found in page markup")]
    TableNotFound(String),

    #[error("expected column `{0}` missing from extracted table")]
    MissingColumn(String),

    #[error("ragged table: column `{column}` has {len} values, expected {expected}")]
    RaggedTable {
        column: String,
        len: usize,
        expected: usize,
    },

    #[error("column `{column}` row {row}: cannot cast `{value}` to {ty}")]
    Cast {
        column: String,
        row: usize,
        value: String,
        ty: &'static str,
    },
}
