// src/table.rs
//
// Typed season table built from extracted column text. Casting applies a
// declared allow-list of numeric columns; any other column the site serves
// stays as text so markup additions don't break the pipeline.

use std::collections::HashMap;

use anyhow::Result;
use serde::Serialize;

use crate::error::ScrapeError;
use crate::extract::ColumnTable;

pub const YEAR_COLUMN: &str = "year_ID";
pub const WIN_LOSS_PERC: &str = "win_loss_perc";
pub const GAMES_BACK: &str = "games_back";

/// Sentinel the site uses in `games_back` for a team leading its division.
pub const NO_GAMES_BACK: &str = "--";

/// Columns cast to small integers.
pub const INT_COLUMNS: &[&str] = &[
    "year_ID",
    "G",
    "W",
    "L",
    "ties",
    "R",
    "RA",
    "batters_used",
    "pitchers_used",
];

/// Columns cast to fractional values. `games_back` is also fractional but is
/// normalized first, so it is listed separately.
pub const FLOAT_COLUMNS: &[&str] = &[
    "win_loss_perc",
    "win_loss_perc_pythag",
    "age_bat",
    "age_pit",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Int(Vec<i16>),
    Float(Vec<f32>),
    Text(Vec<String>),
}

impl Column {
    fn len(&self) -> usize {
        match self {
            Column::Int(v) => v.len(),
            Column::Float(v) => v.len(),
            Column::Text(v) => v.len(),
        }
    }

    fn retain_rows(&self, mask: &[bool]) -> Column {
        fn keep<T: Clone>(values: &[T], mask: &[bool]) -> Vec<T> {
            values
                .iter()
                .zip(mask)
                .filter(|(_, keep)| **keep)
                .map(|(v, _)| v.clone())
                .collect()
        }
        match self {
            Column::Int(v) => Column::Int(keep(v, mask)),
            Column::Float(v) => Column::Float(keep(v, mask)),
            Column::Text(v) => Column::Text(keep(v, mask)),
        }
    }
}

/// One typed row of a team's franchise history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonRecord {
    pub year: i16,
    pub games: i16,
    pub wins: i16,
    pub losses: i16,
    pub ties: i16,
    pub runs_scored: i16,
    pub runs_allowed: i16,
    pub batters_used: i16,
    pub pitchers_used: i16,
    pub win_loss_perc: f32,
    pub win_loss_perc_pythag: f32,
    pub age_bat: f32,
    pub age_pit: f32,
    pub games_back: f32,
}

/// A team's season history: typed columns, one entry per season row, in
/// document order. Construction guarantees every column holds exactly
/// `rows` values and every allow-listed column is present and numeric.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonTable {
    order: Vec<String>,
    columns: HashMap<String, Column>,
    rows: usize,
}

impl SeasonTable {
    /// Cast raw column text into a typed table. Rejects ragged input (a
    /// column whose length differs from the others) and any cast failure.
    pub fn from_columns(raw: &ColumnTable) -> Result<Self> {
        let expected = raw
            .column_names()
            .first()
            .and_then(|name| raw.column(name))
            .map(|c| c.len())
            .unwrap_or(0);
        for name in raw.column_names() {
            let len = raw.column(name).map(|c| c.len()).unwrap_or(0);
            if len != expected {
                return Err(ScrapeError::RaggedTable {
                    column: name.clone(),
                    len,
                    expected,
                }
                .into());
            }
        }

        for required in INT_COLUMNS
            .iter()
            .chain(FLOAT_COLUMNS)
            .chain([&GAMES_BACK])
        {
            if raw.column(required).is_none() {
                return Err(ScrapeError::MissingColumn(required.to_string()).into());
            }
        }

        let mut order = Vec::with_capacity(raw.column_names().len());
        let mut columns = HashMap::new();
        for name in raw.column_names() {
            let values = raw.column(name).unwrap_or(&[]);
            let column = if INT_COLUMNS.contains(&name.as_str()) {
                Column::Int(cast_ints(name, values)?)
            } else if FLOAT_COLUMNS.contains(&name.as_str()) {
                Column::Float(cast_floats(name, values)?)
            } else if name == GAMES_BACK {
                let normalized: Vec<String> = values
                    .iter()
                    .map(|v| normalize_games_back(v).to_string())
                    .collect();
                Column::Float(cast_floats(name, &normalized)?)
            } else {
                Column::Text(values.to_vec())
            };
            order.push(name.clone());
            columns.insert(name.clone(), column);
        }

        Ok(SeasonTable {
            order,
            columns,
            rows: expected,
        })
    }

    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn column_names(&self) -> &[String] {
        &self.order
    }

    pub fn years(&self) -> &[i16] {
        match self.columns.get(YEAR_COLUMN) {
            Some(Column::Int(v)) => v,
            _ => &[],
        }
    }

    fn int_column(&self, name: &str) -> &[i16] {
        match self.columns.get(name) {
            Some(Column::Int(v)) => v,
            _ => &[],
        }
    }

    fn float_column(&self, name: &str) -> &[f32] {
        match self.columns.get(name) {
            Some(Column::Float(v)) => v,
            _ => &[],
        }
    }

    pub fn text_column(&self, name: &str) -> Option<&[String]> {
        match self.columns.get(name) {
            Some(Column::Text(v)) => Some(v),
            _ => None,
        }
    }

    /// Keep rows whose year lies in `[start, end]`; either bound optional.
    /// Applying both bounds in either order yields the same table.
    pub fn filter_seasons(&self, start: Option<i16>, end: Option<i16>) -> SeasonTable {
        if start.is_none() && end.is_none() {
            return self.clone();
        }
        let mask: Vec<bool> = self
            .years()
            .iter()
            .map(|&year| start.map_or(true, |s| year >= s) && end.map_or(true, |e| year <= e))
            .collect();
        let columns = self
            .columns
            .iter()
            .map(|(name, col)| (name.clone(), col.retain_rows(&mask)))
            .collect();
        SeasonTable {
            order: self.order.clone(),
            columns,
            rows: mask.iter().filter(|keep| **keep).count(),
        }
    }

    /// Arithmetic mean of a fractional column. `None` when the table has no
    /// rows (or the column is not fractional).
    pub fn mean(&self, name: &str) -> Option<f64> {
        let values = self.float_column(name);
        if values.is_empty() {
            return None;
        }
        Some(values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64)
    }

    /// Rows as typed records, in table order.
    pub fn records(&self) -> Vec<SeasonRecord> {
        (0..self.rows)
            .map(|i| SeasonRecord {
                year: self.int_column("year_ID")[i],
                games: self.int_column("G")[i],
                wins: self.int_column("W")[i],
                losses: self.int_column("L")[i],
                ties: self.int_column("ties")[i],
                runs_scored: self.int_column("R")[i],
                runs_allowed: self.int_column("RA")[i],
                batters_used: self.int_column("batters_used")[i],
                pitchers_used: self.int_column("pitchers_used")[i],
                win_loss_perc: self.float_column("win_loss_perc")[i],
                win_loss_perc_pythag: self.float_column("win_loss_perc_pythag")[i],
                age_bat: self.float_column("age_bat")[i],
                age_pit: self.float_column("age_pit")[i],
                games_back: self.float_column(GAMES_BACK)[i],
            })
            .collect()
    }
}

/// Replace the whole-cell "no games back" sentinel with "0". Any other
/// value, numeric strings included, passes through untouched.
pub fn normalize_games_back(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed == NO_GAMES_BACK {
        "0"
    } else {
        trimmed
    }
}

fn cast_ints(column: &str, values: &[String]) -> Result<Vec<i16>> {
    values
        .iter()
        .enumerate()
        .map(|(row, v)| {
            v.trim().parse::<i16>().map_err(|_| {
                ScrapeError::Cast {
                    column: column.to_string(),
                    row,
                    value: v.clone(),
                    ty: "i16",
                }
                .into()
            })
        })
        .collect()
}

fn cast_floats(column: &str, values: &[String]) -> Result<Vec<f32>> {
    values
        .iter()
        .enumerate()
        .map(|(row, v)| {
            v.trim().parse::<f32>().map_err(|_| {
                ScrapeError::Cast {
                    column: column.to_string(),
                    row,
                    value: v.clone(),
                    ty: "f32",
                }
                .into()
            })
        })
        .collect()
}
