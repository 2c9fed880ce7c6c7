// src/extract.rs
//
// Pulls one attribute-tagged HTML table apart into column-oriented text.
// Columns are discovered from the `data-stat` attribute on each cell rather
// than declared up front, so new columns on the site flow through untouched.

use std::collections::HashMap;

use anyhow::Result;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;

static TABLE_SEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table").expect("invalid table selector"));
static ROW_SEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tbody > tr").expect("invalid row selector"));
static CELL_SEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("th, td").expect("invalid cell selector"));
static LINK_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("invalid selector"));
static SPAN_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("span").expect("invalid selector"));
static STRONG_SEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("strong").expect("invalid selector"));

/// Column-oriented text extracted from one table: `data-stat` name to the
/// cell texts under it, one entry per data row, in document order. Column
/// order is first-seen order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ColumnTable {
    order: Vec<String>,
    columns: HashMap<String, Vec<String>>,
}

impl ColumnTable {
    fn push(&mut self, name: &str, value: String) {
        if !self.columns.contains_key(name) {
            self.order.push(name.to_string());
        }
        self.columns.entry(name.to_string()).or_default().push(value);
    }

    /// Column names in first-seen order.
    pub fn column_names(&self) -> &[String] {
        &self.order
    }

    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Locate `table#<table_id>` in `markup` and extract its body rows into a
/// [`ColumnTable`]. Rows carrying a `thead` class are section headers, not
/// data; rows with no cells at all are skipped outright.
pub fn extract_table(markup: &str, table_id: &str) -> Result<ColumnTable> {
    let document = Html::parse_document(markup);
    let table = document
        .select(&TABLE_SEL)
        .find(|t| t.value().attr("id") == Some(table_id))
        .ok_or_else(|| ScrapeError::TableNotFound(table_id.to_string()))?;

    let mut out = ColumnTable::default();
    for row in table.select(&ROW_SEL) {
        if is_header_row(&row) {
            continue;
        }
        let cells: Vec<ElementRef> = row.select(&CELL_SEL).collect();
        if cells.is_empty() {
            continue;
        }
        for cell in cells {
            // A cell without data-stat names no column; nothing to key it by.
            if let Some(name) = cell.value().attr("data-stat") {
                out.push(name, cell_text(&cell));
            }
        }
    }
    Ok(out)
}

fn is_header_row(row: &ElementRef) -> bool {
    row.value()
        .attr("class")
        .map(|c| c.split_whitespace().any(|cls| cls == "thead"))
        .unwrap_or(false)
}

/// The display text of a cell. The site wraps the interesting text in a
/// link, label span, or strong tag depending on the column; prefer those
/// over the cell's raw text, in that order.
fn cell_text(cell: &ElementRef) -> String {
    for sel in [&*LINK_SEL, &*SPAN_SEL, &*STRONG_SEL] {
        if let Some(el) = cell.select(sel).next() {
            return el.text().collect();
        }
    }
    cell.text().collect()
}
