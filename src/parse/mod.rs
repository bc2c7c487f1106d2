// src/parse/mod.rs
//! Turn raw delimited text into a header plus keyed rows.

pub mod tokenize;

use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

pub use tokenize::tokenize_line;

/// One data line, keyed by header name. Duplicate header names resolve
/// last-write-wins.
pub type Row = HashMap<String, String>;

/// Parsed document: column names in file order plus the rows that matched them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Values of `row` laid out in header order.
    pub fn ordered_values<'a>(&'a self, row: &'a Row) -> impl Iterator<Item = &'a str> + 'a {
        self.header
            .iter()
            .map(move |name| row.get(name).map(String::as_str).unwrap_or(""))
    }
}

/// Build a [`Table`] from the full text of a document.
///
/// The first line is the header, split on every comma. Each later line is
/// tokenized with [`tokenize_line`]; lines whose field count differs from the
/// header length are dropped without error.
pub fn build_table(text: &str) -> Table {
    if text.is_empty() {
        return Table::default();
    }

    let mut lines = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line));

    let header: Vec<String> = match lines.next() {
        Some(first) => first.split(',').map(str::to_string).collect(),
        None => return Table::default(),
    };

    let mut rows = Vec::new();
    let mut dropped = 0usize;
    for line in lines {
        let fields = tokenize_line(line);
        if fields.len() != header.len() {
            dropped += 1;
            continue;
        }
        rows.push(header.iter().cloned().zip(fields).collect::<Row>());
    }

    info!(
        columns = header.len(),
        rows = rows.len(),
        dropped,
        "built table"
    );
    debug!(?rows, "parsed rows");

    Table { header, rows }
}
