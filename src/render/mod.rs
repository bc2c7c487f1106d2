// src/render/mod.rs
//! Grid rendering: widget options derived from a table, and the renderers
//! that turn them into output fragments.

pub mod html;
pub mod json;

use anyhow::{bail, Result};
use serde::Serialize;
use std::str::FromStr;
use std::sync::Arc;

use crate::page::Container;
use crate::parse::{Row, Table};

pub use html::HtmlGrid;
pub use json::JsonGrid;

pub const DEFAULT_ROW_HEIGHT: u32 = 40;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    pub text: String,
}

/// One grid column, named after a header entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub id: String,
    pub header: Vec<HeaderCell>,
}

/// Options handed to the grid widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    pub auto_width: bool,
    pub adjust: bool,
    pub header_row_height: u32,
    pub row_height: u32,
    pub height: u32,
    pub columns: Vec<Column>,
    pub data: Vec<Row>,
}

impl GridOptions {
    /// Columns mirror the header 1:1; the height leaves room for the header
    /// row plus one spare row.
    pub fn from_table(table: &Table, row_height: u32) -> Self {
        let columns = table
            .header
            .iter()
            .map(|name| Column {
                id: name.clone(),
                header: vec![HeaderCell { text: name.clone() }],
            })
            .collect();
        let slots = u32::try_from(table.row_count())
            .unwrap_or(u32::MAX)
            .saturating_add(2);

        GridOptions {
            auto_width: true,
            adjust: true,
            header_row_height: row_height,
            row_height,
            height: row_height.saturating_mul(slots),
            columns,
            data: table.rows.clone(),
        }
    }
}

/// Turns one table into a fragment placed inside `container`.
pub trait Renderer: Send + Sync {
    fn render(&self, container: &Container, table: &Table) -> Result<String>;
}

/// Output flavour selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Html,
    Json,
}

impl Format {
    pub fn renderer(self, row_height: u32) -> Arc<dyn Renderer> {
        match self {
            Format::Html => Arc::new(HtmlGrid::new(row_height)),
            Format::Json => Arc::new(JsonGrid::new(row_height)),
        }
    }
}

impl FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Format::Html),
            "json" => Ok(Format::Json),
            other => bail!("unknown output format {:?} (expected html or json)", other),
        }
    }
}

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::build_table;

    #[test]
    fn options_follow_header_and_row_count() {
        let table = build_table("name,age\nAlice,30\nCarol,25");
        let opts = GridOptions::from_table(&table, DEFAULT_ROW_HEIGHT);
        assert_eq!(opts.height, 40 * 4);
        assert_eq!(opts.row_height, 40);
        assert_eq!(opts.header_row_height, 40);
        assert!(opts.auto_width && opts.adjust);
        let ids: Vec<&str> = opts.columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["name", "age"]);
        assert_eq!(opts.columns[1].header[0].text, "age");
        assert_eq!(opts.data.len(), 2);
    }

    #[test]
    fn empty_table_still_reserves_two_rows() {
        let opts = GridOptions::from_table(&build_table("a,b\n"), 25);
        assert_eq!(opts.height, 50);
        assert!(opts.data.is_empty());
    }

    #[test]
    fn options_serialize_with_widget_keys() -> Result<()> {
        let opts = GridOptions::from_table(&build_table("x\n1"), 40);
        let v = serde_json::to_value(&opts)?;
        assert_eq!(v["autoWidth"], true);
        assert_eq!(v["headerRowHeight"], 40);
        assert_eq!(v["height"], 120);
        assert_eq!(v["columns"][0]["header"][0]["text"], "x");
        assert_eq!(v["data"][0]["x"], "1");
        Ok(())
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("HTML".parse::<Format>().unwrap(), Format::Html);
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert!("xml".parse::<Format>().is_err());
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }
}
