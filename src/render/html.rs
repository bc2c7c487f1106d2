// src/render/html.rs

use anyhow::Result;
use std::fmt::Write;

use super::{escape_html, GridOptions, Renderer};
use crate::page::Container;
use crate::parse::Table;

/// Renders a grid as a fixed-height, scrollable HTML table.
#[derive(Debug, Clone)]
pub struct HtmlGrid {
    row_height: u32,
}

impl HtmlGrid {
    pub fn new(row_height: u32) -> Self {
        Self { row_height }
    }
}

impl Renderer for HtmlGrid {
    fn render(&self, container: &Container, table: &Table) -> Result<String> {
        let opts = GridOptions::from_table(table, self.row_height);
        let mut out = String::new();

        let width = if opts.auto_width { "width:100%;" } else { "" };
        writeln!(
            out,
            r#"<div class="grid" id="{}" data-resource="{}" style="height:{}px;overflow:auto;">"#,
            escape_html(&container.dom_id()),
            escape_html(&container.resource),
            opts.height
        )?;
        writeln!(
            out,
            r#"<table class="grid-table{}" style="{}border-collapse:collapse;">"#,
            if opts.adjust { " grid-adjust" } else { "" },
            width
        )?;

        write!(
            out,
            r#"<thead><tr style="height:{}px;">"#,
            opts.header_row_height
        )?;
        for column in &opts.columns {
            for cell in &column.header {
                write!(
                    out,
                    r#"<th data-column="{}">{}</th>"#,
                    escape_html(&column.id),
                    escape_html(&cell.text)
                )?;
            }
        }
        writeln!(out, "</tr></thead>")?;

        writeln!(out, "<tbody>")?;
        for row in &table.rows {
            write!(out, r#"<tr style="height:{}px;">"#, opts.row_height)?;
            for value in table.ordered_values(row) {
                write!(out, "<td>{}</td>", escape_html(value))?;
            }
            writeln!(out, "</tr>")?;
        }
        writeln!(out, "</tbody>")?;
        writeln!(out, "</table>")?;
        writeln!(out, "</div>")?;

        Ok(out)
    }
}
