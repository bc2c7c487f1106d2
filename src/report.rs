// src/report.rs
//! Assemble rendered grids into one output document.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::{fs, path::Path};
use tracing::info;

use crate::config::Config;
use crate::pipeline::Rendered;
use crate::render::{escape_html, Format};

#[derive(Serialize)]
struct JsonSection<'a> {
    resource: &'a str,
    id: String,
    grid: serde_json::Value,
}

pub struct Report {
    title: String,
    stylesheet: String,
    format: Format,
    generated_at: DateTime<Local>,
    sections: Vec<Rendered>,
}

impl Report {
    pub fn new(config: &Config, format: Format) -> Self {
        Self {
            title: config.title.clone(),
            stylesheet: config.stylesheet.clone(),
            format,
            generated_at: Local::now(),
            sections: Vec::new(),
        }
    }

    pub fn insert(&mut self, rendered: Vec<Rendered>) {
        self.sections.extend(rendered);
        self.sections.sort_by_key(|r| r.container.index);
    }

    pub fn tables_processed(&self) -> usize {
        self.sections.len()
    }

    pub fn generate(&self) -> Result<String> {
        match self.format {
            Format::Html => Ok(self.generate_html()),
            Format::Json => self.generate_json(),
        }
    }

    fn generate_html(&self) -> String {
        let title = escape_html(&self.title);
        let mut doc = String::new();
        doc.push_str("<!DOCTYPE html>\n<html>\n  <head>\n");
        doc.push_str("    <meta charset=\"utf-8\"/>\n");
        doc.push_str(&format!("    <title>{}</title>\n", title));
        doc.push_str(&format!(
            "    <link href=\"{}\" rel=\"stylesheet\" type=\"text/css\"/>\n",
            escape_html(&self.stylesheet)
        ));
        doc.push_str("  </head>\n  <body>\n");
        doc.push_str(&format!("    <h1>{}</h1>\n", title));
        doc.push_str(&format!(
            "    <p>Report generated at {}</p>\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        ));
        doc.push_str(&format!(
            "    <p>Tables processed: {}</p>\n",
            self.tables_processed()
        ));
        doc.push_str("    <h2>Results</h2>\n");
        for section in &self.sections {
            doc.push_str(&format!(
                "    <div class=\"grid-container\" data-filename=\"{}\">\n",
                escape_html(&section.container.resource)
            ));
            doc.push_str(&section.fragment);
            doc.push_str("    </div>\n");
        }
        doc.push_str("  </body>\n</html>\n");
        doc
    }

    fn generate_json(&self) -> Result<String> {
        let sections = self
            .sections
            .iter()
            .map(|s| {
                let grid: serde_json::Value = serde_json::from_str(&s.fragment)
                    .with_context(|| format!("grid for {} is not JSON", s.container.resource))?;
                Ok(JsonSection {
                    resource: &s.container.resource,
                    id: s.container.dom_id(),
                    grid,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(serde_json::to_string_pretty(&sections)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(path, self.generate()?)
            .with_context(|| format!("writing report {}", path.display()))?;
        info!(path = %path.display(), tables = self.tables_processed(), "report saved");
        Ok(())
    }
}
