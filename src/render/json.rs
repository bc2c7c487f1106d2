// src/render/json.rs

use anyhow::{Context, Result};

use super::{GridOptions, Renderer};
use crate::page::Container;
use crate::parse::Table;

/// Emits the widget options themselves as pretty JSON.
#[derive(Debug, Clone)]
pub struct JsonGrid {
    row_height: u32,
}

impl JsonGrid {
    pub fn new(row_height: u32) -> Self {
        Self { row_height }
    }
}

impl Renderer for JsonGrid {
    fn render(&self, container: &Container, table: &Table) -> Result<String> {
        let opts = GridOptions::from_table(table, self.row_height);
        serde_json::to_string_pretty(&opts)
            .with_context(|| format!("serializing grid for {}", container.resource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::build_table;

    #[test]
    fn json_round_trips_through_value() -> Result<()> {
        let container = Container {
            index: 3,
            resource: "t.csv".to_string(),
            id: Some("t".to_string()),
        };
        let table = build_table("a,b\n1,\"2,5\"\nbad");
        let out = JsonGrid::new(30).render(&container, &table)?;
        let v: serde_json::Value = serde_json::from_str(&out)?;
        assert_eq!(v["rowHeight"], 30);
        assert_eq!(v["height"], 90);
        assert_eq!(v["data"].as_array().map(Vec::len), Some(1));
        assert_eq!(v["data"][0]["b"], "2,5");
        Ok(())
    }
}
