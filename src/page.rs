// src/page.rs
//! Discover render targets in an HTML page.

use anyhow::{anyhow, bail, Result};
use scraper::{Html, Selector};
use serde::Serialize;

/// An element that asked for a grid: its marker value names the resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Container {
    /// Position among all targets, in document order.
    pub index: usize,
    pub resource: String,
    pub id: Option<String>,
}

impl Container {
    /// Stable DOM id for the rendered grid.
    pub fn dom_id(&self) -> String {
        self.id
            .clone()
            .unwrap_or_else(|| format!("grid-{}", self.index))
    }
}

/// Every element carrying `attribute`, in document order.
pub fn scan_page(html: &str, attribute: &str) -> Result<Vec<Container>> {
    if attribute.is_empty()
        || !attribute
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        bail!("invalid marker attribute {:?}", attribute);
    }

    let selector = Selector::parse(&format!("[{}]", attribute))
        .map_err(|e| anyhow!("selector for attribute {}: {:?}", attribute, e))?;
    let doc = Html::parse_document(html);

    Ok(doc
        .select(&selector)
        .filter_map(|el| {
            let value = el.value();
            value.attr(attribute).map(|resource| {
                (
                    resource.trim().to_string(),
                    value.attr("id").map(str::to_string),
                )
            })
        })
        .enumerate()
        .map(|(index, (resource, id))| Container {
            index,
            resource,
            id,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html><body>
  <div id="people" filename="people.csv"></div>
  <p>no grid here</p>
  <section><div filename="data/prices.csv"></div></section>
  <span filename=" spaced.csv "></span>
</body></html>"#;

    #[test]
    fn finds_marked_elements_in_order() -> Result<()> {
        let found = scan_page(PAGE, "filename")?;
        let names: Vec<&str> = found.iter().map(|c| c.resource.as_str()).collect();
        assert_eq!(names, vec!["people.csv", "data/prices.csv", "spaced.csv"]);
        assert_eq!(found[0].id.as_deref(), Some("people"));
        assert_eq!(found[1].id, None);
        assert_eq!(found[2].index, 2);
        Ok(())
    }

    #[test]
    fn dom_id_falls_back_to_index() -> Result<()> {
        let found = scan_page(PAGE, "filename")?;
        assert_eq!(found[0].dom_id(), "people");
        assert_eq!(found[1].dom_id(), "grid-1");
        Ok(())
    }

    #[test]
    fn custom_attribute() -> Result<()> {
        let html = r#"<div data-csv="x.csv"></div><div filename="y.csv"></div>"#;
        let found = scan_page(html, "data-csv")?;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].resource, "x.csv");
        Ok(())
    }

    #[test]
    fn page_without_targets() -> Result<()> {
        assert!(scan_page("<html><body></body></html>", "filename")?.is_empty());
        Ok(())
    }

    #[test]
    fn rejects_bad_attribute() {
        assert!(scan_page(PAGE, "file name").is_err());
        assert!(scan_page(PAGE, "").is_err());
    }
}
