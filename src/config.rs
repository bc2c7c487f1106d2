// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::render::DEFAULT_ROW_HEIGHT;

/// Settings loaded from an optional YAML file; every key may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub marker_attribute: String,
    pub row_height: u32,
    pub output: PathBuf,
    pub stylesheet: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "CSV grid report".to_string(),
            marker_attribute: "filename".to_string(),
            row_height: DEFAULT_ROW_HEIGHT,
            output: PathBuf::from("output.html"),
            stylesheet: "assets/style.css".to_string(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_yaml(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    /// File values when a path is given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
