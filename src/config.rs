use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{LoaderError, Result};

/// Configuration for one load run. The original workflow hard-coded all of
/// these; here they come from defaults, an optional JSON config file, and
/// CLI flags, in that order of precedence.
#[derive(Debug, Clone, Deserialize)]
pub struct LoadConfig {
    #[serde(default = "default_workbook")]
    pub workbook: PathBuf,
    #[serde(default = "default_database")]
    pub database: PathBuf,
    #[serde(default = "default_table")]
    pub table: String,
    /// Provenance tag written to every row's `ref` column for this run.
    #[serde(default = "default_ref_tag")]
    pub ref_tag: String,
}

fn default_workbook() -> PathBuf {
    PathBuf::from("COMMISSION 24.xlsx")
}

fn default_database() -> PathBuf {
    PathBuf::from("excel_flow.db")
}

fn default_table() -> String {
    "commission".to_string()
}

fn default_ref_tag() -> String {
    "RM".to_string()
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            workbook: default_workbook(),
            database: default_database(),
            table: default_table(),
            ref_tag: default_ref_tag(),
        }
    }
}

impl LoadConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| LoaderError::Config(format!("{}: {e}", path.display())))
    }
}
