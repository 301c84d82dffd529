use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::ScaffoldError;

/// Record of how a project was generated, written as JSON at the project root.
#[derive(Debug, Serialize)]
pub struct Metadata<'a, C: Serialize> {
    pub generator: &'a str,
    pub version: &'a str,
    pub created: String,
    #[serde(flatten)]
    pub choices: C,
}

impl<'a, C: Serialize> Metadata<'a, C> {
    pub fn new(generator: &'a str, version: &'a str, created: DateTime<Utc>, choices: C) -> Self {
        Self {
            generator,
            version,
            created: created.to_rfc3339_opts(SecondsFormat::Secs, true),
            choices,
        }
    }

    /// Write as pretty JSON to `<project_dir>/<file_name>`.
    pub fn write(&self, project_dir: &Path, file_name: &str) -> Result<(), ScaffoldError> {
        let path = project_dir.join(file_name);
        let mut json = serde_json::to_string_pretty(self)
            .map_err(|e| ScaffoldError::Config(format!("metadata: {e}")))?;
        json.push('\n');
        std::fs::write(&path, json).map_err(|source| ScaffoldError::Write { path, source })
    }
}
