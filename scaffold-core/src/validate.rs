use crate::ScaffoldError;

/// Manifest formats recognized by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    Json,
    Toml,
    Yaml,
}

impl ManifestKind {
    pub fn from_path(path: &str) -> Option<Self> {
        let ext = path.rsplit_once('.').map(|(_, ext)| ext)?;
        match ext {
            "json" => Some(ManifestKind::Json),
            "toml" => Some(ManifestKind::Toml),
            "yaml" | "yml" => Some(ManifestKind::Yaml),
            _ => None,
        }
    }
}

/// Parse `bytes` according to the extension of `path`. Files with other
/// extensions pass unchecked.
pub fn check_manifest(path: &str, bytes: &[u8]) -> Result<(), ScaffoldError> {
    let Some(kind) = ManifestKind::from_path(path) else {
        return Ok(());
    };
    let invalid = |reason: String| ScaffoldError::InvalidManifest {
        path: path.to_string(),
        reason,
    };
    let text = std::str::from_utf8(bytes).map_err(|e| invalid(e.to_string()))?;

    match kind {
        ManifestKind::Json => serde_json::from_str::<serde_json::Value>(text)
            .map(drop)
            .map_err(|e| invalid(e.to_string())),
        ManifestKind::Toml => text
            .parse::<toml_edit::DocumentMut>()
            .map(drop)
            .map_err(|e| invalid(e.to_string())),
        ManifestKind::Yaml => serde_yaml::from_str::<serde_yaml::Value>(text)
            .map(drop)
            .map_err(|e| invalid(e.to_string())),
    }
}
