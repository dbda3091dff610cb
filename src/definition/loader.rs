use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::ClassifierSet;

#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Unsupported definition format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// Serialized forms a classifier set can be exchanged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Json,
    Yaml,
}

impl DefinitionFormat {
    /// Pick a format from the file extension (`json`, `yaml`, `yml`).
    pub fn from_path(path: &Path) -> Result<Self, DefinitionError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(DefinitionFormat::Json),
            Some("yaml") | Some("yml") => Ok(DefinitionFormat::Yaml),
            _ => Err(DefinitionError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

pub fn parse_definition(input: &str, format: DefinitionFormat) -> Result<ClassifierSet, DefinitionError> {
    let set = match format {
        DefinitionFormat::Json => serde_json::from_str(input)?,
        DefinitionFormat::Yaml => serde_yaml::from_str(input)?,
    };
    Ok(set)
}

pub fn render_definition(set: &ClassifierSet, format: DefinitionFormat) -> Result<String, DefinitionError> {
    let out = match format {
        DefinitionFormat::Json => serde_json::to_string_pretty(set)?,
        DefinitionFormat::Yaml => serde_yaml::to_string(set)?,
    };
    Ok(out)
}

/// Read a classifier set from disk, format chosen by extension.
pub fn load_definition(path: &Path) -> Result<ClassifierSet, DefinitionError> {
    let format = DefinitionFormat::from_path(path)?;
    let raw = fs::read_to_string(path)?;
    let set = parse_definition(&raw, format)?;

    tracing::debug!(
        path = %path.display(),
        set_id = set.id,
        classifications = set.classifiers.len(),
        "loaded classifier set"
    );

    Ok(set)
}

/// Write a classifier set to disk, format chosen by extension.
pub fn save_definition(set: &ClassifierSet, path: &Path) -> Result<(), DefinitionError> {
    let format = DefinitionFormat::from_path(path)?;
    let rendered = render_definition(set, format)?;
    fs::write(path, rendered)?;
    Ok(())
}
