//! # Data Sources
//!
//! Where a policy data document comes from, and how it becomes a
//! `serde_json::Value`. Files are parsed by extension: `.yaml`/`.yml` as
//! YAML, anything else as JSON. Mapping order is preserved for both, since
//! catalog order and treatment order are observable.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::DataLoadError;

/// A policy data document to load.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// A JSON or YAML file on disk.
    Path(PathBuf),
    /// JSON text already in memory.
    Json(String),
    /// YAML text already in memory.
    Yaml(String),
    /// An already-parsed document.
    Value(Value),
}

impl CatalogSource {
    /// A file source.
    pub fn path(path: impl AsRef<Path>) -> Self {
        Self::Path(path.as_ref().to_path_buf())
    }

    /// Read and parse the source into a JSON value.
    ///
    /// # Errors
    ///
    /// Returns `DataLoadError::Unreachable` if the file cannot be read and
    /// `DataLoadError::Malformed` if the text does not parse.
    pub fn read(&self) -> Result<Value, DataLoadError> {
        match self {
            Self::Path(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    DataLoadError::Unreachable {
                        source_name: self.to_string(),
                        reason: format!("cannot read file: {e}"),
                    }
                })?;
                let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
                match ext {
                    "yaml" | "yml" => self.parse_yaml(&content),
                    _ => self.parse_json(&content),
                }
            }
            Self::Json(text) => self.parse_json(text),
            Self::Yaml(text) => self.parse_yaml(text),
            Self::Value(value) => Ok(value.clone()),
        }
    }

    fn parse_json(&self, text: &str) -> Result<Value, DataLoadError> {
        serde_json::from_str(text).map_err(|e| DataLoadError::Malformed {
            source_name: self.to_string(),
            reason: format!("invalid JSON: {e}"),
        })
    }

    fn parse_yaml(&self, text: &str) -> Result<Value, DataLoadError> {
        let yaml: serde_yaml::Value =
            serde_yaml::from_str(text).map_err(|e| DataLoadError::Malformed {
                source_name: self.to_string(),
                reason: format!("invalid YAML: {e}"),
            })?;
        yaml_to_json_value(&yaml).map_err(|reason| DataLoadError::Malformed {
            source_name: self.to_string(),
            reason: format!("YAML-to-JSON conversion failed: {reason}"),
        })
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Json(_) => f.write_str("<inline JSON>"),
            Self::Yaml(_) => f.write_str("<inline YAML>"),
            Self::Value(_) => f.write_str("<in-memory document>"),
        }
    }
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Policy documents use only the JSON-compatible subset of YAML. Tags are
/// dropped and the tagged value kept.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<Value>, String> = seq.iter().map(yaml_to_json_value).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key type: {other:?}")),
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}
