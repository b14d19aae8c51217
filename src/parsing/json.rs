use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::core::clustering::{Clustering, FormatError};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not load JSON data from {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("no data in {}", .0.display())]
    Empty(PathBuf),

    #[error("{}: {source}", .path.display())]
    Format {
        path: PathBuf,
        source: FormatError,
    },

    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

/// Load and classify a clustering JSON file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Json`
/// if it is not valid JSON, `ParseError::Empty` if the document holds no
/// data, or `ParseError::Format` if it matches neither clustering shape.
pub fn load_clustering(path: &Path) -> Result<Clustering, ParseError> {
    let content = std::fs::read_to_string(path)?;

    let value: Value = serde_json::from_str(&content).map_err(|source| ParseError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    if is_empty_document(&value) {
        return Err(ParseError::Empty(path.to_path_buf()));
    }

    Clustering::from_value(&value).map_err(|source| ParseError::Format {
        path: path.to_path_buf(),
        source,
    })
}

/// An empty object, empty array or null carries no clustering at all;
/// report it as an empty file rather than an unrecognized shape.
fn is_empty_document(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
