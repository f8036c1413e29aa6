//! File service - reading and writing dataset JSON files

use crate::models::{DatasetError, DatasetResult, Question};
use serde_json::Value;
use std::io::Write;
use std::path::Path;

/// Load a dataset as typed question records
pub fn load_questions(path: &Path) -> DatasetResult<Vec<Question>> {
    let content = read_dataset(path)?;
    serde_json::from_str(&content).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a dataset as raw JSON records
///
/// Used by the verifier, which must inspect records that may be missing
/// required keys and therefore would not deserialize into `Question`.
pub fn load_records(path: &Path) -> DatasetResult<Vec<Value>> {
    let content = read_dataset(path)?;
    let value: Value = serde_json::from_str(&content).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Array(records) => Ok(records),
        _ => Err(DatasetError::NotAnArray {
            path: path.to_path_buf(),
        }),
    }
}

/// Load a dataset, treating a missing file as an empty bank
pub fn load_questions_or_empty(path: &Path) -> DatasetResult<Vec<Question>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    load_questions(path)
}

/// Write a dataset as pretty-printed JSON
///
/// The content goes to a temp file in the target directory first and is then
/// renamed over the target, so an interrupted write leaves the old file intact.
pub fn save_questions(path: &Path, questions: &[Question]) -> DatasetResult<()> {
    let mut content =
        serde_json::to_string_pretty(questions).map_err(|source| DatasetError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
    content.push('\n');

    let write_err = |source: std::io::Error| DatasetError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(write_err)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}

fn read_dataset(path: &Path) -> DatasetResult<String> {
    std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })
}
