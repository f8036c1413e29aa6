use std::path::PathBuf;

/// Failures reading or writing a dataset file
///
/// Each variant carries the offending path so the caller can report it.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to read dataset '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dataset '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Dataset '{path}' is not a JSON array of question records")]
    NotAnArray { path: PathBuf },

    #[error("Failed to write dataset '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize dataset '{path}': {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for dataset file operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Failures while turning one question block into a record
#[derive(Debug, thiserror::Error)]
pub enum BlockError {
    #[error("answer marker captured no letter")]
    MissingAnswerLetter,

    #[error("no usable options left after cleaning")]
    NoUsableOptions,

    #[error("answer letter {letter} is outside the {count} parsed options")]
    AnswerOutOfRange { letter: char, count: usize },

    #[error("answer {letter} has no usable option text")]
    EmptyAnswerOption { letter: char },
}
