use std::num::ParseIntError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Why a single input line could not be turned into a [`crate::Document`].
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("expected at least {required} fields, found {found}")]
    MissingFields { found: usize, required: usize },

    #[error("document id {value:?} is not an unsigned integer")]
    InvalidId {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed record at line {line}: {source}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: RecordError,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn is_malformed_record(&self) -> bool {
        matches!(self, Error::MalformedRecord { .. })
    }
}
