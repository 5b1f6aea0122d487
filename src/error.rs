//! Error types for field extraction.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a run. Nothing is recovered; the first one ends the pass.
#[derive(Debug, Error)]
pub enum CutError {
    /// A field selection with no positions.
    #[error("at least one field position is required")]
    NoFields,

    /// A named input could not be opened.
    #[error("cannot open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from an input failed part way through.
    #[error("error reading '{name}': {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    /// A line had fewer fields than a requested position.
    #[error("{name}:{line}: field {position} out of range (line has {available} fields)")]
    FieldOutOfRange {
        name: String,
        line: usize,
        position: i64,
        available: usize,
    },

    /// Writing selected fields to the output failed.
    #[error("error writing output: {0}")]
    Write(#[source] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_out_of_range_message() {
        let err = CutError::FieldOutOfRange {
            name: "people.tsv".to_string(),
            line: 2,
            position: 3,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "people.tsv:2: field 3 out of range (line has 2 fields)"
        );
    }

    #[test]
    fn test_open_message_names_path() {
        let err = CutError::Open {
            path: PathBuf::from("missing.tsv"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().starts_with("cannot open 'missing.tsv'"));
    }
}
