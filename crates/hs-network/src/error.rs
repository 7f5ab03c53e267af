//! Network-specific error types.

use std::path::PathBuf;

pub type NetworkResult<T> = Result<T, NetworkError>;

/// Errors raised while reading or assembling a network.
///
/// `line` is the 1-based line of the `.inp` file that caused the error;
/// it is `None` for networks assembled directly through the builder.
#[derive(thiserror::Error, Debug)]
pub enum NetworkError {
    #[error("Failed to read network file: {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed [{section}] entry on line {line}: expected at least {expected} fields")]
    MalformedLine {
        section: String,
        line: usize,
        expected: usize,
    },

    #[error("Link '{link}' refers to unknown node '{node}'{}", at_line(.line))]
    UnknownNode {
        link: String,
        node: String,
        line: Option<usize>,
    },

    #[error("Duplicate node ID: {id}{}", at_line(.line))]
    DuplicateNode { id: String, line: Option<usize> },

    #[error("Duplicate link ID: {id}{}", at_line(.line))]
    DuplicateLink { id: String, line: Option<usize> },
}

fn at_line(line: &Option<usize>) -> String {
    match line {
        Some(line) => format!(" (line {line})"),
        None => String::new(),
    }
}
