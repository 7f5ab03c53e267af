//! Command-line input validation.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const INP_EXTENSION: &str = "inp";

/// Validate the positional arguments (program name excluded) and return the
/// network file path unchanged.
///
/// Exactly one argument is accepted. It must name an existing regular file
/// whose extension is exactly `inp`.
pub fn parse_cmdline(program: &str, args: &[PathBuf]) -> AppResult<PathBuf> {
    let [path] = args else {
        return Err(AppError::InvalidArgumentCount {
            program: program.to_string(),
            count: args.len(),
        });
    };

    if !is_inp_file(path) {
        return Err(AppError::InvalidFile { path: path.clone() });
    }

    tracing::debug!(path = %path.display(), "input validated");
    Ok(path.clone())
}

fn is_inp_file(path: &Path) -> bool {
    path.is_file() && path.extension() == Some(OsStr::new(INP_EXTENSION))
}
