use tba::Result;

use std::{
    env,
    fs,
    path::PathBuf,
};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Unexpected extra argument: {0}")]
    Unexpected(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// Parses the input arguments. The first and only argument, when given, must be a valid
/// filepath to an operation script.
pub fn parse_input_arg() -> Result<Option<PathBuf>> {
    let mut args = env::args().skip(1);

    let filename = match args.next() {
        Some(filename) => filename,
        None => return Ok(None),
    };

    if let Some(extra) = args.next() {
        Err(InputArgsError::Unexpected(extra))?
    }

    let path = fs::canonicalize(filename.clone())
        .with_context(|| InputArgsError::FileNotFound(filename))?;

    Ok(Some(path))
}
