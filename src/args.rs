use ctv::Result;

use std::{env, fs, path::PathBuf};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

#[derive(Debug)]
pub struct InputArgs {
    pub input: PathBuf,
    pub output_dir: Option<PathBuf>,
}

/// Parses `<input.csv> [output_dir]`. The input must exist; the output directory is created on demand.
pub fn parse_input_args() -> Result<InputArgs> {
    let mut args = env::args().skip(1);

    let filename = args
        .next()
        .ok_or_else(|| InputArgsError::Parse("First argument must be the input file.".to_string()))?;

    let input = fs::canonicalize(&filename).with_context(|| InputArgsError::FileNotFound(filename))?;

    let output_dir = args.next().map(PathBuf::from);

    if let Some(extra) = args.next() {
        Err(InputArgsError::Parse(format!("Unexpected argument: {extra}")))?
    }

    return Ok(InputArgs { input, output_dir });
}
