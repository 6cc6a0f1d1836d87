use crate::Result;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use thiserror::Error;

const INPUT_PREFIX: &str = "card_transaction_";
const INPUT_EXTENSION: &str = ".csv";
const VALID_SUFFIX: &str = "_valid.jsonl";
const INVALID_SUFFIX: &str = "_invalid.jsonl";

#[derive(Error, Debug)]
pub enum NamingError {
    #[error("Unexpected input file extension (expected .csv): {0:?}")]
    UnexpectedExtension(PathBuf),
}

/// Where the two partitions of one input file are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub valid: PathBuf,
    pub invalid: PathBuf,
}

impl OutputPaths {
    /// `<dir>/card_transaction_2025-11-10.csv` becomes
    /// `<output_dir>/card_transaction_2025-11-10_valid.jsonl` and `..._invalid.jsonl`
    pub fn for_input(input: &Path, output_dir: &Path) -> Result<Self> {
        let stem = input
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_suffix(INPUT_EXTENSION))
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| NamingError::UnexpectedExtension(input.to_path_buf()))?;

        return Ok(Self {
            valid: output_dir.join(format!("{stem}{VALID_SUFFIX}")),
            invalid: output_dir.join(format!("{stem}{INVALID_SUFFIX}")),
        });
    }
}

/// Date stamp of a daily file named `card_transaction_<YYYY-MM-DD>.csv`
pub fn date_stamp(input: &Path) -> Option<NaiveDate> {
    let name = input.file_name()?.to_str()?;
    let stamp = name
        .strip_prefix(INPUT_PREFIX)?
        .strip_suffix(INPUT_EXTENSION)?;

    if stamp.len() != 10 {
        return None;
    }

    return NaiveDate::parse_from_str(stamp, "%Y-%m-%d").ok();
}
