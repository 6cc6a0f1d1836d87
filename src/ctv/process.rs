use crate::naming::{self, OutputPaths};
use crate::reader;
use crate::writer::JsonLinesWriter;
use crate::{Field, RawRecord, Result, ValidationOutcome};

use std::{
    fs::{self, File},
    io::{Read, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;

use chrono::NaiveDate;

use csv::Reader;

use serde::Serialize;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Input header is missing required columns: {0:?}")]
    MissingColumns(Vec<&'static str>),
}

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartitionCounts {
    pub valid: usize,
    pub invalid: usize,
}

/// Result of one run, reported back to whoever invoked it
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProcessingSummary {
    pub input: PathBuf,
    pub date: Option<NaiveDate>,
    pub valid_output: PathBuf,
    pub invalid_output: PathBuf,
    pub valid_count: usize,
    pub invalid_count: usize,
}

fn check_headers<R: Read>(rdr: &mut Reader<R>) -> Result {
    let headers = rdr.headers()?;
    log::debug!("Found headers: {headers:?}");

    let missing: Vec<&'static str> = Field::ALL
        .iter()
        .map(Field::as_str)
        .filter(|column| !headers.iter().any(|header| header == *column))
        .collect();

    if !missing.is_empty() {
        Err(ProcessError::MissingColumns(missing))?
    }

    let extra: Vec<&str> = headers
        .iter()
        .filter(|header| !Field::ALL.iter().any(|field| field.as_str() == *header))
        .collect();

    if !extra.is_empty() {
        log::warn!("Ignoring unexpected columns: {extra:?}");
    }

    return Ok(());
}

/// Validates every row in file order and writes it to exactly one of the two sinks.
/// A row that can't be decoded at all aborts the run.
pub fn partition<R: Read, V: Write, I: Write>(
    rdr: &mut Reader<R>,
    valid: &mut JsonLinesWriter<V>,
    invalid: &mut JsonLinesWriter<I>,
) -> Result<PartitionCounts> {
    check_headers(rdr)?;

    let mut counts = PartitionCounts::default();

    for record in rdr.deserialize::<RawRecord>() {
        let raw = record?;

        match raw.validate() {
            ValidationOutcome::Valid(record) => {
                log::debug!("Valid record: {record:?}");
                valid.write_record(&record)?;
                counts.valid += 1;
            }
            ValidationOutcome::Invalid(rejected) => {
                log::debug!("Rejected record: {rejected:?}");
                invalid.write_record(&rejected)?;
                counts.invalid += 1;
            }
        }
    }

    return Ok(counts);
}

fn create_output(path: &Path) -> Result<JsonLinesWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("Couldn't create output file: {path:?}"))?;

    return Ok(JsonLinesWriter::new(file));
}

/// Reads `input`, writes `<stem>_valid.jsonl` and `<stem>_invalid.jsonl` into `output_dir`.
/// Both files are always created, even when a partition is empty.
pub fn process_file(input: &Path, output_dir: &Path) -> Result<ProcessingSummary> {
    let paths = OutputPaths::for_input(input, output_dir)?;
    log::debug!("Output paths: {paths:?}");

    let date = naming::date_stamp(input);
    if date.is_none() {
        log::warn!("Input name doesn't match card_transaction_<YYYY-MM-DD>.csv: {input:?}");
    }

    let mut rdr = reader::build_csv_reader(input)?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Couldn't create output directory: {output_dir:?}"))?;

    let mut valid = create_output(&paths.valid)?;
    let mut invalid = create_output(&paths.invalid)?;

    let counts = partition(&mut rdr, &mut valid, &mut invalid)
        .with_context(|| format!("Failed processing input file: {input:?}"))?;

    valid
        .finish()
        .with_context(|| format!("Couldn't write output file: {:?}", paths.valid))?;
    invalid
        .finish()
        .with_context(|| format!("Couldn't write output file: {:?}", paths.invalid))?;

    log::info!(
        "Processed {input:?}: {} valid, {} invalid",
        counts.valid,
        counts.invalid
    );

    return Ok(ProcessingSummary {
        input: input.to_path_buf(),
        date,
        valid_output: paths.valid,
        invalid_output: paths.invalid,
        valid_count: counts.valid,
        invalid_count: counts.invalid,
    });
}
