use crate::Result;

use std::{fs::File, io, path::Path};

use anyhow::Context;

use csv::{Reader, ReaderBuilder, Trim};

/// Header names are trimmed; cell values are left exactly as written
fn builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(true).trim(Trim::Headers);

    return builder;
}

pub fn build_csv_reader(filepath: &Path) -> Result<Reader<File>> {
    let reader = builder()
        .from_path(filepath)
        .with_context(|| format!("Couldn't open input file: {filepath:?}"))?;

    return Ok(reader);
}

pub fn build_csv_reader_from<R: io::Read>(rdr: R) -> Reader<R> {
    return builder().from_reader(rdr);
}
