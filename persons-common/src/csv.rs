//! Tolerant line-oriented reader for the persons seed file
//!
//! The seed file is nominally comma-delimited with exactly four fields per
//! record, but a single record's fields may be wrapped across several
//! physical lines (a line break inside the city field, typically). Lines are
//! accumulated until the buffer holds at least three commas, then split.
//!
//! The separator count cannot tell an embedded comma inside a field from a
//! real field boundary. That is a known limitation of the format and is kept
//! as-is for compatibility; do not replace this with a quoting CSV parser.

use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One logical record reconstructed from the seed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub last_name: String,
    pub first_name: String,
    pub zip_and_city: String,
    pub colour_code: i64,
}

/// Read all records from a seed file on disk
pub fn read_records_from_path(path: &Path) -> Result<Vec<RawRecord>> {
    let file = File::open(path)?;
    read_records(BufReader::new(file))
}

/// Reconstruct logical records from a line-oriented source.
///
/// Blank and whitespace-only lines are skipped entirely. Each kept line is
/// trimmed and appended to an accumulation buffer, joined with a single
/// space so a field split across lines rejoins cleanly. Once the buffer
/// holds at least three commas it is split into exactly four trimmed
/// fields; any other count is a malformed record. A non-empty buffer left
/// over at end of input is a truncated record.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<RawRecord>> {
    let mut records = Vec::new();
    let mut buffer = String::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        // Tolerate a UTF-8 byte-order mark on the first line
        let line = if index == 0 {
            line.trim_start_matches('\u{feff}')
        } else {
            line.as_str()
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if !buffer.is_empty() {
            buffer.push(' ');
        }
        buffer.push_str(trimmed);

        // Fewer than 3 separators: the record is not complete yet
        if count_commas(&buffer) < 3 {
            continue;
        }

        records.push(parse_record(&buffer)?);
        buffer.clear();
    }

    if !buffer.is_empty() {
        return Err(Error::TruncatedInput(buffer));
    }

    Ok(records)
}

/// Split an accumulated buffer into one record
fn parse_record(buffer: &str) -> Result<RawRecord> {
    let parts: Vec<&str> = buffer.split(',').map(str::trim).collect();

    if parts.len() != 4 {
        return Err(Error::MalformedRecord(format!(
            "expected 4 fields: '{buffer}'"
        )));
    }

    let colour_code: i64 = parts[3].parse().map_err(|_| {
        Error::MalformedRecord(format!("colour code is not an integer: '{buffer}'"))
    })?;

    Ok(RawRecord {
        last_name: parts[0].to_string(),
        first_name: parts[1].to_string(),
        zip_and_city: parts[2].to_string(),
        colour_code,
    })
}

fn count_commas(s: &str) -> usize {
    s.chars().filter(|&c| c == ',').count()
}

/// Split a combined "zip city" field into its two parts.
///
/// The first whitespace-separated token is the zip code; the remaining
/// tokens rejoined with single spaces form the city, so multi-word city
/// names survive without leading or doubled spaces.
pub fn split_zip_city(zip_and_city: &str) -> Result<(String, String)> {
    let mut tokens = zip_and_city.split_whitespace();

    let zip = tokens.next().unwrap_or_default();
    let city = tokens.collect::<Vec<_>>().join(" ");

    if zip.is_empty() || city.is_empty() {
        return Err(Error::MalformedRecord(format!(
            "zip and city must both be present: '{zip_and_city}'"
        )));
    }

    Ok((zip.to_string(), city))
}
