use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use amana_scoring::error::AppError;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Raw input text from a file, or from stdin when the path is `-`.
pub(crate) fn read_input(path: &Path) -> Result<String, AppError> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

/// Read and decode a JSON document from a file or stdin.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    Ok(serde_json::from_str(&read_input(path)?)?)
}

/// Decode a document that is either a JSON array of `B` or a single `S` object.
///
/// The shape is chosen from the first token so both sides decode straight from
/// the text, keeping full `u128` range.
pub(crate) fn read_one_or_many<S, B>(path: &Path) -> Result<OneOrMany<S, B>, AppError>
where
    S: DeserializeOwned,
    B: DeserializeOwned,
{
    let raw = read_input(path)?;
    if raw.trim_start().starts_with('[') {
        Ok(OneOrMany::Many(serde_json::from_str(&raw)?))
    } else {
        Ok(OneOrMany::One(serde_json::from_str(&raw)?))
    }
}

#[derive(Debug)]
pub(crate) enum OneOrMany<S, B> {
    One(S),
    Many(Vec<B>),
}

/// Pretty-print `value` to stdout followed by a newline.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value).map_err(io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| format!("failed to parse '{raw}' as an RFC 3339 timestamp ({err})"))
}
