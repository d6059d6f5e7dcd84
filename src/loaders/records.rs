use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use crate::errors::load_context;

/// Splits one delimited record into unquoted fields.
///
/// Fully quoted records (`"a";"b;c";"d"`) are split on the quote-delimiter-quote
/// sequence so delimiters inside a field survive; anything else is split on
/// the bare delimiter and each field has surrounding quotes stripped.
pub fn split_record(line: &str, delimiter: char) -> Vec<String> {
    let line = line.trim();

    if line.len() >= 2 && line.starts_with('"') && line.ends_with('"') {
        let inner = &line[1..line.len() - 1];
        let separator = format!("\"{}\"", delimiter);
        return inner.split(separator.as_str()).map(str::to_string).collect();
    }

    line.split(delimiter)
        .map(|field| field.trim().trim_matches('"').to_string())
        .collect()
}

/// Reads every non-empty line of `path` as `(line_number, fields)`.
///
/// Bytes are decoded lossily since the Book-Crossing dump is not UTF-8.
pub fn read_records(path: &Path, delimiter: char) -> Result<Vec<(usize, Vec<String>)>> {
    let file = File::open(path).with_context(|| load_context(path))?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for (idx, raw) in reader.split(b'\n').enumerate() {
        let raw = raw.with_context(|| load_context(path))?;
        let line = String::from_utf8_lossy(&raw);
        if line.trim().is_empty() {
            continue;
        }
        records.push((idx + 1, split_record(&line, delimiter)));
    }

    Ok(records)
}
