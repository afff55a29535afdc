// parse.rs - Text snapshot parser and validator
//
// Input format:
//
//     Generation <N>:
//     <rows> <cols>
//     <rows lines of exactly cols '*'/'.' characters>
//
// Lines after the declared grid are ignored.

use std::str::FromStr;

use tracing::debug;

use crate::error::ParseError;
use crate::grid::{ALIVE, DEAD, MAX_GENERATION, Snapshot};

const HEADER_KEYWORD: &str = "Generation";

/// Parses and validates a text snapshot, failing on the first violation found.
pub fn parse(raw: &str) -> Result<Snapshot, ParseError> {
    let result = parse_lines(raw);
    match &result {
        Ok(snapshot) => debug!(
            generation = snapshot.generation(),
            rows = snapshot.rows(),
            cols = snapshot.cols(),
            "parsed snapshot"
        ),
        Err(e) => debug!(error = %e, "rejected snapshot"),
    }
    result
}

fn parse_lines(raw: &str) -> Result<Snapshot, ParseError> {
    let lines: Vec<&str> = raw.trim().split('\n').collect();
    if lines.len() < 3 {
        return Err(ParseError::TooFewLines);
    }

    let generation = parse_header(lines[0].trim())
        .filter(|&generation| generation != MAX_GENERATION)
        .ok_or(ParseError::MalformedHeaderLine)?;
    let (rows, cols) = parse_dimensions(lines[1].trim()).ok_or(ParseError::MalformedDimensionsLine)?;

    let grid_lines = &lines[2..];
    if grid_lines.len() < rows {
        return Err(ParseError::InsufficientGridLines { expected: rows });
    }

    let mut cells = Vec::new();
    for (line, text) in grid_lines[..rows].iter().enumerate() {
        let got = text.chars().count();
        if got != cols {
            return Err(ParseError::WrongLineLength { line, got, expected: cols });
        }
        if text.chars().any(|c| c != ALIVE && c != DEAD) {
            return Err(ParseError::InvalidCharacter { line });
        }
        cells.extend(text.chars().map(|c| c == ALIVE));
    }

    // Shape was checked line by line above, and rows/cols are non-zero.
    Snapshot::new(generation, rows, cols, cells).map_err(|_| ParseError::MalformedDimensionsLine)
}

/// `Generation<whitespace><digits>:` with nothing before or after.
fn parse_header(line: &str) -> Option<u64> {
    let rest = line.strip_prefix(HEADER_KEYWORD)?;
    let number = rest.trim_start_matches(is_separator);
    if number.len() == rest.len() {
        return None;
    }
    parse_digits(number.strip_suffix(':')?)
}

/// `<digits><whitespace><digits>`, both positive.
fn parse_dimensions(line: &str) -> Option<(usize, usize)> {
    let (rows, rest) = line.split_once(is_separator)?;
    let rows: usize = parse_digits(rows)?;
    let cols: usize = parse_digits(rest.trim_start_matches(is_separator))?;
    (rows > 0 && cols > 0).then_some((rows, cols))
}

fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace()
}

/// ASCII digits only; no sign, no overflow.
fn parse_digits<T: FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
