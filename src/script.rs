
use std::{
    fs,
    path::{Path, PathBuf},
};

use nom::{
    IResult,
    character::complete::{char, space0},
    combinator::{all_consuming, map},
    number::complete::float,
    sequence::{delimited, tuple},
};
use thiserror::Error;

use crate::measurements::Measurement;

// measurement scripts are plain text, one reading per line:
//
//      # temperature,humidity,pressure
//      25.5, 60, 1013.2
//
// '#' starts a comment, blank lines are skipped
pub const COMMENT: char = '#';

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("line {line}: expected `temperature,humidity,pressure`, got `{content}`")]
    InvalidLine { line: usize, content: String },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn field_parser(s: &str) -> IResult<&str, f32> {
    delimited(space0, float, space0)(s)
}

fn reading_parser(s: &str) -> IResult<&str, Measurement> {
    map(
        tuple((field_parser, char(','), field_parser, char(','), field_parser)),
        |(temperature, _, humidity, _, pressure)| {
            Measurement::new(temperature, humidity, pressure)
        },
    )(s)
}

pub fn parse_script(input: &str) -> Result<Vec<Measurement>, ScriptError> {
    let mut readings = Vec::new();

    for (i, raw) in input.lines().enumerate() {
        let body = match raw.split_once(COMMENT) {
            Some((body, _)) => body,
            None => raw,
        };
        if body.trim().is_empty() {
            continue;
        }

        let (_, m) = all_consuming(reading_parser)(body).map_err(|_| ScriptError::InvalidLine {
            line: i + 1,
            content: raw.trim().to_string(),
        })?;
        readings.push(m);
    }

    Ok(readings)
}

pub fn load_script(path: &Path) -> Result<Vec<Measurement>, ScriptError> {
    let text = fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_script(&text)
}
