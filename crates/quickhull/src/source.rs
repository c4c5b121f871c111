//! Point sources: where hull inputs come from.
//!
//! Text format
//! - One point per line: two whitespace-separated `f64` tokens `X Y`.
//! - Blank lines and lines starting with `#` are skipped.
//! - Anything else (missing, extra or unparsable tokens) is `MalformedInput`;
//!   a missing value is never defaulted to zero.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::HullError;
use crate::hull::Point;

/// Supplies the input point set for one hull construction.
pub trait PointSource {
    fn points(self) -> Result<Vec<Point>, HullError>;
}

impl PointSource for Vec<Point> {
    fn points(self) -> Result<Vec<Point>, HullError> {
        Ok(self)
    }
}

impl PointSource for &[Point] {
    fn points(self) -> Result<Vec<Point>, HullError> {
        Ok(self.to_vec())
    }
}

impl PointSource for Vec<(f64, f64)> {
    fn points(self) -> Result<Vec<Point>, HullError> {
        Ok(self.into_iter().map(|(x, y)| Point::new(x, y)).collect())
    }
}

impl PointSource for &[(f64, f64)] {
    fn points(self) -> Result<Vec<Point>, HullError> {
        Ok(self.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }
}

/// Line-oriented `X Y` text reader.
#[derive(Debug)]
pub struct TextSource<R> {
    reader: R,
}

impl<R: BufRead> TextSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> PointSource for TextSource<R> {
    fn points(self) -> Result<Vec<Point>, HullError> {
        let mut out = Vec::new();
        for (k, line) in self.reader.lines().enumerate() {
            if let Some(p) = parse_line(k + 1, &line?)? {
                out.push(p);
            }
        }
        Ok(out)
    }
}

fn parse_line(line_no: usize, line: &str) -> Result<Option<Point>, HullError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let malformed = |reason: String| HullError::MalformedInput {
        line: line_no,
        reason,
    };
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(malformed(format!("expected 2 values, found {}", tokens.len())));
    }
    let num = |tok: &str| {
        tok.parse::<f64>()
            .map_err(|e| malformed(format!("invalid number {tok:?}: {e}")))
    };
    Ok(Some(Point::new(num(tokens[0])?, num(tokens[1])?)))
}

/// Parse the text format from a string.
pub fn parse_points(text: &str) -> Result<Vec<Point>, HullError> {
    TextSource::new(text.as_bytes()).points()
}

/// Read the text format from a file.
pub fn read_points_file(path: impl AsRef<Path>) -> Result<Vec<Point>, HullError> {
    let file = File::open(path)?;
    TextSource::new(BufReader::new(file)).points()
}
