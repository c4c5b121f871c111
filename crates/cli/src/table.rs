//! Columnar point sources (CSV, Parquet) read through polars.
//!
//! Both formats need numeric columns `x` and `y`; integer columns are cast to
//! `f64`. A null in either column is malformed input.

use anyhow::{Context, Result};
use polars::prelude::*;
use quickhull::{HullError, Point};
use std::path::Path;

/// Read `x`/`y` columns from a CSV file with a header row.
pub fn read_points_csv(path: &Path) -> Result<Vec<Point>> {
    let lf = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?;
    // data rows start on line 2
    collect_points(lf, 2)
}

/// Read `x`/`y` columns from a Parquet file.
pub fn read_points_parquet(path: &Path) -> Result<Vec<Point>> {
    let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
        .with_context(|| format!("opening {}", path.display()))?;
    collect_points(lf, 1)
}

fn collect_points(lf: LazyFrame, first_line: usize) -> Result<Vec<Point>> {
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()?;
    tracing::debug!(rows = df.height(), "point table loaded");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (k, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push(Point::new(x, y)),
            _ => {
                return Err(HullError::MalformedInput {
                    line: first_line + k,
                    reason: "missing x or y value".to_string(),
                }
                .into())
            }
        }
    }
    Ok(out)
}
