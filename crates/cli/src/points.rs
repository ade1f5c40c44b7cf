//! CSV point batches (`x`,`y` columns) via polars.

use anyhow::{anyhow, Context, Result};
use planar::Vec2;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

/// Read every row of `path` as a point. Integer columns are widened to f64;
/// extra columns are ignored; a null in `x` or `y` is an error naming the row.
pub fn read_csv(path: &str) -> Result<Vec<Vec2>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {path}"))?
        .collect()
        .with_context(|| format!("reading {path}"))?;
    let xs = column_f64(&df, "x")?;
    let ys = column_f64(&df, "y")?;
    xs.into_iter()
        .zip(ys)
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Vec2::new(x, y)),
            _ => Err(anyhow!("{path}: row {row} has no x or y value")),
        })
        .collect()
}

fn column_f64(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?;
    let widened = column
        .cast(&DataType::Float64)
        .with_context(|| format!("column `{name}` is not numeric"))?;
    Ok(widened.f64()?.into_iter().collect())
}

/// Write points as an `x,y` CSV, creating parent directories.
pub fn write_csv(path: &str, points: &[Vec2]) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;

    let out_path = Path::new(path);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(out_path).with_context(|| format!("creating {path}"))?;
    CsvWriter::new(&mut file)
        .finish(&mut df)
        .with_context(|| format!("writing {path}"))?;
    Ok(())
}
