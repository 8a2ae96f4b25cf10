//! Command-line geometry input: inline coordinate lists and CSV rect tables.

use anyhow::{bail, Context, Result};
use ductgeom::{Point, Rect};
use polars::prelude::*;
use std::path::Path;

fn parse_numbers(s: &str, expected: usize) -> Result<Vec<f64>> {
    let nums = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("invalid number {part:?} in {s:?}"))
        })
        .collect::<Result<Vec<_>>>()?;
    if nums.len() != expected {
        bail!("expected {expected} comma-separated numbers, got {:?}", s);
    }
    if let Some(bad) = nums.iter().find(|v| !v.is_finite()) {
        bail!("non-finite coordinate {bad} in {s:?}");
    }
    Ok(nums)
}

/// `"x,y"`
pub fn parse_point(s: &str) -> Result<Point> {
    let v = parse_numbers(s, 2)?;
    Ok(Point::new(v[0], v[1]))
}

/// `"x,y;x,y;..."` (empty string is an empty list)
pub fn parse_points(s: &str) -> Result<Vec<Point>> {
    s.split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(parse_point)
        .collect()
}

/// `"x,y,w,h;..."`; two-corner semantics are not applied, extents must be non-negative.
pub fn parse_rects(s: &str) -> Result<Vec<Rect>> {
    s.split(';')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(|r| {
            let v = parse_numbers(r, 4)?;
            if v[2] < 0.0 || v[3] < 0.0 {
                bail!("negative extent in rect {r:?}");
            }
            Ok(Rect::new(v[0], v[1], v[2], v[3]))
        })
        .collect()
}

/// Read rects from a CSV with columns `x,y,width,height`.
pub fn read_rects_csv(path: &Path) -> Result<Vec<Rect>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
            col("width").cast(DataType::Float64),
            col("height").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading rect columns from {}", path.display()))?;
    tracing::info!(rows = df.height(), "rects_csv");

    let x = df.column("x")?.f64()?;
    let y = df.column("y")?.f64()?;
    let w = df.column("width")?.f64()?;
    let h = df.column("height")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        match (x.get(i), y.get(i), w.get(i), h.get(i)) {
            (Some(x), Some(y), Some(w), Some(h)) if w >= 0.0 && h >= 0.0 => {
                out.push(Rect::new(x, y, w, h))
            }
            _ => bail!("{}: row {} has a missing or negative value", path.display(), i + 1),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_point_lists() {
        let pts = parse_points("0,0; 100,0 ;").unwrap();
        assert_eq!(pts, vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
        assert!(parse_points("").unwrap().is_empty());
        assert!(parse_point("1,2,3").is_err());
        assert!(parse_point("1,nan").is_err());
        assert!(parse_point("a,2").is_err());
    }

    #[test]
    fn parses_rects() {
        let r = parse_rects("0,0,10,5;0,5,20,5").unwrap();
        assert_eq!(r[1], Rect::new(0.0, 5.0, 20.0, 5.0));
        assert!(parse_rects("0,0,-1,5").is_err());
    }

    #[test]
    fn reads_csv_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rects.csv");
        fs::write(&path, "x,y,width,height\n0,0,100,20\n0,20,150.5,30\n").unwrap();
        let rects = read_rects_csv(&path).unwrap();
        assert_eq!(
            rects,
            vec![
                Rect::new(0.0, 0.0, 100.0, 20.0),
                Rect::new(0.0, 20.0, 150.5, 30.0)
            ]
        );
    }
}
