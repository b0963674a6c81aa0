//! Outline reports and file output.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

use planar::api::{classify, Quad, ShapeOutline};

/// What the shell shows next to a drawing.
#[derive(Debug, Serialize)]
pub struct OutlineReport {
    pub kind: String,
    /// What to notice about this kind of shape.
    pub note: &'static str,
    /// Closed polyline, first point repeated last.
    pub points: Vec<[f64; 2]>,
    pub side_lengths: Vec<f64>,
    pub perimeter: f64,
    pub area: f64,
    /// Family node the outline actually satisfies (quadrilaterals only).
    pub family: Option<String>,
    /// Everything that node is also a special case of.
    pub also_a: Vec<String>,
}

impl OutlineReport {
    pub fn new(outline: &ShapeOutline) -> Self {
        let family = classify(outline);
        Self {
            kind: outline.kind.to_string(),
            note: outline.kind.note(),
            points: outline.closed().iter().map(|p| [p.x, p.y]).collect(),
            side_lengths: outline.side_lengths(),
            perimeter: outline.perimeter(),
            area: outline.area(),
            family: family.map(|q| q.to_string()),
            also_a: family
                .map(Quad::ancestors)
                .unwrap_or_default()
                .iter()
                .map(|q| q.to_string())
                .collect(),
        }
    }
}

/// Write the closed polyline as an `x`,`y` table; format by extension
/// (`.csv` or `.parquet`).
pub fn write_points(outline: &ShapeOutline, out: &Path) -> Result<usize> {
    let pts = outline.closed();
    let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = pts.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let ext = out.extension().and_then(|e| e.to_str()).unwrap_or("");
    let mut file =
        File::create(out).with_context(|| format!("creating {}", out.display()))?;
    match ext {
        "csv" => CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)
            .with_context(|| format!("writing {}", out.display()))?,
        "parquet" => {
            ParquetWriter::new(&mut file)
                .finish(&mut df)
                .with_context(|| format!("writing {}", out.display()))?;
        }
        other => bail!("unsupported output extension {other:?} (use .csv or .parquet)"),
    }
    tracing::info!(rows = df.height(), out = %out.display(), "points written");
    Ok(df.height())
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar::api::{compute_outline, ShapeParameters};
    use tempfile::tempdir;

    #[test]
    fn report_for_rectangle() {
        let out = compute_outline(&ShapeParameters::Rectangle {
            width: 4.0,
            height: 2.0,
        })
        .unwrap();
        let r = OutlineReport::new(&out);
        assert_eq!(r.points.len(), 5);
        assert_eq!(r.points[0], r.points[4]);
        assert_eq!(r.family.as_deref(), Some("rectangle"));
        assert_eq!(r.also_a, vec!["trapezoid", "parallelogram"]);
        assert!((r.area - 8.0).abs() < 1e-12);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["kind"], "rectangle");
        assert!(json["note"].as_str().unwrap().contains("right angles"));
    }

    #[test]
    fn csv_roundtrip_through_lazy_reader() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/tri.csv");
        let out = compute_outline(&ShapeParameters::triangle(4.0, 50.0, 60.0)).unwrap();
        assert_eq!(write_points(&out, &path).unwrap(), 4);
        let df = LazyCsvReader::new(&path).finish().unwrap().collect().unwrap();
        assert_eq!(df.shape(), (4, 2));
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("x,y"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempdir().unwrap();
        let out = compute_outline(&ShapeParameters::circle(1.0)).unwrap();
        assert!(write_points(&out, &dir.path().join("c.txt")).is_err());
    }
}
