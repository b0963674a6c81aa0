use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::fmt::SubscriberBuilder;

use planar::api::{compute_outline, OutlineCfg, Quad, QuizSession, ShapeParameters};

mod outline;
mod provenance;
mod quiz;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Explore plane shapes, the quadrilateral family, and a short quiz")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute a shape's outline and print it as JSON
    Outline {
        /// Also write the points to a .csv or .parquet file (plus a provenance sidecar)
        #[arg(long)]
        out: Option<String>,
        #[command(subcommand)]
        shape: ShapeArgs,
    },
    /// Show the quadrilateral family, or explain one member
    Family {
        #[arg(long)]
        quad: Option<String>,
    },
    /// Answer the naming question and the OX questions
    Quiz {
        /// Seed for the shape shown in the naming question
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Slider defaults follow the explorer's initial positions.
#[derive(Subcommand, Debug)]
enum ShapeArgs {
    Triangle {
        #[arg(long, default_value_t = 4.0)]
        base: f64,
        /// Angle at A, degrees
        #[arg(long, default_value_t = 50.0)]
        angle_a: f64,
        /// Angle at B, degrees
        #[arg(long, default_value_t = 60.0)]
        angle_b: f64,
    },
    Rectangle {
        #[arg(long, default_value_t = 4.0)]
        width: f64,
        #[arg(long, default_value_t = 2.5)]
        height: f64,
    },
    Parallelogram {
        #[arg(long, default_value_t = 4.0)]
        width: f64,
        #[arg(long, default_value_t = 2.5)]
        height: f64,
        /// Tilt of the slanted side, degrees in [0, 180)
        #[arg(long, default_value_t = 20.0)]
        tilt: f64,
    },
    Rhombus {
        #[arg(long, default_value_t = 4.0)]
        side: f64,
        #[arg(long, default_value_t = 2.5)]
        height: f64,
    },
    Circle {
        #[arg(long, default_value_t = 2.0)]
        radius: f64,
        #[arg(long, default_value_t = OutlineCfg::default().circle_samples)]
        samples: usize,
    },
}

impl ShapeArgs {
    fn params(&self) -> ShapeParameters {
        match *self {
            ShapeArgs::Triangle {
                base,
                angle_a,
                angle_b,
            } => ShapeParameters::triangle(base, angle_a, angle_b),
            ShapeArgs::Rectangle { width, height } => ShapeParameters::Rectangle { width, height },
            ShapeArgs::Parallelogram {
                width,
                height,
                tilt,
            } => ShapeParameters::Parallelogram {
                width,
                height,
                tilt_deg: tilt,
            },
            ShapeArgs::Rhombus { side, height } => ShapeParameters::Rhombus {
                side_length: side,
                height,
            },
            ShapeArgs::Circle { radius, samples } => ShapeParameters::circle_with(
                radius,
                OutlineCfg {
                    circle_samples: samples,
                    ..OutlineCfg::default()
                },
            ),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Outline { out, shape } => run_outline(&shape, out.as_deref()),
        Action::Family { quad } => family(quad.as_deref()),
        Action::Quiz { seed } => run_quiz(seed),
    }
}

fn run_outline(shape: &ShapeArgs, out: Option<&str>) -> Result<()> {
    let params = shape.params();
    tracing::info!(?params, "outline");
    let outline = match compute_outline(&params) {
        Ok(o) => o,
        Err(err) => {
            // Bad slider positions are the learner's to fix, not a failure.
            tracing::warn!(%err, "shape not drawable");
            println!("⚠️  This shape cannot be drawn: {err}. Please adjust the values.");
            return Ok(());
        }
    };
    let report = outline::OutlineReport::new(&outline);
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(out) = out {
        let rows = outline::write_points(&outline, Path::new(out))?;
        let payload = provenance::Payload::new(
            "outline",
            serde_json::json!({
                "shape": outline.kind.as_str(),
                "args": format!("{shape:?}"),
                "rows": rows,
            }),
        );
        let prov = provenance::write_sidecar(out, payload)?;
        tracing::info!(provenance = %prov.display(), "sidecar written");
    }
    Ok(())
}

fn family(quad: Option<&str>) -> Result<()> {
    let Some(name) = quad else {
        for q in Quad::ALL {
            let (x, y) = q.diagram_position();
            let parents: Vec<&str> = q.parents().iter().map(|p| p.as_str()).collect();
            println!(
                "{:<13} at ({x:>4}, {y:>4})  parents: [{}]",
                q.as_str(),
                parents.join(", ")
            );
        }
        return Ok(());
    };
    let Some(q) = Quad::parse(name) else {
        bail!("unknown quadrilateral {name:?}; expected one of trapezoid, parallelogram, rectangle, rhombus, square");
    };
    println!("{}", q.explanation());
    let also: Vec<&str> = q.ancestors().iter().map(|a| a.as_str()).collect();
    if !also.is_empty() {
        println!("Every {q} is also a: {}", also.join(", "));
    }
    Ok(())
}

fn run_quiz(seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });
    let mut session = QuizSession::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = BufWriter::new(io::stdout().lock());
    quiz::run(&mut input, &mut out, &mut session, seed)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn slider_defaults() {
        let cmd = Cmd::try_parse_from(["cli", "outline", "triangle"]).unwrap();
        let Action::Outline { shape, out } = cmd.action else {
            panic!("expected outline");
        };
        assert!(out.is_none());
        assert_eq!(shape.params(), ShapeParameters::triangle(4.0, 50.0, 60.0));

        let cmd = Cmd::try_parse_from(["cli", "outline", "circle", "--radius", "1.5"]).unwrap();
        let Action::Outline { shape, .. } = cmd.action else {
            panic!("expected outline");
        };
        assert_eq!(shape.params(), ShapeParameters::circle(1.5));
    }

    #[test]
    fn undrawable_shape_is_not_an_error() {
        let shape = ShapeArgs::Triangle {
            base: 4.0,
            angle_a: 120.0,
            angle_b: 70.0,
        };
        assert!(run_outline(&shape, None).is_ok());
        // an absurd sample count is a warning, not a crash
        let cmd = Cmd::try_parse_from([
            "cli",
            "outline",
            "circle",
            "--samples",
            "18446744073709551615",
        ])
        .unwrap();
        let Action::Outline { shape, .. } = cmd.action else {
            panic!("expected outline");
        };
        assert!(run_outline(&shape, None).is_ok());
    }

    #[test]
    fn outline_with_out_writes_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("para.csv");
        let shape = ShapeArgs::Parallelogram {
            width: 4.0,
            height: 2.0,
            tilt: 45.0,
        };
        run_outline(&shape, out.to_str()).unwrap();
        assert!(out.exists());
        assert!(dir.path().join("para.provenance.json").exists());
    }

    #[test]
    fn family_lookup() {
        assert!(family(None).is_ok());
        assert!(family(Some("square")).is_ok());
        assert!(family(Some("kite")).is_err());
    }
}
