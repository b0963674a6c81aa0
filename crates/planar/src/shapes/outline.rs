use std::f64::consts::TAU;

use super::types::{OutlineCfg, ShapeOutline, ShapeParameters};
use super::validate::validate;
use crate::Point2;

/// Validate `params` and compute its outline with default tolerances.
pub fn compute_outline(params: &ShapeParameters) -> Result<ShapeOutline, super::ShapeError> {
    compute_outline_with(params, OutlineCfg::default())
}

/// Validate `params` and compute its outline.
///
/// No coordinates are produced when validation fails, or when finite inputs
/// overflow to non-finite coordinates (e.g. a base near `f64::MAX`).
pub fn compute_outline_with(
    params: &ShapeParameters,
    cfg: OutlineCfg,
) -> Result<ShapeOutline, super::ShapeError> {
    validate(params)?;
    let points = match *params {
        ShapeParameters::Triangle {
            base_length,
            angle_a_deg,
            angle_b_deg,
        } => triangle(base_length, angle_a_deg, angle_b_deg).to_vec(),
        ShapeParameters::Rectangle { width, height } => rectangle(width, height).to_vec(),
        ShapeParameters::Parallelogram {
            width,
            height,
            tilt_deg,
        } => parallelogram(width, height, tilt_deg, cfg.eps_tan).to_vec(),
        ShapeParameters::Rhombus {
            side_length,
            height,
        } => parallelogram(
            side_length,
            height,
            rhombus_tilt_deg(side_length, height),
            cfg.eps_tan,
        )
        .to_vec(),
        ShapeParameters::Circle {
            radius,
            sample_count,
        } => circle(radius, sample_count),
    };
    if points.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
        tracing::debug!(kind = %params.kind(), "outline overflowed");
        return Err(super::ShapeError::NonFiniteOutline {
            kind: params.kind(),
        });
    }
    Ok(ShapeOutline::new(params.kind(), points))
}

/// Vertices A, B, C from base `c = |AB|` and the angles at A and B (law of sines).
///
/// Pre: angles positive with `A + B < 180`.
fn triangle(base: f64, alpha_deg: f64, beta_deg: f64) -> [Point2; 3] {
    let alpha = alpha_deg.to_radians();
    let beta = beta_deg.to_radians();
    let gamma = (180.0 - alpha_deg - beta_deg).to_radians();
    // a/sin A = b/sin B = c/sin C
    let s = base / gamma.sin();
    let b = s * beta.sin(); // |AC|
    [
        Point2::new(0.0, 0.0),
        Point2::new(base, 0.0),
        Point2::new(b * alpha.cos(), b * alpha.sin()),
    ]
}

fn rectangle(width: f64, height: f64) -> [Point2; 4] {
    [
        Point2::new(0.0, 0.0),
        Point2::new(width, 0.0),
        Point2::new(width, height),
        Point2::new(0.0, height),
    ]
}

/// Horizontal shear of the `width × height` rectangle so the left side leans at `tilt_deg`.
/// When `|tan(tilt)| <= eps_tan` the shear is dropped and the rectangle is returned.
fn parallelogram(width: f64, height: f64, tilt_deg: f64, eps_tan: f64) -> [Point2; 4] {
    let tan = tilt_deg.to_radians().tan();
    let dx = if tan.abs() > eps_tan { height / tan } else { 0.0 };
    [
        Point2::new(0.0, 0.0),
        Point2::new(width, 0.0),
        Point2::new(width + dx, height),
        Point2::new(dx, height),
    ]
}

/// Tilt used to draw a rhombus as a parallelogram: `atan2(height, side/2)` in degrees.
///
/// This only approximates a rhombus. The slanted side has length
/// `sqrt(height² + (height / tan)²)`, which generally differs from `side_length`.
/// A zero side is replaced by 1 in the denominator.
pub fn rhombus_tilt_deg(side_length: f64, height: f64) -> f64 {
    let half = if side_length != 0.0 {
        side_length / 2.0
    } else {
        1.0
    };
    height.atan2(half).to_degrees()
}

/// `n` samples at `θ_k = 2π k / (n − 1)`; the last sample closes the loop.
fn circle(radius: f64, n: usize) -> Vec<Point2> {
    let step = TAU / (n - 1) as f64;
    (0..n)
        .map(|k| {
            let theta = step * k as f64;
            Point2::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}

impl ShapeParameters {
    /// Circle sampled with `cfg.circle_samples` points.
    pub fn circle_with(radius: f64, cfg: OutlineCfg) -> Self {
        ShapeParameters::Circle {
            radius,
            sample_count: cfg.circle_samples,
        }
    }
}
