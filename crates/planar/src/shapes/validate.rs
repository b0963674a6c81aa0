//! Parameter validation run before any coordinates are computed.

use std::fmt;

use super::types::{ShapeKind, ShapeParameters, MAX_CIRCLE_SAMPLES};

/// Why a parameter set cannot be drawn. Every variant is recoverable: the
/// caller shows the message and lets the learner adjust the input.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// A length or radius is not a positive finite number.
    InvalidDimension { field: &'static str, value: f64 },
    /// An angle is non-positive, non-finite, or outside its allowed range.
    InvalidAngle { field: &'static str, value: f64 },
    /// The two given triangle angles leave nothing for the third.
    DegenerateTriangle { angle_sum: f64 },
    /// Circle sample count outside `3..=MAX_CIRCLE_SAMPLES`.
    SampleCount { sample_count: usize },
    /// Inputs were accepted but the computed coordinates overflowed.
    NonFiniteOutline { kind: ShapeKind },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::InvalidDimension { field, value } => {
                write!(f, "{field} must be a positive length, got {value}")
            }
            ShapeError::InvalidAngle { field, value } => {
                write!(f, "{field} is not a usable angle: {value}°")
            }
            ShapeError::DegenerateTriangle { angle_sum } => write!(
                f,
                "the two angles add up to {angle_sum}°, a triangle needs less than 180°"
            ),
            ShapeError::SampleCount { sample_count } => write!(
                f,
                "a circle needs between 3 and {MAX_CIRCLE_SAMPLES} samples, got {sample_count}"
            ),
            ShapeError::NonFiniteOutline { kind } => {
                write!(f, "the {kind} is too large to draw")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

#[inline]
fn positive(field: &'static str, value: f64) -> Result<(), ShapeError> {
    // `!(v > 0)` also rejects NaN.
    if !(value > 0.0) || !value.is_finite() {
        return Err(ShapeError::InvalidDimension { field, value });
    }
    Ok(())
}

#[inline]
fn positive_angle(field: &'static str, value: f64) -> Result<(), ShapeError> {
    if !(value > 0.0) || !value.is_finite() {
        return Err(ShapeError::InvalidAngle { field, value });
    }
    Ok(())
}

/// Check a parameter set. Order: dimensions, angles, angle sum, samples.
///
/// Overflow in the computed coordinates is caught later, by `compute_outline`.
pub fn validate(params: &ShapeParameters) -> Result<(), ShapeError> {
    let res = match *params {
        ShapeParameters::Triangle {
            base_length,
            angle_a_deg,
            angle_b_deg,
        } => {
            positive("base_length", base_length)
                .and_then(|_| positive_angle("angle_a", angle_a_deg))
                .and_then(|_| positive_angle("angle_b", angle_b_deg))
                .and_then(|_| {
                    let angle_sum = angle_a_deg + angle_b_deg;
                    if angle_sum >= 180.0 {
                        Err(ShapeError::DegenerateTriangle { angle_sum })
                    } else {
                        Ok(())
                    }
                })
        }
        ShapeParameters::Rectangle { width, height } => {
            positive("width", width).and_then(|_| positive("height", height))
        }
        ShapeParameters::Parallelogram {
            width,
            height,
            tilt_deg,
        } => positive("width", width)
            .and_then(|_| positive("height", height))
            .and_then(|_| {
                if (0.0..180.0).contains(&tilt_deg) {
                    Ok(())
                } else {
                    Err(ShapeError::InvalidAngle {
                        field: "tilt",
                        value: tilt_deg,
                    })
                }
            }),
        ShapeParameters::Rhombus {
            side_length,
            height,
        } => positive("side_length", side_length).and_then(|_| positive("height", height)),
        ShapeParameters::Circle {
            radius,
            sample_count,
        } => positive("radius", radius).and_then(|_| {
            if !(3..=MAX_CIRCLE_SAMPLES).contains(&sample_count) {
                Err(ShapeError::SampleCount { sample_count })
            } else {
                Ok(())
            }
        }),
    };
    if let Err(err) = &res {
        tracing::debug!(kind = %params.kind(), error = %err, "rejected shape parameters");
    }
    res
}
