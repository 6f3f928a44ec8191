//! Fibonacci-lattice placement of labels on the unit sphere.

use crate::error::SceneError;
use glam::DVec3;
use std::f64::consts::PI;

/// A label anchored on the unit sphere.
///
/// `position` is mutated in place by the rotation step every frame; the label
/// never changes after layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub label: String,
    pub position: DVec3,
}

impl Point {
    pub fn new(label: impl Into<String>, position: DVec3) -> Self {
        Self {
            label: label.into(),
            position,
        }
    }
}

/// Golden angle in radians, `π(3 - √5)`.
#[inline]
pub fn golden_angle() -> f64 {
    PI * (3.0 - 5.0_f64.sqrt())
}

/// Lay out one point per label, in label order.
///
/// Rings run from `y = 1` (first label) to `y = -1` (last label). A single
/// label sits on the north pole; an empty list is rejected.
pub fn fibonacci_sphere<S: AsRef<str>>(labels: &[S]) -> Result<Vec<Point>, SceneError> {
    let n = labels.len();
    if n == 0 {
        return Err(SceneError::NoLabels);
    }
    if n == 1 {
        return Ok(vec![Point::new(labels[0].as_ref(), DVec3::Y)]);
    }

    let golden = golden_angle();
    let last = (n - 1) as f64;
    let points = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let y = 1.0 - (i as f64 / last) * 2.0;
            let ring_radius = (1.0 - y * y).max(0.0).sqrt();
            let azimuth = i as f64 * golden;
            Point::new(
                label.as_ref(),
                DVec3::new(azimuth.cos() * ring_radius, y, azimuth.sin() * ring_radius),
            )
        })
        .collect();
    Ok(points)
}
