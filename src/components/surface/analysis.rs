use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::Stations;
use crate::utils::{simpson, GeometryError, Result};

/// Reference quantities derived from a surface's stations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceGeometry {
    /// Span `b` (m).
    pub span: f64,
    /// Reference area `S` (m²).
    pub area: f64,
    /// Mean aerodynamic chord `c` (m).
    pub mac: f64,
    /// Aspect ratio `b² / S`.
    pub aspect_ratio: f64,
    /// Span-averaged locus of section aerodynamic centers (m).
    pub aerodynamic_center: Vector3<f64>,
}

/// Integrates chord, chord² and the aerodynamic-center line over the stations.
///
/// The integration range is the defined station range `[s_first, s_last]`.
/// Every integrand is at most quadratic on a segment, so one Simpson panel per
/// segment is exact and the result does not depend on how finely the span is
/// subdivided.
///
/// # Errors
/// `Validation` for fewer than two stations or misordered stations,
/// `DegenerateGeometry` when consecutive stations coincide.
pub fn analyze(stations: &Stations<'_>) -> Result<SurfaceGeometry> {
    let count = stations.sections().len();
    if count < 2 {
        return Err(GeometryError::Validation(format!(
            "at least 2 sections required, got {}",
            count
        )));
    }
    stations.check_ordering()?;

    let (first, last) = stations.range();
    let span = (last - first).abs();

    let mut area = 0.0;
    let mut chord_squared = 0.0;
    let mut ac_moment = Vector3::zeros();

    for index in 0..count - 1 {
        let (a, b) = (stations.coordinate(index), stations.coordinate(index + 1));
        area += simpson(a, b, |s| stations.chord(s))?;
        chord_squared += simpson(a, b, |s| stations.chord(s).map(|c| c * c))?;
        for axis in 0..3 {
            ac_moment[axis] +=
                simpson(a, b, |s| stations.aerodynamic_center_line(s).map(|p| p[axis]))?;
        }
    }

    Ok(SurfaceGeometry {
        span,
        area,
        mac: chord_squared / area,
        aspect_ratio: span * span / area,
        aerodynamic_center: ac_moment / span,
    })
}
