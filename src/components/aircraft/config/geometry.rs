use serde::{Deserialize, Serialize};

use crate::components::SurfaceGeometry;
use crate::utils::DEFAULT_REFERENCE_VALUE;

/// Whole-aircraft reference values used to non-dimensionalize coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftGeometry {
    /// Reference area (m²).
    pub wing_area: f64,
    /// Reference span (m).
    pub wing_span: f64,
    /// Reference (mean aerodynamic) chord (m).
    pub mac: f64,
}

impl AircraftGeometry {
    /// Creates a new `AircraftGeometry` instance with the specified parameters.
    ///
    /// # Arguments
    /// * `wing_area` - Reference area (m²).
    /// * `wing_span` - Reference span (m).
    /// * `mac` - Mean aerodynamic chord (m).
    pub fn new(wing_area: f64, wing_span: f64, mac: f64) -> Self {
        AircraftGeometry {
            wing_area,
            wing_span,
            mac,
        }
    }

    /// Reference values taken from one surface's derived geometry.
    pub fn from_surface(geometry: &SurfaceGeometry) -> Self {
        Self::new(geometry.area, geometry.span, geometry.mac)
    }
}

impl Default for AircraftGeometry {
    fn default() -> Self {
        Self::new(
            DEFAULT_REFERENCE_VALUE,
            DEFAULT_REFERENCE_VALUE,
            DEFAULT_REFERENCE_VALUE,
        )
    }
}
