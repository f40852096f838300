use nalgebra::Vector3;
use serde::Serialize;
use std::sync::Arc;

use crate::components::Airfoil;
use crate::utils::{deg_to_rad, GeometryError, Result};

/// One spanwise station of a lifting surface.
///
/// Axes are x forward, y right, z down. Sections are immutable once built; the
/// airfoil is shared with every other section that uses it.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    position: Vector3<f64>,
    chord: f64,
    incidence: f64,
    airfoil: Arc<Airfoil>,
}

impl Section {
    /// Creates a new station.
    ///
    /// # Arguments
    /// * `position` - Leading-edge position (m).
    /// * `chord` - Local chord length (m), strictly positive.
    /// * `incidence` - Local incidence angle (degrees).
    /// * `airfoil` - Shared section profile.
    pub fn new(
        position: Vector3<f64>,
        chord: f64,
        incidence: f64,
        airfoil: Arc<Airfoil>,
    ) -> Result<Self> {
        if !position.iter().all(|v| v.is_finite()) {
            return Err(GeometryError::Validation(format!(
                "section position must be finite, got {:?}",
                position.as_slice()
            )));
        }
        if !(chord.is_finite() && chord > 0.0) {
            return Err(GeometryError::Validation(format!(
                "section chord must be positive, got {}",
                chord
            )));
        }
        Ok(Self {
            position,
            chord,
            incidence,
            airfoil,
        })
    }

    pub fn position(&self) -> &Vector3<f64> {
        &self.position
    }

    pub fn chord(&self) -> f64 {
        self.chord
    }

    /// Incidence angle in degrees.
    pub fn incidence(&self) -> f64 {
        self.incidence
    }

    pub fn incidence_rad(&self) -> f64 {
        deg_to_rad(self.incidence)
    }

    pub fn airfoil(&self) -> &Arc<Airfoil> {
        &self.airfoil
    }

    /// Chordwise distance of the aerodynamic center from the leading edge at this station (m).
    pub fn ac_offset(&self) -> f64 {
        self.chord * self.airfoil.ac_fraction()
    }

    /// The same station reflected across the aircraft centerline (y negated).
    pub fn mirrored(&self) -> Self {
        Self {
            position: Vector3::new(self.position.x, -self.position.y, self.position.z),
            ..self.clone()
        }
    }
}
