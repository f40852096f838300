use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::utils::{GeometryError, Result, DEFAULT_SURFACE_MASS};

/// Point-mass model: total mass and its center of gravity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassModel {
    /// Total mass (kg).
    pub mass: f64,
    /// Center of gravity (m).
    pub cg: Vector3<f64>,
}

impl MassModel {
    /// Creates a new `MassModel`.
    ///
    /// # Arguments
    /// * `mass` - Mass (kg), finite and non-negative.
    /// * `cg` - Center of gravity (m).
    pub fn new(mass: f64, cg: Vector3<f64>) -> Result<Self> {
        if !(mass.is_finite() && mass >= 0.0) {
            return Err(GeometryError::Validation(format!(
                "mass must be finite and non-negative, got {}",
                mass
            )));
        }
        if !cg.iter().all(|v| v.is_finite()) {
            return Err(GeometryError::Validation(
                "center of gravity must be finite".to_string(),
            ));
        }
        Ok(Self { mass, cg })
    }

    /// No mass, CG at the origin.
    pub fn empty() -> Self {
        Self {
            mass: 0.0,
            cg: Vector3::zeros(),
        }
    }

    /// Adds a point mass, moving the CG to the mass-weighted centroid of both.
    ///
    /// When the combined mass is zero the CG is left where it was.
    pub fn combine(&mut self, mass: f64, cg: Vector3<f64>) {
        let total = self.mass + mass;
        if total <= 0.0 {
            warn!("Combined mass is zero, keeping CG at {:?}", self.cg.as_slice());
            return;
        }
        self.cg = (self.cg * self.mass + cg * mass) / total;
        self.mass = total;
    }

    /// The same mass with its CG shifted by `offset`.
    pub fn translated(&self, offset: &Vector3<f64>) -> Self {
        Self {
            mass: self.mass,
            cg: self.cg + offset,
        }
    }
}

impl Default for MassModel {
    fn default() -> Self {
        Self {
            mass: DEFAULT_SURFACE_MASS,
            cg: Vector3::zeros(),
        }
    }
}
