use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::{GeometryError, DEFAULT_DISCRETIZATION};

/// Vortex-lattice panel layout for a surface.
///
/// Carried for the solver-input writer; nothing in the geometry core reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Discretization {
    /// Number of chordwise vortices.
    pub chordwise: u32,
    /// Chordwise spacing parameter (1.0 = cosine).
    pub chordwise_spacing: f64,
    /// Number of spanwise vortices.
    pub spanwise: u32,
    /// Spanwise spacing parameter (-1.0 = negative sine).
    pub spanwise_spacing: f64,
}

impl Default for Discretization {
    fn default() -> Self {
        Self {
            chordwise: 10,
            chordwise_spacing: 1.0,
            spanwise: 15,
            spanwise_spacing: -1.0,
        }
    }
}

impl FromStr for Discretization {
    type Err = GeometryError;

    /// Parses the four whitespace-separated tokens `Nchord Cspace Nspan Sspace`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            GeometryError::Validation(format!(
                "discretization '{}' must look like '{}'",
                s, DEFAULT_DISCRETIZATION
            ))
        };
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let &[chordwise, chordwise_spacing, spanwise, spanwise_spacing] = tokens.as_slice() else {
            return Err(invalid());
        };
        Ok(Self {
            chordwise: chordwise.parse().map_err(|_| invalid())?,
            chordwise_spacing: chordwise_spacing.parse().map_err(|_| invalid())?,
            spanwise: spanwise.parse().map_err(|_| invalid())?,
            spanwise_spacing: spanwise_spacing.parse().map_err(|_| invalid())?,
        })
    }
}

impl fmt::Display for Discretization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} {} {:?}",
            self.chordwise, self.chordwise_spacing, self.spanwise, self.spanwise_spacing
        )
    }
}
