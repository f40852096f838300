use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::{GeometryError, Result, DEFAULT_AC_FRACTION};

/// A named two-dimensional section profile.
///
/// The core never opens `source`; it is a reference handed through to whatever
/// layer writes solver input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airfoil {
    name: String,
    source: Option<String>,
    ac_fraction: f64,
    ac_height: f64,
}

impl Airfoil {
    /// Creates an airfoil with no data file and the aerodynamic center at quarter chord.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: None,
            ac_fraction: DEFAULT_AC_FRACTION,
            ac_height: 0.0,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the aerodynamic-center chord fraction, which must lie in `[0, 1]`.
    pub fn with_ac_fraction(mut self, ac_fraction: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&ac_fraction) {
            return Err(GeometryError::Validation(format!(
                "airfoil '{}': aerodynamic center fraction {} not in [0, 1]",
                self.name, ac_fraction
            )));
        }
        self.ac_fraction = ac_fraction;
        Ok(self)
    }

    pub fn with_ac_height(mut self, ac_height: f64) -> Self {
        self.ac_height = ac_height;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn ac_fraction(&self) -> f64 {
        self.ac_fraction
    }

    pub fn ac_height(&self) -> f64 {
        self.ac_height
    }
}

impl fmt::Display for Airfoil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
