use nalgebra::Vector3;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::components::aircraft::config::LinearCoefficients;
use crate::components::{Aircraft, Airfoil, ControlSurface, Discretization, Section, Surface};
use crate::utils::{GeometryError, DEFAULT_AC_FRACTION, DEFAULT_SURFACE_MASS};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
    #[error("Unknown airfoil '{0}'")]
    UnknownAirfoil(String),
    #[error("Invalid geometry: {0}")]
    Geometry(#[from] GeometryError),
}

/// Declarative aircraft description as read from YAML.
#[derive(Debug, Deserialize)]
pub struct RawAircraftConfig {
    /// Aircraft identification
    pub name: String,
    /// Airfoils, referenced by name from sections
    #[serde(default)]
    pub airfoils: Vec<RawAirfoil>,
    /// Surfaces in attachment order
    pub surfaces: Vec<RawSurface>,
}

#[derive(Debug, Deserialize)]
pub struct RawAirfoil {
    pub name: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default = "default_ac_fraction")]
    pub aerodynamic_center: f64,
    #[serde(default)]
    pub ac_height: f64,
}

#[derive(Debug, Deserialize)]
pub struct RawSection {
    /// Leading edge (x forward, y right, z down)
    pub position: [f64; 3],
    pub chord: f64,
    /// Degrees
    #[serde(default)]
    pub incidence: f64,
    pub airfoil: String,
}

#[derive(Debug, Deserialize)]
pub struct RawSurface {
    pub label: String,
    pub sections: Vec<RawSection>,
    #[serde(default)]
    pub y_symmetry: bool,
    #[serde(default)]
    pub vertical: bool,
    #[serde(default)]
    pub discretization: Option<String>,

    /// Mass properties
    #[serde(default = "default_mass")]
    pub mass: f64,
    #[serde(default)]
    pub cg: [f64; 3],

    /// Placement on the aircraft
    #[serde(default)]
    pub placement: [f64; 3],
    #[serde(default)]
    pub incidence: f64,
    #[serde(default)]
    pub group: u32,
    #[serde(default)]
    pub reference: bool,

    #[serde(default)]
    pub controls: Vec<ControlSurface>,
    #[serde(default)]
    pub coefficients: Option<LinearCoefficients>,
}

fn default_ac_fraction() -> f64 {
    DEFAULT_AC_FRACTION
}

fn default_mass() -> f64 {
    DEFAULT_SURFACE_MASS
}

impl RawAircraftConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        info!("Loading aircraft config from {}", path.display());
        Self::from_yaml_str(&text)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Resolves airfoil names, builds every surface and attaches them in order.
    pub fn build(&self) -> Result<Aircraft, ConfigError> {
        let airfoils = self.build_airfoils()?;
        let mut aircraft = Aircraft::new(&self.name);

        for raw in &self.surfaces {
            let surface = raw.build(&airfoils)?;
            aircraft.add_surface(
                surface,
                &raw.label,
                Vector3::from(raw.placement),
                raw.incidence,
                raw.group,
                raw.reference,
            );
        }

        info!(
            "Built aircraft '{}' with {} surfaces, mass {:.3} kg",
            aircraft.name(),
            aircraft.surfaces().len(),
            aircraft.mass()
        );
        Ok(aircraft)
    }

    fn build_airfoils(&self) -> Result<HashMap<String, Arc<Airfoil>>, ConfigError> {
        let mut airfoils = HashMap::new();
        for raw in &self.airfoils {
            let mut airfoil = Airfoil::new(&raw.name)
                .with_ac_fraction(raw.aerodynamic_center)?
                .with_ac_height(raw.ac_height);
            if let Some(path) = &raw.path {
                airfoil = airfoil.with_source(path);
            }
            if airfoils.insert(raw.name.clone(), Arc::new(airfoil)).is_some() {
                return Err(ConfigError::ValidationError(format!(
                    "airfoil '{}' declared more than once",
                    raw.name
                )));
            }
        }
        Ok(airfoils)
    }
}

impl RawSurface {
    fn build(&self, airfoils: &HashMap<String, Arc<Airfoil>>) -> Result<Surface, ConfigError> {
        let sections = self
            .sections
            .iter()
            .map(|raw| -> Result<Section, ConfigError> {
                let airfoil = airfoils
                    .get(&raw.airfoil)
                    .ok_or_else(|| ConfigError::UnknownAirfoil(raw.airfoil.clone()))?;
                Ok(Section::new(
                    Vector3::from(raw.position),
                    raw.chord,
                    raw.incidence,
                    Arc::clone(airfoil),
                )?)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let discretization = match &self.discretization {
            Some(text) => text.parse::<Discretization>()?,
            None => Discretization::default(),
        };

        let mut surface = Surface::new(&sections, self.y_symmetry, self.vertical)
            .map_err(|e| match e {
                GeometryError::Validation(msg) => {
                    ConfigError::ValidationError(format!("surface '{}': {}", self.label, msg))
                }
                other => ConfigError::Geometry(other),
            })?
            .with_discretization(discretization)
            .with_mass_properties(self.mass, Vector3::from(self.cg))?;

        for control in &self.controls {
            surface = surface.with_control(control.clone())?;
        }
        if let Some(coefficients) = self.coefficients {
            surface = surface.with_coefficients(Arc::new(coefficients));
        }
        Ok(surface)
    }
}

/// Reads and builds an aircraft from a YAML file in one step.
pub fn load_aircraft(path: impl AsRef<Path>) -> Result<Aircraft, ConfigError> {
    RawAircraftConfig::from_file(path)?.build()
}
