mod aero_coef;
mod geometry;
mod loader;
mod mass;

pub use aero_coef::{CoefficientModel, LinearCoefficients, ZeroCoefficients};
pub use geometry::AircraftGeometry;
pub use loader::{
    load_aircraft, ConfigError, RawAircraftConfig, RawAirfoil, RawSection, RawSurface,
};
pub use mass::MassModel;
