pub mod config;
pub mod model;

pub use config::{
    load_aircraft, AircraftGeometry, CoefficientModel, ConfigError, LinearCoefficients,
    MassModel, RawAircraftConfig, ZeroCoefficients,
};
pub use model::{Aircraft, AttachedSurface};
