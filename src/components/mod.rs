pub mod aircraft;
pub mod airfoil;
pub mod section;
pub mod surface;

pub use aircraft::{
    load_aircraft, Aircraft, AircraftGeometry, AttachedSurface, CoefficientModel, ConfigError,
    LinearCoefficients, MassModel, RawAircraftConfig, ZeroCoefficients,
};
pub use airfoil::Airfoil;
pub use section::Section;
pub use surface::{ControlSurface, Discretization, Stations, Surface, SurfaceGeometry};
