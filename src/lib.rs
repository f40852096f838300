//! Planform geometry of aircraft lifting surfaces.
//!
//! Surfaces are described by piecewise-linear spanwise stations; span, reference
//! area, mean aerodynamic chord, aspect ratio and aerodynamic center are derived
//! once at construction. Surfaces are composed into an [`Aircraft`] that tracks
//! reference values and a mass-weighted center of gravity.

pub mod components;
pub mod utils;

pub use components::{
    load_aircraft, Aircraft, AircraftGeometry, Airfoil, AttachedSurface, CoefficientModel,
    ConfigError, ControlSurface, Discretization, LinearCoefficients, MassModel,
    RawAircraftConfig, Section, Surface, SurfaceGeometry, ZeroCoefficients,
};
pub use utils::{GeometryError, SpanAxis};
