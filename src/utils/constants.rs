/// Spanwise coordinates within this distance of zero count as the centerline (m).
pub const CENTERLINE_TOLERANCE: f64 = 1e-9;

/// Default aerodynamic-center position as a fraction of the local chord.
pub const DEFAULT_AC_FRACTION: f64 = 0.25;

/// Default mass assigned to a surface (kg).
pub const DEFAULT_SURFACE_MASS: f64 = 1.0;

/// Reference area, chord and span of an aircraft before a reference surface is chosen.
pub const DEFAULT_REFERENCE_VALUE: f64 = 1.0;

/// Default vortex-lattice discretization: chordwise count, spacing, spanwise count, spacing.
pub const DEFAULT_DISCRETIZATION: &str = "10 1.0 15 -1.0";
