mod analysis;
mod control;
mod discretization;
mod interpolation;

pub use analysis::{analyze, SurfaceGeometry};
pub use control::ControlSurface;
pub use discretization::Discretization;
pub use interpolation::Stations;

use nalgebra::Vector3;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::components::aircraft::config::{CoefficientModel, MassModel, ZeroCoefficients};
use crate::components::Section;
use crate::utils::{GeometryError, Result, SpanAxis, CENTERLINE_TOLERANCE};

/// A lifting surface (wing, tail, fin) defined by spanwise stations.
///
/// Reference geometry is derived once during construction and the station list
/// is never exposed mutably, so the derived values cannot go stale. To change
/// the planform, build a new `Surface`.
#[derive(Debug, Clone, Serialize)]
pub struct Surface {
    original_sections: Vec<Section>,
    sections: Vec<Section>,
    axis: SpanAxis,
    y_symmetry: bool,
    geometry: SurfaceGeometry,
    discretization: Discretization,
    mass: MassModel,
    controls: Vec<ControlSurface>,
    #[serde(skip)]
    coefficients: Arc<dyn CoefficientModel>,
}

impl Surface {
    /// Builds a surface and derives its reference geometry.
    ///
    /// # Arguments
    /// * `sections` - Stations ordered by increasing spanwise coordinate. Copied;
    ///                the caller's list is left untouched.
    /// * `y_symmetry` - Mirror the stations across the centerline to form the
    ///                  full span.
    /// * `vertical` - Span along z instead of y.
    ///
    /// # Errors
    /// `Validation` for fewer than two sections or misordered stations,
    /// `DegenerateGeometry` when consecutive stations coincide.
    pub fn new(sections: &[Section], y_symmetry: bool, vertical: bool) -> Result<Self> {
        if sections.len() < 2 {
            return Err(GeometryError::Validation(format!(
                "at least 2 sections required, got {}",
                sections.len()
            )));
        }

        let original_sections = sections.to_vec();
        let expanded = if y_symmetry && vertical {
            expand_twin_fins(&original_sections)
        } else if y_symmetry {
            expand_symmetric(&original_sections)
        } else {
            original_sections.clone()
        };

        let mut surface = Self {
            original_sections,
            sections: expanded,
            axis: SpanAxis::from_vertical(vertical),
            y_symmetry,
            geometry: SurfaceGeometry {
                span: 0.0,
                area: 0.0,
                mac: 0.0,
                aspect_ratio: 0.0,
                aerodynamic_center: Vector3::zeros(),
            },
            discretization: Discretization::default(),
            mass: MassModel::default(),
            controls: Vec::new(),
            coefficients: Arc::new(ZeroCoefficients),
        };

        let geometry = analyze(&surface.stations())?;
        surface.geometry = geometry;

        debug!(
            "Surface analyzed: {} stations, b={:.4}, S={:.4}, c={:.4}, AR={:.4}",
            surface.sections.len(),
            surface.geometry.span,
            surface.geometry.area,
            surface.geometry.mac,
            surface.geometry.aspect_ratio
        );
        Ok(surface)
    }

    /// Replaces the panel layout handed to the solver-input writer.
    pub fn with_discretization(mut self, discretization: Discretization) -> Self {
        self.discretization = discretization;
        self
    }

    /// Sets the surface mass (kg) and CG in the surface's own frame (m).
    pub fn with_mass_properties(mut self, mass: f64, cg: Vector3<f64>) -> Result<Self> {
        self.mass = MassModel::new(mass, cg)?;
        Ok(self)
    }

    /// Replaces the coefficient model; the default returns zero everywhere.
    pub fn with_coefficients(mut self, coefficients: Arc<dyn CoefficientModel>) -> Self {
        self.coefficients = coefficients;
        self
    }

    /// Attaches a control surface lying within the defined span.
    pub fn with_control(mut self, control: ControlSurface) -> Result<Self> {
        if !(control.chord_fraction > 0.0 && control.chord_fraction <= 1.0) {
            return Err(GeometryError::Validation(format!(
                "control '{}': chord fraction {} not in (0, 1]",
                control.name, control.chord_fraction
            )));
        }
        let (min, max) = self.stations().range();
        for coordinate in [control.span_start, control.span_end] {
            if !(min..=max).contains(&coordinate) {
                return Err(GeometryError::OutOfRange { coordinate, min, max });
            }
        }
        if control.span_start >= control.span_end {
            return Err(GeometryError::Validation(format!(
                "control '{}': span start {} must be below span end {}",
                control.name, control.span_start, control.span_end
            )));
        }
        self.controls.push(control);
        Ok(self)
    }

    /// Stations used for interpolation and analysis.
    ///
    /// A symmetric vertical surface is a pair of fins at the same heights, so
    /// one fin's stations describe the planform.
    pub fn stations(&self) -> Stations<'_> {
        let sections = if self.axis == SpanAxis::Z && self.y_symmetry {
            &self.original_sections
        } else {
            &self.sections
        };
        Stations::new(sections, self.axis)
    }

    pub fn chord(&self, s: f64) -> Result<f64> {
        self.stations().chord(s)
    }

    pub fn aerodynamic_center_offset(&self, s: f64) -> Result<f64> {
        self.stations().aerodynamic_center_offset(s)
    }

    pub fn leading_edge(&self, s: f64) -> Result<Vector3<f64>> {
        self.stations().leading_edge(s)
    }

    /// Sections as supplied, before symmetry expansion.
    pub fn original_sections(&self) -> &[Section] {
        &self.original_sections
    }

    /// Full-span sections after symmetry expansion.
    ///
    /// Sorted along the span axis, except for a symmetric vertical surface:
    /// there the list is the supplied fin followed by its mirror image, each
    /// fin sorted along z on its own.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn y_symmetry(&self) -> bool {
        self.y_symmetry
    }

    pub fn is_vertical(&self) -> bool {
        self.axis == SpanAxis::Z
    }

    pub fn axis(&self) -> SpanAxis {
        self.axis
    }

    pub fn geometry(&self) -> &SurfaceGeometry {
        &self.geometry
    }

    pub fn span(&self) -> f64 {
        self.geometry.span
    }

    pub fn area(&self) -> f64 {
        self.geometry.area
    }

    pub fn mac(&self) -> f64 {
        self.geometry.mac
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.geometry.aspect_ratio
    }

    pub fn aerodynamic_center(&self) -> &Vector3<f64> {
        &self.geometry.aerodynamic_center
    }

    pub fn discretization(&self) -> &Discretization {
        &self.discretization
    }

    pub fn mass_properties(&self) -> &MassModel {
        &self.mass
    }

    pub fn controls(&self) -> &[ControlSurface] {
        &self.controls
    }

    pub fn coefficients(&self) -> &dyn CoefficientModel {
        self.coefficients.as_ref()
    }
}

/// Mirrors a half-span station list into a full-span one.
///
/// A leading station on the centerline is kept once as the middle station;
/// otherwise every station is mirrored.
fn expand_symmetric(half: &[Section]) -> Vec<Section> {
    let (centerline, outboard) = match half.split_first() {
        Some((first, rest)) if first.position().y.abs() <= CENTERLINE_TOLERANCE => {
            (Some(first), rest)
        }
        _ => (None, half),
    };

    let mut full = Vec::with_capacity(2 * outboard.len() + 1);
    full.extend(outboard.iter().rev().map(Section::mirrored));
    full.extend(centerline.cloned());
    full.extend(outboard.iter().cloned());
    full
}

/// Twin fins: the supplied fin followed by its mirror image in the same order.
fn expand_twin_fins(fin: &[Section]) -> Vec<Section> {
    fin.iter()
        .cloned()
        .chain(fin.iter().map(Section::mirrored))
        .collect()
}
