use nalgebra::Vector3;
use serde::Serialize;
use tracing::{info, warn};

use crate::components::aircraft::config::{AircraftGeometry, MassModel};
use crate::components::Surface;
use crate::utils::deg_to_rad;

/// A surface mounted on an aircraft.
#[derive(Debug, Clone, Serialize)]
pub struct AttachedSurface {
    pub surface: Surface,
    pub label: String,
    /// Offset of the surface's local origin in aircraft coordinates (m).
    pub placement: Vector3<f64>,
    /// Incidence of the whole surface (degrees).
    pub incidence: f64,
    /// Grouping tag; surfaces sharing a group are treated as one component downstream.
    pub group: u32,
}

impl AttachedSurface {
    pub fn incidence_rad(&self) -> f64 {
        deg_to_rad(self.incidence)
    }

    /// Surface mass with its CG expressed in aircraft coordinates.
    pub fn placed_mass(&self) -> MassModel {
        self.surface.mass_properties().translated(&self.placement)
    }
}

/// A whole aircraft assembled from lifting surfaces.
#[derive(Debug, Clone, Serialize)]
pub struct Aircraft {
    name: String,
    surfaces: Vec<AttachedSurface>,
    reference: AircraftGeometry,
    reference_label: Option<String>,
    mass: MassModel,
}

impl Aircraft {
    /// An aircraft with no surfaces, zero mass and unit reference values.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surfaces: Vec::new(),
            reference: AircraftGeometry::default(),
            reference_label: None,
            mass: MassModel::empty(),
        }
    }

    /// Attaches a surface and folds its mass into the aircraft total and CG.
    ///
    /// # Arguments
    /// * `surface` - The surface, owned by the aircraft from now on.
    /// * `label` - Display name.
    /// * `placement` - Position of the surface origin in aircraft coordinates (m).
    /// * `incidence` - Surface incidence (degrees).
    /// * `group` - Grouping tag, not validated.
    /// * `make_reference` - Take the aircraft reference area, chord and span from
    ///                      this surface. The last surface to do so wins.
    pub fn add_surface(
        &mut self,
        surface: Surface,
        label: impl Into<String>,
        placement: Vector3<f64>,
        incidence: f64,
        group: u32,
        make_reference: bool,
    ) {
        let attached = AttachedSurface {
            surface,
            label: label.into(),
            placement,
            incidence,
            group,
        };

        let placed = attached.placed_mass();
        self.mass.combine(placed.mass, placed.cg);

        if make_reference {
            if let Some(previous) = &self.reference_label {
                warn!(
                    "Reference surface '{}' replaced by '{}'",
                    previous, attached.label
                );
            }
            self.reference = AircraftGeometry::from_surface(attached.surface.geometry());
            self.reference_label = Some(attached.label.clone());
        }

        info!(
            "Attached surface '{}' to '{}' (group {}): mass={:.3}, CG=({:.4}, {:.4}, {:.4})",
            attached.label,
            self.name,
            group,
            self.mass.mass,
            self.mass.cg.x,
            self.mass.cg.y,
            self.mass.cg.z
        );
        self.surfaces.push(attached);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attached surfaces in the order they were added.
    pub fn surfaces(&self) -> &[AttachedSurface] {
        &self.surfaces
    }

    /// The first attached surface with the given label.
    pub fn surface(&self, label: &str) -> Option<&AttachedSurface> {
        self.surfaces.iter().find(|s| s.label == label)
    }

    /// Distinct group tags in first-seen order.
    pub fn groups(&self) -> Vec<u32> {
        let mut groups = Vec::new();
        for attached in &self.surfaces {
            if !groups.contains(&attached.group) {
                groups.push(attached.group);
            }
        }
        groups
    }

    pub fn reference(&self) -> &AircraftGeometry {
        &self.reference
    }

    /// Label of the surface that supplied the reference values, if any.
    pub fn reference_label(&self) -> Option<&str> {
        self.reference_label.as_deref()
    }

    pub fn reference_area(&self) -> f64 {
        self.reference.wing_area
    }

    pub fn reference_chord(&self) -> f64 {
        self.reference.mac
    }

    pub fn reference_span(&self) -> f64 {
        self.reference.wing_span
    }

    /// Sum of the masses of every attached surface (kg).
    pub fn mass(&self) -> f64 {
        self.mass.mass
    }

    /// Mass-weighted centroid of every attached surface (m).
    pub fn center_of_gravity(&self) -> &Vector3<f64> {
        &self.mass.cg
    }

    pub fn mass_model(&self) -> &MassModel {
        &self.mass
    }
}
