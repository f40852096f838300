//! Builds a three-surface model aircraft and prints its reference values.
//!
//! Run with `RUST_LOG=debug` to see per-surface analysis output.

use nalgebra::Vector3;
use planform::{Aircraft, Airfoil, GeometryError, Section, Surface};
use std::sync::Arc;

fn main() -> Result<(), GeometryError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let s1223rtl = Arc::new(Airfoil::new("S1223RTL").with_source("airfoils/s1223rtl.dat"));
    let e169 = Arc::new(Airfoil::new("E169").with_source("airfoils/e169.dat"));
    let e193inv = Arc::new(Airfoil::new("E193INV").with_source("airfoils/e193inv.dat"));

    let wing = Surface::new(
        &[
            Section::new(Vector3::new(0.0, 0.0, 0.0), 0.49, 0.0, s1223rtl.clone())?,
            Section::new(Vector3::new(0.0, 0.96, 0.0), 0.49, 0.0, s1223rtl.clone())?,
            Section::new(Vector3::new(0.0, 1.10, 0.0), 0.25, 0.0, s1223rtl)?,
        ],
        true,
        false,
    )?;

    let ht = Surface::new(
        &[
            Section::new(Vector3::new(0.0, 0.0, 0.0), 0.29, 0.0, e193inv.clone())?,
            Section::new(Vector3::new(0.0, 0.75, 0.0), 0.29, 0.0, e193inv)?,
        ],
        true,
        false,
    )?;

    let vt = Surface::new(
        &[
            Section::new(Vector3::new(-0.02, 0.75, -0.20), 0.28, 0.0, e169.clone())?,
            Section::new(Vector3::new(0.0, 0.75, 0.0), 0.30, 0.0, e169)?,
        ],
        true,
        true,
    )?;

    let tail = Vector3::new(-0.415, 0.0, -0.438);
    let mut aircraft = Aircraft::new("JF21");
    aircraft.add_surface(wing, "Wing", Vector3::zeros(), 6.0, 0, true);
    aircraft.add_surface(ht, "HT", tail, -2.0, 1, false);
    aircraft.add_surface(vt, "VT", tail, 0.0, 1, false);

    for attached in aircraft.surfaces() {
        let geometry = attached.surface.geometry();
        println!(
            "{:<5} b={:.3} S={:.4} c={:.4} AR={:.3} AC=({:.4}, {:.4}, {:.4})",
            attached.label,
            geometry.span,
            geometry.area,
            geometry.mac,
            geometry.aspect_ratio,
            geometry.aerodynamic_center.x,
            geometry.aerodynamic_center.y,
            geometry.aerodynamic_center.z,
        );
    }

    let cg = aircraft.center_of_gravity();
    println!(
        "{}: Sref={:.4} cref={:.4} bref={:.3} mass={:.2} CG=({:.4}, {:.4}, {:.4})",
        aircraft.name(),
        aircraft.reference_area(),
        aircraft.reference_chord(),
        aircraft.reference_span(),
        aircraft.mass(),
        cg.x,
        cg.y,
        cg.z
    );
    Ok(())
}
