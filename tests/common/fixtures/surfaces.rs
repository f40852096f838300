use nalgebra::Vector3;
use planform::{Airfoil, Section, Surface};
use std::sync::Arc;

pub fn s1223rtl() -> Arc<Airfoil> {
    Arc::new(Airfoil::new("S1223RTL").with_source("airfoils/s1223rtl.dat"))
}

pub fn e193inv() -> Arc<Airfoil> {
    Arc::new(Airfoil::new("E193INV").with_source("airfoils/e193inv.dat"))
}

pub fn e169() -> Arc<Airfoil> {
    Arc::new(Airfoil::new("E169").with_source("airfoils/e169.dat"))
}

pub fn section(position: [f64; 3], chord: f64, airfoil: &Arc<Airfoil>) -> Section {
    Section::new(Vector3::from(position), chord, 0.0, Arc::clone(airfoil))
        .expect("fixture section is valid")
}

/// Half-span wing stations: constant chord to 0.96 m, tapering to the tip.
pub fn wing_sections() -> Vec<Section> {
    let foil = s1223rtl();
    vec![
        section([0.0, 0.0, 0.0], 0.49, &foil),
        section([0.0, 0.96, 0.0], 0.49, &foil),
        section([0.0, 1.10, 0.0], 0.25, &foil),
    ]
}

pub fn horizontal_tail_sections() -> Vec<Section> {
    let foil = e193inv();
    vec![
        section([0.0, 0.0, 0.0], 0.29, &foil),
        section([0.0, 0.75, 0.0], 0.29, &foil),
    ]
}

/// One fin of a twin tail, root at z = 0 and tip 0.2 m above it.
pub fn fin_sections() -> Vec<Section> {
    let foil = e169();
    vec![
        section([-0.02, 0.75, -0.20], 0.28, &foil),
        section([0.0, 0.75, 0.0], 0.30, &foil),
    ]
}

pub fn wing() -> Surface {
    Surface::new(&wing_sections(), true, false).expect("fixture wing is valid")
}

pub fn horizontal_tail() -> Surface {
    Surface::new(&horizontal_tail_sections(), true, false).expect("fixture tail is valid")
}

pub fn twin_fins() -> Surface {
    Surface::new(&fin_sections(), true, true).expect("fixture fins are valid")
}
