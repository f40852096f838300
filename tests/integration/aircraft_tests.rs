use approx::assert_relative_eq;
use nalgebra::Vector3;
use planform::Aircraft;

use crate::common::{horizontal_tail, jf21, wing, TAIL_PLACEMENT};

#[test]
fn test_two_surface_cg() {
    let mut aircraft = Aircraft::new("test");
    let first = wing().with_mass_properties(2.0, Vector3::zeros()).unwrap();
    let second = horizontal_tail()
        .with_mass_properties(3.0, Vector3::new(1.0, 0.0, 0.0))
        .unwrap();

    aircraft.add_surface(first, "Wing", Vector3::zeros(), 0.0, 0, false);
    assert_relative_eq!(aircraft.mass(), 2.0);
    assert_relative_eq!(*aircraft.center_of_gravity(), Vector3::zeros());

    aircraft.add_surface(second, "HT", Vector3::zeros(), 0.0, 1, false);
    assert_relative_eq!(aircraft.mass(), 5.0);
    assert_relative_eq!(
        *aircraft.center_of_gravity(),
        Vector3::new(0.6, 0.0, 0.0),
        epsilon = 1e-12
    );
}

#[test]
fn test_jf21_assembly() {
    let aircraft = jf21();

    assert_eq!(aircraft.surfaces().len(), 3);
    assert_eq!(aircraft.groups(), vec![0, 1]);
    assert_eq!(aircraft.reference_label(), Some("Wing"));
    assert_relative_eq!(aircraft.reference_area(), 1.0444, epsilon = 1e-12);
    assert_relative_eq!(aircraft.reference_span(), 2.2, epsilon = 1e-12);
    assert_relative_eq!(aircraft.reference_chord(), 0.479_383_378_016_085_8, epsilon = 1e-12);

    // Three unit masses, two of them at the tail placement
    assert_relative_eq!(aircraft.mass(), 3.0);
    let tail = Vector3::from(TAIL_PLACEMENT);
    assert_relative_eq!(
        *aircraft.center_of_gravity(),
        tail * 2.0 / 3.0,
        epsilon = 1e-12
    );
}

#[test]
fn test_attached_surface_data() {
    let aircraft = jf21();
    let ht = aircraft.surface("HT").unwrap();
    assert_eq!(ht.placement, Vector3::from(TAIL_PLACEMENT));
    assert_eq!(ht.incidence, -2.0);
    assert_eq!(ht.group, 1);
    assert_eq!(ht.surface.original_sections()[0].airfoil().name(), "E193INV");
    assert_eq!(
        ht.surface.original_sections()[0].airfoil().source(),
        Some("airfoils/e193inv.dat")
    );
}
