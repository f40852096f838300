use approx::assert_relative_eq;
use nalgebra::Vector3;
use planform::{GeometryError, Surface};

use crate::common::{
    assert_geometry_valid, assert_sorted_by_span, fin_sections, horizontal_tail, s1223rtl,
    section, twin_fins, wing, wing_sections,
};

#[test]
fn test_rectangular_wing_reference_values() {
    let foil = s1223rtl();
    let (c0, b0) = (0.35, 2.4);
    let surface = Surface::new(
        &[
            section([0.0, -b0 / 2.0, 0.0], c0, &foil),
            section([0.0, b0 / 2.0, 0.0], c0, &foil),
        ],
        false,
        false,
    )
    .unwrap();

    assert_geometry_valid(surface.geometry());
    assert_relative_eq!(surface.span(), b0);
    assert_relative_eq!(surface.area(), c0 * b0, epsilon = 1e-12);
    assert_relative_eq!(surface.mac(), c0, epsilon = 1e-12);
    assert_relative_eq!(surface.aspect_ratio(), b0 / c0, epsilon = 1e-12);
}

#[test]
fn test_symmetric_expansion_mirrors_chords() {
    let foil = s1223rtl();
    let half = vec![
        section([0.0, 0.0, 0.0], 0.5, &foil),
        section([0.0, 1.0, 0.0], 0.4, &foil),
        section([0.0, 2.0, 0.0], 0.3, &foil),
    ];
    let surface = Surface::new(&half, true, false).unwrap();

    assert_sorted_by_span(&surface);
    let stations: Vec<(f64, f64)> = surface
        .sections()
        .iter()
        .map(|s| (s.position().y, s.chord()))
        .collect();
    assert_eq!(
        stations,
        vec![(-2.0, 0.3), (-1.0, 0.4), (0.0, 0.5), (1.0, 0.4), (2.0, 0.3)]
    );
}

#[test]
fn test_golden_wing() {
    let wing = wing();
    assert_sorted_by_span(&wing);
    assert_geometry_valid(wing.geometry());

    // 2 * (0.49 * 0.96 + 0.14 * (0.49 + 0.25) / 2)
    let area = 2.0 * (0.49 * 0.96 + 0.14 * (0.49 + 0.25) / 2.0);
    assert_relative_eq!(wing.span(), 2.20, epsilon = 1e-12);
    assert_relative_eq!(wing.area(), area, epsilon = 1e-12);
    assert_relative_eq!(wing.area(), 1.0444, epsilon = 1e-12);
    assert_relative_eq!(wing.mac(), 0.479_383_378_016_085_8, epsilon = 1e-12);
    assert_relative_eq!(wing.aspect_ratio(), 4.634_239_754_883_187, epsilon = 1e-12);
    assert_relative_eq!(
        *wing.aerodynamic_center(),
        Vector3::new(0.25 * area / 2.2, 0.0, 0.0),
        epsilon = 1e-12
    );
}

#[test]
fn test_chord_at_stations_is_exact() {
    let wing = wing();
    for section in wing.sections() {
        assert_eq!(wing.chord(section.position().y).unwrap(), section.chord());
    }
    assert_relative_eq!(wing.chord(1.03).unwrap(), 0.37, epsilon = 1e-12);
    assert_relative_eq!(wing.chord(-1.03).unwrap(), 0.37, epsilon = 1e-12);
}

#[test]
fn test_queries_past_tip_fail_consistently() {
    let wing = wing();
    let past_tip = 1.2;
    let expected = GeometryError::OutOfRange {
        coordinate: past_tip,
        min: -1.1,
        max: 1.1,
    };
    assert_eq!(wing.chord(past_tip), Err(expected.clone()));
    assert_eq!(wing.aerodynamic_center_offset(past_tip), Err(expected.clone()));
    assert_eq!(wing.leading_edge(past_tip), Err(expected));
}

#[test]
fn test_coincident_stations_rejected() {
    let foil = s1223rtl();
    let result = Surface::new(
        &[
            section([0.0, 0.4, 0.0], 0.3, &foil),
            section([0.0, 0.4, 0.0], 0.2, &foil),
        ],
        false,
        false,
    );
    assert!(matches!(
        result,
        Err(GeometryError::DegenerateGeometry { index: 0, coordinate }) if coordinate == 0.4
    ));
}

#[test]
fn test_horizontal_tail() {
    let tail = horizontal_tail();
    assert_relative_eq!(tail.span(), 1.5);
    assert_relative_eq!(tail.area(), 0.435, epsilon = 1e-12);
    assert_relative_eq!(tail.aspect_ratio(), 1.5 * 1.5 / 0.435, epsilon = 1e-12);
}

#[test]
fn test_twin_fins() {
    let fins = twin_fins();
    assert!(fins.is_vertical());
    assert_eq!(fins.original_sections().len(), 2);
    assert_eq!(fins.sections().len(), 4);

    let (fin, mirror) = fins.sections().split_at(2);
    for half in [fin, mirror] {
        assert!(half[0].position().z < half[1].position().z);
        assert_eq!(half[0].position().y, half[1].position().y);
    }
    assert_eq!(fin[0].position().y, 0.75);
    assert_eq!(mirror[0].position().y, -0.75);

    assert_relative_eq!(fins.span(), 0.2, epsilon = 1e-12);
    assert_relative_eq!(fins.area(), 0.058, epsilon = 1e-12);
    assert_relative_eq!(
        *fins.aerodynamic_center(),
        Vector3::new(0.0625, 0.75, -0.1),
        epsilon = 1e-12
    );
}

#[test]
fn test_off_center_fin_integrates_over_its_own_stations() {
    // A single fin rooted at z = 0 does not straddle the centerline, so the
    // reference values come from its defined range [-0.2, 0].
    let fin = Surface::new(&fin_sections(), false, true).unwrap();
    assert_sorted_by_span(&fin);
    assert_geometry_valid(fin.geometry());

    assert_relative_eq!(fin.span(), 0.2, epsilon = 1e-12);
    assert_relative_eq!(fin.area(), 0.058, epsilon = 1e-12);
    assert_relative_eq!(fin.aspect_ratio(), 0.04 / 0.058, epsilon = 1e-12);
    assert_relative_eq!(
        *fin.aerodynamic_center(),
        Vector3::new(0.0625, 0.75, -0.1),
        epsilon = 1e-12
    );
    assert_relative_eq!(fin.chord(-0.1).unwrap(), 0.29, epsilon = 1e-12);
    assert!(matches!(
        fin.chord(0.1),
        Err(GeometryError::OutOfRange { min, max, .. }) if min == -0.2 && max == 0.0
    ));
}

#[test]
fn test_construction_leaves_input_intact() {
    let half = wing_sections();
    let snapshot: Vec<_> = half.iter().map(|s| (*s.position(), s.chord())).collect();
    let _wing = Surface::new(&half, true, false).unwrap();
    let after: Vec<_> = half.iter().map(|s| (*s.position(), s.chord())).collect();
    assert_eq!(snapshot, after);

    let fins = fin_sections();
    let _fins = Surface::new(&fins, true, true).unwrap();
    assert_eq!(fins.len(), 2);
}
