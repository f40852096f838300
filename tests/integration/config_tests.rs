use approx::assert_relative_eq;
use planform::{load_aircraft, ConfigError, Discretization, RawAircraftConfig};
use pretty_assertions::assert_eq;
use std::io::Write;

use crate::common::{jf21, JF21_YAML};

#[test]
fn test_yaml_matches_programmatic_aircraft() {
    let loaded = RawAircraftConfig::from_yaml_str(JF21_YAML)
        .unwrap()
        .build()
        .unwrap();
    let built = jf21();

    assert_eq!(loaded.name(), built.name());
    assert_eq!(loaded.groups(), built.groups());
    assert_eq!(loaded.reference(), built.reference());
    assert_relative_eq!(loaded.mass(), built.mass());
    assert_relative_eq!(
        *loaded.center_of_gravity(),
        *built.center_of_gravity(),
        epsilon = 1e-12
    );
    for (a, b) in loaded.surfaces().iter().zip(built.surfaces()) {
        assert_eq!(a.label, b.label);
        assert_eq!(a.surface.geometry(), b.surface.geometry());
    }
}

#[test]
fn test_yaml_optional_fields() {
    let aircraft = RawAircraftConfig::from_yaml_str(JF21_YAML)
        .unwrap()
        .build()
        .unwrap();

    let wing = &aircraft.surface("Wing").unwrap().surface;
    assert_eq!(wing.controls().len(), 1);
    assert_eq!(wing.controls()[0].name, "aileron");
    assert_eq!(wing.controls()[0].gain, 1.0);

    let ht = &aircraft.surface("HT").unwrap().surface;
    assert_eq!(
        *ht.discretization(),
        Discretization {
            chordwise: 8,
            chordwise_spacing: 1.0,
            spanwise: 10,
            spanwise_spacing: -1.0,
        }
    );
    assert_relative_eq!(ht.coefficients().cl(0.1, 0.0), 0.45, epsilon = 1e-12);
    assert_relative_eq!(ht.coefficients().cd(0.0, 0.0), 0.01);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(JF21_YAML.as_bytes()).unwrap();

    let aircraft = load_aircraft(file.path()).unwrap();
    assert_eq!(aircraft.surfaces().len(), 3);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_aircraft(dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(ConfigError::FileError(_))));
}

#[test]
fn test_control_outside_span_rejected() {
    let text = JF21_YAML.replace("span_end: 1.1", "span_end: 1.3");
    let result = RawAircraftConfig::from_yaml_str(&text).unwrap().build();
    assert!(matches!(result, Err(ConfigError::Geometry(_))));
}
