use std::fs;

use crate::{StarSystem, SystemConfig, SystemError};

const MINIMAL_JSON: &str = r#"{
    "star": {
        "luminosity": 0.3,
        "mass": 0.8,
        "temperature": 4900.0,
        "age": 4.6,
        "activity": 0.0,
        "galaxy": "Andromeda",
        "metallicity": 1.0,
        "magneticField": 0.0,
        "rotationPeriod": 25.0,
        "spectralClass": "K"
    }
}"#;

#[test]
fn test_reference_config_builds() {
    let system = SystemConfig::reference().build().unwrap();

    assert_eq!(system.star().galaxy(), "Milky Way");
    let names: Vec<&str> = system.planets().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["Earth", "Mars", "Venus", "Kepler-442b"]);
}

#[test]
fn test_config_round_trips_through_json() {
    let config = SystemConfig::reference();
    let json = config.to_json_pretty().unwrap();
    assert!(json.contains("\"orbitalDistance\""));
    assert!(json.contains("\"spectralClass\": \"G\""));

    assert_eq!(SystemConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn test_planets_default_to_empty() {
    let config = SystemConfig::from_json_str(MINIMAL_JSON).unwrap();
    assert!(config.planets.is_empty());
    assert_eq!(config.star.galaxy, "Andromeda");
    assert_eq!(config.star.luminosity, 0.3);
}

#[test]
fn test_malformed_json_is_a_config_error() {
    let err = SystemConfig::from_json_str("{ \"star\": ").unwrap_err();
    assert!(matches!(err, SystemError::Config(_)));

    let err = SystemConfig::from_json_str(r#"{ "planets": [] }"#).unwrap_err();
    assert!(err.to_string().contains("star"), "{}", err);

    let unknown_class = MINIMAL_JSON.replace("\"K\"", "\"X\"");
    assert!(matches!(
        SystemConfig::from_json_str(&unknown_class),
        Err(SystemError::Config(_))
    ));
}

#[test]
fn test_out_of_range_values_parse_but_do_not_build() {
    let json = MINIMAL_JSON.replace("\"luminosity\": 0.3", "\"luminosity\": -0.3");
    let config = SystemConfig::from_json_str(&json).unwrap();
    assert!(matches!(
        config.build(),
        Err(SystemError::InvalidStarParameter(_))
    ));

    // Deserializing the system directly validates on the way in
    let err = serde_json::from_str::<StarSystem>(&json).unwrap_err();
    assert!(err.to_string().contains("luminosity"), "{}", err);
}

#[test]
fn test_star_system_serializes_as_config() {
    let system = SystemConfig::reference().build().unwrap();
    let json = serde_json::to_string(&system).unwrap();
    let back: StarSystem = serde_json::from_str(&json).unwrap();
    assert_eq!(back, system);
}

#[test]
fn test_from_path() {
    let path = std::env::temp_dir().join(format!(
        "star-system-config-test-{}.json",
        std::process::id()
    ));
    fs::write(&path, MINIMAL_JSON).unwrap();

    let config = SystemConfig::from_path(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(config.star.galaxy, "Andromeda");
}

#[test]
fn test_missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("star-system-config-test-does-not-exist.json");

    match SystemConfig::from_path(&path) {
        Err(SystemError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected io error, got {:?}", other),
    }
}
