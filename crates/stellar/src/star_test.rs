use crate::{SpectralType, Star, StarParameters, StellarError, solar_analog};

#[test]
fn test_solar_reference_is_valid() {
    let sun = Star::new(StarParameters::solar_reference()).unwrap();
    assert_eq!(sun, solar_analog());

    assert_eq!(sun.luminosity(), 1.0);
    assert_eq!(sun.mass(), 1.0);
    assert_eq!(sun.temperature(), 5778.0);
    assert_eq!(sun.age(), 4.6);
    assert_eq!(sun.activity(), 0.2);
    assert_eq!(sun.galaxy(), "Milky Way");
    assert_eq!(sun.metallicity(), 1.0);
    assert_eq!(sun.magnetic_field(), 1.0);
    assert_eq!(sun.rotation_period(), 25.0);
    assert_eq!(sun.spectral_class(), SpectralType::G);
}

#[test]
fn test_zero_and_negative_luminosity_rejected() {
    for luminosity in [0.0, -0.5] {
        let result = Star::new(StarParameters {
            luminosity,
            ..StarParameters::solar_reference()
        });
        match result {
            Err(StellarError::InvalidParameter { field, value, .. }) => {
                assert_eq!(field, "luminosity");
                assert_eq!(value, luminosity);
            }
            other => panic!("expected invalid luminosity, got {:?}", other),
        }
    }
}

#[test]
fn test_out_of_domain_fields_rejected() {
    let sun = StarParameters::solar_reference;
    let cases = [
        (StarParameters { luminosity: f64::NAN, ..sun() }, "luminosity"),
        (StarParameters { mass: 0.0, ..sun() }, "mass"),
        (StarParameters { temperature: -10.0, ..sun() }, "temperature"),
        (StarParameters { age: -1.0, ..sun() }, "age"),
        (StarParameters { activity: 1.5, ..sun() }, "activity"),
        (StarParameters { activity: -0.1, ..sun() }, "activity"),
        (StarParameters { metallicity: -0.2, ..sun() }, "metallicity"),
        (StarParameters { magnetic_field: -1.0, ..sun() }, "magnetic_field"),
        (StarParameters { rotation_period: 0.0, ..sun() }, "rotation_period"),
        (StarParameters { rotation_period: f64::INFINITY, ..sun() }, "rotation_period"),
    ];

    for (parameters, expected_field) in cases {
        let err = Star::new(parameters).unwrap_err();
        assert_eq!(err.field(), expected_field);
    }
}

#[test]
fn test_boundary_values_accepted() {
    let sun = StarParameters::solar_reference;
    for parameters in [
        StarParameters { activity: 0.0, ..sun() },
        StarParameters { activity: 1.0, ..sun() },
        StarParameters { age: 0.0, ..sun() },
        StarParameters { magnetic_field: 0.0, ..sun() },
        StarParameters { metallicity: 0.0, ..sun() },
        StarParameters { luminosity: 1e-6, ..sun() },
    ] {
        assert!(Star::new(parameters.clone()).is_ok(), "{:?}", parameters);
    }
}

#[test]
fn test_error_message_names_field() {
    let err = Star::new(StarParameters {
        luminosity: 0.0,
        ..StarParameters::solar_reference()
    })
    .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("luminosity"), "{}", message);
    assert!(message.contains("> 0"), "{}", message);
}

#[test]
fn test_star_deserializes_through_validation() {
    let json = r#"{
        "luminosity": 0.0015,
        "mass": 0.12,
        "temperature": 3042.0,
        "age": 4.85,
        "activity": 0.8,
        "galaxy": "Milky Way",
        "metallicity": 1.2,
        "magneticField": 0.6,
        "rotationPeriod": 83.0,
        "spectralClass": "M"
    }"#;
    let star: Star = serde_json::from_str(json).unwrap();
    assert_eq!(star.spectral_class(), SpectralType::M);
    assert_eq!(star.rotation_period(), 83.0);

    let invalid = json.replace("\"luminosity\": 0.0015", "\"luminosity\": -2.0");
    let err = serde_json::from_str::<Star>(&invalid).unwrap_err();
    assert!(err.to_string().contains("luminosity"), "{}", err);
}

#[test]
fn test_star_serializes_as_parameters() {
    let value = serde_json::to_value(solar_analog()).unwrap();
    assert_eq!(value["luminosity"], 1.0);
    assert_eq!(value["rotationPeriod"], 25.0);
    assert_eq!(value["spectralClass"], "G");

    let back: Star = serde_json::from_value(value).unwrap();
    assert_eq!(back, solar_analog());
}

#[test]
fn test_temperature_class_mismatch() {
    let sun = StarParameters::solar_reference;
    assert_eq!(sun().temperature_class_mismatch(), None);

    // A 3000 K star labelled G is really an M dwarf
    let mislabelled = StarParameters { temperature: 3000.0, ..sun() };
    assert_eq!(mislabelled.temperature_class_mismatch(), Some(SpectralType::M));

    // The label is kept as configured
    let star = Star::new(mislabelled).unwrap();
    assert_eq!(star.spectral_class(), SpectralType::G);
}

#[test]
fn test_spectral_class_in_json_ignores_case() {
    let sun = StarParameters::solar_reference;
    let mut value = serde_json::to_value(sun()).unwrap();
    value["spectralClass"] = serde_json::json!("k");
    let parameters: StarParameters = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(parameters.spectral_class, SpectralType::K);

    value["spectralClass"] = serde_json::json!("Q");
    let err = serde_json::from_value::<StarParameters>(value).unwrap_err();
    assert!(err.to_string().contains("unknown spectral class `Q`"), "{}", err);
}
