use crate::spectral::SpectralType;

#[test]
fn spectral_type_display() {
    let letters: Vec<String> = SpectralType::ALL.iter().map(|c| c.to_string()).collect();
    assert_eq!(letters, ["O", "B", "A", "F", "G", "K", "M"]);
}

#[test]
fn spectral_type_parses_single_letters() {
    assert_eq!("G".parse::<SpectralType>(), Ok(SpectralType::G));
    assert_eq!("k".parse::<SpectralType>(), Ok(SpectralType::K));
    assert_eq!(" M ".parse::<SpectralType>(), Ok(SpectralType::M));
}

#[test]
fn spectral_type_rejects_unknown_labels() {
    let err = "X".parse::<SpectralType>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown spectral class `X` (expected one of O, B, A, F, G, K, M)"
    );
    assert!("BH".parse::<SpectralType>().is_err());
    assert!("".parse::<SpectralType>().is_err());
}

#[test]
fn spectral_type_from_temperature() {
    // Sun: 5778 K
    assert_eq!(SpectralType::from_temperature(5778.0), SpectralType::G);
    // Proxima Centauri: ~3000 K
    assert_eq!(SpectralType::from_temperature(3042.0), SpectralType::M);
    // Sirius A: ~9940 K
    assert_eq!(SpectralType::from_temperature(9940.0), SpectralType::A);
    assert_eq!(SpectralType::from_temperature(80_000.0), SpectralType::O);
    assert_eq!(SpectralType::from_temperature(500.0), SpectralType::M);
}

#[test]
fn spectral_type_temperature_ranges_are_contiguous() {
    for pair in SpectralType::ALL.windows(2) {
        let (hotter_min, _) = pair[0].temperature_range();
        let (_, cooler_max) = pair[1].temperature_range();
        assert_eq!(hotter_min, cooler_max, "{} / {}", pair[0], pair[1]);
    }
}

#[test]
fn spectral_type_round_trips_through_json() {
    let json = serde_json::to_string(&SpectralType::G).unwrap();
    assert_eq!(json, "\"G\"");
    let parsed: SpectralType = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, SpectralType::G);
}

#[test]
fn spectral_type_json_and_text_parsing_agree() {
    for label in ["g", "G", " k ", "m", "X", "", "GK"] {
        let json = serde_json::to_string(label).unwrap();
        let from_json = serde_json::from_str::<SpectralType>(&json).ok();
        assert_eq!(from_json, label.parse::<SpectralType>().ok(), "{:?}", label);
    }
}
