use approx::assert_relative_eq;
use clap::Parser;

use star_system::{StarSystem, SystemConfig};
use stellar::{SpectralType, StarParameters};

use crate::commands::{CommandLine, Commands, SceneFormat, StarOverrides, classify, scene, zone};
use crate::logging::default_directive;

fn reference_system() -> StarSystem {
    SystemConfig::reference().build().unwrap()
}

fn output_of(run: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
    let mut out = Vec::new();
    run(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_parses_subcommands_and_global_flags() {
    let cli = CommandLine::try_parse_from([
        "habzone",
        "scene",
        "--format",
        "json",
        "-o",
        "scene.json",
        "-vv",
        "--luminosity",
        "0.5",
        "--spectral-class",
        "k",
    ])
    .unwrap();

    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.star.luminosity, Some(0.5));
    assert_eq!(cli.star.spectral_class, Some(SpectralType::K));
    match cli.command {
        Commands::Scene { format, output } => {
            assert_eq!(format, SceneFormat::Json);
            assert_eq!(output.unwrap().to_str(), Some("scene.json"));
        }
        other => panic!("expected scene command, got {:?}", other),
    }

    let cli = CommandLine::try_parse_from(["habzone", "c", "--json"]).unwrap();
    assert!(matches!(cli.command, Commands::Classify { json: true }));

    assert!(CommandLine::try_parse_from(["habzone", "zone", "--spectral-class", "Q"]).is_err());
}

#[test]
fn test_overrides_replace_only_given_fields() {
    let overrides = StarOverrides {
        age: Some(1.0),
        magnetic_field: Some(0.0),
        galaxy: Some("Andromeda".to_string()),
        ..Default::default()
    };
    assert!(!overrides.is_empty());
    assert!(StarOverrides::default().is_empty());

    let mut star = StarParameters::solar_reference();
    overrides.apply(&mut star);

    assert_eq!(
        star,
        StarParameters {
            age: 1.0,
            magnetic_field: 0.0,
            galaxy: "Andromeda".to_string(),
            ..StarParameters::solar_reference()
        }
    );
}

#[test]
fn test_load_config_defaults_to_reference() {
    let cli = CommandLine::try_parse_from(["habzone", "zone"]).unwrap();
    assert_eq!(cli.load_config().unwrap(), SystemConfig::reference());

    let cli = CommandLine::try_parse_from(["habzone", "zone", "--luminosity", "2.0"]).unwrap();
    assert_eq!(cli.load_config().unwrap().star.luminosity, 2.0);
}

#[test]
fn test_load_config_reports_missing_file() {
    let cli =
        CommandLine::try_parse_from(["habzone", "zone", "-c", "/nonexistent/system.json"]).unwrap();
    let err = cli.load_config().unwrap_err();
    assert!(format!("{:#}", err).contains("/nonexistent/system.json"));
}

#[test]
fn test_invalid_override_fails_validation() {
    let cli = CommandLine::try_parse_from(["habzone", "zone", "--luminosity=-1"]).unwrap();
    let err = cli.load_config().unwrap().build().unwrap_err();
    assert!(err.to_string().contains("luminosity"), "{}", err);
}

#[test]
fn test_zone_text() {
    let text = output_of(|out| zone::zone(&reference_system(), false, out));

    assert!(text.starts_with("Habitable zone of a G star in Milky Way"));
    assert!(text.contains("inner edge   1.006856 AU"), "{}", text);
    assert!(text.contains("outer edge   1.450528 AU"), "{}", text);
    assert!(text.contains("multiplier   1.056000"), "{}", text);
}

#[test]
fn test_zone_json() {
    let json = output_of(|out| zone::zone(&reference_system(), true, out));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let number = |v: &serde_json::Value| v.as_f64().unwrap();
    assert_relative_eq!(number(&value["innerEdge"]), 1.0068564942, epsilon = 1e-9);
    assert_relative_eq!(number(&value["multiplier"]), 1.056, epsilon = 1e-12);
    assert_relative_eq!(number(&value["factors"]["magnetic"]), 1.1, epsilon = 1e-12);
}

#[test]
fn test_classify_text_lists_failed_checks() {
    let text = output_of(|out| classify::classify(&reference_system(), false, out));

    let earth = text.lines().find(|l| l.starts_with("Earth")).unwrap();
    assert!(earth.ends_with("not habitable (habitable zone)"), "{}", earth);
    assert!(text.contains("0 of 4 planets potentially habitable"));
}

#[test]
fn test_classify_json_keeps_planet_order() {
    let json = output_of(|out| classify::classify(&reference_system(), true, out));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let names: Vec<&str> = value["classifications"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["planet"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Earth", "Mars", "Venus", "Kepler-442b"]);
    assert_eq!(value["classifications"][0]["habitable"], false);
}

#[test]
fn test_scene_to_stdout_and_file() {
    let system = reference_system();

    let json = output_of(|out| scene::scene(&system, SceneFormat::Json, None, out));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["title"], "Habitable Zone in Milky Way");
    assert_eq!(value["planets"].as_array().unwrap().len(), 4);

    let path = std::env::temp_dir().join(format!("habzone-scene-{}.svg", std::process::id()));
    let printed = output_of(|out| {
        scene::scene(&system, SceneFormat::Svg, Some(path.as_path()), out)
    });
    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(printed.is_empty());
    assert!(written.starts_with("<svg"));
}

#[test]
fn test_verbosity_levels() {
    assert_eq!(default_directive(0), "warn");
    assert_eq!(default_directive(1), "info");
    assert_eq!(default_directive(2), "debug");
    assert_eq!(default_directive(7), "trace");
}
