use std::io::Write;

use star_system::StarSystem;

pub fn classify(system: &StarSystem, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let assessment = system.assess()?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&assessment)?)?;
        return Ok(());
    }

    let (inner, outer) = assessment.zone.bounds();
    writeln!(out, "Habitable zone {:.6} to {:.6} AU", inner, outer)?;

    let width = assessment
        .classifications
        .iter()
        .map(|c| c.planet.chars().count())
        .max()
        .unwrap_or(0)
        .max("planet".len());
    writeln!(
        out,
        "{:<width$}  {:>9}  {:>9}  verdict",
        "planet", "orbit AU", "eff. AU"
    )?;

    for classified in &assessment.classifications {
        let verdict = if classified.habitable {
            "potentially habitable".to_string()
        } else {
            let failed: Vec<String> = classified
                .assessment
                .failed
                .iter()
                .map(ToString::to_string)
                .collect();
            format!("not habitable ({})", failed.join(", "))
        };
        writeln!(
            out,
            "{:<width$}  {:>9.4}  {:>9.4}  {}",
            classified.planet,
            classified.orbital_distance.to_au(),
            classified.assessment.effective_distance.to_au(),
            verdict
        )?;
    }

    writeln!(
        out,
        "{} of {} planets potentially habitable",
        assessment.habitable_planets().count(),
        assessment.classifications.len()
    )?;
    Ok(())
}
