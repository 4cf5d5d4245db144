use std::io::Write;

use serde::Serialize;

use star_system::StarSystem;
use stellar::{HabitableZone, ZoneFactors};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ZoneReport {
    #[serde(flatten)]
    zone: HabitableZone,
    width: units::Length,
    factors: ZoneFactors,
    multiplier: f64,
}

pub fn zone(system: &StarSystem, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let zone = system.habitable_zone()?;
    let factors = ZoneFactors::from_parameters(system.star().parameters())?;

    if json {
        let report = ZoneReport {
            zone,
            width: zone.width(),
            factors,
            multiplier: factors.combined(),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    let star = system.star();
    writeln!(
        out,
        "Habitable zone of a {} star in {} (L = {} L☉)",
        star.spectral_class(),
        star.galaxy(),
        star.luminosity()
    )?;
    writeln!(out, "  inner edge   {:.6}", zone.inner_edge())?;
    writeln!(out, "  outer edge   {:.6}", zone.outer_edge())?;
    writeln!(out, "  width        {:.6}", zone.width())?;
    writeln!(
        out,
        "  corrections  age {:.3}, activity {:.3}, metallicity {:.3}, magnetic {:.3}, rotation {:.3}",
        factors.age, factors.activity, factors.metallicity, factors.magnetic, factors.rotation
    )?;
    writeln!(out, "  multiplier   {:.6}", factors.combined())?;
    Ok(())
}
