use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use tracing::info;

use star_system::{SceneRenderer, StarSystem};

use crate::commands::SceneFormat;
use crate::svg::SvgRenderer;

pub fn scene(
    system: &StarSystem,
    format: SceneFormat,
    output: Option<&Path>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let scene = system.scene()?;

    let rendered = match format {
        SceneFormat::Json => serde_json::to_string_pretty(&scene)?,
        SceneFormat::Svg => SvgRenderer::default().render(&scene)?,
    };

    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("writing scene to {}", path.display()))?;
            info!(path = %path.display(), format = ?format, "wrote scene");
        }
        None => writeln!(out, "{}", rendered)?,
    }
    Ok(())
}
