mod commands;
mod logging;
mod svg;

#[cfg(test)]
mod commands_test;

use std::io::{self, Write};

use commands::{CommandLine, Commands, classify, scene, zone};
use star_system::{StarSystem, SystemConfig};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let mut out = io::stdout().lock();
    let system = || -> anyhow::Result<StarSystem> { Ok(commands.load_config()?.build()?) };

    match &commands.command {
        Commands::Zone { json } => zone::zone(&system()?, *json, &mut out),
        Commands::Classify { json } => classify::classify(&system()?, *json, &mut out),
        Commands::Scene { format, output } => {
            scene::scene(&system()?, *format, output.as_deref(), &mut out)
        }
        Commands::Reference => {
            writeln!(out, "{}", SystemConfig::reference().to_json_pretty()?)?;
            Ok(())
        }
    }
}
