pub mod classify;
pub mod scene;
pub mod zone;

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use star_system::SystemConfig;
use stellar::{SpectralType, StarParameters};

#[derive(Parser, Debug)]
#[command(name = "habzone")]
#[command(about = "Habitable zone calculator and planet habitability classifier.")]
pub struct CommandLine {
    /// JSON system configuration; the Sun with Earth, Mars, Venus and
    /// Kepler-442b when omitted
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(flatten)]
    pub star: StarOverrides,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the habitable zone of the host star
    #[command(alias = "z")]
    Zone {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Classify every planet against the habitable zone
    #[command(alias = "c")]
    Classify {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Project the system into a 2D scene
    #[command(alias = "s")]
    Scene {
        #[arg(short, long, value_enum, default_value_t = SceneFormat::Svg)]
        format: SceneFormat,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the built-in reference configuration
    Reference,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneFormat {
    Json,
    Svg,
}

/// Star parameters given on the command line, replacing configured values
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct StarOverrides {
    /// Luminosity (L☉)
    #[arg(long, global = true)]
    pub luminosity: Option<f64>,
    /// Age (Gyr)
    #[arg(long, global = true)]
    pub age: Option<f64>,
    /// Activity level, 0 to 1
    #[arg(long, global = true)]
    pub activity: Option<f64>,
    /// Metallicity relative to solar
    #[arg(long, global = true)]
    pub metallicity: Option<f64>,
    /// Magnetic field strength, relative units
    #[arg(long, global = true)]
    pub magnetic_field: Option<f64>,
    /// Rotation period (days)
    #[arg(long, global = true)]
    pub rotation_period: Option<f64>,
    #[arg(long, global = true)]
    pub spectral_class: Option<SpectralType>,
    #[arg(long, global = true)]
    pub galaxy: Option<String>,
}

impl StarOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(&self, star: &mut StarParameters) {
        let numeric = [
            (&mut star.luminosity, self.luminosity),
            (&mut star.age, self.age),
            (&mut star.activity, self.activity),
            (&mut star.metallicity, self.metallicity),
            (&mut star.magnetic_field, self.magnetic_field),
            (&mut star.rotation_period, self.rotation_period),
        ];
        for (field, value) in numeric {
            if let Some(value) = value {
                *field = value;
            }
        }
        if let Some(class) = self.spectral_class {
            star.spectral_class = class;
        }
        if let Some(galaxy) = &self.galaxy {
            star.galaxy = galaxy.clone();
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Configuration with the star overrides applied, not yet validated
    pub fn load_config(&self) -> anyhow::Result<SystemConfig> {
        let mut config = match &self.config {
            Some(path) => SystemConfig::from_path(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => SystemConfig::reference(),
        };

        if !self.star.is_empty() {
            info!(overrides = ?self.star, "overriding star parameters");
            self.star.apply(&mut config.star);
        }
        Ok(config)
    }
}
