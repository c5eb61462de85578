pub mod settings;
pub mod toml_config;

pub use settings::{Overrides, WeatherSettings};
pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::domain::model::Number;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "calc-weather")]
#[command(about = "Basic arithmetic and current weather lookups")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, env = "WEATHER_ENDPOINT")]
    pub endpoint: Option<String>,

    #[arg(long, global = true, env = "WEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print a + b
    Add {
        #[arg(allow_negative_numbers = true)]
        a: Number,
        #[arg(allow_negative_numbers = true)]
        b: Number,
    },
    /// Print a - b
    Subtract {
        #[arg(allow_negative_numbers = true)]
        a: Number,
        #[arg(allow_negative_numbers = true)]
        b: Number,
    },
    /// Print a * b
    Multiply {
        #[arg(allow_negative_numbers = true)]
        a: Number,
        #[arg(allow_negative_numbers = true)]
        b: Number,
    },
    /// Print a / b
    Divide {
        #[arg(allow_negative_numbers = true)]
        a: Number,
        #[arg(allow_negative_numbers = true)]
        b: Number,
    },
    /// Fetch current weather for a city
    Weather { city: String },
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            endpoint: self.endpoint.clone(),
            api_key: self.api_key.clone(),
            timeout_seconds: self.timeout_seconds,
        }
    }

    pub fn load_file(&self) -> crate::Result<Option<TomlConfig>> {
        self.config.as_ref().map(TomlConfig::from_file).transpose()
    }
}
