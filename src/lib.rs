pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::http::ReqwestFetcher;
pub use config::{TomlConfig, WeatherSettings};
pub use crate::core::{calculator::Calculator, weather::WeatherClient};
pub use domain::model::{Number, WeatherQuery, WeatherResponse};
pub use utils::error::{CalcWeatherError, Result};
