use crate::adapters::http::DEFAULT_TIMEOUT_SECONDS;
use crate::config::toml_config::TomlConfig;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CalcWeatherError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_required_field, validate_url, Validate,
};

pub const DEFAULT_CITY_PARAM: &str = "q";
pub const DEFAULT_API_KEY_PARAM: &str = "appid";
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

/// Weather adapter settings after merging overrides, file and defaults.
#[derive(Debug, Clone)]
pub struct WeatherSettings {
    pub endpoint: Option<String>,
    pub city_param: String,
    pub api_key: Option<String>,
    pub api_key_param: String,
    pub timeout_seconds: u64,
    pub parameters: Vec<(String, String)>,
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            city_param: DEFAULT_CITY_PARAM.to_string(),
            api_key: None,
            api_key_param: DEFAULT_API_KEY_PARAM.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            parameters: Vec::new(),
        }
    }
}

impl WeatherSettings {
    pub fn resolve(file: Option<&TomlConfig>, overrides: Overrides) -> Self {
        let section = file.map(TomlConfig::weather).unwrap_or_default();
        let defaults = Self::default();

        Self {
            endpoint: overrides.endpoint.or(section.endpoint),
            city_param: section.city_param.unwrap_or(defaults.city_param),
            api_key: overrides.api_key.or(section.api_key),
            api_key_param: section.api_key_param.unwrap_or(defaults.api_key_param),
            timeout_seconds: overrides
                .timeout_seconds
                .or(section.timeout_seconds)
                .unwrap_or(defaults.timeout_seconds),
            parameters: section.parameters.unwrap_or_default().into_iter().collect(),
        }
    }
}

impl ConfigProvider for WeatherSettings {
    fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or_default()
    }

    fn city_param(&self) -> &str {
        &self.city_param
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn api_key_param(&self) -> &str {
        &self.api_key_param
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn parameters(&self) -> Vec<(String, String)> {
        self.parameters.clone()
    }
}

fn ensure_resolved(field: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(v) if v.contains("${") => Err(CalcWeatherError::ConfigError {
            message: format!("'{}' references an undefined environment variable: {}", field, v),
        }),
        _ => Ok(()),
    }
}

impl Validate for WeatherSettings {
    fn validate(&self) -> Result<()> {
        ensure_resolved("weather.endpoint", self.endpoint.as_deref())?;
        ensure_resolved("weather.api_key", self.api_key.as_deref())?;

        let endpoint = validate_required_field("weather.endpoint", &self.endpoint)?;
        validate_url("weather.endpoint", endpoint)?;
        validate_non_empty_string("weather.city_param", &self.city_param)?;
        validate_non_empty_string("weather.api_key_param", &self.api_key_param)?;
        validate_range(
            "weather.timeout_seconds",
            self.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        Ok(())
    }
}
