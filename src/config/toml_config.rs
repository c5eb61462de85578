use crate::utils::error::{CalcWeatherError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub weather: Option<WeatherSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherSection {
    pub endpoint: Option<String>,
    pub city_param: Option<String>,
    pub api_key: Option<String>,
    pub api_key_param: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub parameters: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcWeatherError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CalcWeatherError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn weather(&self) -> WeatherSection {
        self.weather.clone().unwrap_or_default()
    }

    pub fn logging(&self) -> LoggingSection {
        self.logging.clone().unwrap_or_default()
    }
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern is valid"))
}

/// 替換環境變數 (例如 ${WEATHER_API_KEY})，未定義的變數保持原樣
fn substitute_env_vars(content: &str) -> String {
    env_var_pattern()
        .replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[weather]
endpoint = "https://api.example.com/weather"
city_param = "city"
api_key = "abc"
timeout_seconds = 3

[weather.parameters]
units = "metric"

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let weather = config.weather();

        assert_eq!(weather.endpoint.as_deref(), Some("https://api.example.com/weather"));
        assert_eq!(weather.city_param.as_deref(), Some("city"));
        assert_eq!(weather.timeout_seconds, Some(3));
        assert_eq!(
            weather.parameters.unwrap().get("units").map(String::as_str),
            Some("metric")
        );
        assert_eq!(config.logging().verbose, Some(true));
        assert_eq!(config.logging().json, None);
    }

    #[test]
    fn test_empty_config_is_valid_toml() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.weather.is_none());
        assert!(config.weather().endpoint.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CALC_WEATHER_TEST_KEY", "from-env");

        let toml_content = r#"
[weather]
api_key = "${CALC_WEATHER_TEST_KEY}"
endpoint = "${CALC_WEATHER_TEST_UNDEFINED}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let weather = config.weather();
        assert_eq!(weather.api_key.as_deref(), Some("from-env"));
        assert_eq!(weather.endpoint.as_deref(), Some("${CALC_WEATHER_TEST_UNDEFINED}"));

        std::env::remove_var("CALC_WEATHER_TEST_KEY");
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let err = TomlConfig::from_toml_str("[weather\nendpoint = 1").unwrap_err();
        assert!(matches!(err, CalcWeatherError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[weather]\nendpoint = \"https://api.example.com\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.weather().endpoint.as_deref(), Some("https://api.example.com"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, CalcWeatherError::IoError(_)));
    }
}
