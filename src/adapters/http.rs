use crate::domain::model::{WeatherQuery, WeatherResponse};
use crate::domain::ports::{ConfigProvider, WeatherBody, WeatherFetcher};
use crate::utils::error::{CalcWeatherError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// `WeatherFetcher` backed by a reqwest client.
///
/// Sends `GET {endpoint}?{city_param}={city}` plus the API key and any static
/// parameters. Non-2xx responses are returned as [`CalcWeatherError::ApiError`].
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
    endpoint: String,
    city_param: String,
    parameters: Vec<(String, String)>,
}

impl ReqwestFetcher {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Self::build(
            endpoint.into(),
            "q".to_string(),
            Vec::new(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        )
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut parameters = config.parameters();
        if let Some(key) = config.api_key() {
            parameters.push((config.api_key_param().to_string(), key.to_string()));
        }

        Self::build(
            config.endpoint().to_string(),
            config.city_param().to_string(),
            parameters,
            Duration::from_secs(config.timeout_seconds()),
        )
    }

    fn build(
        endpoint: String,
        city_param: String,
        parameters: Vec<(String, String)>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            city_param,
            parameters,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Debug)]
pub struct ReqwestBody(reqwest::Response);

#[async_trait]
impl WeatherBody for ReqwestBody {
    type Error = CalcWeatherError;

    async fn json(self) -> Result<WeatherResponse> {
        let bytes = self.0.bytes().await?;
        tracing::debug!("Decoding weather body ({} bytes)", bytes.len());
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl WeatherFetcher for ReqwestFetcher {
    type Error = CalcWeatherError;
    type Response = ReqwestBody;

    async fn get(&self, query: &WeatherQuery) -> Result<ReqwestBody> {
        let mut params: Vec<(&str, &str)> = vec![(self.city_param.as_str(), query.city.as_str())];
        params.extend(self.parameters.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).query(&params).send().await?;
        tracing::debug!("API response status: {}", response.status());

        Ok(ReqwestBody(response.error_for_status()?))
    }
}
