use crate::domain::model::{WeatherQuery, WeatherResponse};
use crate::domain::ports::{WeatherBody, WeatherFetcher};

/// Looks up current weather through an injected [`WeatherFetcher`].
///
/// The decoded body is returned as-is and fetcher errors are not wrapped.
pub struct WeatherClient<F: WeatherFetcher> {
    fetcher: F,
}

impl<F: WeatherFetcher> WeatherClient<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub async fn get_weather(&self, city: &str) -> Result<WeatherResponse, F::Error> {
        let query = WeatherQuery::new(city);
        tracing::debug!("Fetching weather for: {}", query.city);

        let response = self.fetcher.get(&query).await?;
        let body = response.json().await?;

        tracing::debug!("Received {} weather fields", body.data.len());
        Ok(body)
    }
}
