use crate::domain::model::{WeatherQuery, WeatherResponse};
use async_trait::async_trait;

/// A fetched response whose body can be decoded as a weather mapping.
#[async_trait]
pub trait WeatherBody: Send {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn json(self) -> Result<WeatherResponse, Self::Error>;
}

/// HTTP-GET capability used by the weather client.
#[async_trait]
pub trait WeatherFetcher: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;
    type Response: WeatherBody<Error = Self::Error>;

    async fn get(&self, query: &WeatherQuery) -> Result<Self::Response, Self::Error>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn city_param(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn api_key_param(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn parameters(&self) -> Vec<(String, String)>;
}
