pub mod calculator;
pub mod weather;

pub use crate::domain::model::{Number, WeatherQuery, WeatherResponse};
pub use crate::domain::ports::{ConfigProvider, WeatherBody, WeatherFetcher};
pub use crate::utils::error::Result;
