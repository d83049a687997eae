use std::time::Duration;

use super::WeatherApi;
use crate::error::{DashboardError, DashboardResult};
use crate::model::OneCallResponse;

pub const ONE_CALL_URL: &str = "https://api.openweathermap.org/data/3.0/onecall";

// Cranbury, NJ 08512
pub const LATITUDE: f64 = 40.3157;
pub const LONGITUDE: f64 = -74.5138;

/// Query parameters for the One Call request, in request order.
pub fn one_call_query(api_key: &str) -> Vec<(&'static str, String)> {
    vec![
        ("lat", LATITUDE.to_string()),
        ("lon", LONGITUDE.to_string()),
        ("appid", api_key.to_string()),
        ("units", "imperial".to_string()),
        ("exclude", "minutely,hourly,alerts".to_string()),
    ]
}

/// OpenWeather One Call 3.0 client for the household's fixed location.
pub struct OpenWeatherClient {
    timeout: Duration,
}

impl OpenWeatherClient {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Request URL without the key, for logging.
    pub fn redacted_url() -> String {
        format!(
            "{}?lat={}&lon={}&units=imperial&exclude=minutely,hourly,alerts",
            ONE_CALL_URL, LATITUDE, LONGITUDE
        )
    }
}

impl WeatherApi for OpenWeatherClient {
    fn one_call(&self, api_key: &str) -> DashboardResult<OneCallResponse> {
        log::debug!("GET {}", Self::redacted_url());
        let request = one_call_query(api_key)
            .iter()
            .fold(ureq::get(ONE_CALL_URL), |req, (name, value)| req.query(name, value));
        let response = request
            .timeout(self.timeout)
            .call()
            .map_err(|e| match e {
                // The request URL carries the key; keep it out of errors and logs.
                ureq::Error::Status(status, _) => DashboardError::Http {
                    status,
                    url: Self::redacted_url(),
                },
                ureq::Error::Transport(t) => DashboardError::Transport(t.kind().to_string()),
            })?;
        let body = response.into_string()?;
        Ok(serde_json::from_str(&body)?)
    }
}
