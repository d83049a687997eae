use chrono::Local;

use super::{DashboardStore, FetchStatus, RequestToken, Settled};
use crate::error::DashboardResult;
use crate::model::{OneCallResponse, WeatherSnapshot};
use crate::validation;

const WEATHER_ERROR: &str = "Failed to load weather data";

impl DashboardStore {
    /// Refreshes the forecast. A failure keeps whatever was loaded before.
    pub fn fetch_weather(&mut self, api_key: &str) -> Settled {
        let token = self.begin_weather_fetch();
        let result = validation::non_blank(api_key, "api_key")
            .and_then(|key| self.weather_api.one_call(&key));
        self.apply_weather(token, result)
    }

    pub fn begin_weather_fetch(&mut self) -> RequestToken {
        self.weather_status = FetchStatus::Loading;
        self.weather_requests.issue()
    }

    pub fn apply_weather(&mut self, token: RequestToken, result: DashboardResult<OneCallResponse>) -> Settled {
        if self.weather_requests.settle(token) == Settled::Superseded {
            log::debug!("Discarding superseded weather response #{}", token.value());
            return Settled::Superseded;
        }

        match result.and_then(|response| WeatherSnapshot::from_one_call(&response, &Local)) {
            Ok(snapshot) => {
                log::info!(
                    "Weather loaded: {} / {}, {} forecast days",
                    snapshot.today.temp_max,
                    snapshot.today.temp_min,
                    snapshot.forecast.len()
                );
                self.weather = Some(snapshot);
                self.weather_status = FetchStatus::Ready;
            }
            Err(e) => {
                log::warn!("Weather fetch error: {}", e);
                self.weather_status = FetchStatus::Failed(WEATHER_ERROR.into());
            }
        }
        Settled::Applied
    }
}
