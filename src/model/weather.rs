use chrono::{DateTime, Datelike, TimeZone};
use serde::{Deserialize, Serialize};

use super::clock::weekday_name;
use crate::error::{DashboardError, DashboardResult};

/// Number of days shown after today.
pub const FORECAST_DAYS: usize = 5;

// OpenWeather One Call payload. Only the fields the dashboard reads.

#[derive(Debug, Clone, Deserialize)]
pub struct OneCallResponse {
    #[serde(default)]
    pub daily: Vec<DailyEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyEntry {
    pub dt: i64,
    pub temp: DailyTemp,
    #[serde(default)]
    pub weather: Vec<Condition>,
    #[serde(default)]
    pub humidity: f64,
    #[serde(default)]
    pub wind_speed: f64,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyTemp {
    pub max: f64,
    pub min: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub icon: String,
    pub description: String,
    #[serde(default)]
    pub main: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TodayWeather {
    pub temp_max: i64,
    pub temp_min: i64,
    pub icon: String,
    pub description: String,
    pub summary: String,
    pub humidity: i64,
    pub wind_speed: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    /// `YYYY-MM-DD`, UTC.
    pub date: String,
    pub day_name: String,
    pub temp_max: i64,
    pub temp_min: i64,
    pub icon: String,
    pub description: String,
}

/// Today's conditions plus the next few days.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    pub today: TodayWeather,
    pub forecast: Vec<ForecastDay>,
}

impl WeatherSnapshot {
    /// Reshapes a One Call response. Day names are computed in `tz`.
    pub fn from_one_call<Tz: TimeZone>(response: &OneCallResponse, tz: &Tz) -> DashboardResult<Self> {
        let first = response
            .daily
            .first()
            .ok_or_else(|| DashboardError::MalformedForecast("no daily entries".into()))?;
        let condition = primary_condition(first)?;

        let today = TodayWeather {
            temp_max: round_half_up(first.temp.max),
            temp_min: round_half_up(first.temp.min),
            icon: condition.icon.clone(),
            description: condition.description.clone(),
            summary: first
                .summary
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| condition.main.clone()),
            humidity: round_half_up(first.humidity),
            wind_speed: round_half_up(first.wind_speed),
        };

        let forecast = response
            .daily
            .iter()
            .skip(1)
            .take(FORECAST_DAYS)
            .enumerate()
            .map(|(i, day)| forecast_day(day, i, tz))
            .collect::<DashboardResult<Vec<_>>>()?;

        Ok(Self { today, forecast })
    }
}

/// Rounds halves toward +infinity, so -2.5 becomes -2.
pub fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

fn primary_condition(day: &DailyEntry) -> DashboardResult<&Condition> {
    day.weather
        .first()
        .ok_or_else(|| DashboardError::MalformedForecast(format!("no conditions for dt={}", day.dt)))
}

fn forecast_day<Tz: TimeZone>(day: &DailyEntry, index: usize, tz: &Tz) -> DashboardResult<ForecastDay> {
    let condition = primary_condition(day)?;
    let utc = DateTime::from_timestamp(day.dt, 0)
        .ok_or_else(|| DashboardError::MalformedForecast(format!("timestamp out of range: {}", day.dt)))?;

    let day_name = if index == 0 {
        "Tomorrow".to_string()
    } else {
        weekday_name(utc.with_timezone(tz).weekday()).to_string()
    };

    Ok(ForecastDay {
        date: utc.format("%Y-%m-%d").to_string(),
        day_name,
        temp_max: round_half_up(day.temp.max),
        temp_min: round_half_up(day.temp.min),
        icon: condition.icon.clone(),
        description: condition.description.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    // 2025-03-07 17:00:00 UTC, a Friday.
    const FRIDAY: i64 = 1_741_366_800;
    const DAY: i64 = 86_400;

    fn day(dt: i64, max: f64, min: f64) -> serde_json::Value {
        json!({
            "dt": dt,
            "temp": { "max": max, "min": min, "day": 50.0 },
            "weather": [{ "id": 500, "icon": "10d", "description": "light rain", "main": "Rain" }],
            "humidity": 64,
            "wind_speed": 7.6
        })
    }

    fn response(days: usize) -> OneCallResponse {
        let daily: Vec<_> = (0..days).map(|i| day(FRIDAY + i as i64 * DAY, 55.4, 40.5)).collect();
        serde_json::from_value(json!({ "lat": 40.3157, "lon": -74.5138, "daily": daily })).unwrap()
    }

    #[test]
    fn today_is_first_daily_entry() {
        let snap = WeatherSnapshot::from_one_call(&response(8), &Utc).unwrap();
        assert_eq!(snap.today.temp_max, 55);
        assert_eq!(snap.today.temp_min, 41);
        assert_eq!(snap.today.icon, "10d");
        assert_eq!(snap.today.summary, "Rain");
        assert_eq!(snap.today.humidity, 64);
        assert_eq!(snap.today.wind_speed, 8);
    }

    #[test]
    fn forecast_takes_next_five_days() {
        let snap = WeatherSnapshot::from_one_call(&response(8), &Utc).unwrap();
        let names: Vec<_> = snap.forecast.iter().map(|d| d.day_name.as_str()).collect();
        assert_eq!(names, ["Tomorrow", "Sunday", "Monday", "Tuesday", "Wednesday"]);
        assert_eq!(snap.forecast[0].date, "2025-03-08");
        assert_eq!(snap.forecast[4].date, "2025-03-12");
    }

    #[test]
    fn short_response_gives_short_forecast() {
        let snap = WeatherSnapshot::from_one_call(&response(3), &Utc).unwrap();
        assert_eq!(snap.forecast.len(), 2);
    }

    #[test]
    fn summary_is_preferred_over_main() {
        let mut resp = response(1);
        resp.daily[0].summary = Some("Expect a day of partly cloudy with rain".into());
        let snap = WeatherSnapshot::from_one_call(&resp, &Utc).unwrap();
        assert_eq!(snap.today.summary, "Expect a day of partly cloudy with rain");
    }

    #[test]
    fn negative_halves_round_up() {
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-7.5), -7);
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.6), -3);

        let mut resp = response(2);
        resp.daily[0].temp.max = -2.5;
        resp.daily[0].temp.min = -7.5;
        resp.daily[1].temp.max = -0.5;
        let snap = WeatherSnapshot::from_one_call(&resp, &Utc).unwrap();
        assert_eq!((snap.today.temp_max, snap.today.temp_min), (-2, -7));
        assert_eq!(snap.forecast[0].temp_max, 0);
    }

    #[test]
    fn empty_daily_is_malformed() {
        let err = WeatherSnapshot::from_one_call(&response(0), &Utc).unwrap_err();
        assert!(matches!(err, DashboardError::MalformedForecast(_)));
    }

    #[test]
    fn missing_condition_is_malformed() {
        let mut resp = response(2);
        resp.daily[1].weather.clear();
        assert!(WeatherSnapshot::from_one_call(&resp, &Utc).is_err());
    }
}
