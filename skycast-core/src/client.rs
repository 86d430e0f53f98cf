use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{error::WeatherError, model::WeatherRecord};

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_ENV_VAR: &str = "OPENWEATHER_API_KEY";

/// Current-weather endpoint.
pub const API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Read the OpenWeather API key from the environment.
///
/// An unset or blank variable is `MissingCredential`, which callers treat as
/// a fatal precondition for any network operation.
pub fn api_key_from_env() -> Result<String, WeatherError> {
    match std::env::var(API_KEY_ENV_VAR) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(WeatherError::MissingCredential),
    }
}

/// HTTP client for the OpenWeather current-weather API.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    http: Client,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }

    /// Fetch current weather for `city`.
    ///
    /// Issues exactly one GET with a 5-second timeout; no retries. The caller
    /// is responsible for rejecting empty input before calling.
    pub async fn lookup(&self, city: &str) -> Result<WeatherRecord, WeatherError> {
        self.lookup_at(API_BASE_URL, city).await
    }

    async fn lookup_at(&self, base_url: &str, city: &str) -> Result<WeatherRecord, WeatherError> {
        let res = self
            .http
            .get(base_url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        build_record(city, status, &body)
    }
}

/// Turn a raw response into a `WeatherRecord`, applying the error precedence:
/// 404 means the city is unknown, any other non-200 carries status and body,
/// a 200 with missing required fields is malformed.
fn build_record(
    requested: &str,
    status: StatusCode,
    body: &str,
) -> Result<WeatherRecord, WeatherError> {
    if status == StatusCode::NOT_FOUND {
        return Err(WeatherError::CityNotFound(requested.to_string()));
    }

    if !status.is_success() {
        return Err(WeatherError::ApiStatus {
            status: status.as_u16(),
            body: truncate_body(body),
        });
    }

    let parsed: OwCurrentResponse =
        serde_json::from_str(body).map_err(|e| WeatherError::MalformedResponse(e.to_string()))?;

    Ok(parsed.into_record(requested))
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Default, Deserialize)]
struct OwWind {
    #[serde(default)]
    speed: f64,
}

#[derive(Debug, Default, Deserialize)]
struct OwSys {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: Option<String>,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    #[serde(default)]
    wind: OwWind,
    #[serde(default)]
    sys: OwSys,
}

impl OwCurrentResponse {
    fn into_record(self, requested: &str) -> WeatherRecord {
        let description = self
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| "N/A".to_string());

        WeatherRecord {
            city: self
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| requested.to_string()),
            country: self.sys.country,
            temperature_c: self.main.temp,
            feels_like_c: self.main.feels_like,
            description,
            humidity_pct: self.main.humidity,
            wind_speed_mps: self.wind.speed,
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let cut = (0..=MAX).rev().find(|&i| body.is_char_boundary(i)).unwrap_or(0);
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
