use serde::{Deserialize, Serialize};

/// Normalized current-weather record for a single city.
///
/// Built fresh for every lookup and never cached. On success every field is
/// populated; there is no partially-constructed state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Canonical city name as returned by the API, falling back to the
    /// requested spelling when the API omits it.
    pub city: String,
    /// ISO country code; empty when the API omits it.
    pub country: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    /// Weather condition text; `"N/A"` when the API returns no condition.
    pub description: String,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
}
