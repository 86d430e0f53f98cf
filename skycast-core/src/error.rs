use thiserror::Error;

use crate::client::API_KEY_ENV_VAR;
use crate::favourites::MAX_FAVOURITES;

/// Errors raised while looking up weather for a city.
///
/// `MissingCredential` is fatal at startup; every other variant is
/// recoverable and reported to the user by the flow that hit it.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("API key not found. Please set the {API_KEY_ENV_VAR} environment variable.")]
    MissingCredential,

    #[error("network error while contacting OpenWeather: {0}")]
    Network(#[from] reqwest::Error),

    #[error("city '{0}' not found")]
    CityNotFound(String),

    #[error("OpenWeather API returned status {status}: {body}")]
    ApiStatus { status: u16, body: String },

    #[error("unexpected API response format: {0}")]
    MalformedResponse(String),
}

/// Errors raised by the favourites store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FavouritesError {
    #[error("you already have {MAX_FAVOURITES} favourite cities")]
    CapacityExceeded,

    #[error("'{0}' is already in your favourites")]
    Duplicate(String),

    #[error("choice {0} is out of range")]
    OutOfRange(usize),
}
