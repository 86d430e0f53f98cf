//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Credential handling (API key from the environment)
//! - The OpenWeather lookup client
//! - The in-memory favourites store
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod error;
pub mod favourites;
pub mod model;

pub use client::{API_KEY_ENV_VAR, WeatherClient, api_key_from_env};
pub use error::{FavouritesError, WeatherError};
pub use favourites::{Favourites, MAX_FAVOURITES};
pub use model::WeatherRecord;
