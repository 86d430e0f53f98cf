//! The four menu flows: search, add, list, update.
//!
//! Every recoverable error is caught here and turned into a printed
//! message; nothing propagates out to crash the menu loop.

use inquire::Text;
use skycast_core::{Favourites, MAX_FAVOURITES, WeatherClient};

use crate::render;

/// Prompt for a city name; `None` means the user cancelled (empty input
/// or Esc).
fn prompt_city() -> Option<String> {
    let input = Text::new("Enter city name (or press Enter to cancel):")
        .prompt_skippable()
        .ok()
        .flatten()?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Look up `city` and, on success, append its canonical name to the
/// favourites. Shared by the add and update flows.
async fn add_validated(client: &WeatherClient, favourites: &mut Favourites, city: &str) {
    // Check the typed spelling before spending a network call; the store
    // checks the canonical name again on insert.
    if favourites.contains(city) {
        println!("'{city}' is already in your favourites.\n");
        return;
    }

    let record = match client.lookup(city).await {
        Ok(record) => record,
        Err(e) => {
            println!("Error: {e}\n");
            return;
        }
    };

    match favourites.add(record.city.clone()) {
        Ok(()) => println!("Added '{}' to favourites.\n", record.city),
        Err(e) => println!("{e}\n"),
    }
}

/// Search flow: one lookup, render the result or the error.
pub async fn search(client: &WeatherClient) {
    let Some(city) = prompt_city() else {
        println!("Search cancelled.\n");
        return;
    };

    match client.lookup(&city).await {
        Ok(record) => print!("{}", render::weather_report(&record)),
        Err(e) => println!("Error: {e}\n"),
    }
}

/// Add flow: validate through a lookup, then store the canonical name.
pub async fn add(client: &WeatherClient, favourites: &mut Favourites) {
    if favourites.is_full() {
        println!(
            "You already have {MAX_FAVOURITES} favourite cities. \
             Use 'Update favourite cities' to change them.\n"
        );
        return;
    }

    let Some(city) = prompt_city() else {
        println!("Add favourite cancelled.\n");
        return;
    };

    add_validated(client, favourites, &city).await;
}

/// List flow: one lookup per favourite, strictly sequential. A failure for
/// one entry is reported inline and does not abort the rest.
pub async fn list(client: &WeatherClient, favourites: &Favourites) {
    if favourites.is_empty() {
        println!("You have no favourite cities yet.\n");
        return;
    }

    println!("\nFavourite cities and their current weather:");
    println!("-------------------------------------------");
    for (idx, city) in favourites.as_slice().iter().enumerate() {
        println!("\n[{}] {city}", idx + 1);
        match client.lookup(city).await {
            Ok(record) => print!("{}", render::weather_report(&record)),
            Err(e) => println!("  Error fetching weather for '{city}': {e}\n"),
        }
    }
}

/// Update flow: remove one favourite, then add a replacement.
///
/// The removal commits before the replacement is validated; a failed or
/// cancelled replacement leaves the list one entry shorter.
pub async fn update(client: &WeatherClient, favourites: &mut Favourites) {
    if favourites.is_empty() {
        println!(
            "You have no favourite cities to update. \
             Use 'Add a city to favourites' first.\n"
        );
        return;
    }

    println!("\nCurrent favourites:");
    for (idx, city) in favourites.as_slice().iter().enumerate() {
        println!("  {}. {city}", idx + 1);
    }

    let input = match Text::new("Enter the number of the city to remove:").prompt_skippable() {
        Ok(Some(input)) => input,
        _ => {
            println!("Update cancelled.\n");
            return;
        }
    };

    let position: usize = match input.trim().parse() {
        Ok(position) => position,
        Err(_) => {
            println!("Invalid input. Please enter a number.\n");
            return;
        }
    };

    let removed = match favourites.remove_at(position) {
        Ok(removed) => removed,
        Err(e) => {
            println!("{e}\n");
            return;
        }
    };
    println!("Removed '{removed}' from favourites.\n");

    let Some(city) = prompt_city() else {
        println!("Update cancelled. No new city added.\n");
        return;
    };

    add_validated(client, favourites, &city).await;
}
