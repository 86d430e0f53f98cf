use std::fmt;

use anyhow::Result;
use clap::Parser;
use inquire::{InquireError, Select};
use skycast_core::{API_KEY_ENV_VAR, Favourites, WeatherClient, api_key_from_env};

use crate::flows;

/// Top-level CLI struct.
///
/// The program is entirely menu-driven, so clap only provides the
/// `--help`/`--version` surface.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Interactive weather CLI with favourite cities")]
pub struct Cli {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Search,
    Add,
    List,
    Update,
    Exit,
}

impl MenuChoice {
    const ALL: [MenuChoice; 5] = [
        MenuChoice::Search,
        MenuChoice::Add,
        MenuChoice::List,
        MenuChoice::Update,
        MenuChoice::Exit,
    ];
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuChoice::Search => "1. Search weather for a city",
            MenuChoice::Add => "2. Add a city to favourites",
            MenuChoice::List => "3. List favourite cities and their weather",
            MenuChoice::Update => "4. Update favourite cities (remove & add)",
            MenuChoice::Exit => "5. Exit",
        };
        f.write_str(label)
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        // Missing credential is the one fatal condition; it aborts before
        // any menu interaction with a non-zero exit status.
        let api_key = api_key_from_env()?;
        let client = WeatherClient::new(api_key);
        let mut favourites = Favourites::new();

        println!("Welcome to the skycast weather CLI!");
        println!("Using the API key from the {API_KEY_ENV_VAR} environment variable.\n");

        loop {
            let choice = match Select::new("Choose an option:", MenuChoice::ALL.to_vec()).prompt() {
                Ok(choice) => choice,
                // Esc just re-displays the menu; only the Exit entry (or an
                // interrupt) leaves the loop.
                Err(InquireError::OperationCanceled) => continue,
                Err(InquireError::OperationInterrupted) => break,
                Err(e) => return Err(e.into()),
            };
            println!();

            match choice {
                MenuChoice::Search => flows::search(&client).await,
                MenuChoice::Add => flows::add(&client, &mut favourites).await,
                MenuChoice::List => flows::list(&client, &favourites).await,
                MenuChoice::Update => flows::update(&client, &mut favourites).await,
                MenuChoice::Exit => {
                    println!("Goodbye!");
                    break;
                }
            }
        }

        Ok(())
    }
}
