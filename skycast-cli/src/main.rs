//! Binary crate for the `skycast` command-line tool.
//!
//! This crate focuses on:
//! - The interactive menu loop
//! - Prompting for user input
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod flows;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
