use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Select};
use skycast_core::{App, Config, Navigation, Units, provider_from_config};
use tracing::info;

use crate::session;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "SkyCast - Find My Weather")]
pub struct Cli {
    /// Units to request for this run: standard (Kelvin), metric or imperial.
    #[arg(long, global = true)]
    pub units: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and preferred units.
    Configure,

    /// Open the weather screen for a city directly.
    Show {
        /// City name, sent to the provider as typed.
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut config = Config::load()?;
        if let Some(units) = self.units.as_deref() {
            config.units = Units::try_from(units)?;
        }

        match self.command {
            Some(Command::Configure) => configure(config),
            Some(Command::Show { city }) => {
                let mut app = build_app(&config)?;
                app.navigate(Navigation::weather_link(&city));
                session::run(&mut app).await
            }
            None => {
                let mut app = build_app(&config)?;
                session::run(&mut app).await
            }
        }
    }
}

fn build_app(config: &Config) -> Result<App> {
    let provider = provider_from_config(config)?;
    info!(units = %config.units, base_url = %config.base_url, "Starting session");
    Ok(App::new(Arc::from(provider), config.units))
}

fn configure(mut config: Config) -> Result<()> {
    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let current = Units::all()
        .iter()
        .position(|units| *units == config.units)
        .unwrap_or_default();
    let units = Select::new("Units:", Units::all().to_vec())
        .with_starting_cursor(current)
        .prompt()
        .context("Failed to read units")?;

    config.set_api_key(api_key.trim().to_string());
    config.units = units;

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}
