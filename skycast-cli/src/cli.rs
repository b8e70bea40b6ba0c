use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text, validator::Validation};
use skycast_core::{Config, MIN_CITY_LEN, TempUnit, WeatherController, provider_from_config};

use crate::view;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Current weather conditions by city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com API key used for requests.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, at least 3 characters.
        city: String,

        /// Display temperatures in Fahrenheit instead of Celsius.
        #[arg(long)]
        fahrenheit: bool,
    },

    /// Look up cities interactively, one fetch per prompt.
    Interactive {
        /// Display temperatures in Fahrenheit instead of Celsius.
        #[arg(long)]
        fahrenheit: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, fahrenheit } => show(city, unit_for(fahrenheit)).await,
            Command::Interactive { fahrenheit } => interactive(unit_for(fahrenheit)).await,
        }
    }
}

fn unit_for(fahrenheit: bool) -> TempUnit {
    if fahrenheit { TempUnit::Fahrenheit } else { TempUnit::Celsius }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: String, unit: TempUnit) -> anyhow::Result<()> {
    if !city_is_fetchable(&city) {
        anyhow::bail!("City name must be at least {MIN_CITY_LEN} characters.");
    }

    let config = Config::load()?;
    let provider = provider_from_config(&config)?;
    let mut controller = WeatherController::new(provider);

    controller.set_city(city);
    controller.fetch().await;

    println!("{}", view::render(controller.state(), unit));
    Ok(())
}

async fn interactive(unit: TempUnit) -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;
    let mut controller = WeatherController::new(provider);

    loop {
        let input = Text::new("City name:")
            .with_validator(|input: &str| {
                if city_is_fetchable(input) {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid(
                        format!("City name must be at least {MIN_CITY_LEN} characters.").into(),
                    ))
                }
            })
            .with_help_message("Esc to quit")
            .prompt_skippable()
            .context("Failed to read city name")?;

        let Some(city) = input else { break };

        controller.set_city(city);
        controller.fetch().await;

        println!("{}", view::render(controller.state(), unit));
    }

    Ok(())
}

/// Gate on the fetch action: inputs shorter than [`MIN_CITY_LEN`] characters
/// never trigger a request.
fn city_is_fetchable(input: &str) -> bool {
    input.trim().chars().count() >= MIN_CITY_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_is_not_fetchable() {
        assert!(!city_is_fetchable(""));
        assert!(!city_is_fetchable("ab"));
        assert!(!city_is_fetchable("  ab  "));
    }

    #[test]
    fn three_characters_or_more_is_fetchable() {
        assert!(city_is_fetchable("Rio"));
        assert!(city_is_fetchable("London"));
        assert!(city_is_fetchable("  Oslo "));
    }

    #[test]
    fn unit_flag_maps_to_temp_unit() {
        assert_eq!(unit_for(false), TempUnit::Celsius);
        assert_eq!(unit_for(true), TempUnit::Fahrenheit);
    }
}
