use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Select, Text};
use zipweather_core::{CliConfig, ProxyClient, Unit, WeatherPage};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "zipweather", version, about = "Zip-code weather lookup")]
pub struct Cli {
    /// Server base URL; overrides the configured value.
    #[arg(long, global = true)]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current weather for a zip code.
    Show {
        /// 5-digit US zip code.
        zip_code: String,

        /// Report in Fahrenheit regardless of the configured unit.
        #[arg(long)]
        fahrenheit: bool,
    },

    /// Prompt for zip codes in a loop.
    Interactive,

    /// Store the server URL and preferred units.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = CliConfig::load().context("Failed to load CLI configuration")?;
        let server_url = self.server.unwrap_or_else(|| config.server_url.clone());

        match self.command {
            Command::Show { zip_code, fahrenheit } => {
                show(&server_url, &config, zip_code, fahrenheit).await
            }
            Command::Interactive => interactive(&server_url, &config).await,
            Command::Configure => configure(config),
        }
    }
}

async fn show(
    server_url: &str,
    config: &CliConfig,
    zip_code: String,
    fahrenheit: bool,
) -> anyhow::Result<()> {
    let mut page = WeatherPage::new(ProxyClient::new(server_url));
    page.set_unit(if fahrenheit { Unit::Fahrenheit } else { config.unit });
    page.set_zip_code(zip_code.trim());

    page.get_weather().await;

    match page.weather() {
        Some(_) => {
            println!("{}", output::render(&page));
            Ok(())
        }
        None => anyhow::bail!(
            "No weather available for '{}' (check the zip code and that a server is running at {server_url})",
            zip_code.trim()
        ),
    }
}

async fn interactive(server_url: &str, config: &CliConfig) -> anyhow::Result<()> {
    let mut page = WeatherPage::new(ProxyClient::new(server_url));
    page.set_unit(config.unit);

    loop {
        let zip_code = match Text::new("Zip code:").prompt() {
            Ok(value) => value,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        page.set_zip_code(zip_code.trim());
        page.get_weather().await;

        if page.weather().is_none() {
            println!("No weather available for that zip code.");
            continue;
        }

        println!("\n{}\n", output::render(&page));

        const TOGGLE: &str = "Toggle °C/°F";
        const ANOTHER: &str = "Another zip code";
        const QUIT: &str = "Quit";

        loop {
            let choice = match Select::new("Next:", vec![TOGGLE, ANOTHER, QUIT]).prompt() {
                Ok(value) => value,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    return Ok(());
                }
                Err(err) => return Err(err.into()),
            };

            match choice {
                TOGGLE => {
                    page.toggle_unit();
                    println!("\n{}\n", output::render(&page));
                }
                ANOTHER => break,
                _ => return Ok(()),
            }
        }
    }
}

fn configure(mut config: CliConfig) -> anyhow::Result<()> {
    let server_url = Text::new("Server URL:")
        .with_initial_value(&config.server_url)
        .prompt()
        .context("Configuration aborted")?;

    let unit = Select::new("Preferred units:", vec![Unit::Celsius, Unit::Fahrenheit])
        .prompt()
        .context("Configuration aborted")?;

    config.server_url = server_url;
    config.unit = unit;
    config.save().context("Failed to save CLI configuration")?;

    println!("Saved to {}", CliConfig::config_file_path()?.display());

    Ok(())
}
