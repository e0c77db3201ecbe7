use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use inquire::{Select, Text, validator::Validation};
use tracing::{debug, info};
use weather_core::{Config, Units, load_dashboard, provider_from_config};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather and a 5-day outlook")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively set the API key, units and language.
    Configure,

    /// Show weather for a city.
    Show {
        /// City name; defaults to the configured default city.
        city: Option<String>,

        /// Measurement system: metric or imperial.
        #[arg(long, value_parser = parse_units)]
        units: Option<Units>,

        /// Response language code, e.g. "en" or "pl".
        #[arg(long)]
        lang: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write the output to a file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn parse_units(value: &str) -> Result<Units, String> {
    Units::try_from(value).map_err(|e| e.to_string())
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show {
                city,
                units,
                lang,
                format,
                out,
            } => {
                let mut config = Config::load()?;
                apply_overrides(&mut config, units, lang);
                let city = city.unwrap_or_else(|| config.default_city.clone());
                show(&config, &city, format, out).await
            }
        }
    }
}

/// Per-invocation flags take precedence over the stored config.
fn apply_overrides(config: &mut Config, units: Option<Units>, lang: Option<String>) {
    if let Some(units) = units {
        config.units = units;
    }
    if let Some(lang) = lang.filter(|l| !l.trim().is_empty()) {
        config.language = lang.trim().to_string();
    }
}

async fn show(
    config: &Config,
    city: &str,
    format: OutputFormat,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let provider = provider_from_config(config)?;
    debug!(?provider, "provider ready");

    let dashboard = load_dashboard(provider.as_ref(), city, config.units)
        .await
        .with_context(|| format!("Could not load weather for '{city}'"))?;

    let rendered = match format {
        OutputFormat::Text => render::text::render(&dashboard),
        OutputFormat::Html => render::html::render_page(&dashboard),
    };

    match out {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            info!(path = %path.display(), "output written");
            println!("Wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("OpenWeatherMap API key:")
        .with_default(config.api_key.as_deref().unwrap_or_default())
        .with_validator(|input: &str| {
            if input.trim().is_empty() {
                Ok(Validation::Invalid("API key must not be empty".into()))
            } else {
                Ok(Validation::Valid)
            }
        })
        .prompt()
        .context("Failed to read API key")?;

    let starting = Units::all()
        .iter()
        .position(|u| *u == config.units)
        .unwrap_or(0);
    let units = Select::new("Units:", Units::all().to_vec())
        .with_starting_cursor(starting)
        .prompt()
        .context("Failed to read units")?;

    let language = Text::new("Language code:")
        .with_default(&config.language)
        .prompt()
        .context("Failed to read language")?;

    let default_city = Text::new("Default city:")
        .with_default(&config.default_city)
        .prompt()
        .context("Failed to read default city")?;

    config.api_key = Some(api_key.trim().to_string());
    config.units = units;
    config.language = language.trim().to_string();
    config.default_city = default_city.trim().to_string();

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());

    Ok(())
}
