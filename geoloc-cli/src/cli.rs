use anyhow::Context;
use clap::{Parser, Subcommand};
use geoloc_core::{Config, LocationResolver};
use inquire::{Password, PasswordDisplayMode, Text};
use std::io::{self, Write};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "geoloc",
    version,
    about = "Resolve US city/state pairs and ZIP codes to coordinates and current weather",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Locations: "City, State" (e.g. "Madison, WI") or a 5-digit ZIP code.
    /// A bare first argument `configure` runs the subcommand instead.
    #[arg(value_name = "LOCATIONS")]
    pub locations: Vec<String>,

    /// Print the outcomes as a JSON array.
    #[arg(long)]
    pub json: bool,

    /// API key to use instead of the configured one.
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Provider endpoint to use instead of the configured one.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the provider API key (and optionally the endpoint).
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            None => {
                let mut config = Config::load_with_env()?;
                if let Some(key) = self.api_key {
                    config.api_key = Some(key);
                }
                if let Some(url) = self.base_url {
                    config.base_url = url;
                }

                let mut stdout = io::stdout().lock();
                lookup(&config, &self.locations, self.json, &mut stdout).await?;
                stdout.flush().context("Failed to flush stdout")?;

                Ok(())
            }
        }
    }
}

/// Resolve `locations` with `config` and write every outcome to `out`.
async fn lookup<W: Write>(
    config: &Config,
    locations: &[String],
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let resolver = LocationResolver::from_config(config);
    let outcomes = resolver.resolve_all(locations).await;

    if json {
        output::write_json(out, &outcomes)
    } else {
        output::write_human(out, &outcomes)
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;

    let base_url = Text::new("Endpoint:")
        .with_default(&config.base_url)
        .prompt()
        .context("Failed to read endpoint")?;

    config.api_key = Some(api_key.trim().to_string());
    config.base_url = base_url.trim().to_string();
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_variadic_locations() {
        let cli = Cli::try_parse_from(["geoloc", "Madison, WI", "78744", "--json"]).unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.locations, vec!["Madison, WI", "78744"]);
        assert!(cli.json);
    }

    #[test]
    fn no_locations_is_allowed() {
        let cli = Cli::try_parse_from(["geoloc"]).unwrap();
        assert!(cli.locations.is_empty());
    }

    #[test]
    fn parses_overrides() {
        let cli =
            Cli::try_parse_from(["geoloc", "--api-key", "K", "--base-url", "LOL", "78744"])
                .unwrap();

        assert_eq!(cli.api_key.as_deref(), Some("K"));
        assert_eq!(cli.base_url.as_deref(), Some("LOL"));
        assert_eq!(cli.locations, vec!["78744"]);
    }

    #[tokio::test]
    async fn lookup_without_api_key_prints_local_rejections() {
        let config = Config::default();

        let mut buf = Vec::new();
        lookup(&config, &[], false, &mut buf).await.unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Please pass an input."));

        let mut buf = Vec::new();
        let locations = vec![String::new(), "YYYYY, XXXX, RRR, TTT".to_string()];
        lookup(&config, &locations, true, &mut buf).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert!(items[0].as_str().unwrap().starts_with("Please pass an input."));
        assert!(
            items[1]
                .as_str()
                .unwrap()
                .starts_with("YYYYY, XXXX, RRR, TTT: Invalid input format.")
        );
    }

    #[test]
    fn parses_configure_subcommand() {
        let cli = Cli::try_parse_from(["geoloc", "configure"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Configure)));
        assert!(cli.locations.is_empty());
    }
}
