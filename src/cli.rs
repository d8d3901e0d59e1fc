//! CLI interface for Quakelist.
//!
//! A plain-text rendering layer over the library: it reads records that
//! were already parsed from the feed, formats each one, and resolves
//! category keys to colors through the configured palette.

mod format;

use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use quakelist::{Config, ListEntry, feed};

use format::{format_category, format_json, format_row, format_split};

/// Quakelist: earthquake feed records as list entries.
#[derive(Debug, Parser)]
#[command(name = "quakelist", after_long_help = USAGE_HELP)]
pub struct Cli {
    /// Config file. Defaults to `$QUAKELIST_CONFIG`, then `~/.quakelist/config.toml`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

const USAGE_HELP: &str = r#"Records are a JSON array:
  [{"magnitude": 7.2, "location": "88km N of Yelizovo, Russia",
    "timeMillis": 1454124312220, "url": "https://..."}]

Examples:
  quakelist render quakes.json
  curl -s https://example.org/quakes.json | quakelist render --json
  quakelist category 6.4
  quakelist split "5km N of Nowhere""#;

#[derive(Debug, Subcommand)]
enum Command {
    /// Render records as list entries, one per line.
    Render {
        /// JSON file of records. Reads stdin when omitted.
        file: Option<PathBuf>,

        /// Print the entries as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Show the display string, category and color for a magnitude.
    Category {
        #[arg(allow_negative_numbers = true)]
        magnitude: f64,
    },

    /// Split a location into offset and primary place.
    Split { location: String },
}

/// Run the CLI, returning an error message on failure.
pub fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.config.as_deref()).map_err(|e| e.to_string())?;

    match cli.command {
        Command::Render { file, json } => cmd_render(&config, file.as_deref(), json),
        Command::Category { magnitude } => {
            cmd_category(&config, magnitude);
            Ok(())
        }
        Command::Split { location } => cmd_split(&config, &location),
    }
}

fn cmd_render(config: &Config, file: Option<&Path>, json: bool) -> Result<(), String> {
    let formatter = config.formatter().map_err(|e| e.to_string())?;

    let records = match file {
        Some(path) => feed::load_records(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?,
        None => feed::read_records(io::stdin().lock())
            .map_err(|e| format!("failed to read stdin: {e}"))?,
    };
    tracing::info!(records = records.len(), "rendering entries");

    let entries: Vec<ListEntry> = formatter.entries(&records).collect();

    if json {
        let json =
            format_json(entries, config).map_err(|e| format!("failed to serialize entries: {e}"))?;
        println!("{json}");
        return Ok(());
    }

    if entries.is_empty() {
        eprintln!("No earthquakes");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", format_row(entry, config.color(entry.category)));
    }

    Ok(())
}

fn cmd_category(config: &Config, magnitude: f64) {
    println!("{}", format_category(magnitude, config));
}

fn cmd_split(config: &Config, location: &str) -> Result<(), String> {
    let formatter = config.formatter().map_err(|e| e.to_string())?;
    println!("{}", format_split(formatter.split_location(location)));
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
    fn parses_negative_magnitude() {
        let cli = Cli::try_parse_from(["quakelist", "category", "-0.5"]).unwrap();
        assert!(matches!(cli.command, Command::Category { magnitude } if magnitude == -0.5));
    }

    #[test]
    fn parses_render_with_global_config() {
        let cli =
            Cli::try_parse_from(["quakelist", "render", "feed.json", "--json", "--config", "c.toml"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert!(matches!(
            cli.command,
            Command::Render { file: Some(_), json: true }
        ));
    }
}
