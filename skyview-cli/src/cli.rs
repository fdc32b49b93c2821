use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use inquire::{CustomType, InquireError, Select, Text};
use skyview_core::{Config, PresentationState, UnitSystem, WeatherService};
use tracing::debug;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skyview", version, about = "Current weather and a short forecast for any place")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure default units and request timeout.
    Configure,

    /// Show weather for a place.
    Show {
        /// Place name, e.g. "Tokyo" or "New York".
        #[arg(required = true, num_args = 1..)]
        place: Vec<String>,

        /// Display units: metric or imperial. Defaults to the configured units.
        #[arg(long)]
        units: Option<UnitSystem>,

        /// Print the lookup result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Look up several places in one session, keeping a search history.
    Interactive {
        /// Initial display units.
        #[arg(long)]
        units: Option<UnitSystem>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { place, units, json } => show(&place.join(" "), units, json).await,
            Command::Interactive { units } => interactive(units).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let options = UnitSystem::all().to_vec();
    let cursor = options.iter().position(|u| *u == config.units).unwrap_or(0);
    let units = Select::new("Default units:", options)
        .with_starting_cursor(cursor)
        .prompt()
        .context("Failed to read units selection")?;
    config.set_units(units);

    let timeout = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(config.timeout_secs)
        .with_error_message("Please enter a whole number of seconds")
        .prompt()
        .context("Failed to read request timeout")?;
    config.set_timeout_secs(timeout)?;

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(place: &str, units: Option<UnitSystem>, json: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    debug!(?config, "loaded configuration");
    let units = units.unwrap_or(config.units);
    let service = WeatherService::from_config(&config)?;

    let result = service
        .lookup(place)
        .await
        .map_err(|e| anyhow!(render::error_line(&e)))?;

    if json {
        let text =
            serde_json::to_string_pretty(&result).context("Failed to serialize lookup result")?;
        println!("{text}");
    } else {
        for line in render::result_lines(&result, units) {
            println!("{line}");
        }
    }

    Ok(())
}

async fn interactive(units: Option<UnitSystem>) -> anyhow::Result<()> {
    let config = Config::load()?;
    debug!(?config, "loaded configuration");
    let service = WeatherService::from_config(&config)?;
    let mut state = PresentationState::new(units.unwrap_or(config.units));

    loop {
        let line = match Text::new("Place:")
            .with_help_message(":units <metric|imperial>, :clear, :history, :quit")
            .prompt()
        {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match SessionInput::parse(&line) {
            SessionInput::Quit => break,
            SessionInput::Clear => {
                state.clear();
                println!("Display cleared.");
            }
            SessionInput::History => {
                for line in render::history_lines(&service.history().snapshot()) {
                    println!("{line}");
                }
            }
            SessionInput::Units(value) => match value.parse::<UnitSystem>() {
                Ok(units) => {
                    state.set_units(units);
                    print_current(&state);
                }
                Err(e) => eprintln!("{e}"),
            },
            SessionInput::Place(place) => match service.lookup(place).await {
                Ok(result) => {
                    if state.present(result) {
                        print_current(&state);
                    } else {
                        debug!("discarded stale lookup result");
                    }
                }
                Err(e) => eprintln!("{}", render::error_line(&e)),
            },
        }
    }

    Ok(())
}

fn print_current(state: &PresentationState) {
    if let Some(result) = state.current() {
        for line in render::result_lines(result, state.units()) {
            println!("{line}");
        }
    }
}

/// One line typed in an interactive session.
#[derive(Debug, PartialEq, Eq)]
enum SessionInput<'a> {
    Quit,
    Clear,
    History,
    Units(&'a str),
    Place(&'a str),
}

impl<'a> SessionInput<'a> {
    fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        let Some(command) = trimmed.strip_prefix(':') else {
            return SessionInput::Place(trimmed);
        };

        let (name, arg) = command.split_once(char::is_whitespace).unwrap_or((command, ""));
        match name {
            "q" | "quit" | "exit" => SessionInput::Quit,
            "clear" | "reset" => SessionInput::Clear,
            "history" => SessionInput::History,
            "units" => SessionInput::Units(arg.trim()),
            _ => SessionInput::Place(trimmed),
        }
    }
}
