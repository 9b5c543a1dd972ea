use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use classclock_core::Locale;
use tracing_subscriber::EnvFilter;

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "classclock", version, about = "Class schedule status for the current moment")]
struct Cli {
    /// Timetable file (default: ~/.config/classclock/timetable.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Display language, overriding the configured one (ja, en)
    #[arg(long, global = true)]
    locale: Option<Locale>,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the status for the current moment
    Now {
        /// Resolve this local time instead of now ("YYYY-MM-DD HH:MM")
        #[arg(long, value_parser = common::parse_datetime)]
        at: Option<chrono::NaiveDateTime>,
        /// Print the resolved status as JSON
        #[arg(long)]
        json: bool,
    },
    /// Re-render at every minute boundary until Ctrl-C
    Watch,
    /// Print the built schedules
    Timetable {
        /// Only this day (mon..fri)
        #[arg(long)]
        day: Option<classclock_core::DayKey>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let opts = common::GlobalOpts {
        config: cli.config,
        locale: cli.locale,
    };
    let result = match cli.command {
        Commands::Now { at, json } => commands::now::run(&opts, at, json),
        Commands::Watch => commands::watch::run(&opts),
        Commands::Timetable { day, json } => commands::timetable::run(&opts, day, json),
        Commands::Config { action } => commands::config::run(&opts, action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
