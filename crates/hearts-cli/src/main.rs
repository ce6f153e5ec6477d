use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::Level;

use hearts_cli::commands::{
    OutputOptions, handle_deal_command, handle_play_command, handle_simulate_command,
};
use hearts_cli::config::{MatchConfig, default_score_limit, parse_level};
use hearts_cli::logging::init_logging;

/// Hearts in the terminal against bots.
#[derive(Debug, Parser)]
#[command(name = "hearts", author, version, about = "Play Hearts against bots")]
struct Cli {
    /// Log verbosity (trace, debug, info, warn, error). `RUST_LOG` wins.
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn", value_parser = level_arg)]
    log_level: Level,

    /// Write JSON log lines to this file instead of stderr.
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play a match: the first name is yours, bots take the other seats.
    Play {
        /// Player names; asked for interactively when omitted.
        names: Vec<String>,

        /// RNG seed for deals and bot names.
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// The match ends once a score is above this.
        #[arg(long, value_name = "POINTS", default_value_t = default_score_limit())]
        score_limit: u32,

        /// Disable colored cards.
        #[arg(long)]
        no_color: bool,

        /// Print the final standings as JSON after the transcript.
        #[arg(long)]
        json: bool,
    },
    /// Let four bots play a whole match.
    Simulate {
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        #[arg(long, value_name = "POINTS", default_value_t = default_score_limit())]
        score_limit: u32,

        /// Print only the final standings, as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Deal four hands and throw random cards until they run out.
    Deal {
        /// Up to four names; defaults are P1..P4.
        names: Vec<String>,

        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,
    },
}

fn level_arg(raw: &str) -> Result<Level, String> {
    parse_level(raw).ok_or_else(|| format!("unknown log level '{raw}'"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _logging_guard = init_logging(cli.log_level, cli.log_file.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Play {
            names,
            seed,
            score_limit,
            no_color,
            json,
        } => {
            let mut config = MatchConfig::new(names, seed, score_limit, true);
            config.validate().context("invalid play options")?;
            let options = OutputOptions {
                color: !no_color,
                json,
            };
            handle_play_command(config, io::stdin().lock(), io::stdout(), &mut out, options)?;
        }
        Command::Simulate {
            seed,
            score_limit,
            json,
        } => {
            let mut config = MatchConfig::new(Vec::new(), seed, score_limit, false);
            config.validate().context("invalid simulate options")?;
            let options = OutputOptions { color: true, json };
            handle_simulate_command(&config, &mut out, options)?;
        }
        Command::Deal { names, seed } => {
            let seed = seed.unwrap_or_else(rand::random);
            handle_deal_command(&names, seed, true, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
