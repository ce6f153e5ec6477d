//! Subcommand handlers. Each writes its transcript to the given writer and
//! leaves process-level concerns (argument parsing, logging) to `main`.

mod deal;
mod play;
mod simulate;

pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use simulate::handle_simulate_command;

use std::io::Write;

use anyhow::{Context, Result};
use hearts_bot::{HeuristicPolicy, Policy, Seating, Table};
use hearts_core::game::match_state::MatchState;
use hearts_core::game::summary::MatchSummary;
use tracing::{Level, event};

use crate::config::MatchConfig;
use crate::render::TerminalRenderer;

/// How a finished match is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub color: bool,
    pub json: bool,
}

/// Heuristic bots everywhere except the seat handed to `human`.
fn seat_policies(seating: &Seating, mut human: Option<Box<dyn Policy>>) -> [Box<dyn Policy>; 4] {
    std::array::from_fn(|idx| {
        if seating.human.is_some_and(|seat| seat.index() == idx) {
            if let Some(policy) = human.take() {
                return policy;
            }
        }
        Box::new(HeuristicPolicy::new()) as Box<dyn Policy>
    })
}

/// Plays a full match for `seating` and writes the transcript to `out`.
fn run_match(
    config: &MatchConfig,
    seating: &Seating,
    seats: [Box<dyn Policy>; 4],
    out: &mut dyn Write,
    options: OutputOptions,
) -> Result<MatchSummary> {
    let mut state =
        MatchState::with_seed_and_limit(seating.names.clone(), config.seed, config.score_limit)
            .context("dealing the first round")?;
    event!(
        target: "hearts_cli::match",
        Level::INFO,
        seed = config.seed,
        score_limit = config.score_limit,
        names = ?seating.names,
        human = ?seating.human,
        "match starting"
    );

    let renderer = TerminalRenderer::new(&mut *out, options.color).with_human(seating.human);
    let mut table = Table::new(seats, renderer);
    let summary = table.play_match(&mut state).context("playing the match")?;
    table
        .into_observer()
        .finish()
        .context("writing the match transcript")?;

    if options.json {
        let json = summary.to_json().context("encoding the match summary")?;
        writeln!(out, "{json}")?;
    }
    Ok(summary)
}
