use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use hearts_bot::{Policy, Seating};
use hearts_core::game::summary::MatchSummary;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{OutputOptions, run_match, seat_policies};
use crate::config::MatchConfig;
use crate::human::HumanPolicy;
use crate::prompt::{prompt_names, prompt_player_count};

/// Interactive match: the first name plays from `input`, bots fill the table.
///
/// Without names in `config`, the player count and names are asked for on
/// `prompts` first.
pub fn handle_play_command<R, P>(
    mut config: MatchConfig,
    mut input: R,
    mut prompts: P,
    out: &mut dyn Write,
    options: OutputOptions,
) -> Result<MatchSummary>
where
    R: BufRead + 'static,
    P: Write + 'static,
{
    if config.names.is_empty() {
        let count = prompt_player_count(&mut input, &mut prompts)
            .context("reading the number of players")?;
        config.names =
            prompt_names(&mut input, &mut prompts, count).context("reading player names")?;
    }

    let mut roster_rng = StdRng::seed_from_u64(config.seed);
    let seating = Seating::arrange(&config.names, config.human, &mut roster_rng);
    let human = seating.human.map(|_| {
        Box::new(HumanPolicy::new(input, prompts, options.color)) as Box<dyn Policy>
    });
    let seats = seat_policies(&seating, human);

    run_match(&config, &seating, seats, out, options)
}
