use std::io::{self, Write};

use anyhow::Result;
use hearts_bot::Seating;
use hearts_core::game::summary::MatchSummary;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{OutputOptions, run_match, seat_policies};
use crate::config::MatchConfig;

/// Four bots play a whole match. With `json` only the summary is printed.
pub fn handle_simulate_command(
    config: &MatchConfig,
    out: &mut dyn Write,
    options: OutputOptions,
) -> Result<MatchSummary> {
    let mut roster_rng = StdRng::seed_from_u64(config.seed);
    let seating = Seating::arrange(&[], false, &mut roster_rng);
    let seats = seat_policies(&seating, None);

    if options.json {
        let summary = run_match(config, &seating, seats, &mut io::sink(), OutputOptions::default())?;
        let json = summary.to_json()?;
        writeln!(out, "{json}")?;
        Ok(summary)
    } else {
        run_match(config, &seating, seats, out, options)
    }
}

#[cfg(test)]
mod tests {
    use super::handle_simulate_command;
    use crate::commands::OutputOptions;
    use crate::config::MatchConfig;
    use hearts_bot::BOT_NAMES;
    use hearts_core::game::summary::MatchSummary;

    fn simulate(seed: u64, json: bool) -> (MatchSummary, String) {
        let config = MatchConfig::new(Vec::new(), Some(seed), 100, false);
        let mut out = Vec::new();
        let options = OutputOptions { color: false, json };
        let summary = handle_simulate_command(&config, &mut out, options).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn bots_play_until_someone_passes_the_limit() {
        let (summary, text) = simulate(8, false);
        assert!(summary.scores.iter().any(|s| s.score > 100));
        assert!(!summary.winners.is_empty());
        for seat in &summary.scores {
            assert!(BOT_NAMES.contains(&seat.name.as_str()));
        }
        assert!(text.contains("Starting round 1:"));
        assert!(text.trim_end().ends_with("won the game"));
    }

    #[test]
    fn json_mode_prints_only_the_summary() {
        let (summary, text) = simulate(8, true);
        assert_eq!(MatchSummary::from_json(&text).unwrap(), summary);
    }

    #[test]
    fn same_seed_same_match() {
        assert_eq!(simulate(77, false), simulate(77, false));
    }
}
