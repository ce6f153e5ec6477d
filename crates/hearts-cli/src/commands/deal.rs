use std::io::Write;

use anyhow::{Context, Result};
use hearts_bot::DealDemo;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::render::format_card_padded;

/// Deals four hands and has every player throw random cards, one line per
/// pass around the table.
pub fn handle_deal_command(
    names: &[String],
    seed: u64,
    color: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut demo = DealDemo::new(names, &mut rng).context("dealing the demo hands")?;

    for turn in demo.play_all(&mut rng) {
        let last = turn.plays.len().saturating_sub(1);
        let line = turn
            .plays
            .iter()
            .enumerate()
            .map(|(idx, (seat, card))| {
                let name = &demo.players()[seat.index()].name;
                let width = if idx == last { 0 } else { 3 };
                format!("{name}: {}", format_card_padded(*card, width, color))
            })
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{line}")?;
    }
    Ok(())
}
