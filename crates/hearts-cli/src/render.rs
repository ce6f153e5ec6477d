//! Plain-text transcript of a match, written through [`GameObserver`].

use std::io::{self, Write};

use colored::Colorize;
use hearts_core::game::observer::GameObserver;
use hearts_core::model::card::Card;
use hearts_core::model::player::{Player, PlayerPosition};
use hearts_core::model::score::ScoreBoard;

/// Card label with the suit glyph, red for hearts and diamonds when `color`.
pub fn format_card(card: Card, color: bool) -> String {
    format_card_padded(card, 0, color)
}

/// [`format_card`] left-aligned in `width` columns. The padding sits inside
/// the color codes so escapes never eat into the width.
pub fn format_card_padded(card: Card, width: usize, color: bool) -> String {
    let label = format!("{:<width$}", format!("{}{}", card.rank, card.suit.symbol()));
    if !color {
        return label;
    }
    if card.suit.is_red() {
        label.red().to_string()
    } else {
        label.bold().to_string()
    }
}

/// `"A"`, `"A and B"`, `"A, B and C"`.
pub fn join_names(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => (*only).to_string(),
        [head @ .., last] => format!("{} and {last}", head.join(", ")),
    }
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    color: bool,
    human: Option<PlayerPosition>,
    error: Option<io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            human: None,
            error: None,
        }
    }

    /// Marks the seat whose plays are echoed with `=>` instead of `->`.
    pub fn with_human(mut self, seat: Option<PlayerPosition>) -> Self {
        self.human = seat;
        self
    }

    /// Flushes and returns the writer, or the first write error seen.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn emit(&mut self, line: std::fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.out.write_fmt(format_args!("{line}\n")) {
            self.error = Some(err);
        }
    }
}

impl<W: Write> GameObserver for TerminalRenderer<W> {
    fn round_started(&mut self, round_number: u32) {
        self.emit(format_args!("\nStarting round {round_number}:"));
    }

    fn card_played(&mut self, player: &Player, card: Card) {
        let arrow = if self.human == Some(player.seat) {
            "=>"
        } else {
            "->"
        };
        let card = format_card(card, self.color);
        self.emit(format_args!("{} {arrow} {card}", player.name));
    }

    fn trick_won(&mut self, player: &Player, _penalties: u8) {
        self.emit(format_args!("{} wins the trick\n", player.name));
    }

    fn round_finished(&mut self, players: &[Player; 4], round: [u8; 4], totals: &ScoreBoard) {
        self.emit(format_args!("Scores:"));
        for seat in totals.ranked_desc() {
            let name = &players[seat.index()].name;
            let round_score = round[seat.index()];
            let total = totals.score(seat);
            self.emit(format_args!("{name:<15} {round_score:>3} {total:>3}"));
        }
    }

    fn match_finished(&mut self, players: &[Player; 4], winners: &[PlayerPosition]) {
        let names: Vec<&str> = winners
            .iter()
            .map(|seat| players[seat.index()].name.as_str())
            .collect();
        let line = join_names(&names);
        let line = if self.color {
            line.green().bold().to_string()
        } else {
            line
        };
        self.emit(format_args!("\n{line} won the game"));
    }
}
