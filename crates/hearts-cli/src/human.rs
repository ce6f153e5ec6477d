use std::io::{BufRead, Write};

use hearts_bot::{Policy, PolicyContext};
use hearts_core::model::card::Card;
use tracing::{Level, event};

use crate::render::format_card;

/// Seat driven by a person typing card numbers.
///
/// Bad input is answered with a notice and another prompt. End of input
/// plays the first listed card so a closed stdin cannot stall the table.
pub struct HumanPolicy<R: BufRead, W: Write> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> HumanPolicy<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: &str, newline: bool) {
        let written = if newline {
            writeln!(self.output, "{text}")
        } else {
            write!(self.output, "{text}")
        };
        if let Err(err) = written.and_then(|()| self.output.flush()) {
            event!(target: "hearts_cli::human", Level::WARN, error = %err, "prompt write failed");
        }
    }

    /// Reads one line; `None` on end of input or a read error.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(err) => {
                event!(target: "hearts_cli::human", Level::WARN, error = %err, "input read failed");
                None
            }
        }
    }
}

/// Parses a 1-based choice among `count` options.
pub fn parse_choice(raw: &str, count: usize) -> Option<usize> {
    let choice: usize = raw.trim().parse().ok()?;
    (1..=count).contains(&choice).then(|| choice - 1)
}

impl<R: BufRead, W: Write> Policy for HumanPolicy<R, W> {
    fn choose_play(&mut self, ctx: &PolicyContext) -> Option<Card> {
        let mut legal = ctx.legal_cards();
        if legal.is_empty() {
            return None;
        }
        legal.sort_by(Card::cmp_rank);

        let options = legal
            .iter()
            .enumerate()
            .map(|(idx, card)| format!("{}: {}", idx + 1, format_card(*card, self.color)))
            .collect::<Vec<_>>()
            .join("  ");
        let rest = ctx
            .hand
            .iter()
            .copied()
            .filter(|card| !legal.contains(card))
            .map(|card| format_card(card, self.color))
            .collect::<Vec<_>>()
            .join(" ");
        self.say(&format!("  {options}  (Rest: {rest})"), true);

        let prompt = format!("  {}, choose card (1-{}): ", ctx.player.name, legal.len());
        loop {
            self.say(&prompt, false);
            let Some(line) = self.read_line() else {
                let fallback = legal[0];
                event!(
                    target: "hearts_cli::human",
                    Level::WARN,
                    player = %ctx.player.name,
                    card = %fallback,
                    "input closed; playing first legal card"
                );
                self.say("", true);
                return Some(fallback);
            };
            match parse_choice(&line, legal.len()) {
                Some(idx) => return Some(legal[idx]),
                None => {
                    let notice = format!("  Please enter a number from 1 to {}.", legal.len());
                    self.say(&notice, true);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{HumanPolicy, parse_choice};
    use hearts_bot::{Policy, PolicyContext};
    use hearts_core::model::card::Card;
    use hearts_core::model::hand::Hand;
    use hearts_core::model::player::{Player, PlayerPosition};
    use hearts_core::model::round::RoundState;
    use std::io::Cursor;

    fn hand(text: &str) -> Hand {
        text.split_whitespace().map(|c| c.parse::<Card>().unwrap()).collect()
    }

    fn round() -> RoundState {
        let hands = [hand("5S 3D KC 2H"), hand("6S"), hand("7S"), hand("8S")];
        RoundState::from_hands(hands, PlayerPosition::North)
    }

    fn choose(input: &str) -> (Card, String) {
        let round = round();
        let player = Player::new(PlayerPosition::North, "Ola");
        let ctx = PolicyContext::new(&player, &round);
        let mut policy = HumanPolicy::new(Cursor::new(input.as_bytes()), Vec::new(), false);
        let card = policy.choose_play(&ctx).unwrap();
        (card, String::from_utf8(policy.into_output()).unwrap())
    }

    #[test]
    fn lists_legal_cards_by_rank_with_the_rest_of_the_hand() {
        let (card, output) = choose("2\n");
        assert_eq!(card, "5S".parse::<Card>().unwrap());
        assert!(output.starts_with("  1: 3♦  2: 5♠  3: K♣  (Rest: 2♥)\n"));
        assert!(output.contains("  Ola, choose card (1-3): "));
    }

    #[test]
    fn bad_input_reprompts_until_valid() {
        let (card, output) = choose("abc\n9\n0\n3\n");
        assert_eq!(card, "KC".parse::<Card>().unwrap());
        assert_eq!(output.matches("Please enter a number from 1 to 3.").count(), 3);
        assert_eq!(output.matches("choose card (1-3)").count(), 4);
    }

    #[test]
    fn end_of_input_falls_back_to_first_legal_card() {
        let (card, _) = choose("");
        assert_eq!(card, "3D".parse::<Card>().unwrap());
        let (card, _) = choose("x\n");
        assert_eq!(card, "3D".parse::<Card>().unwrap());
    }

    #[test]
    fn choices_are_one_based_and_bounded() {
        assert_eq!(parse_choice(" 1 \n", 3), Some(0));
        assert_eq!(parse_choice("3", 3), Some(2));
        assert_eq!(parse_choice("4", 3), None);
        assert_eq!(parse_choice("-1", 3), None);
    }

    #[test]
    fn empty_hand_chooses_nothing_and_prints_nothing() {
        let round = RoundState::from_hands(Default::default(), PlayerPosition::North);
        let player = Player::new(PlayerPosition::North, "Ola");
        let ctx = PolicyContext::new(&player, &round);
        let mut policy = HumanPolicy::new(Cursor::new("1\n".as_bytes()), Vec::<u8>::new(), false);
        assert_eq!(policy.choose_play(&ctx), None);
        assert!(policy.into_output().is_empty());
    }
}
