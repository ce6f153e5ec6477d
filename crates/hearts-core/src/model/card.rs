use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Opening card: whoever holds it must lead it.
    pub const TWO_OF_CLUBS: Card = Card::new(Rank::Two, Suit::Clubs);
    pub const QUEEN_OF_SPADES: Card = Card::new(Rank::Queen, Suit::Spades);

    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn is_penalty(self) -> bool {
        matches!(self.suit, Suit::Hearts) || self.is_queen_of_spades()
    }

    pub const fn is_queen_of_spades(self) -> bool {
        matches!(self.rank, Rank::Queen) && matches!(self.suit, Suit::Spades)
    }

    pub const fn rank_value(self) -> u8 {
        self.rank.ordinal()
    }

    pub fn penalty_value(self) -> u8 {
        if self.is_queen_of_spades() {
            13
        } else if self.suit == Suit::Hearts {
            1
        } else {
            0
        }
    }

    /// Orders two cards by rank value alone. Suit never breaks ties, so this
    /// is only meaningful between cards of one suit or for display sorting.
    pub fn cmp_rank(&self, other: &Card) -> Ordering {
        self.rank_value().cmp(&other.rank_value())
    }

    /// True when `self` would take a trick led in `lead` whose best lead-suit
    /// card so far is `best`.
    pub fn beats(self, best: Card, lead: Suit) -> bool {
        self.suit == lead && self.cmp_rank(&best) == Ordering::Greater
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse card from {0:?}")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses `"QS"`, `"10H"`, `"2♣"` style notation: rank first, suit last.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let err = || ParseCardError(s.to_string());
        let suit_char = text.chars().last().ok_or_else(err)?;
        let suit = Suit::from_char(suit_char).ok_or_else(err)?;
        let rank_text = &text[..text.len() - suit_char.len_utf8()];
        let rank = Rank::from_symbol(rank_text).ok_or_else(err)?;
        Ok(Card::new(rank, suit))
    }
}

#[cfg(test)]
mod tests {
    use super::{Card, Rank, Suit};
    use std::cmp::Ordering;

    #[test]
    fn queen_of_spades_identified() {
        let card = Card::new(Rank::Queen, Suit::Spades);
        assert!(card.is_queen_of_spades());
        assert!(card.is_penalty());
        assert_eq!(card.penalty_value(), 13);
    }

    #[test]
    fn regular_card_not_penalty() {
        let card = Card::new(Rank::Ten, Suit::Clubs);
        assert!(!card.is_penalty());
        assert_eq!(card.penalty_value(), 0);
    }

    #[test]
    fn hearts_are_one_point() {
        let card = Card::new(Rank::Ace, Suit::Hearts);
        assert!(card.is_penalty());
        assert_eq!(card.penalty_value(), 1);
    }

    #[test]
    fn other_queens_score_nothing() {
        assert_eq!(Card::new(Rank::Queen, Suit::Clubs).penalty_value(), 0);
        assert_eq!(Card::new(Rank::Queen, Suit::Hearts).penalty_value(), 1);
    }

    #[test]
    fn rank_comparison_ignores_suit() {
        let low = Card::new(Rank::Three, Suit::Spades);
        let high = Card::new(Rank::King, Suit::Clubs);
        assert_eq!(low.cmp_rank(&high), Ordering::Less);
        assert_eq!(
            Card::new(Rank::Nine, Suit::Hearts).cmp_rank(&Card::new(Rank::Nine, Suit::Clubs)),
            Ordering::Equal
        );
        assert_ne!(
            Card::new(Rank::Nine, Suit::Hearts),
            Card::new(Rank::Nine, Suit::Clubs)
        );
    }

    #[test]
    fn rank_value_spans_zero_to_twelve() {
        assert_eq!(Card::TWO_OF_CLUBS.rank_value(), 0);
        assert_eq!(Card::new(Rank::Ace, Suit::Diamonds).rank_value(), 12);
    }

    #[test]
    fn only_higher_lead_suit_cards_beat() {
        let best = Card::new(Rank::Ten, Suit::Diamonds);
        assert!(Card::new(Rank::Jack, Suit::Diamonds).beats(best, Suit::Diamonds));
        assert!(!Card::new(Rank::Nine, Suit::Diamonds).beats(best, Suit::Diamonds));
        assert!(!Card::new(Rank::Ace, Suit::Spades).beats(best, Suit::Diamonds));
    }

    #[test]
    fn parses_compact_notation() {
        assert_eq!("QS".parse::<Card>().unwrap(), Card::QUEEN_OF_SPADES);
        assert_eq!("2♣".parse::<Card>().unwrap(), Card::TWO_OF_CLUBS);
        assert_eq!(
            "10h".parse::<Card>().unwrap(),
            Card::new(Rank::Ten, Suit::Hearts)
        );
        assert!("".parse::<Card>().is_err());
        assert!("1H".parse::<Card>().is_err());
        assert!("QX".parse::<Card>().is_err());
    }
}
