use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use thiserror::Error;

pub const DECK_SIZE: usize = 52;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("cannot deal into zero hands")]
    NoHands,
    #[error("a full deck of 52 unique cards is required, found {found}")]
    IncompleteDeck { found: usize },
}

/// Ordered pile of cards. Order is meaningful: dealing follows it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL.iter().copied() {
            for rank in Rank::ORDERED.iter().copied() {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_in_place(rng);
        deck
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn shuffle_in_place<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Splits the deck round-robin: card `i` goes to pile `i % num_hands`.
    /// Relative order inside each pile follows the deck order.
    pub fn deal(&self, num_hands: usize) -> Result<Vec<Deck>, DealError> {
        if num_hands == 0 {
            return Err(DealError::NoHands);
        }
        let mut piles = vec![Deck::default(); num_hands];
        for (index, card) in self.cards.iter().enumerate() {
            piles[index % num_hands].cards.push(*card);
        }
        Ok(piles)
    }

    /// Checks the deck holds each of the 52 cards exactly once.
    pub fn ensure_complete(&self) -> Result<(), DealError> {
        let mut seen = [false; DECK_SIZE];
        for card in &self.cards {
            let slot = card.suit as usize * 13 + card.rank_value() as usize;
            if seen[slot] {
                return Err(DealError::IncompleteDeck {
                    found: self.cards.len(),
                });
            }
            seen[slot] = true;
        }
        if self.cards.len() != DECK_SIZE {
            return Err(DealError::IncompleteDeck {
                found: self.cards.len(),
            });
        }
        Ok(())
    }

    pub fn remove(&mut self, card: Card) -> bool {
        if let Some(index) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{DealError, Deck};
    use crate::model::card::Card;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_unique_cards() {
        let deck = Deck::standard();
        assert_eq!(deck.cards().len(), 52);
        let unique: HashSet<_> = deck.cards().iter().collect();
        assert_eq!(unique.len(), 52);
        assert!(deck.ensure_complete().is_ok());
    }

    #[test]
    fn shuffle_with_seed_is_deterministic() {
        let deck_a = Deck::shuffled_with_seed(42);
        let deck_b = Deck::shuffled_with_seed(42);
        assert_eq!(deck_a.cards(), deck_b.cards());
    }

    #[test]
    fn shuffle_with_different_seeds_differs() {
        let deck_a = Deck::shuffled_with_seed(1);
        let deck_b = Deck::shuffled_with_seed(2);
        assert_ne!(deck_a.cards(), deck_b.cards());
    }

    #[test]
    fn deal_is_round_robin_in_deck_order() {
        let deck = Deck::shuffled_with_seed(7);
        let piles = deck.deal(4).unwrap();
        assert_eq!(piles.len(), 4);
        for (seat, pile) in piles.iter().enumerate() {
            assert_eq!(pile.len(), 13);
            let expected: Vec<Card> = deck.cards().iter().skip(seat).step_by(4).copied().collect();
            assert_eq!(pile.cards(), expected.as_slice());
        }
    }

    #[test]
    fn deal_piles_are_disjoint_and_cover_the_deck() {
        for seed in 0..20 {
            let deck = Deck::shuffled_with_seed(seed);
            let piles = deck.deal(4).unwrap();
            let mut seen = HashSet::new();
            for pile in &piles {
                for card in pile.cards() {
                    assert!(seen.insert(*card), "{card} dealt twice with seed {seed}");
                }
            }
            assert_eq!(seen.len(), 52);
        }
    }

    #[test]
    fn uneven_deal_front_loads_extra_cards() {
        let piles = Deck::standard().deal(5).unwrap();
        let sizes: Vec<_> = piles.iter().map(Deck::len).collect();
        assert_eq!(sizes, [11, 11, 10, 10, 10]);
    }

    #[test]
    fn dealing_into_zero_hands_is_rejected() {
        assert_eq!(Deck::standard().deal(0), Err(DealError::NoHands));
    }

    #[test]
    fn duplicate_or_missing_cards_fail_completeness() {
        let mut short = Deck::standard();
        assert!(short.remove(Card::TWO_OF_CLUBS));
        assert_eq!(
            short.ensure_complete(),
            Err(DealError::IncompleteDeck { found: 51 })
        );
        short.add_cards([Card::QUEEN_OF_SPADES]);
        assert!(short.ensure_complete().is_err());
    }
}
