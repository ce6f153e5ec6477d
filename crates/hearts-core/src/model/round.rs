use crate::model::card::Card;
use crate::model::deck::{DealError, Deck};
use crate::model::hand::Hand;
use crate::model::player::PlayerPosition;
use crate::model::rules::{self, Restriction};
use crate::model::suit::Suit;
use crate::model::trick::{Trick, TrickError};
use thiserror::Error;

pub const TRICKS_PER_ROUND: usize = 13;

/// Total penalty points in a deck: thirteen hearts plus the queen of spades.
pub const ROUND_PENALTY_TOTAL: u32 = 26;

#[derive(Debug, Clone)]
pub struct RoundState {
    hands: [Hand; 4],
    current_trick: Trick,
    trick_history: Vec<Trick>,
    starting_player: PlayerPosition,
    hearts_broken: bool,
}

impl RoundState {
    /// Deals `deck` round-robin starting at North. The holder of the two of
    /// clubs leads the first trick.
    pub fn deal(deck: &Deck) -> Result<Self, DealError> {
        deck.ensure_complete()?;
        let mut piles = deck.deal(4)?.into_iter();
        let hands = std::array::from_fn(|_| {
            piles
                .next()
                .map(|pile| Hand::with_cards(pile.into_cards()))
                .unwrap_or_default()
        });
        let starting_player = holder_of(&hands, Card::TWO_OF_CLUBS)
            .ok_or(DealError::IncompleteDeck { found: deck.len() })?;
        Ok(Self::from_hands(hands, starting_player))
    }

    /// Builds a round from explicit hands. `leader` is overridden by the
    /// holder of the two of clubs when one exists.
    pub fn from_hands(hands: [Hand; 4], leader: PlayerPosition) -> Self {
        let starting_player = holder_of(&hands, Card::TWO_OF_CLUBS).unwrap_or(leader);
        Self {
            hands,
            current_trick: Trick::new(starting_player),
            trick_history: Vec::with_capacity(TRICKS_PER_ROUND),
            starting_player,
            hearts_broken: false,
        }
    }

    pub fn hand(&self, seat: PlayerPosition) -> &Hand {
        &self.hands[seat.index()]
    }

    pub fn current_trick(&self) -> &Trick {
        &self.current_trick
    }

    pub fn trick_history(&self) -> &[Trick] {
        &self.trick_history
    }

    pub fn starting_player(&self) -> PlayerPosition {
        self.starting_player
    }

    pub fn tricks_completed(&self) -> usize {
        self.trick_history.len()
    }

    pub fn hearts_broken(&self) -> bool {
        self.hearts_broken
    }

    /// True once every hand is empty and the last trick has been collected.
    pub fn is_complete(&self) -> bool {
        self.current_trick.is_empty() && self.hands.iter().all(Hand::is_empty)
    }

    /// Seat whose turn it is, or `None` when the round is over.
    pub fn expected_seat(&self) -> Option<PlayerPosition> {
        if self.is_complete() {
            None
        } else {
            Some(self.current_trick.expected_position())
        }
    }

    pub fn legal_cards(&self, seat: PlayerPosition) -> Vec<Card> {
        rules::legal_cards(
            self.hands[seat.index()].cards(),
            &self.current_trick.cards(),
            self.hearts_broken,
        )
    }

    /// Cards `seat` has taken in completed tricks.
    pub fn captured(&self, seat: PlayerPosition) -> Vec<Card> {
        self.trick_history
            .iter()
            .filter(|trick| trick.winner() == Some(seat))
            .flat_map(Trick::cards)
            .collect()
    }

    pub fn penalty_totals(&self) -> [u8; 4] {
        let mut totals = [0u8; 4];
        for trick in &self.trick_history {
            if let Some(winner) = trick.winner() {
                let idx = winner.index();
                totals[idx] = totals[idx].saturating_add(trick.penalty_total());
            }
        }
        totals
    }

    pub fn play_card(
        &mut self,
        seat: PlayerPosition,
        card: Card,
    ) -> Result<PlayOutcome, PlayError> {
        let expected = self.expected_seat().ok_or(PlayError::RoundComplete)?;

        if !self.hands[seat.index()].contains(card) {
            return Err(PlayError::CardNotInHand(card));
        }

        if expected != seat {
            return Err(PlayError::OutOfTurn {
                expected,
                actual: seat,
            });
        }

        let restriction = rules::restriction_for(
            self.hands[seat.index()].cards(),
            &self.current_trick.cards(),
            self.hearts_broken,
            card,
        );
        match restriction {
            Some(Restriction::TwoOfClubs) => return Err(PlayError::MustPlayTwoOfClubs),
            Some(Restriction::FollowSuit(suit)) => return Err(PlayError::MustFollowSuit(suit)),
            Some(Restriction::HeartsNotBroken) => return Err(PlayError::HeartsNotBroken),
            None => {}
        }

        self.current_trick.play(seat, card)?;
        self.hands[seat.index()].remove(card);
        if card.suit.is_heart() {
            self.hearts_broken = true;
        }

        if !self.current_trick.is_complete() {
            return Ok(PlayOutcome::Played);
        }

        let winner = self
            .current_trick
            .winner()
            .ok_or(PlayError::Trick(TrickError::TrickComplete))?;
        let penalties = self.current_trick.penalty_total();
        let finished = std::mem::replace(&mut self.current_trick, Trick::new(winner));
        self.trick_history.push(finished);
        Ok(PlayOutcome::TrickCompleted { winner, penalties })
    }
}

fn holder_of(hands: &[Hand; 4], card: Card) -> Option<PlayerPosition> {
    hands
        .iter()
        .position(|hand| hand.contains(card))
        .and_then(PlayerPosition::from_index)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Played,
    TrickCompleted { winner: PlayerPosition, penalties: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("the round is already complete")]
    RoundComplete,
    #[error("{0} is not in hand")]
    CardNotInHand(Card),
    #[error("expected {expected} to play but got {actual}")]
    OutOfTurn {
        expected: PlayerPosition,
        actual: PlayerPosition,
    },
    #[error("the two of clubs must be played first")]
    MustPlayTwoOfClubs,
    #[error("must follow suit {0}")]
    MustFollowSuit(Suit),
    #[error("hearts have not been broken")]
    HeartsNotBroken,
    #[error(transparent)]
    Trick(#[from] TrickError),
}
