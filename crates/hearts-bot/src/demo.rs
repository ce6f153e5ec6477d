//! Rule-free dealing demo: four players each throw a random card per turn
//! until their hands run out.

use hearts_core::model::card::Card;
use hearts_core::model::deck::{DealError, Deck};
use hearts_core::model::player::{Player, PlayerPosition};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{Level, event};

pub const DEFAULT_DEMO_NAMES: [&str; 4] = ["P1", "P2", "P3", "P4"];

pub struct DealDemo {
    players: [Player; 4],
    hands: [Deck; 4],
    start: PlayerPosition,
}

/// One pass around the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoTurn {
    pub plays: Vec<(PlayerPosition, Card)>,
}

impl DealDemo {
    /// Seats up to four `names`, topped up from `P1`..`P4` in order, deals a
    /// shuffled deck and picks a random first player.
    pub fn new<R: Rng + ?Sized>(names: &[String], rng: &mut R) -> Result<Self, DealError> {
        let mut pool = names
            .iter()
            .cloned()
            .chain(DEFAULT_DEMO_NAMES.iter().map(|name| name.to_string()));
        let seated: [String; 4] = std::array::from_fn(|_| pool.next().unwrap_or_default());
        let deck = Deck::shuffled(rng);
        let mut piles = deck.deal(4)?.into_iter();
        let hands = std::array::from_fn(|_| piles.next().unwrap_or_default());
        let start = PlayerPosition::LOOP
            .choose(rng)
            .copied()
            .unwrap_or(PlayerPosition::North);

        Ok(Self {
            players: Player::seat_all(seated),
            hands,
            start,
        })
    }

    pub fn players(&self) -> &[Player; 4] {
        &self.players
    }

    pub fn hand(&self, seat: PlayerPosition) -> &Deck {
        &self.hands[seat.index()]
    }

    pub fn start(&self) -> PlayerPosition {
        self.start
    }

    /// Plays one turn: every player in rotation from the start seat throws a
    /// random card. Returns `None` once the start player's hand is empty.
    pub fn play_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<DemoTurn> {
        if self.hands[self.start.index()].is_empty() {
            return None;
        }

        let mut plays = Vec::with_capacity(4);
        for seat in self.start.rotation() {
            let hand = &mut self.hands[seat.index()];
            let Some(card) = hand.cards().choose(rng).copied() else {
                continue;
            };
            hand.remove(card);
            event!(
                target: "hearts_bot::demo",
                Level::DEBUG,
                player = %self.players[seat.index()].name,
                card = %card,
                remaining = hand.len()
            );
            plays.push((seat, card));
        }
        Some(DemoTurn { plays })
    }

    /// Plays every remaining turn.
    pub fn play_all<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<DemoTurn> {
        std::iter::from_fn(|| self.play_turn(&mut *rng)).collect()
    }
}
