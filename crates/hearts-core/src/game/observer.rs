//! Output seam between the rule engine and whatever presents the game.
//!
//! Drivers call these hooks as play unfolds; every method defaults to a no-op
//! so renderers only implement what they show.

use crate::model::card::Card;
use crate::model::player::{Player, PlayerPosition};
use crate::model::score::ScoreBoard;

pub trait GameObserver {
    fn round_started(&mut self, _round_number: u32) {}

    fn card_played(&mut self, _player: &Player, _card: Card) {}

    fn trick_won(&mut self, _player: &Player, _penalties: u8) {}

    fn round_finished(&mut self, _players: &[Player; 4], _round: [u8; 4], _totals: &ScoreBoard) {}

    fn match_finished(&mut self, _players: &[Player; 4], _winners: &[PlayerPosition]) {}
}

/// Observer that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

impl<T: GameObserver + ?Sized> GameObserver for &mut T {
    fn round_started(&mut self, round_number: u32) {
        (**self).round_started(round_number);
    }

    fn card_played(&mut self, player: &Player, card: Card) {
        (**self).card_played(player, card);
    }

    fn trick_won(&mut self, player: &Player, penalties: u8) {
        (**self).trick_won(player, penalties);
    }

    fn round_finished(&mut self, players: &[Player; 4], round: [u8; 4], totals: &ScoreBoard) {
        (**self).round_finished(players, round, totals);
    }

    fn match_finished(&mut self, players: &[Player; 4], winners: &[PlayerPosition]) {
        (**self).match_finished(players, winners);
    }
}
