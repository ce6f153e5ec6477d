use crate::policy::{Policy, PolicyContext};
use hearts_core::game::match_state::MatchState;
use hearts_core::game::observer::GameObserver;
use hearts_core::game::summary::MatchSummary;
use hearts_core::model::card::Card;
use hearts_core::model::deck::DealError;
use hearts_core::model::player::PlayerPosition;
use hearts_core::model::round::{PlayError, PlayOutcome};
use thiserror::Error;
use tracing::{Level, event};

#[derive(Debug, Error)]
pub enum TableError {
    #[error("{seat} attempted illegal play {card}: {source}")]
    IllegalPlay {
        seat: PlayerPosition,
        card: Card,
        #[source]
        source: PlayError,
    },
    #[error("{seat} had no card to play")]
    NoPlay { seat: PlayerPosition },
    #[error("dealing failed: {0}")]
    Deal(#[from] DealError),
}

/// Drives a [`MatchState`] with one policy per seat, reporting every step to
/// an observer.
pub struct Table<O: GameObserver> {
    seats: [Box<dyn Policy>; 4],
    observer: O,
}

impl<O: GameObserver> Table<O> {
    /// `seats` is indexed by [`PlayerPosition::index`].
    pub fn new(seats: [Box<dyn Policy>; 4], observer: O) -> Self {
        Self { seats, observer }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Plays the current round to completion and scores it.
    pub fn play_round(&mut self, state: &mut MatchState) -> Result<[u8; 4], TableError> {
        let round_number = state.round_number();
        self.observer.round_started(round_number);
        event!(
            target: "hearts_bot::table",
            Level::INFO,
            round = round_number,
            leader = %state.round().starting_player(),
            "round started"
        );

        while let Some(seat) = state.round().expected_seat() {
            let chosen = {
                let ctx = PolicyContext::new(state.player(seat), state.round());
                self.seats[seat.index()].choose_play(&ctx)
            };
            let card = chosen.ok_or(TableError::NoPlay { seat })?;

            let outcome = state
                .round_mut()
                .play_card(seat, card)
                .map_err(|source| TableError::IllegalPlay { seat, card, source })?;
            self.observer.card_played(state.player(seat), card);

            if let PlayOutcome::TrickCompleted { winner, penalties } = outcome {
                event!(
                    target: "hearts_bot::table",
                    Level::DEBUG,
                    round = round_number,
                    trick = state.round().tricks_completed(),
                    winner = %winner,
                    penalties,
                    hearts_broken = state.round().hearts_broken(),
                    "trick resolved"
                );
                self.observer.trick_won(state.player(winner), penalties);
            }
        }

        let penalties = state.finish_round()?;
        event!(
            target: "hearts_bot::table",
            Level::INFO,
            round = round_number,
            penalties = ?penalties,
            totals = ?state.scores().standings(),
            "round scored"
        );
        self.observer
            .round_finished(state.players(), penalties, state.scores());
        Ok(penalties)
    }

    /// Plays rounds until a score passes the match limit.
    pub fn play_match(&mut self, state: &mut MatchState) -> Result<MatchSummary, TableError> {
        while !state.is_over() {
            self.play_round(state)?;
        }

        let winners = state.winners();
        event!(
            target: "hearts_bot::table",
            Level::INFO,
            rounds = state.round_history().len(),
            winners = ?winners,
            "match finished"
        );
        self.observer.match_finished(state.players(), &winners);
        Ok(MatchSummary::capture(state))
    }
}
