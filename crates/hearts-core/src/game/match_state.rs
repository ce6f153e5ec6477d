use crate::model::deck::{DealError, Deck};
use crate::model::player::{Player, PlayerPosition};
use crate::model::round::RoundState;
use crate::model::score::ScoreBoard;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A match ends once any cumulative score is strictly above this.
pub const DEFAULT_SCORE_LIMIT: u32 = 100;

#[derive(Debug, Clone)]
pub struct MatchState {
    players: [Player; 4],
    scores: ScoreBoard,
    round_number: u32,
    round_history: Vec<[u8; 4]>,
    current_round: RoundState,
    score_limit: u32,
    rng: StdRng,
    seed: u64,
}

impl MatchState {
    pub fn with_seed(names: [String; 4], seed: u64) -> Result<Self, DealError> {
        Self::with_seed_and_limit(names, seed, DEFAULT_SCORE_LIMIT)
    }

    pub fn with_seed_and_limit(
        names: [String; 4],
        seed: u64,
        score_limit: u32,
    ) -> Result<Self, DealError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        let current_round = RoundState::deal(&deck)?;

        Ok(Self {
            players: Player::seat_all(names),
            scores: ScoreBoard::new(),
            round_number: 1,
            round_history: Vec::new(),
            current_round,
            score_limit,
            rng,
            seed,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn score_limit(&self) -> u32 {
        self.score_limit
    }

    pub fn players(&self) -> &[Player; 4] {
        &self.players
    }

    pub fn player(&self, seat: PlayerPosition) -> &Player {
        &self.players[seat.index()]
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn scores_mut(&mut self) -> &mut ScoreBoard {
        &mut self.scores
    }

    pub fn round(&self) -> &RoundState {
        &self.current_round
    }

    pub fn round_mut(&mut self) -> &mut RoundState {
        &mut self.current_round
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Per-round penalties of every finished round, oldest first.
    pub fn round_history(&self) -> &[[u8; 4]] {
        &self.round_history
    }

    pub fn is_round_ready_for_scoring(&self) -> bool {
        self.current_round.is_complete()
    }

    pub fn is_over(&self) -> bool {
        self.scores.exceeds(self.score_limit)
    }

    /// Seats tied for the lowest total. Only meaningful once [`Self::is_over`].
    pub fn winners(&self) -> Vec<PlayerPosition> {
        self.scores.leaders()
    }

    /// Folds the finished round into the scoreboard and, unless the match is
    /// now over, deals the next round from the match RNG. Returns the round's
    /// penalties.
    pub fn finish_round(&mut self) -> Result<[u8; 4], DealError> {
        let penalties = self.current_round.penalty_totals();
        self.scores.apply_round(penalties);
        self.round_history.push(penalties);

        if !self.is_over() {
            let deck = Deck::shuffled(&mut self.rng);
            self.current_round = RoundState::deal(&deck)?;
            self.round_number += 1;
        }
        Ok(penalties)
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_SCORE_LIMIT, MatchState};
    use crate::model::card::Card;
    use crate::model::player::PlayerPosition;

    fn names() -> [String; 4] {
        ["Ann", "Bob", "Cid", "Dee"].map(String::from)
    }

    fn play_round(state: &mut MatchState) {
        let round = state.round_mut();
        while let Some(seat) = round.expected_seat() {
            let card = round.legal_cards(seat)[0];
            round.play_card(seat, card).unwrap();
        }
    }

    #[test]
    fn new_match_starts_at_round_one() {
        let state = MatchState::with_seed(names(), 0).unwrap();
        assert_eq!(state.round_number(), 1);
        assert_eq!(state.score_limit(), DEFAULT_SCORE_LIMIT);
        assert_eq!(state.player(PlayerPosition::South).name, "Cid");
        assert!(!state.is_over());
    }

    #[test]
    fn match_seed_is_exposed() {
        let state = MatchState::with_seed(names(), 1234).unwrap();
        assert_eq!(state.seed(), 1234);
    }

    #[test]
    fn same_seed_deals_identical_hands() {
        let a = MatchState::with_seed(names(), 77).unwrap();
        let b = MatchState::with_seed(names(), 77).unwrap();
        for seat in PlayerPosition::LOOP {
            assert_eq!(a.round().hand(seat), b.round().hand(seat));
        }
    }

    #[test]
    fn finishing_round_adds_twenty_six_points() {
        let mut state = MatchState::with_seed(names(), 3).unwrap();
        play_round(&mut state);
        assert!(state.is_round_ready_for_scoring());
        let penalties = state.finish_round().unwrap();

        let total: u32 = state.scores().standings().iter().sum();
        assert_eq!(total, 26);
        assert_eq!(state.round_history(), &[penalties]);
        assert_eq!(state.round_number(), 2);
        assert!(!state.round().hearts_broken());
        assert_eq!(state.round().tricks_completed(), 0);
    }

    #[test]
    fn next_round_leader_follows_two_of_clubs() {
        let mut state = MatchState::with_seed(names(), 42).unwrap();
        play_round(&mut state);
        state.finish_round().unwrap();

        let round = state.round();
        let expected = PlayerPosition::LOOP
            .iter()
            .copied()
            .find(|seat| round.hand(*seat).contains(Card::TWO_OF_CLUBS))
            .expect("two of clubs is dealt");

        assert_eq!(round.starting_player(), expected);
        assert_eq!(round.current_trick().leader(), expected);
    }

    #[test]
    fn crossing_the_limit_ends_the_match_with_lowest_winner() {
        let mut state = MatchState::with_seed(names(), 9).unwrap();
        state.scores_mut().set_totals([101, 80, 90, 95]);
        assert!(state.is_over());
        assert_eq!(state.winners(), vec![PlayerPosition::East]);
    }

    #[test]
    fn reaching_exactly_the_limit_is_not_over() {
        let mut state = MatchState::with_seed(names(), 9).unwrap();
        state.scores_mut().set_totals([100, 80, 90, 95]);
        assert!(!state.is_over());
    }

    #[test]
    fn finished_match_keeps_last_round() {
        let mut state = MatchState::with_seed_and_limit(names(), 11, 0).unwrap();
        play_round(&mut state);
        state.finish_round().unwrap();
        assert!(state.is_over());
        assert_eq!(state.round_number(), 1);
        assert!(state.round().is_complete());
    }
}
