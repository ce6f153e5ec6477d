use super::match_state::MatchState;
use crate::model::player::PlayerPosition;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatScore {
    pub seat: PlayerPosition,
    pub name: String,
    pub score: u32,
}

/// Final standings of a match, suitable for machine-readable output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchSummary {
    pub seed: u64,
    pub rounds: u32,
    pub score_limit: u32,
    pub scores: Vec<SeatScore>,
    pub round_history: Vec<[u8; 4]>,
    pub winners: Vec<String>,
}

impl MatchSummary {
    pub fn capture(state: &MatchState) -> Self {
        let scores = state
            .players()
            .iter()
            .map(|player| SeatScore {
                seat: player.seat,
                name: player.name.clone(),
                score: state.scores().score(player.seat),
            })
            .collect();
        let winners = state
            .winners()
            .into_iter()
            .map(|seat| state.player(seat).name.clone())
            .collect();

        MatchSummary {
            seed: state.seed(),
            rounds: state.round_history().len() as u32,
            score_limit: state.score_limit(),
            scores,
            round_history: state.round_history().to_vec(),
            winners,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
