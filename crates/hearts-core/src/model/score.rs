use crate::model::player::PlayerPosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBoard {
    totals: [u32; 4],
}

impl ScoreBoard {
    pub const fn new() -> Self {
        Self { totals: [0; 4] }
    }

    pub fn add_penalty(&mut self, seat: PlayerPosition, points: u32) {
        self.totals[seat.index()] += points;
    }

    pub fn set_totals(&mut self, totals: [u32; 4]) {
        self.totals = totals;
    }

    pub fn score(&self, seat: PlayerPosition) -> u32 {
        self.totals[seat.index()]
    }

    pub fn standings(&self) -> &[u32; 4] {
        &self.totals
    }

    /// Adds one round's captured penalties to the running totals.
    pub fn apply_round(&mut self, penalties: [u8; 4]) {
        for seat in PlayerPosition::LOOP.iter().copied() {
            self.add_penalty(seat, u32::from(penalties[seat.index()]));
        }
    }

    /// True once any seat is strictly above `limit`.
    pub fn exceeds(&self, limit: u32) -> bool {
        self.totals.iter().any(|&total| total > limit)
    }

    /// Every seat sharing the lowest total, in seat order.
    pub fn leaders(&self) -> Vec<PlayerPosition> {
        let lowest = self.totals.iter().copied().min().unwrap_or(0);
        PlayerPosition::LOOP
            .iter()
            .copied()
            .filter(|seat| self.score(*seat) == lowest)
            .collect()
    }

    /// Seats ordered from highest total to lowest; ties keep seat order.
    pub fn ranked_desc(&self) -> [PlayerPosition; 4] {
        let mut seats = PlayerPosition::LOOP;
        seats.sort_by(|a, b| self.score(*b).cmp(&self.score(*a)));
        seats
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}
