use super::{Policy, PolicyContext};
use hearts_core::model::card::Card;
use std::cmp::Reverse;
use tracing::{Level, event};

/// Greedy bot: dump the most expensive card that cannot take the trick,
/// otherwise play as cheaply as possible.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicPolicy;

impl HeuristicPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Policy for HeuristicPolicy {
    fn choose_play(&mut self, ctx: &PolicyContext) -> Option<Card> {
        let legal = ctx.legal_cards();
        let (chosen, reason) = choose_heuristic(&legal, &ctx.played())?;
        log_play_decision(ctx, &legal, chosen, reason);
        Some(chosen)
    }
}

/// Legal cards that cannot win the trick given what has been played.
/// Empty when nothing has been played yet: a leader always holds the lead.
pub fn non_winning_cards(played: &[Card], legal: &[Card]) -> Vec<Card> {
    let Some(lead) = played.first().map(|card| card.suit) else {
        return Vec::new();
    };
    let best = played
        .iter()
        .copied()
        .filter(|card| card.suit == lead)
        .max_by(|a, b| a.cmp_rank(b));
    let Some(best) = best else {
        return Vec::new();
    };
    legal
        .iter()
        .copied()
        .filter(|card| !card.beats(best, lead))
        .collect()
}

/// Picks a card from `legal` and names the rule that decided it.
///
/// Ties between equally ranked cards go to the one listed first.
pub fn choose_heuristic(legal: &[Card], played: &[Card]) -> Option<(Card, &'static str)> {
    let safe = non_winning_cards(played, legal);
    if !safe.is_empty() {
        return safe
            .iter()
            .rev()
            .copied()
            .max_by_key(|card| (card.penalty_value(), card.rank_value()))
            .map(|card| (card, "dump_non_winning"));
    }

    if played.len() < 3 {
        return legal
            .iter()
            .copied()
            .min_by_key(|card| (card.penalty_value(), card.rank_value()))
            .map(|card| (card, "lowest_risk"));
    }

    legal
        .iter()
        .rev()
        .copied()
        .max_by_key(|card| (Reverse(card.penalty_value()), card.rank_value()))
        .map(|card| (card, "forced_win_highest"))
}

fn log_play_decision(ctx: &PolicyContext, legal_moves: &[Card], chosen: Card, reason: &str) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }

    let legal_preview = legal_moves
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(",");

    event!(
        target: "hearts_bot::play",
        Level::DEBUG,
        seat = %ctx.seat,
        player = %ctx.player.name,
        legal_count = legal_moves.len(),
        legal_moves = %legal_preview,
        chosen = %chosen,
        hearts_broken = ctx.round.hearts_broken(),
        trick_cards = ctx.round.current_trick().plays().len(),
        reason,
    );
}
