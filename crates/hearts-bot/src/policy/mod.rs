mod heuristic;
mod random;

pub use heuristic::{HeuristicPolicy, choose_heuristic, non_winning_cards};
pub use random::RandomPolicy;

use hearts_core::model::card::Card;
use hearts_core::model::hand::Hand;
use hearts_core::model::player::{Player, PlayerPosition};
use hearts_core::model::round::RoundState;

/// Context provided to policies for decision-making
pub struct PolicyContext<'a> {
    pub seat: PlayerPosition,
    pub player: &'a Player,
    pub hand: &'a Hand,
    pub round: &'a RoundState,
}

impl<'a> PolicyContext<'a> {
    pub fn new(player: &'a Player, round: &'a RoundState) -> Self {
        Self {
            seat: player.seat,
            player,
            hand: round.hand(player.seat),
            round,
        }
    }

    /// Cards already on the table this trick, in play order.
    pub fn played(&self) -> Vec<Card> {
        self.round.current_trick().cards()
    }

    pub fn legal_cards(&self) -> Vec<Card> {
        self.round.legal_cards(self.seat)
    }
}

/// Chooses the card a seat plays. Implementations must return a card from
/// [`PolicyContext::legal_cards`]; the table rejects anything else.
///
/// `None` means the policy found nothing to play, which only happens when
/// there is no legal card. The table reports it instead of guessing.
pub trait Policy {
    fn choose_play(&mut self, ctx: &PolicyContext) -> Option<Card>;
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn choose_play(&mut self, ctx: &PolicyContext) -> Option<Card> {
        (**self).choose_play(ctx)
    }
}
