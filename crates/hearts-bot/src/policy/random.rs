use super::{Policy, PolicyContext};
use hearts_core::model::card::Card;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Plays a uniformly random legal card. Useful as a baseline opponent.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn choose_play(&mut self, ctx: &PolicyContext) -> Option<Card> {
        ctx.legal_cards().choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::RandomPolicy;
    use crate::policy::{Policy, PolicyContext};
    use hearts_core::model::card::Card;
    use hearts_core::model::deck::Deck;
    use hearts_core::model::hand::Hand;
    use hearts_core::model::player::{Player, PlayerPosition};
    use hearts_core::model::round::RoundState;

    #[test]
    fn random_choices_are_always_legal() {
        let mut policy = RandomPolicy::with_seed(3);
        for seed in 0..10 {
            let mut round = RoundState::deal(&Deck::shuffled_with_seed(seed)).unwrap();
            while let Some(seat) = round.expected_seat() {
                let player = Player::new(seat, "bot");
                let card = {
                    let ctx = PolicyContext::new(&player, &round);
                    let card = policy.choose_play(&ctx).unwrap();
                    assert!(ctx.legal_cards().contains(&card));
                    card
                };
                round.play_card(seat, card).unwrap();
            }
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let round = RoundState::deal(&Deck::shuffled_with_seed(1)).unwrap();
        let seat = round.expected_seat().unwrap();
        let player = Player::new(seat, "bot");
        let ctx = PolicyContext::new(&player, &round);
        let a = RandomPolicy::with_seed(8).choose_play(&ctx);
        let b = RandomPolicy::with_seed(8).choose_play(&ctx);
        assert_eq!(a, b);
    }

    #[test]
    fn finished_round_leaves_nothing_to_choose() {
        let mut round = RoundState::from_hands(
            ["2C", "3C", "4C", "5C"].map(|c| Hand::with_cards(vec![c.parse::<Card>().unwrap()])),
            PlayerPosition::North,
        );
        while let Some(seat) = round.expected_seat() {
            round.play_card(seat, round.legal_cards(seat)[0]).unwrap();
        }
        assert!(round.is_complete());
        let player = Player::new(PlayerPosition::North, "bot");
        let ctx = PolicyContext::new(&player, &round);
        assert_eq!(RandomPolicy::with_seed(1).choose_play(&ctx), None);
    }
}
