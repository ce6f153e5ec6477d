//! Bot names and table seating.

use hearts_core::model::player::PlayerPosition;
use rand::Rng;
use rand::seq::SliceRandom;

pub const BOT_NAMES: [&str; 7] = [
    "Onion", "Barbara", "Busia", "Pusia", "Romana", "Oksi", "Stafania",
];

/// Seat the first human-supplied name takes at an interactive table.
pub const HUMAN_SEAT: PlayerPosition = PlayerPosition::South;

/// Names for the four seats plus which seat, if any, a person controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seating {
    pub names: [String; 4],
    pub human: Option<PlayerPosition>,
}

impl Seating {
    /// Fills the table from `given` names first, then from the shuffled bot
    /// roster. Extra names past four are dropped.
    ///
    /// With `with_human`, the first given name sits at [`HUMAN_SEAT`] and the
    /// rest fill the other seats clockwise from North.
    pub fn arrange<R: Rng + ?Sized>(given: &[String], with_human: bool, rng: &mut R) -> Self {
        let mut pool: Vec<String> = given
            .iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        let human = (with_human && !pool.is_empty()).then_some(HUMAN_SEAT);
        pool.extend(shuffled_bot_names(rng));
        pool.truncate(4);

        let mut order: Vec<PlayerPosition> = PlayerPosition::LOOP.to_vec();
        if let Some(seat) = human {
            order.retain(|s| *s != seat);
            order.insert(0, seat);
        }

        let mut names: [String; 4] = Default::default();
        for (seat, name) in order.into_iter().zip(pool) {
            names[seat.index()] = name;
        }
        Self { names, human }
    }
}

pub fn shuffled_bot_names<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let mut names: Vec<String> = BOT_NAMES.iter().map(|name| name.to_string()).collect();
    names.shuffle(rng);
    names
}
