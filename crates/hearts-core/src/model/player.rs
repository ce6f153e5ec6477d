use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PlayerPosition {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl PlayerPosition {
    pub const LOOP: [PlayerPosition; 4] = [
        PlayerPosition::North,
        PlayerPosition::East,
        PlayerPosition::South,
        PlayerPosition::West,
    ];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PlayerPosition::North),
            1 => Some(PlayerPosition::East),
            2 => Some(PlayerPosition::South),
            3 => Some(PlayerPosition::West),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn next(self) -> PlayerPosition {
        match self {
            PlayerPosition::North => PlayerPosition::East,
            PlayerPosition::East => PlayerPosition::South,
            PlayerPosition::South => PlayerPosition::West,
            PlayerPosition::West => PlayerPosition::North,
        }
    }

    pub const fn previous(self) -> PlayerPosition {
        match self {
            PlayerPosition::North => PlayerPosition::West,
            PlayerPosition::East => PlayerPosition::North,
            PlayerPosition::South => PlayerPosition::East,
            PlayerPosition::West => PlayerPosition::South,
        }
    }

    /// Turn order for a trick led by `self`.
    pub const fn rotation(self) -> [PlayerPosition; 4] {
        let second = self.next();
        let third = second.next();
        [self, second, third, third.next()]
    }
}

impl fmt::Display for PlayerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlayerPosition::North => "North",
            PlayerPosition::East => "East",
            PlayerPosition::South => "South",
            PlayerPosition::West => "West",
        };
        f.write_str(label)
    }
}

/// A named participant bound to a seat. Cards live in the round's hands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub seat: PlayerPosition,
    pub name: String,
}

impl Player {
    pub fn new(seat: PlayerPosition, name: impl Into<String>) -> Self {
        Self {
            seat,
            name: name.into(),
        }
    }

    /// Seats `names` clockwise from North.
    pub fn seat_all(names: [String; 4]) -> [Player; 4] {
        let [north, east, south, west] = names;
        [
            Player::new(PlayerPosition::North, north),
            Player::new(PlayerPosition::East, east),
            Player::new(PlayerPosition::South, south),
            Player::new(PlayerPosition::West, west),
        ]
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::{Player, PlayerPosition};

    #[test]
    fn next_wraps_around() {
        assert_eq!(PlayerPosition::West.next(), PlayerPosition::North);
    }

    #[test]
    fn previous_wraps_around() {
        assert_eq!(PlayerPosition::North.previous(), PlayerPosition::West);
    }

    #[test]
    fn index_roundtrip() {
        for (i, seat) in PlayerPosition::LOOP.iter().enumerate() {
            assert_eq!(PlayerPosition::from_index(i), Some(*seat));
            assert_eq!(seat.index(), i);
        }
    }

    #[test]
    fn rotation_starts_at_leader() {
        assert_eq!(
            PlayerPosition::South.rotation(),
            [
                PlayerPosition::South,
                PlayerPosition::West,
                PlayerPosition::North,
                PlayerPosition::East,
            ]
        );
    }

    #[test]
    fn seat_all_assigns_clockwise() {
        let players = Player::seat_all(["a", "b", "c", "d"].map(String::from));
        assert_eq!(players[2].seat, PlayerPosition::South);
        assert_eq!(players[2].to_string(), "c");
    }
}
