//! Which cards a seat may play.
//!
//! Precedence, highest first:
//! 1. the holder of the two of clubs must play it;
//! 2. a follower must follow the lead suit when able, otherwise anything goes;
//! 3. a leader may not lead hearts before they are broken unless the hand is
//!    nothing but hearts.

use crate::model::card::Card;
use crate::model::suit::Suit;

/// Why a specific card is not playable right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restriction {
    TwoOfClubs,
    FollowSuit(Suit),
    HeartsNotBroken,
}

pub fn legal_cards(hand: &[Card], played: &[Card], hearts_broken: bool) -> Vec<Card> {
    if hand.contains(&Card::TWO_OF_CLUBS) {
        return vec![Card::TWO_OF_CLUBS];
    }

    let legal: Vec<Card> = match played.first().map(|card| card.suit) {
        Some(lead) => {
            let following: Vec<Card> = hand.iter().copied().filter(|c| c.suit == lead).collect();
            if following.is_empty() {
                hand.to_vec()
            } else {
                following
            }
        }
        None if !hearts_broken => {
            let safe: Vec<Card> = hand.iter().copied().filter(|c| !c.suit.is_heart()).collect();
            if safe.is_empty() { hand.to_vec() } else { safe }
        }
        None => hand.to_vec(),
    };

    debug_assert!(
        hand.is_empty() || !legal.is_empty(),
        "non-empty hand produced no legal cards"
    );
    legal
}

/// Explains why `card` is outside [`legal_cards`]; `None` when it is playable.
pub fn restriction_for(
    hand: &[Card],
    played: &[Card],
    hearts_broken: bool,
    card: Card,
) -> Option<Restriction> {
    if legal_cards(hand, played, hearts_broken).contains(&card) {
        return None;
    }
    if hand.contains(&Card::TWO_OF_CLUBS) {
        return Some(Restriction::TwoOfClubs);
    }
    match played.first() {
        Some(lead) => Some(Restriction::FollowSuit(lead.suit)),
        None => Some(Restriction::HeartsNotBroken),
    }
}
