use crate::model::card::Card;

/// Cards held by one seat, in the order they were dealt.
///
/// Playing a card removes it without disturbing the others, so the first
/// listed card is always the earliest-dealt one still held.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Drops `card`; false when it was not held.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&held| held == card) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::with_cards(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::Hand;
    use crate::model::card::Card;

    fn cards(text: &str) -> Vec<Card> {
        text.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn keeps_the_order_cards_arrive_in() {
        let hand = Hand::with_cards(cards("KS 2C 9H AC"));
        assert_eq!(hand.cards(), cards("KS 2C 9H AC").as_slice());
    }

    #[test]
    fn removing_a_card_leaves_the_rest_in_place() {
        let mut hand: Hand = cards("KS 2C 9H AC").into_iter().collect();
        assert!(hand.remove("2C".parse().unwrap()));
        assert_eq!(hand.cards(), cards("KS 9H AC").as_slice());
        assert!(!hand.contains(Card::TWO_OF_CLUBS));
        assert!(!hand.remove(Card::TWO_OF_CLUBS));
        assert_eq!(hand.len(), 3);
    }

    #[test]
    fn default_hand_is_empty() {
        let hand = Hand::default();
        assert!(hand.is_empty());
        assert_eq!(hand.iter().count(), 0);
    }
}
