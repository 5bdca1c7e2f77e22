use super::card::Card;
use super::deck::Deck;
use super::pick::Pick;

/// A show hand: 4 draw cards plus the starter, conventionally last.
/// The draw/starter distinction only matters to the knobs and flush rules;
/// every other rule treats all 5 cards uniformly. Hands are built once per
/// enumeration step and never mutated.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Hand {
    draw: [Card; 4],
    starter: Card,
}

impl Hand {
    pub const SIZE: usize = 5;

    pub fn draw(&self) -> &[Card; 4] {
        &self.draw
    }
    pub fn starter(&self) -> Card {
        self.starter
    }

    /// card at subset position 0..5, starter last
    pub fn card(&self, position: usize) -> Card {
        match position {
            0..4 => self.draw[position],
            4 => self.starter,
            _ => panic!("Invalid hand position: {}", position),
        }
    }

    /// all 5 cards, starter last
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        (0..Self::SIZE).map(|position| self.card(position))
    }

    /// the cards at the picked subset positions, ascending
    pub fn select(&self, pick: Pick) -> impl Iterator<Item = Card> + '_ {
        pick.map(|position| self.card(position))
    }
}

/// assemble a Hand from 5 cards, starter last
impl From<[Card; 5]> for Hand {
    fn from(cards: [Card; 5]) -> Self {
        let [a, b, c, d, starter] = cards;
        Self {
            draw: [a, b, c, d],
            starter,
        }
    }
}

/// assemble a Hand from 4 picked deck positions and a starter card
impl From<(Pick, Card)> for Hand {
    fn from((pick, starter): (Pick, Card)) -> Self {
        assert!(pick.size() == 4);
        assert!(!pick.contains(usize::from(starter)));
        let mut slots = pick.map(Card::from);
        Self {
            draw: std::array::from_fn(|_| slots.next().expect("four picked positions")),
            starter,
        }
    }
}

/// str isomorphism, space-separated cards, starter last
impl TryFrom<&str> for Hand {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = s
            .split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, _>>()?;
        let cards = <[Card; 5]>::try_from(cards)
            .map_err(|cards: Vec<Card>| anyhow::anyhow!("expected 5 cards, got {}", cards.len()))?;
        let distinct = cards.iter().collect::<std::collections::HashSet<&Card>>();
        anyhow::ensure!(distinct.len() == 5, "hand contains duplicate cards");
        Ok(Self::from(cards))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.draw[0], self.draw[1], self.draw[2], self.draw[3], self.starter
        )
    }
}

impl crate::Arbitrary for Hand {
    fn random() -> Self {
        use rand::seq::IteratorRandom;
        let ref mut rng = rand::rng();
        let mut slots = (0..Deck::SIZE).choose_multiple(rng, Self::SIZE).into_iter();
        let draw = std::array::from_fn(|_| Card::from(slots.next().expect("five positions")));
        let starter = Card::from(slots.next().expect("five positions"));
        Self { draw, starter }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn bijective_str() {
        let hand = Hand::try_from("7H 8S AC AD AH").unwrap();
        assert_eq!(hand, Hand::try_from(hand.to_string().as_str()).unwrap());
    }

    #[test]
    fn starter_last() {
        let hand = Hand::try_from("7H 8S AC AD KH").unwrap();
        assert_eq!(hand.starter(), Card::try_from("KH").unwrap());
        assert_eq!(hand.card(4), hand.starter());
    }

    #[test]
    fn selected_subset() {
        let hand = Hand::try_from("7H 8S AC AD KH").unwrap();
        let picked = hand.select(Pick::from(0b10001u64)).collect::<Vec<Card>>();
        assert_eq!(picked[0], Card::try_from("7H").unwrap());
        assert_eq!(picked[1], Card::try_from("KH").unwrap());
    }

    #[test]
    fn rejects_duplicates() {
        assert!(Hand::try_from("7H 7H AC AD KH").is_err());
    }

    #[test]
    fn rejects_short_hands() {
        assert!(Hand::try_from("7H 8S AC AD").is_err());
    }

    #[test]
    fn five_distinct_random() {
        let hand = Hand::random();
        let distinct = hand.cards().collect::<std::collections::HashSet<Card>>();
        assert_eq!(distinct.len(), Hand::SIZE);
    }
}
