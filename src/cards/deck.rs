use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// The full ordered deck, one card per (rank, suit) pair.
/// Suit-major, rank-minor: slot = suit * 13 + rank. Built once per
/// enumeration and only ever indexed, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct Deck([Card; Self::SIZE]);

impl Deck {
    pub const SIZE: usize = 52;

    pub fn new() -> Self {
        let mut slots = Suit::all()
            .iter()
            .flat_map(|&suit| Rank::all().iter().map(move |&rank| Card::from((rank, suit))));
        Self(std::array::from_fn(|_| slots.next().expect("52 cards")))
    }

    pub fn cards(&self) -> &[Card; Self::SIZE] {
        &self.0
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for Deck {
    type Output = Card;
    fn index(&self, position: usize) -> &Self::Output {
        &self.0[position]
    }
}
