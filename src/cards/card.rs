#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    /// cribbage count value of this card, 1..=10
    pub fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// packed byte isomorphism
/// suit occupies the high nibble, rank the low nibble
/// 5H
/// 0b00010100
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) << 4 | u8::from(c.rank)
    }
}
/// the decoding side is fallible. a stray byte with a rank nibble
/// above 12 or a suit nibble above 3 names no card in the deck.
impl TryFrom<u8> for Card {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        let rank = n & 0xF;
        let suit = n >> 4;
        if rank > 12 || suit > 3 {
            Err(anyhow::anyhow!("invalid card byte: {:#04x}", n))
        } else {
            Ok(Self {
                rank: Rank::from(rank),
                suit: Suit::from(suit),
            })
        }
    }
}

/// deck position isomorphism
/// each card is mapped to its slot in a suit-major sorted deck 0-51
/// 5H
/// 17
impl From<Card> for usize {
    fn from(c: Card) -> usize {
        u8::from(c.suit) as usize * 13 + u8::from(c.rank) as usize
    }
}
impl From<usize> for Card {
    fn from(n: usize) -> Self {
        match n {
            0..52 => Self {
                rank: Rank::from((n % 13) as u8),
                suit: Suit::from((n / 13) as u8),
            },
            _ => panic!("Invalid deck position: {}", n),
        }
    }
}

/// str isomorphism, rank then suit
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.chars().collect::<Vec<char>>()[..] {
            [rank, suit] => Ok(Self {
                rank: Rank::try_from(rank)?,
                suit: Suit::try_from(suit)?,
            }),
            _ => Err(anyhow::anyhow!("invalid card str: {}", s)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..super::Deck::SIZE))
    }
}

use super::rank::Rank;
use super::suit::Suit;
