#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Spade = 0,
    Heart = 1,
    Club = 2,
    Diamond = 3,
}

impl Suit {
    pub const fn all() -> &'static [Self] {
        &[Self::Spade, Self::Heart, Self::Club, Self::Diamond]
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Spade,
            1 => Suit::Heart,
            2 => Suit::Club,
            3 => Suit::Diamond,
            _ => panic!("Invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// char isomorphism
impl TryFrom<char> for Suit {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'S' => Ok(Suit::Spade),
            'H' => Ok(Suit::Heart),
            'C' => Ok(Suit::Club),
            'D' => Ok(Suit::Diamond),
            _ => Err(anyhow::anyhow!("invalid suit char: {}", c)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Spade => "S",
                Suit::Heart => "H",
                Suit::Club => "C",
                Suit::Diamond => "D",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let suit = Suit::Club;
        assert!(suit == Suit::from(u8::from(suit)));
    }
}
