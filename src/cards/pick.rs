/// An unordered set of positions in some enumeration domain, stored as a
/// bitmask. One bit per position, LSB = position 0. Iteration pops positions
/// in ascending order, which keeps subset enumeration in the same order as
/// the equivalent nested index loops.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Pick(u64);

impl Pick {
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, position: usize) -> bool {
        self.0 & (1 << position) != 0
    }
}

/// we can empty a pick from low to high
/// by removing the lowest position until the pick is empty
impl Iterator for Pick {
    type Item = usize;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let position = self.0.trailing_zeros() as usize;
            self.0 &= self.0 - 1;
            Some(position)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size(), Some(self.size()))
    }
}

/// u64 isomorphism
impl From<u64> for Pick {
    fn from(n: u64) -> Self {
        Self(n)
    }
}
impl From<Pick> for u64 {
    fn from(p: Pick) -> Self {
        p.0
    }
}
