use super::pick::Pick;

/// PickIterator enumerates every k-subset of the positions 0..n, skipping any
/// position blocked by the mask. It holds a single u64 and walks the bit
/// patterns of fixed popcount in increasing numeric order, which matches the
/// order of k nested strictly-increasing index loops.
/// it is memory efficient because it never materializes the subsets
/// it is deterministic because it always iterates in the same order
pub struct PickIterator {
    next: u64,
    mask: u64,
    over: usize,
}

impl PickIterator {
    pub fn combinations(&self) -> usize {
        let n = self.over - Pick::from(self.mask).size();
        let k = Pick::from(self.next).size();
        (0..k).fold(1, |x, i| x * (n - i) / (i + 1))
    }

    fn exhausted(&self) -> bool {
        if self.next == 0 {
            true
        } else {
            (64 - self.over as u32) > self.next.leading_zeros()
        }
    }

    /// Gosper's hack. next bit pattern with the same popcount:
    /// lowest set run is carried up one place, remainder shifted back down.
    fn permute(&self) -> u64 {
        let x = self.next;
        let a = x | (x - 1);
        let b = a + 1;
        let c = !a;
        let d = c & b;
        let e = d - 1;
        let f = 1 + x.trailing_zeros();
        let g = e >> f;
        b | g
    }

    fn advance(&mut self) {
        loop {
            self.next = self.permute();
            if self.next & self.mask == 0 {
                break;
            }
        }
    }
}

impl Iterator for PickIterator {
    type Item = Pick;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let pick = Pick::from(self.next);
            self.advance();
            Some(pick)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let combos = self.combinations();
        (combos, Some(combos))
    }
}

/// all k-subsets of 0..n
impl From<(usize, usize)> for PickIterator {
    fn from((k, n): (usize, usize)) -> Self {
        Self::from((k, n, 0u64))
    }
}

/// all k-subsets of 0..n avoiding masked positions.
/// k, n, and mask are immutable and must be decided at construction
impl From<(usize, usize, u64)> for PickIterator {
    fn from((k, n, mask): (usize, usize, u64)) -> Self {
        assert!(k <= n && n <= 64);
        assert!(n == 64 || mask >> n == 0);
        let mut this = Self {
            next: (1 << k) - 1,
            mask,
            over: n,
        };
        while this.next & this.mask > 0 {
            this.next = this.permute();
        }
        this
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_choose_three() {
        let mut iter = PickIterator::from((3, 5));
        assert_eq!(iter.next(), Some(Pick::from(0b00111u64)));
        assert_eq!(iter.next(), Some(Pick::from(0b01011u64)));
        assert_eq!(iter.next(), Some(Pick::from(0b01101u64)));
        assert_eq!(iter.next(), Some(Pick::from(0b01110u64)));
        assert_eq!(iter.next(), Some(Pick::from(0b10011u64)));
        assert_eq!(iter.next(), Some(Pick::from(0b10101u64)));
        assert_eq!(iter.next(), Some(Pick::from(0b10110u64)));
        assert_eq!(iter.next(), Some(Pick::from(0b11001u64)));
        assert_eq!(iter.next(), Some(Pick::from(0b11010u64)));
        assert_eq!(iter.next(), Some(Pick::from(0b11100u64)));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn five_choose_five() {
        let mut iter = PickIterator::from((5, 5));
        assert_eq!(iter.next(), Some(Pick::from(0b11111u64)));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn masked_positions_skipped() {
        let mask = 0b000100u64;
        let picks = PickIterator::from((4, 6, mask)).collect::<Vec<Pick>>();
        assert_eq!(picks.len(), 5); // C(5, 4)
        assert!(picks.iter().all(|pick| !pick.contains(2)));
    }

    #[test]
    fn counted_combinations() {
        let iter = PickIterator::from((4, 52, 1u64));
        assert_eq!(iter.combinations(), 249_900); // C(51, 4)
        assert_eq!(PickIterator::from((2, 5)).combinations(), 10);
        assert_eq!(PickIterator::from((2, 5)).count(), 10);
    }
}
