use crate::Points;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::picks::PickIterator;
use crate::scoring::evaluator::Evaluator;

/// Frequency of each show score 0..=29 across an enumeration run.
/// Monotonically incremented, merged across shards by element-wise sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Histogram([u64; Self::BINS]);

impl Histogram {
    /// 29 is the maximum attainable show score
    pub const BINS: usize = 30;
    /// 52 x C(51,4): every choice of starter slot, times every 4-subset of
    /// the remaining 51 slots. Equals C(52,5) x 5, since each 5-card subset
    /// is tallied once per choice of which card plays starter.
    pub const COMBINATIONS: u64 = 12_994_800;

    pub fn increment(&mut self, score: Points) {
        self.0[score as usize] += 1;
    }
    pub fn count(&self, score: Points) -> u64 {
        self.0[score as usize]
    }
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// element-wise merge of two shards
    pub fn absorb(self, other: Self) -> Self {
        let mut merged = self;
        for (bin, count) in merged.0.iter_mut().zip(other.0.iter()) {
            *bin += count;
        }
        merged
    }

    /// Score every (draw, starter) assignment in the deck and tally the
    /// results. Work is sharded by starter slot across rayon workers; each
    /// shard is pure, so merge order cannot affect the result. Verbose mode
    /// logs a line per completed shard and nothing else.
    pub fn exhaust(verbose: bool) -> Self {
        use rayon::iter::IntoParallelIterator;
        use rayon::iter::ParallelIterator;
        (0..Deck::SIZE)
            .into_par_iter()
            .map(Card::from)
            .map(|starter| {
                let shard = Self::shard(starter);
                if verbose {
                    log::info!("{:<32}{:<32}", "exhausted starter", starter);
                }
                shard
            })
            .reduce(Self::default, Self::absorb)
    }

    /// every hand drawn against one fixed starter card
    pub fn shard(starter: Card) -> Self {
        let mut histogram = Self::default();
        let blocked = 1u64 << usize::from(starter);
        for pick in PickIterator::from((4, Deck::SIZE, blocked)) {
            let hand = Hand::from((pick, starter));
            histogram.increment(Evaluator::from(hand).score());
        }
        histogram
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self([0; Self::BINS])
    }
}

/// one line per score, `Score <i>:\t<count>`
impl std::fmt::Display for Histogram {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (score, count) in self.0.iter().enumerate() {
            writeln!(f, "Score {}:\t{}", score, count)?;
        }
        Ok(())
    }
}
