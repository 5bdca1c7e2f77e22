use crate::Points;
use crate::cards::hand::Hand;
use crate::cards::picks::PickIterator;
use crate::cards::rank::Rank;

/// An evaluator for a show hand's score.
///
/// The five rules are independent and each returns its own point
/// contribution; score() is their sum. Subset-driven rules (fifteens,
/// pairs) enumerate positions with PickIterator rather than nested loops.
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn score(&self) -> Points {
        self.knobs() + self.flush() + self.fifteens() + self.pairs() + self.runs()
    }

    /// 1 point if a draw-card Jack shares the starter's suit. The deck
    /// holds one Jack per suit, so the result is binary.
    pub fn knobs(&self) -> Points {
        self.0
            .draw()
            .iter()
            .filter(|card| card.rank() == Rank::Jack)
            .any(|card| card.suit() == self.0.starter().suit()) as Points
    }

    /// 5 points if all four draw cards and the starter share a suit,
    /// 4 if only the draw cards do, 0 otherwise. Never 1..=3.
    pub fn flush(&self) -> Points {
        let suit = self.0.draw()[0].suit();
        if self.0.draw().iter().any(|card| card.suit() != suit) {
            0
        } else if self.0.starter().suit() == suit {
            5
        } else {
            4
        }
    }

    /// 2 points per subset of 2..=5 cards whose count values sum to 15.
    /// 26 subsets total; one hand can score several fifteens.
    pub fn fifteens(&self) -> Points {
        (2..=Hand::SIZE)
            .flat_map(|k| PickIterator::from((k, Hand::SIZE)))
            .map(|pick| self.0.select(pick).map(|card| card.value()).sum::<u8>())
            .filter(|&sum| sum == 15)
            .count() as Points
            * 2
    }

    /// 2 points per 2-subset of equal rank. Trips make 3 such subsets (6),
    /// quads make 6 (12). Suits are irrelevant.
    pub fn pairs(&self) -> Points {
        PickIterator::from((2, Hand::SIZE))
            .map(|pick| {
                let mut picked = self.0.select(pick).map(|card| card.rank());
                let a = picked.next().expect("2-subset");
                let b = picked.next().expect("2-subset");
                (a == b) as Points
            })
            .sum::<Points>()
            * 2
    }

    /// Run length times the product of the rank multiplicities in the run.
    /// A run is 3 or more consecutive distinct ranks; ranks do not wrap, so
    /// King never connects to Ace. A 3-4-4-5 double run scores 2x3 = 6.
    pub fn runs(&self) -> Points {
        let mut counts = [0u8; 13];
        for card in self.0.cards() {
            counts[u8::from(card.rank()) as usize] += 1;
        }
        let ranks = (0..13).filter(|&r| counts[r] > 0).collect::<Vec<usize>>();
        match Self::streak(&ranks) {
            None => 0,
            Some(run) => {
                run.iter().map(|&r| counts[r]).product::<u8>() * run.len() as Points
            }
        }
    }

    /// First maximal streak of consecutive ranks reaching length 3; the scan
    /// stops there and never inspects later streaks. Policy, not accident:
    /// 5 cards cannot hold two disjoint runs of 3, so the tie never arises.
    fn streak(ranks: &[usize]) -> Option<&[usize]> {
        let mut start = 0;
        for i in 1..ranks.len() {
            if ranks[i - 1] + 1 != ranks[i] {
                if i - start >= 3 {
                    return Some(&ranks[start..i]);
                }
                start = i;
            }
        }
        if ranks.len() - start >= 3 {
            Some(&ranks[start..])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    fn evaluator(s: &str) -> Evaluator {
        Evaluator::from(Hand::try_from(s).expect("valid test hand"))
    }

    #[test]
    fn knobs_jack_matches_starter_suit() {
        assert_eq!(evaluator("JH 2S 3C 4D 9H").knobs(), 1);
    }

    #[test]
    fn knobs_jack_off_suit() {
        assert_eq!(evaluator("JS 2S 3C 4D 9H").knobs(), 0);
    }

    #[test]
    fn knobs_starter_jack_does_not_count() {
        assert_eq!(evaluator("2S 3C 4D 6H JH").knobs(), 0);
    }

    #[test]
    fn flush_with_starter() {
        assert_eq!(evaluator("2S 5S 9S KS 7S").flush(), 5);
    }

    #[test]
    fn flush_without_starter() {
        assert_eq!(evaluator("2S 5S 9S KS 7H").flush(), 4);
    }

    #[test]
    fn flush_broken_draw() {
        assert_eq!(evaluator("2S 5S 9S KH 7S").flush(), 0);
    }

    #[test]
    fn fifteens_single_pair_of_cards() {
        assert_eq!(evaluator("7H 8S AC AD AH").fifteens(), 2);
    }

    #[test]
    fn fifteens_stack_of_fives() {
        // 5+5+5 four ways, J+5 four ways
        assert_eq!(evaluator("5H 5C 5D JS 5S").fifteens(), 16);
    }

    #[test]
    fn pairs_one() {
        assert_eq!(evaluator("2H 2S 5C 9D KC").pairs(), 2);
    }

    #[test]
    fn pairs_two() {
        assert_eq!(evaluator("2H 2S 9C 9D KC").pairs(), 4);
    }

    #[test]
    fn pairs_royal() {
        assert_eq!(evaluator("2H 2S 2C 9D KC").pairs(), 6);
    }

    #[test]
    fn pairs_double_royal() {
        assert_eq!(evaluator("2H 2S 2C 2D KC").pairs(), 12);
    }

    #[test]
    fn run_of_three() {
        assert_eq!(evaluator("3H 4S 5C 9D KC").runs(), 3);
    }

    #[test]
    fn run_of_four() {
        assert_eq!(evaluator("3H 4S 5C 6D KC").runs(), 4);
    }

    #[test]
    fn run_of_five() {
        assert_eq!(evaluator("3H 4S 5C 6D 7C").runs(), 5);
    }

    #[test]
    fn double_run() {
        assert_eq!(evaluator("3H 3S 4C 5D 9H").runs(), 6);
    }

    #[test]
    fn double_double_run() {
        assert_eq!(evaluator("3H 3S 4C 4D 5H").runs(), 12);
    }

    #[test]
    fn triple_run() {
        assert_eq!(evaluator("3H 3S 3C 4D 5H").runs(), 9);
    }

    #[test]
    fn no_wraparound_run() {
        assert_eq!(evaluator("QH KS AC 2D 9H").runs(), 0);
    }

    #[test]
    fn no_run_in_quads() {
        assert_eq!(evaluator("5H 5C 5D 5S KC").runs(), 0);
    }

    #[test]
    fn perfect_hand() {
        let evaluator = evaluator("5H 5C 5D JS 5S");
        assert_eq!(evaluator.knobs(), 1);
        assert_eq!(evaluator.flush(), 0);
        assert_eq!(evaluator.fifteens(), 16);
        assert_eq!(evaluator.pairs(), 12);
        assert_eq!(evaluator.runs(), 0);
        assert_eq!(evaluator.score(), 29);
    }

    #[test]
    fn bounded_scores() {
        for _ in 0..1000 {
            assert!(Evaluator::from(Hand::random()).score() <= 29);
        }
    }
}
