use super::evaluator::Evaluator;
use crate::Points;
use crate::cards::hand::Hand;

/// Per-rule point contributions for one show hand.
/// Presentation companion to Evaluator, used by the CLI single-hand query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakdown {
    knobs: Points,
    flush: Points,
    fifteens: Points,
    pairs: Points,
    runs: Points,
}

impl Breakdown {
    pub fn total(&self) -> Points {
        self.knobs + self.flush + self.fifteens + self.pairs + self.runs
    }
}

impl From<Hand> for Breakdown {
    fn from(hand: Hand) -> Self {
        let ref evaluator = Evaluator::from(hand);
        Self {
            knobs: evaluator.knobs(),
            flush: evaluator.flush(),
            fifteens: evaluator.fifteens(),
            pairs: evaluator.pairs(),
            runs: evaluator.runs(),
        }
    }
}

impl std::fmt::Display for Breakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{:<10}{:>3}", "knobs", self.knobs)?;
        writeln!(f, "{:<10}{:>3}", "flush", self.flush)?;
        writeln!(f, "{:<10}{:>3}", "fifteens", self.fifteens)?;
        writeln!(f, "{:<10}{:>3}", "pairs", self.pairs)?;
        writeln!(f, "{:<10}{:>3}", "runs", self.runs)?;
        write!(f, "{:<10}{:>3}", "total", self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_match_evaluator() {
        let hand = Hand::try_from("5H 5C 5D JS 5S").unwrap();
        let breakdown = Breakdown::from(hand);
        assert_eq!(breakdown.total(), Evaluator::from(hand).score());
        assert_eq!(breakdown.total(), 29);
    }

    #[test]
    fn lines_up() {
        let hand = Hand::try_from("3H 4S 5C 9D KC").unwrap();
        let report = Breakdown::from(hand).to_string();
        assert!(report.contains("fifteens    2")); // 5 + K
        assert!(report.contains("runs        3"));
        assert!(report.contains("total       5"));
    }
}
