use crate::evaluator::Evaluator;
use crate::hand::FiveCardHand;
use crate::kicks::Kickers;
use crate::ranking::Ranking;

/// A fully-evaluated hand strength.
///
/// Combines a [`Ranking`] with its [`Kickers`]; the derived `Ord` is
/// lexicographic, ranking first, kickers second, which is the complete
/// tie-break contract. Two hands with the same ranks in different
/// suits have equal Strength.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
    pub fn kickers(&self) -> Kickers {
        self.kicks
    }
}

impl From<&FiveCardHand> for Strength {
    fn from(hand: &FiveCardHand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(e: Evaluator) -> Self {
        let value = e.find_ranking();
        let kicks = e.find_kickers(value);
        Self::from((value, kicks))
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{}", self.value, self.kicks)
    }
}
