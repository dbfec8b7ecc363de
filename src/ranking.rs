use crate::rank::Rank;

/// A hand's category together with its defining ranks.
///
/// Variants are declared in ascending precedence, so the derived `Ord`
/// compares category first and payload ranks second: any four of a
/// kind beats any full house regardless of ranks. Kicker ranks are not
/// part of the payload; [`Strength`](crate::Strength) pairs a Ranking
/// with [`Kickers`](crate::Kickers) to finish the tie-break.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ranking {
    /// Top rank; the other 4 ranks are kickers.
    HighCard(Rank),
    /// Pair rank; 3 kickers.
    OnePair(Rank),
    /// High and low pair ranks; 1 kicker.
    TwoPair(Rank, Rank),
    /// Triple rank; 2 kickers.
    ThreeOfAKind(Rank),
    /// High card of the run; the wheel A-2-3-4-5 has high card Five.
    Straight(Rank),
    /// Top rank of the suited cards; the other 4 ranks are kickers.
    Flush(Rank),
    /// Triple rank, then pair rank.
    FullHouse(Rank, Rank),
    /// Quad rank; 1 kicker.
    FourOfAKind(Rank),
    /// High card of the suited run, wheel rule included.
    StraightFlush(Rank),
}

impl Ranking {
    /// How many kicker ranks break ties for this category.
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) | Ranking::Flush(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOfAKind(_) => 2,
            Ranking::TwoPair(..) | Ranking::FourOfAKind(_) => 1,
            Ranking::Straight(_) | Ranking::FullHouse(..) | Ranking::StraightFlush(_) => 0,
        }
    }

    /// Rank bits excluded when selecting kickers from the hand.
    pub(crate) fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::ThreeOfAKind(hi)
            | Ranking::Flush(hi)
            | Ranking::FourOfAKind(hi) => !(u16::from(hi)),
            Ranking::Straight(..) | Ranking::FullHouse(..) | Ranking::StraightFlush(..) => {
                unreachable!()
            }
        }
    }

    /// The dominant rank defining the category.
    pub fn primary(&self) -> Rank {
        match self {
            Ranking::HighCard(r)
            | Ranking::OnePair(r)
            | Ranking::TwoPair(r, _)
            | Ranking::ThreeOfAKind(r)
            | Ranking::Straight(r)
            | Ranking::Flush(r)
            | Ranking::FullHouse(r, _)
            | Ranking::FourOfAKind(r)
            | Ranking::StraightFlush(r) => *r,
        }
    }

    /// The second payload rank where one exists (two pair's low pair,
    /// the full house's pair), otherwise the primary.
    pub fn secondary(&self) -> Rank {
        match self {
            Ranking::TwoPair(_, r) | Ranking::FullHouse(_, r) => *r,
            x => x.primary(),
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::FullHouse(r1, r2) => write!(f, "FullHouse     {}{}", r1, r2),
            Ranking::TwoPair(r1, r2) => write!(f, "TwoPair       {}{}", r1, r2),
            Ranking::HighCard(r) => write!(f, "HighCard      {} ", r),
            Ranking::OnePair(r) => write!(f, "OnePair       {} ", r),
            Ranking::ThreeOfAKind(r) => write!(f, "ThreeOfAKind  {} ", r),
            Ranking::Straight(r) => write!(f, "Straight      {} ", r),
            Ranking::Flush(r) => write!(f, "Flush         {} ", r),
            Ranking::FourOfAKind(r) => write!(f, "FourOfAKind   {} ", r),
            Ranking::StraightFlush(r) => write!(f, "StraightFlush {} ", r),
        }
    }
}
