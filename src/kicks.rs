use crate::rank::Rank;

/// A hand's kicker ranks.
///
/// Stored as a 13-bit rank mask. Comparing the masks as integers is
/// exactly high-to-low lexicographic comparison of the kicker ranks,
/// which is the tie-break rule every category shares.
/// Suits never enter kicker comparison.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Kickers(u16);

impl Kickers {
    pub const fn none() -> Self {
        Self(0)
    }
}

/// u16 isomorphism
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n & Rank::mask())
    }
}

/// Vec<Rank> isomorphism, highest kicker first
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        (0..13)
            .rev()
            .filter(|i| k.0 & (1 << i) != 0)
            .map(|i| Rank::from(i as u8))
            .collect()
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.iter().map(|r| u16::from(*r)).fold(0, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self) {
            write!(f, "{} ", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_ranks() {
        let ranks = vec![Rank::King, Rank::Queen, Rank::Nine];
        let kicks = Kickers::from(ranks.clone());
        assert_eq!(Vec::<Rank>::from(kicks), ranks);
    }

    #[test]
    fn ordered_lexicographically() {
        let kqj = Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack]);
        let kqt = Kickers::from(vec![Rank::King, Rank::Queen, Rank::Ten]);
        let aj9 = Kickers::from(vec![Rank::Ace, Rank::Jack, Rank::Nine]);
        assert!(kqj > kqt);
        assert!(aj9 > kqj);
        assert!(Kickers::none() < kqt);
    }
}
