use crate::hand::FiveCardHand;
use crate::kicks::Kickers;
use crate::rank::Rank;
use crate::ranking::Ranking;
use crate::suit::Suit;

/// A-2-3-4-5 as a rank mask; its straight high card is the Five.
const WHEEL: u16 = 0b_1000000001111;
const WHEEL_HIGH: Rank = Rank::Five;

/// Classifies a hand by searching categories in precedence order.
///
/// Works on the hand's 52-bit card set: per-rank counts come from
/// nibble masks, flushes from suit bit-planes, straights from shifting
/// the 13-bit rank mask against itself. First match wins, so a
/// straight flush is never reported as a plain flush or straight.
pub struct Evaluator(u64);

impl From<&FiveCardHand> for Evaluator {
    fn from(hand: &FiveCardHand) -> Self {
        Self(u64::from(hand))
    }
}

impl Evaluator {
    /// The hand's unique category. Total over five-card hands.
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_four_oak())
            .or_else(|| self.find_full_house())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_three_oak())
            .or_else(|| self.find_pairs())
            .or_else(|| self.find_high_card())
            .expect("five cards always rank")
    }

    /// The tie-break ranks not already named by the category payload.
    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        match ranking.n_kickers() {
            0 => Kickers::none(),
            n => {
                let mut ranks = Self::ranks_of(self.0) & ranking.mask();
                while n < ranks.count_ones() as usize {
                    ranks &= ranks - 1;
                }
                Kickers::from(ranks)
            }
        }
    }

    /// Whether the five cards share a suit, independent of category.
    pub fn is_flush(&self) -> bool {
        self.find_suit_of_flush().is_some()
    }

    /// Whether the five ranks form a run, independent of category.
    pub fn is_straight(&self) -> bool {
        self.find_rank_of_straight(Self::ranks_of(self.0)).is_some()
    }

    /// Whether both hold at once.
    pub fn is_straight_flush(&self) -> bool {
        self.find_straight_flush().is_some()
    }

    fn find_high_card(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(1, None).map(Ranking::HighCard)
    }
    fn find_three_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).map(Ranking::ThreeOfAKind)
    }
    fn find_four_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4, None).map(Ranking::FourOfAKind)
    }
    fn find_pairs(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).map(|hi| {
            match self.find_rank_of_n_oak(2, Some(hi)) {
                Some(lo) => Ranking::TwoPair(hi, lo),
                None => Ranking::OnePair(hi),
            }
        })
    }
    fn find_full_house(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).and_then(|triple| {
            self.find_rank_of_n_oak(2, Some(triple))
                .map(|paired| Ranking::FullHouse(triple, paired))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight(Self::ranks_of(self.0))
            .map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().map(|suit| {
            let ranks = Self::ranks_of(self.0 & u64::from(suit));
            Ranking::Flush(Rank::from(ranks))
        })
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().and_then(|suit| {
            self.find_rank_of_straight(Self::ranks_of(self.0 & u64::from(suit)))
                .map(Ranking::StraightFlush)
        })
    }

    /// Bit r of the result means a run ending at rank r; the wheel is
    /// the one run the shifts cannot see because the Ace plays low.
    fn find_rank_of_straight(&self, ranks: u16) -> Option<Rank> {
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == (WHEEL & ranks) {
            Some(WHEEL_HIGH)
        } else {
            None
        }
    }

    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::ALL
            .into_iter()
            .find(|s| (self.0 & u64::from(*s)).count_ones() >= 5)
    }

    /// Highest rank held by at least n cards, skipping one rank when
    /// probing for the second pair or the full house's pair.
    fn find_rank_of_n_oak(&self, n: u32, skip: Option<Rank>) -> Option<Rank> {
        let mut high = u64::from(Rank::Ace) << 4;
        while high > 0 {
            high >>= 4;
            if let Some(skip) = skip {
                if high & u64::from(skip) != 0 {
                    continue;
                }
            }
            if (self.0 & high).count_ones() >= n {
                return Some(Rank::lo(high));
            }
        }
        None
    }

    /// Folds each rank's nibble in the card set down to one bit.
    fn ranks_of(cards: u64) -> u16 {
        let mut x = cards;
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111111111111;
        (0..13).fold(0u64, |y, i| y | ((x >> (i * 3)) & (1u64 << i))) as u16
    }
}
