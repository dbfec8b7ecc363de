use thiserror::Error;

/// Errors raised when assembling a five-card hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// Fewer than five cards were supplied.
    #[error("not enough cards: got {got}, need 5")]
    NotEnoughCards { got: usize },
    /// More than five cards were supplied.
    #[error("too many cards: got {got}, need 5")]
    TooManyCards { got: usize },
    /// A card in the input notation failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors raised when parsing cards from notation strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid rank: {0:?}")]
    BadRank(String),
    #[error("invalid suit: {0:?}")]
    BadSuit(String),
    #[error("invalid card: {0:?}")]
    BadCard(String),
}

/// Error raised by the strict comparison operators.
///
/// Two fully tied hands are never silently equal under `gt`/`lt`;
/// use [`ClassifiedHand::compare`](crate::ClassifiedHand::compare)
/// for a total three-way comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompareError {
    /// Both hands carry the same category and identical tie-break ranks.
    #[error("hands have identical strength")]
    IdenticalStrength,
}
