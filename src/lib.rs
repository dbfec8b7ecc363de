//! Five-card poker hand classification and comparison primitives.
//!
//! This crate provides the foundational types for representing a fixed
//! five-card hand and computing its strength: the nine poker categories
//! from high card through straight flush, with category precedence and
//! per-category kicker tie-breaks.
//!
//! ## Core Types
//!
//! - [`Card`] — A single card as a `(Rank, Suit)` pair
//! - [`Rank`] / [`Suit`] — The 13 face values and 4 suits
//! - [`FiveCardHand`] — Exactly five cards, validated at construction
//!
//! ## Evaluation
//!
//! - [`Evaluator`] — Bitwise category search in precedence order
//! - [`Ranking`] — Hand category with its defining ranks
//! - [`Kickers`] — Tie-breaking ranks outside the category payload
//! - [`Strength`] — Ranking plus kickers, totally ordered
//! - [`ClassifiedHand`] — Hand plus strength, with the strict `gt`/`lt`
//!   operators that refuse to order two exactly tied hands
//!
//! ```
//! use handrank::{FiveCardHand, Rank, Ranking};
//!
//! let quads = FiveCardHand::try_from("9d 9c 9h 9s 4c")?.classify();
//! let boat = FiveCardHand::try_from("Qd Qc Qs 7h 7s")?.classify();
//! assert_eq!(quads.ranking(), Ranking::FourOfAKind(Rank::Nine));
//! assert_eq!(quads.gt(&boat), Ok(true));
//! # Ok::<(), handrank::HandError>(())
//! ```
mod card;
mod classified;
mod error;
mod evaluator;
mod hand;
mod kicks;
mod rank;
mod ranking;
mod strength;
mod suit;

pub use card::*;
pub use classified::*;
pub use error::*;
pub use evaluator::*;
pub use hand::*;
pub use kicks::*;
pub use rank::*;
pub use ranking::*;
pub use strength::*;
pub use suit::*;
