//! Score arithmetic and the general/heuristic score pair carried by every node.
//!
//! Scores are integers: the frontier needs a total order, and integer
//! arithmetic keeps runs bit-reproducible. Fractional costs belong in fixed
//! point on the caller's side.

use std::fmt::Debug;

/// A path-cost value usable as `g`, `h` and `f`.
///
/// `add_cost` saturates instead of overflowing, so a pathological graph
/// degrades to "very expensive" rather than wrapping to a cheap score.
pub trait Score: Copy + Ord + Default + Debug {
    /// The additive identity (cost of the empty path).
    #[must_use]
    fn zero() -> Self {
        Self::default()
    }

    /// Saturating `self + rhs`.
    #[must_use]
    fn add_cost(self, rhs: Self) -> Self;
}

macro_rules! impl_score {
    ($($t:ty),* $(,)?) => {
        $(
            impl Score for $t {
                fn add_cost(self, rhs: Self) -> Self {
                    self.saturating_add(rhs)
                }
            }
        )*
    };
}

impl_score!(i32, i64, u32, u64, usize);

/// The score pair of a node: cost so far (`g`) and estimate to target (`h`).
///
/// The total (`f = g + h`) is derived on every read and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scores<S> {
    /// Accumulated cost from the start node.
    pub general: S,
    /// Estimated remaining cost to the target node.
    pub heuristic: S,
}

impl<S: Score> Scores<S> {
    /// Scores with explicit general and heuristic parts.
    #[must_use]
    pub fn new(general: S, heuristic: S) -> Self {
        Self { general, heuristic }
    }

    /// `f = g + h`, the frontier ordering key.
    #[must_use]
    pub fn total(&self) -> S {
        self.general.add_cost(self.heuristic)
    }

    /// Reset both scores to zero.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
