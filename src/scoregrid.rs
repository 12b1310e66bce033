//! Correct-score grid over a bounded goal range and the totals-market
//! outcomes gathered from it.

use std::fmt::{Display, Formatter};

use strum_macros::{EnumCount, EnumIter};

use crate::factorial::Lookup;
use crate::linear::Matrix;
use crate::poisson;

/// Goal count that the Under outcome must stay below; i.e., the 2.5-goal line.
pub const UNDER_GOALS: u8 = 3;

/// The two outcomes of the totals market, in display and indexing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumCount, EnumIter)]
pub enum OverUnder {
    Under,
    Over,
}
impl OverUnder {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl Display for OverUnder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OverUnder::Under => write!(f, "Under 2.5"),
            OverUnder::Over => write!(f, "Over 2.5"),
        }
    }
}

/// Fills the grid with the joint distribution of two independent per-side
/// zero-inflated Poisson goal counts. Cell `(h, a)` holds P(home scores `h`
/// and away scores `a`); the grid dimensions bound the per-side goal range.
pub fn from_zero_inflated_poisson(
    home_rate: f64,
    away_rate: f64,
    p_zero: f64,
    scoregrid: &mut Matrix,
) {
    let factorial = Lookup::default();
    for home_goals in 0..scoregrid.rows() {
        for away_goals in 0..scoregrid.cols() {
            let home_prob =
                poisson::zero_inflated(home_goals as u8, home_rate, p_zero, &factorial);
            let away_prob =
                poisson::zero_inflated(away_goals as u8, away_rate, p_zero, &factorial);
            scoregrid[(home_goals, away_goals)] = home_prob * away_prob;
        }
    }
}

/// Mass on cells with fewer than `goals` in total.
pub fn gather_goals_under(goals: u8, scoregrid: &Matrix) -> f64 {
    let goals = goals as usize;
    let mut prob = 0.0;
    for row in 0..scoregrid.rows() {
        for col in 0..scoregrid.cols() {
            if row + col < goals {
                prob += scoregrid[(row, col)];
            }
        }
    }
    prob
}

/// Mass on cells with more than `goals` in total. Subject to grid truncation;
/// the totals pair uses the complement of Under instead.
pub fn gather_goals_over(goals: u8, scoregrid: &Matrix) -> f64 {
    let goals = goals as usize;
    let mut prob = 0.0;
    for row in 0..scoregrid.rows() {
        for col in 0..scoregrid.cols() {
            if row + col > goals {
                prob += scoregrid[(row, col)];
            }
        }
    }
    prob
}

/// Probability pair for the 2.5-goal line, indexed by [`OverUnder`]. Over is
/// the complement of Under, never an independent sum, so the pair sums to 1
/// regardless of where the grid is truncated.
pub fn total_goals_probs(scoregrid: &Matrix) -> [f64; 2] {
    let under = gather_goals_under(UNDER_GOALS, scoregrid);
    [under, 1.0 - under]
}

#[cfg(test)]
mod tests;
