//! Expected-goal rate estimation from raw team statistics.

use crate::data::TeamStats;

/// Expected-goal reduction per unavailable player.
pub const INJURY_PENALTY: f64 = 0.03;

/// Per-place reduction for sitting lower on the table.
pub const POSITION_PENALTY: f64 = 0.01;

/// Boost per point of recent form.
pub const FORM_WEIGHT: f64 = 0.1;

/// The Poisson rate for the attacking side: the mean of its scoring figures
/// and the defending side's conceding figures, adjusted for injuries, league
/// position and form. The adjustments are unclamped, so extreme inputs can
/// drive the rate negative; the model rejects such a rate before it reaches
/// the pmf.
pub fn expected_goal_rate(attacking: &TeamStats, defending: &TeamStats) -> f64 {
    let mut rate = (attacking.scored_avg
        + attacking.xg_scored
        + defending.conceded_avg
        + defending.xg_conceded)
        / 4.0;
    rate *= 1.0 - INJURY_PENALTY * attacking.injuries as f64;
    rate + FORM_WEIGHT * attacking.form as f64 - POSITION_PENALTY * attacking.position as f64
}
