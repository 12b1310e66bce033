use super::*;
use crate::probs::SliceExt;
use assert_float_eq::*;

const GOAL_RANGE: usize = 10;

fn poisson_grid(home_rate: f64, away_rate: f64) -> Matrix {
    let mut scoregrid = Matrix::allocate(GOAL_RANGE, GOAL_RANGE);
    from_zero_inflated_poisson(home_rate, away_rate, 0.0, &mut scoregrid);
    scoregrid
}

#[test]
pub fn grid_mass_is_nearly_one_for_realistic_rates() {
    let scoregrid = poisson_grid(1.2, 1.0);
    let mass = scoregrid.flatten().sum();
    assert!(mass < 1.0, "truncated mass cannot reach 1, got {mass}");
    assert_float_absolute_eq!(1.0, mass, 1e-6);
}

#[test]
pub fn under_probability_reference() {
    // with independent Poisson sides the total is Poisson(2.2);
    // P(total <= 2) = e^-2.2 * (1 + 2.2 + 2.42)
    let scoregrid = poisson_grid(1.2, 1.0);
    let under = gather_goals_under(UNDER_GOALS, &scoregrid);
    assert_float_absolute_eq!(0.6227137499963164, under, 1e-6);
}

#[test]
pub fn certain_under_at_zero_rates() {
    let scoregrid = poisson_grid(0.0, 0.0);
    let [under, over] = total_goals_probs(&scoregrid);
    assert_float_absolute_eq!(1.0, under, 1e-12);
    assert_float_absolute_eq!(0.0, over, 1e-12);
}

#[test]
pub fn pair_is_complementary() {
    for rates in [(1.2, 1.0), (0.3, 0.4), (2.8, 3.1), (4.5, 4.9)] {
        let scoregrid = poisson_grid(rates.0, rates.1);
        let [under, over] = total_goals_probs(&scoregrid);
        assert_float_absolute_eq!(1.0, under + over, 1e-15);
    }
}

#[test]
pub fn complement_absorbs_the_truncated_tail() {
    // an independent Over sum loses the tail beyond the grid; the
    // complement does not
    let scoregrid = poisson_grid(3.0, 3.2);
    let over = total_goals_probs(&scoregrid)[OverUnder::Over.index()];
    let summed_over = gather_goals_over(UNDER_GOALS - 1, &scoregrid);
    assert!(
        summed_over < over,
        "expected summed {summed_over} below complement {over}"
    );
    assert_float_absolute_eq!(over, summed_over + (1.0 - scoregrid.flatten().sum()), 1e-12);
}

#[test]
pub fn under_shrinks_as_rates_grow() {
    let mut previous = f64::MAX;
    for step in 1..=10 {
        let home_rate = 0.5 * step as f64;
        let scoregrid = poisson_grid(home_rate, 1.0);
        let [under, _] = total_goals_probs(&scoregrid);
        assert!(
            under < previous,
            "under {under} did not shrink at home rate {home_rate}"
        );
        previous = under;
    }
}

#[test]
pub fn zero_inflation_shifts_mass_under() {
    let deflated = poisson_grid(1.4, 1.1);
    let mut inflated = Matrix::allocate(GOAL_RANGE, GOAL_RANGE);
    from_zero_inflated_poisson(1.4, 1.1, 0.2, &mut inflated);
    let [under_plain, _] = total_goals_probs(&deflated);
    let [under_inflated, _] = total_goals_probs(&inflated);
    assert!(
        under_inflated > under_plain,
        "zero inflation must favour Under: {under_inflated} vs {under_plain}"
    );
}

#[test]
pub fn outcome_display() {
    assert_eq!("Under 2.5", OverUnder::Under.to_string());
    assert_eq!("Over 2.5", OverUnder::Over.to_string());
    assert_eq!(0, OverUnder::Under.index());
    assert_eq!(1, OverUnder::Over.index());
}
