//! Conversion between quoted prices and probabilities for a two-way market.

use crate::probs::SliceExt;

/// A two-outcome market: implied probabilities alongside the decimal prices
/// they came from (or produced), and the booksum the prices carried.
/// `overround` is 1 for a fair book, above 1 for a typical quoted one, and 0
/// when both prices were unusable (no market signal).
#[derive(Clone, Debug, PartialEq)]
pub struct Market {
    pub probs: [f64; 2],
    pub prices: [f64; 2],
    pub overround: f64,
}
impl Market {
    /// Fits implied probabilities to a pair of quoted prices, stripping the
    /// overround multiplicatively. A non-positive price contributes zero
    /// probability; if both do, the pair stays all-zero.
    pub fn fit(prices: [f64; 2]) -> Self {
        let mut probs = prices.map(|price| if price > 0.0 { 1.0 / price } else { 0.0 });
        let overround = probs.normalise(1.0);
        Self {
            probs,
            prices,
            overround,
        }
    }

    /// Frames fair prices from a probability pair: the plain reciprocal, with
    /// no margin applied.
    pub fn frame(probs: [f64; 2]) -> Self {
        let prices = probs.map(fair_price);
        Self {
            probs,
            prices,
            overround: 1.0,
        }
    }
}

/// The decimal price a probability is worth with no margin: `1/p`, infinite
/// when the outcome is impossible. Negative input violates the caller's
/// invariants and fails fast.
pub fn fair_price(prob: f64) -> f64 {
    assert!(prob >= 0.0, "cannot price a negative probability {prob}");
    if prob > 0.0 {
        1.0 / prob
    } else {
        f64::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    #[test]
    fn fit_strips_the_overround() {
        let market = Market::fit([1.90, 2.05]);
        // raw implied: 0.5263 and 0.4878, booksum 1.0141
        assert_float_relative_eq!(1.0141206675224647, market.overround, 0.001);
        assert_float_relative_eq!(0.5189873, market.probs[0], 0.001);
        assert_float_relative_eq!(0.4810127, market.probs[1], 0.001);
        assert_float_absolute_eq!(1.0, market.probs[0] + market.probs[1], 1e-12);
        assert_eq!([1.90, 2.05], market.prices);
    }

    #[test]
    fn fit_fair_prices_unchanged() {
        let market = Market::fit([2.0, 2.0]);
        assert_float_relative_eq!(1.0, market.overround);
        assert_float_relative_eq!(0.5, market.probs[0]);
        assert_float_relative_eq!(0.5, market.probs[1]);
    }

    #[test]
    fn fit_single_dead_price() {
        let market = Market::fit([0.0, 2.0]);
        assert_eq!(0.0, market.probs[0]);
        assert_float_relative_eq!(1.0, market.probs[1]);
    }

    #[test]
    fn fit_no_market_signal() {
        let market = Market::fit([0.0, -1.0]);
        assert_eq!([0.0, 0.0], market.probs);
        assert_eq!(0.0, market.overround);
    }

    #[test]
    fn frame_is_the_reciprocal() {
        let market = Market::frame([0.4, 0.6]);
        assert_float_relative_eq!(2.5, market.prices[0]);
        assert_float_relative_eq!(1.6666666666666667, market.prices[1]);
        assert_eq!(1.0, market.overround);
    }

    #[test]
    fn frame_impossible_outcome() {
        let market = Market::frame([1.0, 0.0]);
        assert_eq!(1.0, market.prices[0]);
        assert_eq!(f64::INFINITY, market.prices[1]);
    }

    #[test]
    fn price_probability_round_trip() {
        for prob in [0.05, 0.25, 0.5, 0.75, 1.0] {
            assert_float_relative_eq!(prob, 1.0 / fair_price(prob));
        }
    }

    #[test]
    #[should_panic(expected = "negative probability")]
    fn negative_probability_fails_fast() {
        fair_price(-0.1);
    }
}
