//! Poisson and zero-inflated Poisson probability mass functions.

use crate::factorial::Factorial;

#[inline]
pub fn univariate(k: u8, lambda: f64, factorial: &impl Factorial) -> f64 {
    lambda.powi(k as i32) * f64::exp(-lambda) / factorial.get(k) as f64
}

/// Poisson pmf mixed with an extra point-mass at zero, weighted by `p_zero`.
/// `p_zero = 0` reduces it to the plain Poisson pmf.
#[inline]
pub fn zero_inflated(k: u8, lambda: f64, p_zero: f64, factorial: &impl Factorial) -> f64 {
    match k {
        0 => p_zero + (1.0 - p_zero) * f64::exp(-lambda),
        _ => (1.0 - p_zero) * univariate(k, lambda, factorial),
    }
}
