//! Utilities for working with probabilities.

pub trait SliceExt {
    fn sum(&self) -> f64;

    /// Rescales the slice so it sums to `target`, returning the sum prior to
    /// scaling. A non-positive sum leaves the slice untouched; an all-zero
    /// pair carries no signal and must stay that way.
    fn normalise(&mut self, target: f64) -> f64;

    fn scale(&mut self, factor: f64);
}
impl SliceExt for [f64] {
    fn sum(&self) -> f64 {
        self.iter().sum()
    }

    fn normalise(&mut self, target: f64) -> f64 {
        let sum = self.sum();
        if sum > 0.0 {
            self.scale(target / sum);
        }
        sum
    }

    fn scale(&mut self, factor: f64) {
        for element in self {
            *element *= factor;
        }
    }
}
