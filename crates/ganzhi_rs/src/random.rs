//! Injectable randomness for random-number charts.

use rand::{Rng, RngCore};

/// Lowest and highest number a random-number chart accepts.
pub const RANDOM_NUMBER_RANGE: (u32, u32) = (1, 12);

/// Draws integers in an inclusive range.
///
/// Any [`rand::RngCore`] is a source; tests can pass a fixed sequence.
pub trait RandomSource {
    /// A value between `low` and `high` inclusive. The bounds may arrive in
    /// either order and must not panic when `low > high`.
    fn draw(&mut self, low: u32, high: u32) -> u32;
}

impl<R: RngCore> RandomSource for R {
    fn draw(&mut self, low: u32, high: u32) -> u32 {
        self.gen_range(low.min(high)..=low.max(high))
    }
}

/// Draw a chart number in `1..=12`.
pub fn draw_chart_number(source: &mut (impl RandomSource + ?Sized)) -> u32 {
    let (low, high) = RANDOM_NUMBER_RANGE;
    source.draw(low, high)
}
