//! Repetition runner for timing a single variant.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Invoke `f` `repetitions` times back to back and return the last value
/// together with the wall-clock time of the whole loop.
///
/// `f` always runs at least once, so a value exists even for zero
/// repetitions. Inputs and outputs pass through [`black_box`] so the loop
/// is not folded away. Any setup belongs outside `f`.
pub fn time_repeated<T, F>(repetitions: u64, mut f: F) -> (T, Duration)
where
    F: FnMut() -> T,
{
    let start = Instant::now();
    let mut value = black_box(f());
    for _ in 1..repetitions {
        value = black_box(f());
    }
    (value, start.elapsed())
}
