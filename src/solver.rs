//! Inversion of x(t): find the curve parameter `t` for a target `x`.
//!
//! The sample table narrows the search to one interval of width
//! [`SAMPLE_STEP_SIZE`], a linear interpolation inside that interval gives
//! the first guess, and the guess is then refined:
//!
//! | Slope at the guess      | Refinement                              |
//! |-------------------------|-----------------------------------------|
//! | `>= NEWTON_MIN_SLOPE`   | [`NEWTON_ITERATIONS`] Newton-Raphson steps |
//! | `== 0.0`                | none, the guess is returned as-is       |
//! | otherwise               | bisection over the sampled interval     |
//!
//! Newton-Raphson converges quickly but is unstable where the curve is
//! nearly flat, which is exactly where bisection takes over.

use crate::bezier::Axis;
use crate::table::{SampleTable, SAMPLE_STEP_SIZE, SAMPLE_TABLE_SIZE};
use log::trace;

/// Fixed number of Newton-Raphson steps.
pub const NEWTON_ITERATIONS: usize = 4;
/// Smallest slope at which Newton-Raphson is trusted.
pub const NEWTON_MIN_SLOPE: f64 = 0.001;
/// Bisection stops once `|x(t) - x|` is within this distance.
pub const SUBDIVISION_PRECISION: f64 = 0.000_000_1;
/// Upper bound on bisection steps.
pub const SUBDIVISION_MAX_ITERATIONS: usize = 10;

/// How the initial guess is refined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refinement {
    /// Well-conditioned: iterate Newton-Raphson.
    Newton,
    /// Zero slope: no gradient to follow, keep the guess.
    Guess,
    /// Nearly flat: bisect the sampled interval.
    Bisection,
}

impl Refinement {
    /// Pick the refinement for the slope of x(t) at the initial guess.
    pub fn for_slope(slope: f64) -> Self {
        if slope >= NEWTON_MIN_SLOPE {
            Refinement::Newton
        } else if slope == 0.0 {
            Refinement::Guess
        } else {
            Refinement::Bisection
        }
    }
}

/// Find `t` such that `axis.sample(t) ≈ x`.
///
/// `x` is expected in `(0, 1)`; the caller handles the exact endpoints.
/// `table` must have been sampled from `axis`.
pub fn solve_t_for_x(x: f64, axis: &Axis, table: &SampleTable) -> f64 {
    let samples = table.as_slice();

    // Largest i (at most N-2) with samples[i] <= x.
    let mut index = 0;
    while index + 2 < SAMPLE_TABLE_SIZE && samples[index + 1] <= x {
        index += 1;
    }
    let interval_start = index as f64 * SAMPLE_STEP_SIZE;

    let dist = (x - samples[index]) / (samples[index + 1] - samples[index]);
    let guess = interval_start + dist * SAMPLE_STEP_SIZE;

    let initial_slope = axis.slope(guess);
    let refinement = Refinement::for_slope(initial_slope);
    trace!(
        "x={} interval={} guess={} slope={} -> {:?}",
        x,
        index,
        guess,
        initial_slope,
        refinement
    );

    match refinement {
        Refinement::Newton => newton_raphson_iterate(x, guess, axis),
        Refinement::Guess => guess,
        Refinement::Bisection => {
            binary_subdivide(x, interval_start, interval_start + SAMPLE_STEP_SIZE, axis)
        }
    }
}

fn newton_raphson_iterate(x: f64, mut t: f64, axis: &Axis) -> f64 {
    for _ in 0..NEWTON_ITERATIONS {
        let slope = axis.slope(t);
        if slope == 0.0 {
            return t;
        }
        let current_x = axis.sample(t) - x;
        t -= current_x / slope;
    }
    t
}

fn binary_subdivide(x: f64, mut lo: f64, mut hi: f64, axis: &Axis) -> f64 {
    let mut t = lo;
    for _ in 0..SUBDIVISION_MAX_ITERATIONS {
        t = lo + (hi - lo) / 2.0;
        let current_x = axis.sample(t) - x;
        if current_x > 0.0 {
            hi = t;
        } else {
            lo = t;
        }
        if current_x.abs() <= SUBDIVISION_PRECISION {
            break;
        }
    }
    t
}
