//! Precomputed samples of x(t) used to seed the parameter solver.

use crate::bezier::Axis;

/// Number of evenly spaced samples taken along `t ∈ [0, 1]`.
pub const SAMPLE_TABLE_SIZE: usize = 11;

/// Distance in `t` between two adjacent samples.
pub const SAMPLE_STEP_SIZE: f64 = 1.0 / (SAMPLE_TABLE_SIZE as f64 - 1.0);

/// x(t) evaluated at `t = 0.0, 0.1, …, 1.0`.
///
/// The table is built once per curve and never mutated afterwards.  Because
/// the control-point x coordinates lie in `[0, 1]`, the samples are
/// non-decreasing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleTable {
    samples: [f64; SAMPLE_TABLE_SIZE],
}

impl SampleTable {
    /// Sample the x axis of a curve.
    pub fn from_axis(axis: &Axis) -> Self {
        let mut samples = [0.0; SAMPLE_TABLE_SIZE];
        for (i, sample) in samples.iter_mut().enumerate() {
            *sample = axis.sample(i as f64 * SAMPLE_STEP_SIZE);
        }
        Self { samples }
    }

    /// All samples in order of increasing `t`.
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(x1: f64, x2: f64) -> SampleTable {
        SampleTable::from_axis(&Axis::new(x1, x2))
    }

    #[test]
    fn table_has_eleven_samples() {
        assert_eq!(table(0.42, 0.58).as_slice().len(), 11);
    }

    #[test]
    fn first_sample_is_origin() {
        let samples = table(0.25, 0.25);
        let samples = samples.as_slice();
        assert_eq!(samples[0], 0.0);
        assert!((samples[10] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn samples_match_curve() {
        let axis = Axis::new(0.0, 0.58);
        let table = SampleTable::from_axis(&axis);
        for (i, &s) in table.as_slice().iter().enumerate() {
            assert_eq!(s, axis.sample(i as f64 * SAMPLE_STEP_SIZE));
        }
    }

    #[test]
    fn samples_are_non_decreasing() {
        for &(x1, x2) in &[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.42, 0.58), (0.68, 0.265)] {
            let t = table(x1, x2);
            for w in t.as_slice().windows(2) {
                assert!(w[1] >= w[0], "{:?} not sorted for ({}, {})", t, x1, x2);
            }
        }
    }

    #[test]
    fn step_is_one_tenth() {
        assert!((SAMPLE_STEP_SIZE - 0.1).abs() < 1e-15);
    }
}
