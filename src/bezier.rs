//! Closed-form evaluation of a cubic Bézier axis.
//!
//! The curve is anchored at (0,0) and (1,1), so for one axis with interior
//! control coordinates `a1` and `a2` the endpoint terms vanish and the
//! cubic reduces to:
//!
//! ```text
//! B(t) = ((A*t + B)*t + C)*t
//! A = 1 - 3*a2 + 3*a1
//! B = 3*a2 - 6*a1
//! C = 3*a1
//! ```

/// Polynomial coefficients of one axis of the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    a: f64,
    b: f64,
    c: f64,
}

impl Axis {
    /// Precompute the coefficients for control coordinates `a1` and `a2`.
    pub fn new(a1: f64, a2: f64) -> Self {
        Self {
            a: 1.0 - 3.0 * a2 + 3.0 * a1,
            b: 3.0 * a2 - 6.0 * a1,
            c: 3.0 * a1,
        }
    }

    /// Value of the axis at `t`.
    #[inline]
    pub fn sample(&self, t: f64) -> f64 {
        ((self.a * t + self.b) * t + self.c) * t
    }

    /// Derivative of the axis at `t`.
    #[inline]
    pub fn slope(&self, t: f64) -> f64 {
        3.0 * self.a * t * t + 2.0 * self.b * t + self.c
    }
}

/// Evaluate the axis with control coordinates `a1`, `a2` at `t`.
#[inline]
pub fn calc_bezier(t: f64, a1: f64, a2: f64) -> f64 {
    Axis::new(a1, a2).sample(t)
}

/// Evaluate `dB/dt` for the axis with control coordinates `a1`, `a2` at `t`.
#[inline]
pub fn get_slope(t: f64, a1: f64, a2: f64) -> f64 {
    Axis::new(a1, a2).slope(t)
}
