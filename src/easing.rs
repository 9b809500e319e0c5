//! The easing function factory.
//!
//! [`CubicBezier`] validates a set of [`ControlPoints`], samples the x axis
//! once, and then maps progress values through the curve on every call to
//! [`CubicBezier::ease`].  [`bezier`] wraps the same thing in a closure.

use crate::bezier::Axis;
use crate::solver;
use crate::table::SampleTable;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// The two interior control points of a curve anchored at (0,0) and (1,1).
///
/// `x1` and `x2` must lie in `[0, 1]` so that x(t) is single-valued.
/// `y1` and `y2` are unconstrained; values outside `[0, 1]` make the curve
/// overshoot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoints {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl ControlPoints {
    /// CSS `linear`.
    pub const LINEAR: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    /// CSS `ease`.
    pub const EASE: Self = Self::new(0.25, 0.1, 0.25, 1.0);
    /// CSS `ease-in`.
    pub const EASE_IN: Self = Self::new(0.42, 0.0, 1.0, 1.0);
    /// CSS `ease-out`.
    pub const EASE_OUT: Self = Self::new(0.0, 0.0, 0.58, 1.0);
    /// CSS `ease-in-out`.
    pub const EASE_IN_OUT: Self = Self::new(0.42, 0.0, 0.58, 1.0);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Whether the control points lie on the diagonal, making the curve the
    /// identity line.
    pub fn is_linear(&self) -> bool {
        self.x1 == self.y1 && self.x2 == self.y2
    }

    /// The curve rotated 180° about (0.5, 0.5).
    ///
    /// For a curve `f` and its mirror `g`, `f(x) == 1 - g(1 - x)`.
    pub fn mirrored(&self) -> Self {
        Self::new(1.0 - self.x2, 1.0 - self.y2, 1.0 - self.x1, 1.0 - self.y1)
    }

    /// Check that both x coordinates lie in `[0, 1]`.
    pub fn validate(&self) -> Result<(), EasingError> {
        for (name, value) in [("x1", self.x1), ("x2", self.x2)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EasingError::InvalidArgument(format!(
                    "bezier {} must be in [0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Error returned when a curve cannot be constructed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EasingError {
    /// A control-point x coordinate lies outside `[0, 1]`.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// A ready-to-use cubic Bézier easing function.
///
/// Construction validates the control points and samples the x axis once;
/// afterwards the value is immutable, so it can be shared freely between
/// threads and called any number of times.
///
/// ```
/// use bezier_easing::CubicBezier;
///
/// let ease = CubicBezier::new(0.42, 0.0, 0.58, 1.0).unwrap();
/// assert_eq!(ease.ease(0.0), 0.0);
/// assert_eq!(ease.ease(1.0), 1.0);
/// assert!((ease.ease(0.5) - 0.5).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CubicBezier {
    points: ControlPoints,
    shape: Shape,
}

#[derive(Debug, Clone, PartialEq)]
enum Shape {
    /// Control points on the diagonal: the mapping is `x ↦ x`.
    Linear,
    Curve {
        x: Axis,
        y: Axis,
        table: SampleTable,
    },
}

impl CubicBezier {
    /// Build an easing function from the interior control points
    /// `(x1, y1)` and `(x2, y2)`.
    ///
    /// Fails with [`EasingError::InvalidArgument`] if `x1` or `x2` is
    /// outside `[0, 1]`.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, EasingError> {
        Self::from_points(ControlPoints::new(x1, y1, x2, y2))
    }

    /// Build an easing function from a [`ControlPoints`] value.
    pub fn from_points(points: ControlPoints) -> Result<Self, EasingError> {
        if let Err(e) = points.validate() {
            warn!("rejected curve {:?}: {}", points, e);
            return Err(e);
        }
        Ok(Self::build(points))
    }

    /// Construct without validation.  Only for points known to be valid.
    fn build(points: ControlPoints) -> Self {
        let shape = if points.is_linear() {
            debug!("curve {:?} is linear, skipping sample table", points);
            Shape::Linear
        } else {
            let x = Axis::new(points.x1, points.x2);
            let table = SampleTable::from_axis(&x);
            debug!("built sample table for curve {:?}", points);
            Shape::Curve {
                x,
                y: Axis::new(points.y1, points.y2),
                table,
            }
        };
        Self { points, shape }
    }

    /// CSS `linear`.
    pub fn linear() -> Self {
        Self::build(ControlPoints::LINEAR)
    }

    /// CSS `ease`.
    pub fn ease_default() -> Self {
        Self::build(ControlPoints::EASE)
    }

    /// CSS `ease-in`.
    pub fn ease_in() -> Self {
        Self::build(ControlPoints::EASE_IN)
    }

    /// CSS `ease-out`.
    pub fn ease_out() -> Self {
        Self::build(ControlPoints::EASE_OUT)
    }

    /// CSS `ease-in-out`.
    pub fn ease_in_out() -> Self {
        Self::build(ControlPoints::EASE_IN_OUT)
    }

    /// The control points this curve was built from.
    pub fn control_points(&self) -> ControlPoints {
        self.points
    }

    /// Whether this curve is the identity line.
    pub fn is_linear(&self) -> bool {
        matches!(self.shape, Shape::Linear)
    }

    /// The point-symmetric curve, see [`ControlPoints::mirrored`].
    pub fn mirrored(&self) -> Self {
        // Mirroring keeps x coordinates inside [0, 1].
        Self::build(self.points.mirrored())
    }

    /// Map progress `x` through the curve.
    ///
    /// `0.0` and `1.0` map exactly to themselves.  Inputs outside `[0, 1]`
    /// are not clamped; the result is extrapolated from the edge of the
    /// curve.
    pub fn ease(&self, x: f64) -> f64 {
        match &self.shape {
            Shape::Linear => x,
            Shape::Curve { x: x_axis, y, table } => {
                if x == 0.0 {
                    0.0
                } else if x == 1.0 {
                    1.0
                } else {
                    y.sample(solver::solve_t_for_x(x, x_axis, table))
                }
            }
        }
    }

    /// The curve parameter `t` at which x(t) equals `x`.
    ///
    /// For the identity line `t == x`.
    pub fn solve_t_for_x(&self, x: f64) -> f64 {
        match &self.shape {
            Shape::Linear => x,
            Shape::Curve { x: x_axis, table, .. } => {
                if x == 0.0 {
                    0.0
                } else if x == 1.0 {
                    1.0
                } else {
                    solver::solve_t_for_x(x, x_axis, table)
                }
            }
        }
    }

    /// x(t) for this curve.
    pub fn x_at(&self, t: f64) -> f64 {
        match &self.shape {
            Shape::Linear => t,
            Shape::Curve { x, .. } => x.sample(t),
        }
    }
}

impl Default for CubicBezier {
    /// CSS `ease`, the default timing function.
    fn default() -> Self {
        Self::ease_default()
    }
}

/// Build an easing closure from the interior control points.
///
/// This is the functional form of [`CubicBezier::new`]: the returned
/// closure owns the sampled curve and can be called repeatedly, or cloned
/// and sent to other threads.
///
/// ```
/// let f = bezier_easing::bezier(0.0, 0.0, 1.0, 1.0).unwrap();
/// assert_eq!(f(0.3), 0.3);
/// ```
pub fn bezier(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
) -> Result<impl Fn(f64) -> f64 + Clone + Send + Sync + 'static, EasingError> {
    let curve = CubicBezier::new(x1, y1, x2, y2)?;
    Ok(move |x: f64| curve.ease(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn grid() -> impl Iterator<Item = f64> {
        (0..=100).map(|i| i as f64 / 100.0)
    }

    #[test]
    fn endpoints_are_exact() {
        init_logger();
        let curves = [
            ControlPoints::EASE,
            ControlPoints::EASE_IN,
            ControlPoints::EASE_OUT,
            ControlPoints::EASE_IN_OUT,
            ControlPoints::new(0.68, -0.55, 0.265, 1.55),
            ControlPoints::new(1.0, 0.0, 0.0, 1.0),
        ];
        for points in curves {
            let c = CubicBezier::from_points(points).unwrap();
            assert_eq!(c.ease(0.0), 0.0, "{:?}", points);
            assert_eq!(c.ease(1.0), 1.0, "{:?}", points);
        }
    }

    #[test]
    fn diagonal_points_are_identity() {
        init_logger();
        for &(a, b) in &[(0.0, 1.0), (0.3, 0.3), (0.5, 0.9), (1.0, 0.0)] {
            let c = CubicBezier::new(a, a, b, b).unwrap();
            assert!(c.is_linear());
            for x in grid() {
                assert_eq!(c.ease(x), x);
            }
            // Out-of-range input is passed through too.
            assert_eq!(c.ease(-0.5), -0.5);
            assert_eq!(c.ease(1.7), 1.7);
        }
    }

    #[test]
    fn linear_curve_bypasses_solver() {
        let f = bezier(0.0, 0.0, 1.0, 1.0).unwrap();
        assert_eq!(f(0.3), 0.3);
        assert_eq!(f(0.73), 0.73);
    }

    #[test]
    fn ease_in_out_scenario() {
        init_logger();
        let f = bezier(0.42, 0.0, 0.58, 1.0).unwrap();
        assert_eq!(f(0.0), 0.0);
        assert_eq!(f(1.0), 1.0);
        assert!((f(0.5) - 0.5).abs() < 1e-3);
        assert!(f(0.1) < 0.1);
        assert!(f(0.9) > 0.9);
    }

    #[test]
    fn rejects_x_outside_unit_interval() {
        init_logger();
        let err = CubicBezier::new(-0.1, 0.0, 0.5, 1.0).unwrap_err();
        assert!(matches!(err, EasingError::InvalidArgument(_)));
        assert!(err.to_string().contains("x1"));

        let err = CubicBezier::new(0.5, 0.0, 1.1, 1.0).unwrap_err();
        assert!(matches!(err, EasingError::InvalidArgument(_)));
        assert!(err.to_string().contains("x2"));

        assert!(bezier(0.5, 0.0, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn accepts_any_y() {
        assert!(CubicBezier::new(0.5, -10.0, 0.5, 10.0).is_ok());
        assert!(CubicBezier::new(0.0, 100.0, 1.0, -100.0).is_ok());
    }

    #[test]
    fn monotonic_when_y_in_unit_interval() {
        let curves = [
            ControlPoints::EASE,
            ControlPoints::EASE_IN,
            ControlPoints::EASE_OUT,
            ControlPoints::EASE_IN_OUT,
            ControlPoints::new(0.1, 0.7, 0.9, 0.3),
        ];
        for points in curves {
            let c = CubicBezier::from_points(points).unwrap();
            let mut prev = c.ease(0.0);
            for x in grid().skip(1) {
                let y = c.ease(x);
                assert!(y >= prev - 1e-12, "{:?} decreased at x={}", points, x);
                prev = y;
            }
        }
    }

    #[test]
    fn overshoot_curves_leave_unit_interval() {
        // Not asserted monotonic: the y control points pull the curve
        // below 0 and above 1.
        let c = CubicBezier::new(0.68, -0.55, 0.265, 1.55).unwrap();
        let ys: Vec<f64> = grid().map(|x| c.ease(x)).collect();
        assert!(ys.iter().any(|&y| y < 0.0));
        assert!(ys.iter().any(|&y| y > 1.0));
    }

    #[test]
    fn mirrored_curve_is_point_symmetric() {
        let curves = [
            ControlPoints::EASE_IN_OUT,
            ControlPoints::EASE,
            ControlPoints::new(0.3, 0.2, 0.6, 0.9),
        ];
        for points in curves {
            let f = CubicBezier::from_points(points).unwrap();
            let g = f.mirrored();
            for i in 1..10 {
                let x = i as f64 / 10.0;
                let lhs = f.ease(x);
                let rhs = 1.0 - g.ease(1.0 - x);
                assert!((lhs - rhs).abs() < 1e-6, "{:?} x={}: {} vs {}", points, x, lhs, rhs);
            }
        }
    }

    #[test]
    fn ease_in_out_is_its_own_mirror() {
        let m = ControlPoints::EASE_IN_OUT.mirrored();
        let p = ControlPoints::EASE_IN_OUT;
        for (a, b) in [(m.x1, p.x1), (m.y1, p.y1), (m.x2, p.x2), (m.y2, p.y2)] {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn solved_parameter_maps_back_to_x() {
        let curves = [
            ControlPoints::EASE,
            ControlPoints::EASE_IN,
            ControlPoints::EASE_OUT,
            ControlPoints::EASE_IN_OUT,
        ];
        for points in curves {
            let c = CubicBezier::from_points(points).unwrap();
            for x in grid().filter(|&x| (0.05..=0.95).contains(&x)) {
                let t = c.solve_t_for_x(x);
                assert!((c.x_at(t) - x).abs() <= 1e-6, "{:?} x={}", points, x);
            }
            assert_eq!(c.solve_t_for_x(0.0), 0.0);
            assert_eq!(c.solve_t_for_x(1.0), 1.0);
        }
    }

    #[test]
    fn control_points_serde_uses_named_fields() {
        let json = serde_json::to_string(&ControlPoints::EASE).unwrap();
        assert_eq!(json, r#"{"x1":0.25,"y1":0.1,"x2":0.25,"y2":1.0}"#);
        let back: ControlPoints = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ControlPoints::EASE);
        assert!(serde_json::from_str::<ControlPoints>(r#"{"x1":0,"y1":0}"#).is_err());
    }

    #[test]
    fn presets_match_control_points() {
        assert!(CubicBezier::linear().is_linear());
        assert_eq!(CubicBezier::default().control_points(), ControlPoints::EASE);
        assert_eq!(CubicBezier::ease_in().control_points(), ControlPoints::EASE_IN);
        assert_eq!(CubicBezier::ease_out().control_points(), ControlPoints::EASE_OUT);
        assert_eq!(CubicBezier::ease_in_out().control_points(), ControlPoints::EASE_IN_OUT);
    }

    #[test]
    fn closure_is_shareable_across_threads() {
        let f = bezier(0.25, 0.1, 0.25, 1.0).unwrap();
        let expected = f(0.4);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let f = f.clone();
                std::thread::spawn(move || f(0.4))
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    }
}
