//! **bezier-easing** — CSS-like cubic Bézier easing functions.
//!
//! A curve is anchored at (0,0) and (1,1) and shaped by two interior control
//! points `(x1, y1)` and `(x2, y2)`, exactly like CSS `cubic-bezier()`.  The
//! resulting easing function maps progress `x ∈ [0, 1]` to the curve's `y`
//! at the same `x`.
//!
//! ```
//! let ease_in_out = bezier_easing::bezier(0.42, 0.0, 0.58, 1.0).unwrap();
//! assert!(ease_in_out(0.1) < 0.1);
//! assert!((ease_in_out(0.5) - 0.5).abs() < 1e-3);
//! ```
//!
//! # Architecture
//!
//! * [`bezier`](mod@bezier) — closed-form evaluation of one axis and its slope.
//! * [`table`] — x(t) sampled at eleven points, built once per curve.
//! * [`solver`] — inverts x(t): table lookup for a coarse interval, then
//!   Newton-Raphson, or bisection where the curve is nearly flat.
//! * [`easing`] — validation and the [`CubicBezier`] / [`bezier()`] factory.
//! * [`curve`] and [`config`] — curves written as CSS strings or JSON.

pub mod bezier;
pub mod config;
pub mod curve;
pub mod easing;
pub mod solver;
pub mod table;

pub use config::{Config, ConfigError};
pub use curve::{CurveParseError, CurveSpec, Keyword};
pub use easing::{bezier, ControlPoints, CubicBezier, EasingError};
