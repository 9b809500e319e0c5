//! Textual and serialized curve definitions.
//!
//! A [`CurveSpec`] accepts the same vocabulary as CSS timing functions:
//!
//! * keywords: `linear`, `ease`, `ease-in`, `ease-out`, `ease-in-out`
//!   (case-insensitive; `EaseInOut` and `ease_in_out` work too),
//! * the function form `cubic-bezier(x1, y1, x2, y2)`.
//!
//! When deserializing, a JSON array `[x1, y1, x2, y2]` or an object
//! `{"x1": …, "y1": …, "x2": …, "y2": …}` is accepted as well.  Serializing
//! always produces the string form.

use crate::easing::{ControlPoints, CubicBezier, EasingError};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Named CSS timing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Keyword {
    /// The control points the keyword stands for.
    pub fn control_points(self) -> ControlPoints {
        match self {
            Keyword::Linear => ControlPoints::LINEAR,
            Keyword::Ease => ControlPoints::EASE,
            Keyword::EaseIn => ControlPoints::EASE_IN,
            Keyword::EaseOut => ControlPoints::EASE_OUT,
            Keyword::EaseInOut => ControlPoints::EASE_IN_OUT,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Keyword::Linear => write!(f, "linear"),
            Keyword::Ease => write!(f, "ease"),
            Keyword::EaseIn => write!(f, "ease-in"),
            Keyword::EaseOut => write!(f, "ease-out"),
            Keyword::EaseInOut => write!(f, "ease-in-out"),
        }
    }
}

/// Parse a keyword (case-insensitive; words may be joined by `-`, `_` or
/// nothing, so "ease-in", "ease_in" and "EaseIn" are all accepted).
fn parse_keyword(s: &str) -> Option<Keyword> {
    let normalized = s.trim().to_lowercase().replace('_', "-");
    match normalized.as_str() {
        "linear" => Some(Keyword::Linear),
        "ease" => Some(Keyword::Ease),
        "ease-in" | "easein" => Some(Keyword::EaseIn),
        "ease-out" | "easeout" => Some(Keyword::EaseOut),
        "ease-in-out" | "easeinout" => Some(Keyword::EaseInOut),
        _ => None,
    }
}

/// A curve given either by keyword or by explicit control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveSpec {
    Keyword(Keyword),
    CubicBezier(ControlPoints),
}

impl CurveSpec {
    /// The control points this spec describes.  Not validated.
    pub fn control_points(&self) -> ControlPoints {
        match self {
            CurveSpec::Keyword(k) => k.control_points(),
            CurveSpec::CubicBezier(p) => *p,
        }
    }

    /// Validate the control points and build the easing function.
    pub fn build(&self) -> Result<CubicBezier, EasingError> {
        CubicBezier::from_points(self.control_points())
    }
}

impl From<Keyword> for CurveSpec {
    fn from(k: Keyword) -> Self {
        CurveSpec::Keyword(k)
    }
}

impl From<ControlPoints> for CurveSpec {
    fn from(p: ControlPoints) -> Self {
        CurveSpec::CubicBezier(p)
    }
}

impl fmt::Display for CurveSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveSpec::Keyword(k) => write!(f, "{}", k),
            CurveSpec::CubicBezier(p) => {
                write!(f, "cubic-bezier({}, {}, {}, {})", p.x1, p.y1, p.x2, p.y2)
            }
        }
    }
}

/// Error from parsing a curve definition.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveParseError {
    #[error("unknown timing function: {0:?}")]
    UnknownKeyword(String),
    #[error("malformed cubic-bezier(): {0:?}")]
    Syntax(String),
    #[error("cubic-bezier() expects 4 numbers, got {0}")]
    Arity(usize),
    #[error("invalid number in cubic-bezier(): {0:?}")]
    Number(String),
}

const FUNCTION_NAME: &str = "cubic-bezier";

impl FromStr for CurveSpec {
    type Err = CurveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let is_function = trimmed
            .get(..FUNCTION_NAME.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(FUNCTION_NAME));
        if !is_function {
            return parse_keyword(trimmed)
                .map(CurveSpec::Keyword)
                .ok_or_else(|| CurveParseError::UnknownKeyword(trimmed.to_string()));
        }

        let args = trimmed[FUNCTION_NAME.len()..]
            .trim_start()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| CurveParseError::Syntax(trimmed.to_string()))?;

        let numbers = args
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<f64>()
                    .map_err(|_| CurveParseError::Number(part.to_string()))
            })
            .collect::<Result<Vec<f64>, _>>()?;

        match *numbers.as_slice() {
            [x1, y1, x2, y2] => Ok(CurveSpec::CubicBezier(ControlPoints::new(x1, y1, x2, y2))),
            _ => Err(CurveParseError::Arity(numbers.len())),
        }
    }
}

impl Serialize for CurveSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CurveSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Visitor;
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = CurveSpec;
            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    "a timing-function string, an array [x1, y1, x2, y2] or an object {{x1, y1, x2, y2}}"
                )
            }
            fn visit_str<E>(self, s: &str) -> Result<CurveSpec, E>
            where
                E: DeError,
            {
                s.parse().map_err(DeError::custom)
            }
            fn visit_seq<A>(self, mut seq: A) -> Result<CurveSpec, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut n = [0.0; 4];
                for (i, slot) in n.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| DeError::invalid_length(i, &self))?;
                }
                if seq.next_element::<serde::de::IgnoredAny>()?.is_some() {
                    return Err(DeError::invalid_length(5, &self));
                }
                Ok(CurveSpec::CubicBezier(ControlPoints::new(n[0], n[1], n[2], n[3])))
            }
            fn visit_map<A>(self, mut map: A) -> Result<CurveSpec, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let (mut x1, mut y1, mut x2, mut y2) = (None, None, None, None);
                fn set<'de, A>(
                    slot: &mut Option<f64>,
                    field: &'static str,
                    map: &mut A,
                ) -> Result<(), A::Error>
                where
                    A: serde::de::MapAccess<'de>,
                {
                    if slot.is_some() {
                        return Err(DeError::duplicate_field(field));
                    }
                    *slot = Some(map.next_value()?);
                    Ok(())
                }
                while let Some(k) = map.next_key::<String>()? {
                    match k.as_str() {
                        "x1" => set(&mut x1, "x1", &mut map)?,
                        "y1" => set(&mut y1, "y1", &mut map)?,
                        "x2" => set(&mut x2, "x2", &mut map)?,
                        "y2" => set(&mut y2, "y2", &mut map)?,
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }
                Ok(CurveSpec::CubicBezier(ControlPoints::new(
                    x1.ok_or_else(|| DeError::missing_field("x1"))?,
                    y1.ok_or_else(|| DeError::missing_field("y1"))?,
                    x2.ok_or_else(|| DeError::missing_field("x2"))?,
                    y2.ok_or_else(|| DeError::missing_field("y2"))?,
                )))
            }
        }
        deserializer.deserialize_any(V)
    }
}
