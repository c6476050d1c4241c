//! Per-component transforms relating a result value to its origin value.
//!
//! A [`Transform`] is either relative to the origin (`Multiply`, `Add`) or
//! replaces it outright (`Absolute`). The functions here apply transforms,
//! normalize results into each component's range, and convert losslessly
//! (up to three decimal places) between the absolute and relative forms.
//! Everything in this module is pure and total.

use std::fmt;
use std::str::FromStr;

use crate::color::OklchComponent;
use crate::error::PickerError;
use serde::{Deserialize, Serialize};

/// Number of decimal places every exposed value is rounded to.
pub const DECIMAL_PLACES: i32 = 3;

/// A component's relationship to its origin value.
///
/// Serializes as `{"type": "multiply", "value": 1.5}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Transform {
    /// result = origin × value
    Multiply(f64),
    /// result = origin + value
    Add(f64),
    /// result = value
    Absolute(f64),
}

/// The variant of a [`Transform`] without its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    Multiply,
    Add,
    Absolute,
}

impl Transform {
    /// Builds a transform of the given kind.
    pub fn new(kind: TransformKind, value: f64) -> Self {
        match kind {
            TransformKind::Multiply => Transform::Multiply(value),
            TransformKind::Add => Transform::Add(value),
            TransformKind::Absolute => Transform::Absolute(value),
        }
    }

    pub fn kind(&self) -> TransformKind {
        match self {
            Transform::Multiply(_) => TransformKind::Multiply,
            Transform::Add(_) => TransformKind::Add,
            Transform::Absolute(_) => TransformKind::Absolute,
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            Transform::Multiply(v) | Transform::Add(v) | Transform::Absolute(v) => v,
        }
    }

    /// Same kind, new number. This is what editing a numeric input does.
    pub fn with_value(self, value: f64) -> Self {
        Transform::new(self.kind(), value)
    }

    pub fn is_absolute(&self) -> bool {
        matches!(self, Transform::Absolute(_))
    }

    /// True for the transforms that leave the origin value untouched
    /// (`Multiply(1)` and `Add(0)`).
    pub fn is_identity(&self) -> bool {
        match *self {
            Transform::Multiply(v) => v == 1.0,
            Transform::Add(v) => v == 0.0,
            Transform::Absolute(_) => false,
        }
    }
}

impl fmt::Display for Transform {
    /// Compact expression form: `*1.5`, `+20`, `-30`, `=45`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Transform::Multiply(v) => write!(f, "*{v}"),
            Transform::Add(v) if v.is_sign_negative() => write!(f, "{v}"),
            Transform::Add(v) => write!(f, "+{v}"),
            Transform::Absolute(v) => write!(f, "={v}"),
        }
    }
}

impl FromStr for Transform {
    type Err = PickerError;

    /// Parses the compact expression form.
    ///
    /// `*x` multiplies, `+x`/`-x` adds, `=x` or a bare `x` is absolute.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parse = |token: &str| {
            token
                .trim()
                .parse::<f64>()
                .map_err(|e| PickerError::InvalidTransform(format!("'{s}': {e}")))
        };
        if let Some(rest) = s.strip_prefix('*') {
            Ok(Transform::Multiply(parse(rest)?))
        } else if let Some(rest) = s.strip_prefix('=') {
            Ok(Transform::Absolute(parse(rest)?))
        } else if s.starts_with('+') || s.starts_with('-') {
            Ok(Transform::Add(parse(s)?))
        } else {
            Ok(Transform::Absolute(parse(s)?))
        }
    }
}

impl OklchComponent {
    /// Relative transform kind used for this component.
    ///
    /// Hue is circular and additive; the others scale.
    pub fn default_kind(self) -> TransformKind {
        match self {
            OklchComponent::H => TransformKind::Add,
            OklchComponent::L | OklchComponent::C | OklchComponent::A => TransformKind::Multiply,
        }
    }

    /// The identity transform of the default kind: `Multiply(1)` or `Add(0)`.
    pub fn default_transform(self) -> Transform {
        match self.default_kind() {
            TransformKind::Add => Transform::Add(0.0),
            _ => Transform::Multiply(1.0),
        }
    }
}

/// Rounds to [`DECIMAL_PLACES`], folding negative zero into zero.
pub fn round_value(value: f64) -> f64 {
    let factor = 10f64.powi(DECIMAL_PLACES);
    (value * factor).round() / factor + 0.0
}

/// Applies the transform's arithmetic without any clamping or rounding.
pub fn compute_raw(origin: f64, transform: Transform) -> f64 {
    match transform {
        Transform::Multiply(v) => origin * v,
        Transform::Add(v) => origin + v,
        Transform::Absolute(v) => v,
    }
}

/// Wraps hue into [0, 360) or clamps other components into their range,
/// then rounds.
pub fn normalize_component(component: OklchComponent, value: f64) -> f64 {
    match component {
        OklchComponent::H => {
            let wrapped = round_value(value.rem_euclid(360.0));
            // 359.9996 rounds up to 360.
            if wrapped >= 360.0 {
                0.0
            } else {
                wrapped
            }
        }
        _ => {
            let (min, max) = component.range();
            round_value(value.clamp(min, max))
        }
    }
}

/// Applies a transform to an origin value.
///
/// With a component the result is normalized; without one it is only
/// rounded, leaving the clamp to the caller.
pub fn compute(origin: f64, transform: Transform, component: Option<OklchComponent>) -> f64 {
    let raw = compute_raw(origin, transform);
    match component {
        Some(component) => normalize_component(component, raw),
        None => round_value(raw),
    }
}

/// Collapses any transform into an `Absolute` holding its normalized result.
pub fn to_absolute(component: OklchComponent, origin: f64, current: Transform) -> Transform {
    Transform::Absolute(compute(origin, current, Some(component)))
}

/// Derives the relative transform (of the component's default kind) that
/// takes `origin` to `absolute`.
///
/// Scale components divide, falling back to `1` when the origin is zero.
/// Hue takes the shortest signed angle, in (-180, 180].
pub fn to_relative(component: OklchComponent, origin: f64, absolute: f64) -> Transform {
    let value = match component {
        OklchComponent::H => round_value(shortest_hue_delta(origin, absolute)),
        OklchComponent::L | OklchComponent::C | OklchComponent::A => {
            if origin != 0.0 {
                round_value(absolute / origin)
            } else {
                1.0
            }
        }
    };
    Transform::new(component.default_kind(), value)
}

/// Signed angular difference `to - from`, normalized into (-180, 180].
///
/// A non-finite difference has no direction and yields 0.
fn shortest_hue_delta(from: f64, to: f64) -> f64 {
    let diff = (to - from).rem_euclid(360.0);
    if !diff.is_finite() {
        0.0
    } else if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}
