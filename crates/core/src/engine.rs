//! The result color engine: origin color plus one transform per component.
//!
//! [`ResultColorEngine`] is the whole session state of one picker. The
//! result color and CSS string are derived from it on every read and never
//! stored. Each picker instance owns its own engine; nothing is shared.

use std::ops::Index;

use crate::color::{OklchColor, OklchComponent};
use crate::css;
use crate::error::PickerError;
use crate::plane::GradientPlane;
use crate::preset::Preset;
use crate::transform::{compute, normalize_component, to_absolute, to_relative, Transform};
use log::debug;
use serde::{Deserialize, Serialize};

/// The active transform for each of the four components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transforms {
    #[serde(default = "default_l")]
    pub l: Transform,
    #[serde(default = "default_c")]
    pub c: Transform,
    #[serde(default = "default_h")]
    pub h: Transform,
    #[serde(default = "default_a")]
    pub a: Transform,
}

fn default_l() -> Transform {
    OklchComponent::L.default_transform()
}

fn default_c() -> Transform {
    OklchComponent::C.default_transform()
}

fn default_h() -> Transform {
    OklchComponent::H.default_transform()
}

fn default_a() -> Transform {
    OklchComponent::A.default_transform()
}

impl Default for Transforms {
    fn default() -> Self {
        Self {
            l: default_l(),
            c: default_c(),
            h: default_h(),
            a: default_a(),
        }
    }
}

impl Transforms {
    pub fn get(&self, component: OklchComponent) -> Transform {
        self[component]
    }

    pub fn set(&mut self, component: OklchComponent, transform: Transform) {
        let slot = match component {
            OklchComponent::L => &mut self.l,
            OklchComponent::C => &mut self.c,
            OklchComponent::H => &mut self.h,
            OklchComponent::A => &mut self.a,
        };
        *slot = transform;
    }
}

impl Index<OklchComponent> for Transforms {
    type Output = Transform;

    fn index(&self, component: OklchComponent) -> &Transform {
        match component {
            OklchComponent::L => &self.l,
            OklchComponent::C => &self.c,
            OklchComponent::H => &self.h,
            OklchComponent::A => &self.a,
        }
    }
}

/// Session state of one picker: the origin color and the four transforms.
///
/// The derived values ([`result_color`](Self::result_color),
/// [`to_css`](Self::to_css)) are recomputed from this state on each call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultColorEngine {
    origin: OklchColor,
    #[serde(default)]
    transforms: Transforms,
}

impl Default for ResultColorEngine {
    /// Starts from the default preset with identity transforms.
    fn default() -> Self {
        Self::new(Preset::default().color)
    }
}

impl ResultColorEngine {
    /// Creates an engine with identity transforms on every component.
    pub fn new(origin: OklchColor) -> Self {
        Self {
            origin,
            transforms: Transforms::default(),
        }
    }

    /// Loads a session from JSON of the form
    /// `{"origin": {...}, "transforms": {"l": {...}, ...}}`.
    ///
    /// Missing transforms fall back to the component default.
    pub fn from_json(json: &str) -> Result<Self, PickerError> {
        serde_json::from_str(json).map_err(|e| PickerError::InvalidSession(e.to_string()))
    }

    /// Serializes the session state as pretty JSON.
    pub fn to_json(&self) -> Result<String, PickerError> {
        serde_json::to_string_pretty(self).map_err(|e| PickerError::InvalidSession(e.to_string()))
    }

    pub fn origin(&self) -> OklchColor {
        self.origin
    }

    pub fn transforms(&self) -> &Transforms {
        &self.transforms
    }

    pub fn transform(&self, component: OklchComponent) -> Transform {
        self.transforms[component]
    }

    /// Replaces the origin. Transforms are kept, so relative ones re-base
    /// onto the new origin immediately.
    pub fn set_origin_color(&mut self, color: OklchColor) {
        debug!("origin {} -> {}", self.origin, color);
        self.origin = color;
    }

    /// Replaces one component's transform.
    pub fn set_transform(&mut self, component: OklchComponent, transform: Transform) {
        debug!(
            "transform {component}: {} -> {transform}",
            self.transforms[component]
        );
        self.transforms.set(component, transform);
    }

    /// Restores a component's identity transform (`Multiply(1)` / `Add(0)`).
    pub fn reset_component(&mut self, component: OklchComponent) {
        self.set_transform(component, component.default_transform());
    }

    /// Switches a component between absolute and relative form without
    /// changing its result value.
    pub fn toggle_component(&mut self, component: OklchComponent) {
        let current = self.transforms[component];
        let origin = self.origin.get(component);
        let next = match current {
            Transform::Absolute(value) => to_relative(component, origin, value),
            relative => to_absolute(component, origin, relative),
        };
        debug!("toggle {component}: {current} -> {next}");
        self.transforms.set(component, next);
    }

    /// Drives a component to a target result value, keeping its form.
    ///
    /// A pinned (absolute) component stores the value as-is; a relative
    /// one stores the transform that maps the origin onto it.
    pub fn set_component_value(&mut self, component: OklchComponent, value: f64) {
        let next = if self.transforms[component].is_absolute() {
            Transform::Absolute(value)
        } else {
            to_relative(component, self.origin.get(component), value)
        };
        self.set_transform(component, next);
    }

    /// Picks chroma and lightness from a position on the gradient plane.
    ///
    /// The position is clamped into the plane first.
    pub fn pick(&mut self, plane: &GradientPlane, x: f64, y: f64) {
        let (lightness, chroma) = plane.lightness_chroma_at(x, y);
        self.set_component_value(OklchComponent::C, chroma);
        self.set_component_value(OklchComponent::L, lightness);
    }

    /// One component of the result color.
    pub fn result_component(&self, component: OklchComponent) -> f64 {
        normalize_component(
            component,
            compute(
                self.origin.get(component),
                self.transforms[component],
                None,
            ),
        )
    }

    /// The result color: each component normalized after its transform.
    pub fn result_color(&self) -> OklchColor {
        OklchColor {
            l: self.result_component(OklchComponent::L),
            c: self.result_component(OklchComponent::C),
            h: self.result_component(OklchComponent::H),
            a: self.result_component(OklchComponent::A),
        }
    }

    /// CSS relative color expression for the current state.
    pub fn to_css(&self) -> String {
        css::relative_color(&self.origin, &self.transforms)
    }

    /// The preset whose color equals the origin, if any.
    pub fn origin_preset(&self) -> Option<&'static Preset> {
        Preset::matching(&self.origin)
    }
}
