//! Built-in catalog of origin colors.
//!
//! Presets are static configuration: named swatches with literal OKLCh
//! values. An origin that matches none of them is a custom color.

use crate::color::OklchColor;
use crate::error::PickerError;

/// A named origin color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    /// Human-readable label, e.g. "Ocean Blue".
    pub label: &'static str,
    /// Kebab-case name used on the command line, e.g. "ocean-blue".
    pub slug: &'static str,
    pub color: OklchColor,
}

const PRESETS: &[Preset] = &[
    Preset {
        label: "Vibrant Purple",
        slug: "vibrant-purple",
        color: OklchColor {
            l: 0.6179,
            c: 0.2114,
            h: 280.67,
            a: 1.0,
        },
    },
    Preset {
        label: "Ocean Blue",
        slug: "ocean-blue",
        color: OklchColor {
            l: 0.5,
            c: 0.15,
            h: 220.0,
            a: 1.0,
        },
    },
    Preset {
        label: "Forest Green",
        slug: "forest-green",
        color: OklchColor {
            l: 0.6,
            c: 0.18,
            h: 142.0,
            a: 1.0,
        },
    },
];

impl Default for Preset {
    /// Vibrant Purple, the picker's starting origin.
    fn default() -> Self {
        PRESETS[0]
    }
}

impl Preset {
    /// All presets in display order.
    pub fn all() -> &'static [Preset] {
        PRESETS
    }

    /// Looks a preset up by slug or label (case insensitive).
    ///
    /// Returns `PickerError::UnknownPreset` if nothing matches.
    pub fn from_name(name: &str) -> Result<&'static Preset, PickerError> {
        let wanted = name.trim();
        PRESETS
            .iter()
            .find(|p| p.slug.eq_ignore_ascii_case(wanted) || p.label.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PickerError::UnknownPreset(name.to_string()))
    }

    /// The preset whose color is exactly `color`, if any.
    pub fn matching(color: &OklchColor) -> Option<&'static Preset> {
        PRESETS.iter().find(|p| p.color == *color)
    }

    /// Slugs of all presets, for listings and help text.
    pub fn list_names() -> Vec<&'static str> {
        PRESETS.iter().map(|p| p.slug).collect()
    }
}
