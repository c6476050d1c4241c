//! Color types and conversion functions for the picker.
//!
//! Provides the session color type [`OklchColor`] (OKLCh plus alpha), its
//! component tag [`OklchComponent`], and the forward conversion chain
//! OKLCh -> OKLab -> linear RGB -> sRGB used to paint the gradient plane.
//! All conversions are pure functions. Uses `f64` throughout for precision.

use std::fmt;
use std::str::FromStr;

use crate::error::PickerError;
use serde::{Deserialize, Serialize};

/// sRGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Linear RGB color (gamma-decoded).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// OKLab perceptual color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// OKLCh (cylindrical form of OKLab), without alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

/// An OKLCh color with alpha, as held by the picker session.
///
/// `l` is lightness in [0, 1], `c` chroma in [0, 0.4] by convention, `h` hue
/// in degrees and `a` alpha in [0, 1]. Values are snapshots: every
/// recomputation produces a new instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OklchColor {
    pub l: f64,
    pub c: f64,
    pub h: f64,
    pub a: f64,
}

/// Tag selecting one of the four channels of an [`OklchColor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OklchComponent {
    L,
    C,
    H,
    A,
}

impl OklchComponent {
    /// All four components in channel order.
    pub const ALL: [OklchComponent; 4] = [
        OklchComponent::L,
        OklchComponent::C,
        OklchComponent::H,
        OklchComponent::A,
    ];

    /// Declared `(min, max)` range of the component.
    ///
    /// Hue is circular: its range is only used for slider bounds, results
    /// are wrapped rather than clamped.
    pub fn range(self) -> (f64, f64) {
        match self {
            OklchComponent::L => (0.0, 1.0),
            OklchComponent::C => (0.0, 0.4),
            OklchComponent::H => (0.0, 360.0),
            OklchComponent::A => (0.0, 1.0),
        }
    }

    /// Channel keyword used inside CSS relative color syntax.
    ///
    /// Alpha is spelled `alpha`, not `a`.
    pub fn css_name(self) -> &'static str {
        match self {
            OklchComponent::L => "l",
            OklchComponent::C => "c",
            OklchComponent::H => "h",
            OklchComponent::A => "alpha",
        }
    }

    /// Short name, as used in session JSON and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            OklchComponent::L => "l",
            OklchComponent::C => "c",
            OklchComponent::H => "h",
            OklchComponent::A => "a",
        }
    }
}

impl fmt::Display for OklchComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OklchComponent {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "lightness" => Ok(OklchComponent::L),
            "c" | "chroma" => Ok(OklchComponent::C),
            "h" | "hue" => Ok(OklchComponent::H),
            "a" | "alpha" => Ok(OklchComponent::A),
            _ => Err(PickerError::UnknownComponent(s.to_string())),
        }
    }
}

impl OklchColor {
    pub fn new(l: f64, c: f64, h: f64, a: f64) -> Self {
        Self { l, c, h, a }
    }

    /// Reads one channel.
    pub fn get(&self, component: OklchComponent) -> f64 {
        match component {
            OklchComponent::L => self.l,
            OklchComponent::C => self.c,
            OklchComponent::H => self.h,
            OklchComponent::A => self.a,
        }
    }

    /// Returns a copy with one channel replaced.
    pub fn with(self, component: OklchComponent, value: f64) -> Self {
        let mut next = self;
        match component {
            OklchComponent::L => next.l = value,
            OklchComponent::C => next.c = value,
            OklchComponent::H => next.h = value,
            OklchComponent::A => next.a = value,
        }
        next
    }

    /// Drops alpha.
    pub fn lch(&self) -> OkLch {
        OkLch {
            l: self.l,
            c: self.c,
            h: self.h,
        }
    }

    /// Displayable sRGB approximation of the color (alpha ignored, gamut clipped).
    pub fn to_srgb(&self) -> Srgb {
        oklch_to_srgb(self.lch())
    }
}

impl fmt::Display for OklchColor {
    /// Formats as the CSS color `oklch(<L> <C> <H> / <A>)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({} {} {} / {})", self.l, self.c, self.h, self.a)
    }
}

impl FromStr for OklchColor {
    type Err = PickerError;

    /// Parses `oklch(L C H)` or `oklch(L C H / A)`.
    ///
    /// Lightness and alpha accept a `%` suffix, hue accepts `deg`. The
    /// `oklch(...)` wrapper itself is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let body = match lower.strip_prefix("oklch(") {
            Some(rest) => rest
                .strip_suffix(')')
                .ok_or_else(|| PickerError::InvalidColor(format!("unclosed oklch(): {s}")))?,
            None => lower.as_str(),
        };

        let (channels, alpha) = match body.split_once('/') {
            Some((channels, alpha)) => (channels, Some(alpha.trim())),
            None => (body, None),
        };

        let parts: Vec<&str> = channels.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(PickerError::InvalidColor(format!(
                "expected 3 channels, got {}",
                parts.len()
            )));
        }

        let l = parse_unit_or_percent(parts[0], "lightness")?;
        let c = parse_number(parts[1], "chroma")?;
        let h = parse_number(parts[2].strip_suffix("deg").unwrap_or(parts[2]), "hue")?;
        let a = match alpha {
            Some(token) => parse_unit_or_percent(token, "alpha")?,
            None => 1.0,
        };
        Ok(OklchColor { l, c, h, a })
    }
}

fn parse_number(token: &str, what: &str) -> Result<f64, PickerError> {
    token
        .parse::<f64>()
        .map_err(|e| PickerError::InvalidColor(format!("invalid {what} '{token}': {e}")))
}

fn parse_unit_or_percent(token: &str, what: &str) -> Result<f64, PickerError> {
    match token.strip_suffix('%') {
        Some(pct) => parse_number(pct, what).map(|v| v / 100.0),
        None => parse_number(token, what),
    }
}

impl Srgb {
    /// Converts the color to a hex string like `"#rrggbb"`.
    ///
    /// Components are quantized to 8-bit (0–255) with rounding.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Scales each channel to 0–255 with rounding, clamping out-of-range input.
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }
}

/// Applies sRGB gamma to convert a single linear component to sRGB.
pub fn linear_component_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Converts linear RGB to sRGB by applying sRGB gamma per channel.
pub fn linear_to_srgb(c: LinearRgb) -> Srgb {
    Srgb {
        r: linear_component_to_srgb(c.r),
        g: linear_component_to_srgb(c.g),
        b: linear_component_to_srgb(c.b),
    }
}

/// Converts OKLab to linear RGB: OKLab -> LMS', cube, LMS -> linear sRGB.
pub fn oklab_to_linear(c: OkLab) -> LinearRgb {
    let l_ = c.l + 0.3963377774 * c.a + 0.2158037573 * c.b;
    let m_ = c.l - 0.1055613458 * c.a - 0.0638541728 * c.b;
    let s_ = c.l - 0.0894841775 * c.a - 1.2914855480 * c.b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    LinearRgb {
        r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
        g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
        b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
    }
}

/// Converts OKLCh to OKLab (polar to Cartesian, hue in degrees).
pub fn oklch_to_oklab(c: OkLch) -> OkLab {
    let h_rad = c.h.to_radians();
    OkLab {
        l: c.l,
        a: c.c * h_rad.cos(),
        b: c.c * h_rad.sin(),
    }
}

/// OKLCh to sRGB via OKLCh -> OKLab -> linear -> sRGB, hard-clipped to [0, 1].
///
/// Out-of-gamut colors are clipped per channel, not gamut mapped. NaN input
/// propagates.
pub fn oklch_to_srgb(c: OkLch) -> Srgb {
    let srgb = linear_to_srgb(oklab_to_linear(oklch_to_oklab(c)));
    Srgb {
        r: srgb.r.clamp(0.0, 1.0),
        g: srgb.g.clamp(0.0, 1.0),
        b: srgb.b.clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    // -- Gamma encoding --

    #[test]
    fn linear_to_srgb_boundary_at_0_0031308() {
        let boundary = LinearRgb {
            r: 0.0031308,
            g: 0.0,
            b: 0.0,
        };
        let srgb = linear_to_srgb(boundary);
        assert!(approx_eq(srgb.r, 0.0031308 * 12.92));

        let above = LinearRgb {
            r: 0.0031309,
            g: 0.0,
            b: 0.0,
        };
        let srgb_above = linear_to_srgb(above);
        let expected = 1.055 * 0.0031309_f64.powf(1.0 / 2.4) - 0.055;
        assert!(approx_eq(srgb_above.r, expected));
    }

    #[test]
    fn linear_component_endpoints() {
        assert!(approx_eq(linear_component_to_srgb(0.0), 0.0));
        assert!(approx_eq(linear_component_to_srgb(1.0), 1.0));
    }

    // -- OKLab / OKLCh --

    #[test]
    fn oklch_to_oklab_zero_hue_lies_on_positive_a_axis() {
        let lab = oklch_to_oklab(OkLch {
            l: 0.5,
            c: 0.2,
            h: 0.0,
        });
        assert!(approx_eq(lab.l, 0.5));
        assert!(approx_eq(lab.a, 0.2));
        assert!(approx_eq(lab.b, 0.0));
    }

    #[test]
    fn oklch_to_oklab_quarter_turn_lies_on_positive_b_axis() {
        let lab = oklch_to_oklab(OkLch {
            l: 0.5,
            c: 0.1,
            h: 90.0,
        });
        assert!(approx_eq(lab.a, 0.0), "a: {}", lab.a);
        assert!(approx_eq(lab.b, 0.1), "b: {}", lab.b);
    }

    #[test]
    fn white_oklab_maps_to_unit_linear_rgb() {
        let lin = oklab_to_linear(OkLab {
            l: 1.0,
            a: 0.0,
            b: 0.0,
        });
        assert!((lin.r - 1.0).abs() < 1e-4, "r: {}", lin.r);
        assert!((lin.g - 1.0).abs() < 1e-4, "g: {}", lin.g);
        assert!((lin.b - 1.0).abs() < 1e-4, "b: {}", lin.b);
    }

    #[test]
    fn black_oklab_maps_to_zero_linear_rgb() {
        let lin = oklab_to_linear(OkLab {
            l: 0.0,
            a: 0.0,
            b: 0.0,
        });
        assert!(approx_eq(lin.r, 0.0));
        assert!(approx_eq(lin.g, 0.0));
        assert!(approx_eq(lin.b, 0.0));
    }

    #[test]
    fn oklch_red_reference_converts_to_srgb_red() {
        // sRGB red is approximately oklch(0.628 0.2577 29.23).
        let srgb = oklch_to_srgb(OkLch {
            l: 0.62796,
            c: 0.25768,
            h: 29.234,
        });
        assert!((srgb.r - 1.0).abs() < 2e-3, "r: {}", srgb.r);
        assert!(srgb.g < 2e-3, "g: {}", srgb.g);
        assert!(srgb.b < 2e-3, "b: {}", srgb.b);
    }

    #[test]
    fn oklch_to_srgb_clamps_out_of_gamut() {
        let srgb = oklch_to_srgb(OkLch {
            l: 0.9,
            c: 0.4,
            h: 150.0,
        });
        assert!(srgb.r >= 0.0 && srgb.r <= 1.0, "r out of range: {}", srgb.r);
        assert!(srgb.g >= 0.0 && srgb.g <= 1.0, "g out of range: {}", srgb.g);
        assert!(srgb.b >= 0.0 && srgb.b <= 1.0, "b out of range: {}", srgb.b);
    }

    #[test]
    fn oklch_to_srgb_propagates_nan() {
        let srgb = oklch_to_srgb(OkLch {
            l: f64::NAN,
            c: 0.1,
            h: 10.0,
        });
        assert!(srgb.r.is_nan());
    }

    // -- OklchColor --

    #[test]
    fn display_matches_css_color_syntax() {
        let color = OklchColor::new(0.6179, 0.2114, 280.67, 1.0);
        assert_eq!(color.to_string(), "oklch(0.6179 0.2114 280.67 / 1)");
    }

    #[test]
    fn get_and_with_address_each_channel() {
        let color = OklchColor::new(0.1, 0.2, 30.0, 0.4);
        assert_eq!(color.get(OklchComponent::L), 0.1);
        assert_eq!(color.get(OklchComponent::C), 0.2);
        assert_eq!(color.get(OklchComponent::H), 30.0);
        assert_eq!(color.get(OklchComponent::A), 0.4);

        let changed = color.with(OklchComponent::H, 90.0);
        assert_eq!(changed.h, 90.0);
        assert_eq!(color.h, 30.0, "original must be untouched");
    }

    #[test]
    fn parse_full_oklch_string() {
        let color: OklchColor = "oklch(0.5 0.15 220 / 0.8)".parse().unwrap();
        assert_eq!(color, OklchColor::new(0.5, 0.15, 220.0, 0.8));
    }

    #[test]
    fn parse_without_alpha_defaults_to_opaque() {
        let color: OklchColor = "oklch(0.6 0.18 142deg)".parse().unwrap();
        assert_eq!(color, OklchColor::new(0.6, 0.18, 142.0, 1.0));
    }

    #[test]
    fn parse_percentages_and_bare_channels() {
        let color: OklchColor = "60% 0.1 10 / 50%".parse().unwrap();
        assert!(approx_eq(color.l, 0.6));
        assert!(approx_eq(color.a, 0.5));
    }

    #[test]
    fn parse_display_round_trip() {
        let color = OklchColor::new(0.6179, 0.2114, 280.67, 1.0);
        let parsed: OklchColor = color.to_string().parse().unwrap();
        assert_eq!(parsed, color);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!("oklch(0.5 0.1)".parse::<OklchColor>().is_err());
        assert!("oklch(0.5 0.1 20".parse::<OklchColor>().is_err());
        assert!("oklch(a b c)".parse::<OklchColor>().is_err());
        assert!("".parse::<OklchColor>().is_err());
    }

    #[test]
    fn component_parses_short_and_long_names() {
        assert_eq!("l".parse::<OklchComponent>().unwrap(), OklchComponent::L);
        assert_eq!("Hue".parse::<OklchComponent>().unwrap(), OklchComponent::H);
        assert_eq!("alpha".parse::<OklchComponent>().unwrap(), OklchComponent::A);
        assert!("x".parse::<OklchComponent>().is_err());
    }

    #[test]
    fn alpha_css_name_is_alpha() {
        assert_eq!(OklchComponent::A.css_name(), "alpha");
        assert_eq!(OklchComponent::A.as_str(), "a");
    }

    #[test]
    fn color_serializes_with_channel_keys() {
        let color = OklchColor::new(0.5, 0.15, 220.0, 1.0);
        let json = serde_json::to_value(color).unwrap();
        assert_eq!(json["l"], 0.5);
        assert_eq!(json["h"], 220.0);
        let back: OklchColor = serde_json::from_value(json).unwrap();
        assert_eq!(back, color);
    }

    #[test]
    fn to_hex_of_white_and_black() {
        assert_eq!(OklchColor::new(1.0, 0.0, 0.0, 1.0).to_srgb().to_hex(), "#ffffff");
        assert_eq!(OklchColor::new(0.0, 0.0, 0.0, 1.0).to_srgb().to_hex(), "#000000");
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn oklch_to_srgb_always_produces_valid_range(
                l in 0.0_f64..=1.0,
                c in 0.0_f64..=0.4,
                h in 0.0_f64..360.0,
            ) {
                let srgb = oklch_to_srgb(OkLch { l, c, h });
                prop_assert!(srgb.r >= 0.0 && srgb.r <= 1.0, "r out of range: {}", srgb.r);
                prop_assert!(srgb.g >= 0.0 && srgb.g <= 1.0, "g out of range: {}", srgb.g);
                prop_assert!(srgb.b >= 0.0 && srgb.b <= 1.0, "b out of range: {}", srgb.b);
            }

            #[test]
            fn achromatic_colors_are_gray(l in 0.0_f64..=1.0, h in 0.0_f64..360.0) {
                let srgb = oklch_to_srgb(OkLch { l, c: 0.0, h });
                prop_assert!((srgb.r - srgb.g).abs() < 1e-4, "r={} g={}", srgb.r, srgb.g);
                prop_assert!((srgb.g - srgb.b).abs() < 1e-4, "g={} b={}", srgb.g, srgb.b);
            }
        }
    }
}
