//! CSS Color Level 5 relative color serialization.
//!
//! Renders the session as `oklch(from <origin> <l> <c> <h> / <alpha>)`, where
//! each channel is the bare keyword when its transform is an identity, a
//! `calc()` over the keyword when relative, or a literal when absolute.

use crate::color::{OklchColor, OklchComponent};
use crate::engine::Transforms;
use crate::transform::Transform;

/// Renders one channel of the relative color expression.
///
/// Hue additions and literals carry a `deg` unit; the other channels are
/// unitless. Subtraction is written with `-` and the magnitude.
pub fn channel_expr(component: OklchComponent, transform: Transform) -> String {
    let name = component.css_name();
    let unit = if component == OklchComponent::H {
        "deg"
    } else {
        ""
    };
    match transform {
        Transform::Multiply(v) if v == 1.0 => name.to_string(),
        Transform::Multiply(v) => format!("calc({name} * {v})"),
        Transform::Add(v) if v == 0.0 => name.to_string(),
        Transform::Add(v) if v < 0.0 => format!("calc({name} - {}{unit})", v.abs()),
        Transform::Add(v) => format!("calc({name} + {v}{unit})"),
        Transform::Absolute(v) => format!("{v}{unit}"),
    }
}

/// Renders the full `oklch(from ...)` expression for an origin and its
/// transforms.
pub fn relative_color(origin: &OklchColor, transforms: &Transforms) -> String {
    let [l, c, h, a] = OklchComponent::ALL.map(|k| channel_expr(k, transforms[k]));
    format!("oklch(from {origin} {l} {c} {h} / {a})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use OklchComponent::{A, C, H, L};

    fn purple() -> OklchColor {
        OklchColor::new(0.6179, 0.2114, 280.67, 1.0)
    }

    #[test]
    fn identity_transforms_render_bare_keywords() {
        assert_eq!(
            relative_color(&purple(), &Transforms::default()),
            "oklch(from oklch(0.6179 0.2114 280.67 / 1) l c h / alpha)"
        );
    }

    #[test]
    fn multiply_renders_calc() {
        assert_eq!(channel_expr(L, Transform::Multiply(1.5)), "calc(l * 1.5)");
        assert_eq!(channel_expr(A, Transform::Multiply(0.5)), "calc(alpha * 0.5)");
    }

    #[test]
    fn add_renders_sign_and_hue_unit() {
        assert_eq!(channel_expr(H, Transform::Add(-30.0)), "calc(h - 30deg)");
        assert_eq!(channel_expr(H, Transform::Add(15.5)), "calc(h + 15.5deg)");
        assert_eq!(channel_expr(C, Transform::Add(0.05)), "calc(c + 0.05)");
        assert_eq!(channel_expr(L, Transform::Add(-0.1)), "calc(l - 0.1)");
    }

    #[test]
    fn zero_add_is_bare_keyword() {
        assert_eq!(channel_expr(H, Transform::Add(0.0)), "h");
        assert_eq!(channel_expr(H, Transform::Add(-0.0)), "h");
    }

    #[test]
    fn absolute_renders_literal() {
        assert_eq!(channel_expr(H, Transform::Absolute(45.0)), "45deg");
        assert_eq!(channel_expr(L, Transform::Absolute(0.7)), "0.7");
        assert_eq!(channel_expr(A, Transform::Absolute(1.0)), "1");
    }

    #[test]
    fn multiply_on_hue_has_no_unit() {
        assert_eq!(channel_expr(H, Transform::Multiply(2.0)), "calc(h * 2)");
    }

    #[test]
    fn full_expression_with_mixed_transforms() {
        let transforms = Transforms {
            l: Transform::Multiply(1.5),
            c: Transform::Absolute(0.1),
            h: Transform::Add(-30.0),
            a: Transform::Multiply(1.0),
        };
        assert_eq!(
            relative_color(&purple(), &transforms),
            "oklch(from oklch(0.6179 0.2114 280.67 / 1) calc(l * 1.5) 0.1 calc(h - 30deg) / alpha)"
        );
    }
}
