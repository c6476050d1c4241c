//! Lenient readers for plane and strip parameters given as JSON.
//!
//! A missing or mistyped key yields the caller's default, so partial
//! parameter objects such as `{"hue": 120}` are accepted.

use serde_json::Value;

/// Reads a number (integer or float) from `params[name]`.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Reads a pixel count from `params[name]`. Floats and negatives fall back.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plane_params() -> Value {
        json!({
            "width": 320,
            "height": 200,
            "hue": 120,
            "max_chroma": 0.25,
            "scale": 2.0
        })
    }

    #[test]
    fn reads_every_plane_key() {
        let params = plane_params();
        assert_eq!(param_usize(&params, "width", 0), 320);
        assert_eq!(param_usize(&params, "height", 0), 200);
        assert_eq!(param_f64(&params, "hue", 0.0), 120.0);
        assert_eq!(param_f64(&params, "max_chroma", 0.4), 0.25);
        assert_eq!(param_f64(&params, "scale", 1.0), 2.0);
    }

    #[test]
    fn missing_keys_fall_back() {
        let params = json!({"hue": 30.5});
        assert_eq!(param_f64(&params, "max_chroma", 0.4), 0.4);
        assert_eq!(param_f64(&params, "scale", 1.0), 1.0);
        assert_eq!(param_usize(&params, "width", 280), 280);
    }

    #[test]
    fn mistyped_values_fall_back() {
        let params = json!({"hue": "red", "scale": null, "width": 2.5, "height": -1});
        assert_eq!(param_f64(&params, "hue", 10.0), 10.0);
        assert_eq!(param_f64(&params, "scale", 1.0), 1.0);
        assert_eq!(param_usize(&params, "width", 280), 280);
        assert_eq!(param_usize(&params, "height", 36), 36);
    }

    #[test]
    fn non_object_falls_back() {
        let params = json!([0.5, 0.1]);
        assert_eq!(param_f64(&params, "max_chroma", 0.4), 0.4);
        assert_eq!(param_usize(&params, "width", 280), 280);
    }
}
