//! Interpolation utilities.
//!
//! - Linear interpolation ([`lerp`], [`inverse_lerp`], [`remap`])
//! - Piecewise-linear lookup through a monotone anchor table ([`piecewise`])
//!
//! # Usage
//!
//! ```rust
//! use tint_math::{lerp, remap};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(remap(0.5, 0.0, 1.0, 0.0, 100.0), 50.0);
//! ```

/// Linear interpolation: `a + (b - a) * t`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse linear interpolation. A zero-width span returns 0.
#[inline]
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if (b - a).abs() < 1e-15 {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

/// Remaps `value` from `[in_min, in_max]` to `[out_min, out_max]`.
#[inline]
pub fn remap(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    lerp(out_min, out_max, inverse_lerp(in_min, in_max, value))
}

/// Piecewise-linear map through matching anchor tables.
///
/// `xs` must be strictly increasing and the same length as `ys`. Inputs
/// outside the table clamp to the end segments. Swapping `xs` and `ys`
/// inverts the map when `ys` is also increasing.
///
/// # Example
///
/// ```rust
/// use tint_math::piecewise;
///
/// let xs = [0.0, 60.0, 360.0];
/// let ys = [0.0, 120.0, 360.0];
/// assert_eq!(piecewise(30.0, &xs, &ys), 60.0);
/// assert_eq!(piecewise(60.0, &ys, &xs), 30.0);
/// ```
pub fn piecewise(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    let n = xs.len().min(ys.len());
    if n == 0 {
        return x;
    }
    if n == 1 || x <= xs[0] {
        return ys[0];
    }
    for i in 1..n {
        if x <= xs[i] {
            return remap(x, xs[i - 1], xs[i], ys[i - 1], ys[i]);
        }
    }
    ys[n - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_inverse() {
        let t = inverse_lerp(2.0, 6.0, 5.0);
        assert_eq!(t, 0.75);
        assert_eq!(lerp(2.0, 6.0, t), 5.0);
        assert_eq!(inverse_lerp(3.0, 3.0, 3.0), 0.0);
    }

    #[test]
    fn test_piecewise_inverse() {
        let xs = [0.0, 35.0, 60.0, 120.0, 180.0, 240.0, 300.0, 360.0];
        let ys = [0.0, 60.0, 122.0, 165.0, 218.0, 275.0, 330.0, 360.0];
        for i in 0..360 {
            let x = i as f64;
            let y = piecewise(x, &xs, &ys);
            let back = piecewise(y, &ys, &xs);
            assert!((x - back).abs() < 1e-9, "{} -> {} -> {}", x, y, back);
        }
    }

    #[test]
    fn test_piecewise_clamps() {
        let xs = [0.0, 1.0];
        let ys = [10.0, 20.0];
        assert_eq!(piecewise(-5.0, &xs, &ys), 10.0);
        assert_eq!(piecewise(5.0, &xs, &ys), 20.0);
    }
}
