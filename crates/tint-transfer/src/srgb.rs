//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve (approximately gamma 2.2) for the rest.
//!
//! # Range
//!
//! - Input/Output: [0, 1], mirrored for negative values
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// Decodes an sRGB encoded value to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use tint_transfer::srgb::decode;
///
/// let linear = decode(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn decode(v: f64) -> f64 {
    let a = v.abs();
    let l = if a <= 0.04045 {
        a / 12.92
    } else {
        ((a + 0.055) / 1.055).powf(2.4)
    };
    l.copysign(v)
}

/// Encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
///
/// # Example
///
/// ```rust
/// use tint_transfer::srgb::encode;
///
/// let encoded = encode(0.214);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn encode(l: f64) -> f64 {
    let a = l.abs();
    let v = if a <= 0.0031308 {
        a * 12.92
    } else {
        1.055 * a.powf(1.0 / 2.4) - 0.055
    };
    v.copysign(l)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_roundtrip() {
        for i in 0..=1000 {
            let v = i as f64 / 1000.0;
            let back = encode(decode(v));
            assert!((v - back).abs() < 1e-12, "v={}, back={}", v, back);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(encode(0.0), 0.0);
        assert_relative_eq!(encode(1.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(decode(1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mirrored() {
        assert!((decode(-0.5) + decode(0.5)).abs() < 1e-15);
        assert!((encode(-0.2) + encode(0.2)).abs() < 1e-15);
    }
}
