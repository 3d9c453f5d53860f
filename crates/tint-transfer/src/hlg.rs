//! Hybrid Log-Gamma (HLG) transfer function.
//!
//! The lower half of the signal is a square-root curve, the upper half is
//! logarithmic.
//!
//! # Range
//!
//! - Encoded: [0, 1]
//! - Linear: [0, 1] (scene-referred, relative)
//!
//! Negative values are mirrored.
//!
//! # Reference
//!
//! ITU-R BT.2100-2

const A: f64 = 0.178_832_77;
const B: f64 = 1.0 - 4.0 * A;
const C: f64 = 0.559_910_729_529_562_4; // 0.5 - A * ln(4 * A)

/// HLG OETF: encodes linear scene light to an HLG signal.
///
/// # Formula
///
/// ```text
/// if E <= 1/12:
///     E' = sqrt(3 * E)
/// else:
///     E' = A * ln(12*E - B) + C
/// ```
///
/// # Example
///
/// ```rust
/// use tint_transfer::hlg::encode;
///
/// assert!((encode(1.0 / 12.0) - 0.5).abs() < 1e-12);
/// ```
#[inline]
pub fn encode(e: f64) -> f64 {
    let a = e.abs();
    let v = if a <= 1.0 / 12.0 {
        (3.0 * a).sqrt()
    } else {
        A * (12.0 * a - B).ln() + C
    };
    v.copysign(e)
}

/// HLG inverse OETF: decodes an HLG signal to linear scene light.
#[inline]
pub fn decode(ep: f64) -> f64 {
    let a = ep.abs();
    let l = if a <= 0.5 {
        a * a / 3.0
    } else {
        (((a - C) / A).exp() + B) / 12.0
    };
    l.copysign(ep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for i in 0..=100 {
            let e = i as f64 / 100.0;
            let decoded = decode(encode(e));
            assert!((e - decoded).abs() < 1e-9, "e={}, decoded={}", e, decoded);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(encode(0.0), 0.0);
        assert!((encode(1.0) - 1.0).abs() < 1e-6);
        assert_eq!(decode(0.0), 0.0);
        assert!((decode(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_transition_point() {
        let e = 1.0 / 12.0;
        let log_side = A * (12.0 * e - B).ln() + C;
        assert!((encode(e) - log_side).abs() < 1e-9);
    }
}
