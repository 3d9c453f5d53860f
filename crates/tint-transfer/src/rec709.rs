//! Rec.709 (BT.709) transfer function.
//!
//! Uses the high-precision constants from BT.2020 so that both segments meet
//! exactly; Rec.2020 shares this curve.
//!
//! # Range
//!
//! - Input/Output: [0, 1], mirrored for negative values
//!
//! # Reference
//!
//! ITU-R BT.709-6, ITU-R BT.2020-2

const ALPHA: f64 = 1.099_296_826_809_44;
const BETA: f64 = 0.018_053_968_510_807;

/// Rec.709 OETF: encodes linear to Rec.709.
///
/// # Formula
///
/// ```text
/// if L < beta:
///     V = 4.5 * L
/// else:
///     V = alpha * L^0.45 - (alpha - 1)
/// ```
#[inline]
pub fn encode(l: f64) -> f64 {
    let a = l.abs();
    let v = if a < BETA {
        4.5 * a
    } else {
        ALPHA * a.powf(0.45) - (ALPHA - 1.0)
    };
    v.copysign(l)
}

/// Rec.709 inverse OETF: decodes Rec.709 to linear.
#[inline]
pub fn decode(v: f64) -> f64 {
    let a = v.abs();
    let l = if a < 4.5 * BETA {
        a / 4.5
    } else {
        ((a + ALPHA - 1.0) / ALPHA).powf(1.0 / 0.45)
    };
    l.copysign(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for i in 0..=1000 {
            let v = i as f64 / 1000.0;
            let back = encode(decode(v));
            assert!((v - back).abs() < 1e-9, "v={}, back={}", v, back);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(encode(0.0), 0.0);
        assert!((encode(1.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_segments_meet() {
        let below = 4.5 * BETA;
        let above = ALPHA * BETA.powf(0.45) - (ALPHA - 1.0);
        assert!((below - above).abs() < 1e-9, "{} vs {}", below, above);
    }
}
