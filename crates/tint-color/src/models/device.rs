//! Device RGB and the warped hue wheels (RYB, RGV, RCA).
//!
//! These are the only models that pass through the profile's transfer
//! curve. The hue wheels decompose the device signal into HSB, move the hue
//! along a piecewise-linear anchor table and rebuild an RGB-shaped triple.

use tint_math::{piecewise, Vec3};

use super::hexcone;
use crate::WorkingProfile;

pub(crate) fn rgb_from_hub(hub: Vec3, profile: &WorkingProfile) -> [f64; 3] {
    (profile.encode(hub) * 255.0).to_array()
}

pub(crate) fn rgb_to_hub(v: [f64; 3], profile: &WorkingProfile) -> Vec3 {
    profile.decode(Vec3::from_array(v) / 255.0)
}

/// A painter's hue wheel with its anchor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Wheel {
    /// Red, yellow, blue (Itten)
    Ryb,
    /// Red, green, violet
    Rgv,
    /// Red, chartreuse, azure
    Rca,
}

impl Wheel {
    /// `(rgb hue anchors, wheel hue anchors)`, both increasing.
    const fn anchors(self) -> (&'static [f64], &'static [f64]) {
        match self {
            Self::Ryb => (
                &[0.0, 35.0, 60.0, 120.0, 180.0, 240.0, 300.0, 360.0],
                &[0.0, 60.0, 122.0, 165.0, 218.0, 275.0, 330.0, 360.0],
            ),
            Self::Rgv => (&[0.0, 120.0, 270.0, 360.0], &[0.0, 120.0, 240.0, 360.0]),
            Self::Rca => (&[0.0, 90.0, 210.0, 360.0], &[0.0, 120.0, 240.0, 360.0]),
        }
    }

    fn warp(self, rgb_hue: f64) -> f64 {
        let (rgb, wheel) = self.anchors();
        piecewise(rgb_hue, rgb, wheel)
    }

    fn unwarp(self, wheel_hue: f64) -> f64 {
        let (rgb, wheel) = self.anchors();
        piecewise(wheel_hue, wheel, rgb)
    }
}

pub(crate) fn wheel_from_hub(wheel: Wheel, hub: Vec3, profile: &WorkingProfile) -> [f64; 3] {
    let [h, s, b] = hexcone::hsb_from_hub(profile.encode(hub));
    (hexcone::hsb_to_hub([wheel.warp(h), s, b]) * 255.0).to_array()
}

pub(crate) fn wheel_to_hub(wheel: Wheel, v: [f64; 3], profile: &WorkingProfile) -> Vec3 {
    let [h, s, b] = hexcone::hsb_from_hub(Vec3::from_array(v) / 255.0);
    profile.decode(hexcone::hsb_to_hub([wheel.unwarp(h), s, b]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles;

    #[test]
    fn test_rgb_roundtrip() {
        let p = &profiles::SRGB;
        let v = [12.0, 128.0, 250.0];
        let back = rgb_from_hub(rgb_to_hub(v, p), p);
        for i in 0..3 {
            assert!((back[i] - v[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_ryb_anchors() {
        // Pure yellow in RGB (60) sits at 122 on the Itten wheel
        assert_eq!(Wheel::Ryb.warp(60.0), 122.0);
        assert_eq!(Wheel::Ryb.unwarp(122.0), 60.0);
        assert_eq!(Wheel::Rgv.warp(270.0), 240.0);
        assert_eq!(Wheel::Rca.unwarp(120.0), 90.0);
    }

    #[test]
    fn test_wheel_roundtrip() {
        let p = &profiles::SRGB;
        for wheel in [Wheel::Ryb, Wheel::Rgv, Wheel::Rca] {
            for v in [[200.0, 40.0, 90.0], [30.0, 220.0, 140.0], [90.0, 90.0, 90.0]] {
                let back = wheel_from_hub(wheel, wheel_to_hub(wheel, v, p), p);
                for i in 0..3 {
                    assert!((back[i] - v[i]).abs() < 1e-6, "{:?} {:?} -> {:?}", wheel, v, back);
                }
            }
        }
    }

    #[test]
    fn test_red_is_fixed() {
        let p = &profiles::SRGB;
        let red = wheel_from_hub(Wheel::Ryb, rgb_to_hub([255.0, 0.0, 0.0], p), p);
        assert!((red[0] - 255.0).abs() < 1e-9 && red[1].abs() < 1e-9 && red[2].abs() < 1e-9);
    }
}
