//! CIECAM02 correlate triples (JCh, JMh, Jsh, QCh, QMh, Qsh).
//!
//! The stimulus and the white are the profile's XYZ scaled to `Y = 100`,
//! viewed under the profile's viewing conditions.

use tint_math::Vec3;

use crate::cam02::Cam02Conditions;
use crate::{Model, WorkingProfile};

fn conditions(profile: &WorkingProfile) -> Cam02Conditions {
    Cam02Conditions::new(profile.white_xyz() * 100.0, profile.viewing())
}

/// Correlate triple of `xyz` for an appearance `model`.
pub(crate) fn cam_from_xyz(model: Model, xyz: Vec3, profile: &WorkingProfile) -> [f64; 3] {
    let f = conditions(profile).forward(xyz * 100.0);
    let v = match model {
        Model::Jch => [f.j, f.c, f.h],
        Model::Jmh => [f.j, f.m, f.h],
        Model::Jsh => [f.j, f.s, f.h],
        Model::Qch => [f.q, f.c, f.h],
        Model::Qmh => [f.q, f.m, f.h],
        _ => [f.q, f.s, f.h],
    };
    super::nan0_all(v)
}

/// XYZ of an appearance `model` triple.
pub(crate) fn cam_to_xyz(model: Model, [a, b, h]: [f64; 3], profile: &WorkingProfile) -> Vec3 {
    let cam = conditions(profile);
    let xyz = match model {
        Model::Jch => cam.from_jch(a, b, h),
        Model::Jmh => cam.from_jmh(a, b, h),
        Model::Jsh => cam.from_jsh(a, b, h),
        Model::Qch => cam.from_qch(a, b, h),
        Model::Qmh => cam.from_qmh(a, b, h),
        _ => cam.from_qsh(a, b, h),
    };
    xyz / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles;

    const APPEARANCE: [Model; 6] = [Model::Jch, Model::Jmh, Model::Jsh, Model::Qch, Model::Qmh, Model::Qsh];

    #[test]
    fn test_roundtrip_all() {
        let p = &profiles::SRGB;
        let xyz = p.to_xyz(Vec3::new(0.6, 0.3, 0.15));
        for model in APPEARANCE {
            let back = cam_to_xyz(model, cam_from_xyz(model, xyz, p), p);
            assert!((back - xyz).length() < 1e-9, "{}: {:?}", model, back);
        }
    }

    #[test]
    fn test_imaginary_blue_reads_as_black() {
        let p = &profiles::PROPHOTO_RGB;
        let xyz = p.to_xyz(Vec3::new(0.0, 0.0, 1.0));
        for model in APPEARANCE {
            let v = cam_from_xyz(model, xyz, p);
            assert_eq!(v[0], 0.0, "{}: {:?}", model, v);
            assert_eq!(cam_to_xyz(model, v, p), Vec3::ZERO, "{}", model);
        }
    }

    #[test]
    fn test_white_lightness() {
        let p = &profiles::SRGB;
        let [j, c, _] = cam_from_xyz(Model::Jch, p.white_xyz(), p);
        assert!((j - 100.0).abs() < 1e-9, "J={}", j);
        assert!(c < 2.0, "C={}", c);
    }
}
