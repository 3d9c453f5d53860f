//! Hub dispatch: routes a [`Model`] tag to its family conversion.
//!
//! Every conversion goes through linear-light RGB of the working profile.
//! CIE families take one more hop through the profile's XYZ.

use tint_math::Vec3;

use crate::Components;
use crate::Model::{self, *};
use crate::WorkingProfile;
use crate::models::device::{self, Wheel};
use crate::models::{
    cam, from_d65, hexcone, hue, jz, lab, lab_from_lch, lch_from_lab, luma, luv, ok, quad, to_d65,
    tristimulus,
};

/// Model values to hub.
///
/// `values` must carry the model's arity; [`Color`](crate::Color) guarantees
/// this. A mismatched tuple yields black.
pub(crate) fn to_hub(model: Model, values: &Components, profile: &WorkingProfile) -> Vec3 {
    match *values {
        Components::Three(v) => three_to_hub(model, v, profile),
        Components::Four(v) => four_to_hub(model, v),
        Components::Two(_) => Vec3::ZERO,
    }
}

/// Hub to model values of the model's arity.
pub(crate) fn from_hub(model: Model, hub: Vec3, profile: &WorkingProfile) -> Components {
    match model.arity() {
        4 => Components::Four(four_from_hub(model, hub)),
        _ => Components::Three(three_from_hub(model, hub, profile)),
    }
}

/// CIE Lab of a hub value against the profile white.
pub(crate) fn to_lab(hub: Vec3, profile: &WorkingProfile) -> [f64; 3] {
    lab::lab_from_xyz(profile.to_xyz(hub), profile.white_xyz())
}

// ============================================================================
// Three components
// ============================================================================

fn three_to_hub(model: Model, v: [f64; 3], p: &WorkingProfile) -> Vec3 {
    match model {
        Rgb => device::rgb_to_hub(v, p),
        Ryb => device::wheel_to_hub(Wheel::Ryb, v, p),
        Rgv => device::wheel_to_hub(Wheel::Rgv, v, p),
        Rca => device::wheel_to_hub(Wheel::Rca, v, p),

        Cmy => hexcone::cmy_to_hub(v),
        Hsb => hexcone::hsb_to_hub(v),
        Hsl => hexcone::hsl_to_hub(v),
        Hcv => hexcone::hcv_to_hub(v),
        Hwb => hexcone::hwb_to_hub(v),
        Hcy => hue::hcy_to_hub(v),
        Hsp => hue::hsp_to_hub(v),
        Hsm => hue::hsm_to_hub(v),
        Tsl => hue::tsl_to_hub(v),
        RgG => hue::rgg_to_hub(v),
        LchRg => hue::lchrg_to_hub(v),

        Yiq => luma::YIQ.inverse(v),
        Yuv => luma::YUV.inverse(v),
        YPbPr => luma::YPBPR.inverse(v),
        YCbCr => luma::YCBCR.inverse(v),
        Jpeg => luma::JPEG.inverse(v),
        XvYcc => luma::XVYCC.inverse(v),
        YDbDr => luma::YDBDR.inverse(v),
        Yes => luma::YES.inverse(v),
        YCoCg => luma::ycocg_to_hub(v),

        _ => p.from_xyz(xyz_of(model, v, p)),
    }
}

fn three_from_hub(model: Model, hub: Vec3, p: &WorkingProfile) -> [f64; 3] {
    match model {
        Rgb => device::rgb_from_hub(hub, p),
        Ryb => device::wheel_from_hub(Wheel::Ryb, hub, p),
        Rgv => device::wheel_from_hub(Wheel::Rgv, hub, p),
        Rca => device::wheel_from_hub(Wheel::Rca, hub, p),

        Cmy => hexcone::cmy_from_hub(hub),
        Hsb => hexcone::hsb_from_hub(hub),
        Hsl => hexcone::hsl_from_hub(hub),
        Hcv => hexcone::hcv_from_hub(hub),
        Hwb => hexcone::hwb_from_hub(hub),
        Hcy => hue::hcy_from_hub(hub),
        Hsp => hue::hsp_from_hub(hub),
        Hsm => hue::hsm_from_hub(hub),
        Tsl => hue::tsl_from_hub(hub),
        RgG => hue::rgg_from_hub(hub),
        LchRg => hue::lchrg_from_hub(hub),

        Yiq => luma::YIQ.forward(hub),
        Yuv => luma::YUV.forward(hub),
        YPbPr => luma::YPBPR.forward(hub),
        YCbCr => luma::YCBCR.forward(hub),
        Jpeg => luma::JPEG.forward(hub),
        XvYcc => luma::XVYCC.forward(hub),
        YDbDr => luma::YDBDR.forward(hub),
        Yes => luma::YES.forward(hub),
        YCoCg => luma::ycocg_from_hub(hub),

        _ => xyz_to(model, p.to_xyz(hub), p),
    }
}

// ============================================================================
// CIE families (via XYZ)
// ============================================================================

fn xyz_of(model: Model, v: [f64; 3], p: &WorkingProfile) -> Vec3 {
    let white = p.white_xyz();
    match model {
        Xyz => Vec3::from_array(v),
        XyY => tristimulus::xyy_to_xyz(v),
        XyYC => tristimulus::xyyc_to_xyz(v, p.white()),
        LchXy => tristimulus::lchxy_to_xyz(v, p.white()),
        Lms => tristimulus::lms_to_xyz(v, p.adaptation()),
        Ucs => tristimulus::ucs_to_xyz(v),
        Uvw => tristimulus::uvw_to_xyz(v, p.white()),

        Lab => lab::lab_to_xyz(v, white),
        LchAb => lab::lab_to_xyz(lab_from_lch(v), white),
        Labh => lab::labh_to_xyz(v, white),
        LchAbh => lab::labh_to_xyz(lab_from_lch(v), white),
        Labj => from_d65(jz::jzazbz_to_xyz(v), p),
        LchAbj => from_d65(jz::jzazbz_to_xyz(lab_from_lch(v)), p),
        Ipt => from_d65(jz::ipt_to_xyz(v), p),

        Labk => from_d65(ok::oklab_to_xyz(v), p),
        Labksl => from_d65(ok::oklab_to_xyz(ok::okhsl_to_oklab(v)), p),
        Labksb => from_d65(ok::oklab_to_xyz(ok::okhsv_to_oklab(v)), p),
        Labkwb => from_d65(ok::oklab_to_xyz(ok::okhwb_to_oklab(v)), p),

        Luv => luv::luv_to_xyz(v, white),
        LchUv => luv::luv_to_xyz(lab_from_lch(v), white),
        Hsluv => luv::luv_to_xyz(lab_from_lch(luv::hsluv_to_lch(v)), white),
        Hpluv => luv::luv_to_xyz(lab_from_lch(luv::hpluv_to_lch(v)), white),

        Jch | Jmh | Jsh | Qch | Qmh | Qsh => cam::cam_to_xyz(model, v, p),

        _ => Vec3::ZERO,
    }
}

fn xyz_to(model: Model, xyz: Vec3, p: &WorkingProfile) -> [f64; 3] {
    let white = p.white_xyz();
    match model {
        Xyz => xyz.to_array(),
        XyY => tristimulus::xyy_from_xyz(xyz, p.white()),
        XyYC => tristimulus::xyyc_from_xyz(xyz, p.white()),
        LchXy => tristimulus::lchxy_from_xyz(xyz, p.white()),
        Lms => tristimulus::lms_from_xyz(xyz, p.adaptation()),
        Ucs => tristimulus::ucs_from_xyz(xyz),
        Uvw => tristimulus::uvw_from_xyz(xyz, p.white()),

        Lab => lab::lab_from_xyz(xyz, white),
        LchAb => lch_from_lab(lab::lab_from_xyz(xyz, white)),
        Labh => lab::labh_from_xyz(xyz, white),
        LchAbh => lch_from_lab(lab::labh_from_xyz(xyz, white)),
        Labj => jz::jzazbz_from_xyz(to_d65(xyz, p)),
        LchAbj => lch_from_lab(jz::jzazbz_from_xyz(to_d65(xyz, p))),
        Ipt => jz::ipt_from_xyz(to_d65(xyz, p)),

        Labk => ok::oklab_from_xyz(to_d65(xyz, p)),
        Labksl => ok::okhsl_from_oklab(ok::oklab_from_xyz(to_d65(xyz, p))),
        Labksb => ok::okhsv_from_oklab(ok::oklab_from_xyz(to_d65(xyz, p))),
        Labkwb => ok::okhwb_from_oklab(ok::oklab_from_xyz(to_d65(xyz, p))),

        Luv => luv::luv_from_xyz(xyz, white),
        LchUv => lch_from_lab(luv::luv_from_xyz(xyz, white)),
        Hsluv => luv::hsluv_from_lch(lch_from_lab(luv::luv_from_xyz(xyz, white))),
        Hpluv => luv::hpluv_from_lch(lch_from_lab(luv::luv_from_xyz(xyz, white))),

        Jch | Jmh | Jsh | Qch | Qmh | Qsh => cam::cam_from_xyz(model, xyz, p),

        _ => [0.0; 3],
    }
}

// ============================================================================
// Four components
// ============================================================================

fn four_to_hub(model: Model, v: [f64; 4]) -> Vec3 {
    match model {
        Cmyk => quad::cmyk_to_hub(v),
        Cmyw => quad::cmyw_to_hub(v),
        Rgbk => quad::rgbk_to_hub(v),
        Rgbw => quad::rgbw_to_hub(v),
        _ => Vec3::ZERO,
    }
}

fn four_from_hub(model: Model, hub: Vec3) -> [f64; 4] {
    match model {
        Cmyk => quad::cmyk_from_hub(hub),
        Cmyw => quad::cmyw_from_hub(hub),
        Rgbk => quad::rgbk_from_hub(hub),
        Rgbw => quad::rgbw_from_hub(hub),
        _ => [0.0; 4],
    }
}
