//! Expression intensity of a body within its house.
//!
//! Intensity peaks at the house midpoint (15°) and falls to zero at both
//! cusps along a cosine bell, measured on the house's own 30° span.

use crate::error::{HarmoniaError, Result};
use std::f64::consts::FRAC_PI_2;

pub const HOUSE_SPAN: f64 = 30.0;
pub const HOUSE_MIDPOINT: f64 = HOUSE_SPAN / 2.0;

/// Intensity in [0, 100] for a degree within the house.
///
/// Accepts the closed span [0, 30]; 30 is the next house's cusp and scores
/// like 0. NaN and values outside the span are rejected.
pub fn house_intensity(degree_in_house: f64) -> Result<u8> {
    if !(0.0..=HOUSE_SPAN).contains(&degree_in_house) {
        return Err(HarmoniaError::InvalidDegree {
            value: degree_in_house,
        });
    }
    Ok(intensity_curve(degree_in_house))
}

fn intensity_curve(degree_in_house: f64) -> u8 {
    let distance = (degree_in_house - HOUSE_MIDPOINT).abs() / HOUSE_MIDPOINT;
    let raw = (distance * FRAC_PI_2).cos() * 100.0;
    raw.clamp(0.0, 100.0).round() as u8
}
