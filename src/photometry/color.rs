//! Color indices in the UBV system.
//!
//! A color index is the difference between two band magnitudes and serves as
//! a proxy for stellar surface temperature. The pipeline works in the
//! (B−V, U−B) color-color plane: reference main-sequence curves live there,
//! and interstellar reddening moves a star's observed colors along a
//! fixed-slope line in that plane.

use super::magnitude::Magnitude;

/// A (B−V, U−B) color index pair.
///
/// Constructed either directly from two values (reference-curve samples) or
/// derived from a [`Magnitude`] triple. Immutable; dereddening produces a
/// fresh value rather than modifying an existing one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorIndex {
    /// B−V color index
    pub bv: f64,

    /// U−B color index
    pub ub: f64,
}

impl ColorIndex {
    /// Create a color index directly from its two components.
    pub fn new(bv: f64, ub: f64) -> Self {
        Self { bv, ub }
    }

    /// Derive the color index of a star from its UBV magnitudes.
    pub fn from_magnitude(mag: &Magnitude) -> Self {
        Self {
            bv: mag.b - mag.v,
            ub: mag.u - mag.b,
        }
    }
}

impl From<&Magnitude> for ColorIndex {
    fn from(mag: &Magnitude) -> Self {
        Self::from_magnitude(mag)
    }
}
