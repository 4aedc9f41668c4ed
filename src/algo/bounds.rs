//! Bounding box of a reference curve in color-color space.

use crate::photometry::ColorIndex;
use thiserror::Error;

/// Errors raised when scanning reference samples for their extent.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BoundsError {
    #[error("no reference samples provided")]
    NoData,

    #[error("non-finite color index at sample {0}")]
    NonFinite(usize),
}

/// Axis-aligned extent of a set of color-index samples.
///
/// Computed once from the main-sequence reference table and reused by the
/// outlier filter (tolerance box) and the reddening corrector (scan start).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBounds {
    pub bv_min: f64,
    pub bv_max: f64,
    pub ub_min: f64,
    pub ub_max: f64,
}

impl ColorBounds {
    /// Scan reference-curve samples for their per-axis minima and maxima.
    ///
    /// # Errors
    /// Returns [`BoundsError::NoData`] for an empty table and
    /// [`BoundsError::NonFinite`] if any sample contains NaN or infinity.
    pub fn from_samples(samples: &[ColorIndex]) -> Result<Self, BoundsError> {
        let first = samples.first().ok_or(BoundsError::NoData)?;

        let mut bounds = ColorBounds {
            bv_min: first.bv,
            bv_max: first.bv,
            ub_min: first.ub,
            ub_max: first.ub,
        };

        for (i, ci) in samples.iter().enumerate() {
            if !ci.bv.is_finite() || !ci.ub.is_finite() {
                return Err(BoundsError::NonFinite(i));
            }
            bounds.bv_min = bounds.bv_min.min(ci.bv);
            bounds.bv_max = bounds.bv_max.max(ci.bv);
            bounds.ub_min = bounds.ub_min.min(ci.ub);
            bounds.ub_max = bounds.ub_max.max(ci.ub);
        }

        Ok(bounds)
    }

    /// Whether a color index lies inside the box widened by `margin` on
    /// every side.
    ///
    /// Each axis is tested independently; a star must pass both to pass
    /// overall.
    pub fn contains(&self, color: &ColorIndex, margin: f64) -> bool {
        color.bv <= self.bv_max + margin
            && color.bv >= self.bv_min - margin
            && color.ub <= self.ub_max + margin
            && color.ub >= self.ub_min - margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve() -> Vec<ColorIndex> {
        vec![
            ColorIndex::new(-0.3, -1.1),
            ColorIndex::new(0.0, 0.0),
            ColorIndex::new(0.6, 0.1),
            ColorIndex::new(1.4, 1.2),
        ]
    }

    #[test]
    fn scans_extent() {
        let bounds = ColorBounds::from_samples(&curve()).unwrap();
        assert_eq!(bounds.bv_min, -0.3);
        assert_eq!(bounds.bv_max, 1.4);
        assert_eq!(bounds.ub_min, -1.1);
        assert_eq!(bounds.ub_max, 1.2);
    }

    #[test]
    fn empty_table_is_an_error() {
        assert_eq!(
            ColorBounds::from_samples(&[]).unwrap_err(),
            BoundsError::NoData
        );
    }

    #[test]
    fn nan_sample_is_an_error() {
        let mut samples = curve();
        samples[2] = ColorIndex::new(f64::NAN, 0.0);
        assert_eq!(
            ColorBounds::from_samples(&samples).unwrap_err(),
            BoundsError::NonFinite(2)
        );
    }

    #[test]
    fn margin_widens_each_axis_independently() {
        let bounds = ColorBounds::from_samples(&curve()).unwrap();

        assert!(bounds.contains(&ColorIndex::new(1.6, 0.0), 0.3));
        assert!(!bounds.contains(&ColorIndex::new(1.8, 0.0), 0.3));
        assert!(bounds.contains(&ColorIndex::new(0.0, -1.35), 0.3));
        assert!(!bounds.contains(&ColorIndex::new(0.0, -1.5), 0.3));
        // One good axis does not rescue the other.
        assert!(!bounds.contains(&ColorIndex::new(1.8, -1.5), 0.3));
    }
}
