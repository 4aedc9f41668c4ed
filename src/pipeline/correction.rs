//! Per-star reddening correction.
//!
//! Interstellar dust shifts a star's observed colors along a line of fixed
//! slope K in the (B−V, U−B) plane. Sliding the star back down that line
//! until it meets the unreddened main-sequence curve recovers its intrinsic
//! colors; the B−V shift is the color excess E(B−V) used by the distance
//! estimator.

use rayon::prelude::*;

use crate::algo::AkimaSpline;
use crate::photometry::{ColorIndex, StarRecord};

use super::config::PipelineConfig;

/// A star together with its dereddened colors and corrected V magnitude.
///
/// Correction is a pure transformation: the observed record is carried
/// along unchanged and the corrected quantities live beside it.
#[derive(Debug, Clone)]
pub struct CorrectedStar {
    /// The observed catalog record
    pub observed: StarRecord,

    /// Intrinsic (dereddened) color index at the reddening-line
    /// intersection
    pub color: ColorIndex,

    /// Absolute V magnitude of the main sequence at the intersection B−V
    pub v_mag: f64,
}

impl CorrectedStar {
    /// Color excess E(B−V): observed minus intrinsic B−V.
    pub fn color_excess(&self) -> f64 {
        self.observed.color.bv - self.color.bv
    }

    /// Apparent minus absolute V magnitude at the intersection.
    pub fn magnitude_offset(&self) -> f64 {
        self.observed.magnitude.v - self.v_mag
    }
}

/// Searches the main-sequence curve for each star's reddening-line
/// intersection.
///
/// Holds shared read-only references to the two fitted reference splines;
/// per-star work is independent and runs in parallel.
pub struct ReddeningCorrector<'a> {
    /// Main-sequence curve in the color-color plane, U−B as a function of
    /// B−V
    color_curve: &'a AkimaSpline,

    /// Main-sequence absolute V magnitude as a function of B−V
    magnitude_curve: &'a AkimaSpline,

    /// Lower end of the intersection scan, one magnitude below the curve's
    /// bluest sample
    scan_start: f64,

    config: PipelineConfig,
}

impl<'a> ReddeningCorrector<'a> {
    /// Create a corrector over fitted reference curves.
    ///
    /// `curve_min_bv` is the bluest B−V of the color reference table; the
    /// scan starts one magnitude below it so heavily reddened stars can
    /// still reach the curve.
    pub fn new(
        color_curve: &'a AkimaSpline,
        magnitude_curve: &'a AkimaSpline,
        curve_min_bv: f64,
        config: PipelineConfig,
    ) -> Self {
        Self {
            color_curve,
            magnitude_curve,
            scan_start: curve_min_bv - 1.0,
            config,
        }
    }

    /// Deredden one star, or `None` when its reddening line never comes
    /// within tolerance of the main-sequence curve.
    ///
    /// A missing intersection is a per-star exclusion, not an error: the
    /// star simply drops out of the distance estimate.
    pub fn correct(&self, star: &StarRecord) -> Option<CorrectedStar> {
        let k = self.config.reddening_slope;
        // Line through the star's observed point: ub = k0 + K * bv.
        let k0 = star.color.ub - k * star.color.bv;

        let bv = self.intersect(k0, star.color.bv)?;
        Some(CorrectedStar {
            observed: star.clone(),
            color: ColorIndex::new(bv, k0 + k * bv),
            v_mag: self.magnitude_curve.predict(bv),
        })
    }

    /// Deredden a batch of stars, dropping the uncorrectable ones.
    ///
    /// Stars are processed in parallel; output order follows input order.
    pub fn correct_all(&self, stars: &[StarRecord]) -> Vec<CorrectedStar> {
        stars
            .par_iter()
            .filter_map(|star| self.correct(star))
            .collect()
    }

    /// Scan for the reddening line's intersection with the color curve.
    ///
    /// Walks B−V from the scan start up to `bv_limit` (the star's own
    /// observed B−V) in fixed steps, and keeps the *last* point where the
    /// curve and the line differ by less than the tolerance. When several
    /// scan points qualify, the one closest to the star's own B−V wins;
    /// this tie-break is kept deliberately because the published distance
    /// estimates depend on it.
    fn intersect(&self, k0: f64, bv_limit: f64) -> Option<f64> {
        let k = self.config.reddening_slope;
        let tolerance = self.config.intersection_tolerance;

        let mut found = None;
        let mut bv = self.scan_start;
        while bv <= bv_limit {
            let line = k0 + k * bv;
            if (self.color_curve.predict(bv) - line).abs() < tolerance {
                found = Some(bv);
            }
            bv += self.config.search_step;
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photometry::Magnitude;
    use approx::assert_relative_eq;

    /// The reference line ub = 0.72 * bv, sampled at its ends. Every point
    /// of this "curve" lies on a reddening line through the origin.
    fn diagonal_curve() -> AkimaSpline {
        AkimaSpline::fit(&[0.0, 1.0], &[0.0, 0.72]).unwrap()
    }

    fn flat_magnitude_curve() -> AkimaSpline {
        AkimaSpline::fit(&[0.0, 1.0], &[2.0, 2.0]).unwrap()
    }

    fn star_with_color(bv: f64, ub: f64, v: f64) -> StarRecord {
        let b = v + bv;
        let u = b + ub;
        StarRecord::new(0, String::new(), "B2V".to_string(), Magnitude::new(u, b, v))
    }

    #[test]
    fn star_on_curve_keeps_its_color() {
        let color = diagonal_curve();
        let magnitude = flat_magnitude_curve();
        let corrector =
            ReddeningCorrector::new(&color, &magnitude, 0.0, PipelineConfig::default());

        let star = star_with_color(0.5, 0.36, 10.0);
        let corrected = corrector.correct(&star).expect("on-curve star corrects");

        // Last-match-wins: the scan ends at the star's own B-V.
        assert_relative_eq!(corrected.color.bv, 0.5, epsilon = 1e-3);
        assert_relative_eq!(corrected.color_excess(), 0.0, epsilon = 1e-3);
        assert_relative_eq!(corrected.v_mag, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn reddened_star_slides_down_the_line() {
        // Curve ub = 0 (horizontal), star above it on a slope-0.72 line
        // through (0.25, 0.0): intersection at bv = 0.25.
        let color = AkimaSpline::fit(&[0.0, 1.0], &[0.0, 0.0]).unwrap();
        let magnitude = flat_magnitude_curve();
        let corrector =
            ReddeningCorrector::new(&color, &magnitude, 0.0, PipelineConfig::default());

        let bv_obs = 0.75;
        let ub_obs = 0.72 * (bv_obs - 0.25);
        let star = star_with_color(bv_obs, ub_obs, 10.0);

        let corrected = corrector.correct(&star).expect("intersection exists");
        // Tolerance 0.01 at slope 0.72 admits bv within ~0.0139 of the
        // crossing; last-match-wins picks the upper edge of that window.
        assert!((corrected.color.bv - 0.25).abs() < 0.02);
        assert_relative_eq!(
            corrected.color.ub,
            0.72 * (corrected.color.bv - 0.25),
            epsilon = 1e-9
        );
        assert!(corrected.color_excess() > 0.4);
    }

    #[test]
    fn unreachable_curve_yields_none() {
        // Curve far above any point of the star's reddening line.
        let color = AkimaSpline::fit(&[0.0, 1.0], &[5.0, 5.0]).unwrap();
        let magnitude = flat_magnitude_curve();
        let corrector =
            ReddeningCorrector::new(&color, &magnitude, 0.0, PipelineConfig::default());

        let star = star_with_color(0.5, 0.0, 10.0);
        assert!(corrector.correct(&star).is_none());
    }

    #[test]
    fn batch_preserves_input_order() {
        let color = diagonal_curve();
        let magnitude = flat_magnitude_curve();
        let corrector =
            ReddeningCorrector::new(&color, &magnitude, 0.0, PipelineConfig::default());

        let stars = vec![
            star_with_color(0.2, 0.144, 9.0),
            star_with_color(0.5, 0.36, 10.0),
            star_with_color(0.8, 0.576, 11.0),
        ];
        let corrected = corrector.correct_all(&stars);

        assert_eq!(corrected.len(), 3);
        let observed_bv: Vec<f64> = corrected.iter().map(|c| c.observed.color.bv).collect();
        assert!(observed_bv.windows(2).all(|w| w[0] < w[1]));
    }
}
