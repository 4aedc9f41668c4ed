//! Distance estimation from dereddened photometry.
//!
//! The distance modulus relates apparent magnitude m, absolute magnitude M
//! and distance r in parsecs: `m − M = 5·log10(r) − 5 + R_V·E(B−V)`.
//! Solved for r with the star's corrected V magnitude as M and its color
//! excess E(B−V), each correctable star yields one distance estimate; the
//! cluster distance is the mean over all of them.

use super::correction::CorrectedStar;
use super::PipelineError;

/// Distance to one corrected star in parsecs.
///
/// `extinction_ratio` is R_V, the total-to-selective extinction ratio that
/// converts the color excess into V-band extinction.
pub fn distance_parsecs(star: &CorrectedStar, extinction_ratio: f64) -> f64 {
    let excess = star.color_excess();
    let delta = star.magnitude_offset();
    10f64.powf((delta + 5.0 - extinction_ratio * excess) / 5.0)
}

/// Aggregated per-star distances of a cluster.
#[derive(Debug, Clone)]
pub struct DistanceSummary {
    /// Per-star distances in parsecs, sorted ascending
    pub distances: Vec<f64>,

    /// Arithmetic mean distance in parsecs
    pub mean: f64,

    /// Smallest per-star distance in parsecs
    pub min: f64,

    /// Largest per-star distance in parsecs
    pub max: f64,
}

impl DistanceSummary {
    /// Compute, sort and aggregate per-star distances.
    ///
    /// # Errors
    /// Returns [`PipelineError::NoCorrectableStars`] for an empty input
    /// instead of producing a NaN mean.
    pub fn from_corrected(
        stars: &[CorrectedStar],
        extinction_ratio: f64,
    ) -> Result<Self, PipelineError> {
        if stars.is_empty() {
            return Err(PipelineError::NoCorrectableStars);
        }

        let mut distances: Vec<f64> = stars
            .iter()
            .map(|star| distance_parsecs(star, extinction_ratio))
            .collect();
        distances.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let mean = distances.iter().sum::<f64>() / distances.len() as f64;
        let min = distances[0];
        let max = distances[distances.len() - 1];

        Ok(Self {
            distances,
            mean,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photometry::{ColorIndex, Magnitude, StarRecord};
    use approx::assert_relative_eq;

    /// A corrected star with chosen magnitude offset and color excess.
    fn corrected(delta_mag: f64, excess: f64) -> CorrectedStar {
        let bv_corrected = 0.3;
        let v_obs = 10.0;
        let bv_obs = bv_corrected + excess;
        let star = StarRecord::new(
            0,
            String::new(),
            "B2V".to_string(),
            Magnitude::new(v_obs + bv_obs, v_obs + bv_obs, v_obs),
        );
        CorrectedStar {
            observed: star,
            color: ColorIndex::new(bv_corrected, 0.0),
            v_mag: v_obs - delta_mag,
        }
    }

    #[test]
    fn zero_point_is_ten_parsecs() {
        let star = corrected(0.0, 0.0);
        assert_relative_eq!(distance_parsecs(&star, 3.1), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn five_magnitudes_are_a_decade() {
        let star = corrected(5.0, 0.0);
        assert_relative_eq!(distance_parsecs(&star, 3.1), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn extinction_shrinks_the_distance() {
        let clear = distance_parsecs(&corrected(5.0, 0.0), 3.1);
        let dusty = distance_parsecs(&corrected(5.0, 0.5), 3.1);
        // R_V * 0.5 = 1.55 mag of extinction, a factor 10^(1.55/5).
        assert_relative_eq!(clear / dusty, 10f64.powf(1.55 / 5.0), epsilon = 1e-6);
    }

    #[test]
    fn summary_sorts_and_aggregates() {
        let stars = vec![corrected(5.0, 0.0), corrected(0.0, 0.0), corrected(2.5, 0.0)];
        let summary = DistanceSummary::from_corrected(&stars, 3.1).unwrap();

        assert!(summary
            .distances
            .windows(2)
            .all(|pair| pair[0] <= pair[1]));
        assert_relative_eq!(summary.min, 10.0, epsilon = 1e-9);
        assert_relative_eq!(summary.max, 100.0, epsilon = 1e-9);
        let expected_mean = (10.0 + 100.0 + 10f64.powf(1.5)) / 3.0;
        assert_relative_eq!(summary.mean, expected_mean, epsilon = 1e-9);
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = DistanceSummary::from_corrected(&[], 3.1).unwrap_err();
        assert!(matches!(err, PipelineError::NoCorrectableStars));
    }
}
