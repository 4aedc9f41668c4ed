//! The photometric dereddening and distance-estimation pipeline.
//!
//! Data flows strictly forward through the stages:
//!
//! ```text
//! raw catalog -> outlier filter -> region partition (diagnostics)
//!                              \-> reddening correction -> distances
//! ```
//!
//! [`Pipeline`] fits the two reference splines once, derives the reference
//! bounding box, and exposes the staged computation plus a [`Pipeline::run`]
//! that produces a full [`ClusterDistanceReport`]. Per-star failures (no
//! reddening-line intersection) are absorbed; whole-dataset failures (empty
//! region, empty correctable set, degenerate reference tables) abort the
//! run with a [`PipelineError`].

pub mod config;
pub mod correction;
pub mod distance;
pub mod filter;
pub mod regions;

use log::info;
use thiserror::Error;

use crate::algo::{AkimaSpline, BoundsError, ColorBounds, SplineError};
use crate::photometry::{ColorIndex, StarRecord};

pub use config::PipelineConfig;
pub use correction::{CorrectedStar, ReddeningCorrector};
pub use distance::{distance_parsecs, DistanceSummary};
pub use filter::filter_outliers;
pub use regions::RegionPartition;

/// Whole-dataset failures of a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("region {region} of the color-color partition is empty")]
    EmptyRegion { region: usize },

    #[error("no star's reddening line intersects the reference curve")]
    NoCorrectableStars,

    #[error("failed to fit reference curve: {0}")]
    Spline(#[from] SplineError),

    #[error("invalid reference table: {0}")]
    Bounds(#[from] BoundsError),
}

/// Everything a pipeline run produces, stage by stage.
#[derive(Debug, Clone)]
pub struct ClusterDistanceReport {
    /// Stars surviving the outlier filter, input order preserved
    pub filtered: Vec<StarRecord>,

    /// The three color regions of the filtered stars
    pub regions: RegionPartition,

    /// Mean color index of each region
    pub region_averages: [ColorIndex; 3],

    /// Dereddened stars (uncorrectable ones silently dropped)
    pub corrected: Vec<CorrectedStar>,

    /// Sorted per-star distances with mean/min/max
    pub distances: DistanceSummary,
}

/// The parameterized dereddening pipeline.
///
/// Construction fits both reference splines and computes the reference
/// bounding box; the instance is then reusable across catalogs.
#[derive(Debug)]
pub struct Pipeline {
    config: PipelineConfig,
    color_curve: AkimaSpline,
    magnitude_curve: AkimaSpline,
    bounds: ColorBounds,
}

impl Pipeline {
    /// Build a pipeline from the two reference tables.
    ///
    /// `color_table` holds the main-sequence (B−V, U−B) samples,
    /// `magnitude_table` the (B−V, MV) samples. Both must be strictly
    /// ascending in B−V.
    ///
    /// # Errors
    /// Fails when either table is degenerate; there is no meaningful run
    /// without fitted reference curves.
    pub fn new(
        color_table: &[ColorIndex],
        magnitude_table: &[(f64, f64)],
        config: PipelineConfig,
    ) -> Result<Self, PipelineError> {
        let bounds = ColorBounds::from_samples(color_table)?;

        let bv: Vec<f64> = color_table.iter().map(|ci| ci.bv).collect();
        let ub: Vec<f64> = color_table.iter().map(|ci| ci.ub).collect();
        let color_curve = AkimaSpline::fit(&bv, &ub)?;

        let mag_bv: Vec<f64> = magnitude_table.iter().map(|&(bv, _)| bv).collect();
        let mv: Vec<f64> = magnitude_table.iter().map(|&(_, mv)| mv).collect();
        let magnitude_curve = AkimaSpline::fit(&mag_bv, &mv)?;

        Ok(Self {
            config,
            color_curve,
            magnitude_curve,
            bounds,
        })
    }

    /// Run every stage over a raw catalog.
    pub fn run(&self, stars: &[StarRecord]) -> Result<ClusterDistanceReport, PipelineError> {
        let filtered = filter_outliers(stars, &self.bounds, &self.config);
        info!("{} of {} stars pass the outlier filter", filtered.len(), stars.len());

        let regions = RegionPartition::split(&filtered);
        let region_averages = regions.averages()?;

        let corrector = ReddeningCorrector::new(
            &self.color_curve,
            &self.magnitude_curve,
            self.bounds.bv_min,
            self.config,
        );
        let corrected = corrector.correct_all(&filtered);
        info!("{} of {} stars are correctable", corrected.len(), filtered.len());

        let distances = DistanceSummary::from_corrected(&corrected, self.config.extinction_ratio)?;
        info!(
            "cluster distance: mean {:.1} pc (min {:.1}, max {:.1})",
            distances.mean, distances.min, distances.max
        );

        Ok(ClusterDistanceReport {
            filtered,
            regions,
            region_averages,
            corrected,
            distances,
        })
    }

    /// Densely sampled color-color reference curve, for plotting output.
    pub fn color_curve_samples(&self, step: f64) -> Vec<(f64, f64)> {
        self.color_curve.sample(step)
    }

    /// Densely sampled magnitude reference curve, for plotting output.
    pub fn magnitude_curve_samples(&self, step: f64) -> Vec<(f64, f64)> {
        self.magnitude_curve.sample(step)
    }

    /// Bounding box of the color reference table.
    pub fn bounds(&self) -> &ColorBounds {
        &self.bounds
    }

    /// The pipeline's configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }
}
