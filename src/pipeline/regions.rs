//! Region partitioning and per-region color averaging.
//!
//! Filtered stars are split into three disjoint color regions used for
//! averaged reddening diagnostics:
//!
//! 1. `B−V > 0.8` — redder stars, the presumed giant-branch contamination
//!    zone;
//! 2. otherwise `U−B > 0.0` — the lower main sequence;
//! 3. the rest — the blue upper main sequence.
//!
//! The decision tree is evaluated in that priority order per star, so the
//! partition is always disjoint and covering.

use crate::photometry::{ColorIndex, StarRecord};

use super::PipelineError;

/// The three color regions of a filtered star set.
#[derive(Debug, Clone, Default)]
pub struct RegionPartition {
    /// Region 1: B−V > 0.8
    pub red: Vec<StarRecord>,

    /// Region 2: B−V ≤ 0.8, U−B > 0.0
    pub positive_ub: Vec<StarRecord>,

    /// Region 3: B−V ≤ 0.8, U−B ≤ 0.0
    pub negative_ub: Vec<StarRecord>,
}

impl RegionPartition {
    /// Partition stars by the fixed color decision tree.
    pub fn split(stars: &[StarRecord]) -> Self {
        let mut partition = RegionPartition::default();
        for star in stars {
            if star.color.bv > 0.8 {
                partition.red.push(star.clone());
            } else if star.color.ub > 0.0 {
                partition.positive_ub.push(star.clone());
            } else {
                partition.negative_ub.push(star.clone());
            }
        }
        partition
    }

    /// Mean color index of each region, in region order.
    ///
    /// The two components are averaged independently (mean B−V and mean
    /// U−B over the region's members).
    ///
    /// # Errors
    /// Returns [`PipelineError::EmptyRegion`] for the first empty region
    /// instead of letting a zero count propagate as NaN.
    pub fn averages(&self) -> Result<[ColorIndex; 3], PipelineError> {
        let regions = [&self.red, &self.positive_ub, &self.negative_ub];
        let mut averages = [ColorIndex::new(0.0, 0.0); 3];

        for (i, region) in regions.iter().enumerate() {
            averages[i] =
                mean_color(region).ok_or(PipelineError::EmptyRegion { region: i + 1 })?;
        }
        Ok(averages)
    }

    /// Total number of stars across all three regions.
    pub fn len(&self) -> usize {
        self.red.len() + self.positive_ub.len() + self.negative_ub.len()
    }

    /// Whether all three regions are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Independent scalar means of B−V and U−B over a star set, or `None` for
/// an empty set.
fn mean_color(stars: &[StarRecord]) -> Option<ColorIndex> {
    if stars.is_empty() {
        return None;
    }

    let n = stars.len() as f64;
    let bv_sum: f64 = stars.iter().map(|s| s.color.bv).sum();
    let ub_sum: f64 = stars.iter().map(|s| s.color.ub).sum();
    Some(ColorIndex::new(bv_sum / n, ub_sum / n))
}
