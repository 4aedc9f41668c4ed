//! Photometric distance estimation for open star clusters.
//!
//! This crate estimates the distance to a star cluster from UBV catalog
//! photometry. Observed color indices are compared against an interpolated
//! zero-age main-sequence curve; each star is slid back along the
//! interstellar reddening line to the curve, the resulting color excess and
//! magnitude offset go through the distance-modulus relation, and the
//! per-star distances are aggregated into a cluster estimate.
//!
//! Stages, in flow order:
//!
//! 1. Catalog and reference-table ingestion ([`catalog`])
//! 2. Outlier rejection against the reference extent ([`pipeline::filter`])
//! 3. Three-region color partition with per-region averages
//!    ([`pipeline::regions`])
//! 4. Per-star reddening-line intersection search
//!    ([`pipeline::correction`])
//! 5. Distance modulus and aggregation ([`pipeline::distance`])
//!
//! Reference curves are fitted with an Akima spline ([`algo::spline`]);
//! tab-separated plotting products are emitted through [`io`].

pub mod algo;
pub mod catalog;
pub mod io;
pub mod photometry;
pub mod pipeline;

// Re-exports for easier access
pub use algo::{AkimaSpline, ColorBounds};
pub use photometry::{ColorIndex, Magnitude, StarRecord};
pub use pipeline::{
    ClusterDistanceReport, CorrectedStar, DistanceSummary, Pipeline, PipelineConfig,
    PipelineError,
};
