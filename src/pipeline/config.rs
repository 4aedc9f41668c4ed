//! Pipeline configuration.

/// Slope of the interstellar reddening line in the (B−V, U−B) plane,
/// E(U−B)/E(B−V) for the standard galactic reddening law.
pub const STANDARD_REDDENING_SLOPE: f64 = 0.72;

/// Ratio of total to selective extinction, R_V = A_V / E(B−V), for the
/// standard galactic reddening law.
pub const STANDARD_EXTINCTION_RATIO: f64 = 3.1;

/// B−V step of the intersection search scan.
pub const DEFAULT_SEARCH_STEP: f64 = 1e-4;

/// Maximum |curve − reddening line| difference accepted as an intersection.
pub const DEFAULT_INTERSECTION_TOLERANCE: f64 = 0.01;

/// How far outside the reference curve's bounding box a star's color may
/// fall before the outlier filter rejects it, in magnitudes per axis.
pub const DEFAULT_OUTLIER_MARGIN: f64 = 0.3;

/// Tunable parameters of the dereddening pipeline.
///
/// The defaults reproduce the standard galactic reddening law and the
/// search granularity the distance estimates were calibrated with; they are
/// fields rather than scattered literals so individual stages can be tested
/// and tuned independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Reddening-line slope K in `U−B = k0 + K·(B−V)`
    pub reddening_slope: f64,

    /// Total-to-selective extinction ratio R_V in the distance modulus
    pub extinction_ratio: f64,

    /// B−V step of the intersection scan
    pub search_step: f64,

    /// Acceptance tolerance of the intersection scan
    pub intersection_tolerance: f64,

    /// Outlier-filter margin around the reference bounding box
    pub outlier_margin: f64,

    /// Drop stars whose spectral type is not luminosity class V
    pub main_sequence_only: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            reddening_slope: STANDARD_REDDENING_SLOPE,
            extinction_ratio: STANDARD_EXTINCTION_RATIO,
            search_step: DEFAULT_SEARCH_STEP,
            intersection_tolerance: DEFAULT_INTERSECTION_TOLERANCE,
            outlier_margin: DEFAULT_OUTLIER_MARGIN,
            main_sequence_only: true,
        }
    }
}
