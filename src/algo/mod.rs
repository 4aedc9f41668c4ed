//! Numerical building blocks for the dereddening pipeline.

pub mod bounds;
pub mod spline;

pub use bounds::{BoundsError, ColorBounds};
pub use spline::{AkimaSpline, SplineError};
