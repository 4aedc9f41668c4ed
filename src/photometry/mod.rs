//! Photometric value types for the UBV system.

pub mod color;
pub mod magnitude;
pub mod star;

pub use color::ColorIndex;
pub use magnitude::Magnitude;
pub use star::StarRecord;
