//! Observed stellar brightness in the Johnson UBV photometric system.

/// Apparent magnitudes of a star in the U, B and V bands.
///
/// Magnitudes are dimensionless logarithmic brightness measures; smaller
/// values mean brighter stars. A value of exactly zero is used by catalog
/// files as a "missing measurement" sentinel and such rows never reach the
/// pipeline (see the catalog loader).
///
/// Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnitude {
    /// Ultraviolet band magnitude
    pub u: f64,

    /// Blue band magnitude
    pub b: f64,

    /// Visual band magnitude
    pub v: f64,
}

impl Magnitude {
    /// Create a magnitude triple from the three band measurements.
    pub fn new(u: f64, b: f64, v: f64) -> Self {
        Self { u, b, v }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_bands() {
        let mag = Magnitude::new(7.2, 6.9, 6.5);
        assert_eq!(mag.u, 7.2);
        assert_eq!(mag.b, 6.9);
        assert_eq!(mag.v, 6.5);
    }
}
