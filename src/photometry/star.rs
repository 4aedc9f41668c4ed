//! Catalog star records.

use super::color::ColorIndex;
use super::magnitude::Magnitude;

/// One star from a photometric catalog.
///
/// The color index is always derived from the magnitudes at construction
/// time and never independently assigned. Records flow through the pipeline
/// read-only; dereddening produces a separate corrected value
/// (`pipeline::correction::CorrectedStar`) instead of mutating the record.
#[derive(Debug, Clone, PartialEq)]
pub struct StarRecord {
    /// Catalog row id. Not required to be unique.
    pub index: u32,

    /// Catalog identifier (e.g. "BD+56 524")
    pub name: String,

    /// Spectral type string as given by the catalog (e.g. "B2V", "A0III")
    pub spectral_type: String,

    /// Observed UBV magnitudes
    pub magnitude: Magnitude,

    /// Color index derived from `magnitude`
    pub color: ColorIndex,
}

impl StarRecord {
    /// Create a star record, deriving its color index from the magnitudes.
    pub fn new(index: u32, name: String, spectral_type: String, magnitude: Magnitude) -> Self {
        let color = ColorIndex::from_magnitude(&magnitude);
        Self {
            index,
            name,
            spectral_type,
            magnitude,
            color,
        }
    }

    /// Whether the catalog spectral type marks this star as luminosity
    /// class V (a main-sequence dwarf).
    ///
    /// The catalog encodes the luminosity class as a Roman numeral suffix,
    /// so a simple substring test matches the original screening rule.
    /// Giants ("III") do not contain a bare "V" and are screened out.
    pub fn is_main_sequence(&self) -> bool {
        self.spectral_type.contains('V')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(sptype: &str) -> StarRecord {
        StarRecord::new(
            1,
            "test".to_string(),
            sptype.to_string(),
            Magnitude::new(8.0, 7.6, 7.3),
        )
    }

    #[test]
    fn color_derived_at_construction() {
        let s = star("B2V");
        assert_eq!(s.color.bv, 7.6 - 7.3);
        assert_eq!(s.color.ub, 8.0 - 7.6);
    }

    #[test]
    fn main_sequence_screen() {
        assert!(star("B2V").is_main_sequence());
        assert!(star("A0IV").is_main_sequence());
        assert!(!star("K3I").is_main_sequence());
        assert!(!star("G8").is_main_sequence());
    }
}
