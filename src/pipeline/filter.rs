//! Outlier rejection against the reference curve's extent.

use log::debug;

use crate::algo::ColorBounds;
use crate::photometry::StarRecord;

use super::config::PipelineConfig;

/// Drop stars whose colors fall outside the reference bounding box by more
/// than the configured margin, and (when enabled) stars that are not
/// luminosity class V.
///
/// Both axes are tested independently; violating either rejects the star.
/// Input order is preserved and the operation is idempotent: filtering an
/// already filtered set with the same bounds changes nothing.
pub fn filter_outliers(
    stars: &[StarRecord],
    bounds: &ColorBounds,
    config: &PipelineConfig,
) -> Vec<StarRecord> {
    let kept: Vec<StarRecord> = stars
        .iter()
        .filter(|star| bounds.contains(&star.color, config.outlier_margin))
        .filter(|star| !config.main_sequence_only || star.is_main_sequence())
        .cloned()
        .collect();

    debug!(
        "outlier filter kept {} of {} stars (margin {})",
        kept.len(),
        stars.len(),
        config.outlier_margin
    );
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photometry::{ColorIndex, Magnitude};

    fn star(name: &str, u: f64, b: f64, v: f64, sptype: &str) -> StarRecord {
        StarRecord::new(0, name.to_string(), sptype.to_string(), Magnitude::new(u, b, v))
    }

    fn bounds() -> ColorBounds {
        ColorBounds::from_samples(&[
            ColorIndex::new(-0.3, -1.1),
            ColorIndex::new(1.4, 1.2),
        ])
        .unwrap()
    }

    fn config() -> PipelineConfig {
        PipelineConfig {
            main_sequence_only: false,
            ..PipelineConfig::default()
        }
    }

    #[test]
    fn keeps_in_box_and_within_margin() {
        // bv = 0.5, ub = 0.3: inside the box.
        let inside = star("inside", 10.3, 10.0, 9.5, "B2V");
        // bv = 1.6: 0.2 past bv_max, within the 0.3 margin.
        let near = star("near", 12.0, 11.6, 10.0, "B2V");
        // bv = 2.0: 0.6 past bv_max.
        let far = star("far", 13.0, 12.0, 10.0, "B2V");

        let kept = filter_outliers(&[inside, near, far], &bounds(), &config());
        let names: Vec<&str> = kept.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["inside", "near"]);
    }

    #[test]
    fn either_axis_can_reject() {
        // bv fine, ub = 1.6 is 0.4 past ub_max.
        let ub_out = star("ub_out", 12.0, 10.4, 10.0, "B2V");
        assert!(filter_outliers(&[ub_out], &bounds(), &config()).is_empty());
    }

    #[test]
    fn preserves_order_and_is_idempotent() {
        let stars = vec![
            star("a", 10.3, 10.0, 9.5, "B2V"),
            star("b", 9.9, 10.0, 9.8, "A0V"),
            star("c", 13.0, 12.0, 10.0, "B5V"),
        ];
        let once = filter_outliers(&stars, &bounds(), &config());
        let twice = filter_outliers(&once, &bounds(), &config());
        assert_eq!(once, twice);
        assert_eq!(once[0].name, "a");
        assert_eq!(once[1].name, "b");
    }

    #[test]
    fn spectral_screen_drops_giants() {
        let dwarf = star("dwarf", 10.3, 10.0, 9.5, "B2V");
        let giant = star("giant", 10.3, 10.0, 9.5, "K3III");

        let config = PipelineConfig::default();
        let kept = filter_outliers(&[dwarf, giant], &bounds(), &config);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "dwarf");
    }
}
