//! Tab-separated output files for plotting and inspection.
//!
//! Every product is a two-column (or one-column, for distances) text file
//! with 4-decimal fixed-point values, ready for gnuplot-style consumption.
//! Pure serialization; the numeric core never depends on this module.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::photometry::StarRecord;
use crate::pipeline::{CorrectedStar, DistanceSummary};

/// Write `(x, y)` pairs as `x<TAB>y` rows.
pub fn write_pairs<P, I>(path: P, pairs: I) -> io::Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut file = BufWriter::new(File::create(path)?);
    for (x, y) in pairs {
        writeln!(file, "{x:.4}\t{y:.4}")?;
    }
    file.flush()
}

/// Write each star's color index as `bv<TAB>ub` rows.
pub fn write_star_colors<P: AsRef<Path>>(path: P, stars: &[StarRecord]) -> io::Result<()> {
    write_pairs(path, stars.iter().map(|s| (s.color.bv, s.color.ub)))
}

/// Write each star's `bv<TAB>V` row (color-magnitude scatter).
pub fn write_v_vs_bv<P: AsRef<Path>>(path: P, stars: &[StarRecord]) -> io::Result<()> {
    write_pairs(path, stars.iter().map(|s| (s.color.bv, s.magnitude.v)))
}

/// Write corrected color indices as `bv<TAB>ub` rows.
pub fn write_corrected_colors<P: AsRef<Path>>(
    path: P,
    corrected: &[CorrectedStar],
) -> io::Result<()> {
    write_pairs(path, corrected.iter().map(|c| (c.color.bv, c.color.ub)))
}

/// Write the corrected color-magnitude scatter, `bv<TAB>corrected V`.
pub fn write_corrected_v_vs_bv<P: AsRef<Path>>(
    path: P,
    corrected: &[CorrectedStar],
) -> io::Result<()> {
    write_pairs(path, corrected.iter().map(|c| (c.color.bv, c.v_mag)))
}

/// Write the sorted per-star distances, one per row.
pub fn write_distances<P: AsRef<Path>>(path: P, summary: &DistanceSummary) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    for distance in &summary.distances {
        writeln!(file, "{distance:.4}")?;
    }
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn pairs_format_is_fixed_point() {
        let dir = std::env::temp_dir();
        let path = dir.join("cluster_distance_write_pairs_test.dat");

        write_pairs(&path, vec![(0.5, 0.36), (1.0, 0.72004)]).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "0.5000\t0.3600\n1.0000\t0.7200\n");

        fs::remove_file(&path).ok();
    }
}
