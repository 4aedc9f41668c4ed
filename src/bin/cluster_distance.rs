//! Cluster distance estimator.
//!
//! Reads a UBV star catalog and two main-sequence reference tables, runs
//! the dereddening pipeline, writes the intermediate products as
//! tab-separated `.dat` files for plotting, and prints the aggregated
//! cluster distance.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use cluster_distance::pipeline::config::{
    DEFAULT_INTERSECTION_TOLERANCE, DEFAULT_OUTLIER_MARGIN, DEFAULT_SEARCH_STEP,
    STANDARD_EXTINCTION_RATIO, STANDARD_REDDENING_SLOPE,
};
use cluster_distance::{catalog, io as output, Pipeline, PipelineConfig};

/// B−V step used when sampling the fitted curves for plotting.
const CURVE_SAMPLE_STEP: f64 = 0.01;

#[derive(Parser, Debug)]
#[command(
    name = "cluster-distance",
    about = "Estimates the distance to a star cluster from UBV photometry",
    long_about = None
)]
struct Args {
    /// Directory containing the input catalog and reference tables
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Directory the .dat products are written to
    #[arg(long, default_value = "data")]
    out_dir: PathBuf,

    /// Star catalog CSV file name
    #[arg(long, default_value = "stars.csv")]
    stars: String,

    /// Main-sequence (luminosity class V) reference table file name
    #[arg(long, default_value = "bolometric_corrections_V.csv")]
    main_table: String,

    /// Giant-branch (luminosity class III) reference table file name,
    /// re-emitted for plotting alongside the star colors
    #[arg(long, default_value = "bolometric_corrections_III.csv")]
    giant_table: String,

    /// Reddening-line slope E(U-B)/E(B-V)
    #[arg(long, default_value_t = STANDARD_REDDENING_SLOPE)]
    reddening_slope: f64,

    /// Total-to-selective extinction ratio R_V
    #[arg(long, default_value_t = STANDARD_EXTINCTION_RATIO)]
    extinction_ratio: f64,

    /// B-V step of the intersection search
    #[arg(long, default_value_t = DEFAULT_SEARCH_STEP)]
    search_step: f64,

    /// Intersection acceptance tolerance in magnitudes
    #[arg(long, default_value_t = DEFAULT_INTERSECTION_TOLERANCE)]
    tolerance: f64,

    /// Outlier margin around the reference bounding box in magnitudes
    #[arg(long, default_value_t = DEFAULT_OUTLIER_MARGIN)]
    outlier_margin: f64,

    /// Keep stars of all luminosity classes (skip the spectral-type screen)
    #[arg(long)]
    all_spectral_types: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let stars = catalog::load_stars(&args.data_dir.join(&args.stars))?;
    let main_colors = catalog::load_color_table(&args.data_dir.join(&args.main_table))?;
    let giant_colors = catalog::load_color_table(&args.data_dir.join(&args.giant_table))?;
    let magnitude_table = catalog::load_magnitude_table(&args.data_dir.join(&args.main_table))?;
    info!(
        "loaded {} stars, {} main-sequence samples, {} giant samples",
        stars.len(),
        main_colors.len(),
        giant_colors.len()
    );

    let config = PipelineConfig {
        reddening_slope: args.reddening_slope,
        extinction_ratio: args.extinction_ratio,
        search_step: args.search_step,
        intersection_tolerance: args.tolerance,
        outlier_margin: args.outlier_margin,
        main_sequence_only: !args.all_spectral_types,
    };
    let pipeline = Pipeline::new(&main_colors, &magnitude_table, config)?;
    let report = pipeline.run(&stars)?;

    let out = &args.out_dir;
    output::write_pairs(
        out.join("main_color_indexes.dat"),
        main_colors.iter().map(|ci| (ci.bv, ci.ub)),
    )?;
    output::write_pairs(
        out.join("giant_color_indexes.dat"),
        giant_colors.iter().map(|ci| (ci.bv, ci.ub)),
    )?;
    output::write_pairs(out.join("main_magv_to_bv.dat"), magnitude_table.iter().copied())?;
    output::write_pairs(
        out.join("main_color_indexes_interp.dat"),
        pipeline.color_curve_samples(CURVE_SAMPLE_STEP),
    )?;
    output::write_pairs(
        out.join("main_magv_to_bv_interp.dat"),
        pipeline.magnitude_curve_samples(CURVE_SAMPLE_STEP),
    )?;

    output::write_star_colors(out.join("stars_color_indexes.dat"), &report.filtered)?;
    output::write_star_colors(out.join("stars1_color_indexes.dat"), &report.regions.red)?;
    output::write_star_colors(
        out.join("stars2_color_indexes.dat"),
        &report.regions.positive_ub,
    )?;
    output::write_star_colors(
        out.join("stars3_color_indexes.dat"),
        &report.regions.negative_ub,
    )?;
    for (i, average) in report.region_averages.iter().enumerate() {
        output::write_pairs(
            out.join(format!("stars{}_average_color_index.dat", i + 1)),
            [(average.bv, average.ub)],
        )?;
    }

    let correctable: Vec<_> = report
        .corrected
        .iter()
        .map(|c| c.observed.clone())
        .collect();
    output::write_star_colors(
        out.join("stars_color_indexes_can_be_corrected.dat"),
        &correctable,
    )?;
    output::write_v_vs_bv(out.join("stars_magv_to_bv.dat"), &correctable)?;
    output::write_corrected_colors(
        out.join("stars_color_indexes_corrected.dat"),
        &report.corrected,
    )?;
    output::write_corrected_v_vs_bv(
        out.join("stars_magv_to_bv_corrected.dat"),
        &report.corrected,
    )?;
    output::write_distances(out.join("star_distances.dat"), &report.distances)?;

    println!(
        "{} correctable stars; distance mean {:.1} pc, min {:.1} pc, max {:.1} pc",
        report.corrected.len(),
        report.distances.mean,
        report.distances.min,
        report.distances.max
    );

    Ok(())
}
