//! Catalog and reference-table ingestion.
//!
//! This module is the boundary between the numerical pipeline and the
//! row-oriented CSV files it consumes. Columns are located by trimmed
//! header name rather than position, so catalogs exported with extra or
//! reordered columns still load:
//!
//! - Star catalog: `#`, `identifier`, `Mag U`, `Mag B`, `Mag V`,
//!   `spec. type`
//! - Reference color table: `(B - V)0`, `(U - B)0`
//! - Reference magnitude table: `(B - V)0`, `MV`
//!
//! A star row with any UBV magnitude of exactly zero is skipped: catalogs
//! use zero as a "no measurement" sentinel, never as a true magnitude.

use std::fs;
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::photometry::{ColorIndex, Magnitude, StarRecord};

/// Errors raised while loading catalog files.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog file is empty")]
    Empty,

    #[error("required column {0:?} not found in header")]
    MissingColumn(&'static str),
}

/// Locate a column by trimmed header name.
fn find_column(header: &str, name: &'static str) -> Result<usize, CatalogError> {
    header
        .split(',')
        .position(|field| field.trim() == name)
        .ok_or(CatalogError::MissingColumn(name))
}

/// Load a star catalog CSV into star records.
///
/// Rows whose U, B or V magnitude is exactly zero (the missing-measurement
/// sentinel) are skipped with a debug log line.
pub fn load_stars(path: &Path) -> Result<Vec<StarRecord>, CatalogError> {
    let content = fs::read_to_string(path)?;
    parse_stars(&content)
}

/// Parse star catalog rows from CSV text. See [`load_stars`].
pub fn parse_stars(content: &str) -> Result<Vec<StarRecord>, CatalogError> {
    let mut lines = content.lines();
    let header = lines.next().ok_or(CatalogError::Empty)?;

    let index_col = find_column(header, "#")?;
    let name_col = find_column(header, "identifier")?;
    let u_col = find_column(header, "Mag U")?;
    let b_col = find_column(header, "Mag B")?;
    let v_col = find_column(header, "Mag V")?;
    let sptype_col = find_column(header, "spec. type")?;

    let mut stars = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();

        let index = field_at(&fields, index_col)
            .and_then(|f| f.parse::<u32>().ok())
            .unwrap_or(0);
        let name = field_at(&fields, name_col).unwrap_or("").to_string();
        let sptype = field_at(&fields, sptype_col).unwrap_or("").to_string();
        let u = parse_mag(&fields, u_col);
        let b = parse_mag(&fields, b_col);
        let v = parse_mag(&fields, v_col);

        // Zero magnitude means "not measured"; such rows never enter the
        // pipeline.
        if u == 0.0 || b == 0.0 || v == 0.0 {
            debug!("skipping catalog row with missing magnitude: {name:?}");
            continue;
        }

        stars.push(StarRecord::new(index, name, sptype, Magnitude::new(u, b, v)));
    }

    Ok(stars)
}

/// Load a reference color table of `(B − V)0`, `(U − B)0` pairs.
pub fn load_color_table(path: &Path) -> Result<Vec<ColorIndex>, CatalogError> {
    let content = fs::read_to_string(path)?;
    parse_color_table(&content)
}

/// Parse reference color-table rows from CSV text.
pub fn parse_color_table(content: &str) -> Result<Vec<ColorIndex>, CatalogError> {
    let mut lines = content.lines();
    let header = lines.next().ok_or(CatalogError::Empty)?;

    let bv_col = find_column(header, "(B - V)0")?;
    let ub_col = find_column(header, "(U - B)0")?;

    let mut table = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        match (parse_value(&fields, bv_col), parse_value(&fields, ub_col)) {
            (Some(bv), Some(ub)) => table.push(ColorIndex::new(bv, ub)),
            _ => debug!("skipping unparseable reference row: {line:?}"),
        }
    }

    Ok(table)
}

/// Load a reference magnitude table of `(B − V)0`, `MV` pairs.
pub fn load_magnitude_table(path: &Path) -> Result<Vec<(f64, f64)>, CatalogError> {
    let content = fs::read_to_string(path)?;
    parse_magnitude_table(&content)
}

/// Parse reference magnitude-table rows from CSV text.
pub fn parse_magnitude_table(content: &str) -> Result<Vec<(f64, f64)>, CatalogError> {
    let mut lines = content.lines();
    let header = lines.next().ok_or(CatalogError::Empty)?;

    let bv_col = find_column(header, "(B - V)0")?;
    let mv_col = find_column(header, "MV")?;

    let mut table = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        match (parse_value(&fields, bv_col), parse_value(&fields, mv_col)) {
            (Some(bv), Some(mv)) => table.push((bv, mv)),
            _ => debug!("skipping unparseable reference row: {line:?}"),
        }
    }

    Ok(table)
}

fn field_at<'a>(fields: &[&'a str], column: usize) -> Option<&'a str> {
    fields.get(column).map(|f| f.trim())
}

fn parse_value(fields: &[&str], column: usize) -> Option<f64> {
    field_at(fields, column).and_then(|f| f.parse::<f64>().ok())
}

/// Parse a magnitude field; an unparseable field reads as the zero
/// sentinel, which drops the row.
fn parse_mag(fields: &[&str], column: usize) -> f64 {
    parse_value(fields, column).unwrap_or(0.0)
}
