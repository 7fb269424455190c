//! File-to-file run of the two stages.
//!
//! The filtered report written to disk is the only input of the directive
//! stage: directives are rebuilt by re-reading that file, never from the
//! in-memory selection.

use crate::io::{
    self, psfgen_path, read_propka_summary, read_report_directives, write_psfgen_directives,
    write_report,
};
use crate::model::{directive::DirectiveSet, record::SummaryRecord};
use crate::ops::{self, FilterSpec, FilteredReport, filter_records};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Filter(#[from] ops::Error),
}

/// Rows of a PROPKA summary section together with whether the section existed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Extraction {
    pub records: Vec<SummaryRecord>,
    pub marker_found: bool,
}

/// Outcome of [`run`].
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub report_path: PathBuf,
    pub psfgen_path: PathBuf,
    /// Rows read from the summary section, echoed header included.
    pub records_read: usize,
    /// `false` when the input had no summary section; the run still succeeds with empty output.
    pub marker_found: bool,
    pub report: FilteredReport,
    pub directives: DirectiveSet,
}

/// Extracts the summary rows of a PROPKA report file.
pub fn extract_file(path: &Path) -> Result<Extraction, Error> {
    let file = File::open(path).map_err(|e| io::Error::from_io(e, Some(path.to_path_buf())))?;
    let mut rows = read_propka_summary(BufReader::new(file));

    let records = rows
        .by_ref()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.with_path(path))?;

    debug!(
        "read {} summary rows from {} ({} lines scanned)",
        records.len(),
        path.display(),
        rows.lines_read()
    );

    Ok(Extraction {
        records,
        marker_found: rows.marker_found(),
    })
}

/// Writes a filtered report to `path`, replacing any existing file.
pub fn write_report_file(path: &Path, report: &FilteredReport) -> Result<(), Error> {
    let file = File::create(path).map_err(|e| io::Error::from_io(e, Some(path.to_path_buf())))?;
    write_report(BufWriter::new(file), report).map_err(|e| e.with_path(path))?;
    info!("wrote filtered report to {}", path.display());
    Ok(())
}

/// Re-reads a filtered report and writes the psfgen directive file next to it.
pub fn synthesize(report_path: &Path) -> Result<DirectiveSet, Error> {
    let file = File::open(report_path)
        .map_err(|e| io::Error::from_io(e, Some(report_path.to_path_buf())))?;
    let directives =
        read_report_directives(BufReader::new(file)).map_err(|e| e.with_path(report_path))?;

    let output = psfgen_path(report_path);
    let file =
        File::create(&output).map_err(|e| io::Error::from_io(e, Some(output.clone())))?;
    write_psfgen_directives(BufWriter::new(file), &directives).map_err(|e| e.with_path(&output))?;

    info!(
        "wrote {} directives for {} chains to {}",
        directives.directive_count(),
        directives.chain_count(),
        output.display()
    );
    Ok(directives)
}

/// Extracts, filters, writes the report at `report_path`, then synthesizes directives from it.
pub fn run(input: &Path, spec: &FilterSpec, report_path: &Path) -> Result<RunSummary, Error> {
    let extraction = extract_file(input)?;
    if !extraction.marker_found {
        warn!(
            "no 'SUMMARY OF THIS PREDICTION' section in {}; output will be empty",
            input.display()
        );
    }

    let report = filter_records(&extraction.records, spec)?;
    write_report_file(report_path, &report)?;
    let directives = synthesize(report_path)?;

    Ok(RunSummary {
        report_path: report_path.to_path_buf(),
        psfgen_path: psfgen_path(report_path),
        records_read: extraction.records.len(),
        marker_found: extraction.marker_found,
        report,
        directives,
    })
}
