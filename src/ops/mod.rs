//! Residue selection against a pH threshold.
//!
//! The filter consumes summary rows produced by the PROPKA reader and yields a
//! [`FilteredReport`] that the report writer renders section by section.

mod error;
mod filter;

pub use filter::{FilterSpec, FilteredReport, ReportSection, filter_records};

pub use error::Error;
