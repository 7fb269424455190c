mod error;
mod propka;
mod psfgen;
mod report;

pub use propka::reader::{
    SummaryRows, read as read_propka_summary, read_str as read_propka_summary_str,
};

pub use report::reader::read as read_report_directives;
pub use report::writer::{format_threshold, write_report};

pub use psfgen::writer::{psfgen_path, write as write_psfgen_directives};

pub use error::Error;
