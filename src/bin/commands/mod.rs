use std::path::Path;
use std::time::Duration;

use anyhow::{Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};

use propka_filter::ops::FilterSpec;

pub mod filter;
pub mod summary;

const INPUT_EXTENSION: &str = "pka";
const OUTPUT_EXTENSION: &str = "out";

/// Returns true when the path ends in `.pka`, ignoring case.
pub fn has_pka_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(INPUT_EXTENSION))
}

/// Builds `<stem>_pH<threshold>[_<residue>][_<chain>].out` for an input report.
pub fn output_file_name(input: &Path, spec: &FilterSpec) -> Result<String> {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .ok_or_else(|| anyhow!("Input path '{}' has no file name", input.display()))?;

    let mut name = format!("{stem}_pH{:.0}", spec.pka_threshold);
    for part in [&spec.residue_name, &spec.chain].into_iter().flatten() {
        if !part.is_empty() {
            name.push('_');
            name.push_str(part);
        }
    }
    name.push('.');
    name.push_str(OUTPUT_EXTENSION);
    Ok(name)
}

/// Wraps long-running operations with a spinner rendered to stderr.
pub fn run_with_spinner<T, F>(message: &str, work: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(message.to_string());

    let result = work();

    match &result {
        Ok(_) => spinner.finish_with_message(format!("{} ✓", message)),
        Err(_) => spinner.abandon_with_message(format!("{} ✗", message)),
    }

    result
}
