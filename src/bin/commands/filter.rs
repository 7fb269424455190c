use std::io as stdio;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use is_terminal::IsTerminal;

use propka_filter::ops::FilterSpec;
use propka_filter::pipeline;

use crate::commands::{has_pka_extension, output_file_name, run_with_spinner, summary};

/// Filters a PROPKA report against a pH and writes the report and psfgen files.
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Path to the PROPKA output file (.pka).
    #[arg(value_name = "FILE")]
    pub file_path: PathBuf,
    /// Threshold for pKa filtering, i.e. the pH.
    #[arg(value_name = "PH", allow_negative_numbers = true)]
    pub pka_threshold: f64,
    /// Residue to filter (ASP, GLU, HIS, LYS).
    #[arg(long = "resname", visible_alias = "resname_value", value_name = "RES_NAME")]
    pub resname: Option<String>,
    /// Chain to filter.
    #[arg(long = "chain", visible_alias = "chain_value", value_name = "CHAIN")]
    pub chain: Option<String>,
    /// Directory for the output files. Defaults to the working directory.
    #[arg(short = 'd', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl FilterArgs {
    fn spec(&self) -> FilterSpec {
        FilterSpec {
            pka_threshold: self.pka_threshold,
            residue_name: self.resname.clone(),
            chain: self.chain.clone(),
        }
    }
}

/// Runs extraction, filtering, and directive synthesis for one report.
pub fn run(args: &FilterArgs) -> Result<()> {
    if !has_pka_extension(&args.file_path) {
        eprintln!("Error: Input file must have a .pka extension");
        return Ok(());
    }

    let spec = args.spec();
    let file_name = output_file_name(&args.file_path, &spec)?;
    let report_path = match &args.output_dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    };

    let run_summary = run_with_spinner("Filtering pKa predictions", || {
        pipeline::run(&args.file_path, &spec, &report_path)
            .with_context(|| format!("Failed to process {}", args.file_path.display()))
    })?;

    if stdio::stderr().is_terminal() {
        summary::print(&run_summary, &spec)?;
    }
    Ok(())
}
