use std::io::{self, Write};

use anyhow::{Context, Result};
use prettytable::{Table, format, row};

use propka_filter::io::format_threshold;
use propka_filter::ops::{FilterSpec, ReportSection};
use propka_filter::pipeline::RunSummary;
use propka_filter::{ChainDirectives, DirectiveKind};

/// Prints selection and directive tables for a finished run to stderr.
pub fn print(summary: &RunSummary, spec: &FilterSpec) -> Result<()> {
    let mut stderr = io::stderr().lock();

    print_boxed_label(&mut stderr, "pKa Filter Report")?;
    writeln!(&mut stderr)?;

    if !summary.marker_found {
        writeln!(
            &mut stderr,
            "No 'SUMMARY OF THIS PREDICTION' section found; nothing was selected."
        )?;
        writeln!(&mut stderr)?;
    }

    let mut selection_table = Table::new();
    print_boxed_label(&mut stderr, "Residue Selection")?;
    selection_table.set_format(*format::consts::FORMAT_BOX_CHARS);
    selection_table.set_titles(row!["Residue", "Criterion", "Selected"]);
    for section in summary.report.sections() {
        match section {
            ReportSection::Selected {
                residue,
                threshold,
                records,
            } => {
                selection_table.add_row(row![
                    residue,
                    format!(
                        "pKa {} {}",
                        residue.behavior().comparison,
                        format_threshold(*threshold)
                    ),
                    records.len()
                ]);
            }
            ReportSection::Unrecognized { name } => {
                selection_table.add_row(row![name, "Unrecognized residue", "-"]);
            }
        }
    }
    selection_table
        .print(&mut stderr)
        .context("Failed to render residue selection")?;
    writeln!(&mut stderr)?;

    let mut chain_table = Table::new();
    print_boxed_label(&mut stderr, "psfgen Directives")?;
    chain_table.set_format(*format::consts::FORMAT_BOX_CHARS);
    chain_table.set_titles(row!["Chain", "Patches", "Mutations"]);
    for chain in summary.directives.iter_chains() {
        chain_table.add_row(row![
            chain.chain,
            count_kind(chain, DirectiveKind::Patch),
            count_kind(chain, DirectiveKind::Mutate)
        ]);
    }
    if summary.directives.is_empty() {
        chain_table.add_row(row!["-", 0, 0]);
    }
    chain_table
        .print(&mut stderr)
        .context("Failed to render directive summary")?;
    writeln!(&mut stderr)?;

    let mut files_table = Table::new();
    print_boxed_label(&mut stderr, "Run Summary")?;
    files_table.set_format(*format::consts::FORMAT_BOX_CHARS);
    files_table.set_titles(row!["Metric", "Value"]);
    files_table.add_row(row!["pH Threshold", format_threshold(spec.pka_threshold)]);
    files_table.add_row(row!["Summary Rows", summary.records_read]);
    files_table.add_row(row!["Filtered Report", summary.report_path.display()]);
    files_table.add_row(row!["Directive File", summary.psfgen_path.display()]);
    files_table
        .print(&mut stderr)
        .context("Failed to render run summary")?;

    Ok(())
}

fn count_kind(chain: &ChainDirectives, kind: DirectiveKind) -> usize {
    chain.iter().filter(|d| d.kind == kind).count()
}

fn print_boxed_label<W: Write>(writer: &mut W, title: &str) -> io::Result<()> {
    let inner = format!(" {title} ");
    let width = inner.chars().count();
    writeln!(writer, "╭{}╮", "─".repeat(width))?;
    writeln!(writer, "│{}│", inner)?;
    writeln!(writer, "╰{}╯", "─".repeat(width))?;
    Ok(())
}
