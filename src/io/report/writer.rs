use crate::io::error::Error;
use crate::model::{
    record::{COLUMN_NAMES, SummaryRecord},
    residue::TitratableResidue,
};
use crate::ops::{FilteredReport, ReportSection};
use std::io::Write;

pub(crate) const SECTION_SEPARATOR: &str = "-----------";

pub fn write_report<W: Write>(writer: W, report: &FilteredReport) -> Result<(), Error> {
    let mut ctx = WriterContext::new(writer);

    for section in report.sections() {
        match section {
            ReportSection::Selected {
                residue,
                threshold,
                records,
            } => {
                ctx.write_section_header(*residue, *threshold)?;
                ctx.write_table(records)?;
                ctx.write_separator()?;
            }
            ReportSection::Unrecognized { name } => ctx.write_unrecognized(name)?,
        }
    }

    ctx.writer.flush().map_err(|e| Error::from_io(e, None))
}

/// Formats a threshold with at least one fractional digit (`7` becomes `7.0`).
pub fn format_threshold(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

struct WriterContext<W> {
    writer: W,
}

impl<W: Write> WriterContext<W> {
    fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_section_header(
        &mut self,
        residue: TitratableResidue,
        threshold: f64,
    ) -> Result<(), Error> {
        writeln!(
            self.writer,
            "{}: pKa {} {}",
            residue,
            residue.behavior().comparison,
            format_threshold(threshold)
        )
        .map_err(|e| Error::from_io(e, None))
    }

    /// Right-justifies every column to its widest cell, header line flush left.
    fn write_table(&mut self, records: &[SummaryRecord]) -> Result<(), Error> {
        let mut widths = COLUMN_NAMES.map(str::len);
        for record in records {
            for (col, width) in widths.iter_mut().enumerate() {
                let cell = record.field(col).unwrap_or_default();
                *width = (*width).max(cell.chars().count());
            }
        }

        let header = render_row(&COLUMN_NAMES, &widths);
        writeln!(self.writer, "{}", header.trim_start())
            .map_err(|e| Error::from_io(e, None))?;

        for record in records {
            let cells: [&str; 4] =
                std::array::from_fn(|col| record.field(col).unwrap_or_default());
            writeln!(self.writer, "{}", render_row(&cells, &widths))
                .map_err(|e| Error::from_io(e, None))?;
        }
        Ok(())
    }

    fn write_separator(&mut self) -> Result<(), Error> {
        writeln!(self.writer, "{SECTION_SEPARATOR}").map_err(|e| Error::from_io(e, None))
    }

    fn write_unrecognized(&mut self, name: &str) -> Result<(), Error> {
        writeln!(self.writer, "Unrecognized residue: {name}").map_err(|e| Error::from_io(e, None))
    }
}

fn render_row(cells: &[&str; 4], widths: &[usize; 4]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:>width$}"))
        .collect::<Vec<_>>()
        .join(" ")
}
