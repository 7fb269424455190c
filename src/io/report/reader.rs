use crate::io::error::Error;
use crate::model::{
    directive::{Directive, DirectiveSet},
    residue::TitratableResidue,
};
use log::trace;
use std::io::BufRead;

const FORMAT: &str = "filtered report";
const COLUMN_HEADER_PREFIX: &str = "Resname";
const ROW_TOKENS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// No residue section opened yet.
    SeekingHeader,
    /// Just after a `RES:` header; the column header line may follow.
    TableStart(TitratableResidue),
    /// Consuming data rows of the current section.
    InTable(TitratableResidue),
}

/// Rebuilds psfgen directives from the text of a filtered report.
///
/// Only lines with exactly four tokens inside a residue section are data
/// rows; separators, notices and blank lines are skipped without error.
pub fn read<R: BufRead>(reader: R) -> Result<DirectiveSet, Error> {
    let mut directives = DirectiveSet::new();
    let mut state = ScanState::SeekingHeader;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::from_line_read(e, FORMAT, index + 1))?;
        state = advance(state, &line, &mut directives);
    }

    Ok(directives)
}

fn advance(state: ScanState, line: &str, directives: &mut DirectiveSet) -> ScanState {
    if let Some(residue) = TitratableResidue::from_header(line.trim()) {
        return ScanState::TableStart(residue);
    }

    match state {
        ScanState::SeekingHeader => ScanState::SeekingHeader,
        ScanState::TableStart(residue) if line.starts_with(COLUMN_HEADER_PREFIX) => {
            ScanState::InTable(residue)
        }
        ScanState::TableStart(residue) | ScanState::InTable(residue) => {
            consume_row(residue, line, directives);
            ScanState::InTable(residue)
        }
    }
}

fn consume_row(residue: TitratableResidue, line: &str, directives: &mut DirectiveSet) {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [_, residue_id, chain, _] => {
            directives.push(Directive::for_residue(residue, chain, residue_id));
        }
        _ => trace!(
            "skipping {} line with {} tokens (expected {ROW_TOKENS})",
            residue,
            tokens.len()
        ),
    }
}
