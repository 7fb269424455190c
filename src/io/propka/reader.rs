use crate::io::error::Error;
use crate::model::record::SummaryRecord;
use std::io::{BufRead, Lines};
use std::iter::FusedIterator;

const FORMAT: &str = "PROPKA";
const START_MARKER: &str = "SUMMARY OF THIS PREDICTION";
const STOP_KEYWORD: &str = "---------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    BeforeMarker,
    InSummary,
    Done,
}

/// Lazily yields the rows of the `SUMMARY OF THIS PREDICTION` table.
///
/// Lines before the marker are skipped and scanning ends at the first line
/// containing the dashed stop keyword. The iterator is single-pass; a report
/// without the marker yields nothing.
pub struct SummaryRows<R> {
    lines: Lines<R>,
    line_number: usize,
    state: ScanState,
    marker_found: bool,
}

pub fn read<R: BufRead>(reader: R) -> SummaryRows<R> {
    SummaryRows {
        lines: reader.lines(),
        line_number: 0,
        state: ScanState::BeforeMarker,
        marker_found: false,
    }
}

pub fn read_str(text: &str) -> SummaryRows<&[u8]> {
    read(text.as_bytes())
}

impl<R> SummaryRows<R> {
    /// Whether the summary marker has been seen so far.
    ///
    /// Once the iterator is exhausted, `false` means the report had no summary section.
    pub fn marker_found(&self) -> bool {
        self.marker_found
    }

    /// Number of lines consumed from the underlying reader.
    pub fn lines_read(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for SummaryRows<R> {
    type Item = Result<SummaryRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.state != ScanState::Done {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    self.state = ScanState::Done;
                    return Some(Err(Error::from_line_read(e, FORMAT, self.line_number + 1)));
                }
                None => {
                    self.state = ScanState::Done;
                    break;
                }
            };
            self.line_number += 1;

            match self.state {
                ScanState::BeforeMarker => {
                    if line.trim() == START_MARKER {
                        self.state = ScanState::InSummary;
                        self.marker_found = true;
                    }
                }
                ScanState::InSummary => {
                    if line.contains(STOP_KEYWORD) {
                        self.state = ScanState::Done;
                        break;
                    }
                    return Some(Ok(SummaryRecord::from_line(&line)));
                }
                ScanState::Done => unreachable!(),
            }
        }
        None
    }
}

impl<R: BufRead> FusedIterator for SummaryRows<R> {}
