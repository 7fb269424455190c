use crate::model::{record::SummaryRecord, residue::TitratableResidue};
use crate::ops::error::Error;
use log::{debug, warn};

/// Selection parameters for a filtering run.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    /// pH the residue pKa values are compared against.
    pub pka_threshold: f64,
    /// Restricts the run to one residue class. Names outside the titratable
    /// vocabulary produce an "Unrecognized residue" section.
    pub residue_name: Option<String>,
    /// Keeps only rows whose chain matches exactly. An empty string disables the filter.
    pub chain: Option<String>,
}

impl FilterSpec {
    pub fn new(pka_threshold: f64) -> Self {
        Self {
            pka_threshold,
            residue_name: None,
            chain: None,
        }
    }

    pub fn with_residue(mut self, residue_name: impl Into<String>) -> Self {
        self.residue_name = Some(residue_name.into());
        self
    }

    pub fn with_chain(mut self, chain: impl Into<String>) -> Self {
        self.chain = Some(chain.into());
        self
    }

    fn chain_filter(&self) -> Option<&str> {
        self.chain.as_deref().filter(|c| !c.is_empty())
    }

    fn targets(&self) -> Vec<Result<TitratableResidue, String>> {
        match &self.residue_name {
            None => TitratableResidue::ALL.into_iter().map(Ok).collect(),
            Some(name) => vec![name.parse().map_err(|_| name.clone())],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportSection {
    Selected {
        residue: TitratableResidue,
        threshold: f64,
        records: Vec<SummaryRecord>,
    },
    Unrecognized {
        name: String,
    },
}

/// Per-residue selections in report order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilteredReport {
    sections: Vec<ReportSection>,
}

impl FilteredReport {
    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    pub fn selected(&self, residue: TitratableResidue) -> Option<&[SummaryRecord]> {
        self.sections.iter().find_map(|section| match section {
            ReportSection::Selected {
                residue: r,
                records,
                ..
            } if *r == residue => Some(records.as_slice()),
            _ => None,
        })
    }

    pub fn selected_count(&self) -> usize {
        self.sections
            .iter()
            .map(|section| match section {
                ReportSection::Selected { records, .. } => records.len(),
                ReportSection::Unrecognized { .. } => 0,
            })
            .sum()
    }
}

/// Selects the titratable residues whose pKa crosses the threshold.
///
/// The first record is the echoed table header and is always discarded.
/// Every pKa field of the table must parse as a number once a known residue
/// class is processed; rows without a pKa field never match.
pub fn filter_records(
    records: &[SummaryRecord],
    spec: &FilterSpec,
) -> Result<FilteredReport, Error> {
    let table = records.get(1..).unwrap_or(&[]);
    let threshold = spec.pka_threshold;
    let mut pka_values: Option<Vec<Option<f64>>> = None;
    let mut sections = Vec::new();

    for target in spec.targets() {
        let residue = match target {
            Ok(residue) => residue,
            Err(name) => {
                warn!("Unrecognized residue: {name}");
                sections.push(ReportSection::Unrecognized { name });
                continue;
            }
        };

        if pka_values.is_none() {
            pka_values = Some(parse_pka_column(table)?);
        }
        let values = pka_values.as_deref().unwrap_or(&[]);

        let comparison = residue.behavior().comparison;
        let chain_filter = spec.chain_filter();

        let selected: Vec<SummaryRecord> = table
            .iter()
            .zip(values)
            .filter(|(record, pka)| {
                record.residue_name() == Some(residue.name())
                    && pka.is_some_and(|value| comparison.admits(value, threshold))
                    && chain_filter.is_none_or(|chain| record.chain() == Some(chain))
            })
            .map(|(record, _)| record.clone())
            .collect();

        debug!(
            "{residue}: {} of {} rows with pKa {comparison} {threshold}",
            selected.len(),
            table.len()
        );

        sections.push(ReportSection::Selected {
            residue,
            threshold,
            records: selected,
        });
    }

    Ok(FilteredReport { sections })
}

fn parse_pka_column(table: &[SummaryRecord]) -> Result<Vec<Option<f64>>, Error> {
    table
        .iter()
        .map(|record| match record.pka() {
            None => Ok(None),
            Some(text) => text.parse::<f64>().map(Some).map_err(|_| {
                Error::non_numeric_pka(
                    record.residue_name().unwrap_or_default(),
                    record.residue_id().unwrap_or_default(),
                    text,
                )
            }),
        })
        .collect()
}
