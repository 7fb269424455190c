//! # propka-filter
//!
//! **propka-filter** turns a PROPKA `.pka` report into protonation instructions for structure preparation. It reads the `SUMMARY OF THIS PREDICTION` table, keeps the titratable residues whose predicted pKa crosses a target pH, writes a filtered report grouped by residue class, and derives per-chain `patch` / `mutate` directives for psfgen from that report.
//!
//! ## Features
//!
//! - **Streaming summary reader** – `io::read_propka_summary` lazily yields the summary rows, stopping at the first dashed line, and reports whether the section was present at all.
//! - **Closed residue vocabulary** – `TitratableResidue` fixes, for ASP, GLU, HIS and LYS, the comparison direction against the pH and the psfgen patch or mutation to apply.
//! - **Text hand-off** – directives are synthesized by re-parsing the written filtered report through an explicit state machine, so the report format is the contract between both stages.
//! - **Typed errors** – `io::Error`, `ops::Error` and `pipeline::Error` keep I/O failures and non-numeric pKa values distinguishable.

mod model;

pub mod io;
pub mod ops;
pub mod pipeline;

pub use model::directive::{ChainDirectives, Directive, DirectiveKind, DirectiveSet};
pub use model::record::{COLUMN_NAMES, SummaryRecord};
pub use model::residue::{Comparison, ResidueBehavior, TitratableResidue};
