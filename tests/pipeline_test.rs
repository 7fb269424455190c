//! End-to-end runs through the filesystem hand-off between report and directive stages.

use propka_filter::ops::{FilterSpec, ReportSection};
use propka_filter::pipeline::{self, Error};
use propka_filter::{Directive, TitratableResidue};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn propka_report(rows: &[&str]) -> String {
    let mut text = String::from(
        "propka3.4.0\n\
         \n\
         ---------  -----   ------\n\
         ASP  12 A   9.99     0 %    0.21  150\n\
         \n\
         SUMMARY OF THIS PREDICTION\n\
         \x20      Group      pKa  model-pKa   ligand atom-type\n",
    );
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    text.push_str("--------------------------------------------------------------------------\n");
    text.push_str("Free energy of   folding (kcal/mol) as a function of pH\n");
    text.push_str("   GLU  99 Z     9.99       4.50\n");
    text
}

struct Run {
    _dir: TempDir,
    report_path: PathBuf,
    result: Result<pipeline::RunSummary, Error>,
}

fn run_with(input: &str, spec: &FilterSpec) -> Run {
    let dir = TempDir::new().expect("temp dir");
    let input_path = dir.path().join("1abc.pka");
    fs::write(&input_path, input).expect("write input");
    let report_path = dir.path().join("1abc_pH7.out");

    let result = pipeline::run(&input_path, spec, &report_path);
    Run {
        _dir: dir,
        report_path,
        result,
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("output file exists")
}

#[test]
fn acidic_aspartate_below_threshold_produces_empty_outputs() {
    let input = propka_report(&["   ASP  12 A     4.50       3.80", "   LYS  45 A    11.20      10.50"]);
    let run = run_with(&input, &FilterSpec::new(7.0));
    let summary = run.result.expect("run succeeds");

    let report = read(&run.report_path);
    assert!(report.contains("ASP: pKa > 7.0\nResname Resid Chain pKa\n-----------\n"));
    assert!(report.contains("LYS: pKa < 7.0\nResname Resid Chain pKa\n-----------\n"));
    assert!(!report.contains("   12 "));

    assert_eq!(read(&summary.psfgen_path), "");
    assert!(summary.directives.is_empty());
    assert!(summary.marker_found);
    assert_eq!(summary.records_read, 3);
}

#[test]
fn strict_direction_excludes_near_boundary_rows() {
    let input = propka_report(&["   ASP  12 A     4.50       3.80", "   LYS  45 A    11.20      10.50"]);
    let run = run_with(&input, &FilterSpec::new(5.0));
    let summary = run.result.expect("run succeeds");

    assert_eq!(summary.report.selected_count(), 0);
    assert_eq!(read(&summary.psfgen_path), "");
}

#[test]
fn protonated_aspartate_becomes_patch_directive() {
    let input = propka_report(&["   ASP  12 A     8.00       3.80"]);
    let run = run_with(&input, &FilterSpec::new(7.0));
    let summary = run.result.expect("run succeeds");

    let report = read(&run.report_path);
    assert!(report.starts_with("ASP: pKa > 7.0\nResname Resid Chain  pKa\n    ASP    12     A 8.00\n-----------\n"));

    assert_eq!(read(&summary.psfgen_path), "\nChain A:\npatch ASPP CHAA:12\n");
    assert_eq!(
        summary.psfgen_path.file_name().and_then(|n| n.to_str()),
        Some("psfgen_1abc_pH7.out")
    );
}

#[test]
fn mixed_report_groups_directives_by_first_seen_chain() {
    let input = propka_report(&[
        "   ASP  12 B     8.00       3.80",
        "   ASP  40 A     7.50       3.80",
        "   GLU  35 A     4.41       4.50",
        "   GLU  36 B     7.90       4.50",
        "   HIS  15 A     7.71       6.50",
        "   LYS  45 B     6.42      10.50",
        "   LYS  46 A    10.42      10.50",
        "   N+    1 A     7.88       8.00",
    ]);
    let run = run_with(&input, &FilterSpec::new(7.0));
    let summary = run.result.expect("run succeeds");

    assert_eq!(
        read(&summary.psfgen_path),
        "\nChain B:\n\
         patch ASPP CHAB:12\n\
         patch GLUP CHAB:36\n\
         patch LSN CHAB:45\n\
         \nChain A:\n\
         patch ASPP CHAA:40\n\
         mutate 15 HSP\n"
    );
}

#[test]
fn reparsed_directives_match_selected_rows() {
    let input = propka_report(&[
        "   ASP  12 A     8.00       3.80",
        "   HIS  15 B     7.71       6.50",
        "   LYS  45 C     6.42      10.50",
    ]);
    let run = run_with(&input, &FilterSpec::new(7.0));
    let summary = run.result.expect("run succeeds");

    let mut expected = Vec::new();
    for section in summary.report.sections() {
        if let ReportSection::Selected {
            residue, records, ..
        } = section
        {
            for record in records {
                expected.push(Directive::for_residue(
                    *residue,
                    record.chain().unwrap(),
                    record.residue_id().unwrap(),
                ));
            }
        }
    }
    let actual: Vec<Directive> = summary.directives.iter_directives().cloned().collect();
    assert_eq!(actual, expected);
}

#[test]
fn residue_and_chain_overrides_narrow_output() {
    let input = propka_report(&[
        "   HIS  15 A     7.71       6.50",
        "   HIS  16 B     7.72       6.50",
        "   ASP  12 B     8.00       3.80",
    ]);
    let spec = FilterSpec::new(7.0).with_residue("HIS").with_chain("B");
    let run = run_with(&input, &spec);
    let summary = run.result.expect("run succeeds");

    let report = read(&run.report_path);
    assert!(report.starts_with("HIS: pKa > 7.0\n"));
    assert!(!report.contains("ASP:"));
    assert_eq!(read(&summary.psfgen_path), "\nChain B:\nmutate 16 HSP\n");
}

#[test]
fn foreign_residue_override_writes_notice_and_succeeds() {
    let input = propka_report(&["   ASP  12 A     8.00       3.80"]);
    let spec = FilterSpec::new(7.0).with_residue("XXX");
    let run = run_with(&input, &spec);
    let summary = run.result.expect("run succeeds");

    assert_eq!(read(&run.report_path), "Unrecognized residue: XXX\n");
    assert_eq!(read(&summary.psfgen_path), "");
    assert_eq!(
        summary.report.sections(),
        [ReportSection::Unrecognized {
            name: "XXX".to_string()
        }]
    );
}

#[test]
fn report_without_summary_section_is_not_an_error() {
    let input = "propka3.4.0\n   ASP  12 A     8.00       3.80\n";
    let run = run_with(input, &FilterSpec::new(7.0));
    let summary = run.result.expect("run succeeds");

    assert!(!summary.marker_found);
    assert_eq!(summary.records_read, 0);
    assert_eq!(summary.report.selected_count(), 0);
    assert!(read(&run.report_path).starts_with("ASP: pKa > 7.0\n"));
    assert_eq!(read(&summary.psfgen_path), "");
}

#[test]
fn non_numeric_pka_aborts_the_run() {
    let input = propka_report(&["   ASP  12 A     8.00       3.80", "   LIG  1 L     n/a"]);
    let run = run_with(&input, &FilterSpec::new(7.0));

    match run.result {
        Err(Error::Filter(err)) => assert!(err.to_string().contains("'n/a'")),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(!run.report_path.exists());
}

#[test]
fn missing_input_is_an_io_error_naming_the_file() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("absent.pka");

    let err = pipeline::run(&missing, &FilterSpec::new(7.0), &dir.path().join("x.out"))
        .expect_err("missing input fails");

    assert!(matches!(err, Error::Io(_)));
    assert!(err.to_string().contains("absent.pka"));
}

#[test]
fn synthesize_consumes_report_text_written_by_hand() {
    let dir = TempDir::new().expect("temp dir");
    let report_path = dir.path().join("manual.out");
    fs::write(
        &report_path,
        "GLU: pKa > 4.0\nResname Resid Chain  pKa\n    GLU    35     A 4.41\n-----------\n",
    )
    .expect("write report");

    let directives = pipeline::synthesize(&report_path).expect("synthesis succeeds");

    assert_eq!(directives.directive_count(), 1);
    assert_eq!(
        read(&dir.path().join("psfgen_manual.out")),
        "\nChain A:\npatch GLUP CHAA:35\n"
    );
}

#[test]
fn extract_file_reports_header_row_first() {
    let dir = TempDir::new().expect("temp dir");
    let input_path = dir.path().join("1abc.pka");
    fs::write(&input_path, propka_report(&["   LYS  45 A    11.20      10.50"])).expect("write");

    let extraction = pipeline::extract_file(&input_path).expect("extraction succeeds");

    assert!(extraction.marker_found);
    assert_eq!(extraction.records.len(), 2);
    assert_eq!(extraction.records[0].residue_name(), Some("Group"));
    assert_eq!(
        extraction.records[1].residue_name().and_then(|n| n.parse::<TitratableResidue>().ok()),
        Some(TitratableResidue::Lys)
    );
}
