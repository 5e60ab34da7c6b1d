use std::{fs, path::Path};

use stitch::{Args, Host, StitchError, stitch};
use tempfile::TempDir;

/// Canonical E. coli K-12 codons for the full amino-acid alphabet, in the
/// order of `ALPHABET`.
const ALPHABET: &str = "ARNDCQEGHILKMFPSTWYV*";
const ALPHABET_CDS: &str =
    "GCTCGTAATGATTGTCAAGAAGGTCATATTCTGAAAATGTTTCCGAGCACCTGGTATGTGTAA";

#[derive(Clone, Copy)]
enum Delivery {
    Literal,
    File,
}

struct Case {
    aa: &'static str,
    aa_delivery: Delivery,
    wt: Option<&'static str>,
    wt_delivery: Delivery,
    expected_cds: &'static str,
    expected_report: &'static str,
}

fn run_case(case: Case) {
    let temp = TempDir::new().expect("failed to create temporary directory");
    let root = temp.path();

    let aa = deliver(root, "aa.txt", case.aa, case.aa_delivery);
    let wt_cds = case
        .wt
        .map(|wt| deliver(root, "wt.txt", wt, case.wt_delivery));

    let out = root.join("opt.fa");
    let report = root.join("mutations.txt");

    stitch(Args {
        aa,
        wt_cds,
        host: Host::EcoliK12,
        out: Some(out.clone()),
        report: Some(report.clone()),
        qc: false,
        qc_report: None,
        level: log::Level::Info,
    })
    .expect("stitch failed");

    assert_eq!(
        fs::read_to_string(&out).expect("missing FASTA output"),
        format!(">opt\n{}\n", case.expected_cds),
        "FASTA mismatch for aa={}",
        case.aa
    );
    assert_eq!(
        fs::read_to_string(&report).expect("missing mutation report"),
        case.expected_report,
        "report mismatch for aa={}",
        case.aa
    );
}

/// Hands a sequence to the CLI either literally or through an @file whose
/// last non-empty line carries the sequence.
fn deliver(root: &Path, name: &str, content: &str, delivery: Delivery) -> String {
    match delivery {
        Delivery::Literal => content.to_string(),
        Delivery::File => {
            let path = root.join(name);
            fs::write(&path, format!(">record\n{}\n", content))
                .unwrap_or_else(|e| panic!("failed to write {}: {}", path.display(), e));
            format!("@{}", path.display())
        }
    }
}

#[test]
fn test_literal_no_wt() {
    run_case(Case {
        aa: "MK",
        aa_delivery: Delivery::Literal,
        wt: None,
        wt_delivery: Delivery::Literal,
        expected_cds: "ATGAAA",
        expected_report: "\n",
    });
}

#[test]
fn test_file_no_wt() {
    run_case(Case {
        aa: "MK",
        aa_delivery: Delivery::File,
        wt: None,
        wt_delivery: Delivery::Literal,
        expected_cds: "ATGAAA",
        expected_report: "\n",
    });
}

#[test]
fn test_full_alphabet_canonical() {
    run_case(Case {
        aa: ALPHABET,
        aa_delivery: Delivery::Literal,
        wt: None,
        wt_delivery: Delivery::Literal,
        expected_cds: ALPHABET_CDS,
        expected_report: "\n",
    });
}

#[test]
fn test_wt_matches_canonical() {
    run_case(Case {
        aa: "M",
        aa_delivery: Delivery::Literal,
        wt: Some("ATG"),
        wt_delivery: Delivery::Literal,
        expected_cds: "ATG",
        expected_report: "\n",
    });
}

#[test]
fn test_wt_synonymous_codon_kept() {
    // CTG is the canonical Leucine codon. It is in the table's value set,
    // so it is kept for Methionine as well and no mutation is recorded.
    run_case(Case {
        aa: "M",
        aa_delivery: Delivery::Literal,
        wt: Some("CTG"),
        wt_delivery: Delivery::Literal,
        expected_cds: "CTG",
        expected_report: "\n",
    });
}

#[test]
fn test_wt_invalid_codon_replaced() {
    // CTT encodes Leucine but is not a table value, so it is replaced.
    run_case(Case {
        aa: "M",
        aa_delivery: Delivery::Literal,
        wt: Some("CTT"),
        wt_delivery: Delivery::Literal,
        expected_cds: "ATG",
        expected_report: "M1: CTT → ATG\n",
    });
}

#[test]
fn test_wt_from_file_mixed_positions() {
    // Position 1 already canonical; position 2 carries AAG, which is not a
    // table value, and gets replaced with the canonical AAA.
    run_case(Case {
        aa: "MK",
        aa_delivery: Delivery::File,
        wt: Some("ATGAAG"),
        wt_delivery: Delivery::File,
        expected_cds: "ATGAAA",
        expected_report: "K2: AAG → AAA\n",
    });
}

#[test]
fn test_wt_shorter_than_design() {
    // Positions past the wild-type end have no reference codon and fall
    // back to canonical with nothing to report.
    run_case(Case {
        aa: "MK",
        aa_delivery: Delivery::Literal,
        wt: Some("ATG"),
        wt_delivery: Delivery::Literal,
        expected_cds: "ATGAAA",
        expected_report: "\n",
    });
}

#[test]
fn test_wt_partial_trailing_codon_ignored() {
    run_case(Case {
        aa: "MK",
        aa_delivery: Delivery::Literal,
        wt: Some("ATGAA"),
        wt_delivery: Delivery::Literal,
        expected_cds: "ATGAAA",
        expected_report: "\n",
    });
}

#[test]
fn test_unknown_aa_without_wt() {
    run_case(Case {
        aa: "MXK",
        aa_delivery: Delivery::Literal,
        wt: None,
        wt_delivery: Delivery::Literal,
        expected_cds: "ATGNNNAAA",
        expected_report: "\n",
    });
}

#[test]
fn test_unknown_aa_overrides_wt() {
    // Unknown residues always emit NNN, so a wild-type codon there is
    // reported as a mutation even when it is a valid table codon.
    run_case(Case {
        aa: "X",
        aa_delivery: Delivery::Literal,
        wt: Some("ATG"),
        wt_delivery: Delivery::Literal,
        expected_cds: "NNN",
        expected_report: "X1: ATG → NNN\n",
    });
}

#[test]
fn test_idempotent_outputs() {
    let temp = TempDir::new().expect("failed to create temporary directory");
    let root = temp.path();

    let mut outputs = Vec::new();
    for run in ["first", "second"] {
        let out = root.join(format!("{run}.fa"));
        let report = root.join(format!("{run}.txt"));
        let qc_report = root.join(format!("{run}.qc"));

        stitch(Args {
            aa: "MKTAYIAK*".to_string(),
            wt_cds: Some("ATGAAGACCGCTTACATTGCTAAGTAA".to_string()),
            host: Host::EcoliK12,
            out: Some(out.clone()),
            report: Some(report.clone()),
            qc: false,
            qc_report: Some(qc_report.clone()),
            level: log::Level::Info,
        })
        .expect("stitch failed");

        outputs.push((
            fs::read(&out).expect("missing FASTA output"),
            fs::read(&report).expect("missing mutation report"),
            fs::read(&qc_report).expect("missing QC report"),
        ));
    }

    assert_eq!(outputs[0], outputs[1], "outputs are not byte-identical");
}

#[test]
fn test_file_last_non_empty_line_wins() {
    let temp = TempDir::new().expect("failed to create temporary directory");
    let root = temp.path();

    let aa_path = root.join("aa.fa");
    fs::write(&aa_path, ">design\nWRONG\nMK\n\n  \n").expect("failed to write input");

    let out = root.join("opt.fa");
    stitch(Args {
        aa: format!("@{}", aa_path.display()),
        wt_cds: None,
        host: Host::EcoliK12,
        out: Some(out.clone()),
        report: None,
        qc: false,
        qc_report: None,
        level: log::Level::Info,
    })
    .expect("stitch failed");

    assert_eq!(
        fs::read_to_string(&out).expect("missing FASTA output"),
        ">opt\nATGAAA\n"
    );
}

#[test]
fn test_missing_input_file() {
    let temp = TempDir::new().expect("failed to create temporary directory");
    let missing = temp.path().join("nope.txt");

    let err = stitch(Args {
        aa: format!("@{}", missing.display()),
        wt_cds: None,
        host: Host::EcoliK12,
        out: None,
        report: None,
        qc: false,
        qc_report: None,
        level: log::Level::Info,
    })
    .expect_err("expected missing input error");

    assert!(
        matches!(err, StitchError::InputNotFound { .. }),
        "unexpected error: {err}"
    );
}

#[test]
fn test_empty_input_file() {
    let temp = TempDir::new().expect("failed to create temporary directory");
    let empty = temp.path().join("empty.txt");
    fs::write(&empty, "\n  \n\n").expect("failed to write input");

    let err = stitch(Args {
        aa: format!("@{}", empty.display()),
        wt_cds: None,
        host: Host::EcoliK12,
        out: None,
        report: None,
        qc: false,
        qc_report: None,
        level: log::Level::Info,
    })
    .expect_err("expected empty input error");

    assert!(
        matches!(err, StitchError::EmptyInput { .. }),
        "unexpected error: {err}"
    );
}
