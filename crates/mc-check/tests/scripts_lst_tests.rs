use std::fs;
use std::path::PathBuf;

use mc_check::scripts_lst::check_scripts_lst;
use tempfile::TempDir;

fn fixture(header: &str, lst: &str) -> (TempDir, PathBuf, PathBuf) {
    let root = TempDir::new().unwrap();
    let h_path = root.path().join("scripts.h");
    let lst_path = root.path().join("scripts.lst");
    fs::write(&h_path, header).unwrap();
    fs::write(&lst_path, lst).unwrap();
    (root, h_path, lst_path)
}

#[test]
fn name_mismatch_at_shared_number_is_reported() {
    let (_root, h, lst) = fixture(
        "#define SCRIPT_FOO (3) // foo.int\n",
        "reserved.int\nreserved.int\nbar.int ; local_vars=0\n",
    );

    let report = check_scripts_lst(&h, &lst).unwrap();
    assert_eq!(
        report.findings,
        vec!["Mismatch: scripts.lst BAR, scripts.h FOO".to_string()]
    );
}

#[test]
fn duplicate_names_report_all_line_numbers() {
    let (_root, h, lst) = fixture(
        "#define SCRIPT_FOO (1) // foo.int\n#define SCRIPT_BAR (2) // bar.int\n",
        "foo.int\nbar.int\nfoo.int\n",
    );

    let report = check_scripts_lst(&h, &lst).unwrap();
    assert_eq!(
        report.findings,
        vec!["Dupe: FOO is defined on lines 1, 3 in scripts.lst".to_string()]
    );
}

#[test]
fn reserved_duplicates_are_exempt() {
    let (_root, h, lst) = fixture(
        "#define SCRIPT_FOO (1) // foo.int\n",
        "foo.int\nreserved.int\nreserved.int\n",
    );

    let report = check_scripts_lst(&h, &lst).unwrap();
    assert!(report.passed());
}

#[test]
fn names_missing_from_the_header_are_reported() {
    let (_root, h, lst) = fixture(
        "#define SCRIPT_FOO (1) // foo.int\n",
        "foo.int\nbaz.int\n",
    );

    let report = check_scripts_lst(&h, &lst).unwrap();
    assert_eq!(
        report.findings,
        vec![
            "Missing: script BAZ.int, line number 2 in scripts.lst is absent from scripts.h"
                .to_string()
        ]
    );
}

#[test]
fn names_defined_under_another_number_are_accepted() {
    // Line 2 is FOO but the header numbers FOO as 7; that is not an error
    // as long as the name exists somewhere in the header.
    let (_root, h, lst) = fixture(
        "#define SCRIPT_FOO (7) // foo.int\n",
        "reserved.int\nfoo.int\n",
    );

    let report = check_scripts_lst(&h, &lst).unwrap();
    assert!(report.passed());
}

#[test]
fn the_last_registry_line_is_checked() {
    let (_root, h, lst) = fixture(
        "#define SCRIPT_FOO (1) // foo.int\n",
        "foo.int\nzzz.int\n",
    );

    let report = check_scripts_lst(&h, &lst).unwrap();
    assert!(!report.passed());
}

#[test]
fn bare_header_defines_are_recognized() {
    // A header entry with nothing after the parens still counts.
    let (_root, h, lst) = fixture("#define SCRIPT_FOO (1)", "foo.int\n");

    let report = check_scripts_lst(&h, &lst).unwrap();
    assert!(report.passed());
}

#[test]
fn consistent_fixture_passes() {
    let (_root, h, lst) = fixture(
        "#define SCRIPT_FOO (1) // foo.int\n#define SCRIPT_BAR (2) // bar.int\n",
        "foo.int ; local_vars=3\nbar.int ; local_vars=0\nreserved.int\n",
    );

    let report = check_scripts_lst(&h, &lst).unwrap();
    assert!(report.passed());
}
