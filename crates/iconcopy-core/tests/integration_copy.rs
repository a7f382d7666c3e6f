//! Integration test: load a manifest from disk and copy a small icon pack.
//!
//! Each test builds a pack in a temp dir, runs the copier with a capturing
//! sink, and checks both the emitted lines and the target directory.

mod common;

use common::IconPack;
use iconcopy_core::{load_manifest, Copier, CopyReport, FailureKind, ManifestError, Outcome};
use std::fs;

fn run(pack: &IconPack) -> (CopyReport, Vec<String>) {
    let manifest = load_manifest(&pack.manifest_path()).expect("load manifest");
    let mut lines: Vec<String> = Vec::new();
    let report = Copier::new(pack.options())
        .run(&manifest, &mut lines)
        .expect("copy run");
    (report, lines)
}

#[test]
fn all_sources_present_copies_every_entry() {
    let pack = IconPack::new();
    pack.add_svg("github-icon.svg", b"<svg>github</svg>");
    pack.add_svg("gitlab-icon.svg", b"<svg>gitlab</svg>");
    pack.add_svg("slack-icon.svg", b"<svg>slack</svg>");
    pack.write_manifest(&[
        ("SVG/github-icon.svg", "github"),
        ("SVG/gitlab-icon.svg", "gitlab"),
        ("slack-icon.svg", "slack"),
    ]);

    let (report, lines) = run(&pack);

    assert_eq!(report.copied(), 3);
    assert!(!report.has_failures());
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.starts_with("Copied: ")));
    assert_eq!(
        lines[0],
        format!(
            "Copied: {} -> {}",
            pack.source_dir().join("github-icon.svg").display(),
            pack.target_dir().join("github.svg").display()
        )
    );
    assert_eq!(
        pack.target_files(),
        vec!["github.svg", "gitlab.svg", "slack.svg"]
    );
    for (src, dst) in [
        ("github-icon.svg", "github.svg"),
        ("gitlab-icon.svg", "gitlab.svg"),
        ("slack-icon.svg", "slack.svg"),
    ] {
        assert_eq!(
            fs::read(pack.source_dir().join(src)).unwrap(),
            fs::read(pack.target_dir().join(dst)).unwrap()
        );
    }
}

#[test]
fn missing_source_reports_not_found_and_continues() {
    let pack = IconPack::new();
    pack.add_svg("a.svg", b"a");
    pack.add_svg("c.svg", b"c");
    pack.write_manifest(&[("a.svg", "alpha"), ("b.svg", "beta"), ("c.svg", "gamma")]);

    let (report, lines) = run(&pack);

    assert_eq!(report.copied(), 2);
    assert_eq!(report.not_found(), 1);
    assert_eq!(
        lines[1],
        format!("File not found: {}", pack.source_dir().join("b.svg").display())
    );
    assert!(lines[2].starts_with("Copied: "));
    assert_eq!(pack.target_files(), vec!["alpha.svg", "gamma.svg"]);
}

#[test]
fn second_run_is_idempotent() {
    let pack = IconPack::new();
    pack.add_svg("a.svg", b"<svg>a</svg>");
    pack.add_svg("b.svg", b"<svg>b</svg>");
    pack.write_manifest(&[("a.svg", "a"), ("b.svg", "b")]);

    let (_, first) = run(&pack);
    let first_bytes = fs::read(pack.target_dir().join("a.svg")).unwrap();
    let (report, second) = run(&pack);

    assert_eq!(first, second);
    assert_eq!(report.copied(), 2);
    assert_eq!(fs::read(pack.target_dir().join("a.svg")).unwrap(), first_bytes);
    assert_eq!(pack.target_files(), vec!["a.svg", "b.svg"]);
}

#[test]
fn existing_target_contents_are_kept() {
    let pack = IconPack::new();
    fs::create_dir_all(pack.target_dir()).unwrap();
    fs::write(pack.target_dir().join("unrelated.png"), b"png").unwrap();
    pack.add_svg("a.svg", b"a");
    pack.write_manifest(&[("a.svg", "a")]);

    let (report, _) = run(&pack);

    assert_eq!(report.copied(), 1);
    assert_eq!(pack.target_files(), vec!["a.svg", "unrelated.png"]);
    assert_eq!(
        fs::read(pack.target_dir().join("unrelated.png")).unwrap(),
        b"png"
    );
}

#[test]
fn destination_is_name_dot_svg_regardless_of_source_extension() {
    let pack = IconPack::new();
    pack.add_svg("foo-icon.SVG", b"<svg/>");
    pack.write_manifest(&[("assets/foo-icon.SVG", "foo")]);

    let (report, _) = run(&pack);

    assert_eq!(
        report.outcomes[0],
        Outcome::Copied {
            source: pack.source_dir().join("foo-icon.SVG"),
            destination: pack.target_dir().join("foo.svg"),
            bytes: 6,
        }
    );
}

#[test]
fn missing_manifest_is_fatal_before_any_copy() {
    let pack = IconPack::new();
    pack.add_svg("a.svg", b"a");

    let err = load_manifest(&pack.manifest_path()).unwrap_err();

    assert!(matches!(err, ManifestError::Read { .. }));
    assert!(!pack.target_dir().exists());
}

#[test]
fn malformed_entries_are_skipped() {
    let pack = IconPack::new();
    pack.add_svg("a.svg", b"a");
    pack.add_svg("b.svg", b"b");
    pack.write_raw_manifest(
        r#"{"icons": [
            {"filename": "a.svg", "name": "a"},
            {"filename": "b.svg"},
            {"filename": "b.svg", "name": "b"}
        ]}"#,
    );

    let (report, lines) = run(&pack);

    assert_eq!(report.copied(), 2);
    assert_eq!(report.malformed(), 1);
    assert_eq!(lines[1], "Skipping malformed entry #1: missing `name`");
    assert_eq!(pack.target_files(), vec!["a.svg", "b.svg"]);
}

#[test]
fn duplicate_names_overwrite_in_manifest_order() {
    let pack = IconPack::new();
    pack.add_svg("first.svg", b"first");
    pack.add_svg("second.svg", b"second");
    pack.write_manifest(&[("first.svg", "logo"), ("second.svg", "logo")]);

    let (report, _) = run(&pack);

    assert_eq!(report.copied(), 2);
    assert_eq!(fs::read(pack.target_dir().join("logo.svg")).unwrap(), b"second");
}

#[test]
fn verify_mode_copies_and_checks() {
    let pack = IconPack::new();
    pack.add_svg("a.svg", b"<svg>a</svg>");
    pack.write_manifest(&[("a.svg", "a")]);
    let manifest = load_manifest(&pack.manifest_path()).unwrap();

    let mut lines: Vec<String> = Vec::new();
    let report = Copier::new(pack.options().verify(true))
        .run(&manifest, &mut lines)
        .unwrap();

    assert_eq!(report.copied(), 1);
    assert!(!report.has_failures());
}

#[test]
fn target_equal_to_source_dir_never_truncates_icons() {
    let pack = IconPack::new();
    pack.add_svg("logo.svg", b"<svg>logo icon</svg>");
    pack.write_manifest(&[("logo.svg", "logo")]);
    let manifest = load_manifest(&pack.manifest_path()).unwrap();
    let mut options = pack.options().verify(true);
    options.target_dir = pack.source_dir();

    let mut lines: Vec<String> = Vec::new();
    let report = Copier::new(options).run(&manifest, &mut lines).unwrap();

    assert!(matches!(
        report.outcomes[0],
        Outcome::Failed {
            kind: FailureKind::InvalidDestination,
            ..
        }
    ));
    assert!(lines[0].starts_with("Error copying "), "{}", lines[0]);
    assert!(lines[0].ends_with("source and destination are the same file"));
    assert_eq!(
        fs::read(pack.source_dir().join("logo.svg")).unwrap(),
        b"<svg>logo icon</svg>"
    );
}
