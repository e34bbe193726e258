use std::path::{Path, PathBuf};

use assert_cmd::Command;
use lopdf::{Object, Stream, dictionary};
use predicates::prelude::*;
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn log_dir(&self) -> PathBuf {
        self.dir.path().join("log")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("pdfdateextract").unwrap();
        cmd.arg("--log-dir").arg(self.log_dir());
        cmd
    }

    fn pdf(&self, pages: &[&str]) -> PathBuf {
        let path = self.dir.path().join("input.pdf");
        write_pdf(&path, pages);
        path
    }
}

/// Builds a PDF with one line of Helvetica text per page.
fn write_pdf(path: &Path, pages: &[&str]) {
    let mut doc = lopdf::Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(612),
        Object::Integer(792),
    ];

    let mut page_ids = Vec::new();
    for text in pages {
        let content = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        page_ids.push(doc.add_object(dictionary! {
            "Type" => "Page",
            "MediaBox" => media_box.clone(),
            "Contents" => Object::Reference(content_id),
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => Object::Reference(font_id) },
            },
        }));
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(pages.len() as i64),
    });

    for &page_id in &page_ids {
        if let Ok(page_obj) = doc.get_object_mut(page_id) {
            if let Ok(dict) = page_obj.as_dict_mut() {
                dict.set("Parent", Object::Reference(pages_id));
            }
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc.save(path).unwrap();
}

#[test]
fn lists_every_date_with_snippets() {
    let fixture = Fixture::new();
    let pdf = fixture.pdf(&["Date: 12/05/2025", "Issued 2024-01-31"]);

    fixture
        .cmd()
        .arg(&pdf)
        .assert()
        .success()
        .stdout(
            "1. '12/05/2025' -> 2025-05-12T00:00:00\n\
             2. '2024-01-31' -> 2024-01-31T00:00:00\n",
        );
}

#[test]
fn concrete_language_scenarios() {
    let cases = [
        ("Date: 12/05/2025", None, "2025-05-12T00:00:00\n"),
        ("Date: May 12, 2025", Some("en"), "2025-05-12T00:00:00\n"),
        ("Date : 5 mai 2025", Some("fr"), "2025-05-05T00:00:00\n"),
        ("Datum: 31.07.2025", Some("de"), "2025-07-31T00:00:00\n"),
        ("Fecha: 23/09/2025", Some("es"), "2025-09-23T00:00:00\n"),
    ];

    for (text, langs, expected) in cases {
        let fixture = Fixture::new();
        let pdf = fixture.pdf(&[text]);

        let mut cmd = fixture.cmd();
        cmd.arg(&pdf).args(["--nth", "1"]);
        if let Some(langs) = langs {
            cmd.args(["--langs", langs]);
        }
        cmd.assert().success().stdout(expected);
    }
}

#[test]
fn nth_prints_only_that_date() {
    let fixture = Fixture::new();
    let pdf = fixture.pdf(&["01/01/2025", "02/01/2025", "03/01/2025"]);

    fixture
        .cmd()
        .arg(&pdf)
        .args(["--nth", "2", "--chunk-size", "1"])
        .assert()
        .success()
        .stdout("2025-01-02T00:00:00\n");
}

#[test]
fn nth_beyond_results_is_reported_not_failed() {
    let fixture = Fixture::new();
    let pdf = fixture.pdf(&["01/01/2025", "nothing here"]);

    fixture
        .cmd()
        .arg(&pdf)
        .args(["--nth", "5"])
        .assert()
        .success()
        .stdout("Error: requested #5 but only 1 found\n");
}

#[test]
fn repeated_date_is_reported_once_per_chunk() {
    let fixture = Fixture::new();
    let pdf = fixture.pdf(&["Signed 12/05/2025", "Copy 12/05/2025"]);

    fixture
        .cmd()
        .arg(&pdf)
        .assert()
        .success()
        .stdout("1. '12/05/2025' -> 2025-05-12T00:00:00\n");

    fixture
        .cmd()
        .arg(&pdf)
        .args(["--chunk-size", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2. '12/05/2025'"));
}

#[test]
fn document_without_pages_has_no_dates() {
    let fixture = Fixture::new();
    let pdf = fixture.pdf(&[]);

    fixture
        .cmd()
        .arg(&pdf)
        .assert()
        .success()
        .stdout("No dates found.\n");
}

#[test]
fn language_restriction_hides_foreign_months() {
    let fixture = Fixture::new();
    let pdf = fixture.pdf(&["Le 5 mai 2025"]);

    fixture
        .cmd()
        .arg(&pdf)
        .args(["--langs", "en"])
        .assert()
        .success()
        .stdout("No dates found.\n");
}

#[test]
fn unreadable_input_exits_non_zero() {
    let fixture = Fixture::new();
    let bogus = fixture.dir.path().join("bogus.pdf");
    std::fs::write(&bogus, "not a pdf").unwrap();

    fixture
        .cmd()
        .arg(&bogus)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to open PDF"));

    fixture
        .cmd()
        .arg(fixture.dir.path().join("missing.pdf"))
        .assert()
        .code(1);
}

#[test]
fn unknown_language_is_a_usage_error() {
    let fixture = Fixture::new();
    let pdf = fixture.pdf(&["01/01/2025"]);

    fixture
        .cmd()
        .arg(&pdf)
        .args(["--langs", "xx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--langs"));
}

#[test]
fn version_flag_prints_package_version() {
    Command::cargo_bin("pdfdateextract")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn run_writes_log_file() {
    let fixture = Fixture::new();
    let pdf = fixture.pdf(&["01/01/2025"]);

    fixture.cmd().arg(&pdf).assert().success();

    let entries = std::fs::read_dir(fixture.log_dir())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().starts_with("extract_date"))
        .count();
    assert_eq!(entries, 1);
}

#[test]
fn fatal_error_is_printed_even_with_logging_off() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .env("RUST_LOG", "off")
        .arg(fixture.dir.path().join("missing.pdf"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: failed to open PDF"));
}

#[test]
fn help_describes_chunk_size_and_verbose() {
    Command::cargo_bin("pdfdateextract")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of pages read and scanned per pass"))
        .stdout(predicate::str::contains("Mirror debug diagnostics to stderr"));
}
