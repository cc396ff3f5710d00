use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn content_only_from_stdin() {
    let mut cmd = cargo_bin_cmd!("gmi2html");
    cmd.arg("--no-container")
        .write_stdin("# Main heading")
        .assert()
        .success()
        .stdout("<h1 class=\"gemini-heading-1\">Main heading</h1>");
}

#[test]
fn full_document_by_default() {
    let mut cmd = cargo_bin_cmd!("gmi2html");
    cmd.write_stdin("Hello")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("<title></title>"))
        .stdout(predicate::str::contains("<p class=\"gemini-textline\">Hello</p>"));
}

#[test]
fn title_flag_sets_document_title() {
    let mut cmd = cargo_bin_cmd!("gmi2html");
    cmd.args(["--title", "Notes & Such"])
        .write_stdin("x")
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>Notes &amp; Such</title>"));
}

#[test]
fn replace_gmi_ext_flag() {
    let mut cmd = cargo_bin_cmd!("gmi2html");
    cmd.args(["--no-container", "--replace-gmi-ext"])
        .write_stdin("=> /path/file.gmi Example Link")
        .assert()
        .success()
        .stdout("<div class=\"gemini-link-container\"><a href=\"/path/file.html\">Example Link</a></div>");
}

#[test]
fn broken_link_is_skipped_and_reported() {
    let mut cmd = cargo_bin_cmd!("gmi2html");
    cmd.arg("--no-container")
        .write_stdin("=>\nafter")
        .assert()
        .success()
        .stdout("<p class=\"gemini-textline\">after</p>")
        .stderr(predicate::str::contains("error parsing link line"));
}

#[test]
fn non_utf8_input_still_renders() {
    let mut cmd = cargo_bin_cmd!("gmi2html");
    cmd.arg("--no-container")
        .write_stdin(b"caf\xe9".to_vec())
        .assert()
        .success()
        .stdout("<p class=\"gemini-textline\">caf\u{fffd}</p>");
}

#[test]
fn reads_input_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.gmi");
    fs::write(&path, "* from a file").unwrap();

    let mut cmd = cargo_bin_cmd!("gmi2html");
    cmd.arg("--no-container")
        .arg(&path)
        .assert()
        .success()
        .stdout("<p class=\"gemini-list-item\">• from a file</p>");
}

#[test]
fn dash_reads_stdin() {
    let mut cmd = cargo_bin_cmd!("gmi2html");
    cmd.args(["--no-container", "-"])
        .write_stdin("> quoted")
        .assert()
        .success()
        .stdout("<blockquote class=\"gemini-blockquote\">quoted</blockquote>");
}

#[test]
fn missing_file_fails() {
    let dir = tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("gmi2html");
    cmd.arg(dir.path().join("nope.gmi"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}
