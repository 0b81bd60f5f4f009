//! End-to-end CLI tests covering both input modes, separator overrides,
//! tag collapsing, JSON output, and argument validation.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn epiya_typer() -> Command {
    Command::cargo_bin("epiya-typer").expect("binary should build")
}

fn write_fasta(records: &[(&str, &str)]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tempfile");
    for (id, seq) in records {
        writeln!(file, ">{id}").expect("write header");
        writeln!(file, "{seq}").expect("write sequence");
    }
    file.flush().expect("flush");
    file
}

#[test]
fn single_sequence_prints_genotype_alone() {
    epiya_typer()
        .args(["--seq", "EPIYAQVNKK"])
        .assert()
        .success()
        .stdout("A\n");
}

#[test]
fn single_sequence_without_motifs_prints_empty_line() {
    epiya_typer()
        .args(["--seq", "XXXXXXXXXX"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn motif_in_tail_window_is_not_reported() {
    // The window at the very end of the sequence is outside the scan bound,
    // so a flush-to-end motif yields an empty genotype
    epiya_typer()
        .args(["--seq", "EPIYAQVNK"])
        .assert()
        .success()
        .stdout("\n");

    epiya_typer()
        .args(["--seq", "EPIYAQVNKEPIYTQVAK"])
        .assert()
        .success()
        .stdout("A\n");
}

#[test]
fn rare_segment_tag_is_reported_and_collapsible() {
    epiya_typer()
        .args(["--seq", "EPIYTQVAKK"])
        .assert()
        .success()
        .stdout("B'\n");

    epiya_typer()
        .args(["--seq", "EPIYTQVAKK", "--norareseg"])
        .assert()
        .success()
        .stdout("B\n");
}

#[test]
fn batch_mode_emits_one_line_per_record() {
    let fasta = write_fasta(&[
        ("strain_1", "EPIYAQVNKEPIYTQVAKK"),
        ("strain_2", "MKLSVAARR"),
    ]);

    epiya_typer()
        .arg("--file")
        .arg(fasta.path())
        .assert()
        .success()
        .stdout("strain_1\tAB'\nstrain_2\t\n");
}

#[test]
fn batch_mode_with_comma_separator() {
    let fasta = write_fasta(&[("strain_1", "EPIYAQVNKK")]);

    epiya_typer()
        .arg("--file")
        .arg(fasta.path())
        .args(["--sep", ","])
        .assert()
        .success()
        .stdout("strain_1,A\n");
}

#[test]
fn batch_mode_reads_fasta_from_stdin() {
    epiya_typer()
        .args(["--file", "-"])
        .write_stdin(">from_stdin\nEPIYAQVNKK\n")
        .assert()
        .success()
        .stdout("from_stdin\tA\n");
}

#[test]
fn json_output_reports_hits_with_offsets() {
    epiya_typer()
        .args(["--seq", "EPIYAQVNKK", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"genotype\": \"A\""))
        .stdout(predicate::str::contains("\"offset\": 0"));
}

#[test]
fn seq_and_file_are_mutually_exclusive() {
    let fasta = write_fasta(&[("strain_1", "EPIYAQVNK")]);

    epiya_typer()
        .args(["--seq", "EPIYAQVNK"])
        .arg("--file")
        .arg(fasta.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn one_input_mode_is_required() {
    epiya_typer()
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn missing_fasta_file_fails_before_any_output() {
    epiya_typer()
        .args(["--file", "/nonexistent/caga.fasta"])
        .assert()
        .failure()
        .stdout("");
}
