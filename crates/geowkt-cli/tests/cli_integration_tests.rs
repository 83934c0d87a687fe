// Dweve GeoWKT - Well-Known Text for Coordinate Reference Systems
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

const WGS84: &str = r#"GEOGCS["WGS 84",DATUM["WGS_1984",SPHEROID["WGS 84",6378137,298.257223563,AUTHORITY["EPSG","7030"]],AUTHORITY["EPSG","6326"]],PRIMEM["Greenwich",0,AUTHORITY["EPSG","8901"]],UNIT["degree",0.0174532925199433,AUTHORITY["EPSG","9122"]],AXIS["Lat",NORTH],AXIS["Long",EAST],AUTHORITY["EPSG","4326"]]"#;

fn geowkt_cmd() -> Command {
    let mut cmd = Command::cargo_bin("geowkt").expect("Failed to find geowkt binary");
    cmd.env("NO_COLOR", "1").env_remove("GEOWKT_MAX_FILE_SIZE");
    cmd
}

fn create_temp_file(content: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".prj")
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

fn pretty_wgs84() -> String {
    [
        "GEOGCS[\"WGS 84\",",
        "\tDATUM[\"WGS_1984\",",
        "\t\tSPHEROID[\"WGS 84\",6378137,298.257223563,AUTHORITY[\"EPSG\",\"7030\"]],",
        "\t\tAUTHORITY[\"EPSG\",\"6326\"]],",
        "\tPRIMEM[\"Greenwich\",0,AUTHORITY[\"EPSG\",\"8901\"]],",
        "\tUNIT[\"degree\",0.0174532925199433,AUTHORITY[\"EPSG\",\"9122\"]],",
        "\tAXIS[\"Lat\",NORTH],",
        "\tAXIS[\"Long\",EAST],",
        "\tAUTHORITY[\"EPSG\",\"4326\"]]",
    ]
    .join("\n")
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    geowkt_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GeoWKT"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("inspect"));
}

#[test]
fn test_version_output() {
    geowkt_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("geowkt"));
}

#[test]
fn test_no_subcommand_fails() {
    geowkt_cmd().assert().failure();
}

// ===== Validate Command Tests =====

#[test]
fn test_validate_valid_file() {
    let file = create_temp_file(WGS84);

    geowkt_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("Kind: crs"))
        .stdout(predicate::str::contains("Keyword: GEOGCS"))
        .stdout(predicate::str::contains("Name: WGS 84"))
        .stdout(predicate::str::contains("Authority: EPSG:4326"));
}

#[test]
fn test_validate_malformed_file() {
    let file = create_temp_file(r#"UNIT["metre" 1]"#);

    geowkt_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗"))
        .stderr(predicate::str::contains("No WKT entity found"))
        .stderr(predicate::str::contains("offset 13"));
}

#[test]
fn test_validate_strict_reports_syntax_error() {
    let file = create_temp_file(r#"UNIT["metre" 1]"#);

    geowkt_cmd()
        .arg("validate")
        .arg("--strict")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("SyntaxError at offset 13"));
}

#[test]
fn test_validate_strict_valid_file() {
    let file = create_temp_file(r#"AXIS["Lat",NORTH]"#);

    geowkt_cmd()
        .arg("validate")
        .arg("--strict")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Kind: axis"))
        .stdout(predicate::str::contains("Mode: strict"));
}

#[test]
fn test_validate_trailing_content_fails() {
    let file = create_temp_file(r#"AXIS["Lat",NORTH] AXIS["Long",EAST]"#);

    geowkt_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected content after entity"));
}

#[test]
fn test_validate_inverse_of_concatenation() {
    let file = create_temp_file(r#"INVERSE_MT[CONCAT_MT[PARAM_MT["A"],INVERSE_MT[PARAM_MT["B"]]]]"#);

    // Reads as CONCAT_MT[B, INVERSE_MT[A]]
    geowkt_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Keyword: CONCAT_MT"));
}

#[test]
fn test_validate_missing_file() {
    geowkt_cmd()
        .arg("validate")
        .arg("/nonexistent/file.prj")
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_validate_file_too_large() {
    let file = create_temp_file(WGS84);

    geowkt_cmd()
        .env("GEOWKT_MAX_FILE_SIZE", "16")
        .arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn test_validate_verbose_flag() {
    let file = create_temp_file(WGS84);

    geowkt_cmd()
        .arg("--verbose")
        .arg("validate")
        .arg(file.path())
        .assert()
        .success();
}

// ===== Format Command Tests =====

#[test]
fn test_format_compact_to_stdout() {
    let file = create_temp_file(&pretty_wgs84());

    geowkt_cmd()
        .arg("format")
        .arg(file.path())
        .assert()
        .success()
        .stdout(format!("{}\n", WGS84));
}

#[test]
fn test_format_pretty_to_stdout() {
    let file = create_temp_file(WGS84);

    geowkt_cmd()
        .arg("format")
        .arg("--pretty")
        .arg(file.path())
        .assert()
        .success()
        .stdout(format!("{}\n", pretty_wgs84()));
}

#[test]
fn test_format_normalizes_whitespace() {
    let file = create_temp_file("AXIS[ \"Lat\" ,\n NORTH ]");

    geowkt_cmd()
        .arg("format")
        .arg(file.path())
        .assert()
        .success()
        .stdout("AXIS[\"Lat\",NORTH]\n");
}

#[test]
fn test_format_to_output_file() {
    let file = create_temp_file(WGS84);
    let output = NamedTempFile::new().expect("Failed to create output file");

    geowkt_cmd()
        .arg("format")
        .arg(file.path())
        .arg("--pretty")
        .arg("--output")
        .arg(output.path())
        .assert()
        .success();

    let written = fs::read_to_string(output.path()).expect("Failed to read output");
    assert_eq!(written, pretty_wgs84());
}

#[test]
fn test_format_check_canonical() {
    let file = create_temp_file(&format!("{}\n", WGS84));

    geowkt_cmd()
        .arg("format")
        .arg("--check")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("File is in canonical form"));
}

#[test]
fn test_format_check_pretty_canonical() {
    let file = create_temp_file(&pretty_wgs84());

    geowkt_cmd()
        .arg("format")
        .arg("--check")
        .arg("--pretty")
        .arg(file.path())
        .assert()
        .success();
}

#[test]
fn test_format_check_not_canonical() {
    let file = create_temp_file(&pretty_wgs84());

    geowkt_cmd()
        .arg("format")
        .arg("--check")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in canonical form"));
}

#[test]
fn test_format_corrects_names_by_default() {
    let file = create_temp_file(r#"PARAM_MT["Mercator_1SP",PARAMETER["central meridian",0]]"#);

    geowkt_cmd()
        .arg("format")
        .arg(file.path())
        .assert()
        .success()
        .stdout("PARAM_MT[\"Mercator_1SP\",PARAMETER[\"central_meridian\",0]]\n");
}

#[test]
fn test_format_keep_names() {
    let file = create_temp_file(r#"PARAM_MT["Mercator_1SP",PARAMETER["central meridian",0]]"#);

    geowkt_cmd()
        .arg("format")
        .arg("--keep-names")
        .arg(file.path())
        .assert()
        .success()
        .stdout("PARAM_MT[\"Mercator_1SP\",PARAMETER[\"central meridian\",0]]\n");
}

#[test]
fn test_format_malformed_file() {
    let file = create_temp_file("GEOGCS[");

    geowkt_cmd()
        .arg("format")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No WKT entity found"));
}

// ===== Inspect Command Tests =====

#[test]
fn test_inspect_tree() {
    let file = create_temp_file(WGS84);

    geowkt_cmd()
        .arg("inspect")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("GEOGCS \"WGS 84\"\n"))
        .stdout(predicate::str::contains("├── DATUM \"WGS_1984\""))
        .stdout(predicate::str::contains("│   ├── SPHEROID \"WGS 84\" a=6378137 1/f=298.257223563"))
        .stdout(predicate::str::contains("└── AUTHORITY EPSG:4326"));
}

#[test]
fn test_inspect_operation_tree() {
    let file = create_temp_file(r#"PASSTHROUGH_MT[2,PARAM_MT["Height"]]"#);

    geowkt_cmd()
        .arg("inspect")
        .arg(file.path())
        .assert()
        .success()
        .stdout("PASSTHROUGH_MT first ordinate 2\n└── PARAM_MT \"Height\"\n");
}

#[test]
fn test_inspect_json() {
    let file = create_temp_file(WGS84);

    let output = geowkt_cmd()
        .arg("inspect")
        .arg("--json")
        .arg(file.path())
        .output()
        .expect("Failed to run geowkt");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("inspect --json must print JSON");
    let crs = &json["Crs"]["Geographic"];
    assert_eq!(crs["name"], "WGS 84");
    assert_eq!(crs["datum"]["spheroid"]["semi_major_axis"], 6378137.0);
    assert_eq!(crs["axes"][0]["orientation"], "North");
    assert_eq!(crs["authority"]["code"], "4326");
}

#[test]
fn test_inspect_missing_file() {
    geowkt_cmd()
        .arg("inspect")
        .arg("/nonexistent/file.prj")
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}
