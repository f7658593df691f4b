use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const ADDRESSES: &str = r#"{"address":{"street":"a","zipcode":"1"}, "other":{"zipcode":"1","street":"a"}}"#;

const ADDRESSES_PY: &str = "from typing import TypedDict\n\n\nclass Address(TypedDict):\n    street: str\n    zipcode: str\n\nclass JsonRootElement(TypedDict):\n    address: Address\n    other: Address\n";

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("json-pytypes").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn stdin_to_stdout() {
    cmd()
        .args(["python", "-i", "-", "--line-ending", "lf"])
        .write_stdin(ADDRESSES)
        .assert()
        .success()
        .stdout(ADDRESSES_PY);
}

#[test]
fn empty_input_prints_nothing() {
    cmd()
        .args(["python", "-i", "-"])
        .write_stdin("  \n")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn dialect_and_number_flags() {
    cmd()
        .args(["python", "-i", "-", "--dialect", "pydantic", "--number", "alias", "--line-ending", "lf"])
        .write_stdin(r#"{"n": 1}"#)
        .assert()
        .success()
        .stdout(contains("from pydantic import BaseModel\n\n\ntype Number = int | float\n\nclass JsonRootElement(BaseModel):\n    n: Number\n"));
}

#[test]
fn file_to_out_file() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("addresses.json");
    let out = tmp.path().join("gen").join("models.py");
    fs::write(&input, ADDRESSES).unwrap();

    cmd()
        .args(["python", "--line-ending", "lf", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout("");
    assert_eq!(fs::read_to_string(&out).unwrap(), ADDRESSES_PY);
}

#[test]
fn glob_inputs_to_out_directory() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.json"), r#"{"x": 1}"#).unwrap();
    fs::write(tmp.path().join("b.json"), r#"{"y": "s"}"#).unwrap();
    let out = tmp.path().join("out");
    let pattern = tmp.path().join("*.json");

    cmd()
        .args(["python", "--line-ending", "lf", "-i"])
        .arg(pattern.to_string_lossy().as_ref())
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    assert!(fs::read_to_string(out.join("a.py")).unwrap().contains("    x: int | float\n"));
    assert!(fs::read_to_string(out.join("b.py")).unwrap().contains("    y: str\n"));
}

#[test]
fn same_stem_in_different_directories_keeps_both_outputs() {
    let tmp = TempDir::new().unwrap();
    for (dir, json) in [("a", r#"{"x": 1}"#), ("b", r#"{"y": "s"}"#)] {
        fs::create_dir(tmp.path().join(dir)).unwrap();
        fs::write(tmp.path().join(dir).join("data.json"), json).unwrap();
    }
    let out = tmp.path().join("out");

    cmd()
        .args(["python", "--line-ending", "lf", "-i"])
        .arg(tmp.path().join("a").join("data.json"))
        .arg(tmp.path().join("b").join("data.json"))
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let first = fs::read_to_string(out.join("data.py")).unwrap();
    let second = fs::read_to_string(out.join("data-2.py")).unwrap();
    assert!(first.contains("    x: int | float\n"), "{first}");
    assert!(second.contains("    y: str\n"), "{second}");
    assert_eq!(fs::read_dir(&out).unwrap().count(), 2);
}

#[test]
fn malformed_input_fails_with_diagnostic() {
    cmd()
        .args(["python", "-i", "-"])
        .write_stdin(r#"{"a": [1, 2"#)
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("error:").and(contains("invalid JSON at")));
}

#[test]
fn one_bad_input_does_not_hide_the_good_one() {
    let tmp = TempDir::new().unwrap();
    let good = tmp.path().join("good.json");
    let bad = tmp.path().join("bad.json");
    fs::write(&good, r#"{"ok": true}"#).unwrap();
    fs::write(&bad, "{").unwrap();

    cmd()
        .args(["python", "--line-ending", "lf", "-i"])
        .arg(&good)
        .arg(&bad)
        .assert()
        .failure()
        .stdout(contains("    ok: bool\n"))
        .stderr(contains("bad.json").and(contains("1 of 2 input(s) could not be converted")));
}

#[test]
fn json_pointer_selects_subdocument() {
    cmd()
        .args(["python", "-i", "-", "--json-pointer", "/data/0", "--line-ending", "lf"])
        .write_stdin(r#"{"data": [{"id": "a", "size": 2}]}"#)
        .assert()
        .success()
        .stdout(contains("class JsonRootElement(TypedDict):\n    id: str\n    size: int | float\n"));

    cmd()
        .args(["python", "-i", "-", "--json-pointer", "/nope"])
        .write_stdin(r#"{"data": []}"#)
        .assert()
        .failure()
        .stderr(contains("does not select anything"));
}

#[test]
fn declarations_debug_view() {
    let output = cmd()
        .args(["declarations", "-i", "-"])
        .write_stdin(ADDRESSES)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let decls: Value = serde_json::from_slice(&output).unwrap();
    let names: Vec<&str> = decls
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Address", "JsonRootElement"]);
    assert_eq!(decls[1]["members"][1]["ty"], serde_json::json!({"kind": "named", "of": "Address"}));
    assert!(decls[0]["fingerprint"].is_u64());
}

#[test]
fn missing_input_is_a_usage_error() {
    cmd().arg("python").assert().failure().stderr(contains("--input"));
}
