use assert_cmd::assert::Assert;
use assert_cmd::prelude::{CommandCargoExt, OutputAssertExt};
use std::io::Write;
use std::process::Command;

fn run(path: &str, args: &[&str]) -> Assert {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .args(args)
        .arg(path)
        .assert()
}

fn test_scripts(file_name: &str, args: &[&str], stdout: &str) {
    run(&["tests/scripts/", file_name].concat(), args)
        .stdout(stdout.to_string())
        .success();
}

fn test_fail(file_name: &str, args: &[&str]) {
    run(&["tests/fail/", file_name].concat(), args).code(1);
}

fn test_inline(script: &str, args: &[&str], stdout: &str) {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(script.as_bytes()).unwrap();
    run(file.path().to_str().unwrap(), args)
        .stdout(stdout.to_string())
        .success();
}

#[test]
fn merge_sets() {
    test_scripts(
        "merge_sets.uf",
        &[],
        "false\nparent1\nparent1\nparent1\ntrue\n",
    );
}

#[test]
fn classes() {
    test_scripts("classes.uf", &[], "a b c d\ne\ntrue\nfalse\nfalse\n");
}

#[test]
fn find_unknown_allowed() {
    test_scripts("find_unknown.uf", &["--allow-find-none"], "a\nnone\n");
}

#[test]
fn find_unknown() {
    run("tests/scripts/find_unknown.uf", &[])
        .stdout("a\n".to_string())
        .code(1);
}

#[test]
fn initial_elements() {
    test_inline(
        "union b a\nfind a\nclasses\n",
        &["-e", "a", "--element", "b", "-e", "c"],
        "b\na b\nc\n",
    );
}

#[test]
fn fail_absent_initial_element() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"classes\n").unwrap();
    run(file.path().to_str().unwrap(), &["-e", "a", "-e", "_"]).code(1);
}

#[test]
fn fail_missing_file() {
    test_fail("does_not_exist.uf", &[]);
}

#[test]
fn fail_unknown_command() {
    test_fail("unknown_command.uf", &[]);
}

#[test]
fn fail_union_unknown() {
    test_fail("union_unknown.uf", &[]);
}

#[test]
fn fail_union_unknown_allowed() {
    test_fail("union_unknown.uf", &["--allow-find-none"]);
}

#[test]
fn fail_wrong_arity() {
    test_fail("wrong_arity.uf", &[]);
}

#[test]
fn fail_add_absent() {
    test_fail("add_absent.uf", &[]);
}

#[test]
fn fail_union_absent() {
    test_fail("union_absent.uf", &[]);
}
