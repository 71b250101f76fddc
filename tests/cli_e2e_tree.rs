//! End-to-end tests for the `tree` command.

mod common;
use common::prelude::*;

#[test]
fn test_tree_help() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("tree")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Print the directory structure"));
}

#[test]
fn test_tree_renders_nested_structure() {
    let fixture = TestFixture::new()
        .with_file("pkg/inner/x.ts", "")
        .with_file("pkg/index.ts", "");

    fixture
        .command()
        .arg("tree")
        .assert()
        .success()
        .stdout("pkg/\n└──inner/\n│  └──x.ts\n└──index.ts\n");
}

#[test]
fn test_tree_skips_hidden_and_vendor_directories() {
    let fixture = TestFixture::new()
        .with_file("app/main.go", "package main")
        .with_file(".git/HEAD", "ref: refs/heads/main")
        .with_file("node_modules/dep/index.js", "")
        .with_file("vendor/mod/lib.go", "")
        .with_file(".editorconfig", "root = true");

    fixture
        .command()
        .arg("tree")
        .arg(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("app/"))
        .stdout(predicate::str::contains(".editorconfig"))
        .stdout(predicate::str::contains("HEAD").not())
        .stdout(predicate::str::contains("node_modules").not())
        .stdout(predicate::str::contains("vendor").not());
}

#[test]
fn test_tree_missing_directory_fails() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("tree")
        .arg("missing")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Not a directory"));
}
