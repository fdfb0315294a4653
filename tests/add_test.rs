//! Integration tests for `ny add` and `ny install` against a fake backend.
#![cfg(unix)]

mod common;

use std::fs;

use common::{fake_backend, ny, path_with, project, recorded};
use httpmock::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

fn yarn_project() -> TempDir {
    let temp = project(r#"{"name": "app"}"#);
    fs::write(temp.path().join("yarn.lock"), "").unwrap();
    temp
}

fn install_package(root: &std::path::Path, name: &str, manifest: &str) {
    let dir = root.join("node_modules").join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("package.json"), manifest).unwrap();
}

#[test]
fn add_delegates_to_yarn() -> Result<(), Box<dyn std::error::Error>> {
    let temp = yarn_project();
    let bin = TempDir::new()?;
    let log = fake_backend(bin.path(), "yarn");

    ny(temp.path())
        .env("PATH", path_with(bin.path()))
        .args(["add", "-D", "left-pad"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$ yarn add -D left-pad"))
        .stdout(predicate::str::contains("fake yarn output"))
        .stdout(predicate::str::contains("Installing types for ").not())
        .stderr(predicate::str::is_empty());

    assert_eq!(recorded(&log), ["add -D left-pad"]);
    Ok(())
}

#[test]
fn add_alias_and_workspace_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = yarn_project();
    let bin = TempDir::new()?;
    let log = fake_backend(bin.path(), "yarn");

    ny(temp.path())
        .env("PATH", path_with(bin.path()))
        .args(["a", "left-pad", "-W"])
        .assert()
        .success();

    assert_eq!(recorded(&log), ["add -W left-pad"]);
    Ok(())
}

#[test]
fn add_uses_npm_vocabulary() -> Result<(), Box<dyn std::error::Error>> {
    let temp = project("{}");
    fs::write(temp.path().join("package-lock.json"), "{}")?;
    let bin = TempDir::new()?;
    let log = fake_backend(bin.path(), "npm");

    ny(temp.path())
        .env("PATH", path_with(bin.path()))
        .args(["add", "--dev", "left-pad"])
        .assert()
        .success();

    assert_eq!(recorded(&log), ["install --save-dev left-pad"]);
    Ok(())
}

#[test]
fn add_mirrors_backend_failure() -> Result<(), Box<dyn std::error::Error>> {
    let temp = yarn_project();
    fs::write(temp.path().join("tsconfig.json"), "{}")?;
    let bin = TempDir::new()?;
    let log = fake_backend(bin.path(), "yarn");

    ny(temp.path())
        .env("PATH", path_with(bin.path()))
        .env("FAKE_EXIT", "5")
        .args(["add", "left-pad"])
        .assert()
        .code(5)
        .stdout(predicate::str::contains("Installing types for ").not());

    // No types step after a failed add.
    assert_eq!(recorded(&log), ["add left-pad"]);
    Ok(())
}

#[test]
fn add_installs_missing_types() -> Result<(), Box<dyn std::error::Error>> {
    let temp = yarn_project();
    fs::write(temp.path().join("tsconfig.json"), "{}")?;
    install_package(temp.path(), "left-pad", "{}");
    install_package(temp.path(), "typed", r#"{"types": "index.d.ts"}"#);
    let bin = TempDir::new()?;
    let log = fake_backend(bin.path(), "yarn");

    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body("{}");
    });

    let output = ny(temp.path())
        .env("PATH", path_with(bin.path()))
        .env("NY_REGISTRY", server.base_url())
        .args(["add", "left-pad", "typed"])
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Installing types for left-pad: @types/left-pad"));
    assert!(stdout.contains("$ yarn add -D @types/left-pad"));
    // The types add runs with its stdout silenced.
    assert_eq!(stdout.matches("fake yarn output").count(), 1);

    assert_eq!(
        recorded(&log),
        ["add left-pad typed", "add -D @types/left-pad"]
    );
    mock.assert_hits(1);
    Ok(())
}

#[test]
fn add_skips_types_missing_from_registry() -> Result<(), Box<dyn std::error::Error>> {
    let temp = yarn_project();
    fs::write(temp.path().join("tsconfig.json"), "{}")?;
    let bin = TempDir::new()?;
    let log = fake_backend(bin.path(), "yarn");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(404);
    });

    ny(temp.path())
        .env("PATH", path_with(bin.path()))
        .env("NY_REGISTRY", server.base_url())
        .args(["add", "left-pad"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installing types for ").not());

    assert_eq!(recorded(&log), ["add left-pad"]);
    Ok(())
}

#[test]
fn skip_types_setting_disables_lookup() -> Result<(), Box<dyn std::error::Error>> {
    let temp = yarn_project();
    fs::write(temp.path().join("tsconfig.json"), "{}")?;
    let bin = TempDir::new()?;
    fake_backend(bin.path(), "yarn");

    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200);
    });

    ny(temp.path())
        .env("PATH", path_with(bin.path()))
        .env("NY_REGISTRY", server.base_url())
        .env("NY_SKIP_TYPES", "1")
        .args(["add", "left-pad"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installing types for ").not());

    mock.assert_hits(0);
    Ok(())
}

#[test]
fn bun_rejects_workspace_root() -> Result<(), Box<dyn std::error::Error>> {
    let temp = project("{}");
    fs::write(temp.path().join("bun.lockb"), "")?;
    let bin = TempDir::new()?;
    let log = fake_backend(bin.path(), "bun");

    ny(temp.path())
        .env("PATH", path_with(bin.path()))
        .args(["add", "-W", "left-pad"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("bun"));

    assert!(recorded(&log).is_empty());
    Ok(())
}

#[test]
fn bare_invocation_installs() -> Result<(), Box<dyn std::error::Error>> {
    let temp = project("{}");
    fs::write(temp.path().join("pnpm-lock.yaml"), "")?;
    let nested = temp.path().join("packages/app");
    fs::create_dir_all(&nested)?;
    let bin = TempDir::new()?;
    let log = fake_backend(bin.path(), "pnpm");

    ny(&nested)
        .env("PATH", path_with(bin.path()))
        .assert()
        .success()
        .stdout(predicate::str::contains("$ pnpm install"));

    ny(&nested)
        .env("PATH", path_with(bin.path()))
        .arg("i")
        .assert()
        .success();

    assert_eq!(recorded(&log), ["install", "install"]);
    Ok(())
}

#[test]
fn missing_backend_executable_is_a_spawn_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = project("{}");
    fs::write(temp.path().join("bun.lock"), "")?;
    let empty = TempDir::new()?;

    ny(temp.path())
        .env("PATH", empty.path())
        .arg("install")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("bun"));
    Ok(())
}
