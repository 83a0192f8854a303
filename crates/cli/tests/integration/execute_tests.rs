//! Tests for delegation to the target tool.
//!
//! `MARCEL_ENGINE` points at standard Unix utilities so the child process is
//! observable without a container runtime.

#![cfg(unix)]

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn translated_command_is_executed() {
  let env = TestEnv::empty();

  env
    .marcel_cmd()
    .env("MARCEL_ENGINE", "echo")
    .args(["chauffe", "-d", "ubuntu"])
    .assert()
    .success()
    .stdout("run -d ubuntu\n");
}

#[test]
fn orchestrator_is_executed() {
  let env = TestEnv::empty();

  env
    .marcel_cmd()
    .env("MARCEL_ORCHESTRATOR", "echo")
    .args(["et-son-orchestre", "bûches", "web"])
    .assert()
    .success()
    .stdout("logs web\n");
}

#[test]
fn child_exit_status_is_propagated() {
  let env = TestEnv::empty();

  env
    .marcel_cmd()
    .env("MARCEL_ENGINE", "false")
    .arg("socialistes")
    .assert()
    .code(1);

  env
    .marcel_cmd()
    .env("MARCEL_ENGINE", "sh")
    .args(["-c", "exit 3"])
    .assert()
    .code(3);
}

#[test]
fn help_is_printed_through_echo() {
  let env = TestEnv::empty();

  env
    .marcel_cmd()
    .arg("aide")
    .assert()
    .success()
    .stdout(predicate::str::contains("Le Docker à la française !"))
    .stdout(predicate::str::contains("Directives :"));
}

#[test]
fn missing_engine_fails() {
  let env = TestEnv::empty();

  env
    .marcel_cmd()
    .env("MARCEL_ENGINE", "marcel-engine-introuvable")
    .arg("socialistes")
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("failed to execute marcel-engine-introuvable"));
}

#[test]
fn built_image_uses_derived_manifest() {
  let env = TestEnv::from_fixture("recette_simple");

  env
    .marcel_cmd()
    .env("MARCEL_ENGINE", "echo")
    .args(["construis", "."])
    .assert()
    .success()
    .stdout("build -f ./.RecetteÀMarcel.Dockerfile .\n");

  assert!(env.derived_path().exists());
}
