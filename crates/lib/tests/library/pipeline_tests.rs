//! End-to-end tests of the translation pipeline (without execution).

use marcel_lib::manifest::derived_path;
use marcel_lib::{CommandKind, Tool};

use super::common::{dispatch, workdir};

mod commands {
  use super::*;

  #[test]
  fn chauffe_becomes_docker_run() {
    let dir = workdir(None);
    let result = dispatch(&["marcel", "chauffe", "-d", "ubuntu"], dir.path());
    assert_eq!(result.args.as_slice(), ["docker", "run", "-d", "ubuntu"]);
  }

  #[test]
  fn unknown_tokens_keep_their_position() {
    let dir = workdir(None);
    let result = dispatch(
      &["marcel", "fais", "-it", "mon-recipient", "bash", "-c", "rsa"],
      dir.path(),
    );
    assert_eq!(
      result.args.as_slice(),
      ["docker", "exec", "-it", "mon-recipient", "bash", "-c", "rmi"]
    );
  }

  #[test]
  fn group_subcommands_translate() {
    let dir = workdir(None);
    let result = dispatch(&["marcel", "récipient", "socialistes", "--aide"], dir.path());
    assert_eq!(result.args.as_slice(), ["docker", "container", "ps", "--help"]);
  }

  #[test]
  fn orchestra_form() {
    let dir = workdir(None);
    let result = dispatch(&["marcel", "et-son-orchestre", "up", "-d"], dir.path());
    assert_eq!(result.tool, Tool::Orchestrator);
    assert_eq!(result.args.as_slice(), ["docker-compose", "up", "-d"]);
  }
}

mod build {
  use super::*;

  const RECETTE: &str = "\
DEPUIS debian:stable-slim
CRÉATEUR Marcel <marcel@example.fr>
EELV LANG=fr_FR.UTF-8
LANCE apt-get update && \\
    apt-get install -y fromage
COPIER baguette.sh /usr/local/bin/
DÉSIGNER 8080
POINT D'ENTRÉE [\"baguette.sh\"]
";

  const DOCKERFILE: &str = "\
FROM debian:stable-slim
MAINTAINER Marcel <marcel@example.fr>
ENV LANG=fr_FR.UTF-8
RUN apt-get update && \\
    apt-get install -y fromage
COPY baguette.sh /usr/local/bin/
EXPOSE 8080
ENTRYPOINT [\"baguette.sh\"]
";

  #[test]
  fn construis_writes_translated_dockerfile() {
    let dir = workdir(Some(RECETTE));

    let result = dispatch(&["marcel", "construis", "-t", "fromagerie", "."], dir.path());

    assert_eq!(result.kind, CommandKind::Build);
    assert_eq!(
      result.args.as_slice(),
      ["docker", "build", "-f", "./.RecetteÀMarcel.Dockerfile", "-t", "fromagerie", "."]
    );
    let written = std::fs::read_to_string(derived_path(dir.path())).unwrap();
    assert_eq!(written, DOCKERFILE);
  }

  #[test]
  fn rebuilding_is_idempotent() {
    let dir = workdir(Some(RECETTE));

    let first = dispatch(&["marcel", "construis", "."], dir.path());
    let second = dispatch(&["marcel", "construis", "."], dir.path());

    assert_eq!(first, second);
    assert_eq!(std::fs::read_to_string(derived_path(dir.path())).unwrap(), DOCKERFILE);
  }

  #[test]
  fn explicit_file_wins_over_manifest() {
    let dir = workdir(Some(RECETTE));

    let result = dispatch(&["marcel", "construis", "--file", "Dockerfile", "."], dir.path());

    assert_eq!(result.args.as_slice(), ["docker", "build", "--file", "Dockerfile", "."]);
    assert_eq!(result.derived, None);
    assert!(!derived_path(dir.path()).exists());
  }
}

mod help {
  use super::*;

  #[test]
  fn aide_and_help_give_the_same_listing() {
    let dir = workdir(None);

    let aide = dispatch(&["marcel", "aide"], dir.path());
    let help = dispatch(&["marcel", "help", "run"], dir.path());

    assert_eq!(aide.args, help.args);
    assert_eq!(aide.args.program(), Some("echo"));
  }

  #[test]
  fn help_flag_is_only_translated() {
    let dir = workdir(None);
    let result = dispatch(&["marcel", "--aide"], dir.path());

    assert_eq!(result.kind, CommandKind::Other);
    assert_eq!(result.args.as_slice(), ["docker", "--help"]);
  }
}
