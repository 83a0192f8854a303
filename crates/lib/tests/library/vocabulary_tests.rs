//! Properties of the shipped vocabularies.

use marcel_lib::dictionary::{self, DIRECTIVES, TOKENS};
use marcel_lib::help::advertised_words;
use marcel_lib::manifest::translate_manifest;

#[test]
fn every_token_translates_to_a_different_word() {
  for (source, target) in TOKENS {
    assert_ne!(source, target, "{source} maps to itself");
    assert_eq!(dictionary::tokens().get(source), Some(*target));
  }
}

#[test]
fn every_directive_translates_at_line_start() {
  for (source, target) in DIRECTIVES {
    let manifest = format!("# commentaire\n{source} arg\n");
    assert_eq!(translate_manifest(&manifest), format!("# commentaire\n{target} arg\n"));
  }
}

#[test]
fn directive_targets_are_not_source_keywords() {
  for (_, target) in DIRECTIVES {
    assert!(dictionary::directives().get(target).is_none(), "{target} would chain");
  }
}

#[test]
fn help_lists_only_known_words() {
  let unknown: Vec<_> = advertised_words()
    .filter(|word| dictionary::tokens().get(word).is_none())
    .collect();
  assert!(unknown.is_empty(), "untranslated: {unknown:?}");
}
