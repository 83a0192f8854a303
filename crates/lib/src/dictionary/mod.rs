//! Static source-to-target vocabularies.
//!
//! Two dictionaries drive the whole translation:
//! - [`tokens()`]: command-line subcommands and flags
//! - [`directives()`]: line-leading keywords of the build manifest
//!
//! Both are defined as constant tables and indexed once on first use.

mod directives;
mod tokens;

use std::collections::HashMap;
use std::sync::LazyLock;

pub use directives::DIRECTIVES;
pub use tokens::TOKENS;

static TOKEN_DICTIONARY: LazyLock<Dictionary> = LazyLock::new(|| Dictionary::new(TOKENS));
static DIRECTIVE_DICTIONARY: LazyLock<Dictionary> = LazyLock::new(|| Dictionary::new(DIRECTIVES));

/// Immutable lookup table from a source word to its target word.
#[derive(Debug)]
pub struct Dictionary {
  index: HashMap<&'static str, &'static str>,
  longest_key: usize,
}

impl Dictionary {
  /// Index a table of `(source, target)` pairs.
  ///
  /// Later duplicates overwrite earlier ones; the shipped tables have none.
  pub fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
    let index: HashMap<_, _> = entries.iter().copied().collect();
    let longest_key = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    Self { index, longest_key }
  }

  /// Exact, whole-word lookup.
  pub fn get(&self, word: &str) -> Option<&'static str> {
    self.index.get(word).copied()
  }

  /// Find the longest key that `text` starts with.
  ///
  /// Returns the matched key together with its translation.
  pub fn longest_prefix(&self, text: &str) -> Option<(&'static str, &'static str)> {
    let mut end = text.len().min(self.longest_key);
    while !text.is_char_boundary(end) {
      end -= 1;
    }

    // Walk candidate prefixes from longest to shortest, on char boundaries only.
    let window = &text[..end];
    window
      .char_indices()
      .rev()
      .map(|(i, c)| i + c.len_utf8())
      .find_map(|len| self.index.get_key_value(&window[..len]).map(|(k, v)| (*k, *v)))
  }
}

/// Command and flag vocabulary.
pub fn tokens() -> &'static Dictionary {
  &TOKEN_DICTIONARY
}

/// Manifest directive vocabulary.
pub fn directives() -> &'static Dictionary {
  &DIRECTIVE_DICTIONARY
}
