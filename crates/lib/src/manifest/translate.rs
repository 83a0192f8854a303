use tracing::debug;

use crate::dictionary::{self, Dictionary};

/// Translate the line-leading directive keywords of a manifest.
///
/// Only keywords starting at offset 0 or right after a `\n` are replaced;
/// everything else is copied verbatim. The input is scanned once and output
/// is built from the original text only, so a translated keyword is never
/// matched again even when it happens to equal another source keyword.
/// When several keywords match at the same line start, the longest wins.
pub fn translate_manifest(text: &str) -> String {
  translate_with(text, dictionary::directives())
}

fn translate_with(text: &str, directives: &Dictionary) -> String {
  let mut out = String::with_capacity(text.len());
  let mut translated = 0usize;

  for line in text.split_inclusive('\n') {
    match directives.longest_prefix(line) {
      Some((keyword, target)) => {
        out.push_str(target);
        out.push_str(&line[keyword.len()..]);
        translated += 1;
      }
      None => out.push_str(line),
    }
  }

  debug!(translated, bytes = out.len(), "translated manifest");
  out
}
