//! Unicode Word Tokenizer - extracts words using Unicode word boundaries (UAX #29).

use std::ops::Range;

use annotext_common::Result;
use unicode_segmentation::UnicodeSegmentation;

use super::{CharRunScanner, DEFAULT_MAX_TERM_LENGTH, DEFAULT_MIN_TERM_LENGTH, Tokenizer};
use crate::{
    stream::TokenStream,
    token::{StreamEnd, Token},
    tokenizers::TokenizerKind,
};

/// Word Tokenizer - extracts words from text following the Unicode word
/// segmentation rules.
///
/// Only segments containing letters or digits are terms, so punctuation and
/// emoji are skipped, while `can't` and `3.14` stay single words. Ideographic
/// text yields one term per character. Terms longer than the maximum length
/// are truncated at UTF-8 character boundaries. Terms shorter than the minimum
/// length are excluded entirely.
pub struct UnicodeWordTokenizer {
    scanner: CharRunScanner,
}

impl UnicodeWordTokenizer {
    /// Create a new UnicodeWordTokenizer with custom max and min term lengths.
    pub fn with_lengths(max_term_length: usize, min_term_length: usize) -> Self {
        Self {
            scanner: CharRunScanner::new(max_term_length, min_term_length),
        }
    }

    /// Create a new UnicodeWordTokenizer with default settings.
    pub fn new() -> Self {
        Self::with_lengths(DEFAULT_MAX_TERM_LENGTH, DEFAULT_MIN_TERM_LENGTH)
    }
}

impl Default for UnicodeWordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStream for UnicodeWordTokenizer {
    fn reset(&mut self) -> Result<()> {
        self.scanner.rewind();
        Ok(())
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        Ok(self.scanner.next_token_by(next_word))
    }

    fn end(&mut self) -> Result<StreamEnd> {
        Ok(self.scanner.end())
    }
}

/// Byte range of the first word starting at or after `from`. `from` is always
/// a word boundary: the start of the input or the end of a previous word.
fn next_word(input: &str, from: usize) -> Option<Range<usize>> {
    let (start, word) = input[from..].unicode_word_indices().next()?;
    Some(from + start..from + start + word.len())
}

impl Tokenizer for UnicodeWordTokenizer {
    fn set_input(&mut self, text: impl Into<String>) {
        self.scanner.set_input(text.into());
    }

    fn kind(&self) -> TokenizerKind {
        TokenizerKind::UnicodeWord
    }

    fn max_term_length(&self) -> usize {
        self.scanner.max_term_length()
    }

    fn min_term_length(&self) -> usize {
        self.scanner.min_term_length()
    }
}
