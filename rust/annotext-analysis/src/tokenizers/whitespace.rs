//! Whitespace Tokenizer - splits the input on Unicode whitespace.

use annotext_common::Result;

use super::{CharRunScanner, DEFAULT_MAX_TERM_LENGTH, DEFAULT_MIN_TERM_LENGTH, Tokenizer};
use crate::{
    stream::TokenStream,
    token::{StreamEnd, Token},
    tokenizers::TokenizerKind,
};

/// Whitespace Tokenizer - every maximal run of non-whitespace characters is a term.
///
/// Punctuation stays attached to the term it touches, so `"fox, dog"` yields
/// `"fox,"` and `"dog"`. This is the tokenizer annotation markers are usually
/// expressed against: positions count whitespace separated words.
pub struct WhitespaceTokenizer {
    scanner: CharRunScanner,
}

impl WhitespaceTokenizer {
    /// Create a new WhitespaceTokenizer with custom max and min term lengths.
    pub fn with_lengths(max_term_length: usize, min_term_length: usize) -> Self {
        Self {
            scanner: CharRunScanner::new(max_term_length, min_term_length),
        }
    }

    /// Create a new WhitespaceTokenizer with default settings.
    pub fn new() -> Self {
        Self::with_lengths(DEFAULT_MAX_TERM_LENGTH, DEFAULT_MIN_TERM_LENGTH)
    }
}

impl Default for WhitespaceTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStream for WhitespaceTokenizer {
    fn reset(&mut self) -> Result<()> {
        self.scanner.rewind();
        Ok(())
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        Ok(self.scanner.next_token(|ch| !ch.is_whitespace()))
    }

    fn end(&mut self) -> Result<StreamEnd> {
        Ok(self.scanner.end())
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn set_input(&mut self, text: impl Into<String>) {
        self.scanner.set_input(text.into());
    }

    fn kind(&self) -> TokenizerKind {
        TokenizerKind::Whitespace
    }

    fn max_term_length(&self) -> usize {
        self.scanner.max_term_length()
    }

    fn min_term_length(&self) -> usize {
        self.scanner.min_term_length()
    }
}
