//! Tokenizers: the token streams at the head of an analysis chain.
//!
//! A tokenizer owns its input text and produces one token per extracted term,
//! each with position increment 1 and byte offsets into the input. Filters
//! from [`crate::filters`] and [`crate::annotations`] are layered on top.

pub mod unicode_word;
pub mod whitespace;

use std::io::Read;
use std::ops::Range;

use annotext_common::{Result, error::Error};
pub use unicode_word::UnicodeWordTokenizer;
pub use whitespace::WhitespaceTokenizer;

use crate::{
    stream::TokenStream,
    token::{StreamEnd, Token},
};

/// Default maximum length of a single term in bytes before truncation
pub const DEFAULT_MAX_TERM_LENGTH: usize = 128;

/// Default minimum length of a single term in bytes
pub const DEFAULT_MIN_TERM_LENGTH: usize = 1;

/// A tokenizer extracts terms from an owned input text.
///
/// Terms longer than the maximum length are truncated at UTF-8 character
/// boundaries. Terms shorter than the minimum length are excluded entirely and
/// do not occupy a position.
pub trait Tokenizer: TokenStream {
    /// Replaces the input text and rewinds the tokenizer.
    fn set_input(&mut self, text: impl Into<String>)
    where
        Self: Sized;

    /// Reads the whole input text from `reader` and rewinds the tokenizer.
    fn set_reader(&mut self, mut reader: impl Read) -> Result<()>
    where
        Self: Sized,
    {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| Error::io("tokenizer input", e))?;
        self.set_input(text);
        Ok(())
    }

    /// Get the kind of the tokenizer.
    fn kind(&self) -> TokenizerKind;

    /// Get the name of the tokenizer kind as a static string.
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    fn max_term_length(&self) -> usize;

    fn min_term_length(&self) -> usize;
}

/// Creates a tokenizer by name (`"whitespace"` or `"unicode-word"`).
///
/// # Errors
/// Returns an [`Error::invalid_arg`] if the provided tokenizer name is not recognized.
pub fn create_tokenizer(name: &str) -> Result<TokenizerType> {
    create_tokenizer_with_lengths(name, DEFAULT_MAX_TERM_LENGTH, DEFAULT_MIN_TERM_LENGTH)
}

/// Creates a tokenizer by name with custom term length limits.
pub fn create_tokenizer_with_lengths(
    name: &str,
    max_term_length: usize,
    min_term_length: usize,
) -> Result<TokenizerType> {
    annotext_common::verify_arg!(max_term_length, max_term_length > 0);
    annotext_common::verify_arg!(min_term_length, min_term_length <= max_term_length);
    match name.try_into()? {
        TokenizerKind::Whitespace => Ok(TokenizerType::Whitespace(
            WhitespaceTokenizer::with_lengths(max_term_length, min_term_length),
        )),
        TokenizerKind::UnicodeWord => Ok(TokenizerType::UnicodeWord(
            UnicodeWordTokenizer::with_lengths(max_term_length, min_term_length),
        )),
    }
}

/// Truncate a string slice to the maximum allowed length at a codepoint boundary.
pub(crate) fn truncate_str(input: &str, max_term_length: usize) -> &str {
    if input.len() <= max_term_length {
        return input;
    }

    let mut boundary = max_term_length;
    while boundary > 0 && !input.is_char_boundary(boundary) {
        boundary -= 1;
    }

    &input[..boundary]
}

/// Finds the next maximal run of characters matching `is_term_char` at or
/// after byte offset `from`.
pub(crate) fn next_run(
    input: &str,
    from: usize,
    is_term_char: impl Fn(char) -> bool,
) -> Option<Range<usize>> {
    let rest = &input[from..];
    let (start, _) = rest.char_indices().find(|&(_, ch)| is_term_char(ch))?;
    let end = rest[start..]
        .char_indices()
        .find(|&(_, ch)| !is_term_char(ch))
        .map(|(len, _)| start + len)
        .unwrap_or(rest.len());
    Some(from + start..from + end)
}

/// Input text and scan cursor shared by the tokenizers.
#[derive(Debug, Default)]
pub(crate) struct CharRunScanner {
    input: String,
    cursor: usize,
    max_term_length: usize,
    min_term_length: usize,
}

impl CharRunScanner {
    pub(crate) fn new(max_term_length: usize, min_term_length: usize) -> Self {
        Self {
            input: String::new(),
            cursor: 0,
            max_term_length,
            min_term_length,
        }
    }

    pub(crate) fn set_input(&mut self, text: String) {
        self.input = text;
        self.cursor = 0;
    }

    pub(crate) fn rewind(&mut self) {
        self.cursor = 0;
    }

    pub(crate) fn next_token(&mut self, is_term_char: impl Fn(char) -> bool) -> Option<Token> {
        self.next_token_by(|input, from| next_run(input, from, &is_term_char))
    }

    /// Scans with `next_range`, which returns the byte range of the next term
    /// starting at or after the given offset.
    pub(crate) fn next_token_by(
        &mut self,
        next_range: impl Fn(&str, usize) -> Option<Range<usize>>,
    ) -> Option<Token> {
        while let Some(range) = next_range(&self.input, self.cursor) {
            self.cursor = range.end;
            let term = &self.input[range.clone()];
            if term.len() < self.min_term_length {
                continue;
            }
            let term = truncate_str(term, self.max_term_length);
            return Some(Token::new(term, range.start, range.end));
        }
        self.cursor = self.input.len();
        None
    }

    pub(crate) fn end(&self) -> StreamEnd {
        StreamEnd {
            position_increment: 0,
            final_offset: self.input.len(),
        }
    }

    pub(crate) fn max_term_length(&self) -> usize {
        self.max_term_length
    }

    pub(crate) fn min_term_length(&self) -> usize {
        self.min_term_length
    }
}

/// Enum representing the different tokenizer kinds available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerKind {
    /// Splits input on Unicode whitespace; every other character belongs to a term.
    Whitespace,
    /// Extracts maximal runs of alphanumeric characters.
    UnicodeWord,
}

impl TryFrom<&str> for TokenizerKind {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        match name {
            "whitespace" => Ok(TokenizerKind::Whitespace),
            "unicode-word" => Ok(TokenizerKind::UnicodeWord),
            _ => Err(Error::invalid_arg(
                "name",
                format!("Unrecognized tokenizer: {name}"),
            )),
        }
    }
}

impl TokenizerKind {
    pub const fn name(&self) -> &'static str {
        match self {
            TokenizerKind::Whitespace => "whitespace",
            TokenizerKind::UnicodeWord => "unicode-word",
        }
    }
}

/// Enum that holds all available tokenizer types.
pub enum TokenizerType {
    Whitespace(WhitespaceTokenizer),
    UnicodeWord(UnicodeWordTokenizer),
}

impl TokenStream for TokenizerType {
    fn reset(&mut self) -> Result<()> {
        match self {
            TokenizerType::Whitespace(tokenizer) => tokenizer.reset(),
            TokenizerType::UnicodeWord(tokenizer) => tokenizer.reset(),
        }
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        match self {
            TokenizerType::Whitespace(tokenizer) => tokenizer.next_token(),
            TokenizerType::UnicodeWord(tokenizer) => tokenizer.next_token(),
        }
    }

    fn end(&mut self) -> Result<StreamEnd> {
        match self {
            TokenizerType::Whitespace(tokenizer) => tokenizer.end(),
            TokenizerType::UnicodeWord(tokenizer) => tokenizer.end(),
        }
    }
}

impl Tokenizer for TokenizerType {
    fn set_input(&mut self, text: impl Into<String>) {
        match self {
            TokenizerType::Whitespace(tokenizer) => tokenizer.set_input(text),
            TokenizerType::UnicodeWord(tokenizer) => tokenizer.set_input(text),
        }
    }

    fn kind(&self) -> TokenizerKind {
        match self {
            TokenizerType::Whitespace(tokenizer) => tokenizer.kind(),
            TokenizerType::UnicodeWord(tokenizer) => tokenizer.kind(),
        }
    }

    fn max_term_length(&self) -> usize {
        match self {
            TokenizerType::Whitespace(tokenizer) => tokenizer.max_term_length(),
            TokenizerType::UnicodeWord(tokenizer) => tokenizer.max_term_length(),
        }
    }

    fn min_term_length(&self) -> usize {
        match self {
            TokenizerType::Whitespace(tokenizer) => tokenizer.min_term_length(),
            TokenizerType::UnicodeWord(tokenizer) => tokenizer.min_term_length(),
        }
    }
}
