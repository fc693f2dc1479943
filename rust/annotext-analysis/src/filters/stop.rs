use ahash::AHashSet;

use super::filtering::{FilteringTokenFilter, TokenPredicate};
use crate::{stream::TokenStream, token::Token};

/// A filter that removes stop words, leaving position gaps in their place.
pub type StopFilter<S> = FilteringTokenFilter<S, StopWords>;

/// A set of terms to remove from a token stream.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: AHashSet<String>,
    ignore_case: bool,
}

impl StopWords {
    pub fn new<I, W>(words: I, ignore_case: bool) -> StopWords
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize(w.as_ref(), ignore_case))
            .collect();
        StopWords { words, ignore_case }
    }

    pub fn contains(&self, term: &str) -> bool {
        if self.ignore_case {
            self.words.contains(&term.to_lowercase())
        } else {
            self.words.contains(term)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Wraps `input` in a [`StopFilter`] removing these words.
    pub fn filter<S: TokenStream>(self, input: S) -> StopFilter<S> {
        FilteringTokenFilter::new(input, self)
    }
}

fn normalize(word: &str, ignore_case: bool) -> String {
    if ignore_case {
        word.to_lowercase()
    } else {
        word.to_string()
    }
}

impl TokenPredicate for StopWords {
    fn accept(&mut self, token: &Token) -> bool {
        !self.contains(&token.term)
    }
}
