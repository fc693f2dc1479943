//! Capturing a token stream once and replaying it to several consumers.

use std::sync::Arc;

use annotext_common::Result;

use crate::{
    stream::TokenStream,
    token::{StreamEnd, Token},
};

/// A stream that replays tokens captured from another stream.
///
/// Capturing runs the source to completion (including its `end`) once. Clones
/// share the captured tokens but keep independent cursors, so the same
/// tokenization can feed a plain text pipeline and an annotation pipeline.
#[derive(Debug, Clone)]
pub struct ReplayTokenStream {
    tokens: Arc<[Token]>,
    end: StreamEnd,
    next: usize,
}

impl ReplayTokenStream {
    /// Resets `source` and records all of its tokens.
    pub fn capture<S: TokenStream + ?Sized>(source: &mut S) -> Result<ReplayTokenStream> {
        source.reset()?;
        let mut tokens = Vec::new();
        while let Some(token) = source.next_token()? {
            tokens.push(token);
        }
        let end = source.end()?;
        log::trace!("captured {} tokens for replay", tokens.len());
        Ok(ReplayTokenStream {
            tokens: tokens.into(),
            end,
            next: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl TokenStream for ReplayTokenStream {
    fn reset(&mut self) -> Result<()> {
        self.next = 0;
        Ok(())
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        let token = self.tokens.get(self.next).cloned();
        if token.is_some() {
            self.next += 1;
        }
        Ok(token)
    }

    fn end(&mut self) -> Result<StreamEnd> {
        Ok(self.end)
    }
}
