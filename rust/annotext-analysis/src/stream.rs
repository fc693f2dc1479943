//! The pull-based [`TokenStream`] abstraction and helpers for consuming it.
//!
//! A stream is driven by its consumer:
//!
//! 1. [`TokenStream::reset`] returns it to the initial state (fresh streams are
//!    already in that state, so the first `reset` is optional).
//! 2. [`TokenStream::next_token`] is called until it returns `None`.
//! 3. [`TokenStream::end`] reports the trailing position increment and final
//!    offset.
//!
//! Token filters wrap another stream and apply the same protocol to it.

use annotext_common::{Result, error::Error, try_or_ret_some_err};

use crate::token::{StreamEnd, Token};

/// A restartable, single-pass producer of positioned tokens.
pub trait TokenStream {
    /// Returns the stream to its initial state, allowing a new traversal.
    fn reset(&mut self) -> Result<()>;

    /// Produces the next token, or `None` once the stream is exhausted.
    ///
    /// After `None` has been returned, further calls keep returning `None`
    /// until the stream is reset.
    fn next_token(&mut self) -> Result<Option<Token>>;

    /// Reports the end-of-stream state. Called once the stream is exhausted.
    fn end(&mut self) -> Result<StreamEnd>;
}

impl<S: TokenStream + ?Sized> TokenStream for Box<S> {
    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        (**self).next_token()
    }

    fn end(&mut self) -> Result<StreamEnd> {
        (**self).end()
    }
}

impl<S: TokenStream + ?Sized> TokenStream for &mut S {
    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        (**self).next_token()
    }

    fn end(&mut self) -> Result<StreamEnd> {
        (**self).end()
    }
}

/// A stream that produces no tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyTokenStream;

impl TokenStream for EmptyTokenStream {
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        Ok(None)
    }

    fn end(&mut self) -> Result<StreamEnd> {
        Ok(StreamEnd::default())
    }
}

/// Iterator over the remaining tokens of a stream.
pub struct Tokens<'a, S: ?Sized> {
    stream: &'a mut S,
}

impl<S: TokenStream + ?Sized> Iterator for Tokens<'_, S> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = try_or_ret_some_err!(self.stream.next_token());
        token.map(Ok)
    }
}

pub trait TokenStreamExt: TokenStream {
    /// Iterates over the remaining tokens, without resetting the stream.
    fn tokens(&mut self) -> Tokens<'_, Self> {
        Tokens { stream: self }
    }
}

impl<S: TokenStream + ?Sized> TokenStreamExt for S {}

/// A token together with its reconstructed absolute position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedToken {
    pub token: Token,
    pub position: u32,
}

/// The consumer view of a complete stream traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    pub tokens: Vec<PositionedToken>,
    pub end: StreamEnd,
}

impl Analysis {
    /// Term texts in emission order.
    pub fn terms(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.token.term.as_str()).collect()
    }

    /// Absolute position following the whole stream, including the trailing
    /// increment reported by `end`. `None` if the stream consumed no position.
    pub fn final_position(&self) -> Option<u32> {
        let last = self.tokens.last().map(|t| t.position as i64).unwrap_or(-1);
        let pos = last + self.end.position_increment as i64;
        u32::try_from(pos).ok()
    }
}

/// Resets `stream`, drains it and reconstructs absolute token positions.
pub fn analyze<S: TokenStream + ?Sized>(stream: &mut S) -> Result<Analysis> {
    stream.reset()?;
    let mut position = -1i64;
    let mut tokens = Vec::new();
    while let Some(token) = stream.next_token()? {
        position += i64::from(token.position_increment);
        // Leading zero increments are clamped to the first position.
        let Ok(abs_position) = u32::try_from(position.max(0)) else {
            return Err(Error::invalid_format(
                "position",
                format!("absolute position {position} of '{}' exceeds u32", token.term),
            ));
        };
        tokens.push(PositionedToken {
            position: abs_position,
            token,
        });
    }
    let end = stream.end()?;
    Ok(Analysis { tokens, end })
}
