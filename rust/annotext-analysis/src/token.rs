//! Token representation shared by tokenizers and token filters.

use crate::payload::Payload;

/// A single token produced by a [`TokenStream`](crate::TokenStream).
///
/// Positions are relative: `position_increment` is the distance from the
/// previous token's position. The first token of a stream is at absolute
/// position `position_increment - 1`, so a stream whose first increment is 1
/// starts at position 0. An increment of 0 stacks the token on the previous
/// position; an increment greater than 1 records a gap left by removed tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The term text.
    pub term: String,
    /// Distance from the previous token's position.
    pub position_increment: u32,
    /// Byte offset of the token start in the source text.
    pub start_offset: usize,
    /// Byte offset one past the token end in the source text.
    pub end_offset: usize,
    /// Optional opaque payload attached to this token.
    pub payload: Option<Payload>,
}

impl Token {
    /// Creates a token with position increment 1 and no payload.
    pub fn new(term: impl Into<String>, start_offset: usize, end_offset: usize) -> Token {
        Token {
            term: term.into(),
            position_increment: 1,
            start_offset,
            end_offset,
            payload: None,
        }
    }

    pub fn with_position_increment(mut self, position_increment: u32) -> Token {
        self.position_increment = position_increment;
        self
    }

    pub fn with_payload(mut self, payload: Payload) -> Token {
        self.payload = Some(payload);
        self
    }
}

/// State reported by [`TokenStream::end`](crate::TokenStream::end) once the
/// stream has been exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamEnd {
    /// Positions consumed after the last emitted token (e.g. trailing tokens
    /// removed by a filter).
    pub position_increment: u32,
    /// Final offset, usually the length of the source text.
    pub final_offset: usize,
}
