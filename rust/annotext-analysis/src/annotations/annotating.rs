use std::mem;

use annotext_common::{Result, error::Error};

use crate::{
    annotators::Annotator,
    filters::{FilteringTokenFilter, TokenPredicate},
    payload::Payload,
    stream::TokenStream,
    token::{StreamEnd, Token},
};

/// Keeps only the tokens accepted by an [`Annotator`], unchanged.
pub type AnnotatorTokenFilter<S, A> = FilteringTokenFilter<S, AnnotatorPredicate<A>>;

/// Adapts an [`Annotator`] to the [`TokenPredicate`] interface.
#[derive(Debug, Clone)]
pub struct AnnotatorPredicate<A>(pub A);

impl<A: Annotator> TokenPredicate for AnnotatorPredicate<A> {
    fn accept(&mut self, token: &Token) -> bool {
        self.0.accept(&token.term)
    }
}

/// Replaces every token accepted by an [`Annotator`] with an annotation term.
///
/// The emitted token's payload holds two VInts: the absolute position of the
/// accepted token in the input stream and the annotation length (always 1,
/// only single-word annotations are recognized). Rejected tokens are dropped;
/// their positions are folded into the next emitted token.
pub struct AnnotatingTokenFilter<S, A> {
    input: S,
    annotator: A,
    term: String,
    abs_position: i64,
    skipped_positions: u32,
}

impl<S: TokenStream, A: Annotator> AnnotatingTokenFilter<S, A> {
    pub fn new(input: S, annotator: A, term: impl Into<String>) -> Self {
        Self {
            input,
            annotator,
            term: term.into(),
            abs_position: -1,
            skipped_positions: 0,
        }
    }
}

impl<S: TokenStream, A: Annotator> TokenStream for AnnotatingTokenFilter<S, A> {
    fn reset(&mut self) -> Result<()> {
        self.abs_position = -1;
        self.skipped_positions = 0;
        self.input.reset()
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        while let Some(token) = self.input.next_token()? {
            self.abs_position += i64::from(token.position_increment);
            if !self.annotator.accept(&token.term) {
                self.skipped_positions = self
                    .skipped_positions
                    .saturating_add(token.position_increment);
                continue;
            }

            let Ok(start) = u32::try_from(self.abs_position.max(0)) else {
                return Err(Error::invalid_format(
                    "position",
                    format!("annotation position {} exceeds u32", self.abs_position),
                ));
            };
            let increment = token
                .position_increment
                .saturating_add(mem::take(&mut self.skipped_positions));
            return Ok(Some(
                Token::new(self.term.as_str(), token.start_offset, token.end_offset)
                    .with_position_increment(increment)
                    .with_payload(Payload::from_vints(&[start, 1])),
            ));
        }
        Ok(None)
    }

    fn end(&mut self) -> Result<StreamEnd> {
        let mut end = self.input.end()?;
        end.position_increment = end.position_increment.saturating_add(self.skipped_positions);
        Ok(end)
    }
}
