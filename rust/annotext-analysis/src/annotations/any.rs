use annotext_common::Result;

use super::ANY_ANNOTATION_TERM;
use crate::{
    stream::TokenStream,
    token::{StreamEnd, Token},
};

/// Emits every input token followed by an [`ANY_ANNOTATION_TERM`] token at the
/// same position.
///
/// Applied to a stream of annotation terms, this lets a consumer search for
/// "any annotation" at a position without knowing the individual terms.
pub struct AnyAnnotationFilter<S> {
    input: S,
    pending: Option<Token>,
}

impl<S: TokenStream> AnyAnnotationFilter<S> {
    pub fn new(input: S) -> Self {
        Self {
            input,
            pending: None,
        }
    }
}

impl<S: TokenStream> TokenStream for AnyAnnotationFilter<S> {
    fn reset(&mut self) -> Result<()> {
        self.pending = None;
        self.input.reset()
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        if let Some(any) = self.pending.take() {
            return Ok(Some(any));
        }
        let Some(token) = self.input.next_token()? else {
            return Ok(None);
        };
        self.pending = Some(Token {
            term: ANY_ANNOTATION_TERM.to_string(),
            position_increment: 0,
            start_offset: token.start_offset,
            end_offset: token.end_offset,
            payload: token.payload.clone(),
        });
        Ok(Some(token))
    }

    fn end(&mut self) -> Result<StreamEnd> {
        self.input.end()
    }
}
