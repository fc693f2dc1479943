use annotext_common::Result;

use crate::{
    stream::TokenStream,
    token::{StreamEnd, Token},
};

/// Decides whether a token survives a [`FilteringTokenFilter`].
///
/// `accept` is called for every input token, in order, with the token's
/// original position increment, so stateful predicates can track absolute
/// positions.
pub trait TokenPredicate {
    fn accept(&mut self, token: &Token) -> bool;

    /// Restores the initial state; called when the filter is reset.
    fn reset(&mut self) {}
}

impl<F: FnMut(&Token) -> bool> TokenPredicate for F {
    fn accept(&mut self, token: &Token) -> bool {
        self(token)
    }
}

/// Removes tokens rejected by a [`TokenPredicate`] while preserving absolute
/// positions: the increments of removed tokens are added to the next kept
/// token, and trailing removed increments are reported by `end`. Folded
/// increments saturate at `u32::MAX`.
pub struct FilteringTokenFilter<S, P> {
    input: S,
    predicate: P,
    skipped_positions: u32,
}

impl<S: TokenStream, P: TokenPredicate> FilteringTokenFilter<S, P> {
    pub fn new(input: S, predicate: P) -> Self {
        Self {
            input,
            predicate,
            skipped_positions: 0,
        }
    }

    pub fn predicate(&self) -> &P {
        &self.predicate
    }

    pub fn into_inner(self) -> S {
        self.input
    }
}

impl<S: TokenStream, P: TokenPredicate> TokenStream for FilteringTokenFilter<S, P> {
    fn reset(&mut self) -> Result<()> {
        self.skipped_positions = 0;
        self.predicate.reset();
        self.input.reset()
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        while let Some(mut token) = self.input.next_token()? {
            if self.predicate.accept(&token) {
                token.position_increment = token
                    .position_increment
                    .saturating_add(std::mem::take(&mut self.skipped_positions));
                return Ok(Some(token));
            }
            self.skipped_positions = self
                .skipped_positions
                .saturating_add(token.position_increment);
        }
        Ok(None)
    }

    fn end(&mut self) -> Result<StreamEnd> {
        let mut end = self.input.end()?;
        end.position_increment = end.position_increment.saturating_add(self.skipped_positions);
        Ok(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::{analyze, tests::ScriptedTokenStream};

    #[test]
    fn test_filter_folds_skipped_positions() {
        let source = ScriptedTokenStream::new(&[("a", 1), ("x", 1), ("y", 2), ("b", 1), ("z", 1)]);
        let mut filter = FilteringTokenFilter::new(source, |t: &Token| {
            t.term == "a" || t.term == "b"
        });
        let analysis = analyze(&mut filter).unwrap();

        assert_eq!(analysis.terms(), vec!["a", "b"]);
        let positions: Vec<u32> = analysis.tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 4]);
        assert_eq!(analysis.tokens[1].token.position_increment, 4);
        // Trailing "z" is folded into the end state.
        assert_eq!(analysis.end.position_increment, 1);
        assert_eq!(analysis.final_position(), Some(5));
    }

    #[test]
    fn test_stateful_predicate_is_reset() {
        struct EveryOther {
            seen: usize,
            resets: usize,
        }
        impl TokenPredicate for EveryOther {
            fn accept(&mut self, _token: &Token) -> bool {
                self.seen += 1;
                self.seen % 2 == 1
            }
            fn reset(&mut self) {
                self.seen = 0;
                self.resets += 1;
            }
        }

        let source = ScriptedTokenStream::new(&[("a", 1), ("b", 1), ("c", 1)]);
        let mut filter = FilteringTokenFilter::new(source, EveryOther { seen: 0, resets: 0 });
        let first = analyze(&mut filter).unwrap();
        let second = analyze(&mut filter).unwrap();
        assert_eq!(first.terms(), vec!["a", "c"]);
        assert_eq!(first, second);
        assert_eq!(filter.predicate().resets, 2);
    }

    #[test]
    fn test_folded_increments_saturate() {
        let half = u32::MAX / 2 + 1;
        let source = ScriptedTokenStream::new(&[
            ("a", 1),
            ("x", half),
            ("y", half),
            ("b", 1),
            ("z", half),
            ("w", half),
        ]);
        let mut filter = FilteringTokenFilter::new(source, |t: &Token| {
            t.term == "a" || t.term == "b"
        });
        filter.reset().unwrap();
        assert_eq!(filter.next_token().unwrap().unwrap().position_increment, 1);
        let b = filter.next_token().unwrap().unwrap();
        assert_eq!(b.term, "b");
        assert_eq!(b.position_increment, u32::MAX);
        assert_eq!(filter.next_token().unwrap(), None);
        assert_eq!(filter.end().unwrap().position_increment, u32::MAX);
    }

    #[test]
    fn test_source_errors_propagate() {
        let source = ScriptedTokenStream::new(&[("a", 1), ("b", 1)]).failing_at(1);
        let mut filter = FilteringTokenFilter::new(source, |_: &Token| false);
        assert!(filter.next_token().is_err());
    }
}
