use std::mem;

use annotext_common::Result;

use super::{
    ANY_ANNOTATION_TERM,
    cursor::IntervalCursor,
    intervals::{Interval, IntervalSet},
};
use crate::{
    payload::Payload,
    stream::TokenStream,
    token::{StreamEnd, Token},
};

/// Keeps only the tokens whose positions fall inside a set of annotation
/// intervals, and marks the start of every interval with a synthetic token.
///
/// For the text `"quick brown fox and a red dog"` and the markers
/// `[0, 3, 5, 2]` (annotations `pos=0,len=3` and `pos=5,len=2`) the filter keeps
/// `quick brown fox red dog`. Before `quick` and before `red` it emits an
/// [`ANY_ANNOTATION_TERM`] token at the same position, whose payload is the
/// annotation length encoded as a VInt (`3` and `2` respectively).
///
/// Removed tokens leave position gaps, so every emitted token keeps the
/// absolute position it had in the input stream.
///
/// A marker is emitted only when the token at the interval's first position
/// reaches this filter. If an upstream filter removed that token, the rest of
/// the interval is still kept but carries no marker.
pub struct AnnotatedIntervalFilter<S> {
    input: S,
    intervals: IntervalSet,
    cursor: IntervalCursor,
    skipped_positions: u32,
    state: State,
}

#[derive(Debug)]
enum State {
    /// Pulling input tokens until one falls inside an interval.
    Scanning,
    /// A marker was just emitted; the first annotated token follows it.
    Pending(Token),
    /// The input is exhausted.
    Exhausted,
}

impl<S: TokenStream> AnnotatedIntervalFilter<S> {
    /// Creates a filter over `input` from a flat `[start, len, ...]` marker list.
    ///
    /// # Errors
    /// Returns an invalid argument error if the markers are empty, of odd
    /// length, or contain a zero-length annotation.
    pub fn new(input: S, markers: &[u32]) -> Result<Self> {
        Ok(Self::with_intervals(input, IntervalSet::from_markers(markers)?))
    }

    pub fn with_intervals(input: S, intervals: IntervalSet) -> Self {
        Self {
            input,
            intervals,
            cursor: IntervalCursor::new(),
            skipped_positions: 0,
            state: State::Scanning,
        }
    }

    pub fn intervals(&self) -> &IntervalSet {
        &self.intervals
    }

    pub fn into_inner(self) -> S {
        self.input
    }

    fn marker_for(interval: Interval, first: &Token) -> Token {
        Token::new(ANY_ANNOTATION_TERM, first.start_offset, first.end_offset)
            .with_position_increment(first.position_increment)
            .with_payload(Payload::from_vints(&[interval.len]))
    }
}

impl<S: TokenStream> TokenStream for AnnotatedIntervalFilter<S> {
    fn reset(&mut self) -> Result<()> {
        self.cursor.reset();
        self.skipped_positions = 0;
        self.state = State::Scanning;
        self.input.reset()
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        match mem::replace(&mut self.state, State::Scanning) {
            State::Pending(token) => return Ok(Some(token)),
            State::Exhausted => {
                self.state = State::Exhausted;
                return Ok(None);
            }
            State::Scanning => (),
        }

        while let Some(mut token) = self.input.next_token()? {
            let increment = token.position_increment;
            let Some(interval) = self.cursor.advance(&self.intervals, increment) else {
                self.skipped_positions = self.skipped_positions.saturating_add(increment);
                continue;
            };

            token.position_increment =
                increment.saturating_add(mem::take(&mut self.skipped_positions));
            if self.cursor.position() == i64::from(interval.start) {
                log::trace!(
                    "annotation start at position {} (len {})",
                    interval.start,
                    interval.len
                );
                let marker = Self::marker_for(interval, &token);
                token.position_increment = 0;
                self.state = State::Pending(token);
                return Ok(Some(marker));
            }
            return Ok(Some(token));
        }

        self.state = State::Exhausted;
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
    use crate::stream::{EmptyTokenStream, analyze, tests::ScriptedTokenStream};

    #[test]
    fn test_rejects_invalid_markers() {
        assert!(AnnotatedIntervalFilter::new(EmptyTokenStream, &[]).is_err());
        assert!(AnnotatedIntervalFilter::new(EmptyTokenStream, &[1]).is_err());
        assert!(AnnotatedIntervalFilter::new(EmptyTokenStream, &[1, 0]).is_err());
    }

    #[test]
    fn test_empty_input() {
        let mut filter = AnnotatedIntervalFilter::new(EmptyTokenStream, &[1, 2]).unwrap();
        filter.reset().unwrap();
        assert_eq!(filter.next_token().unwrap(), None);
        assert_eq!(filter.next_token().unwrap(), None);
        assert_eq!(filter.end().unwrap().position_increment, 0);
    }

    #[test]
    fn test_marker_copies_first_token_offsets() {
        let source = ScriptedTokenStream::new(&[("one", 1), ("two", 1)]);
        let mut filter = AnnotatedIntervalFilter::new(source, &[1, 1]).unwrap();
        let marker = filter.next_token().unwrap().unwrap();
        let first = filter.next_token().unwrap().unwrap();

        assert_eq!(marker.term, ANY_ANNOTATION_TERM);
        assert_eq!(marker.position_increment, 2);
        assert_eq!(
            (marker.start_offset, marker.end_offset),
            (first.start_offset, first.end_offset)
        );
        assert_eq!(marker.payload.unwrap().read_vints().unwrap(), vec![1]);
        assert_eq!(first.term, "two");
        assert_eq!(first.position_increment, 0);
        assert_eq!(first.payload, None);
    }

    #[test]
    fn test_trailing_skipped_positions_reported_at_end() {
        let source = ScriptedTokenStream::new(&[("a", 1), ("b", 1), ("c", 3)]);
        let mut filter = AnnotatedIntervalFilter::new(source, &[0, 1]).unwrap();
        let analysis = analyze(&mut filter).unwrap();
        assert_eq!(analysis.terms(), vec![ANY_ANNOTATION_TERM, "a"]);
        assert_eq!(analysis.end.position_increment, 4);
        // Same final position as an unfiltered traversal: a=0, b=1, c=4.
        assert_eq!(analysis.final_position(), Some(4));

        // Exhaustion is sticky and does not lose the trailing gap.
        assert_eq!(filter.next_token().unwrap(), None);
        assert_eq!(filter.end().unwrap().position_increment, 4);
    }

    #[test]
    fn test_stacked_token_at_interval_start_gets_its_own_marker() {
        let source = ScriptedTokenStream::new(&[("one", 1), ("uno", 0), ("two", 1), ("dos", 0)]);
        let mut filter = AnnotatedIntervalFilter::new(source, &[0, 1]).unwrap();
        let analysis = analyze(&mut filter).unwrap();

        let got: Vec<(&str, u32, u32)> = analysis
            .tokens
            .iter()
            .map(|t| (t.token.term.as_str(), t.token.position_increment, t.position))
            .collect();
        assert_eq!(
            got,
            vec![
                (ANY_ANNOTATION_TERM, 1, 0),
                ("one", 0, 0),
                (ANY_ANNOTATION_TERM, 0, 0),
                ("uno", 0, 0),
            ]
        );
        assert_eq!(analysis.end.position_increment, 1);
    }

    #[test]
    fn test_large_gaps_saturate() {
        let half = u32::MAX / 2 + 1;
        let source = ScriptedTokenStream::new(&[("a", 1), ("b", half), ("c", half), ("d", 1)]);
        let mut filter = AnnotatedIntervalFilter::new(source, &[0, 1]).unwrap();
        filter.reset().unwrap();

        let terms: Vec<String> = std::iter::from_fn(|| filter.next_token().unwrap())
            .map(|t| t.term)
            .collect();
        assert_eq!(terms, vec![ANY_ANNOTATION_TERM, "a"]);
        assert_eq!(filter.end().unwrap().position_increment, u32::MAX);
    }

    #[test]
    fn test_interval_at_max_position() {
        let source = ScriptedTokenStream::new(&[("a", 1), ("b", u32::MAX - 1), ("c", 1)]);
        let mut filter = AnnotatedIntervalFilter::new(source, &[0, 1, u32::MAX, 1]).unwrap();
        let analysis = analyze(&mut filter).unwrap();

        assert_eq!(
            analysis.terms(),
            vec![ANY_ANNOTATION_TERM, "a", ANY_ANNOTATION_TERM, "c"]
        );
        let positions: Vec<u32> = analysis.tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 0, u32::MAX, u32::MAX]);
        assert_eq!(analysis.tokens[2].token.position_increment, u32::MAX);
        assert_eq!(
            analysis.tokens[2].token.payload.as_ref().unwrap().read_vints().unwrap(),
            vec![1]
        );
    }

    #[test]
    fn test_source_errors_propagate_unchanged() {
        let source = ScriptedTokenStream::new(&[("a", 1), ("b", 1)]).failing_at(1);
        let mut filter = AnnotatedIntervalFilter::new(source, &[0, 2]).unwrap();
        assert_eq!(filter.next_token().unwrap().unwrap().term, ANY_ANNOTATION_TERM);
        assert_eq!(filter.next_token().unwrap().unwrap().term, "a");
        let err = filter.next_token().unwrap_err();
        assert!(matches!(
            err.kind(),
            annotext_common::error::ErrorKind::Io { .. }
        ));
    }
}
