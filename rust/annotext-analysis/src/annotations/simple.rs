use super::{cursor::IntervalCursor, intervals::IntervalSet};
use crate::{
    filters::{FilteringTokenFilter, TokenPredicate},
    token::Token,
};

/// Keeps only tokens inside annotation intervals, without marker tokens.
pub type SimpleIntervalFilter<S> = FilteringTokenFilter<S, IntervalPredicate>;

/// Accepts tokens whose absolute position falls inside an [`IntervalSet`].
#[derive(Debug, Clone)]
pub struct IntervalPredicate {
    intervals: IntervalSet,
    cursor: IntervalCursor,
}

impl IntervalPredicate {
    pub fn new(intervals: IntervalSet) -> IntervalPredicate {
        IntervalPredicate {
            intervals,
            cursor: IntervalCursor::new(),
        }
    }

    pub fn intervals(&self) -> &IntervalSet {
        &self.intervals
    }
}

impl TokenPredicate for IntervalPredicate {
    fn accept(&mut self, token: &Token) -> bool {
        self.cursor
            .advance(&self.intervals, token.position_increment)
            .is_some()
    }

    fn reset(&mut self) {
        self.cursor.reset();
    }
}
