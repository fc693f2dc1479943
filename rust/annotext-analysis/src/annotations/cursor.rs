use super::intervals::{Interval, IntervalSet};

/// Forward-only scan state matching absolute token positions against a
/// normalized [`IntervalSet`].
///
/// Positions must be fed in non-decreasing order; the cursor never moves back
/// to an earlier interval until it is reset.
#[derive(Debug, Clone)]
pub(crate) struct IntervalCursor {
    abs_position: i64,
    index: usize,
}

impl IntervalCursor {
    pub(crate) fn new() -> Self {
        Self {
            abs_position: -1,
            index: 0,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.abs_position = -1;
        self.index = 0;
    }

    /// Absolute position of the last token fed to the cursor (-1 before the first).
    pub(crate) fn position(&self) -> i64 {
        self.abs_position
    }

    /// Moves the cursor by `position_increment` and returns the interval that
    /// contains the new position, if any.
    pub(crate) fn advance(
        &mut self,
        intervals: &IntervalSet,
        position_increment: u32,
    ) -> Option<Interval> {
        self.abs_position += i64::from(position_increment);
        while let Some(interval) = intervals.get(self.index) {
            if self.abs_position < i64::from(interval.start) {
                return None;
            }
            if self.abs_position <= i64::from(interval.end()) {
                return Some(interval);
            }
            self.index += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_walks_intervals() {
        let intervals = IntervalSet::from_markers(&[1, 2, 5, 1]).unwrap();
        let mut cursor = IntervalCursor::new();

        let hits: Vec<Option<u32>> = [1, 1, 1, 1, 1, 1, 1]
            .iter()
            .map(|&inc| cursor.advance(&intervals, inc).map(|i| i.start))
            .collect();
        assert_eq!(
            hits,
            vec![None, Some(1), Some(1), None, None, Some(5), None]
        );
        assert_eq!(cursor.position(), 6);

        cursor.reset();
        assert_eq!(cursor.position(), -1);
        assert_eq!(cursor.advance(&intervals, 2).map(|i| i.start), Some(1));
    }

    #[test]
    fn test_cursor_skips_intervals_jumped_over() {
        let intervals = IntervalSet::from_markers(&[0, 1, 2, 1, 4, 2]).unwrap();
        let mut cursor = IntervalCursor::new();
        // Jump straight to position 5.
        assert_eq!(cursor.advance(&intervals, 6), Some(Interval::new(4, 2)));
        assert_eq!(cursor.advance(&intervals, 1), None);
    }

    #[test]
    fn test_zero_increment_before_first_position() {
        let intervals = IntervalSet::from_markers(&[0, 1]).unwrap();
        let mut cursor = IntervalCursor::new();
        assert_eq!(cursor.advance(&intervals, 0), None);
        assert_eq!(cursor.advance(&intervals, 1), Some(Interval::new(0, 1)));
    }
}
