//! Annotation intervals and their normalization.
//!
//! Annotations are supplied as a flat list of `(start, length)` pairs in token
//! positions. Normalization sorts them by start (longer first on ties) and
//! drops every interval fully covered by a previously kept one, so a single
//! forward scan over positions never needs to look back.

use std::cmp::Reverse;

use annotext_common::{Result, error::Error};

/// A contiguous run of `len` annotated positions starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub start: u32,
    pub len: u32,
}

impl Interval {
    pub fn new(start: u32, len: u32) -> Interval {
        Interval { start, len }
    }

    /// Last position covered by the interval (inclusive).
    #[inline]
    pub fn end(&self) -> u32 {
        self.start + (self.len - 1)
    }

    #[inline]
    pub fn contains(&self, position: u32) -> bool {
        self.start <= position && position <= self.end()
    }

}

/// Sorted, non-covering annotation intervals.
///
/// Intervals may still partially overlap or touch; only intervals fully
/// contained in another one are removed. The set is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalSet {
    intervals: Box<[Interval]>,
}

impl IntervalSet {
    /// Builds a normalized set from a flat `[start, len, start, len, ...]` list.
    ///
    /// # Errors
    /// Returns an [`Error::invalid_arg`] if `markers` is empty or of odd length,
    /// if any length is zero, or if an interval extends past `u32::MAX`.
    pub fn from_markers(markers: &[u32]) -> Result<IntervalSet> {
        if markers.is_empty() {
            return Err(Error::invalid_arg(
                "markers",
                "annotation markers cannot be empty",
            ));
        }
        if markers.len() % 2 != 0 {
            return Err(Error::invalid_arg(
                "markers",
                format!("expected even number of integers, got {}", markers.len()),
            ));
        }

        Self::from_intervals(
            markers
                .chunks_exact(2)
                .map(|pair| Interval::new(pair[0], pair[1])),
        )
    }

    /// Builds a normalized set from already paired intervals.
    pub fn from_intervals(intervals: impl IntoIterator<Item = Interval>) -> Result<IntervalSet> {
        let intervals = intervals
            .into_iter()
            .map(|i| validate(i.start, i.len))
            .collect::<Result<Vec<_>>>()?;
        if intervals.is_empty() {
            return Err(Error::invalid_arg(
                "intervals",
                "annotation intervals cannot be empty",
            ));
        }
        Ok(Self::normalize(intervals))
    }

    fn normalize(mut intervals: Vec<Interval>) -> IntervalSet {
        let input_len = intervals.len();
        intervals.sort_unstable_by_key(|i| (i.start, Reverse(i.len)));

        let mut kept: Vec<Interval> = Vec::with_capacity(intervals.len());
        let mut max_end: Option<u32> = None;
        for interval in intervals {
            if max_end.is_some_and(|end| interval.end() <= end) {
                log::trace!("dropping covered interval {interval:?}");
                continue;
            }
            max_end = Some(interval.end());
            kept.push(interval);
        }

        log::debug!(
            "normalized {input_len} annotation intervals into {}",
            kept.len()
        );
        IntervalSet {
            intervals: kept.into_boxed_slice(),
        }
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn get(&self, index: usize) -> Option<Interval> {
        self.intervals.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Whether any interval contains `position`.
    pub fn contains(&self, position: u32) -> bool {
        // Ends are strictly increasing after normalization.
        let idx = self.intervals.partition_point(|i| i.end() < position);
        self.intervals
            .get(idx)
            .is_some_and(|i| i.contains(position))
    }

    /// The flat `[start, len, ...]` representation of the normalized set.
    pub fn to_markers(&self) -> Vec<u32> {
        self.intervals
            .iter()
            .flat_map(|i| [i.start, i.len])
            .collect()
    }
}

fn validate(start: u32, len: u32) -> Result<Interval> {
    if len == 0 {
        return Err(Error::invalid_arg(
            "markers",
            format!("annotation at position {start} has zero length"),
        ));
    }
    if start.checked_add(len - 1).is_none() {
        return Err(Error::invalid_arg(
            "markers",
            format!("annotation at position {start} with length {len} overflows"),
        ));
    }
    Ok(Interval::new(start, len))
}
