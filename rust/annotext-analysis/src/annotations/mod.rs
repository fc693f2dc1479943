//! Annotation-aware token filters.
//!
//! - [`AnnotatedIntervalFilter`]: keeps tokens inside caller-supplied
//!   `(start, length)` intervals and marks each interval start with an
//!   [`ANY_ANNOTATION_TERM`] token carrying the interval length.
//! - [`SimpleIntervalFilter`]: the same position filtering, without markers.
//! - [`AnyAnnotationFilter`]: stacks an [`ANY_ANNOTATION_TERM`] token on every
//!   input token.
//! - [`AnnotatingTokenFilter`] and [`AnnotatorTokenFilter`]: annotation driven
//!   by an [`Annotator`](crate::annotators::Annotator) instead of intervals.

pub mod annotating;
pub mod any;
mod cursor;
pub mod filter;
pub mod intervals;
pub mod simple;

pub use annotating::{AnnotatingTokenFilter, AnnotatorPredicate, AnnotatorTokenFilter};
pub use any::AnyAnnotationFilter;
pub use filter::AnnotatedIntervalFilter;
pub use intervals::{Interval, IntervalSet};
pub use simple::{IntervalPredicate, SimpleIntervalFilter};

/// Term of the synthetic tokens marking annotations.
pub const ANY_ANNOTATION_TERM: &str = "_any_";
