//! Annotation-aware text analysis.
//!
//! This crate turns text into streams of positioned tokens and filters those
//! streams against annotations: contiguous runs of token positions marked by
//! the caller, or terms recognized by an annotator.
//!
//! # Overview
//!
//! Analysis is a chain of pull-based [`TokenStream`]s:
//!
//! 1. A [`Tokenizer`] splits the input text into tokens. Each token carries a
//!    position increment (distance from the previous token) and byte offsets.
//! 2. Token filters wrap the tokenizer (or each other). Filters that drop
//!    tokens fold the dropped positions into the next token, so absolute
//!    positions survive the whole chain.
//! 3. The consumer drives the chain with `reset`, `next_token` and `end`, or
//!    collects it with [`analyze`].
//!
//! The central filter is [`AnnotatedIntervalFilter`]: given `(start, length)`
//! pairs, it keeps only tokens inside those intervals and emits a synthetic
//! [`ANY_ANNOTATION_TERM`] token at the start of each interval, with the
//! interval length stored in its [`Payload`].
//!
//! # Quick Start
//!
//! ```rust
//! use annotext_analysis::{
//!     ANY_ANNOTATION_TERM, AnnotatedIntervalFilter, Tokenizer, WhitespaceTokenizer, analyze,
//! };
//!
//! let mut tokenizer = WhitespaceTokenizer::new();
//! tokenizer.set_input("one two three");
//!
//! // Annotations at position 0 (length 1) and position 2 (length 1).
//! let mut filter = AnnotatedIntervalFilter::new(tokenizer, &[0, 1, 2, 1]).unwrap();
//! let analysis = analyze(&mut filter).unwrap();
//!
//! assert_eq!(
//!     analysis.terms(),
//!     vec![ANY_ANNOTATION_TERM, "one", ANY_ANNOTATION_TERM, "three"]
//! );
//! ```

pub mod annotations;
pub mod annotators;
pub mod filters;
pub mod payload;
pub mod replay;
pub mod stream;
pub mod token;
pub mod tokenizers;

pub use annotations::{
    ANY_ANNOTATION_TERM, AnnotatedIntervalFilter, AnnotatingTokenFilter, AnnotatorPredicate,
    AnnotatorTokenFilter, AnyAnnotationFilter, Interval, IntervalSet, SimpleIntervalFilter,
};
pub use annotators::{AnimalAnnotator, Annotator, ColorAnnotator, OneWordAnnotator};
pub use filters::{FilteringTokenFilter, StopFilter, StopWords, TokenPredicate};
pub use payload::Payload;
pub use replay::ReplayTokenStream;
pub use stream::{
    Analysis, EmptyTokenStream, PositionedToken, TokenStream, TokenStreamExt, analyze,
};
pub use token::{StreamEnd, Token};
pub use tokenizers::{
    Tokenizer, TokenizerKind, TokenizerType, UnicodeWordTokenizer, WhitespaceTokenizer,
    create_tokenizer, create_tokenizer_with_lengths,
};
