//! Annotate command implementation

use annotext_analysis::{
    AnnotatedIntervalFilter, AnyAnnotationFilter, IntervalSet, SimpleIntervalFilter, TokenStream,
    annotations::IntervalPredicate,
};
use anyhow::{Context, Result};

use crate::commands::{PipelineArgs, print_stream};
use crate::config::parse_markers;

/// How the annotation stage is applied on top of the token source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotateMode {
    /// Interval filtering with `_any_` marker tokens.
    Markers,
    /// Interval filtering only.
    Simple,
    /// `_any_` token stacked on every token, no intervals.
    Any,
}

pub fn run(args: PipelineArgs, markers: Option<String>, mode: AnnotateMode) -> Result<()> {
    let mut stream = build(&args, markers.as_deref(), mode)?;
    print_stream(&mut stream, args.json)
}

pub fn build(
    args: &PipelineArgs,
    markers: Option<&str>,
    mode: AnnotateMode,
) -> Result<Box<dyn TokenStream>> {
    let config = args.resolve_config()?;
    let source = args.source(&config)?;
    if mode == AnnotateMode::Any {
        return Ok(Box::new(AnyAnnotationFilter::new(source)));
    }

    let markers = match markers {
        Some(markers) => parse_markers(markers)?,
        None => config.markers.clone(),
    };
    let intervals = IntervalSet::from_markers(&markers)
        .with_context(|| format!("Invalid annotation markers: {markers:?}"))?;
    log::info!(
        "annotating with {} interval(s) from {} marker pair(s)",
        intervals.len(),
        markers.len() / 2
    );

    Ok(match mode {
        AnnotateMode::Simple => Box::new(SimpleIntervalFilter::new(
            source,
            IntervalPredicate::new(intervals),
        )),
        _ => Box::new(AnnotatedIntervalFilter::with_intervals(source, intervals)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::{render, text_args};
    use annotext_analysis::{ANY_ANNOTATION_TERM, analyze};

    const TEXT: &str = "quick brown fox and a red dog";

    #[test]
    fn test_marker_mode() {
        let args = text_args(TEXT);
        let mut stream = build(&args, Some("0,3,5,2"), AnnotateMode::Markers).unwrap();
        let analysis = analyze(&mut stream).unwrap();
        assert_eq!(
            analysis.terms(),
            vec![
                ANY_ANNOTATION_TERM,
                "quick",
                "brown",
                "fox",
                ANY_ANNOTATION_TERM,
                "red",
                "dog"
            ]
        );
        assert_eq!(analysis.tokens[4].position, 5);
    }

    #[test]
    fn test_simple_mode() {
        let args = text_args(TEXT);
        let mut stream = build(&args, Some("5,2"), AnnotateMode::Simple).unwrap();
        assert_eq!(analyze(&mut stream).unwrap().terms(), vec!["red", "dog"]);
    }

    #[test]
    fn test_any_mode_ignores_markers() {
        let args = text_args("red fox");
        let mut stream = build(&args, None, AnnotateMode::Any).unwrap();
        assert_eq!(
            analyze(&mut stream).unwrap().terms(),
            vec!["red", ANY_ANNOTATION_TERM, "fox", ANY_ANNOTATION_TERM]
        );
    }

    #[test]
    fn test_markers_from_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipeline.json");
        std::fs::write(&path, r#"{ "markers": [1, 1] }"#).unwrap();

        let mut args = text_args(TEXT);
        args.config = Some(path.to_string_lossy().into_owned());
        args.json = true;
        let out = render(&mut build(&args, None, AnnotateMode::Markers).unwrap(), true);
        let first: serde_json::Value = serde_json::from_str(out.lines().next().unwrap()).unwrap();
        assert_eq!(first["term"], ANY_ANNOTATION_TERM);
        assert_eq!(first["position"], 1);
        assert_eq!(first["payload"], serde_json::json!([1]));
    }

    #[test]
    fn test_invalid_markers() {
        let args = text_args(TEXT);
        assert!(build(&args, None, AnnotateMode::Markers).is_err());
        assert!(build(&args, Some("0,1,2"), AnnotateMode::Markers).is_err());
        assert!(build(&args, Some("0,0"), AnnotateMode::Simple).is_err());
    }
}
