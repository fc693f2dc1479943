//! Tag command implementation

use annotext_analysis::{
    AnimalAnnotator, AnnotatingTokenFilter, Annotator, AnyAnnotationFilter, ColorAnnotator,
    OneWordAnnotator, TokenStream,
};
use anyhow::{Result, bail};

use crate::commands::{PipelineArgs, print_stream};

pub fn run(
    args: PipelineArgs,
    annotator: Option<String>,
    words: Vec<String>,
    term: Option<String>,
    any: bool,
) -> Result<()> {
    let config = args.resolve_config()?;
    let annotator = annotator.or_else(|| config.annotator.clone());
    let words = if words.is_empty() {
        config.words.clone()
    } else {
        words
    };

    let custom;
    let (annotator, default_term): (&dyn Annotator, &str) = if !words.is_empty() {
        custom = OneWordAnnotator::new(&words);
        (&custom as &dyn Annotator, "word")
    } else {
        match annotator.as_deref().unwrap_or("colors") {
            "colors" => (ColorAnnotator::with_default_colors() as &dyn Annotator, "color"),
            "animals" => (AnimalAnnotator::with_default_animals() as &dyn Annotator, "animal"),
            other => bail!("Unknown annotator: {other} (expected 'colors' or 'animals')"),
        }
    };
    let term = term.unwrap_or_else(|| default_term.to_string());
    log::info!("tagging tokens as '{term}'");

    let source = args.source(&config)?;
    let mut stream: Box<dyn TokenStream + '_> =
        Box::new(AnnotatingTokenFilter::new(source, annotator, term));
    if any {
        stream = Box::new(AnyAnnotationFilter::new(stream));
    }
    print_stream(&mut stream, args.json)
}
