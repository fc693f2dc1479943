//! Command implementations for annotext-cmd

use std::fs::File;
use std::io::{self, BufReader, Write};

use annotext_analysis::{Analysis, TokenStream, Tokenizer};
use anyhow::{Context, Result, bail};
use clap::Args;
use serde::Serialize;

use crate::config::PipelineConfig;

pub mod annotate;
pub mod tag;
pub mod tokenize;

/// Input and tokenization options shared by all commands.
#[derive(Args, Debug, Default)]
pub struct PipelineArgs {
    /// Text to analyze
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// File to read the text from ("-" for stdin)
    #[arg(short, long)]
    pub file: Option<String>,

    /// JSON pipeline configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Tokenizer name: whitespace or unicode-word
    #[arg(long)]
    pub tokenizer: Option<String>,

    /// Stop words to remove before annotation (comma-separated)
    #[arg(long = "stop", value_delimiter = ',')]
    pub stop_words: Vec<String>,

    /// Match stop words case-insensitively
    #[arg(long)]
    pub ignore_case: bool,

    /// Print JSON lines instead of a table
    #[arg(long)]
    pub json: bool,
}

impl PipelineArgs {
    /// Loads the config file and applies the command-line overrides.
    pub fn resolve_config(&self) -> Result<PipelineConfig> {
        let mut config = PipelineConfig::load_or_default(self.config.as_deref())?;
        if let Some(tokenizer) = &self.tokenizer {
            config.tokenizer = Some(tokenizer.clone());
        }
        if !self.stop_words.is_empty() {
            config.stop_words = self.stop_words.clone();
        }
        config.ignore_case |= self.ignore_case;
        Ok(config)
    }

    /// Builds the tokenizer over the command input, followed by the optional
    /// stop word filter.
    pub fn source(&self, config: &PipelineConfig) -> Result<Box<dyn TokenStream>> {
        let mut tokenizer = config.create_tokenizer()?;
        match (&self.text, self.file.as_deref()) {
            (Some(text), _) => tokenizer.set_input(text.as_str()),
            (None, Some("-")) => tokenizer
                .set_reader(io::stdin().lock())
                .context("Failed to read text from stdin")?,
            (None, Some(path)) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open input file: {path}"))?;
                tokenizer
                    .set_reader(BufReader::new(file))
                    .with_context(|| format!("Failed to read input file: {path}"))?;
            }
            (None, None) => bail!("Either --text or --file must be specified"),
        }
        log::debug!("tokenizer: {}", tokenizer.name());

        Ok(match config.stop_words() {
            Some(stop) => Box::new(stop.filter(tokenizer)),
            None => Box::new(tokenizer),
        })
    }
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    term: &'a str,
    position: u32,
    start: usize,
    end: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<Vec<u32>>,
}

#[derive(Serialize)]
struct EndRecord {
    final_position: Option<u32>,
    final_offset: usize,
}

/// Writes the analysis either as an aligned table or as JSON lines.
pub fn write_analysis(out: &mut impl Write, analysis: &Analysis, json: bool) -> Result<()> {
    if !json {
        writeln!(out, "{:>5}  {:<24} {:>7} {:>7}  payload", "pos", "term", "start", "end")?;
    }
    for t in &analysis.tokens {
        let payload = t
            .token
            .payload
            .as_ref()
            .map(|p| p.read_vints())
            .transpose()
            .with_context(|| format!("Invalid payload on token '{}'", t.token.term))?;
        if json {
            let record = TokenRecord {
                term: &t.token.term,
                position: t.position,
                start: t.token.start_offset,
                end: t.token.end_offset,
                payload,
            };
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        } else {
            let payload = payload.map(|p| format!("{p:?}")).unwrap_or_default();
            writeln!(
                out,
                "{:>5}  {:<24} {:>7} {:>7}  {}",
                t.position, t.token.term, t.token.start_offset, t.token.end_offset, payload
            )?;
        }
    }

    let end = EndRecord {
        final_position: analysis.final_position(),
        final_offset: analysis.end.final_offset,
    };
    if json {
        writeln!(out, "{}", serde_json::to_string(&end)?)?;
    } else {
        let final_position = end
            .final_position
            .map_or_else(|| "-".to_string(), |p| p.to_string());
        writeln!(
            out,
            "{} tokens, final position {}, final offset {}",
            analysis.tokens.len(),
            final_position,
            end.final_offset
        )?;
    }
    Ok(())
}

/// Analyzes `stream` and prints the result to stdout.
pub fn print_stream(stream: &mut dyn TokenStream, json: bool) -> Result<()> {
    let analysis = annotext_analysis::analyze(stream).context("Token stream failed")?;
    let mut out = io::stdout().lock();
    write_analysis(&mut out, &analysis, json)
}
