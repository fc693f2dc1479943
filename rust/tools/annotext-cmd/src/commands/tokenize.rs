//! Tokenize command implementation

use anyhow::Result;

use crate::commands::{PipelineArgs, print_stream};

pub fn run(args: PipelineArgs) -> Result<()> {
    let config = args.resolve_config()?;
    let mut source = args.source(&config)?;
    print_stream(&mut source, args.json)
}
