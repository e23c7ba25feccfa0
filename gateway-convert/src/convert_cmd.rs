use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use decl_file::{Encoding, STDIO_PATH};
use gateway_convert::config::{load_config, ConvertConfig};
use gateway_convert::conversion_summary::render as render_conversion_summary;
use gateway_convert::convert::convert_files;
use gateway_convert::format::Format;
use tracing::debug;

use crate::cli::ConvertArgs;
use crate::path_guard::ensure_output_not_same;

/// Run the `convert` subcommand.
///
/// Flags win over config-file values. The output path must not be one of
/// the inputs. Prints a one-line summary unless the document itself is
/// going to stdout.
pub fn run_convert(args: ConvertArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ConvertConfig::default(),
    };

    let from = resolve_format("--from", args.from, config.from)?;
    let to = resolve_format("--to", args.to, config.to)?;
    let encoding = args
        .encoding
        .map(Encoding::from)
        .or(config.encoding)
        .unwrap_or_default();

    let inputs: Vec<&Path> = args.inputs.iter().map(|p| p.as_path()).collect();
    ensure_output_not_same(&args.output, &inputs)?;

    debug!(%from, %to, ?encoding, inputs = inputs.len(), "starting conversion");
    let summary = convert_files(&inputs, &args.output, from, to, encoding)
        .with_context(|| format!("failed to convert to {}", args.output.display()))?;

    if args.output != Path::new(STDIO_PATH) {
        println!("{}", render_conversion_summary(summary).cyan());
    }
    Ok(())
}

fn resolve_format(flag: &str, cli: Option<Format>, config: Option<Format>) -> Result<Format> {
    cli.or(config).with_context(|| {
        format!("missing {flag}; pass it on the command line or set it in --config")
    })
}
