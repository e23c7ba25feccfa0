use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use decl_file::Encoding;
use gateway_convert::format::Format;

#[derive(Parser, Debug)]
#[command(name = "gateway-convert")]
#[command(about = "Convert declarative gateway configuration between formats")]
pub struct Cli {
    /// Enable debug logging on stderr (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Convert a configuration document from one format to another.
    Convert(ConvertArgs),
    /// List known formats and supported conversions.
    Formats(FormatsArgs),
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Input file(s) forming one document (`-` reads stdin).
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
    /// Output file path (`-` writes stdout).
    #[arg(short, long)]
    pub output: PathBuf,
    /// Source format (gateway).
    #[arg(long, value_parser = Format::parse)]
    pub from: Option<Format>,
    /// Destination format (control-plane).
    #[arg(long, value_parser = Format::parse)]
    pub to: Option<Format>,
    /// Output encoding.
    #[arg(long, value_enum)]
    pub encoding: Option<OutputEncoding>,
    /// Optional TOML file with defaults for --from, --to and --encoding.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct FormatsArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum OutputEncoding {
    Yaml,
    Json,
}

impl From<OutputEncoding> for Encoding {
    fn from(value: OutputEncoding) -> Self {
        match value {
            OutputEncoding::Yaml => Encoding::Yaml,
            OutputEncoding::Json => Encoding::Json,
        }
    }
}
