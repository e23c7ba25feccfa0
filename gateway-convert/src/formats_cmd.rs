use anyhow::Result;
use gateway_convert::format::Format;
use gateway_convert::registry::conversions;
use serde::Serialize;

use crate::cli::{FormatsArgs, OutputFormat};

#[derive(Debug, Serialize)]
struct FormatsReport {
    formats: Vec<Format>,
    conversions: Vec<ConversionPair>,
}

#[derive(Debug, Serialize)]
struct ConversionPair {
    from: Format,
    to: Format,
}

pub fn run_formats(args: FormatsArgs) -> Result<()> {
    let report = FormatsReport {
        formats: Format::ALL.to_vec(),
        conversions: conversions()
            .iter()
            .map(|c| ConversionPair {
                from: c.from,
                to: c.to,
            })
            .collect(),
    };

    match args.format {
        OutputFormat::Text => println!("{}", render_formats_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn render_formats_text(report: &FormatsReport) -> String {
    let mut lines = vec![format!(
        "formats: {}",
        report
            .formats
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    )];
    lines.push("conversions:".to_string());
    for pair in &report.conversions {
        lines.push(format!("- {} -> {}", pair.from, pair.to));
    }
    lines.join("\n")
}
