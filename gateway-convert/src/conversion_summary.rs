use decl_file::Content;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub services: usize,
    pub service_packages: usize,
    pub versions: usize,
    pub passthrough: usize,
}

pub fn summarize(root: &Content) -> ConversionSummary {
    ConversionSummary {
        services: root.services.len(),
        service_packages: root.service_packages.len(),
        versions: count_versions(root),
        passthrough: count_passthrough(root),
    }
}

pub fn render(summary: ConversionSummary) -> String {
    format!(
        "convert_summary services={} service_packages={} versions={} passthrough={}",
        summary.services, summary.service_packages, summary.versions, summary.passthrough
    )
}

fn count_versions(root: &Content) -> usize {
    root.service_packages.iter().map(|p| p.versions.len()).sum()
}

// Top-level collections carried through untouched; metadata keys (`_...`) excluded.
fn count_passthrough(root: &Content) -> usize {
    root.extra
        .keys()
        .filter(|k| !k.as_str().is_some_and(|k| k.starts_with('_')))
        .count()
}
