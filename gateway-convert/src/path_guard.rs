use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use decl_file::STDIO_PATH;

/// Refuse to write the converted document over one of its own inputs.
///
/// `-` never collides with anything. Paths are compared after resolving
/// symlinks and `..`.
pub fn ensure_output_not_same(output: &Path, inputs: &[&Path]) -> Result<()> {
    if is_stdio(output) {
        return Ok(());
    }
    let target = resolve(output)
        .with_context(|| format!("failed to resolve output path {}", output.display()))?;

    for &input in inputs {
        if is_stdio(input) {
            continue;
        }
        let source = resolve(input)
            .with_context(|| format!("failed to resolve input path {}", input.display()))?;
        if source == target {
            bail!(
                "refusing to overwrite source file: output {} matches input {}",
                output.display(),
                input.display()
            );
        }
    }
    Ok(())
}

fn is_stdio(path: &Path) -> bool {
    path == Path::new(STDIO_PATH)
}

// An output file usually does not exist yet; its parent directory does.
fn resolve(path: &Path) -> io::Result<PathBuf> {
    if path.exists() {
        return path.canonicalize();
    }
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    match path.file_name() {
        Some(name) if parent.exists() => Ok(parent.canonicalize()?.join(name)),
        _ => Ok(std::env::current_dir()?.join(path)),
    }
}
