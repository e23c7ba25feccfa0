use std::path::PathBuf;
use std::{fs, path::Path};

use assert_cmd::Command;
use decl_file::parse;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn path_as_str(path: &Path) -> &str {
    path.to_str().expect("path should be valid utf-8")
}

mod basics;
mod config;
mod failures;
