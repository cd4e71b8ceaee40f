//! The generation pipeline: read, parse, import, generate, emit
//!
//! One sequential pass. Any failure aborts the run; files already
//! emitted stay on disk (no rollback).

use crate::error::{Error, Result};
use pkgdocs_schema::{import_spec, PackageSpec};
use pkgdocs_templates::generate_package;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Name stamped into every generated page.
pub const TOOL_NAME: &str = "Pkgdocs Templates Generator";

/// Run the whole pipeline for one schema file.
#[instrument(skip_all, fields(schema = %schema_file.display(), out = %out_dir.display()))]
pub fn handle_generate(out_dir: &Path, schema_file: &Path) -> Result<()> {
    if !schema_file.exists() {
        return Err(Error::FileNotFound {
            path: schema_file.to_path_buf(),
        });
    }

    debug!("reading schema file");
    let contents = fs::read_to_string(schema_file)?;
    debug!(bytes = contents.len(), "schema file read");

    let spec: PackageSpec = serde_json::from_str(&contents)?;
    info!(package = %spec.name, "importing package spec");
    let package = import_spec(spec)?;

    info!(
        resources = package.resources.len(),
        functions = package.functions.len(),
        types = package.types.len(),
        "generating documentation templates"
    );
    let files = generate_package(TOOL_NAME, &package)?;

    for (rel_path, contents) in &files {
        emit_file(out_dir, rel_path, contents)?;
    }
    info!(files = files.len(), "generation complete");

    Ok(())
}

/// Write one generated file under the output directory, creating
/// intermediate directories as needed. Existing files are truncated.
fn emit_file(out_dir: &Path, rel_path: &str, contents: &[u8]) -> Result<()> {
    let path = out_dir.join(rel_path);
    if let Some(parent) = path.parent() {
        ensure_dir(parent).map_err(|source| Error::Emit {
            path: rel_path.to_string(),
            source,
        })?;
    }

    debug!(path = %path.display(), bytes = contents.len(), "emitting file");
    let mut file = fs::File::create(&path).map_err(|source| Error::Emit {
        path: rel_path.to_string(),
        source,
    })?;
    file.write_all(contents).map_err(|source| Error::Emit {
        path: rel_path.to_string(),
        source,
    })?;
    // Close errors are ignored; the handle drops here.
    Ok(())
}

/// Idempotent recursive directory creation.
fn ensure_dir(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)
}
