//! Pkgdocs Templates - documentation-template generation
//!
//! Turns a bound [`pkgdocs_schema::Package`] into a deterministic tree
//! of markdown documentation templates: a package front page, an
//! installation/configuration page, and one page per resource and
//! function, grouped by module. The result is a mapping from relative
//! output path to file bytes; callers decide where (and whether) the
//! tree lands on disk.
//!
//! ```rust
//! use pkgdocs_schema::{import_spec, PackageSpec};
//! use pkgdocs_templates::generate_package;
//!
//! let spec: PackageSpec = serde_json::from_str(r#"{ "name": "acme" }"#).unwrap();
//! let package = import_spec(spec).unwrap();
//! let files = generate_package("Pkgdocs Templates Generator", &package).unwrap();
//! assert!(files.contains_key("_index.md"));
//! ```
//!
//! Copyright (c) 2025 Pkgdocs Team
//! Licensed under the MIT or Apache-2.0 license

pub mod generator;
pub mod templates;

pub use generator::{generate_package, GenerateError, GenerateResult, Generator, GeneratorConfig};
pub use templates::Template;
