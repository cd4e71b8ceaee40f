//! Pkgdocs Schema - package specification types and importer
//!
//! This crate owns the wire format for package specifications and the
//! import step that turns a raw, loosely-validated specification into a
//! bound [`Package`] model:
//!
//! - **Wire types** ([`spec`]): serde structs mirroring the JSON schema
//!   format. Deserialization is permissive - unknown fields are
//!   tolerated, everything optional defaults.
//! - **Import** ([`import`]): semantic validation (non-empty package
//!   name, semver versions, well-formed member tokens, resolvable type
//!   references) and binding into typed [`Package`] members.
//!
//! ## Quick Start
//!
//! ```rust
//! use pkgdocs_schema::{import_spec, PackageSpec};
//!
//! let raw = r#"{
//!     "name": "acme",
//!     "version": "1.2.0",
//!     "resources": {
//!         "acme:index:Widget": {
//!             "description": "A widget.",
//!             "inputProperties": { "size": { "type": "integer" } },
//!             "requiredInputs": ["size"]
//!         }
//!     }
//! }"#;
//!
//! let spec: PackageSpec = serde_json::from_str(raw).unwrap();
//! let package = import_spec(spec).unwrap();
//! assert_eq!(package.name, "acme");
//! ```
//!
//! Copyright (c) 2025 Pkgdocs Team
//! Licensed under the MIT or Apache-2.0 license

pub mod error;
pub mod import;
pub mod model;
pub mod spec;
pub mod version;

pub use error::{ImportError, ImportResult};
pub use import::import_spec;
pub use model::{
    ComplexType, EnumValue, Function, Package, Property, Resource, Token, Type, TypeKind,
};
pub use spec::{
    ComplexTypeSpec, ConfigSpec, EnumValueSpec, FunctionSpec, MetadataSpec, ObjectTypeSpec,
    PackageSpec, PropertySpec, ResourceSpec, TypeSpec,
};
pub use version::{Version, VersionError};
