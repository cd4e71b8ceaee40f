//! Import error types with property-path context
//!
//! Copyright (c) 2025 Pkgdocs Team
//! Licensed under the MIT or Apache-2.0 license

use crate::version::VersionError;
use thiserror::Error;

/// Result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;

/// Errors raised while validating and binding a package specification.
///
/// Each variant carries the path of the offending element in the spec
/// document (e.g. `resources["aws:s3:Bucket"].inputProperties["acl"]`)
/// so that a diagnostic points at the schema, not at importer internals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// The package name is missing or empty.
    #[error("package name must be a non-empty string")]
    EmptyName,

    /// The package version is present but not valid semver.
    #[error("invalid package version {version:?}: {source}")]
    InvalidVersion {
        version: String,
        #[source]
        source: VersionError,
    },

    /// A member key is not a well-formed `pkg:module:Member` token.
    #[error("malformed token {token:?} at '{path}': {reason}")]
    MalformedToken {
        token: String,
        path: String,
        reason: String,
    },

    /// A `$ref` does not use the `#/types/<token>` form.
    #[error("malformed type reference {reference:?} at '{path}'")]
    MalformedReference { reference: String, path: String },

    /// A `$ref` points at a type the spec does not declare.
    #[error("unresolved type reference {reference:?} at '{path}'")]
    UnresolvedReference { reference: String, path: String },

    /// A type spec is self-contradictory (e.g. both `type` and `$ref`,
    /// or an enum declaration that also has object properties).
    #[error("conflicting type shape at '{path}': {reason}")]
    ConflictingShape { path: String, reason: String },

    /// A type spec gives neither a primitive `type` nor a `$ref`.
    #[error("missing type at '{path}': property declares neither \"type\" nor \"$ref\"")]
    MissingType { path: String },

    /// An `array` type spec without an `items` shape.
    #[error("array type at '{path}' is missing \"items\"")]
    MissingItems { path: String },

    /// A name in a `required` list that no declared property matches.
    #[error("required name {name:?} at '{path}' does not match any declared property")]
    UnknownRequired { name: String, path: String },
}

impl ImportError {
    /// The spec-document path the error refers to, when it has one.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::EmptyName | Self::InvalidVersion { .. } => None,
            Self::MalformedToken { path, .. }
            | Self::MalformedReference { path, .. }
            | Self::UnresolvedReference { path, .. }
            | Self::ConflictingShape { path, .. }
            | Self::MissingType { path }
            | Self::MissingItems { path }
            | Self::UnknownRequired { path, .. } => Some(path),
        }
    }
}
