//! Bound package model produced by the importer
//!
//! Where the wire types in [`crate::spec`] are whatever the schema file
//! says, the model types here are what the rest of the system consumes:
//! tokens are parsed, references resolve, required flags are folded
//! into the properties they name, and member maps are ordered.
//!
//! Copyright (c) 2025 Pkgdocs Team
//! Licensed under the MIT or Apache-2.0 license

use crate::version::Version;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// A parsed member token, `pkg:module:Member`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Token {
    pub package: String,
    pub module_path: String,
    pub member: String,
}

impl Token {
    /// The display module: the module path up to the first `/`.
    ///
    /// Schema producers commonly write `s3/bucket` as the module path
    /// of `aws:s3/bucket:Bucket`; pages group under `s3`.
    pub fn module(&self) -> &str {
        match self.module_path.split_once('/') {
            Some((head, _)) => head,
            None => &self.module_path,
        }
    }

    /// Whether the member lives in the root (`index`) module.
    pub fn is_index(&self) -> bool {
        self.module() == "index" || self.module().is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.package, self.module_path, self.member)
    }
}

/// The bound shape of a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Type {
    Bool,
    Int,
    Number,
    String,
    /// A list with a typed element.
    Array(Box<Type>),
    /// A string-keyed map with a typed value.
    Map(Box<Type>),
    /// A free-form object (no declared value shape).
    Object,
    /// A reference to a declared complex type.
    Named(Token),
}

impl Type {
    /// Human-readable type label used in generated property tables.
    pub fn label(&self) -> String {
        match self {
            Type::Bool => "bool".to_string(),
            Type::Int => "int".to_string(),
            Type::Number => "number".to_string(),
            Type::String => "string".to_string(),
            Type::Array(element) => format!("list<{}>", element.label()),
            Type::Map(value) => format!("map<{}>", value.label()),
            Type::Object => "map<any>".to_string(),
            Type::Named(token) => token.member.clone(),
        }
    }

    /// The named type this shape leads to, if any, looking through
    /// collections.
    pub fn named_token(&self) -> Option<&Token> {
        match self {
            Type::Named(token) => Some(token),
            Type::Array(inner) | Type::Map(inner) => inner.named_token(),
            _ => None,
        }
    }
}

/// A bound property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub description: Option<String>,
    pub typ: Type,
    pub required: bool,
    pub secret: bool,
    pub const_value: Option<Value>,
    pub default_value: Option<Value>,
    pub deprecation_message: Option<String>,
}

/// A bound resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub token: Token,
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
    pub is_component: bool,
    pub inputs: Vec<Property>,
    pub outputs: Vec<Property>,
    pub state_inputs: Vec<Property>,
}

/// A bound function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub token: Token,
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
    pub inputs: Vec<Property>,
    pub outputs: Vec<Property>,
}

/// The two kinds of declared complex type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeKind {
    Object(Vec<Property>),
    Enum(Vec<EnumValue>),
}

/// A bound complex type declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexType {
    pub token: Token,
    pub description: Option<String>,
    pub kind: TypeKind,
}

/// A bound enum member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub value: Value,
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
}

/// The validated package model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub version: Option<Version>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub homepage: Option<String>,
    pub license: Option<String>,
    pub repository: Option<String>,
    pub publisher: Option<String>,
    pub plugin_download_url: Option<String>,
    pub module_format: Option<String>,
    /// Provider configuration variables, required flags folded in.
    pub config: Vec<Property>,
    pub provider: Option<Resource>,
    /// Members keyed by their original token string, in token order.
    pub types: BTreeMap<String, ComplexType>,
    pub resources: BTreeMap<String, Resource>,
    pub functions: BTreeMap<String, Function>,
}

impl Package {
    /// Look up a declared complex type by token string.
    pub fn type_by_token(&self, token: &str) -> Option<&ComplexType> {
        self.types.get(token)
    }

    /// Display version, `""` when the spec carried none.
    pub fn version_label(&self) -> String {
        self.version
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_default()
    }
}
