//! Importing: validating a raw spec and binding it into a package model
//!
//! The importer is the only place semantic rules live. It walks the
//! wire types, checks each rule with the path of the element under
//! inspection, and builds the bound [`Package`]. Rules:
//!
//! - the package name is non-empty; the version, if present, is semver
//! - member keys are well-formed `pkg:module:Member` tokens
//! - `$ref`s use `#/types/<token>` and resolve to declared types
//! - a type spec carries `type` or `$ref`, not both and not neither
//! - `array` specs carry `items`; enum declarations carry no properties
//! - `required` lists only name declared properties
//!
//! Copyright (c) 2025 Pkgdocs Team
//! Licensed under the MIT or Apache-2.0 license

use crate::error::{ImportError, ImportResult};
use crate::model::{
    ComplexType, EnumValue, Function, Package, Property, Resource, Token, Type, TypeKind,
};
use crate::spec::{
    ComplexTypeSpec, FunctionSpec, ObjectTypeSpec, PackageSpec, PropertySpec, ResourceSpec,
    TypeSpec,
};
use crate::version::Version;
use std::collections::BTreeMap;

/// Reference prefix for declared complex types.
const TYPES_REF_PREFIX: &str = "#/types/";

/// Validate a raw package specification and bind it into a [`Package`].
pub fn import_spec(spec: PackageSpec) -> ImportResult<Package> {
    Importer::new(&spec).import()
}

/// Single-pass binder over one spec document.
struct Importer<'a> {
    spec: &'a PackageSpec,
}

impl<'a> Importer<'a> {
    fn new(spec: &'a PackageSpec) -> Self {
        Self { spec }
    }

    fn import(&self) -> ImportResult<Package> {
        if self.spec.name.trim().is_empty() {
            return Err(ImportError::EmptyName);
        }

        let version = match &self.spec.version {
            Some(raw) => Some(Version::parse(raw).map_err(|source| {
                ImportError::InvalidVersion {
                    version: raw.clone(),
                    source,
                }
            })?),
            None => None,
        };

        let config = self.bind_members(
            &self.spec.config.variables,
            &self.spec.config.required,
            "config.variables",
        )?;

        let mut types = BTreeMap::new();
        for (raw_token, type_spec) in &self.spec.types {
            let path = format!("types[{:?}]", raw_token);
            let token = self.parse_token(raw_token, &path)?;
            types.insert(raw_token.clone(), self.bind_complex_type(token, type_spec, &path)?);
        }

        let provider = match &self.spec.provider {
            Some(resource_spec) => {
                // The provider resource has no key of its own; it binds
                // under a synthesized index token.
                let token = Token {
                    package: self.spec.name.clone(),
                    module_path: "index".to_string(),
                    member: "Provider".to_string(),
                };
                Some(self.bind_resource(token, resource_spec, "provider")?)
            }
            None => None,
        };

        let mut resources = BTreeMap::new();
        for (raw_token, resource_spec) in &self.spec.resources {
            let path = format!("resources[{:?}]", raw_token);
            let token = self.parse_token(raw_token, &path)?;
            resources.insert(
                raw_token.clone(),
                self.bind_resource(token, resource_spec, &path)?,
            );
        }

        let mut functions = BTreeMap::new();
        for (raw_token, function_spec) in &self.spec.functions {
            let path = format!("functions[{:?}]", raw_token);
            let token = self.parse_token(raw_token, &path)?;
            functions.insert(
                raw_token.clone(),
                self.bind_function(token, function_spec, &path)?,
            );
        }

        Ok(Package {
            name: self.spec.name.clone(),
            version,
            description: self.spec.description.clone(),
            keywords: self.spec.keywords.clone(),
            homepage: self.spec.homepage.clone(),
            license: self.spec.license.clone(),
            repository: self.spec.repository.clone(),
            publisher: self.spec.publisher.clone(),
            plugin_download_url: self.spec.plugin_download_url.clone(),
            module_format: self
                .spec
                .meta
                .as_ref()
                .and_then(|meta| meta.module_format.clone()),
            config,
            provider,
            types,
            resources,
            functions,
        })
    }

    /// Parse a `pkg:module:Member` token.
    fn parse_token(&self, raw: &str, path: &str) -> ImportResult<Token> {
        let malformed = |reason: &str| ImportError::MalformedToken {
            token: raw.to_string(),
            path: path.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = raw.split(':').collect();
        if parts.len() != 3 {
            return Err(malformed("expected pkg:module:Member"));
        }
        if parts.iter().any(|part| part.is_empty()) {
            return Err(malformed("empty token segment"));
        }

        Ok(Token {
            package: parts[0].to_string(),
            module_path: parts[1].to_string(),
            member: parts[2].to_string(),
        })
    }

    /// Bind a type spec to a model [`Type`].
    fn bind_type(&self, type_spec: &TypeSpec, path: &str) -> ImportResult<Type> {
        if let Some(reference) = &type_spec.reference {
            if type_spec.type_name.is_some() {
                return Err(ImportError::ConflictingShape {
                    path: path.to_string(),
                    reason: "both \"type\" and \"$ref\" are given".to_string(),
                });
            }
            return self.resolve_reference(reference, path);
        }

        match type_spec.type_name.as_deref() {
            None => Err(ImportError::MissingType {
                path: path.to_string(),
            }),
            Some("boolean") => Ok(Type::Bool),
            Some("integer") => Ok(Type::Int),
            Some("number") => Ok(Type::Number),
            Some("string") => Ok(Type::String),
            Some("array") => {
                let items = type_spec.items.as_deref().ok_or(ImportError::MissingItems {
                    path: path.to_string(),
                })?;
                let element = self.bind_type(items, &format!("{}.items", path))?;
                Ok(Type::Array(Box::new(element)))
            }
            Some("object") => match type_spec.additional_properties.as_deref() {
                Some(value_spec) => {
                    let value =
                        self.bind_type(value_spec, &format!("{}.additionalProperties", path))?;
                    Ok(Type::Map(Box::new(value)))
                }
                None => Ok(Type::Object),
            },
            Some(other) => Err(ImportError::ConflictingShape {
                path: path.to_string(),
                reason: format!("unknown type name {:?}", other),
            }),
        }
    }

    /// Resolve a `#/types/<token>` reference against the declared types.
    fn resolve_reference(&self, reference: &str, path: &str) -> ImportResult<Type> {
        let raw_token = reference.strip_prefix(TYPES_REF_PREFIX).ok_or_else(|| {
            ImportError::MalformedReference {
                reference: reference.to_string(),
                path: path.to_string(),
            }
        })?;

        if !self.spec.types.contains_key(raw_token) {
            return Err(ImportError::UnresolvedReference {
                reference: reference.to_string(),
                path: path.to_string(),
            });
        }

        let token = self.parse_token(raw_token, path)?;
        Ok(Type::Named(token))
    }

    /// Bind a property map plus its `required` list.
    fn bind_members(
        &self,
        properties: &BTreeMap<String, PropertySpec>,
        required: &[String],
        path: &str,
    ) -> ImportResult<Vec<Property>> {
        for name in required {
            if !properties.contains_key(name) {
                return Err(ImportError::UnknownRequired {
                    name: name.clone(),
                    path: format!("{}.required", path),
                });
            }
        }

        let mut bound = Vec::with_capacity(properties.len());
        for (name, property_spec) in properties {
            let property_path = format!("{}[{:?}]", path, name);
            let typ = self.bind_type(&property_spec.type_spec, &property_path)?;
            bound.push(Property {
                name: name.clone(),
                description: property_spec.description.clone(),
                typ,
                required: required.iter().any(|r| r == name),
                secret: property_spec.secret,
                const_value: property_spec.const_value.clone(),
                default_value: property_spec.default.clone(),
                deprecation_message: property_spec.deprecation_message.clone(),
            });
        }
        Ok(bound)
    }

    fn bind_object(
        &self,
        object: &ObjectTypeSpec,
        path: &str,
    ) -> ImportResult<Vec<Property>> {
        self.bind_members(&object.properties, &object.required, path)
    }

    fn bind_resource(
        &self,
        token: Token,
        spec: &ResourceSpec,
        path: &str,
    ) -> ImportResult<Resource> {
        let inputs = self.bind_members(
            &spec.input_properties,
            &spec.required_inputs,
            &format!("{}.inputProperties", path),
        )?;
        let outputs =
            self.bind_members(&spec.properties, &spec.required, &format!("{}.properties", path))?;
        let state_inputs = match &spec.state_inputs {
            Some(object) => self.bind_object(object, &format!("{}.stateInputs.properties", path))?,
            None => Vec::new(),
        };

        Ok(Resource {
            token,
            description: spec.description.clone(),
            deprecation_message: spec.deprecation_message.clone(),
            is_component: spec.is_component,
            inputs,
            outputs,
            state_inputs,
        })
    }

    fn bind_function(
        &self,
        token: Token,
        spec: &FunctionSpec,
        path: &str,
    ) -> ImportResult<Function> {
        let inputs = match &spec.inputs {
            Some(object) => self.bind_object(object, &format!("{}.inputs.properties", path))?,
            None => Vec::new(),
        };
        let outputs = match &spec.outputs {
            Some(object) => self.bind_object(object, &format!("{}.outputs.properties", path))?,
            None => Vec::new(),
        };

        Ok(Function {
            token,
            description: spec.description.clone(),
            deprecation_message: spec.deprecation_message.clone(),
            inputs,
            outputs,
        })
    }

    fn bind_complex_type(
        &self,
        token: Token,
        spec: &ComplexTypeSpec,
        path: &str,
    ) -> ImportResult<ComplexType> {
        let kind = if spec.is_enum() {
            if !spec.object.properties.is_empty() {
                return Err(ImportError::ConflictingShape {
                    path: path.to_string(),
                    reason: "type declares both enum values and object properties".to_string(),
                });
            }
            match spec.type_name.as_deref() {
                None | Some("string") | Some("integer") | Some("number") | Some("boolean") => {}
                Some(other) => {
                    return Err(ImportError::ConflictingShape {
                        path: path.to_string(),
                        reason: format!("enum over non-scalar type {:?}", other),
                    })
                }
            }

            let mut values = Vec::with_capacity(spec.enum_values.len());
            for (index, value_spec) in spec.enum_values.iter().enumerate() {
                let value_path = format!("{}.enum[{}]", path, index);
                if !matches!(
                    value_spec.value,
                    serde_json::Value::String(_)
                        | serde_json::Value::Number(_)
                        | serde_json::Value::Bool(_)
                ) {
                    return Err(ImportError::ConflictingShape {
                        path: value_path,
                        reason: "enum value must be a scalar".to_string(),
                    });
                }
                let name = match &value_spec.name {
                    Some(name) => name.clone(),
                    None => match &value_spec.value {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    },
                };
                values.push(EnumValue {
                    name,
                    value: value_spec.value.clone(),
                    description: value_spec.description.clone(),
                    deprecation_message: value_spec.deprecation_message.clone(),
                });
            }
            TypeKind::Enum(values)
        } else {
            TypeKind::Object(self.bind_object(&spec.object, &format!("{}.properties", path))?)
        };

        Ok(ComplexType {
            token,
            description: spec.object.description.clone(),
            kind,
        })
    }
}
