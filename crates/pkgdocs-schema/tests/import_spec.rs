//! End-to-end importer tests over a realistic package specification
//!
//! These exercise the importer the way the CLI does: a full JSON
//! document in, a bound package model (or a path-carrying error) out.

use pkgdocs_schema::{import_spec, ImportError, PackageSpec, Type, TypeKind};
use pretty_assertions::assert_eq;
use serde_json::json;

/// A small but representative spec: metadata, config, a shared type,
/// an enum, two resources across modules, and a function.
fn realistic_spec() -> serde_json::Value {
    json!({
        "name": "acme",
        "version": "0.3.1",
        "description": "The Acme provider.",
        "keywords": ["acme", "category/cloud"],
        "homepage": "https://acme.example.com",
        "license": "Apache-2.0",
        "repository": "https://github.com/acme/provider",
        "publisher": "Acme",
        "meta": { "moduleFormat": "(.*)(?:/[^/]*)" },
        "config": {
            "variables": {
                "apiKey": { "type": "string", "secret": true, "description": "API key." },
                "region": { "type": "string", "default": "us-east-1" }
            },
            "required": ["apiKey"]
        },
        "types": {
            "acme:storage/bucketGrant:BucketGrant": {
                "description": "A grant on a bucket.",
                "properties": {
                    "principal": { "type": "string" },
                    "permissions": {
                        "type": "array",
                        "items": { "$ref": "#/types/acme:storage/permission:Permission" }
                    }
                },
                "required": ["principal"]
            },
            "acme:storage/permission:Permission": {
                "type": "string",
                "enum": [
                    { "name": "Read", "value": "READ" },
                    { "name": "Write", "value": "WRITE", "deprecationMessage": "use FullControl" },
                    { "value": "FULL_CONTROL" }
                ]
            }
        },
        "provider": {
            "description": "The provider resource.",
            "inputProperties": {
                "apiKey": { "type": "string", "secret": true }
            }
        },
        "resources": {
            "acme:storage/bucket:Bucket": {
                "description": "An object storage bucket.",
                "inputProperties": {
                    "name": { "type": "string", "description": "Bucket name." },
                    "grants": {
                        "type": "array",
                        "items": { "$ref": "#/types/acme:storage/bucketGrant:BucketGrant" }
                    },
                    "labels": {
                        "type": "object",
                        "additionalProperties": { "type": "string" }
                    }
                },
                "requiredInputs": ["name"],
                "properties": {
                    "arn": { "type": "string" },
                    "name": { "type": "string" }
                },
                "required": ["arn", "name"],
                "stateInputs": {
                    "properties": { "arn": { "type": "string" } },
                    "required": ["arn"]
                }
            },
            "acme:compute/instance:Instance": {
                "deprecationMessage": "use acme:compute/server:Server",
                "inputProperties": {
                    "size": { "type": "integer" }
                }
            }
        },
        "functions": {
            "acme:storage/getBucket:getBucket": {
                "description": "Looks up a bucket.",
                "inputs": {
                    "properties": { "name": { "type": "string" } },
                    "required": ["name"]
                },
                "outputs": {
                    "properties": { "arn": { "type": "string" } },
                    "required": ["arn"]
                }
            }
        }
    })
}

fn import(value: serde_json::Value) -> Result<pkgdocs_schema::Package, ImportError> {
    let spec: PackageSpec = serde_json::from_value(value).expect("spec should deserialize");
    import_spec(spec)
}

#[test]
fn imports_the_realistic_spec() {
    let package = import(realistic_spec()).unwrap();

    assert_eq!(package.name, "acme");
    assert_eq!(package.version_label(), "0.3.1");
    assert_eq!(package.module_format.as_deref(), Some("(.*)(?:/[^/]*)"));
    assert_eq!(package.resources.len(), 2);
    assert_eq!(package.functions.len(), 1);
    assert_eq!(package.types.len(), 2);

    let bucket = &package.resources["acme:storage/bucket:Bucket"];
    assert_eq!(bucket.token.module(), "storage");
    assert_eq!(bucket.inputs.len(), 3);
    assert_eq!(bucket.state_inputs.len(), 1);

    let name = bucket.inputs.iter().find(|p| p.name == "name").unwrap();
    assert!(name.required);
    let labels = bucket.inputs.iter().find(|p| p.name == "labels").unwrap();
    assert_eq!(labels.typ, Type::Map(Box::new(Type::String)));

    let grants = bucket.inputs.iter().find(|p| p.name == "grants").unwrap();
    let grant_token = grants.typ.named_token().unwrap();
    assert_eq!(grant_token.member, "BucketGrant");
    assert!(package.types.contains_key(&grant_token.to_string()));
}

#[test]
fn nested_type_references_resolve_transitively() {
    let package = import(realistic_spec()).unwrap();

    let grant = &package.types["acme:storage/bucketGrant:BucketGrant"];
    let permissions = match &grant.kind {
        TypeKind::Object(props) => props.iter().find(|p| p.name == "permissions").unwrap(),
        other => panic!("expected object type, got {:?}", other),
    };
    assert_eq!(
        permissions.typ.named_token().unwrap().to_string(),
        "acme:storage/permission:Permission"
    );

    match &package.types["acme:storage/permission:Permission"].kind {
        TypeKind::Enum(values) => {
            assert_eq!(values.len(), 3);
            assert_eq!(values[2].name, "FULL_CONTROL");
            assert!(values[1].deprecation_message.is_some());
        }
        other => panic!("expected enum type, got {:?}", other),
    }
}

#[test]
fn import_is_deterministic() {
    let first = import(realistic_spec()).unwrap();
    let second = import(realistic_spec()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn breaking_one_reference_fails_the_whole_import() {
    let mut value = realistic_spec();
    value["types"]
        .as_object_mut()
        .unwrap()
        .remove("acme:storage/permission:Permission");

    let err = import(value).unwrap_err();
    match err {
        ImportError::UnresolvedReference { reference, .. } => {
            assert_eq!(reference, "#/types/acme:storage/permission:Permission");
        }
        other => panic!("expected unresolved reference, got {:?}", other),
    }
}

#[test]
fn deprecations_survive_binding() {
    let package = import(realistic_spec()).unwrap();
    let instance = &package.resources["acme:compute/instance:Instance"];
    assert_eq!(
        instance.deprecation_message.as_deref(),
        Some("use acme:compute/server:Server")
    );
}
