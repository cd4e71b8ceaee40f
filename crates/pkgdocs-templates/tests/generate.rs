//! Page-content tests over a bound package model

use pkgdocs_schema::{import_spec, PackageSpec};
use pkgdocs_templates::generate_package;
use pretty_assertions::assert_eq;
use serde_json::json;

fn bucket_package() -> pkgdocs_schema::Package {
    let spec: PackageSpec = serde_json::from_value(json!({
        "name": "acme",
        "version": "1.0.0",
        "description": "The Acme provider.\n\nManages Acme things.",
        "license": "Apache-2.0",
        "repository": "https://github.com/acme/provider",
        "config": {
            "variables": {
                "apiKey": { "type": "string", "secret": true, "description": "API key." }
            },
            "required": ["apiKey"]
        },
        "types": {
            "acme:storage/bucketGrant:BucketGrant": {
                "description": "A grant on a bucket.",
                "properties": {
                    "principal": { "type": "string" },
                    "permission": { "$ref": "#/types/acme:storage/permission:Permission" }
                },
                "required": ["principal"]
            },
            "acme:storage/permission:Permission": {
                "type": "string",
                "enum": [
                    { "name": "Read", "value": "READ" },
                    { "name": "Write", "value": "WRITE" }
                ]
            }
        },
        "resources": {
            "acme:storage/bucket:Bucket": {
                "description": "An object storage bucket.",
                "inputProperties": {
                    "name": { "type": "string", "description": "Must be unique | per region." },
                    "grants": {
                        "type": "array",
                        "items": { "$ref": "#/types/acme:storage/bucketGrant:BucketGrant" }
                    }
                },
                "requiredInputs": ["name"],
                "properties": {
                    "arn": { "type": "string" }
                },
                "required": ["arn"]
            }
        },
        "functions": {
            "acme:storage/getBucket:getBucket": {
                "description": "Looks up a bucket.",
                "inputs": { "properties": { "name": { "type": "string" } }, "required": ["name"] },
                "outputs": { "properties": { "arn": { "type": "string" } } }
            }
        }
    }))
    .unwrap();
    import_spec(spec).unwrap()
}

#[test]
fn generation_is_byte_for_byte_deterministic() {
    let package = bucket_package();
    let first = generate_package("test-tool", &package).unwrap();
    let second = generate_package("test-tool", &package).unwrap();
    assert_eq!(first, second);
}

#[test]
fn front_page_lists_members_and_metadata() {
    let files = generate_package("test-tool", &bucket_package()).unwrap();
    let index = std::str::from_utf8(&files["_index.md"]).unwrap();

    assert!(index.starts_with("---\ntitle: \"acme\"\n"));
    assert!(index.contains("**Version:** 1.0.0"));
    assert!(index.contains("**License:** Apache-2.0"));
    assert!(index.contains("[acme:storage/bucket:Bucket](resources/storage/bucket.md)"));
    assert!(index.contains("[acme:storage/getBucket:getBucket](functions/storage/get-bucket.md)"));
}

#[test]
fn installation_page_renders_config_variables() {
    let files = generate_package("test-tool", &bucket_package()).unwrap();
    let page = std::str::from_utf8(&files["installation-configuration.md"]).unwrap();

    assert!(page.contains("## Configuration"));
    assert!(page.contains("`apiKey` *(required)* *(secret)*"));
    assert!(page.contains("Current version: `1.0.0`."));
}

#[test]
fn resource_page_links_and_inlines_supporting_types() {
    let files = generate_package("test-tool", &bucket_package()).unwrap();
    let page = std::str::from_utf8(&files["resources/storage/bucket.md"]).unwrap();

    // The grants input links to the in-page BucketGrant section.
    assert!(page.contains("[list&lt;BucketGrant&gt;](#bucketgrant)"));

    // Both reachable types render once, enum included.
    assert!(page.contains("## Supporting Types"));
    assert!(page.contains("### BucketGrant"));
    assert!(page.contains("### Permission"));
    assert!(page.contains("| `Read` | `\"READ\"` |"));

    // Table-breaking characters in descriptions are escaped.
    assert!(page.contains("Must be unique \\| per region."));
}

#[test]
fn function_page_renders_inputs_and_outputs() {
    let files = generate_package("test-tool", &bucket_package()).unwrap();
    let page = std::str::from_utf8(&files["functions/storage/get-bucket.md"]).unwrap();

    assert!(page.contains("Looks up a bucket."));
    assert!(page.contains("## Input Properties"));
    assert!(page.contains("`name` *(required)*"));
    assert!(page.contains("## Output Properties"));
    assert!(page.contains("`arn`"));
}

#[test]
fn empty_package_still_gets_front_and_installation_pages() {
    let spec: PackageSpec = serde_json::from_value(json!({ "name": "empty" })).unwrap();
    let package = import_spec(spec).unwrap();
    let files = generate_package("test-tool", &package).unwrap();

    let paths: Vec<&String> = files.keys().collect();
    assert_eq!(paths, vec!["_index.md", "installation-configuration.md"]);

    let page = std::str::from_utf8(&files["installation-configuration.md"]).unwrap();
    assert!(page.contains("no configuration variables"));
}
