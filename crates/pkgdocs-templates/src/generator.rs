//! Page generation: package model in, path-to-bytes mapping out
//!
//! Copyright (c) 2025 Pkgdocs Team
//! Licensed under the MIT or Apache-2.0 license

use crate::templates::Template;
use pkgdocs_schema::{ComplexType, Function, Package, Property, Resource, TypeKind};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Result type for generator operations.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Generator error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Two members rendered to the same output path. Member names that
    /// differ only in case collapse onto one slug.
    #[error("duplicate output path {path:?} (from {token})")]
    DuplicatePath { path: String, token: String },
}

/// Generator configuration.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Include the per-module member index on the front page.
    pub include_module_index: bool,
    /// Include deprecated properties in property tables.
    pub include_deprecated: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            include_module_index: true,
            include_deprecated: true,
        }
    }
}

/// Generate the documentation-template tree for a package with default
/// configuration.
///
/// `tool` is stamped into each page's generated-file banner. The
/// returned mapping is ordered by path and its bytes are a pure
/// function of the package model.
pub fn generate_package(
    tool: &str,
    package: &Package,
) -> GenerateResult<BTreeMap<String, Vec<u8>>> {
    Generator::new(tool).generate(package)
}

/// Documentation-template generator.
pub struct Generator {
    tool: String,
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(tool: &str) -> Self {
        Self::with_config(tool, GeneratorConfig::default())
    }

    pub fn with_config(tool: &str, config: GeneratorConfig) -> Self {
        Self {
            tool: tool.to_string(),
            config,
        }
    }

    /// Generate all pages for a package.
    pub fn generate(&self, package: &Package) -> GenerateResult<BTreeMap<String, Vec<u8>>> {
        let mut files = BTreeMap::new();

        self.insert(
            &mut files,
            "_index.md".to_string(),
            self.index_page(package),
            &package.name,
        )?;
        self.insert(
            &mut files,
            "installation-configuration.md".to_string(),
            self.installation_page(package),
            &package.name,
        )?;

        if let Some(provider) = &package.provider {
            let path = member_path("resources", provider.token.module(), &provider.token.member);
            let page = self.resource_page(package, provider);
            self.insert(&mut files, path, page, &provider.token.to_string())?;
        }

        for resource in package.resources.values() {
            let path = member_path("resources", resource.token.module(), &resource.token.member);
            let page = self.resource_page(package, resource);
            self.insert(&mut files, path, page, &resource.token.to_string())?;
        }

        for function in package.functions.values() {
            let path = member_path("functions", function.token.module(), &function.token.member);
            let page = self.function_page(package, function);
            self.insert(&mut files, path, page, &function.token.to_string())?;
        }

        Ok(files)
    }

    fn insert(
        &self,
        files: &mut BTreeMap<String, Vec<u8>>,
        path: String,
        contents: String,
        token: &str,
    ) -> GenerateResult<()> {
        if files.contains_key(&path) {
            return Err(GenerateError::DuplicatePath {
                path,
                token: token.to_string(),
            });
        }
        files.insert(path, contents.into_bytes());
        Ok(())
    }

    /// The package front page.
    fn index_page(&self, package: &Package) -> String {
        let meta_desc = package
            .description
            .as_deref()
            .and_then(|d| d.lines().next())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Documentation for the {} package.", package.name));

        let mut page = Template::front_matter(&package.name, &meta_desc, &self.tool);

        if let Some(description) = &package.description {
            page.push_str(description);
            page.push_str("\n\n");
        }

        page.push_str(&Template::section("About"));
        let mut about = Vec::new();
        if let Some(version) = &package.version {
            about.push(format!("- **Version:** {}", version));
        }
        if let Some(license) = &package.license {
            about.push(format!("- **License:** {}", license));
        }
        if let Some(publisher) = &package.publisher {
            about.push(format!("- **Publisher:** {}", publisher));
        }
        if let Some(repository) = &package.repository {
            about.push(format!("- **Repository:** <{}>", repository));
        }
        if let Some(homepage) = &package.homepage {
            about.push(format!("- **Homepage:** <{}>", homepage));
        }
        if about.is_empty() {
            page.push_str("No package metadata was declared.\n\n");
        } else {
            page.push_str(&about.join("\n"));
            page.push_str("\n\n");
        }

        if self.config.include_module_index {
            let resources: Vec<(String, String)> = package
                .resources
                .values()
                .map(|r| {
                    (
                        r.token.to_string(),
                        member_path("resources", r.token.module(), &r.token.member),
                    )
                })
                .collect();
            if !resources.is_empty() {
                page.push_str(&Template::section("Resources"));
                page.push_str(&Template::link_list(&resources));
            }

            let functions: Vec<(String, String)> = package
                .functions
                .values()
                .map(|f| {
                    (
                        f.token.to_string(),
                        member_path("functions", f.token.module(), &f.token.member),
                    )
                })
                .collect();
            if !functions.is_empty() {
                page.push_str(&Template::section("Functions"));
                page.push_str(&Template::link_list(&functions));
            }
        }

        page
    }

    /// Installation and provider-configuration page.
    fn installation_page(&self, package: &Package) -> String {
        let mut page = Template::front_matter(
            &format!("{} Installation & Configuration", package.name),
            &format!("How to install and configure the {} package.", package.name),
            &self.tool,
        );

        page.push_str(&Template::section("Installation"));
        match &package.plugin_download_url {
            Some(url) => page.push_str(&format!(
                "The {} plugin is downloaded from <{}>.\n\n",
                package.name, url
            )),
            None => page.push_str(&format!(
                "The {} plugin is downloaded from the default plugin registry.\n\n",
                package.name
            )),
        }
        if let Some(version) = &package.version {
            page.push_str(&format!("Current version: `{}`.\n\n", version));
        }

        page.push_str(&Template::section("Configuration"));
        if package.config.is_empty() {
            page.push_str("This package has no configuration variables.\n\n");
        } else {
            page.push_str(&Template::property_table(&self.visible(&package.config)));
        }

        page
    }

    /// One resource page: inputs, outputs, state inputs, and the
    /// complex types those properties reach.
    fn resource_page(&self, package: &Package, resource: &Resource) -> String {
        let mut page = Template::front_matter(
            &resource.token.member,
            &format!("Documentation for the {} resource.", resource.token),
            &self.tool,
        );

        if let Some(message) = &resource.deprecation_message {
            page.push_str(&Template::deprecation_banner(message));
        }
        if let Some(description) = &resource.description {
            page.push_str(description);
            page.push_str("\n\n");
        }
        if resource.is_component {
            page.push_str("This resource is a component and may create child resources.\n\n");
        }

        page.push_str(&Template::section("Input Properties"));
        if resource.inputs.is_empty() {
            page.push_str("This resource has no input properties.\n\n");
        } else {
            page.push_str(&Template::property_table(&self.visible(&resource.inputs)));
        }

        page.push_str(&Template::section("Output Properties"));
        if resource.outputs.is_empty() {
            page.push_str("This resource has no output properties.\n\n");
        } else {
            page.push_str(&Template::property_table(&self.visible(&resource.outputs)));
        }

        if !resource.state_inputs.is_empty() {
            page.push_str(&Template::section("State Inputs"));
            page.push_str(&Template::property_table(&self.visible(&resource.state_inputs)));
        }

        let mut properties: Vec<&Property> = Vec::new();
        properties.extend(&resource.inputs);
        properties.extend(&resource.outputs);
        properties.extend(&resource.state_inputs);
        page.push_str(&self.supporting_types(package, &properties));

        page
    }

    /// One function page: inputs, outputs, and reachable complex types.
    fn function_page(&self, package: &Package, function: &Function) -> String {
        let mut page = Template::front_matter(
            &function.token.member,
            &format!("Documentation for the {} function.", function.token),
            &self.tool,
        );

        if let Some(message) = &function.deprecation_message {
            page.push_str(&Template::deprecation_banner(message));
        }
        if let Some(description) = &function.description {
            page.push_str(description);
            page.push_str("\n\n");
        }

        page.push_str(&Template::section("Input Properties"));
        if function.inputs.is_empty() {
            page.push_str("This function takes no arguments.\n\n");
        } else {
            page.push_str(&Template::property_table(&self.visible(&function.inputs)));
        }

        page.push_str(&Template::section("Output Properties"));
        if function.outputs.is_empty() {
            page.push_str("This function returns no properties.\n\n");
        } else {
            page.push_str(&Template::property_table(&self.visible(&function.outputs)));
        }

        let properties: Vec<&Property> =
            function.inputs.iter().chain(function.outputs.iter()).collect();
        page.push_str(&self.supporting_types(package, &properties));

        page
    }

    /// Render every complex type transitively reachable from the given
    /// properties, once each, in token order.
    fn supporting_types(&self, package: &Package, properties: &[&Property]) -> String {
        let mut seen = BTreeSet::new();
        let mut queue: Vec<String> = properties
            .iter()
            .filter_map(|p| p.typ.named_token())
            .map(|t| t.to_string())
            .collect();

        while let Some(token) = queue.pop() {
            if !seen.insert(token.clone()) {
                continue;
            }
            if let Some(ComplexType {
                kind: TypeKind::Object(props),
                ..
            }) = package.type_by_token(&token)
            {
                queue.extend(
                    props
                        .iter()
                        .filter_map(|p| p.typ.named_token())
                        .map(|t| t.to_string()),
                );
            }
        }

        if seen.is_empty() {
            return String::new();
        }

        let mut section = Template::section("Supporting Types");
        for token in &seen {
            let Some(complex) = package.type_by_token(token) else {
                // Unresolvable tokens cannot survive import.
                continue;
            };
            section.push_str(&Template::subsection(&complex.token.member));
            if let Some(description) = &complex.description {
                section.push_str(&Template::escape(description));
                section.push_str("\n\n");
            }
            match &complex.kind {
                TypeKind::Object(props) => {
                    section.push_str(&Template::property_table(&self.visible(props)));
                }
                TypeKind::Enum(values) => {
                    section.push_str(&Template::enum_table(values));
                }
            }
        }
        section
    }

    /// Apply the deprecated-property filter.
    fn visible(&self, properties: &[Property]) -> Vec<Property> {
        properties
            .iter()
            .filter(|p| self.config.include_deprecated || p.deprecation_message.is_none())
            .cloned()
            .collect()
    }
}

/// Relative page path for a member: `<kind>/<module>/<slug>.md`.
fn member_path(kind: &str, module: &str, member: &str) -> String {
    format!("{}/{}/{}.md", kind, module, slug(member))
}

/// Lower-kebab slug for a member name: `getBucketGrant` -> `get-bucket-grant`.
fn slug(member: &str) -> String {
    let mut out = String::with_capacity(member.len() + 4);
    let mut prev_lower = false;
    for ch in member.chars() {
        if ch.is_uppercase() {
            if prev_lower {
                out.push('-');
            }
            out.extend(ch.to_lowercase());
            prev_lower = false;
        } else {
            out.push(ch);
            prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        }
    }
    out
}
