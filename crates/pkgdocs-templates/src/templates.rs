//! Markdown building blocks for generated pages
//!
//! Pure string helpers; nothing here knows about files or ordering.
//! The generator composes these into whole pages.
//!
//! Copyright (c) 2025 Pkgdocs Team
//! Licensed under the MIT or Apache-2.0 license

use pkgdocs_schema::{EnumValue, Property, Type};

/// Template for generating markdown documentation sections.
pub struct Template;

impl Template {
    /// Page front matter plus the generator stamp.
    ///
    /// No timestamps: generated bytes must be identical across runs
    /// over the same input.
    pub fn front_matter(title: &str, meta_desc: &str, tool: &str) -> String {
        format!(
            "---\ntitle: {}\nmeta_desc: {}\n---\n\n<!-- Generated by {}. Do not edit by hand. -->\n\n",
            Self::quote_yaml(title),
            Self::quote_yaml(meta_desc),
            tool
        )
    }

    /// A second-level section heading.
    pub fn section(title: &str) -> String {
        format!("## {}\n\n", title)
    }

    /// A third-level heading with a stable anchor for in-page links.
    pub fn subsection(title: &str) -> String {
        format!("### {}\n\n", title)
    }

    /// Warning banner for deprecated members.
    pub fn deprecation_banner(message: &str) -> String {
        format!("> **Deprecated:** {}\n\n", Self::escape(message))
    }

    /// A property table. `required`, `secret`, and deprecation marks
    /// render as annotations next to the property name.
    pub fn property_table(properties: &[Property]) -> String {
        let mut result = String::from("| Name | Type | Description |\n|---|---|---|\n");
        for property in properties {
            let mut name = format!("`{}`", property.name);
            if property.required {
                name.push_str(" *(required)*");
            }
            if property.secret {
                name.push_str(" *(secret)*");
            }
            if property.deprecation_message.is_some() {
                name.push_str(" *(deprecated)*");
            }

            let mut description = property
                .description
                .as_deref()
                .map(Self::escape)
                .unwrap_or_default();
            if let Some(default) = &property.default_value {
                if !description.is_empty() {
                    description.push(' ');
                }
                description.push_str(&format!(
                    "Defaults to `{}`.",
                    serde_json::to_string(default).unwrap_or_else(|_| "null".to_string())
                ));
            }

            result.push_str(&format!(
                "| {} | {} | {} |\n",
                name,
                Self::type_cell(&property.typ),
                description
            ));
        }
        result.push('\n');
        result
    }

    /// An enum-values table.
    pub fn enum_table(values: &[EnumValue]) -> String {
        let mut result = String::from("| Name | Value | Description |\n|---|---|---|\n");
        for value in values {
            let mut name = format!("`{}`", value.name);
            if value.deprecation_message.is_some() {
                name.push_str(" *(deprecated)*");
            }
            result.push_str(&format!(
                "| {} | `{}` | {} |\n",
                name,
                serde_json::to_string(&value.value).unwrap_or_else(|_| "null".to_string()),
                value.description.as_deref().map(Self::escape).unwrap_or_default()
            ));
        }
        result.push('\n');
        result
    }

    /// A bullet list of `[label](target)` links.
    pub fn link_list(entries: &[(String, String)]) -> String {
        let mut result = String::new();
        for (label, target) in entries {
            result.push_str(&format!("- [{}]({})\n", label, target));
        }
        result.push('\n');
        result
    }

    /// Render a type as a table cell, linking named types to their
    /// in-page supporting-type section.
    fn type_cell(typ: &Type) -> String {
        let label = Self::escape(&typ.label());
        match typ.named_token() {
            Some(token) => format!("[{}](#{})", label, Self::anchor(&token.member)),
            None => format!("`{}`", typ.label()),
        }
    }

    /// Markdown heading anchor for a member name.
    pub fn anchor(member: &str) -> String {
        member.to_lowercase()
    }

    /// Escape characters that would break tables or render as markup.
    pub fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '|' => escaped.push_str("\\|"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '\n' => escaped.push(' '),
                _ => escaped.push(ch),
            }
        }
        escaped
    }

    /// Quote a YAML front-matter scalar.
    fn quote_yaml(text: &str) -> String {
        format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(name: &str, typ: Type) -> Property {
        Property {
            name: name.to_string(),
            description: Some("A property.".to_string()),
            typ,
            required: false,
            secret: false,
            const_value: None,
            default_value: None,
            deprecation_message: None,
        }
    }

    #[test]
    fn front_matter_quotes_titles() {
        let page = Template::front_matter("The \"big\" one", "desc", "tool");
        assert!(page.starts_with("---\ntitle: \"The \\\"big\\\" one\"\n"));
        assert!(page.contains("Generated by tool"));
    }

    #[test]
    fn property_table_annotates_flags() {
        let mut required = property("name", Type::String);
        required.required = true;
        required.secret = true;
        let table = Template::property_table(&[required]);
        assert!(table.contains("`name` *(required)* *(secret)*"));
        assert!(table.contains("| `string` |"));
    }

    #[test]
    fn collection_labels_are_escaped_in_cells() {
        let table = Template::property_table(&[property(
            "tags",
            Type::Map(Box::new(Type::String)),
        )]);
        assert!(table.contains("`map<string>`"));
        // Raw angle brackets never appear outside a code span.
        assert!(!table.contains("| map<string>"));
    }

    #[test]
    fn escape_handles_table_breakers() {
        assert_eq!(Template::escape("a|b<c>\nd"), "a\\|b&lt;c&gt; d");
    }

    #[test]
    fn defaults_are_appended_to_descriptions() {
        let mut prop = property("region", Type::String);
        prop.default_value = Some(serde_json::json!("us-east-1"));
        let table = Template::property_table(&[prop]);
        assert!(table.contains("Defaults to `\"us-east-1\"`."));
    }
}
