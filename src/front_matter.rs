//! Typed view of a generated document's front matter.
//!
//! Generated posts carry a TOML `[frontMatter]` table ahead of a `---`
//! separator. This module parses that head back into a struct, which is
//! what a downstream site builder does with these fixtures and what the
//! `check` command and the integration tests use to inspect output.

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Separator between the front matter table and the document body.
pub const FRONT_MATTER_SEPARATOR: &str = "\n---\n";

#[derive(Debug, Clone, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub published: bool,
}

#[derive(Deserialize)]
struct Document {
    #[serde(rename = "frontMatter")]
    front_matter: FrontMatter,
}

/// Parse a generated document into its front matter and body.
///
/// # Errors
///
/// Returns an error if the `---` separator is missing or the head is not
/// a valid `[frontMatter]` TOML table with a `title` field.
pub fn parse_document(content: &str) -> Result<(FrontMatter, String)> {
    let Some((head, body)) = content.split_once(FRONT_MATTER_SEPARATOR) else {
        bail!("No front matter separator (---) found in document");
    };

    let document: Document =
        toml::from_str(head).context("Failed to parse front matter as TOML")?;

    Ok((document.front_matter, body.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_document() {
        let content = r#"
[frontMatter]
title = "Velcro is loud"
tags = ["first tag", "second tag"]
created = "2019-01-30"
description = "A run around the world"
published = true
---
# test
body text
"#;

        let (front_matter, body) = parse_document(content).unwrap();
        assert_eq!(front_matter.title, "Velcro is loud");
        assert_eq!(front_matter.tags, ["first tag", "second tag"]);
        assert_eq!(front_matter.created, "2019-01-30");
        assert_eq!(front_matter.description, "A run around the world");
        assert!(front_matter.published);
        assert!(body.contains("# test"));
    }

    #[test]
    fn test_parse_rendered_template_round_trips() {
        let content = crate::post::render_document("flaps gave positions", 16);

        let (front_matter, _body) = parse_document(&content).unwrap();
        assert_eq!(front_matter.title, "flaps gave positions");
        assert_eq!(front_matter.created, "2019-01-16");
    }

    #[test]
    fn test_parse_missing_separator() {
        let content = "[frontMatter]\ntitle = \"orphan\"\n# no separator";
        let result = parse_document(content);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("No front matter separator"));
    }

    #[test]
    fn test_parse_invalid_toml() {
        let content = "[frontMatter]\ntitle = not quoted\n---\nbody";
        let result = parse_document(content);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_missing_title_field() {
        let content = "[frontMatter]\npublished = true\n---\nbody";
        assert!(parse_document(content).is_err());
    }
}
