//! Fixture document rendering.
//!
//! The document layout is fixed: a `[frontMatter]` TOML table, a `---`
//! separator, and two short body sections. Only the title and the day of
//! the fabricated creation date vary between posts.

/// File extension for generated posts.
pub const EXTENSION: &str = "md";

/// The fixed document template. `{title}` and `{day}` are the only
/// substitution points; everything else, including the leading blank
/// line, is emitted verbatim.
pub const DOCUMENT_TEMPLATE: &str = r#"
[frontMatter]
title = "{title}"
tags = ["first tag", "second tag"]
created = "2019-01-{day}"
description = "A run around the world"
published = true
---
# test
this is the actual article contents yeah.
## test2
this is the actual article contents yeah.
"#;

/// Render one document. The day is interpolated as a bare integer, so
/// single-digit days carry no leading zero.
pub fn render_document(title: &str, day: u32) -> String {
    DOCUMENT_TEMPLATE
        .replace("{title}", title)
        .replace("{day}", &day.to_string())
}

/// Filename for a post with the given slug.
pub fn filename(slug: &str) -> String {
    format!("{slug}.{EXTENSION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_title_and_day() {
        let document = render_document("Velcro is loud", 30);

        assert!(document.contains("title = \"Velcro is loud\""));
        assert!(document.contains("created = \"2019-01-30\""));
        assert!(document.contains("published = true"));
    }

    #[test]
    fn test_render_keeps_single_digit_days_unpadded() {
        let document = render_document("something", 5);
        assert!(document.contains("created = \"2019-01-5\""));
        assert!(!document.contains("2019-01-05"));
    }

    #[test]
    fn test_render_preserves_template_skeleton() {
        let document = render_document("loud flaps", 22);

        // Stripping the substituted values back out recovers the template
        let skeleton = document
            .replace("loud flaps", "{title}")
            .replace("22", "{day}");
        assert_eq!(skeleton, DOCUMENT_TEMPLATE);
    }

    #[test]
    fn test_template_starts_with_blank_line_and_ends_with_newline() {
        assert!(DOCUMENT_TEMPLATE.starts_with('\n'));
        assert!(DOCUMENT_TEMPLATE.ends_with('\n'));
    }

    #[test]
    fn test_filename_appends_extension() {
        assert_eq!(filename("velcro-is-loud"), "velcro-is-loud.md");
    }
}
