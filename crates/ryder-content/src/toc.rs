//! Table of contents extraction from markdown bodies.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag};
use serde::{Deserialize, Serialize};

/// One `##` or `###` heading with its anchor slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocHeading {
    pub depth: u8,
    pub text: String,
    pub slug: String,
}

/// Collect level 2 and 3 headings in document order.
///
/// Heading text is built from the heading's own text and inline code spans;
/// text nested in emphasis or links is not included. Headings whose text or
/// slug comes out empty are skipped.
#[must_use]
pub fn extract_toc(markdown: &str) -> Vec<TocHeading> {
    let mut headings = Vec::new();
    let mut current: Option<(u8, String)> = None;
    let mut nesting = 0usize;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading(level, ..)) => {
                current = toc_depth(level).map(|depth| (depth, String::new()));
                nesting = 0;
            }
            Event::End(Tag::Heading(..)) => {
                if let Some((depth, text)) = current.take() {
                    let slug = heading_slug(&text);
                    if !text.is_empty() && !slug.is_empty() {
                        headings.push(TocHeading { depth, text, slug });
                    }
                }
            }
            Event::Start(_) if current.is_some() => nesting += 1,
            Event::End(_) if current.is_some() => nesting = nesting.saturating_sub(1),
            Event::Text(s) | Event::Code(s) if nesting == 0 => {
                if let Some((_, text)) = current.as_mut() {
                    text.push_str(&s);
                }
            }
            Event::SoftBreak if nesting == 0 => {
                if let Some((_, text)) = current.as_mut() {
                    text.push('\n');
                }
            }
            _ => {}
        }
    }
    headings
}

const fn toc_depth(level: HeadingLevel) -> Option<u8> {
    match level {
        HeadingLevel::H2 => Some(2),
        HeadingLevel::H3 => Some(3),
        _ => None,
    }
}

/// Anchor slug: lower-case, runs outside `[a-z0-9]` become one hyphen, one
/// hyphen trimmed from each end.
#[must_use]
pub fn heading_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
            in_run = false;
        } else if !in_run {
            slug.push('-');
            in_run = true;
        }
    }
    let slug = slug.strip_prefix('-').unwrap_or(&slug);
    slug.strip_suffix('-').unwrap_or(slug).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn heading(depth: u8, text: &str, slug: &str) -> TocHeading {
        TocHeading {
            depth,
            text: text.into(),
            slug: slug.into(),
        }
    }

    #[test]
    fn collects_h2_and_h3_only() {
        let md = "# Title\n\n## Setup\n\ntext\n\n### Install `cargo`\n\n#### Deep\n\n## Usage Notes\n";
        assert_eq!(
            extract_toc(md),
            vec![
                heading(2, "Setup", "setup"),
                heading(3, "Install cargo", "install-cargo"),
                heading(2, "Usage Notes", "usage-notes"),
            ]
        );
    }

    #[test]
    fn nested_inline_text_is_ignored() {
        let md = "## Why *this* matters\n\n## **Bold only**\n";
        assert_eq!(
            extract_toc(md),
            vec![heading(2, "Why  matters", "why-matters")]
        );
    }

    #[test]
    fn setext_headings_count() {
        let md = "Overview\n--------\n";
        assert_eq!(extract_toc(md), vec![heading(2, "Overview", "overview")]);
    }

    #[test]
    fn headings_in_code_blocks_are_not_headings() {
        let md = "```\n## not a heading\n```\n";
        assert!(extract_toc(md).is_empty());
    }

    #[rstest]
    #[case("Getting Started", "getting-started")]
    #[case("  FAQ & Tips!  ", "faq-tips")]
    #[case("v1.2 -- release", "v1-2-release")]
    #[case("Über uns", "ber-uns")]
    #[case("???", "")]
    fn slugs(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(heading_slug(text), expected);
    }
}
