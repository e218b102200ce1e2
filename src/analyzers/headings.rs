// SPDX-License-Identifier: PMPL-1.0-or-later
//! Heading structure analyzer - WCAG 1.3.1 / 2.4.6
//!
//! Walks the heading sequence in document order tracking the previous
//! level. A heading more than one level deeper than its predecessor breaks
//! the hierarchy; the walk is not repaired, so repeated skips cascade into
//! repeated violations. Page-level findings (missing h1, multiple h1) are
//! appended after the per-heading pass.

use crate::analyzers::Analyzer;
use crate::violation::{truncate, Severity, Violation};
use scraper::{Html, Selector};

pub struct HeadingAnalyzer;

impl Analyzer for HeadingAnalyzer {
    fn name(&self) -> &'static str {
        "headings"
    }

    fn description(&self) -> &'static str {
        "Checks heading hierarchy and content (WCAG 1.3.1, 2.4.6)"
    }

    fn analyze(&self, document: &Html) -> Vec<Violation> {
        let heading_selector =
            Selector::parse("h1, h2, h3, h4, h5, h6").expect("valid selector");
        let mut violations = Vec::new();
        let mut previous_level = 0u32;
        let mut h1_contents: Vec<String> = Vec::new();

        for heading in document.select(&heading_selector) {
            let tag = heading.value().name();
            let level = heading_level(tag);
            let text: String = heading.text().collect();
            let trimmed = text.trim();

            if previous_level > 0 && level > previous_level + 1 {
                violations.push(
                    Violation::new(
                        Severity::Error,
                        "WCAG 1.3.1",
                        tag,
                        format!("Heading hierarchy broken: {} follows h{}", tag, previous_level),
                    )
                    .with_content(truncate(trimmed, 50))
                    .with_suggestion(&format!(
                        "Use h{} instead of {}",
                        previous_level + 1,
                        tag
                    )),
                );
            }
            previous_level = level;

            if trimmed.is_empty() {
                violations.push(
                    Violation::new(
                        Severity::Error,
                        "WCAG 1.3.1, 2.4.6",
                        tag,
                        format!("Empty {} heading found", tag),
                    )
                    .with_suggestion("Remove empty heading or add descriptive text"),
                );
            } else if trimmed.chars().count() < 3 {
                violations.push(
                    Violation::new(
                        Severity::Warning,
                        "WCAG 2.4.6",
                        tag,
                        format!("Very short heading text: '{}'", trimmed),
                    )
                    .with_suggestion("Use more descriptive heading text"),
                );
            }

            if tag == "h1" {
                h1_contents.push(trimmed.to_string());
            }
        }

        if h1_contents.is_empty() {
            violations.push(
                Violation::new(
                    Severity::Warning,
                    "WCAG 1.3.1, 2.4.6",
                    "h1",
                    "No h1 heading found on the page",
                )
                .with_suggestion("Add a main h1 heading to describe the page content"),
            );
        } else if h1_contents.len() > 1 {
            violations.push(
                Violation::new(
                    Severity::Warning,
                    "WCAG 1.3.1",
                    "h1",
                    format!("Multiple h1 headings found ({} total)", h1_contents.len()),
                )
                .with_suggestion("Use only one h1 per page for the main heading"),
            );

            for (index, content) in h1_contents.iter().enumerate() {
                if !content.is_empty() {
                    violations.push(
                        Violation::new(
                            Severity::Notice,
                            "WCAG 1.3.1",
                            "h1",
                            format!("h1 #{}: '{}'", index + 1, truncate(content, 50)),
                        )
                        .with_suggestion("Consider using h2 or restructuring the content"),
                    );
                }
            }
        }

        violations
    }
}

/// Numeric level from the tag name digit suffix (h1 -> 1 ... h6 -> 6).
fn heading_level(tag: &str) -> u32 {
    tag.trim_start_matches('h').parse().unwrap_or(0)
}
