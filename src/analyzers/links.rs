// SPDX-License-Identifier: PMPL-1.0-or-later
//! Link text analyzer - WCAG 2.4.4 Link Purpose (In Context)
//!
//! Anchors are checked in document order for descriptive text, accessible
//! names on empty/image links, new-window warnings, and download links
//! without file type hints. The adjacent-duplicate check remembers only
//! the previous href-bearing anchor; a non-anchor element between two
//! identical links resets the comparison.

use crate::analyzers::Analyzer;
use crate::violation::{truncate, Severity, Violation};
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Link texts that say nothing about the destination.
const NON_DESCRIPTIVE_TEXTS: &[&str] = &[
    "click here",
    "here",
    "read more",
    "more",
    "link",
    "click",
    "go",
    "start",
    "download",
    "learn more",
    "continue",
    "see more",
    "view more",
    "details",
];

/// Extensions treated as file downloads.
const DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "xls", "xlsx", "zip", "rar"];

/// Words that already hint at a file download in the link text.
const DOWNLOAD_HINTS: &[&str] = &["pdf", "download", "document", "file"];

const NEW_WINDOW_CUES: &[&str] = &["new window", "new tab", "opens in"];

pub struct LinkAnalyzer;

impl Analyzer for LinkAnalyzer {
    fn name(&self) -> &'static str {
        "links"
    }

    fn description(&self) -> &'static str {
        "Checks link text quality and link behavior (WCAG 2.4.4)"
    }

    fn analyze(&self, document: &Html) -> Vec<Violation> {
        let anchor_selector = Selector::parse("a").expect("valid selector");
        let img_selector = Selector::parse("img").expect("valid selector");

        let mut violations = Vec::new();
        let mut previous_href: Option<String> = None;

        for anchor in document.select(&anchor_selector) {
            let text: String = anchor.text().collect();
            let trimmed = text.trim();
            let lower = trimmed.to_lowercase();
            let aria_label = anchor.value().attr("aria-label");
            let title = anchor.value().attr("title");

            let href = match anchor.value().attr("href") {
                Some(href) => href,
                None => {
                    violations.push(
                        Violation::new(
                            Severity::Warning,
                            "WCAG 2.4.4",
                            "a",
                            "Anchor element without href attribute",
                        )
                        .with_content(truncate(trimmed, 50))
                        .with_suggestion("Add href attribute or use a different element"),
                    );
                    continue;
                }
            };

            if NON_DESCRIPTIVE_TEXTS.contains(&lower.as_str()) {
                violations.push(
                    Violation::new(
                        Severity::Error,
                        "WCAG 2.4.4, 2.4.9",
                        "a",
                        format!("Non-descriptive link text: '{}'", lower),
                    )
                    .with_href(href)
                    .with_suggestion(
                        "Use descriptive text that explains the link destination or purpose",
                    ),
                );
            }

            if !trimmed.is_empty() && trimmed.chars().count() <= 2 && aria_label.is_none() {
                violations.push(
                    Violation::new(
                        Severity::Warning,
                        "WCAG 2.4.4",
                        "a",
                        format!("Very short link text: '{}'", lower),
                    )
                    .with_href(href)
                    .with_suggestion("Use more descriptive link text"),
                );
            }

            // Any text node counts as content here, even pure whitespace;
            // the emptiness test is about missing nodes, not blank text.
            let has_text_node = anchor.children().any(|child| child.value().is_text());
            let has_element_child = anchor.children().any(|child| child.value().is_element());
            if !has_text_node && !has_element_child && aria_label.is_none() && title.is_none() {
                violations.push(
                    Violation::new(
                        Severity::Error,
                        "WCAG 2.4.4, 4.1.2",
                        "a",
                        "Empty link without accessible text",
                    )
                    .with_href(href)
                    .with_suggestion("Add link text, aria-label, or title attribute"),
                );
            }

            for img in anchor.select(&img_selector) {
                let alt = img.value().attr("alt").unwrap_or("");
                if alt.is_empty() && trimmed.is_empty() && aria_label.is_none() {
                    violations.push(
                        Violation::new(
                            Severity::Error,
                            "WCAG 2.4.4, 1.1.1",
                            "a",
                            "Link with image lacking alternative text",
                        )
                        .with_href(href)
                        .with_suggestion("Add alt text to image or aria-label to link"),
                    );
                }
            }

            if previous_href.as_deref() == Some(href)
                && !href.is_empty()
                && previous_sibling_is_anchor(&anchor)
            {
                violations.push(
                    Violation::new(
                        Severity::Warning,
                        "WCAG 2.4.4",
                        "a",
                        "Adjacent duplicate links to same destination",
                    )
                    .with_href(href)
                    .with_suggestion("Combine duplicate links or differentiate their purposes"),
                );
            }
            previous_href = Some(href.to_string());

            let target = anchor.value().attr("target").unwrap_or("");
            if target == "_blank" || target == "blank" {
                let has_cue = [Some(trimmed), aria_label, title]
                    .into_iter()
                    .flatten()
                    .map(str::to_lowercase)
                    .any(|candidate| NEW_WINDOW_CUES.iter().any(|cue| candidate.contains(cue)));
                if !has_cue {
                    violations.push(
                        Violation::new(
                            Severity::Warning,
                            "WCAG 3.2.5",
                            "a",
                            "Link opens in new window without warning",
                        )
                        .with_href(href)
                        .with_link_text(truncate(trimmed, 50))
                        .with_suggestion(
                            "Add \"(opens in new window)\" to link text or aria-label",
                        )
                        .auto_fixable(),
                    );
                }

                let rel = anchor.value().attr("rel").unwrap_or("").to_lowercase();
                if !rel.contains("noopener") || !rel.contains("noreferrer") {
                    violations.push(
                        Violation::new(
                            Severity::Warning,
                            "Security Best Practice",
                            "a",
                            "External link missing rel=\"noopener noreferrer\"",
                        )
                        .with_href(href)
                        .with_suggestion("Add rel=\"noopener noreferrer\" for security")
                        .auto_fixable(),
                    );
                }
            }

            if is_url(trimmed) {
                violations.push(
                    Violation::new(
                        Severity::Warning,
                        "WCAG 2.4.4",
                        "a",
                        "URL used as link text",
                    )
                    .with_href(href)
                    .with_link_text(truncate(trimmed, 50))
                    .with_suggestion("Use descriptive text instead of URL"),
                );
            }

            if let Some(ext) = document_extension(href) {
                if !DOWNLOAD_HINTS.iter().any(|hint| lower.contains(hint)) {
                    violations.push(
                        Violation::new(
                            Severity::Warning,
                            "WCAG 2.4.4",
                            "a",
                            "File download link without file type indication",
                        )
                        .with_href(href)
                        .with_link_text(truncate(trimmed, 50))
                        .with_suggestion(&format!(
                            "Add file type and size info (e.g., 'Document ({}, 2MB)')",
                            ext.to_uppercase()
                        )),
                    );
                }
            }
        }

        violations
    }
}

/// The previous sibling, skipping whitespace-only text, is another anchor.
fn previous_sibling_is_anchor(anchor: &ElementRef) -> bool {
    let mut node = anchor.prev_sibling();
    while let Some(current) = node {
        if let Some(text) = current.value().as_text() {
            if text.trim().is_empty() {
                node = current.prev_sibling();
                continue;
            }
            return false;
        }
        return ElementRef::wrap(current)
            .map(|el| el.value().name() == "a")
            .unwrap_or(false);
    }
    false
}

/// Absolute URL detection. `Url::parse` percent-encodes spaces, so any
/// whitespace disqualifies the text outright.
fn is_url(text: &str) -> bool {
    !text.is_empty() && !text.contains(char::is_whitespace) && Url::parse(text).is_ok()
}

fn document_extension(href: &str) -> Option<&str> {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    let (_, ext) = path.rsplit_once('.')?;
    DOCUMENT_EXTENSIONS
        .iter()
        .find(|&&known| known.eq_ignore_ascii_case(ext))
        .copied()
}
