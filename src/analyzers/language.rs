// SPDX-License-Identifier: PMPL-1.0-or-later
//! Document language analyzer - WCAG 3.1.1 / 3.1.2
//!
//! Checks the page-level `lang` declaration, validates all language codes
//! against ISO 639-1 primary subtags, and looks for text blocks whose
//! content appears to be in a different language than they inherit.
//!
//! Mixed-language detection is pluggable through [`MixedLanguageDetector`];
//! the default [`FunctionWordDetector`] is a cheap heuristic that counts
//! function words of the "other" language and only understands the
//! German/English pair.

use crate::analyzers::Analyzer;
use crate::violation::{truncate, Severity, Violation};
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

/// ISO 639-1 primary subtags accepted as valid `lang` values.
const VALID_LANGUAGE_CODES: &[&str] = &[
    "de", "en", "fr", "es", "it", "nl", "pl", "pt", "ru", "tr", "ar", "zh", "ja", "ko", "hi",
    "sv", "no", "da", "fi", "el", "cs", "hu", "ro", "bg", "hr", "sr", "sk", "sl", "uk", "vi",
    "th", "id", "ms", "fa", "he", "ur", "bn", "ta", "te", "mr",
];

const ENGLISH_FUNCTION_WORDS: &[&str] = &[
    "the", "and", "for", "with", "from", "about", "this", "that", "have", "will",
];

const GERMAN_FUNCTION_WORDS: &[&str] = &[
    "der", "die", "das", "und", "für", "mit", "von", "über", "diese", "haben",
];

/// Decides whether a block of text is likely written in a different
/// language than the one it inherits from its ancestors.
pub trait MixedLanguageDetector: Send + Sync {
    fn is_mixed(&self, text: &str, inherited_lang: &str) -> bool;
}

/// Counts function words of the opposite language; three or more hits
/// flag the text as mixed. Only knows the German/English pair.
pub struct FunctionWordDetector;

impl MixedLanguageDetector for FunctionWordDetector {
    fn is_mixed(&self, text: &str, inherited_lang: &str) -> bool {
        let foreign_words = match inherited_lang {
            "de" => ENGLISH_FUNCTION_WORDS,
            "en" => GERMAN_FUNCTION_WORDS,
            _ => return false,
        };

        let lower = text.to_lowercase();
        let hits = foreign_words
            .iter()
            .filter(|word| lower.contains(&format!(" {} ", word)))
            .count();
        hits >= 3
    }
}

/// Summary counters for the language pass.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageStats {
    pub total_issues: usize,
    pub critical_issues: usize,
    pub has_main_lang: bool,
}

pub struct LanguageAnalyzer {
    detector: Box<dyn MixedLanguageDetector>,
}

impl LanguageAnalyzer {
    pub fn with_detector(detector: Box<dyn MixedLanguageDetector>) -> Self {
        Self { detector }
    }

    pub fn analyze_with_stats(&self, document: &Html) -> (Vec<Violation>, LanguageStats) {
        let html_selector = Selector::parse("html").expect("valid selector");
        let lang_selector = Selector::parse("[lang]").expect("valid selector");
        let text_selector = Selector::parse("p, div, span, h1, h2, h3, h4, h5, h6, li, td, th")
            .expect("valid selector");
        let all_selector = Selector::parse("*").expect("valid selector");

        let mut violations = Vec::new();
        let mut has_main_lang = false;

        match document.select(&html_selector).next() {
            None => {
                violations.push(
                    Violation::new(
                        Severity::Critical,
                        "WCAG 3.1.1, BFSG §3",
                        "<html>",
                        "No html element found in document",
                    )
                    .with_suggestion("Ensure document has proper html structure"),
                );
            }
            Some(root) => {
                let lang = root.value().attr("lang").unwrap_or("").trim();
                if lang.is_empty() {
                    violations.push(
                        Violation::new(
                            Severity::Critical,
                            "WCAG 3.1.1, BFSG §3",
                            "<html>",
                            "Missing language attribute on html element",
                        )
                        .with_suggestion(
                            "Add lang attribute to html element (e.g., lang=\"de\" for German)",
                        ),
                    );
                } else {
                    has_main_lang = true;
                    if !VALID_LANGUAGE_CODES.contains(&primary_subtag(lang).as_str()) {
                        violations.push(
                            Violation::new(
                                Severity::Error,
                                "WCAG 3.1.1, BFSG §3",
                                "<html>",
                                format!("Invalid language code: {}", lang),
                            )
                            .with_suggestion(
                                "Use valid ISO 639-1 language code (e.g., \"de\", \"en\", \"fr\")",
                            ),
                        );
                    }
                }
            }
        }

        for element in document.select(&text_selector) {
            let text: String = element.text().collect();
            let trimmed = text.trim();
            if trimmed.chars().count() <= 20 {
                continue;
            }

            let inherited = inherited_language(&element);
            if self.detector.is_mixed(trimmed, &inherited) {
                let own_lang = element.value().attr("lang").unwrap_or("").trim();
                if own_lang.is_empty() {
                    violations.push(
                        Violation::new(
                            Severity::Warning,
                            "WCAG 3.1.2",
                            element.value().name(),
                            "Possible language change without lang attribute",
                        )
                        .with_content(format!("{}...", truncate(trimmed, 50)))
                        .with_suggestion("Add lang attribute to elements with different language"),
                    );
                }
            }
        }

        for element in document.select(&lang_selector) {
            let lang = element.value().attr("lang").unwrap_or("").trim();
            if !lang.is_empty() && !VALID_LANGUAGE_CODES.contains(&primary_subtag(lang).as_str())
            {
                violations.push(
                    Violation::new(
                        Severity::Error,
                        "WCAG 3.1.1",
                        format!("<{}>", element.value().name()),
                        format!("Invalid language code: {}", lang),
                    )
                    .with_suggestion("Use valid ISO 639-1 language code"),
                );
            }
        }

        // `xml:lang` is not addressable through a CSS selector, so every
        // element is inspected directly.
        for element in document.select(&all_selector) {
            let xml_lang = match element.value().attr("xml:lang") {
                Some(value) => value.trim(),
                None => continue,
            };
            let lang = element.value().attr("lang").unwrap_or("").trim();
            if !lang.is_empty() && !lang.eq_ignore_ascii_case(xml_lang) {
                violations.push(
                    Violation::new(
                        Severity::Warning,
                        "WCAG 3.1.1",
                        format!("<{}>", element.value().name()),
                        "Mismatched lang and xml:lang attributes",
                    )
                    .with_suggestion(
                        "Ensure lang and xml:lang attributes have the same value",
                    ),
                );
            }
        }

        let stats = LanguageStats {
            total_issues: violations.len(),
            critical_issues: violations
                .iter()
                .filter(|v| v.severity == Severity::Critical)
                .count(),
            has_main_lang,
        };
        (violations, stats)
    }
}

impl Default for LanguageAnalyzer {
    fn default() -> Self {
        Self::with_detector(Box::new(FunctionWordDetector))
    }
}

impl Analyzer for LanguageAnalyzer {
    fn name(&self) -> &'static str {
        "language"
    }

    fn description(&self) -> &'static str {
        "Checks document language declarations (WCAG 3.1.1, 3.1.2)"
    }

    fn analyze(&self, document: &Html) -> Vec<Violation> {
        self.analyze_with_stats(document).0
    }
}

/// Primary subtag of a BCP 47 language tag: `de-AT` -> `de`.
fn primary_subtag(lang: &str) -> String {
    lang.trim()
        .to_lowercase()
        .split('-')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Nearest `lang` value in effect for an element, starting with the
/// element itself. The first `lang` attribute found wins, even when its
/// value is empty.
fn inherited_language(element: &ElementRef) -> String {
    if let Some(lang) = element.value().attr("lang") {
        return primary_subtag(lang);
    }
    for ancestor in element.ancestors() {
        if let Some(el) = ElementRef::wrap(ancestor) {
            if let Some(lang) = el.value().attr("lang") {
                return primary_subtag(lang);
            }
        }
    }
    String::new()
}
