// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt text analyzer - WCAG 1.1.1 Non-text Content
//!
//! Every `<img>` must carry an `alt` attribute. An empty `alt=""` is only
//! acceptable for decorative images, which must additionally be marked
//! with `role="presentation"` or `aria-hidden="true"`.

use crate::analyzers::Analyzer;
use crate::violation::{Severity, Violation};
use scraper::{ElementRef, Html, Selector};

pub struct ImageAnalyzer;

impl Analyzer for ImageAnalyzer {
    fn name(&self) -> &'static str {
        "images"
    }

    fn description(&self) -> &'static str {
        "Checks <img> elements for proper alt text (WCAG 1.1.1)"
    }

    fn analyze(&self, document: &Html) -> Vec<Violation> {
        let img_selector = Selector::parse("img").expect("valid selector");
        let mut violations = Vec::new();

        for img in document.select(&img_selector) {
            let src = img.value().attr("src").unwrap_or("");

            match img.value().attr("alt") {
                None => {
                    violations.push(
                        Violation::new(
                            Severity::Error,
                            "WCAG 1.1.1",
                            "img",
                            "Image without alt text found",
                        )
                        .with_src(src)
                        .with_suggestion("Add an alt attribute to describe the image")
                        .auto_fixable(),
                    );
                }
                Some("") if !is_decorative(&img) => {
                    violations.push(
                        Violation::new(
                            Severity::Warning,
                            "WCAG 1.1.1",
                            "img",
                            "Image with empty alt text may not be decorative",
                        )
                        .with_src(src)
                        .with_suggestion(
                            "Verify if the image is truly decorative or needs descriptive text",
                        ),
                    );
                }
                Some(_) => {}
            }
        }

        violations
    }
}

/// A decorative image is marked with `role="presentation"` or
/// `aria-hidden="true"`.
fn is_decorative(img: &ElementRef) -> bool {
    img.value().attr("role") == Some("presentation")
        || img.value().attr("aria-hidden") == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(html: &str) -> Vec<Violation> {
        ImageAnalyzer.analyze(&Html::parse_document(html))
    }

    #[test]
    fn test_missing_alt_is_error() {
        let violations = analyze(r#"<html><body><img src="photo.jpg"></body></html>"#);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Error);
        assert_eq!(violations[0].message, "Image without alt text found");
        assert_eq!(violations[0].src.as_deref(), Some("photo.jpg"));
        assert!(violations[0].auto_fixable);
    }

    #[test]
    fn test_empty_alt_without_decorative_marker_is_warning() {
        let violations = analyze(r#"<html><body><img src="a.png" alt=""></body></html>"#);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Warning);
        assert!(!violations[0].auto_fixable);
    }

    #[test]
    fn test_empty_alt_with_presentation_role_is_clean() {
        let violations =
            analyze(r#"<html><body><img src="a.png" alt="" role="presentation"></body></html>"#);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_empty_alt_with_aria_hidden_is_clean() {
        let violations =
            analyze(r#"<html><body><img src="a.png" alt="" aria-hidden="true"></body></html>"#);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_descriptive_alt_is_clean() {
        let violations =
            analyze(r#"<html><body><img src="chart.png" alt="Q4 revenue chart"></body></html>"#);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_violations_follow_document_order() {
        let html = r#"
            <html><body>
                <img src="first.png">
                <img src="second.png" alt="">
            </body></html>
        "#;
        let violations = analyze(html);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].src.as_deref(), Some("first.png"));
        assert_eq!(violations[0].severity, Severity::Error);
        assert_eq!(violations[1].src.as_deref(), Some("second.png"));
        assert_eq!(violations[1].severity, Severity::Warning);
    }

    #[test]
    fn test_missing_src_reported_as_empty_string() {
        let violations = analyze(r#"<html><body><img></body></html>"#);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].src.as_deref(), Some(""));
    }
}
