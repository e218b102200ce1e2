// SPDX-License-Identifier: PMPL-1.0-or-later
//! Checker: runs the configured analyzers over a document and collects
//! their violations into an [`AnalysisResult`] keyed by analyzer name.
//!
//! Analysis is pure: the same markup and configuration always produce the
//! same result, so repeated runs can be compared byte for byte.

use crate::analyzers::{
    Analyzer, AriaAnalyzer, ContrastAnalyzer, FormAnalyzer, HeadingAnalyzer, ImageAnalyzer,
    KeyboardNavigationAnalyzer, LanguageAnalyzer, LinkAnalyzer,
};
use crate::config::CheckerConfig;
use crate::error::{CheckError, Result};
use crate::violation::AnalysisResult;
use scraper::Html;
use tracing::debug;

pub struct Checker {
    analyzers: Vec<Box<dyn Analyzer>>,
    violations: AnalysisResult,
}

impl Checker {
    /// Build a checker with the analyzers enabled by `config`, in fixed
    /// registration order.
    pub fn new(config: &CheckerConfig) -> Self {
        let mut analyzers: Vec<Box<dyn Analyzer>> = Vec::new();
        let checks = &config.checks;

        if checks.images {
            analyzers.push(Box::new(ImageAnalyzer));
        }
        if checks.forms {
            analyzers.push(Box::new(FormAnalyzer));
        }
        if checks.headings {
            analyzers.push(Box::new(HeadingAnalyzer));
        }
        if checks.contrast {
            analyzers.push(Box::new(ContrastAnalyzer::new(config.compliance_level)));
        }
        if checks.aria {
            analyzers.push(Box::new(AriaAnalyzer));
        }
        if checks.links {
            analyzers.push(Box::new(LinkAnalyzer));
        }
        if checks.keyboard {
            analyzers.push(Box::new(KeyboardNavigationAnalyzer));
        }
        if checks.language {
            analyzers.push(Box::new(LanguageAnalyzer::default()));
        }

        Self {
            analyzers,
            violations: AnalysisResult::new(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(&CheckerConfig::default())
    }

    /// Parse `html` and analyze it.
    pub fn analyze(&mut self, html: &str) -> Result<&AnalysisResult> {
        let document = Html::parse_document(html);
        self.analyze_document(&document)
    }

    /// Analyze an already parsed document.
    pub fn analyze_document(&mut self, document: &Html) -> Result<&AnalysisResult> {
        let has_element_root = document
            .tree
            .root()
            .children()
            .any(|node| node.value().is_element());
        if !has_element_root {
            return Err(CheckError::UnusableDocument);
        }

        let mut result = AnalysisResult::new();
        for analyzer in &self.analyzers {
            let violations = analyzer.analyze(document);
            debug!(
                analyzer = analyzer.name(),
                violations = violations.len(),
                "analyzer finished"
            );
            result.insert(analyzer.name(), violations);
        }

        self.violations = result;
        Ok(&self.violations)
    }

    /// True when the markup produces no violations at all.
    pub fn is_accessible(&mut self, html: &str) -> Result<bool> {
        Ok(self.analyze(html)?.is_empty())
    }

    /// Result of the most recent analysis.
    pub fn violations(&self) -> &AnalysisResult {
        &self.violations
    }

    /// Names and descriptions of the registered analyzers.
    pub fn registered_analyzers(&self) -> Vec<(&'static str, &'static str)> {
        self.analyzers
            .iter()
            .map(|a| (a.name(), a.description()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChecksConfig;
    use crate::violation::Severity;

    const CLEAN_PAGE: &str = r##"
        <html lang="en">
        <head><title>Test</title></head>
        <body>
            <a href="#main">Skip to main content</a>
            <h1>Welcome to the test page</h1>
            <main id="main">
                <img src="logo.png" alt="Company logo">
                <form aria-label="Contact form">
                    <label for="email">Email address</label>
                    <input type="text" id="email" name="email">
                </form>
                <a href="/about">About our company</a>
            </main>
        </body>
        </html>
    "##;

    #[test]
    fn test_clean_page_is_accessible() {
        let mut checker = Checker::with_defaults();
        let result = checker.analyze(CLEAN_PAGE).unwrap();
        assert!(
            result.is_empty(),
            "got: {:?}",
            result.all().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_violations_grouped_by_analyzer() {
        let html = r#"<html><body><img src="a.png"><h3>Section heading</h3></body></html>"#;
        let mut checker = Checker::with_defaults();
        let result = checker.analyze(html).unwrap();
        assert!(result.get("images").is_some());
        assert!(result.get("headings").is_some());
        assert!(result.get("forms").is_none());
    }

    #[test]
    fn test_disabled_analyzer_is_not_run() {
        let config = CheckerConfig {
            checks: ChecksConfig {
                images: false,
                ..ChecksConfig::default()
            },
            ..CheckerConfig::default()
        };
        let html = r#"<html><body><img src="a.png"></body></html>"#;
        let mut checker = Checker::new(&config);
        let result = checker.analyze(html).unwrap();
        assert!(result.get("images").is_none());
    }

    #[test]
    fn test_empty_categories_are_dropped() {
        let mut checker = Checker::with_defaults();
        let result = checker.analyze(CLEAN_PAGE).unwrap();
        assert_eq!(result.categories(), 0);
    }

    #[test]
    fn test_repeated_analysis_is_identical() {
        let html = r##"<html><body><img src="a.png"><a href="#">here</a></body></html>"##;
        let mut checker = Checker::with_defaults();
        let first = serde_json::to_string(checker.analyze(html).unwrap()).unwrap();
        let second = serde_json::to_string(checker.analyze(html).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_document_without_element_root_is_rejected() {
        let document = Html::new_document();
        let mut checker = Checker::with_defaults();
        let err = checker.analyze_document(&document).unwrap_err();
        assert!(matches!(err, CheckError::UnusableDocument));
    }

    #[test]
    fn test_has_errors_detects_severity() {
        let html = r#"<html lang="en"><body><img src="a.png"></body></html>"#;
        let mut checker = Checker::with_defaults();
        let result = checker.analyze(html).unwrap();
        assert!(result.has_errors());
        assert!(result.count_by_severity(Severity::Error) >= 1);
    }

    #[test]
    fn test_is_accessible_false_for_broken_page() {
        let html = r#"<html><body><img src="a.png"></body></html>"#;
        let mut checker = Checker::with_defaults();
        assert!(!checker.is_accessible(html).unwrap());
    }

    #[test]
    fn test_registered_analyzer_order() {
        let checker = Checker::with_defaults();
        let names: Vec<_> = checker
            .registered_analyzers()
            .iter()
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(
            names,
            vec![
                "images", "forms", "headings", "contrast", "aria", "links", "keyboard",
                "language"
            ]
        );
    }
}
