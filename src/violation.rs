// SPDX-License-Identifier: PMPL-1.0-or-later
//! The uniform violation model shared by all analyzers.
//!
//! Every detected defect becomes a [`Violation`]; there are no thrown
//! faults inside the analyzers for malformed-but-parseable input. Records
//! carry no identifiers or timestamps so that analyzing the same document
//! twice produces byte-identical output.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Severity levels for violations.
///
/// `Critical` is reserved for document-level language failures (a page a
/// screen reader cannot even announce correctly); everything else uses the
/// `error`/`warning`/`notice` tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Error,
    Warning,
    Notice,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "critical"),
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Notice => write!(f, "notice"),
        }
    }
}

/// Foreground/background pair attached to contrast violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub foreground: String,
    pub background: String,
}

/// A single accessibility violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Severity tag, serialized as `type` to match the report schema.
    #[serde(rename = "type")]
    pub severity: Severity,
    /// WCAG clause identifier(s), e.g. `"WCAG 1.1.1"`.
    pub rule: String,
    /// Tag name of the triggering element, or a descriptive label such as
    /// `"various"` for aggregate findings.
    pub element: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// True only when the fix is mechanical and context-free.
    pub auto_fixable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorPair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(rename = "linkText", skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix_example: Option<String>,
}

impl Violation {
    /// Create a new violation. Optional detail fields are attached with the
    /// `with_*` builder methods.
    pub fn new(
        severity: Severity,
        rule: &str,
        element: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            rule: rule.to_string(),
            element: element.into(),
            message: message.into(),
            suggestion: None,
            auto_fixable: false,
            src: None,
            href: None,
            name: None,
            content: None,
            colors: None,
            count: None,
            link_text: None,
            fix_example: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }

    /// Mark the fix as mechanical (insertable without human judgement).
    pub fn auto_fixable(mut self) -> Self {
        self.auto_fixable = true;
        self
    }

    pub fn with_src(mut self, src: &str) -> Self {
        self.src = Some(src.to_string());
        self
    }

    pub fn with_href(mut self, href: &str) -> Self {
        self.href = Some(href.to_string());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_colors(mut self, foreground: &str, background: &str) -> Self {
        self.colors = Some(ColorPair {
            foreground: foreground.to_string(),
            background: background.to_string(),
        });
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_link_text(mut self, text: impl Into<String>) -> Self {
        self.link_text = Some(text.into());
        self
    }

    pub fn with_fix_example(mut self, example: &str) -> Self {
        self.fix_example = Some(example.to_string());
        self
    }
}

/// Truncate a string to at most `max` characters.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Analysis output: an insertion-ordered mapping from analyzer name to its
/// violation list. Analyzers that found nothing are never present; an empty
/// list is never emitted as a keyed entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisResult {
    entries: Vec<(String, Vec<Violation>)>,
}

impl AnalysisResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an analyzer's violations. Empty lists are dropped.
    pub fn insert(&mut self, name: &str, violations: Vec<Violation>) {
        if !violations.is_empty() {
            self.entries.push((name.to_string(), violations));
        }
    }

    /// Violations for a named analyzer, if it found any.
    pub fn get(&self, name: &str) -> Option<&[Violation]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of categories that produced violations.
    pub fn categories(&self) -> usize {
        self.entries.len()
    }

    /// Total violation count across all categories.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, v)| v.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Violation])> {
        self.entries
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_slice()))
    }

    /// All violations in category order, flattened.
    pub fn all(&self) -> impl Iterator<Item = &Violation> {
        self.entries.iter().flat_map(|(_, v)| v.iter())
    }

    /// Count of violations at a given severity.
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.all().filter(|v| v.severity == severity).count()
    }

    /// Whether any error-level or critical-level violation is present.
    pub fn has_errors(&self) -> bool {
        self.all()
            .any(|v| matches!(v.severity, Severity::Critical | Severity::Error))
    }
}

impl Serialize for AnalysisResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, violations) in &self.entries {
            map.serialize_entry(name, violations)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Critical.to_string(), "critical");
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Notice.to_string(), "notice");
    }

    #[test]
    fn test_optional_fields_omitted_from_json() {
        let violation = Violation::new(Severity::Error, "WCAG 1.1.1", "img", "missing alt");
        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["auto_fixable"], false);
        assert!(json.get("src").is_none());
        assert!(json.get("suggestion").is_none());
        assert!(json.get("linkText").is_none());
    }

    #[test]
    fn test_link_text_serializes_camel_case() {
        let violation = Violation::new(Severity::Warning, "WCAG 2.4.4", "a", "url as text")
            .with_link_text("https://example.com");
        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(json["linkText"], "https://example.com");
    }

    #[test]
    fn test_result_omits_empty_categories() {
        let mut result = AnalysisResult::new();
        result.insert("images", vec![]);
        result.insert(
            "links",
            vec![Violation::new(Severity::Warning, "WCAG 2.4.4", "a", "m")],
        );
        assert!(result.get("images").is_none());
        assert_eq!(result.get("links").unwrap().len(), 1);
        assert_eq!(result.categories(), 1);
    }

    #[test]
    fn test_result_serializes_as_map_in_insertion_order() {
        let mut result = AnalysisResult::new();
        result.insert(
            "images",
            vec![Violation::new(Severity::Error, "WCAG 1.1.1", "img", "m")],
        );
        result.insert(
            "links",
            vec![Violation::new(Severity::Warning, "WCAG 2.4.4", "a", "m")],
        );
        let json = serde_json::to_string(&result).unwrap();
        let images_at = json.find("\"images\"").unwrap();
        let links_at = json.find("\"links\"").unwrap();
        assert!(images_at < links_at);
    }

    #[test]
    fn test_has_errors_counts_critical() {
        let mut result = AnalysisResult::new();
        result.insert(
            "language",
            vec![Violation::new(
                Severity::Critical,
                "WCAG 3.1.1, BFSG §3",
                "<html>",
                "m",
            )],
        );
        assert!(result.has_errors());
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("grüße", 3), "grü");
        assert_eq!(truncate("ab", 50), "ab");
    }
}
