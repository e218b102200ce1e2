// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report generation for analysis results.
//!
//! Supports two output formats:
//! - Text: human-readable, grouped by analyzer with WCAG rule references
//! - JSON: the analyzer-name -> violations map for programmatic consumption

use crate::violation::{AnalysisResult, Severity, Violation};

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Generate a report from an analysis result
pub fn generate_report(result: &AnalysisResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => generate_text_report(result),
        OutputFormat::Json => generate_json_report(result),
    }
}

/// Generate human-readable text report
fn generate_text_report(result: &AnalysisResult) -> String {
    let mut output = String::new();

    output.push_str("=== wcagcheck Accessibility Report ===\n\n");

    if result.is_empty() {
        output.push_str("No accessibility issues found. All checks passed.\n");
        return output;
    }

    let critical = result.count_by_severity(Severity::Critical);
    let errors = result.count_by_severity(Severity::Error);
    let warnings = result.count_by_severity(Severity::Warning);
    let notices = result.count_by_severity(Severity::Notice);

    output.push_str(&format!(
        "Found {} issue(s): {} critical, {} error(s), {} warning(s), {} notice(s)\n\n",
        result.total(),
        critical,
        errors,
        warnings,
        notices
    ));

    for (category, violations) in result.iter() {
        output.push_str(&format!("--- {} ({}) ---\n", category, violations.len()));

        for violation in violations {
            output.push_str(&format!(
                "[{}] {}: {}\n",
                violation.severity, violation.rule, violation.message
            ));
            output.push_str(&format!("  Element: {}\n", violation.element));

            for (label, value) in detail_fields(violation) {
                output.push_str(&format!("  {}: {}\n", label, value));
            }

            if let Some(ref suggestion) = violation.suggestion {
                output.push_str(&format!("  Fix: {}\n", suggestion));
            }
            if violation.auto_fixable {
                output.push_str("  Auto-fixable: yes\n");
            }

            output.push('\n');
        }
    }

    if result.has_errors() {
        output.push_str("RESULT: FAIL (critical or error issues found)\n");
    } else if warnings > 0 {
        output.push_str("RESULT: PASS WITH WARNINGS\n");
    } else {
        output.push_str("RESULT: PASS\n");
    }

    output
}

fn detail_fields(violation: &Violation) -> Vec<(&'static str, String)> {
    let mut fields = Vec::new();
    if let Some(ref src) = violation.src {
        fields.push(("Source", src.clone()));
    }
    if let Some(ref href) = violation.href {
        fields.push(("Href", href.clone()));
    }
    if let Some(ref name) = violation.name {
        fields.push(("Name", name.clone()));
    }
    if let Some(ref content) = violation.content {
        fields.push(("Content", content.clone()));
    }
    if let Some(ref colors) = violation.colors {
        fields.push((
            "Colors",
            format!("{} on {}", colors.foreground, colors.background),
        ));
    }
    if let Some(count) = violation.count {
        fields.push(("Count", count.to_string()));
    }
    if let Some(ref text) = violation.link_text {
        fields.push(("Link text", text.clone()));
    }
    if let Some(ref example) = violation.fix_example {
        fields.push(("Example", example.clone()));
    }
    fields
}

/// Generate JSON report
fn generate_json_report(result: &AnalysisResult) -> String {
    serde_json::to_string_pretty(result)
        .unwrap_or_else(|e| format!("{{\"error\": \"Failed to serialize result: {}\"}}", e))
}
