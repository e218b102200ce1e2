// SPDX-License-Identifier: PMPL-1.0-or-later
//! Form labelling analyzer - WCAG 1.3.1 / 3.3.2
//!
//! Form controls need a programmatically associated label: a `<label for>`
//! pointing at the control's id, or an aria-label/aria-labelledby. Forms
//! themselves should carry a label or contain a heading/legend, and
//! required controls should announce themselves via `aria-required`.

use crate::analyzers::Analyzer;
use crate::violation::{Severity, Violation};
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;

/// Input types that never need a visible label.
const EXEMPT_INPUT_TYPES: &[&str] = &["hidden", "submit", "button"];

pub struct FormAnalyzer;

impl Analyzer for FormAnalyzer {
    fn name(&self) -> &'static str {
        "forms"
    }

    fn description(&self) -> &'static str {
        "Checks form controls for associated labels (WCAG 1.3.1, 3.3.2)"
    }

    fn analyze(&self, document: &Html) -> Vec<Violation> {
        let label_selector = Selector::parse("label[for]").expect("valid selector");
        let control_selector =
            Selector::parse("input, textarea, select, form").expect("valid selector");

        // Collected up front so control ids are matched structurally, never
        // by interpolating attribute values into a query.
        let label_targets: HashSet<&str> = document
            .select(&label_selector)
            .filter_map(|label| label.value().attr("for"))
            .collect();

        let mut violations = Vec::new();

        for element in document.select(&control_selector) {
            let tag = element.value().name();

            if tag == "form" {
                check_form_labelling(&element, &mut violations);
                continue;
            }

            let input_type = element.value().attr("type").unwrap_or("");
            let exempt = tag == "input" && EXEMPT_INPUT_TYPES.contains(&input_type);
            let has_aria_label = element.value().attr("aria-label").is_some()
                || element.value().attr("aria-labelledby").is_some();

            if !exempt && !has_aria_label {
                let has_label = element
                    .value()
                    .attr("id")
                    .map(|id| label_targets.contains(id))
                    .unwrap_or(false);

                if !has_label {
                    violations.push(
                        Violation::new(
                            Severity::Error,
                            "WCAG 1.3.1, 3.3.2",
                            tag,
                            unlabelled_message(tag),
                        )
                        .with_name(control_name(&element))
                        .with_suggestion("Add a <label> element or aria-label attribute"),
                    );
                }
            }

            if element.value().attr("required").is_some()
                && element.value().attr("aria-required") != Some("true")
            {
                violations.push(
                    Violation::new(
                        Severity::Warning,
                        "WCAG 3.3.2",
                        tag,
                        "Required field without aria-required attribute",
                    )
                    .with_name(control_name(&element))
                    .with_suggestion("Add aria-required=\"true\" for better screen reader support")
                    .auto_fixable(),
                );
            }
        }

        violations
    }
}

fn unlabelled_message(tag: &str) -> &'static str {
    match tag {
        "textarea" => "Textarea without associated label",
        "select" => "Select without associated label",
        _ => "Form input without associated label",
    }
}

fn control_name<'a>(element: &ElementRef<'a>) -> &'a str {
    match element.value().attr("name") {
        Some(name) if !name.is_empty() => name,
        _ => "unnamed",
    }
}

/// A form without aria labelling should at least contain a heading or a
/// legend that describes its purpose.
fn check_form_labelling(form: &ElementRef, violations: &mut Vec<Violation>) {
    if form.value().attr("aria-label").is_some()
        || form.value().attr("aria-labelledby").is_some()
    {
        return;
    }

    let has_heading = form.descendants().filter_map(ElementRef::wrap).any(|el| {
        matches!(
            el.value().name(),
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "legend"
        )
    });

    if !has_heading {
        violations.push(
            Violation::new(
                Severity::Warning,
                "WCAG 1.3.1",
                "form",
                "Form without descriptive label or heading",
            )
            .with_suggestion("Add aria-label to the form or include a heading/legend"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(html: &str) -> Vec<Violation> {
        FormAnalyzer.analyze(&Html::parse_document(html))
    }

    #[test]
    fn test_input_without_label_is_error() {
        let html = r#"<html><body><form aria-label="f"><input type="text" name="email"></form></body></html>"#;
        let violations = analyze(html);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "Form input without associated label");
        assert_eq!(violations[0].severity, Severity::Error);
        assert_eq!(violations[0].name.as_deref(), Some("email"));
    }

    #[test]
    fn test_input_with_matching_label_is_clean() {
        let html = r#"
            <html><body><form aria-label="f">
                <label for="email">Email address</label>
                <input type="text" id="email" name="email">
            </form></body></html>
        "#;
        assert!(analyze(html).is_empty());
    }

    #[test]
    fn test_input_with_aria_label_is_clean() {
        let html = r#"<html><body><form aria-label="f"><input type="text" aria-label="Email"></form></body></html>"#;
        assert!(analyze(html).is_empty());
    }

    #[test]
    fn test_hidden_submit_button_inputs_are_exempt() {
        let html = r#"
            <html><body><form aria-label="f">
                <input type="hidden" name="token">
                <input type="submit" value="Go">
                <input type="button" value="Reset">
            </form></body></html>
        "#;
        assert!(analyze(html).is_empty());
    }

    #[test]
    fn test_textarea_and_select_messages() {
        let html = r#"
            <html><body><form aria-label="f">
                <textarea name="bio"></textarea>
                <select name="country"></select>
            </form></body></html>
        "#;
        let violations = analyze(html);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].message, "Textarea without associated label");
        assert_eq!(violations[1].message, "Select without associated label");
    }

    #[test]
    fn test_unnamed_control_reported_as_unnamed() {
        let html = r#"<html><body><form aria-label="f"><input type="text"></form></body></html>"#;
        let violations = analyze(html);
        assert_eq!(violations[0].name.as_deref(), Some("unnamed"));
    }

    #[test]
    fn test_form_without_heading_is_warning() {
        let html = r#"
            <html><body><form>
                <label for="q">Query</label>
                <input type="text" id="q" name="q">
            </form></body></html>
        "#;
        let violations = analyze(html);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "Form without descriptive label or heading"
        );
        assert_eq!(violations[0].severity, Severity::Warning);
    }

    #[test]
    fn test_form_with_legend_is_clean() {
        let html = r#"
            <html><body><form>
                <fieldset><legend>Contact</legend>
                    <label for="q">Query</label>
                    <input type="text" id="q" name="q">
                </fieldset>
            </form></body></html>
        "#;
        assert!(analyze(html).is_empty());
    }

    #[test]
    fn test_required_without_aria_required_is_fixable_warning() {
        let html = r#"
            <html><body><form aria-label="f">
                <label for="n">Name</label>
                <input type="text" id="n" name="n" required>
            </form></body></html>
        "#;
        let violations = analyze(html);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "Required field without aria-required attribute"
        );
        assert!(violations[0].auto_fixable);
    }

    #[test]
    fn test_required_with_aria_required_is_clean() {
        let html = r#"
            <html><body><form aria-label="f">
                <label for="n">Name</label>
                <input type="text" id="n" name="n" required aria-required="true">
            </form></body></html>
        "#;
        assert!(analyze(html).is_empty());
    }

    #[test]
    fn test_unlabelled_required_control_emits_both_violations() {
        let html = r#"<html><body><form aria-label="f"><input type="text" name="n" required></form></body></html>"#;
        let violations = analyze(html);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].severity, Severity::Error);
        assert_eq!(violations[1].severity, Severity::Warning);
    }
}
