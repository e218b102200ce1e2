// SPDX-License-Identifier: PMPL-1.0-or-later
//! ARIA usage analyzer - WCAG 4.1.2 Name, Role, Value
//!
//! Validates role tokens against the WAI-ARIA 1.1 role list, flags roles
//! that merely restate an element's implicit semantics, and checks the
//! required state attributes for roles that demand them. ID references in
//! aria-labelledby/aria-describedby are resolved against the set of ids
//! actually present in the document.

use crate::analyzers::Analyzer;
use crate::violation::{Severity, Violation};
use scraper::{Html, Selector};
use std::collections::HashSet;

/// Role tokens defined by WAI-ARIA 1.1.
const VALID_ROLES: &[&str] = &[
    "alert",
    "alertdialog",
    "application",
    "article",
    "banner",
    "button",
    "checkbox",
    "columnheader",
    "combobox",
    "complementary",
    "contentinfo",
    "definition",
    "dialog",
    "directory",
    "document",
    "feed",
    "figure",
    "form",
    "grid",
    "gridcell",
    "group",
    "heading",
    "img",
    "link",
    "list",
    "listbox",
    "listitem",
    "log",
    "main",
    "marquee",
    "math",
    "menu",
    "menubar",
    "menuitem",
    "menuitemcheckbox",
    "menuitemradio",
    "navigation",
    "none",
    "note",
    "option",
    "presentation",
    "progressbar",
    "radio",
    "radiogroup",
    "region",
    "row",
    "rowgroup",
    "rowheader",
    "scrollbar",
    "search",
    "searchbox",
    "separator",
    "slider",
    "spinbutton",
    "status",
    "switch",
    "tab",
    "table",
    "tablist",
    "tabpanel",
    "term",
    "textbox",
    "timer",
    "toolbar",
    "tooltip",
    "tree",
    "treegrid",
    "treeitem",
];

/// Natively focusable elements; hiding them from assistive technology
/// while leaving them in the tab order is always wrong.
const FOCUSABLE_TAGS: &[&str] = &["a", "button", "input", "select", "textarea"];

const NON_INTERACTIVE_TAGS: &[&str] =
    &["div", "span", "p", "h1", "h2", "h3", "h4", "h5", "h6"];

/// State attributes that only make sense on interactive elements.
const STATE_ATTRS: &[&str] = &["aria-pressed", "aria-checked", "aria-selected"];

const INTERACTIVE_ROLES: &[&str] = &[
    "button", "checkbox", "link", "menuitem", "option", "radio", "switch", "tab",
];

/// Attributes a role cannot function without.
fn required_attrs(role: &str) -> &'static [&'static str] {
    match role {
        "checkbox" => &["aria-checked"],
        "combobox" => &["aria-expanded"],
        "slider" => &["aria-valuenow", "aria-valuemin", "aria-valuemax"],
        "spinbutton" => &["aria-valuenow"],
        _ => &[],
    }
}

/// Implicit ARIA role of an element, where one exists.
fn implicit_role(tag: &str, input_type: &str) -> Option<&'static str> {
    match tag {
        "button" => Some("button"),
        "a" => Some("link"),
        "article" => Some("article"),
        "aside" => Some("complementary"),
        "footer" => Some("contentinfo"),
        "header" => Some("banner"),
        "main" => Some("main"),
        "nav" => Some("navigation"),
        "section" => Some("region"),
        "input" => match input_type {
            "button" => Some("button"),
            "checkbox" => Some("checkbox"),
            "radio" => Some("radio"),
            "range" => Some("slider"),
            _ => None,
        },
        _ => None,
    }
}

pub struct AriaAnalyzer;

impl Analyzer for AriaAnalyzer {
    fn name(&self) -> &'static str {
        "aria"
    }

    fn description(&self) -> &'static str {
        "Checks ARIA roles, states and ID references (WCAG 4.1.2)"
    }

    fn analyze(&self, document: &Html) -> Vec<Violation> {
        let all_selector = Selector::parse("*").expect("valid selector");
        let id_selector = Selector::parse("[id]").expect("valid selector");

        let ids: HashSet<&str> = document
            .select(&id_selector)
            .filter_map(|el| el.value().attr("id"))
            .collect();

        let mut violations = Vec::new();

        for element in document.select(&all_selector) {
            let tag = element.value().name();

            if let Some(role) = element.value().attr("role") {
                if !VALID_ROLES.contains(&role) {
                    violations.push(
                        Violation::new(
                            Severity::Error,
                            "WCAG 4.1.2",
                            tag,
                            format!("Invalid ARIA role: '{}'", role),
                        )
                        .with_suggestion(
                            "Use a valid ARIA role from the WAI-ARIA specification",
                        ),
                    );
                } else {
                    let input_type = element.value().attr("type").unwrap_or("");
                    if implicit_role(tag, input_type) == Some(role) {
                        violations.push(
                            Violation::new(
                                Severity::Warning,
                                "WCAG 4.1.2",
                                tag,
                                format!("Redundant ARIA role '{}' on {}", role, tag),
                            )
                            .with_suggestion("Remove redundant role attribute")
                            .auto_fixable(),
                        );
                    }

                    for attr in required_attrs(role) {
                        if element.value().attr(attr).is_none() {
                            violations.push(
                                Violation::new(
                                    Severity::Error,
                                    "WCAG 4.1.2",
                                    tag,
                                    format!("Role '{}' requires {} attribute", role, attr),
                                )
                                .with_suggestion(&format!(
                                    "Add {} attribute to element with role='{}'",
                                    attr, role
                                )),
                            );
                        }
                    }
                }
            }

            if FOCUSABLE_TAGS.contains(&tag)
                && element.value().attr("aria-hidden") == Some("true")
            {
                violations.push(
                    Violation::new(
                        Severity::Error,
                        "WCAG 4.1.2",
                        tag,
                        "Focusable element with aria-hidden=\"true\"",
                    )
                    .with_suggestion("Remove aria-hidden or make element non-focusable"),
                );
            }

            if element.value().attr("aria-label").is_some()
                && element.value().attr("aria-labelledby").is_some()
            {
                violations.push(
                    Violation::new(
                        Severity::Warning,
                        "WCAG 4.1.2",
                        tag,
                        "Element has both aria-label and aria-labelledby",
                    )
                    .with_suggestion("Use either aria-label or aria-labelledby, not both"),
                );
            }

            for attr in ["aria-labelledby", "aria-describedby"] {
                if let Some(refs) = element.value().attr(attr) {
                    for token in refs.split(' ').map(str::trim).filter(|t| !t.is_empty()) {
                        if !ids.contains(token) {
                            violations.push(
                                Violation::new(
                                    Severity::Error,
                                    "WCAG 1.3.1, 4.1.2",
                                    tag,
                                    format!("{} references non-existent ID: '{}'", attr, token),
                                )
                                .with_suggestion(
                                    "Ensure the referenced ID exists in the document",
                                ),
                            );
                        }
                    }
                }
            }

            if NON_INTERACTIVE_TAGS.contains(&tag) {
                let role = element.value().attr("role").unwrap_or("");
                if !INTERACTIVE_ROLES.contains(&role) {
                    for attr in STATE_ATTRS {
                        if element.value().attr(attr).is_some() {
                            violations.push(
                                Violation::new(
                                    Severity::Warning,
                                    "WCAG 4.1.2",
                                    tag,
                                    format!(
                                        "Interactive ARIA attribute '{}' on non-interactive element",
                                        attr
                                    ),
                                )
                                .with_suggestion(
                                    "Add an appropriate interactive role or remove the attribute",
                                ),
                            );
                        }
                    }
                }
            }
        }

        violations
    }
}
