// SPDX-License-Identifier: PMPL-1.0-or-later
//! Keyboard navigation analyzer - WCAG 2.1.1 / 2.4.x
//!
//! Static checks only: inline event handler attributes, tabindex values
//! and modal markup. Behavior wired up purely in script is invisible
//! here. Page-level findings (skip link, tabindex ordering) come after
//! the per-element pass.

use crate::analyzers::Analyzer;
use crate::violation::{Severity, Violation};
use scraper::{Html, Selector};

const INTERACTIVE_TAGS: &[&str] = &[
    "a", "button", "input", "select", "textarea", "audio", "video", "iframe", "embed", "object",
];

/// Roles that imply the element is focusable on its own.
const FOCUSABLE_ROLES: &[&str] = &[
    "button", "link", "textbox", "menuitem", "tab", "checkbox", "radio", "combobox", "slider",
];

const MOUSE_EVENTS: &[&str] = &["onmouseover", "onmouseout", "onmousedown", "onmouseup"];

const KEYBOARD_EVENTS: &[&str] = &["onkeydown", "onkeyup", "onkeypress", "onfocus", "onblur"];

const SKIP_LINK_WORDS: &[&str] = &["skip", "jump", "main"];

pub struct KeyboardNavigationAnalyzer;

impl Analyzer for KeyboardNavigationAnalyzer {
    fn name(&self) -> &'static str {
        "keyboard"
    }

    fn description(&self) -> &'static str {
        "Checks keyboard operability and focus order (WCAG 2.1.1)"
    }

    fn analyze(&self, document: &Html) -> Vec<Violation> {
        let all_selector = Selector::parse("*").expect("valid selector");
        let body_anchor_selector = Selector::parse("body a").expect("valid selector");
        let tabindex_selector = Selector::parse("[tabindex]").expect("valid selector");

        let mut violations = Vec::new();

        for element in document.select(&all_selector) {
            let tag = element.value().name();
            let role = element.value().attr("role").unwrap_or("");
            let class = element.value().attr("class").unwrap_or("");
            let tabindex = element.value().attr("tabindex");

            let is_modal =
                role == "dialog" || role == "alertdialog" || class.contains("modal");
            if is_modal {
                if element.value().attr("aria-modal") != Some("true") {
                    violations.push(
                        Violation::new(
                            Severity::Error,
                            "WCAG 2.1.2",
                            tag,
                            "Modal/dialog without aria-modal=\"true\" may create keyboard trap",
                        )
                        .with_suggestion(
                            "Add aria-modal=\"true\" and implement focus management",
                        )
                        .auto_fixable(),
                    );
                }
                if element.value().attr("aria-label").is_none()
                    && element.value().attr("aria-labelledby").is_none()
                {
                    violations.push(
                        Violation::new(
                            Severity::Error,
                            "WCAG 4.1.2",
                            tag,
                            "Modal/dialog without accessible name",
                        )
                        .with_suggestion(
                            "Add aria-label or aria-labelledby to identify the modal",
                        ),
                    );
                }
            }

            // A disabled interactive element is exempt from the tab-order
            // checks but never falls through to the non-interactive branch.
            if INTERACTIVE_TAGS.contains(&tag) {
                if element.value().attr("disabled").is_none() {
                    if tabindex == Some("-1") {
                        violations.push(
                            Violation::new(
                                Severity::Warning,
                                "WCAG 2.1.1",
                                tag,
                                format!("Interactive {} removed from tab order", tag),
                            )
                            .with_suggestion(
                                "Ensure element is still keyboard accessible via other means",
                            )
                            .auto_fixable(),
                        );
                    }
                    if tag == "a" && element.value().attr("href").is_none() {
                        violations.push(
                            Violation::new(
                                Severity::Error,
                                "WCAG 2.1.1",
                                tag,
                                "Link without href is not keyboard accessible",
                            )
                            .with_suggestion(
                                "Add href attribute or use button element for actions",
                            ),
                        );
                    }
                }
            } else if element.value().attr("onclick").is_some()
                && !FOCUSABLE_ROLES.contains(&role)
                && (tabindex.is_none() || tabindex == Some("-1"))
            {
                violations.push(
                    Violation::new(
                        Severity::Error,
                        "WCAG 2.1.1",
                        tag,
                        "Non-interactive element with click handler is not keyboard accessible",
                    )
                    .with_suggestion(
                        "Add tabindex=\"0\" and keyboard event handlers (onkeydown/onkeyup)",
                    )
                    .auto_fixable(),
                );
            }

            let has_mouse_event = MOUSE_EVENTS
                .iter()
                .any(|event| element.value().attr(event).is_some());
            let has_keyboard_event = KEYBOARD_EVENTS
                .iter()
                .any(|event| element.value().attr(event).is_some());
            if has_mouse_event && !has_keyboard_event {
                violations.push(
                    Violation::new(
                        Severity::Warning,
                        "WCAG 2.1.1",
                        tag,
                        "Element with mouse events lacks keyboard event handlers",
                    )
                    .with_suggestion(
                        "Add equivalent keyboard event handlers for all mouse interactions",
                    ),
                );
            }
        }

        // A skip link should be among the first few links on the page.
        let has_skip_link = document.select(&body_anchor_selector).take(3).any(|a| {
            let href = a.value().attr("href").unwrap_or("");
            let text: String = a.text().collect::<String>().to_lowercase();
            href.starts_with('#') && SKIP_LINK_WORDS.iter().any(|word| text.contains(word))
        });
        if !has_skip_link {
            violations.push(
                Violation::new(
                    Severity::Warning,
                    "WCAG 2.4.1",
                    "navigation",
                    "No skip link found at the beginning of the page",
                )
                .with_suggestion("Add a skip link to main content for keyboard users")
                .with_fix_example(
                    r##"<a href="#main" class="skip-link">Skip to main content</a>"##,
                )
                .auto_fixable(),
            );
        }

        let tabindex_values: Vec<i32> = document
            .select(&tabindex_selector)
            .filter_map(|el| el.value().attr("tabindex"))
            .map(|value| value.trim().parse().unwrap_or(0))
            .collect();
        let positive = tabindex_values.iter().filter(|&&v| v > 0).count();
        if positive > 0 && positive < tabindex_values.len() {
            violations.push(
                Violation::new(
                    Severity::Warning,
                    "WCAG 2.4.3",
                    "various",
                    "Mixed tabindex values can create confusing navigation order",
                )
                .with_count(positive)
                .with_suggestion(
                    "Use tabindex=\"0\" for natural flow or tabindex=\"-1\" to remove from tab order",
                ),
            );
        }
        if positive > 0 {
            violations.push(
                Violation::new(
                    Severity::Warning,
                    "WCAG 2.4.3",
                    "various",
                    format!("Found {} element(s) with positive tabindex", positive),
                )
                .with_suggestion(
                    "Avoid positive tabindex values; use DOM order for natural tab flow",
                )
                .auto_fixable(),
            );
        }

        violations
    }
}
