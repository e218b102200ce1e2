// SPDX-License-Identifier: PMPL-1.0-or-later
//! Color contrast analyzer - WCAG 1.4.3 Contrast (Minimum)
//!
//! Reads inline `style` attributes only; external stylesheets and computed
//! styles are out of scope. Where both `color` and `background-color` are
//! declared, the WCAG contrast ratio is computed and checked against the
//! threshold for the configured conformance level. A value that fails to
//! parse makes a ratio judgement impossible, so the pair is skipped
//! silently rather than reported.

use crate::analyzers::Analyzer;
use crate::config::WcagLevel;
use crate::violation::{Severity, Violation};
use regex::Regex;
use scraper::{Html, Selector};

/// Hex fragments that commonly signal low-contrast light gray text.
const LIGHT_GRAY_FRAGMENTS: &[&str] = &["#999", "#aaa", "#bbb", "#ccc"];

pub struct ContrastAnalyzer {
    level: WcagLevel,
    threshold: f64,
    color_re: Regex,
    background_re: Regex,
}

impl ContrastAnalyzer {
    pub fn new(level: WcagLevel) -> Self {
        // Anchored at a declaration boundary so `background-color` never
        // satisfies the `color` lookup.
        let color_re =
            Regex::new(r"(?i)(?:^|;)\s*color\s*:\s*([^;]+)").expect("valid regex");
        let background_re =
            Regex::new(r"(?i)(?:^|;)\s*background-color\s*:\s*([^;]+)").expect("valid regex");
        Self {
            level,
            threshold: level.normal_text_threshold(),
            color_re,
            background_re,
        }
    }

    fn extract(&self, re: &Regex, style: &str) -> Option<String> {
        re.captures(style).map(|caps| caps[1].trim().to_string())
    }
}

impl Default for ContrastAnalyzer {
    fn default() -> Self {
        Self::new(WcagLevel::AA)
    }
}

impl Analyzer for ContrastAnalyzer {
    fn name(&self) -> &'static str {
        "contrast"
    }

    fn description(&self) -> &'static str {
        "Checks inline style color contrast ratios (WCAG 1.4.3)"
    }

    fn analyze(&self, document: &Html) -> Vec<Violation> {
        let styled_selector = Selector::parse("[style]").expect("valid selector");
        let placeholder_selector =
            Selector::parse("input[placeholder]").expect("valid selector");
        let disabled_selector = Selector::parse("[disabled]").expect("valid selector");
        let text_selector =
            Selector::parse("p, span, div, h1, h2, h3, h4, h5, h6").expect("valid selector");

        let mut violations = Vec::new();

        // Per-element ratio checks, document order.
        for element in document.select(&styled_selector) {
            let style = element.value().attr("style").unwrap_or("");
            let foreground = self.extract(&self.color_re, style);
            let background = self.extract(&self.background_re, style);

            if let (Some(fg), Some(bg)) = (foreground, background) {
                if let (Some(fg_rgb), Some(bg_rgb)) = (parse_color(&fg), parse_color(&bg)) {
                    let ratio = contrast_ratio(fg_rgb, bg_rgb);
                    if ratio < self.threshold {
                        violations.push(
                            Violation::new(
                                Severity::Error,
                                "WCAG 1.4.3",
                                element.value().name(),
                                format!("Insufficient color contrast ratio: {:.2}:1", ratio),
                            )
                            .with_colors(&fg, &bg)
                            .with_suggestion(&format!(
                                "Increase contrast to at least {:.1}:1 for WCAG {} compliance",
                                self.threshold, self.level
                            )),
                        );
                    }
                }
            }
        }

        // Aggregate pattern checks.
        let gray_count = document
            .select(&styled_selector)
            .filter(|el| {
                let style = el.value().attr("style").unwrap_or("");
                LIGHT_GRAY_FRAGMENTS.iter().any(|f| style.contains(f))
            })
            .count();
        if gray_count > 0 {
            violations.push(
                Violation::new(
                    Severity::Warning,
                    "WCAG 1.4.3",
                    "various",
                    "Light gray text may have insufficient contrast",
                )
                .with_count(gray_count)
                .with_suggestion("Review and test contrast ratios for these elements"),
            );
        }

        let placeholder_count = document.select(&placeholder_selector).count();
        if placeholder_count > 0 {
            violations.push(
                Violation::new(
                    Severity::Warning,
                    "WCAG 1.4.3",
                    "various",
                    "Placeholder text often has low contrast",
                )
                .with_count(placeholder_count)
                .with_suggestion("Review and test contrast ratios for these elements"),
            );
        }

        let disabled_count = document.select(&disabled_selector).count();
        if disabled_count > 0 {
            violations.push(
                Violation::new(
                    Severity::Warning,
                    "WCAG 1.4.3",
                    "various",
                    "Disabled elements should still meet minimum contrast requirements",
                )
                .with_count(disabled_count)
                .with_suggestion("Review and test contrast ratios for these elements"),
            );
        }

        // Text that sets a color but relies on an inherited background.
        let without_background = document
            .select(&text_selector)
            .filter(|el| {
                if el.value().name() == "div"
                    && !el.children().any(|child| child.value().is_text())
                {
                    return false;
                }
                let style = el.value().attr("style").unwrap_or("");
                style.contains("color:") && !style.contains("background")
            })
            .count();
        if without_background > 0 {
            violations.push(
                Violation::new(
                    Severity::Notice,
                    "WCAG 1.4.3",
                    "text elements",
                    format!(
                        "Found {} text element(s) with color but no explicit background",
                        without_background
                    ),
                )
                .with_suggestion("Ensure sufficient contrast with inherited or default backgrounds"),
            );
        }

        violations
    }
}

/// Parse a CSS color value into an RGB triple. Supports 6-digit hex,
/// 3-digit hex (expanded by digit doubling), `rgb(r, g, b)`, and a small
/// named-color table.
pub fn parse_color(value: &str) -> Option<(u8, u8, u8)> {
    let trimmed = value.trim().to_lowercase();

    let hex = trimmed.strip_prefix('#').unwrap_or(&trimmed);
    if hex.len() == 3 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
        let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
        let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
        return Some((r, g, b));
    }
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some((r, g, b));
    }

    if trimmed.starts_with("rgb") {
        let re = Regex::new(r"rgb\s*\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*\)").ok()?;
        let caps = re.captures(&trimmed)?;
        let r: u8 = caps[1].parse().ok()?;
        let g: u8 = caps[2].parse().ok()?;
        let b: u8 = caps[3].parse().ok()?;
        return Some((r, g, b));
    }

    match trimmed.as_str() {
        "white" => Some((255, 255, 255)),
        "black" => Some((0, 0, 0)),
        "red" => Some((255, 0, 0)),
        "green" => Some((0, 128, 0)),
        "blue" => Some((0, 0, 255)),
        "gray" | "grey" => Some((128, 128, 128)),
        _ => None,
    }
}

/// Relative luminance per WCAG 2.x.
/// <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
pub fn relative_luminance(rgb: (u8, u8, u8)) -> f64 {
    let linear = [rgb.0, rgb.1, rgb.2].map(|channel| {
        let srgb = channel as f64 / 255.0;
        if srgb <= 0.03928 {
            srgb / 12.92
        } else {
            ((srgb + 0.055) / 1.055).powf(2.4)
        }
    });
    0.2126 * linear[0] + 0.7152 * linear[1] + 0.0722 * linear[2]
}

/// Contrast ratio between two colors, always >= 1.0.
pub fn contrast_ratio(a: (u8, u8, u8), b: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}
