// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration for wcagcheck
//!
//! Configuration is always passed explicitly into [`crate::Checker::new`];
//! there is no ambient or global lookup. All checks default to enabled and
//! the compliance level defaults to AA, the level the BFSG requires.

use crate::error::{CheckError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// WCAG conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum WcagLevel {
    A,
    #[default]
    AA,
    AAA,
}

impl WcagLevel {
    /// Minimum contrast ratio for normal-size text at this level.
    ///
    /// Level A has no contrast requirement of its own; the AA table is
    /// applied as a floor.
    pub fn normal_text_threshold(self) -> f64 {
        match self {
            WcagLevel::A | WcagLevel::AA => 4.5,
            WcagLevel::AAA => 7.0,
        }
    }

    /// Minimum contrast ratio for large text (18pt+, or 14pt+ bold).
    pub fn large_text_threshold(self) -> f64 {
        match self {
            WcagLevel::A | WcagLevel::AA => 3.0,
            WcagLevel::AAA => 4.5,
        }
    }
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WcagLevel::A => write!(f, "A"),
            WcagLevel::AA => write!(f, "AA"),
            WcagLevel::AAA => write!(f, "AAA"),
        }
    }
}

/// Which of the eight analyzers run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecksConfig {
    pub images: bool,
    pub forms: bool,
    pub headings: bool,
    pub contrast: bool,
    pub aria: bool,
    pub links: bool,
    pub keyboard: bool,
    pub language: bool,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            images: true,
            forms: true,
            headings: true,
            contrast: true,
            aria: true,
            links: true,
            keyboard: true,
            language: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    pub checks: ChecksConfig,
    pub compliance_level: WcagLevel,
}

impl CheckerConfig {
    /// Disable a check by its result-map name. Returns false for an
    /// unknown name.
    pub fn disable(&mut self, name: &str) -> bool {
        match name {
            "images" => self.checks.images = false,
            "forms" => self.checks.forms = false,
            "headings" => self.checks.headings = false,
            "contrast" => self.checks.contrast = false,
            "aria" => self.checks.aria = false,
            "links" => self.checks.links = false,
            "keyboard" => self.checks.keyboard = false,
            "language" => self.checks.language = false,
            _ => return false,
        }
        true
    }
}

/// Load configuration from a YAML file, falling back to defaults when the
/// file does not exist.
pub fn load_config(path: &Path) -> Result<CheckerConfig> {
    if !path.exists() {
        return Ok(CheckerConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&content)
        .map_err(|e| CheckError::Config(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_all_checks() {
        let config = CheckerConfig::default();
        assert!(config.checks.images && config.checks.language);
        assert_eq!(config.compliance_level, WcagLevel::AA);
    }

    #[test]
    fn test_thresholds_per_level() {
        assert_eq!(WcagLevel::AA.normal_text_threshold(), 4.5);
        assert_eq!(WcagLevel::AA.large_text_threshold(), 3.0);
        assert_eq!(WcagLevel::AAA.normal_text_threshold(), 7.0);
        assert_eq!(WcagLevel::AAA.large_text_threshold(), 4.5);
        assert_eq!(WcagLevel::A.normal_text_threshold(), 4.5);
    }

    #[test]
    fn test_disable_by_name() {
        let mut config = CheckerConfig::default();
        assert!(config.disable("contrast"));
        assert!(!config.checks.contrast);
        assert!(!config.disable("nonsense"));
    }

    #[test]
    fn test_partial_yaml_merges_with_defaults() {
        let config: CheckerConfig =
            serde_yaml::from_str("checks:\n  images: false\n").unwrap();
        assert!(!config.checks.images);
        assert!(config.checks.forms);
        assert_eq!(config.compliance_level, WcagLevel::AA);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = load_config(Path::new("/nonexistent/wcagcheck.yml")).unwrap();
        assert_eq!(config, CheckerConfig::default());
    }
}
