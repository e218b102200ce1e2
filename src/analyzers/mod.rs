// SPDX-License-Identifier: PMPL-1.0-or-later
//! Accessibility rule analyzers.
//!
//! Each analyzer walks a parsed document independently and emits
//! [`crate::Violation`] records for one category of defects. Analyzers
//! share no state and never mutate the tree, so a document can be handed
//! to all of them in any order (or in parallel) with identical results.
//!
//! Per-element violations are emitted in document (pre-order) sequence of
//! the triggering element; aggregate findings are appended afterwards.

pub mod aria;
pub mod contrast;
pub mod forms;
pub mod headings;
pub mod images;
pub mod keyboard;
pub mod language;
pub mod links;

pub use aria::AriaAnalyzer;
pub use contrast::ContrastAnalyzer;
pub use forms::FormAnalyzer;
pub use headings::HeadingAnalyzer;
pub use images::ImageAnalyzer;
pub use keyboard::KeyboardNavigationAnalyzer;
pub use language::{
    FunctionWordDetector, LanguageAnalyzer, LanguageStats, MixedLanguageDetector,
};
pub use links::LinkAnalyzer;

use crate::violation::Violation;
use scraper::Html;

/// Trait implemented by all analyzers.
pub trait Analyzer: Send + Sync {
    /// Key under which this analyzer's violations appear in the result map.
    fn name(&self) -> &'static str;

    /// Short description of what this analyzer checks.
    fn description(&self) -> &'static str;

    /// Walk the document and return violations in document order.
    fn analyze(&self, document: &Html) -> Vec<Violation>;
}
