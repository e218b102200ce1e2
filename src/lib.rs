// SPDX-License-Identifier: PMPL-1.0-or-later
//! wcagcheck - WCAG/BFSG accessibility checker for HTML documents.
//!
//! Parses markup with a real HTML5 parser and runs a set of independent
//! analyzers over the document, each covering one accessibility concern.
//! Violations come back grouped by analyzer, in document order, with
//! stable output: the same markup and configuration always produce the
//! same result.
//!
//! ## Analyzers
//!
//! - **images** (1.1.1): alt text presence and decorative-image marking
//! - **forms** (1.3.1/3.3.2): label association and required-field hints
//! - **headings** (1.3.1/2.4.6): hierarchy, empty and duplicate headings
//! - **contrast** (1.4.3): inline-style color contrast ratios
//! - **aria** (4.1.2): role validity, required states, ID references
//! - **links** (2.4.4): link text quality and link behavior
//! - **keyboard** (2.1.1): focus order, skip links, event handler parity
//! - **language** (3.1.1/3.1.2): lang declarations and language changes
//!
//! ## Example
//!
//! ```
//! use wcagcheck::Checker;
//!
//! let mut checker = Checker::with_defaults();
//! let result = checker.analyze("<html><body><img src='x.png'></body></html>").unwrap();
//! assert!(result.has_errors());
//! ```

pub mod analyzers;
pub mod checker;
pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod violation;

pub use checker::Checker;
pub use config::{load_config, CheckerConfig, ChecksConfig, WcagLevel};
pub use error::{CheckError, Result};
pub use violation::{AnalysisResult, ColorPair, Severity, Violation};
