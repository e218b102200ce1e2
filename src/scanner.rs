// SPDX-License-Identifier: PMPL-1.0-or-later
//! Directory scanner for running accessibility analysis across a project.
//!
//! Walks directory trees, picks up HTML files, and runs the configured
//! checker over each one.

use crate::checker::Checker;
use crate::config::CheckerConfig;
use crate::error::Result;
use crate::violation::AnalysisResult;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

/// File extensions to scan
const SCANNABLE_EXTENSIONS: &[&str] = &["html", "htm"];

/// Directories to skip
const SKIP_DIRS: &[&str] = &[
    "node_modules", ".git", "target", "dist", "build",
    "_build", "vendor", ".next", ".nuxt", "coverage",
];

/// Analysis result for a single file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: AnalysisResult,
}

/// Scan a directory tree for accessibility issues in HTML files.
pub fn scan_directory(dir: &Path, config: &CheckerConfig) -> Result<Vec<FileReport>> {
    let mut reports = Vec::new();
    let mut files_scanned = 0;

    info!("Scanning directory: {}", dir.display());

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            // Skip hidden and excluded directories
            let name = e.file_name().to_str().unwrap_or("");
            if e.file_type().is_dir() {
                return !SKIP_DIRS.contains(&name) && !name.starts_with('.');
            }
            true
        })
    {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        if !SCANNABLE_EXTENSIONS.contains(&ext) {
            continue;
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                info!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let mut checker = Checker::new(config);
        let result = match checker.analyze(&content) {
            Ok(result) => result.clone(),
            Err(e) => {
                info!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        reports.push(FileReport {
            path: path.to_path_buf(),
            result,
        });
        files_scanned += 1;
    }

    let total: usize = reports.iter().map(|r| r.result.total()).sum();
    info!("Scanned {} files, found {} issues", files_scanned, total);

    Ok(reports)
}

/// Scan a single HTML file.
pub fn scan_file(path: &Path, config: &CheckerConfig) -> Result<FileReport> {
    let content = std::fs::read_to_string(path)?;
    let mut checker = Checker::new(config);
    let result = checker.analyze(&content)?.clone();
    Ok(FileReport {
        path: path.to_path_buf(),
        result,
    })
}
