//! Diagnostics produced while planning a sheet.
//!
//! The engine never fails on a malformed template or an out-of-range request.
//! It repairs the input and records what it did here, so the caller decides
//! whether and how to surface it.

use std::fmt;

use serde::Serialize;

/// A note about an input the engine had to repair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub category: DiagnosticCategory,
    pub message: String,
}

/// How much a diagnostic matters to the printed result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The request was clamped to documented bounds; output is as expected.
    Info,
    /// The template itself was repaired; printed output may not match the stock.
    Warning,
}

/// Which part of the input a diagnostic is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    Grid,
    Pitch,
    Dimension,
    Fit,
    Request,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Grid => write!(f, "grid"),
            DiagnosticCategory::Pitch => write!(f, "pitch"),
            DiagnosticCategory::Dimension => write!(f, "dimension"),
            DiagnosticCategory::Fit => write!(f, "fit"),
            DiagnosticCategory::Request => write!(f, "request"),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

impl Diagnostic {
    pub fn warning(category: DiagnosticCategory, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            category,
            message: message.into(),
        }
    }

    pub fn info(category: DiagnosticCategory, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            category,
            message: message.into(),
        }
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}
