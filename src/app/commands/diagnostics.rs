use std::fmt;

use crate::domain::Violation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
        }
    }
}

/// One finding about the declaration file.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub file: String,
    pub message: String,
    pub severity: Severity,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity.label(), self.file, self.message)
    }
}

/// Findings of a check run, in the order they were raised.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    fn push(&mut self, severity: Severity, file: impl Into<String>, message: impl Into<String>) {
        self.entries.push(Diagnostic { file: file.into(), message: message.into(), severity });
    }

    pub fn push_error(&mut self, file: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Error, file, message);
    }

    pub fn push_warning(&mut self, file: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Warning, file, message);
    }

    /// Every violation becomes an error, keeping the validator's order.
    pub fn push_violations(&mut self, file: &str, violations: &[Violation]) {
        for violation in violations {
            self.push_error(file, violation.to_string());
        }
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(move |d| d.severity == severity)
    }

    pub fn errors(&self) -> Vec<&Diagnostic> {
        self.with_severity(Severity::Error).collect()
    }

    pub fn warnings(&self) -> Vec<&Diagnostic> {
        self.with_severity(Severity::Warning).collect()
    }

    pub fn error_count(&self) -> usize {
        self.with_severity(Severity::Error).count()
    }

    pub fn warning_count(&self) -> usize {
        self.with_severity(Severity::Warning).count()
    }

    /// Print errors, then warnings, to stderr.
    pub fn emit(&self) {
        for diagnostic in self.with_severity(Severity::Error) {
            eprintln!("{}", diagnostic);
        }
        for diagnostic in self.with_severity(Severity::Warning) {
            eprintln!("{}", diagnostic);
        }
    }
}
