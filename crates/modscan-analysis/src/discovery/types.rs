//! Discovery output types.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Declared requirements: `None` when the module declares nothing, which is
/// different from declaring an empty collection.
pub type Requires = Option<Vec<String>>;

/// One discovered module. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    name: String,
    skip_reason: Option<String>,
    doc: Option<String>,
    file: Option<PathBuf>,
    requires: Requires,
}

impl ModuleRecord {
    pub fn new(
        name: impl Into<String>,
        file: impl Into<PathBuf>,
        doc: Option<String>,
        requires: Requires,
    ) -> Self {
        Self {
            name: name.into(),
            skip_reason: None,
            doc,
            file: Some(file.into()),
            requires,
        }
    }

    /// Canonical dotted name, e.g. `my.photos.main`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Always `None` for records produced by discovery.
    pub fn skip_reason(&self) -> Option<&str> {
        self.skip_reason.as_deref()
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Source path relative to the parent of the discovery root.
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn requires(&self) -> Option<&[String]> {
        self.requires.as_deref()
    }

    /// Copy of this record marked as intentionally skipped.
    pub fn with_skip_reason(&self, reason: impl Into<String>) -> Self {
        Self {
            skip_reason: Some(reason.into()),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// `REQUIRES` was found but is not a collection of string literals.
    MalformedRequirements,
}

/// A recovered, per-file problem. Never changes which records are emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub file: PathBuf,
    pub module: String,
    pub kind: DiagnosticKind,
    pub message: String,
}

/// Everything one complete discovery pass produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryReport {
    pub modules: Vec<ModuleRecord>,
    pub diagnostics: Vec<Diagnostic>,
}

impl DiscoveryReport {
    pub fn get(&self, name: &str) -> Option<&ModuleRecord> {
        self.modules.iter().find(|m| m.name() == name)
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
