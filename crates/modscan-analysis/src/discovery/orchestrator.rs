//! Discovery orchestrator: walk, name, filter, parse, extract.

use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

use modscan_core::config::ModscanConfig;
use modscan_core::errors::{ConfigError, DiscoveryError, ScanError};

use super::canonical::canonical_name;
use super::exclusion::is_excluded;
use super::opt_out::is_opted_out;
use super::requirements::extract_requirements;
use super::types::{Diagnostic, DiagnosticKind, DiscoveryReport, ModuleRecord};
use crate::parsers::PythonParser;
use crate::scanner::SourceWalker;

/// Discovers modules below a root directory without importing them.
///
/// Holds no results: every call walks the tree again, so records always
/// reflect the files as they are now.
#[derive(Debug, Clone)]
pub struct ModuleDiscovery {
    root: PathBuf,
    parser: PythonParser,
}

impl ModuleDiscovery {
    /// `root` is the package directory itself (e.g. `.../my`); its name is
    /// the first component of every module name.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            parser: PythonParser::new(),
        }
    }

    pub fn from_config(config: &ModscanConfig) -> Result<Self, ConfigError> {
        ModscanConfig::validate(config)?;
        let root = config
            .discovery
            .root()
            .ok_or_else(|| ConfigError::ValidationFailed {
                field: "discovery.root".to_string(),
                message: "a discovery root is required".to_string(),
            })?;
        Ok(Self::new(root.clone()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Start a fresh pass.
    ///
    /// The walk happens here, so a missing or unreadable tree fails before any
    /// record is produced. Files are then read and parsed one per `next()`.
    pub fn all_modules(&self) -> Result<ModuleStream, DiscoveryError> {
        let root = std::path::absolute(&self.root).map_err(|source| ScanError::Io {
            path: self.root.clone(),
            source,
        })?;
        let (Some(namespace), Some(base)) = (
            root.file_name().map(|n| n.to_string_lossy().into_owned()),
            root.parent().map(Path::to_path_buf),
        ) else {
            return Err(ScanError::RootNotFound { path: root }.into());
        };

        let span = tracing::debug_span!("discovery", root = %root.display());
        let files = span.in_scope(|| SourceWalker::new(&root).collect())?;
        tracing::debug!(parent: &span, files = files.len(), namespace = %namespace, "walk complete");

        Ok(ModuleStream {
            parser: self.parser.clone(),
            namespace,
            base,
            files: files.into_iter(),
            diagnostics: Vec::new(),
            emitted: 0,
            failed: false,
            span,
        })
    }

    /// Run a complete pass, returning every record or the first fatal error.
    pub fn discover(&self) -> Result<DiscoveryReport, DiscoveryError> {
        let mut stream = self.all_modules()?;
        let mut modules = Vec::new();
        for record in stream.by_ref() {
            modules.push(record?);
        }
        let diagnostics = stream.into_diagnostics();
        tracing::info!(
            root = %self.root.display(),
            modules = modules.len(),
            diagnostics = diagnostics.len(),
            "discovery complete"
        );
        Ok(DiscoveryReport {
            modules,
            diagnostics,
        })
    }

    /// First record named exactly `name`, from a fresh pass.
    pub fn module_by_name(&self, name: &str) -> Result<ModuleRecord, DiscoveryError> {
        for record in self.all_modules()? {
            let record = record?;
            if record.name() == name {
                return Ok(record);
            }
        }
        Err(DiscoveryError::ModuleNotFound {
            name: name.to_string(),
        })
    }
}

/// Lazy sequence of records from one pass.
///
/// Yields `Err` at most once, for the first fatal error, and nothing after it.
#[derive(Debug)]
pub struct ModuleStream {
    parser: PythonParser,
    namespace: String,
    base: PathBuf,
    files: std::vec::IntoIter<PathBuf>,
    diagnostics: Vec<Diagnostic>,
    emitted: usize,
    failed: bool,
    span: tracing::Span,
}

impl ModuleStream {
    /// Root namespace of this pass (the root directory's name).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Problems recovered so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    fn process(&mut self, path: &Path) -> Result<Option<ModuleRecord>, DiscoveryError> {
        let relative = path.strip_prefix(&self.base).unwrap_or(path);
        let Some(name) = canonical_name(relative) else {
            return Ok(None);
        };
        if is_excluded(&name, &self.namespace) {
            tracing::trace!(module = %name, "legacy name excluded");
            return Ok(None);
        }

        let source = read_source(path)?;
        let ast = self.parser.parse(&source, relative)?;
        if is_opted_out(&ast) {
            tracing::debug!(module = %name, "file opted out");
            return Ok(None);
        }

        let requires = match extract_requirements(&ast) {
            Ok(requires) => requires,
            Err(e) => {
                tracing::warn!(module = %name, file = %relative.display(), error = %e, "ignoring malformed requirements");
                self.diagnostics.push(Diagnostic {
                    file: relative.to_path_buf(),
                    module: name.clone(),
                    kind: DiagnosticKind::MalformedRequirements,
                    message: e.to_string(),
                });
                None
            }
        };

        tracing::trace!(module = %name, "module discovered");
        Ok(Some(ModuleRecord::new(
            name,
            relative,
            ast.docstring,
            requires,
        )))
    }
}

impl Iterator for ModuleStream {
    type Item = Result<ModuleRecord, DiscoveryError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let span = self.span.clone();
        let _entered = span.enter();

        while let Some(path) = self.files.next() {
            match self.process(&path) {
                Ok(Some(record)) => {
                    self.emitted += 1;
                    return Some(Ok(record));
                }
                Ok(None) => continue,
                Err(e) => {
                    tracing::error!(file = %path.display(), error = %e, "discovery aborted");
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
        tracing::debug!(modules = self.emitted, diagnostics = self.diagnostics.len(), "pass finished");
        None
    }
}

impl FusedIterator for ModuleStream {}

/// Read a file as UTF-8 text with universal newlines, like Python's text mode.
fn read_source(path: &Path) -> Result<String, ScanError> {
    let bytes = std::fs::read(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| ScanError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;
    let text = if text.starts_with('\u{feff}') {
        text['\u{feff}'.len_utf8()..].to_string()
    } else {
        text
    };
    if text.contains('\r') {
        Ok(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Ok(text)
    }
}
