//! Discovery subsystem: turns a source tree into module records.
//!
//! Per file, in order: canonical name, legacy exclusion, parse, opt-out check,
//! docstring and `REQUIRES` extraction.

pub mod canonical;
pub mod exclusion;
pub mod opt_out;
pub mod orchestrator;
pub mod requirements;
pub mod types;

pub use orchestrator::{ModuleDiscovery, ModuleStream};
pub use types::{Diagnostic, DiagnosticKind, DiscoveryReport, ModuleRecord, Requires};
