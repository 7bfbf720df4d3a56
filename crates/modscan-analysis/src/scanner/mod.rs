//! Scanner subsystem: deterministic enumeration of Python source files.

pub mod walker;

pub use walker::SourceWalker;
