//! Observability for modscan.
//! `tracing` crate with `EnvFilter`, controlled by `MODSCAN_LOG`.

pub mod setup;

pub use setup::init_tracing;
