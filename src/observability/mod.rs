//! Observability subsystem for fieldcheck
//!
//! Structured one-line JSON logging with deterministic output. Read-only:
//! logging never affects validation or dispatch behavior.

mod logger;

pub use logger::{LogLevel, Logger};
