//! Capability dispatch for document devices
//!
//! Devices expose a uniform two-operation surface (print, scan); the runner
//! dispatches through the trait with no knowledge of concrete providers. A
//! device lacking a capability fails distinctly instead of silently
//! accepting the job.

mod devices;
mod errors;
mod runner;

pub use devices::{DocumentDevice, DocumentScanner, PrintScanner, Printer};
pub use errors::{Capability, DispatchError, DispatchResult};
pub use runner::TaskRunner;
