//! Task runner: forwards print/scan jobs through the capability surface
//!
//! The runner knows nothing about concrete devices; it dispatches through
//! `DocumentDevice` only and logs every outcome, so an unsupported
//! capability is visible in the logs as well as in the returned error.

use crate::observability::Logger;

use super::devices::DocumentDevice;
use super::errors::{Capability, DispatchResult};

/// Dispatches document jobs to devices through the capability surface.
pub struct TaskRunner;

impl TaskRunner {
    /// Forward a print job to the device.
    pub fn run_print_task(device: &dyn DocumentDevice, path: &str) -> DispatchResult<()> {
        Self::record(device, Capability::Print, path, device.print(path))
    }

    /// Forward a scan job to the device.
    pub fn run_scan_task(device: &dyn DocumentDevice, path: &str) -> DispatchResult<()> {
        Self::record(device, Capability::Scan, path, device.scan(path))
    }

    fn record(
        device: &dyn DocumentDevice,
        capability: Capability,
        path: &str,
        result: DispatchResult<()>,
    ) -> DispatchResult<()> {
        let capability = capability.to_string();
        match &result {
            Ok(()) => Logger::info(
                "DISPATCH_COMPLETE",
                &[
                    ("capability", &capability),
                    ("device", device.name()),
                    ("path", path),
                ],
            ),
            Err(e) => Logger::error(
                "DISPATCH_FAILED",
                &[
                    ("capability", &capability),
                    ("device", device.name()),
                    ("path", path),
                    ("reason", &e.to_string()),
                ],
            ),
        }
        result
    }
}
