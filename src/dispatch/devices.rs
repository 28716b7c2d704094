//! Document device capability surface and concrete providers
//!
//! The trait exposes exactly the two operations the runner dispatches;
//! every provider must implement both, so a partial implementation is a
//! compile error rather than a runtime surprise. A device lacking the
//! hardware for an operation reports `DispatchError::Unsupported` -- a
//! distinct, observable failure, never a silent no-op.

use crate::observability::Logger;

use super::errors::{Capability, DispatchError, DispatchResult};

/// Capability surface the task runner dispatches through.
pub trait DocumentDevice {
    /// Device name for logs and error messages
    fn name(&self) -> &str;

    /// Render the document at `path` to paper
    fn print(&self, path: &str) -> DispatchResult<()>;

    /// Digitize the document at `path`
    fn scan(&self, path: &str) -> DispatchResult<()>;
}

/// Print-only device.
pub struct Printer {
    name: String,
}

impl Printer {
    /// Create a printer with the given device name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl DocumentDevice for Printer {
    fn name(&self) -> &str {
        &self.name
    }

    fn print(&self, path: &str) -> DispatchResult<()> {
        Logger::info("PRINT_JOB", &[("device", &self.name), ("path", path)]);
        Ok(())
    }

    fn scan(&self, _path: &str) -> DispatchResult<()> {
        Err(DispatchError::unsupported(&self.name, Capability::Scan))
    }
}

/// Scan-only device.
pub struct DocumentScanner {
    name: String,
}

impl DocumentScanner {
    /// Create a scanner with the given device name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl DocumentDevice for DocumentScanner {
    fn name(&self) -> &str {
        &self.name
    }

    fn print(&self, _path: &str) -> DispatchResult<()> {
        Err(DispatchError::unsupported(&self.name, Capability::Print))
    }

    fn scan(&self, path: &str) -> DispatchResult<()> {
        Logger::info("SCAN_JOB", &[("device", &self.name), ("path", path)]);
        Ok(())
    }
}

/// Combined device with both capabilities.
pub struct PrintScanner {
    name: String,
}

impl PrintScanner {
    /// Create a combined device with the given device name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl DocumentDevice for PrintScanner {
    fn name(&self) -> &str {
        &self.name
    }

    fn print(&self, path: &str) -> DispatchResult<()> {
        Logger::info("PRINT_JOB", &[("device", &self.name), ("path", path)]);
        Ok(())
    }

    fn scan(&self, path: &str) -> DispatchResult<()> {
        Logger::info("SCAN_JOB", &[("device", &self.name), ("path", path)]);
        Ok(())
    }
}
