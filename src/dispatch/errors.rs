//! # Dispatch Errors

use std::fmt;

use thiserror::Error;

/// Result type for dispatch operations
pub type DispatchResult<T> = Result<T, DispatchError>;

/// The two operations a document device can be asked to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Render a document to paper
    Print,
    /// Digitize a document
    Scan,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Print => write!(f, "print"),
            Capability::Scan => write!(f, "scan"),
        }
    }
}

/// Dispatch errors
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    /// The device does not have the requested capability. Distinct from a
    /// failed job: the device never attempted the work.
    #[error("Device '{device}' does not support {capability}")]
    Unsupported {
        /// Device name
        device: String,
        /// Missing capability
        capability: Capability,
    },

    /// The device has the capability but the job failed
    #[error("{capability} failed on '{device}': {reason}")]
    Failed {
        /// Device name
        device: String,
        /// Capability that was exercised
        capability: Capability,
        /// Failure reason
        reason: String,
    },
}

impl DispatchError {
    /// Create an unsupported-capability error
    pub fn unsupported(device: impl Into<String>, capability: Capability) -> Self {
        Self::Unsupported {
            device: device.into(),
            capability,
        }
    }

    /// Create a failed-job error
    pub fn failed(
        device: impl Into<String>,
        capability: Capability,
        reason: impl Into<String>,
    ) -> Self {
        Self::Failed {
            device: device.into(),
            capability,
            reason: reason.into(),
        }
    }
}
