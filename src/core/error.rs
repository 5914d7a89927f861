//! Error taxonomy for launch resolution.
//!
//! All variants here are fatal for the one-shot CLI invocation: the caller
//! reports them and the process exits non-zero. Protocol problems on the
//! status channel are deliberately *not* part of this type — they are
//! recovered locally by the receiver (see `reporter::receiver`) and never
//! abort anything.

use thiserror::Error;

/// A fatal condition encountered while resolving the launch configuration.
///
/// Carries the same taxonomy the harness exposes to users: usage errors,
/// runner resolution errors and I/O errors. There is no retry policy at this
/// layer; every variant terminates the invocation with exit code 1.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// A flag that requires a value was the last token, or its value slot
    /// was otherwise absent. The out-of-bounds case is indistinguishable
    /// from a missing value on purpose.
    #[error("No value specified for argument \"{flag}\"")]
    MissingValue {
        /// Flag name without the leading `--`.
        flag: String,
    },

    /// The scan finished without a usable `--json-config`.
    #[error("Missing required argument --json-config.")]
    MissingJsonConfig,

    /// A `--runner-filter` identifier is not in the runner registry.
    #[error("Runner class not found: \"{name}\"")]
    UnknownRunner { name: String },

    /// A filter file or allowlist file could not be read.
    #[error("Failed to read \"{path}\"")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of a [`LaunchError`], mirroring the error taxonomy
/// the harness documents for its users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed invocation: missing flag value or missing required flag.
    Usage,
    /// A runner identifier did not resolve to a known runner.
    Resolution,
    /// A user-supplied file could not be read.
    Io,
}

impl LaunchError {
    /// The taxonomy bucket this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LaunchError::MissingValue { .. } | LaunchError::MissingJsonConfig => ErrorKind::Usage,
            LaunchError::UnknownRunner { .. } => ErrorKind::Resolution,
            LaunchError::Io { .. } => ErrorKind::Io,
        }
    }

    /// Exit code reported for this error. Every fatal parse condition maps
    /// to 1.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
