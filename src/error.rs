use std::io;

use thiserror::Error;

/// Failures reported before a dialog is put on screen.
///
/// Once a dialog is displayed, user interaction always produces an outcome;
/// there is no error path, timeout or caller-side cancellation after that
/// point.
#[derive(Debug, Error)]
pub enum DialogError {
    /// The request failed synchronous validation (empty control label,
    /// control characters in a single-line field).
    #[error("invalid dialog request: {0}")]
    InvalidRequest(String),

    /// No terminal is available to host the dialog (stdout is not a tty,
    /// or the render area is empty).
    #[error("no terminal available to host the dialog")]
    HostUnavailable,

    /// Terminal I/O failed while entering, drawing or restoring the screen.
    #[error(transparent)]
    Io(#[from] io::Error),
}
