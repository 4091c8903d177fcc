//! A modal confirm dialog widget for ratatui terminals, styled after the
//! Material 3 dialog.
//!
//! The library does one thing: present a confirmation prompt and produce
//! exactly one boolean outcome per invocation. Shared presentation rules
//! are registered into the process once, lazily; each [`show`] builds a
//! fresh dialog surface, plays an entrance transition, waits for the user
//! to activate the confirm or cancel control, plays an exit transition and
//! resolves after teardown.
//!
//! ```no_run
//! use m3_dialog::{show, DialogRequest};
//!
//! let request = DialogRequest::new()
//!     .title("Delete file?")
//!     .message("This action cannot be undone.")
//!     .confirm_label("Delete")
//!     .cancel_label("Keep");
//! let confirmed = show(request)?;
//! # Ok::<(), m3_dialog::DialogError>(())
//! ```
//!
//! For embedding in an existing event loop, [`ConfirmDialog`] exposes the
//! underlying instance state machine and [`run_dialog`] the backend- and
//! event-source-generic loop the tests drive.

mod anim;
mod error;
mod request;
mod runner;
mod state;
mod text;
mod theme;
mod view;

pub use error::DialogError;
pub use request::DialogRequest;
pub use runner::{run_dialog, show, CrosstermEvents, EventSource};
pub use state::{ConfirmDialog, Control};
pub use theme::{ensure_theme_registered, register_theme, registration_count, theme, Theme};

/// Outcome of one dialog invocation: `true` for confirm, `false` for
/// cancel.
pub type DialogOutcome = bool;
