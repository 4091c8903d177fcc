//! Shared presentation rules, registered into the process exactly once.
//!
//! The terminal analogue of one-time stylesheet injection: the first call
//! wins, every later call is a no-op, and there is no way to unset the
//! registered theme for the lifetime of the process.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use ratatui::style::Color;

// Material 3 dialog palette from the original design.
const SURFACE: Color = Color::Rgb(233, 238, 246);
const ON_SURFACE: Color = Color::Rgb(31, 31, 31);
const BODY: Color = Color::Rgb(68, 71, 70);
const ACCENT: Color = Color::Rgb(11, 87, 208);
const ACCENT_TINT: Color = Color::Rgb(214, 223, 239);
const BACKDROP: Color = Color::Rgb(16, 17, 20);

/// Presentation constants for the dialog surface.
///
/// Colors follow the Material 3 dialog palette; the pixel metrics of the
/// original design (28-unit radius, 24-unit padding, 400-unit width cap)
/// map to a rounded border set, fixed cell padding and a column cap.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Dialog background.
    pub surface: Color,
    /// Title text.
    pub on_surface: Color,
    /// Message body text.
    pub body: Color,
    /// Control labels.
    pub accent: Color,
    /// Background of the focused control.
    pub accent_tint: Color,
    /// Dimmed overlay behind the dialog.
    pub backdrop: Color,
    /// Width cap in columns (the 400-unit cap).
    pub max_width: u16,
    /// Dialog width as a percentage of the frame width.
    pub width_percent: u16,
    /// Horizontal inner padding in columns.
    pub padding_x: u16,
    /// Vertical inner padding in rows.
    pub padding_y: u16,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            surface: SURFACE,
            on_surface: ON_SURFACE,
            body: BODY,
            accent: ACCENT,
            accent_tint: ACCENT_TINT,
            backdrop: BACKDROP,
            max_width: 50,
            width_percent: 90,
            padding_x: 3,
            padding_y: 1,
        }
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();
static REGISTRATIONS: AtomicUsize = AtomicUsize::new(0);

/// Register the default theme if none is registered yet.
///
/// Idempotent and safe to call on every `show`. Returns whether this call
/// performed the registration.
pub fn ensure_theme_registered() -> bool {
    register_theme(Theme::default())
}

/// Register a custom theme, if none is registered yet.
///
/// The first registration in the process wins; later calls (including
/// [`ensure_theme_registered`]) return `false` and change nothing.
pub fn register_theme(theme: Theme) -> bool {
    let mut registered_now = false;
    THEME.get_or_init(|| {
        REGISTRATIONS.fetch_add(1, Ordering::SeqCst);
        registered_now = true;
        theme
    });
    registered_now
}

/// The process-wide theme, registering the default on first use.
pub fn theme() -> &'static Theme {
    THEME.get_or_init(|| {
        REGISTRATIONS.fetch_add(1, Ordering::SeqCst);
        Theme::default()
    })
}

/// Number of registrations performed so far; never exceeds one.
pub fn registration_count() -> usize {
    REGISTRATIONS.load(Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The registry is process-global, so these assertions are written to
    // hold regardless of which test touches it first.

    #[test]
    fn registration_happens_at_most_once() {
        ensure_theme_registered();
        assert_eq!(registration_count(), 1);
        ensure_theme_registered();
        ensure_theme_registered();
        assert_eq!(registration_count(), 1);
    }

    #[test]
    fn later_registration_is_a_no_op() {
        ensure_theme_registered();
        let custom = Theme {
            max_width: 10,
            ..Theme::default()
        };
        assert!(!register_theme(custom));
        assert_eq!(theme().max_width, Theme::default().max_width);
    }

    #[test]
    fn theme_is_stable_across_calls() {
        let first: *const Theme = theme();
        let second: *const Theme = theme();
        assert_eq!(first, second);
    }
}
