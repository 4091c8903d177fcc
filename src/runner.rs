//! The dialog loop and its terminal plumbing.
//!
//! `run_dialog` is the backend- and event-source-generic core; `show` wraps
//! it with the real terminal: raw mode, alternate screen and mouse capture,
//! restored on every exit path by an RAII guard.

use std::io;
use std::time::{Duration, Instant};

use crossterm::cursor;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::tty::IsTty;
use crossterm::ExecutableCommand;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use tracing::debug;

use crate::anim::FRAME;
use crate::error::DialogError;
use crate::request::DialogRequest;
use crate::state::ConfirmDialog;
use crate::theme::ensure_theme_registered;
use crate::view;

/// Source of input events for the dialog loop.
///
/// The default implementation reads the terminal; tests substitute a
/// scripted source so the whole loop runs against a test backend.
pub trait EventSource {
    /// Next event, waiting up to `timeout`. `None` means the frame tick
    /// elapsed with no input.
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

/// Reads events from the hosting terminal.
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

/// Restores the terminal on drop, whichever way the dialog exits.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        stdout.execute(cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = stdout.execute(cursor::Show);
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Display a modal confirm dialog on the current terminal and block until
/// the user selects a control.
///
/// Resolves to `true` for confirm and `false` for cancel, always exactly
/// once, after the exit transition has settled and the surface has been
/// removed from the screen. There is no caller-side cancellation: once
/// shown, the only way out is activating one of the two controls (or their
/// key equivalents).
pub fn show(request: DialogRequest) -> Result<bool, DialogError> {
    request.validate()?;
    if !io::stdout().is_tty() {
        return Err(DialogError::HostUnavailable);
    }
    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    run_dialog(&mut terminal, &mut CrosstermEvents, request)
}

/// The dialog loop against an arbitrary backend and event source.
///
/// Ordering guarantees: the entrance transition starts only after the
/// first frame has been drawn, and the outcome is returned only after the
/// settle period has elapsed and the screen has been cleared.
pub fn run_dialog<B, E>(
    terminal: &mut Terminal<B>,
    events: &mut E,
    request: DialogRequest,
) -> Result<bool, DialogError>
where
    B: Backend,
    E: EventSource,
{
    request.validate()?;
    ensure_theme_registered();
    let size = terminal.size()?;
    if size.width == 0 || size.height == 0 {
        return Err(DialogError::HostUnavailable);
    }

    debug!(title = %request.title, "showing confirm dialog");
    let mut dialog = ConfirmDialog::new(request);

    // Attach: one frame in the initial presentation, then open.
    terminal.draw(|frame| view::draw(frame, &mut dialog))?;
    dialog.open(Instant::now());

    let outcome = loop {
        if let Some(event) = events.poll(FRAME)? {
            match event {
                Event::Key(key) => dialog.handle_key(key, Instant::now()),
                Event::Mouse(mouse) => dialog.handle_mouse(mouse, Instant::now()),
                _ => {}
            }
        }
        if let Some(outcome) = dialog.on_frame(Instant::now()) {
            break outcome;
        }
        terminal.draw(|frame| view::draw(frame, &mut dialog))?;
    };

    // Teardown happens-before resolution.
    terminal.clear()?;
    debug!(outcome, "confirm dialog resolved");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::SETTLE;
    use crate::theme::registration_count;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::layout::Position;
    use std::collections::VecDeque;
    use std::thread;

    struct Script {
        events: VecDeque<Event>,
    }

    impl Script {
        fn keys(codes: &[KeyCode]) -> Self {
            Self {
                events: codes
                    .iter()
                    .map(|&code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
                    .collect(),
            }
        }
    }

    impl EventSource for Script {
        fn poll(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
            match self.events.pop_front() {
                Some(event) => Ok(Some(event)),
                None => {
                    thread::sleep(timeout);
                    Ok(None)
                }
            }
        }
    }

    fn test_terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(80, 24)).unwrap()
    }

    fn buffer_is_blank(terminal: &Terminal<TestBackend>) -> bool {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (0..area.height).all(|y| {
            (0..area.width).all(|x| {
                buffer
                    .cell(Position::new(x, y))
                    .map(|cell| cell.symbol() == " ")
                    .unwrap_or(true)
            })
        })
    }

    #[test]
    fn enter_on_default_focus_resolves_true() {
        let mut terminal = test_terminal();
        let mut events = Script::keys(&[KeyCode::Enter]);
        let outcome = run_dialog(&mut terminal, &mut events, DialogRequest::new()).unwrap();
        assert!(outcome);
    }

    #[test]
    fn moving_focus_left_then_enter_resolves_false() {
        let mut terminal = test_terminal();
        let mut events = Script::keys(&[KeyCode::Left, KeyCode::Enter]);
        let outcome = run_dialog(&mut terminal, &mut events, DialogRequest::new()).unwrap();
        assert!(!outcome);
    }

    #[test]
    fn escape_resolves_false() {
        let mut terminal = test_terminal();
        let mut events = Script::keys(&[KeyCode::Esc]);
        let outcome = run_dialog(&mut terminal, &mut events, DialogRequest::new()).unwrap();
        assert!(!outcome);
    }

    #[test]
    fn unrelated_keys_do_not_resolve() {
        let mut terminal = test_terminal();
        let mut events = Script::keys(&[
            KeyCode::Char('x'),
            KeyCode::Up,
            KeyCode::Char('y'),
        ]);
        let outcome = run_dialog(&mut terminal, &mut events, DialogRequest::new()).unwrap();
        assert!(outcome);
    }

    #[test]
    fn resolution_waits_for_the_settle_period() {
        let mut terminal = test_terminal();
        let mut events = Script::keys(&[KeyCode::Enter]);
        let started = Instant::now();
        let _ = run_dialog(&mut terminal, &mut events, DialogRequest::new()).unwrap();
        assert!(started.elapsed() >= SETTLE);
    }

    #[test]
    fn screen_is_torn_down_after_resolution() {
        let mut terminal = test_terminal();
        let mut events = Script::keys(&[KeyCode::Char('y')]);
        let _ = run_dialog(&mut terminal, &mut events, DialogRequest::new()).unwrap();
        assert!(buffer_is_blank(&terminal));
    }

    #[test]
    fn sequential_invocations_are_independent_with_one_registration() {
        let mut terminal = test_terminal();

        let mut events = Script::keys(&[KeyCode::Enter]);
        let first = run_dialog(&mut terminal, &mut events, DialogRequest::new()).unwrap();
        assert!(first);
        assert!(buffer_is_blank(&terminal));

        let mut events = Script::keys(&[KeyCode::Char('n')]);
        let second = run_dialog(&mut terminal, &mut events, DialogRequest::new()).unwrap();
        assert!(!second);
        assert!(buffer_is_blank(&terminal));

        assert_eq!(registration_count(), 1);
    }

    #[test]
    fn invalid_request_is_reported_synchronously() {
        let mut terminal = test_terminal();
        let mut events = Script::keys(&[]);
        let result = run_dialog(
            &mut terminal,
            &mut events,
            DialogRequest::new().confirm_label(""),
        );
        assert!(matches!(result, Err(DialogError::InvalidRequest(_))));
        assert!(buffer_is_blank(&terminal));
    }

    #[test]
    fn empty_host_area_is_reported() {
        let mut terminal = Terminal::new(TestBackend::new(0, 0)).unwrap();
        let mut events = Script::keys(&[]);
        let result = run_dialog(&mut terminal, &mut events, DialogRequest::new());
        assert!(matches!(result, Err(DialogError::HostUnavailable)));
    }
}
