//! Per-invocation dialog instance: the open/close lifecycle and the
//! one-shot outcome cell.

use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use tracing::{debug, trace};

use crate::anim::{self, OPEN_TOTAL, SCALE_EXIT, SCALE_FROM, SETTLE};
use crate::request::DialogRequest;

/// The two interactive controls, in left-to-right presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Cancel,
    Confirm,
}

impl Control {
    fn other(self) -> Self {
        match self {
            Self::Cancel => Self::Confirm,
            Self::Confirm => Self::Cancel,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Cancel => 0,
            Self::Confirm => 1,
        }
    }

    const fn outcome(self) -> bool {
        matches!(self, Self::Confirm)
    }
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Created but not yet attached to the screen.
    Hidden,
    /// Attached; entrance transition running. Interactive.
    Opening { since: Instant },
    /// Entrance transition finished. Interactive.
    Open,
    /// A control was activated; exit transition running, controls inert.
    Closing { since: Instant },
    /// Settle elapsed; the instance is spent. Terminal state.
    Disposed,
}

/// One dialog invocation.
///
/// Lifecycle: `Hidden -> Opening -> Open -> Closing -> Disposed`, driven
/// by [`open`](Self::open), user activation and [`on_frame`](Self::on_frame).
/// No transition leads back; the outcome cell is written at most once, and
/// both controls are inert from the moment `Closing` begins. Instances are
/// never reused across invocations.
#[derive(Debug)]
pub struct ConfirmDialog {
    request: DialogRequest,
    phase: Phase,
    focused: Control,
    outcome: Option<bool>,
    // Control hit areas recorded by the last render, for mouse activation.
    hit_areas: [Option<Rect>; 2],
}

impl ConfirmDialog {
    pub fn new(request: DialogRequest) -> Self {
        Self {
            request,
            phase: Phase::Hidden,
            // The confirming control is the primary action and starts
            // focused, so a bare Enter confirms.
            focused: Control::Confirm,
            outcome: None,
            hit_areas: [None; 2],
        }
    }

    pub fn request(&self) -> &DialogRequest {
        &self.request
    }

    pub fn focused(&self) -> Control {
        self.focused
    }

    /// Outcome written so far, if any. Present from `Closing` onwards.
    pub fn outcome(&self) -> Option<bool> {
        self.outcome
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self.phase, Phase::Opening { .. } | Phase::Open)
    }

    pub fn is_closing(&self) -> bool {
        matches!(self.phase, Phase::Closing { .. })
    }

    pub fn is_disposed(&self) -> bool {
        matches!(self.phase, Phase::Disposed)
    }

    /// Begin the entrance transition. Called once, after the first frame
    /// has been drawn in the initial presentation, so the animation is
    /// observed from its starting state rather than skipped.
    pub fn open(&mut self, now: Instant) {
        if matches!(self.phase, Phase::Hidden) {
            self.phase = Phase::Opening { since: now };
            trace!("dialog opening");
        }
    }

    /// Advance time-driven transitions.
    ///
    /// Returns the outcome exactly once: on the frame where the exit
    /// settle period has elapsed and the instance becomes `Disposed`.
    pub fn on_frame(&mut self, now: Instant) -> Option<bool> {
        match self.phase {
            Phase::Opening { since } if now.duration_since(since) >= OPEN_TOTAL => {
                self.phase = Phase::Open;
                trace!("dialog open");
                None
            }
            Phase::Closing { since } if now.duration_since(since) >= SETTLE => {
                self.phase = Phase::Disposed;
                let outcome = self.outcome.unwrap_or(false);
                debug!(outcome, "dialog disposed");
                Some(outcome)
            }
            _ => None,
        }
    }

    /// Activate a control: write the outcome cell and begin the exit
    /// transition. A no-op once `Closing` has begun.
    pub fn activate(&mut self, control: Control, now: Instant) {
        if !self.is_interactive() || self.outcome.is_some() {
            return;
        }
        self.outcome = Some(control.outcome());
        self.phase = Phase::Closing { since: now };
        debug!(?control, "control activated");
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press || !self.is_interactive() {
            return;
        }
        match key.code {
            KeyCode::Left => self.focused = Control::Cancel,
            KeyCode::Right => self.focused = Control::Confirm,
            KeyCode::Tab => self.focused = self.focused.other(),
            KeyCode::Enter => self.activate(self.focused, now),
            KeyCode::Char('y') | KeyCode::Char('Y') => self.activate(Control::Confirm, now),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.activate(Control::Cancel, now)
            }
            _ => {}
        }
    }

    /// Left click on a control activates it; clicks elsewhere (including
    /// the backdrop) are ignored.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if !self.is_interactive() {
            return;
        }
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let position = Position::new(mouse.column, mouse.row);
        for control in [Control::Cancel, Control::Confirm] {
            if let Some(area) = self.hit_areas[control.index()] {
                if area.contains(position) {
                    self.focused = control;
                    self.activate(control, now);
                    return;
                }
            }
        }
    }

    pub(crate) fn set_hit_areas(&mut self, cancel: Rect, confirm: Rect) {
        self.hit_areas = [Some(cancel), Some(confirm)];
    }

    /// Current (opacity, scale) pair for rendering.
    pub(crate) fn presentation(&self, now: Instant) -> (f32, f32) {
        match self.phase {
            Phase::Hidden => (0.0, SCALE_FROM),
            Phase::Opening { since } => {
                let elapsed = now.duration_since(since);
                let alpha = anim::ease_out(anim::progress(elapsed, anim::FADE_IN));
                let scale_t = anim::decelerate(anim::progress(elapsed, anim::SCALE_IN));
                (alpha, SCALE_FROM + (1.0 - SCALE_FROM) * scale_t)
            }
            Phase::Open => (1.0, 1.0),
            Phase::Closing { since } => {
                let t = anim::ease_out(anim::progress(now.duration_since(since), SETTLE));
                (1.0 - t, 1.0 + (SCALE_EXIT - 1.0) * t)
            }
            Phase::Disposed => (0.0, SCALE_EXIT),
        }
    }
}
