//! Transition choreography: timings, easing curves and the cell-level
//! renditions of opacity (color blending) and scale (centered sub-rects).

use std::time::Duration;

use ratatui::layout::Rect;
use ratatui::style::Color;

/// Entrance fade, opacity 0 to 1.
pub(crate) const FADE_IN: Duration = Duration::from_millis(200);
/// Entrance scale, 0.92 to 1.0.
pub(crate) const SCALE_IN: Duration = Duration::from_millis(250);
/// Full entrance duration (the longer of the two tracks).
pub(crate) const OPEN_TOTAL: Duration = SCALE_IN;
/// Exit settle: the dialog stays attached this long after a control is
/// activated, and the outcome is produced only once it has elapsed.
pub(crate) const SETTLE: Duration = Duration::from_millis(200);
/// Frame cadence of the dialog loop.
pub(crate) const FRAME: Duration = Duration::from_millis(16);

/// Scale factor at the start of the entrance transition.
pub(crate) const SCALE_FROM: f32 = 0.92;
/// Scale factor at the end of the exit transition.
pub(crate) const SCALE_EXIT: f32 = 0.95;

pub(crate) fn clamp01(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-out: fast start, gentle stop.
pub(crate) fn ease_out(t: f32) -> f32 {
    let t = clamp01(t);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Decelerate curve, the cubic-bezier(0, 0, 0.2, 1) rendition: appears
/// quickly and glides to rest without overshoot.
pub(crate) fn decelerate(t: f32) -> f32 {
    let t = clamp01(t);
    1.0 - (1.0 - t).powi(3)
}

/// Progress of an elapsed duration against a track length.
pub(crate) fn progress(elapsed: Duration, track: Duration) -> f32 {
    if track.is_zero() {
        return 1.0;
    }
    clamp01(elapsed.as_secs_f32() / track.as_secs_f32())
}

/// Linear blend between two colors; the terminal stand-in for opacity.
///
/// `t == 0.0` yields `from`, `t == 1.0` yields `to`. Non-RGB colors cannot
/// be interpolated and snap at the midpoint.
pub(crate) fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = clamp01(t);
    match (from, to) {
        (Color::Rgb(fr, fg, fb), Color::Rgb(tr, tg, tb)) => Color::Rgb(
            lerp_channel(fr, tr, t),
            lerp_channel(fg, tg, t),
            lerp_channel(fb, tb, t),
        ),
        _ if t < 0.5 => from,
        _ => to,
    }
}

fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    let value = f32::from(from) + (f32::from(to) - f32::from(from)) * t;
    value.round().clamp(0.0, 255.0) as u8
}

/// Shrink `area` around its center by `factor`; the terminal stand-in for
/// a scale transform.
pub(crate) fn scaled(area: Rect, factor: f32) -> Rect {
    let factor = clamp01(factor);
    let width = ((f32::from(area.width) * factor).round() as u16).max(1);
    let height = ((f32::from(area.height) * factor).round() as u16).max(1);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
