//! Frame rendering: backdrop, container, title/message rows and the
//! right-aligned action row.

use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};
use ratatui::Frame;

use crate::anim;
use crate::request::DialogRequest;
use crate::state::{ConfirmDialog, Control};
use crate::text;
use crate::theme::{theme, Theme};

// Columns between the two controls.
const ACTION_GAP: u16 = 2;

pub(crate) fn draw(frame: &mut Frame, dialog: &mut ConfirmDialog) {
    let area = frame.area();
    if area.is_empty() {
        return;
    }
    let theme = theme();
    let (alpha, scale) = dialog.presentation(Instant::now());

    // Dimmed overlay behind the surface.
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.backdrop)),
        area,
    );

    let target = target_rect(area, theme, dialog.request());
    let rect = anim::scaled(target, scale).intersection(area);
    if rect.is_empty() {
        return;
    }

    // Opacity renders as blending every surface color toward the backdrop.
    let surface = anim::blend(theme.backdrop, theme.surface, alpha);
    let on_surface = anim::blend(theme.backdrop, theme.on_surface, alpha);
    let body = anim::blend(theme.backdrop, theme.body, alpha);
    let accent = anim::blend(theme.backdrop, theme.accent, alpha);
    let accent_tint = anim::blend(theme.backdrop, theme.accent_tint, alpha);

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(body).bg(surface))
        .padding(Padding::new(
            theme.padding_x,
            theme.padding_x,
            theme.padding_y,
            theme.padding_y,
        ))
        .style(Style::default().bg(surface));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);
    if inner.is_empty() {
        return;
    }

    let request = dialog.request().clone();
    let mut y = inner.y;

    let title_area = Rect::new(inner.x, y, inner.width, 1).intersection(inner);
    frame.render_widget(
        Paragraph::new(request.title.as_str())
            .style(Style::default().fg(on_surface).bg(surface)),
        title_area,
    );
    y = y.saturating_add(2);

    let lines = message_lines(&request, inner.width);
    if !lines.is_empty() && y < inner.bottom() {
        let rows = (lines.len() as u16).min(inner.bottom().saturating_sub(y));
        let message_area = Rect::new(inner.x, y, inner.width, rows).intersection(inner);
        let body_text =
            Text::from(lines.iter().map(|line| Line::from(line.as_str())).collect::<Vec<_>>());
        frame.render_widget(
            Paragraph::new(body_text).style(Style::default().fg(body).bg(surface)),
            message_area,
        );
    }

    // Action row sits on the last padded row: cancel left, confirm right.
    let row = inner.bottom().saturating_sub(1);
    let cancel_text = format!(" {} ", request.cancel_label);
    let confirm_text = format!(" {} ", request.confirm_label);
    let cancel_width = (text::display_width(&cancel_text) as u16).min(inner.width);
    let confirm_width = (text::display_width(&confirm_text) as u16).min(inner.width);
    let total = cancel_width
        .saturating_add(ACTION_GAP)
        .saturating_add(confirm_width)
        .min(inner.width);
    let start = inner.right().saturating_sub(total);

    let cancel_area = Rect::new(start, row, cancel_width, 1).intersection(inner);
    let confirm_area = Rect::new(
        start.saturating_add(cancel_width).saturating_add(ACTION_GAP),
        row,
        confirm_width,
        1,
    )
    .intersection(inner);

    let control_style = |control: Control| {
        let style = Style::default().fg(accent).bg(surface);
        if dialog.focused() == control {
            style.bg(accent_tint).add_modifier(Modifier::BOLD)
        } else {
            style
        }
    };
    frame.render_widget(
        Paragraph::new(cancel_text.as_str()).style(control_style(Control::Cancel)),
        cancel_area,
    );
    frame.render_widget(
        Paragraph::new(confirm_text.as_str()).style(control_style(Control::Confirm)),
        confirm_area,
    );

    dialog.set_hit_areas(cancel_area, confirm_area);
}

fn message_lines(request: &DialogRequest, width: u16) -> Vec<String> {
    if request.message.trim().is_empty() {
        return Vec::new();
    }
    text::wrap(&request.message, usize::from(width.max(1)))
}

/// Full-size dialog rect: width 90% of the frame capped at the theme
/// maximum, height driven by the wrapped content, centered.
fn target_rect(area: Rect, theme: &Theme, request: &DialogRequest) -> Rect {
    let width = ((u32::from(area.width) * u32::from(theme.width_percent) / 100) as u16)
        .min(theme.max_width)
        .min(area.width)
        .max(1);
    let content_width = width.saturating_sub(2 + theme.padding_x * 2).max(1);
    let message_rows = message_lines(request, content_width).len() as u16;

    // Borders + padding + title + gap + actions, plus the message block.
    let mut height = 2 + theme.padding_y * 2 + 3;
    if message_rows > 0 {
        height = height.saturating_add(message_rows + 1);
    }
    let height = height.min(area.height).max(1);

    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
