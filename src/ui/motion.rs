//! Entrance transitions applied to rendered lines.

use ratatui::prelude::*;

use crate::theme::{BG_PRIMARY, TEXT_SECONDARY, lerp_color};

/// Rows a section sits below its resting place before it enters.
pub const ENTRANCE_SHIFT: u16 = 2;

pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Rows of downward offset at transition progress `t`.
pub fn shift_rows(t: f32) -> u16 {
    ((1.0 - ease_out_cubic(t)) * f32::from(ENTRANCE_SHIFT)).round() as u16
}

/// Blend every span from the page background toward its own colors.
pub fn fade_lines(lines: &mut [Line<'static>], t: f32) {
    let t = ease_out_cubic(t);
    if t >= 1.0 {
        return;
    }
    for line in lines.iter_mut() {
        for span in line.spans.iter_mut() {
            span.style = fade_style(span.style, t);
        }
    }
}

fn fade_style(style: Style, t: f32) -> Style {
    let fg = lerp_color(BG_PRIMARY, style.fg.unwrap_or(TEXT_SECONDARY), t);
    let mut faded = style.fg(fg);
    if let Some(bg) = style.bg {
        faded = faded.bg(lerp_color(BG_PRIMARY, bg, t));
    }
    faded
}

/// Push a section's lines down by the entrance offset, keeping its height.
pub fn shift_down(lines: Vec<Line<'static>>, t: f32) -> Vec<Line<'static>> {
    let rows = usize::from(shift_rows(t));
    if rows == 0 {
        return lines;
    }
    let height = lines.len();
    let mut shifted: Vec<Line<'static>> = (0..rows).map(|_| Line::default()).collect();
    shifted.extend(lines);
    shifted.truncate(height);
    shifted
}
