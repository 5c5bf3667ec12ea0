use std::time::Duration;

use ratatui::prelude::*;

use super::{RenderCtx, paragraph, push_block};
use crate::theme::{BG_PRIMARY, CYAN, PURPLE, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::helpers::gradient_text;

/// Hero copy starts half a second after mount.
const HERO_DELAY: Duration = Duration::from_millis(500);

const EXPLORE_LABEL: &str = " Explore My Work (e) ";
const CONTACT_LABEL: &str = " Get In Touch (c) ";

pub(super) fn lines(ctx: RenderCtx<'_>) -> Vec<Line<'static>> {
    let profile = &ctx.content.profile;
    let width = ctx.width.saturating_sub(4).max(1);

    let mut body = vec![
        Line::from(gradient_text(&profile.name, Modifier::BOLD)).alignment(Alignment::Center),
        Line::default(),
        Line::styled(
            profile.headline.clone(),
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center),
        Line::default(),
    ];
    body.extend(paragraph(
        &profile.tagline,
        width,
        Style::default().fg(TEXT_SECONDARY),
        Alignment::Center,
    ));
    body.push(Line::default());
    body.extend(paragraph(
        &profile.summary,
        width.min(70),
        Style::default().fg(TEXT_MUTED),
        Alignment::Center,
    ));
    body.push(Line::default());
    body.push(
        Line::from(vec![
            Span::styled(
                EXPLORE_LABEL,
                Style::default()
                    .fg(BG_PRIMARY)
                    .bg(CYAN)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(
                CONTACT_LABEL,
                Style::default()
                    .fg(CYAN)
                    .bg(BG_PRIMARY)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
        ])
        .alignment(Alignment::Center),
    );

    // Fill the viewport like a full-height banner, with the scroll hint on
    // the last row.
    let height = usize::from(ctx.viewport_height).max(body.len() + 3);
    let top = (height - body.len() - 1) / 2;
    let bottom = height - top - body.len() - 1;

    let mut out: Vec<Line<'static>> = (0..top).map(|_| Line::default()).collect();
    push_block(&mut out, body, ctx.reveal.progress(HERO_DELAY));
    out.extend((0..bottom).map(|_| Line::default()));
    out.push(Line::styled("⌄", Style::default().fg(PURPLE)).alignment(Alignment::Center));
    out
}
