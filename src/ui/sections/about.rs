use std::time::Duration;

use ratatui::prelude::*;

use super::{RenderCtx, paragraph, push_block};
use crate::theme::{BORDER_SUBTLE, CYAN, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::helpers::{card, section_heading};

pub(super) fn lines(ctx: RenderCtx<'_>) -> Vec<Line<'static>> {
    let about = &ctx.content.about;
    let width = ctx.width;
    let reveal = ctx.reveal;

    let mut out = vec![Line::default()];
    let mut heading = section_heading("About Me");
    heading.push(Line::default());
    push_block(&mut out, heading, reveal.progress(Duration::ZERO));

    let mut story = vec![Line::styled(
        about.title.clone(),
        Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
    )];
    story.push(Line::default());
    for text in &about.paragraphs {
        story.extend(paragraph(
            text,
            width,
            Style::default().fg(TEXT_SECONDARY),
            Alignment::Left,
        ));
        story.push(Line::default());
    }
    push_block(&mut out, story, reveal.progress(Duration::from_millis(200)));

    let inner = width.saturating_sub(4);
    let mut facts = vec![Line::styled(
        "Education & Certifications",
        Style::default().fg(CYAN).add_modifier(Modifier::BOLD),
    )];
    for text in [&about.education, &about.certifications_blurb] {
        facts.extend(paragraph(
            text,
            inner,
            Style::default().fg(TEXT_SECONDARY),
            Alignment::Left,
        ));
    }
    let mut aside = card(facts, width, BORDER_SUBTLE);
    aside.push(Line::default());
    for link in &about.links {
        aside.push(Line::from(vec![
            Span::styled(
                format!("{:<10}", link.label),
                Style::default().fg(CYAN).add_modifier(Modifier::BOLD),
            ),
            Span::styled(link.url.clone(), Style::default().fg(TEXT_MUTED)),
        ]));
    }
    aside.push(Line::default());
    push_block(&mut out, aside, reveal.progress(Duration::from_millis(400)));
    out
}
