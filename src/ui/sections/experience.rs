use std::time::Duration;

use ratatui::prelude::*;

use super::{CARD_STAGGER, RenderCtx, bullet, paragraph, push_block};
use crate::content::ExperienceEntry;
use crate::theme::{BORDER_SUBTLE, CYAN, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::helpers::{card, section_heading};

pub(super) fn lines(ctx: RenderCtx<'_>) -> Vec<Line<'static>> {
    let mut out = vec![Line::default()];
    let mut heading = section_heading("Professional Experience");
    heading.push(Line::default());
    push_block(&mut out, heading, ctx.reveal.progress(Duration::ZERO));

    for (index, entry) in ctx.content.experience.iter().enumerate() {
        let mut block = entry_card(entry, ctx.width);
        block.push(Line::default());
        push_block(&mut out, block, ctx.reveal.staggered(index, CARD_STAGGER));
    }
    out
}

fn entry_card(entry: &ExperienceEntry, width: usize) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(4);
    let mut body = paragraph(
        &entry.title,
        inner,
        Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        Alignment::Left,
    );
    body.extend(paragraph(
        &entry.company,
        inner,
        Style::default().fg(CYAN).add_modifier(Modifier::BOLD),
        Alignment::Left,
    ));
    body.push(Line::styled(
        format!("◷ {}", entry.period),
        Style::default().fg(TEXT_MUTED),
    ));
    body.push(Line::default());
    body.extend(paragraph(
        &entry.description,
        inner,
        Style::default().fg(TEXT_SECONDARY),
        Alignment::Left,
    ));
    body.push(Line::default());
    for achievement in &entry.achievements {
        body.extend(bullet(
            achievement,
            inner,
            Span::styled("• ", Style::default().fg(CYAN)),
            Style::default().fg(TEXT_SECONDARY),
        ));
    }
    card(body, width, BORDER_SUBTLE)
}
