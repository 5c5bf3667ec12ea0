use std::time::Duration;

use ratatui::prelude::*;

use super::{CARD_STAGGER, RenderCtx, paragraph, push_block};
use crate::content::ProjectEntry;
use crate::theme::{BG_CARD, BORDER_SUBTLE, CYAN, PURPLE, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::helpers::{card, chips, section_heading};

/// "Other Projects" trails the featured cards.
const OTHER_DELAY: Duration = Duration::from_millis(600);

pub(super) fn lines(ctx: RenderCtx<'_>) -> Vec<Line<'static>> {
    let (featured, other) = ctx.content.projects_partitioned();

    let mut out = vec![Line::default()];
    let mut heading = section_heading("Featured Projects");
    heading.push(Line::default());
    push_block(&mut out, heading, ctx.reveal.progress(Duration::ZERO));

    for (index, project) in featured.iter().enumerate() {
        let mut block = project_card(project, ctx.width, CYAN, true);
        block.push(Line::default());
        push_block(&mut out, block, ctx.reveal.staggered(index, CARD_STAGGER));
    }

    if !other.is_empty() {
        let mut block = vec![
            Line::styled(
                "Other Projects",
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center),
            Line::default(),
        ];
        for project in &other {
            block.extend(project_card(project, ctx.width, BORDER_SUBTLE, false));
        }
        block.push(Line::default());
        push_block(&mut out, block, ctx.reveal.progress(OTHER_DELAY));
    }
    out
}

fn project_card(project: &ProjectEntry, width: usize, border: Color, featured: bool) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(4);
    let title_style = Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD);
    let mut body = if featured {
        paragraph(&format!("★ {}", project.title), inner, title_style, Alignment::Left)
    } else {
        paragraph(&project.title, inner, title_style, Alignment::Left)
    };
    let description = if featured { TEXT_SECONDARY } else { TEXT_MUTED };
    body.extend(paragraph(
        &project.description,
        inner,
        Style::default().fg(description),
        Alignment::Left,
    ));
    body.extend(chips(
        &project.tech,
        "",
        Style::default().fg(CYAN).bg(BG_CARD),
        inner,
    ));
    if let Some(link) = &project.link {
        body.push(Line::from(vec![
            Span::styled("⌥ View Code ", Style::default().fg(PURPLE).add_modifier(Modifier::BOLD)),
            Span::styled(link.clone(), Style::default().fg(TEXT_MUTED)),
        ]));
    }
    card(body, width, border)
}
