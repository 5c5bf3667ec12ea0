use std::time::Duration;

use ratatui::prelude::*;

use super::{RenderCtx, push_block};
use crate::content::SkillCategory;
use crate::entrance::Reveal;
use crate::theme::{BG_CARD, BORDER_SUBTLE, CYAN, PURPLE, TEXT_SECONDARY, lerp_color};
use crate::ui::helpers::{card, section_heading, truncate};

const CATEGORY_STAGGER: Duration = Duration::from_millis(100);
const CERTS_DELAY: Duration = Duration::from_millis(400);

pub(super) fn lines(ctx: RenderCtx<'_>) -> Vec<Line<'static>> {
    let mut out = vec![Line::default()];
    let mut heading = section_heading("Technical Skills");
    heading.push(Line::default());
    push_block(&mut out, heading, ctx.reveal.progress(Duration::ZERO));

    for (index, category) in ctx.content.skill_categories.iter().enumerate() {
        let mut block = category_card(category, index, ctx.width, ctx.reveal);
        block.push(Line::default());
        push_block(&mut out, block, ctx.reveal.staggered(index, CATEGORY_STAGGER));
    }

    if !ctx.content.certifications.is_empty() {
        let mut certs = vec![Line::styled(
            "Professional Certifications",
            Style::default().fg(CYAN).add_modifier(Modifier::BOLD),
        )];
        for cert in &ctx.content.certifications {
            certs.push(Line::from(vec![
                Span::styled("✓ ", Style::default().fg(PURPLE)),
                Span::styled(
                    truncate(cert, ctx.width.saturating_sub(6)),
                    Style::default().fg(TEXT_SECONDARY),
                ),
            ]));
        }
        let mut block = card(certs, ctx.width, BORDER_SUBTLE);
        block.push(Line::default());
        push_block(&mut out, block, ctx.reveal.progress(CERTS_DELAY));
    }
    out
}

fn category_card(category: &SkillCategory, index: usize, width: usize, reveal: Reveal) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(4);
    let mut body = vec![Line::styled(
        category.title.clone(),
        Style::default().fg(CYAN).add_modifier(Modifier::BOLD),
    )];
    for (skill_index, skill) in category.skills.iter().enumerate() {
        let level = format!("{}%", skill.level);
        let name = truncate(&skill.name, inner.saturating_sub(level.len() + 1));
        let gap = inner.saturating_sub(name.chars().count() + level.len());
        body.push(Line::from(vec![
            Span::styled(name, Style::default().fg(TEXT_SECONDARY)),
            Span::raw(" ".repeat(gap)),
            Span::styled(level, Style::default().fg(CYAN)),
        ]));

        // Bars grow from empty to their level, one skill after another.
        let delay = CATEGORY_STAGGER.saturating_mul((index + skill_index) as u32);
        let grown = reveal.progress(delay);
        body.push(skill_bar(skill.level, grown, inner));
    }
    card(body, width, BORDER_SUBTLE)
}

/// A horizontal bar `width` cells wide filled to `level` percent of `grown`.
pub(super) fn skill_bar(level: u8, grown: f32, width: usize) -> Line<'static> {
    let fraction = f32::from(level.min(100)) / 100.0 * grown.clamp(0.0, 1.0);
    let filled = (fraction * width as f32).round() as usize;
    let filled = filled.min(width);
    let mut spans = Vec::with_capacity(filled + 1);
    for i in 0..filled {
        let t = if width > 1 { i as f32 / (width - 1) as f32 } else { 0.0 };
        spans.push(Span::styled("█", Style::default().fg(lerp_color(CYAN, PURPLE, t))));
    }
    spans.push(Span::styled(
        "░".repeat(width - filled),
        Style::default().fg(BG_CARD),
    ));
    Line::from(spans)
}
