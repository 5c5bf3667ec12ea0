use std::time::Duration;

use ratatui::prelude::*;

use super::{CARD_STAGGER, RenderCtx, paragraph, push_block};
use crate::content::BlogPost;
use crate::theme::{BG_CARD, BORDER_SUBTLE, CYAN, PURPLE, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::helpers::{card, chips, section_heading};

pub(super) fn lines(ctx: RenderCtx<'_>) -> Vec<Line<'static>> {
    let mut out = vec![Line::default()];
    let mut heading = section_heading("Latest Blog Posts");
    heading.push(Line::default());
    heading.extend(paragraph(
        &ctx.content.blog_intro,
        ctx.width.min(70),
        Style::default().fg(TEXT_SECONDARY),
        Alignment::Center,
    ));
    heading.push(Line::default());
    push_block(&mut out, heading, ctx.reveal.progress(Duration::ZERO));

    for (index, post) in ctx.content.blog.iter().enumerate() {
        let mut block = post_card(post, ctx.width);
        block.push(Line::default());
        push_block(&mut out, block, ctx.reveal.staggered(index, CARD_STAGGER));
    }
    out
}

fn post_card(post: &BlogPost, width: usize) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(4);
    let mut body = vec![Line::from(vec![
        Span::styled(
            format!(" {} ", post.category),
            Style::default().fg(PURPLE).bg(BG_CARD).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", post.date), Style::default().fg(TEXT_MUTED)),
    ])];
    body.extend(paragraph(
        &post.title,
        inner,
        Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        Alignment::Left,
    ));
    body.extend(paragraph(
        &post.excerpt,
        inner,
        Style::default().fg(TEXT_SECONDARY),
        Alignment::Left,
    ));
    body.extend(chips(&post.tags, "#", Style::default().fg(CYAN), inner));
    body.push(Line::styled(
        "Read More →",
        Style::default().fg(CYAN).add_modifier(Modifier::BOLD),
    ));
    card(body, width, BORDER_SUBTLE)
}
