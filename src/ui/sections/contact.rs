use std::time::Duration;

use ratatui::prelude::*;

use super::{RenderCtx, paragraph, push_block};
use crate::theme::{BG_PRIMARY, BORDER_SUBTLE, CYAN, PURPLE, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::helpers::{card, section_heading, truncate};

/// Placeholder fields of the message form, in tab order.
const FORM_FIELDS: [(&str, &str); 4] = [
    ("Name", "Your full name"),
    ("Email", "you@example.com"),
    ("Subject", "What's this about?"),
    ("Message", "Tell me about your project..."),
];

pub(super) fn lines(ctx: RenderCtx<'_>) -> Vec<Line<'static>> {
    let contact = &ctx.content.contact;
    let width = ctx.width;
    let inner = width.saturating_sub(4);

    let mut out = vec![Line::default()];
    let mut heading = section_heading("Let's Connect");
    heading.push(Line::default());
    heading.extend(paragraph(
        &ctx.content.contact_intro,
        width.min(70),
        Style::default().fg(TEXT_SECONDARY),
        Alignment::Center,
    ));
    heading.push(Line::default());
    push_block(&mut out, heading, ctx.reveal.progress(Duration::ZERO));

    let mut form = vec![Line::styled(
        "Send a Message",
        Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
    )];
    for (label, placeholder) in FORM_FIELDS {
        form.push(Line::styled(label, Style::default().fg(TEXT_SECONDARY)));
        form.push(Line::from(vec![
            Span::styled("▏", Style::default().fg(CYAN)),
            Span::styled(
                truncate(placeholder, inner.saturating_sub(1)),
                Style::default().fg(TEXT_MUTED).add_modifier(Modifier::ITALIC),
            ),
        ]));
    }
    form.push(Line::default());
    form.push(
        Line::styled(
            " Send Message ➤ ",
            Style::default()
                .fg(BG_PRIMARY)
                .bg(CYAN)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center),
    );
    let mut block = card(form, width, BORDER_SUBTLE);
    block.push(Line::default());
    push_block(&mut out, block, ctx.reveal.progress(Duration::from_millis(200)));

    let mut details = vec![
        Line::styled(
            "Contact Information",
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        ),
        detail("✉", "Email", &contact.email, inner),
        detail("☎", "Phone", &contact.phone, inner),
        detail("⌖", "Location", &contact.location, inner),
        Line::default(),
    ];
    for link in &contact.links {
        details.push(detail("↗", &link.label, &link.url, inner));
    }
    let mut block = card(details, width, BORDER_SUBTLE);
    block.push(Line::default());
    push_block(&mut out, block, ctx.reveal.progress(Duration::from_millis(400)));
    out
}

fn detail(icon: &str, label: &str, value: &str, width: usize) -> Line<'static> {
    let lead = format!("{icon} {label:<9}");
    let value = truncate(value, width.saturating_sub(lead.chars().count()));
    Line::from(vec![
        Span::styled(lead, Style::default().fg(PURPLE)),
        Span::styled(value, Style::default().fg(TEXT_SECONDARY)),
    ])
}
