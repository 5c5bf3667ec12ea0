//! Section renderers.
//!
//! Each renderer turns content into styled lines for a given column width.
//! Before a section has entered the viewport its lines come out in the
//! pre-entrance state (faded into the background and pushed down); after
//! that they ease to rest. The line count does not depend on the entrance,
//! so page geometry is stable while animations run.

mod about;
mod blog;
mod contact;
mod experience;
mod hero;
mod projects;
mod skills;

use std::time::Duration;

use ratatui::prelude::*;

use crate::content::Content;
use crate::entrance::Reveal;
use crate::models::SectionId;
use crate::theme::TEXT_MUTED;

use super::motion::{fade_lines, shift_down};

/// Everything a section renderer needs.
#[derive(Clone, Copy)]
pub struct RenderCtx<'a> {
    pub content: &'a Content,
    /// Column width in cells.
    pub width: usize,
    pub viewport_height: u16,
    pub reveal: Reveal,
}

/// Delay between consecutive cards in a list.
pub const CARD_STAGGER: Duration = Duration::from_millis(200);

pub fn section_lines(section: SectionId, ctx: RenderCtx<'_>) -> Vec<Line<'static>> {
    let lines = match section {
        SectionId::Home => hero::lines(ctx),
        SectionId::About => about::lines(ctx),
        SectionId::Experience => experience::lines(ctx),
        SectionId::Projects => projects::lines(ctx),
        SectionId::Skills => skills::lines(ctx),
        SectionId::Blog => blog::lines(ctx),
        SectionId::Contact => contact::lines(ctx),
    };
    shift_down(lines, ctx.reveal.progress(Duration::ZERO))
}

pub fn footer_lines(content: &Content, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];
    for text in super::helpers::wrap_text(&content.footer, width) {
        lines.push(Line::styled(text, Style::default().fg(TEXT_MUTED)).alignment(Alignment::Center));
    }
    lines.push(Line::default());
    lines
}

/// Append `block` to `out`, faded to transition progress `t`.
fn push_block(out: &mut Vec<Line<'static>>, mut block: Vec<Line<'static>>, t: f32) {
    fade_lines(&mut block, t);
    out.append(&mut block);
}

/// Wrapped paragraph lines in a single style.
fn paragraph(text: &str, width: usize, style: Style, alignment: Alignment) -> Vec<Line<'static>> {
    super::helpers::wrap_text(text, width)
        .into_iter()
        .map(|l| Line::styled(l, style).alignment(alignment))
        .collect()
}

/// A bullet item with a hanging indent.
fn bullet(text: &str, width: usize, marker: Span<'static>, style: Style) -> Vec<Line<'static>> {
    let wrapped = super::helpers::wrap_text(text, width.saturating_sub(2));
    wrapped
        .into_iter()
        .enumerate()
        .map(|(i, l)| {
            let lead = if i == 0 { marker.clone() } else { Span::raw("  ") };
            Line::from(vec![lead, Span::styled(l, style)])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(content: &Content, reveal: Reveal) -> RenderCtx<'_> {
        RenderCtx {
            content,
            width: 80,
            viewport_height: 30,
            reveal,
        }
    }

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_height_independent_of_entrance() {
        let content = Content::default();
        for id in SectionId::ALL {
            let hidden = section_lines(id, ctx(&content, Reveal::hidden()));
            let settled = section_lines(id, ctx(&content, Reveal::settled()));
            assert_eq!(hidden.len(), settled.len(), "{id} changed height");
        }
    }

    #[test]
    fn test_experience_renders_in_registry_order() {
        let content = Content::default();
        let body = text(&section_lines(SectionId::Experience, ctx(&content, Reveal::settled())));
        let gulf = body.find("GULF AFRICAN BANK").unwrap();
        let voi = body.find("VOI WINNERS HOUSING COOPERATIVE SOCIETY LIMITED").unwrap();
        let numeral = body.find("NUMERAL IOT LIMITED").unwrap();
        assert!(gulf < voi && voi < numeral);
    }

    #[test]
    fn test_projects_featured_before_other() {
        let content = Content::default();
        let body = text(&section_lines(SectionId::Projects, ctx(&content, Reveal::settled())));
        let featured_last = body.find("Multi-Tool System Monitor").unwrap();
        let other_heading = body.find("Other Projects").unwrap();
        let other_first = body.find("SHOP YETU3D").unwrap();
        let other_last = body.find("Catch the Falling Squares Online").unwrap();
        assert!(featured_last < other_heading);
        assert!(other_heading < other_first && other_first < other_last);
    }

    #[test]
    fn test_blog_posts_in_order() {
        let content = Content::default();
        let body = text(&section_lines(SectionId::Blog, ctx(&content, Reveal::settled())));
        let first = body.find("June 13, 2025").unwrap();
        let second = body.find("June 20, 2025").unwrap();
        let third = body.find("June 25, 2025").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_hero_fills_viewport() {
        let content = Content::default();
        let lines = section_lines(SectionId::Home, ctx(&content, Reveal::settled()));
        assert!(lines.len() >= 30);
        assert!(text(&lines).contains("Explore My Work"));
    }

    #[test]
    fn test_skills_show_levels() {
        let content = Content::default();
        let body = text(&section_lines(SectionId::Skills, ctx(&content, Reveal::settled())));
        assert!(body.contains("Windows 10/11"));
        assert!(body.contains("95%"));
        assert!(body.contains("Professional Certifications"));
    }

    #[test]
    fn test_contact_lists_details() {
        let content = Content::default();
        let body = text(&section_lines(SectionId::Contact, ctx(&content, Reveal::settled())));
        assert!(body.contains("rodneyroygitonga@gmail.com"));
        assert!(body.contains("Nairobi, Kenya"));
        assert!(body.contains("Send Message"));
    }

    #[test]
    fn test_footer_wraps() {
        let content = Content::default();
        let lines = footer_lines(&content, 30);
        assert!(lines.len() > 3);
    }
}
