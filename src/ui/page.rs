//! Page geometry and the scrolling document view.
//!
//! The page is laid out once per width: each visible section gets an extent
//! (first row and height) in document rows, followed by the footer. The
//! viewport then shows rows `offset..offset + height` of that document.

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use super::helpers::centered_column;
use super::scene::render_scene;
use super::sections::{RenderCtx, footer_lines, section_lines};
use crate::app::App;
use crate::content::Content;
use crate::entrance::Reveal;
use crate::models::SectionId;
use crate::observer::{Extent, Viewport};
use crate::theme::BG_PRIMARY;

/// Widest the text column gets on large terminals.
pub const MAX_COLUMN_WIDTH: u16 = 100;

#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    extents: [Option<Extent>; 7],
    footer: Extent,
    viewport_height: u16,
}

impl PageLayout {
    /// Measure every section at `width` columns. Hidden sections get no
    /// extent, so there is nothing to observe or scroll to for them.
    pub fn compute(content: &Content, width: usize, viewport_height: u16, hidden: &[SectionId]) -> Self {
        let mut extents = [None; 7];
        let mut top = 0u32;
        for section in SectionId::ALL {
            if hidden.contains(&section) {
                continue;
            }
            let ctx = RenderCtx {
                content,
                width,
                viewport_height,
                reveal: Reveal::settled(),
            };
            let height = section_lines(section, ctx).len() as u32;
            extents[section.index()] = Some(Extent::new(top, height));
            top += height;
        }
        let footer = Extent::new(top, footer_lines(content, width).len() as u32);

        Self {
            extents,
            footer,
            viewport_height,
        }
    }

    pub fn extent(&self, section: SectionId) -> Option<Extent> {
        self.extents[section.index()]
    }

    /// Visible sections with their extents, in document order.
    pub fn sections(&self) -> impl Iterator<Item = (SectionId, Extent)> + '_ {
        SectionId::ALL
            .into_iter()
            .filter_map(|s| self.extent(s).map(|e| (s, e)))
    }

    pub fn footer(&self) -> Extent {
        self.footer
    }

    pub fn total_rows(&self) -> u32 {
        self.footer.bottom()
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    pub fn max_scroll(&self) -> u32 {
        self.total_rows()
            .saturating_sub(u32::from(self.viewport_height))
    }

    /// Offset that brings a section's first row to the top of the viewport,
    /// or as close as the document end allows.
    pub fn anchor(&self, section: SectionId) -> Option<u32> {
        self.extent(section).map(|e| e.top.min(self.max_scroll()))
    }

    pub fn viewport(&self, offset: u32) -> Viewport {
        Viewport::new(offset, u32::from(self.viewport_height))
    }
}

/// Screen rows an extent occupies in a viewport over `area`, plus how many
/// of its leading rows are scrolled off the top.
pub fn visible_slice(extent: Extent, offset: u32, area: Rect) -> Option<(Rect, u16)> {
    let start = extent.top.max(offset);
    let end = extent.bottom().min(offset + u32::from(area.height));
    if start >= end {
        return None;
    }
    let rect = Rect {
        x: area.x,
        y: area.y + (start - offset) as u16,
        width: area.width,
        height: (end - start) as u16,
    };
    Some((rect, (start - extent.top) as u16))
}

/// Draw the part of the document under the viewport.
pub fn render_page(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), area);

    let offset = app.scroll;
    let column = centered_column(area, MAX_COLUMN_WIDTH);

    for (section, extent) in app.layout.sections() {
        let Some((rect, skip)) = visible_slice(extent, offset, area) else {
            continue;
        };
        if section == SectionId::Home {
            render_scene(frame, rect, skip, extent.height, app);
        }
        let ctx = RenderCtx {
            content: &app.content,
            width: usize::from(column.width),
            viewport_height: app.layout.viewport_height(),
            reveal: app.entrances.reveal(section, app.settings.entrance),
        };
        let lines = section_lines(section, ctx);
        let target = Rect {
            x: column.x,
            width: column.width,
            ..rect
        };
        frame.render_widget(Paragraph::new(lines).scroll((skip, 0)), target);
    }

    if let Some((rect, skip)) = visible_slice(app.layout.footer(), offset, area) {
        let lines = footer_lines(&app.content, usize::from(column.width));
        let target = Rect {
            x: column.x,
            width: column.width,
            ..rect
        };
        frame.render_widget(Paragraph::new(lines).scroll((skip, 0)), target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_contiguous_in_order() {
        let content = Content::default();
        let layout = PageLayout::compute(&content, 80, 24, &[]);
        let mut expected_top = 0;
        let mut order = Vec::new();
        for (section, extent) in layout.sections() {
            assert_eq!(extent.top, expected_top, "{section} not contiguous");
            assert!(extent.height > 0);
            expected_top = extent.bottom();
            order.push(section);
        }
        assert_eq!(order, SectionId::ALL.to_vec());
        assert_eq!(layout.footer().top, expected_top);
    }

    #[test]
    fn test_hero_is_at_least_viewport_tall() {
        let content = Content::default();
        let layout = PageLayout::compute(&content, 80, 40, &[]);
        let hero = layout.extent(SectionId::Home).unwrap();
        assert!(hero.height >= 40);
    }

    #[test]
    fn test_hidden_section_has_no_extent() {
        let content = Content::default();
        let layout = PageLayout::compute(&content, 80, 24, &[SectionId::Blog]);
        assert!(layout.extent(SectionId::Blog).is_none());
        assert!(layout.anchor(SectionId::Blog).is_none());
        let skills = layout.extent(SectionId::Skills).unwrap();
        let contact = layout.extent(SectionId::Contact).unwrap();
        assert_eq!(skills.bottom(), contact.top);
    }

    #[test]
    fn test_anchor_clamped_to_document_end() {
        let content = Content::default();
        let layout = PageLayout::compute(&content, 80, 24, &[]);
        let contact = layout.extent(SectionId::Contact).unwrap();
        let anchor = layout.anchor(SectionId::Contact).unwrap();
        assert!(anchor <= contact.top);
        assert!(anchor <= layout.max_scroll());
        assert_eq!(layout.anchor(SectionId::Home), Some(0));
    }

    #[test]
    fn test_narrow_width_makes_taller_page() {
        let content = Content::default();
        let wide = PageLayout::compute(&content, 100, 24, &[]);
        let narrow = PageLayout::compute(&content, 40, 24, &[]);
        assert!(narrow.total_rows() > wide.total_rows());
    }

    #[test]
    fn test_visible_slice_clips_both_edges() {
        let area = Rect::new(0, 2, 80, 10);
        // Section spans rows 5..25, viewport shows 8..18.
        let (rect, skip) = visible_slice(Extent::new(5, 20), 8, area).unwrap();
        assert_eq!(skip, 3);
        assert_eq!(rect.y, 2);
        assert_eq!(rect.height, 10);

        // Section starts inside the viewport.
        let (rect, skip) = visible_slice(Extent::new(12, 20), 8, area).unwrap();
        assert_eq!(skip, 0);
        assert_eq!(rect.y, 6);
        assert_eq!(rect.height, 6);
    }

    #[test]
    fn test_visible_slice_outside_viewport() {
        let area = Rect::new(0, 0, 80, 10);
        assert!(visible_slice(Extent::new(0, 5), 5, area).is_none());
        assert!(visible_slice(Extent::new(20, 5), 5, area).is_none());
    }
}
