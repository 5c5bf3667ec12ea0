//! UI module for folio
//!
//! This module lays the screen out and renders it: the navigation bar on
//! top, the scrolling page beneath it and a key hint bar at the bottom.

pub mod helpers;
pub mod motion;
pub mod nav;
pub mod page;
pub mod scene;
pub mod sections;

use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;
use crate::theme::{BG_NAV, CYAN, TEXT_MUTED};

pub use nav::{NavHit, hit_test, nav_layout, nav_targets};
pub use page::PageLayout;

/// Rows taken by the navigation bar, including its bottom rule.
pub const NAV_HEIGHT: u16 = 2;
/// Rows taken by the key hint bar.
pub const HINT_HEIGHT: u16 = 1;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub nav: Rect,
    pub page: Rect,
    pub hints: Rect,
}

pub fn screen_areas(area: Rect) -> Screen {
    let [nav, page, hints] = Layout::vertical([
        Constraint::Length(NAV_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(HINT_HEIGHT),
    ])
    .areas(area);
    Screen { nav, page, hints }
}

/// Render a whole frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = screen_areas(frame.area());
    page::render_page(frame, screen.page, app);
    nav::render_nav(frame, screen.nav, app);
    nav::render_menu(frame, screen.nav, app);
    render_hints(frame, screen.hints, app);
}

fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    let key = Style::default().fg(CYAN).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(TEXT_MUTED);
    let mut spans = vec![
        Span::styled(" q", key),
        Span::styled(" quit  ", text),
        Span::styled("1-7", key),
        Span::styled(" jump  ", text),
        Span::styled("j/k", key),
        Span::styled(" scroll  ", text),
        Span::styled("Tab/Enter", key),
        Span::styled(" focus  ", text),
    ];
    if app.layout_mode().is_mobile() {
        spans.push(Span::styled("m", key));
        spans.push(Span::styled(" menu  ", text));
    }
    spans.push(Span::styled(
        format!("{}/{}", app.scroll, app.layout.max_scroll()),
        text,
    ));
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(BG_NAV)),
        area,
    );
}
