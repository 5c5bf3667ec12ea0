//! Navigation bar and the collapsed menu.
//!
//! Hit-testing and drawing share [`nav_targets`] so a mouse click always
//! lands on what is on screen.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::helpers::{gradient_text, truncate};
use crate::app::App;
use crate::content::NavItem;
use crate::models::LayoutMode;
use crate::theme::{BG_CARD, BG_NAV, BORDER_SUBTLE, CYAN, ROUNDED_BORDERS, TEXT_PRIMARY, TEXT_SECONDARY};

pub const MENU_OPEN_ICON: &str = " ✕ ";
pub const MENU_CLOSED_ICON: &str = " ☰ ";

/// What a clickable region of the navigation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavHit {
    /// Index into the content's nav items.
    Item(usize),
    MenuButton,
}

fn item_label(item: &NavItem) -> String {
    format!(" {} ", item.label)
}

/// Columns the inline bar needs: every label plus a gap after each and one
/// column of margin.
fn inline_width(items: &[NavItem]) -> usize {
    items.iter().map(|i| item_label(i).width() + 1).sum::<usize>() + 1
}

/// Inline bar on wide terminals, collapsed menu on narrow ones or when the
/// labels do not fit on one row.
pub fn nav_layout(area: Rect, items: &[NavItem]) -> LayoutMode {
    match LayoutMode::for_width(area.width) {
        LayoutMode::Desktop if inline_width(items) <= usize::from(area.width) => LayoutMode::Desktop,
        _ => LayoutMode::Mobile,
    }
}

/// Clickable regions for the nav bar in `area` and, when open in the mobile
/// layout, the menu list below it.
pub fn nav_targets(area: Rect, items: &[NavItem], menu_open: bool) -> Vec<(Rect, NavHit)> {
    let mut targets = Vec::new();
    match nav_layout(area, items) {
        LayoutMode::Desktop => {
            // fits, so the labels start inside the area
            let mut x = area.right() - inline_width(items) as u16;
            for (index, item) in items.iter().enumerate() {
                let width = item_label(item).width() as u16;
                targets.push((Rect::new(x, area.y, width, 1), NavHit::Item(index)));
                x += width + 1;
            }
        }
        LayoutMode::Mobile => {
            let width = MENU_CLOSED_ICON.width() as u16;
            let button = Rect::new(area.right().saturating_sub(width + 1), area.y, width, 1);
            targets.push((button, NavHit::MenuButton));
            if menu_open {
                for index in 0..items.len() {
                    let row = Rect::new(area.x + 1, area.bottom() + 1 + index as u16, area.width.saturating_sub(2), 1);
                    targets.push((row, NavHit::Item(index)));
                }
            }
        }
    }
    targets
}

/// Which region, if any, a click at `(column, row)` landed on.
pub fn hit_test(targets: &[(Rect, NavHit)], column: u16, row: u16) -> Option<NavHit> {
    targets
        .iter()
        .find(|(rect, _)| rect.contains(Position::new(column, row)))
        .map(|(_, hit)| *hit)
}

fn item_style(item: &NavItem, index: usize, app: &App) -> Style {
    let active = item.id == app.nav.active().as_str();
    let mut style = if active {
        Style::default()
            .fg(CYAN)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(TEXT_SECONDARY)
    };
    if index == app.nav_focus {
        style = style.bg(BG_CARD);
    }
    style
}

pub fn render_nav(frame: &mut Frame, area: Rect, app: &App) {
    let bar = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_NAV));
    frame.render_widget(bar, area);

    let items = &app.content.nav;
    let targets = nav_targets(area, items, app.nav.menu_open());
    let first_target = targets.first().map_or(area.right(), |(rect, _)| rect.x);
    let name_width = usize::from(first_target.saturating_sub(area.x + 2));
    let name = truncate(&app.content.profile.name, name_width);
    frame.render_widget(
        Paragraph::new(Line::from(gradient_text(&name, Modifier::BOLD))),
        Rect::new(area.x + 1, area.y, name_width as u16, 1),
    );

    for (rect, hit) in &targets {
        match hit {
            NavHit::Item(index) if rect.y == area.y => {
                let item = &items[*index];
                let span = Span::styled(item_label(item), item_style(item, *index, app));
                frame.render_widget(Paragraph::new(Line::from(span)), *rect);
            }
            NavHit::MenuButton => {
                let icon = if app.nav.menu_open() {
                    MENU_OPEN_ICON
                } else {
                    MENU_CLOSED_ICON
                };
                let span = Span::styled(icon, Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD));
                frame.render_widget(Paragraph::new(Line::from(span)), *rect);
            }
            NavHit::Item(_) => {}
        }
    }
}

/// Draw the dropdown menu over the page. Only the mobile layout has one.
pub fn render_menu(frame: &mut Frame, nav_area: Rect, app: &App) {
    if !app.nav.menu_open() || !nav_layout(nav_area, &app.content.nav).is_mobile() {
        return;
    }
    let items = &app.content.nav;
    let height = (items.len() as u16 + 2).min(frame.area().bottom().saturating_sub(nav_area.bottom()));
    let area = Rect::new(nav_area.x, nav_area.bottom(), nav_area.width, height);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDERS)
            .border_style(Style::default().fg(BORDER_SUBTLE))
            .style(Style::default().bg(BG_NAV)),
        area,
    );

    for (rect, hit) in nav_targets(nav_area, items, true) {
        let NavHit::Item(index) = hit else {
            continue;
        };
        if rect.bottom() >= area.bottom() {
            break;
        }
        let item = &items[index];
        let line = Line::from(Span::styled(item_label(item), item_style(item, index, app)));
        frame.render_widget(Paragraph::new(line), rect);
    }
}
