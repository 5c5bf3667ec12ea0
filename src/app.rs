//! Application state and core logic for the portfolio.
//!
//! This module contains the `App` struct which owns the content, the page
//! layout and every piece of interactive state, and routes all events
//! through a single FIFO dispatcher.

use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::content::Content;
use crate::dispatch::{AppEvent, Dispatcher, MAX_EVENTS_PER_FRAME};
use crate::entrance::Entrances;
use crate::models::{LayoutMode, SectionId, SectionRegistry};
use crate::nav::{NavEffect, NavEvent, NavState};
use crate::observer::{Signal, VisibilityObserver};
use crate::scene::{Pose, Scene, poses};
use crate::scroll::{ScrollTracker, SmoothScroll, scroll_by};
use crate::ui::helpers::centered_column;
use crate::ui::page::MAX_COLUMN_WIDTH;
use crate::ui::{NavHit, PageLayout, hit_test, nav_layout, nav_targets, screen_areas};

/// Rows moved per mouse wheel notch.
const WHEEL_ROWS: i64 = 3;

/// Application state
pub struct App {
    pub content: Content,
    pub settings: Settings,
    pub registry: SectionRegistry,
    pub nav: NavState,
    pub tracker: ScrollTracker,
    pub observer: VisibilityObserver,
    pub entrances: Entrances,
    pub layout: PageLayout,
    // Document row at the top of the viewport
    pub scroll: u32,
    // In-flight animated scroll, if any
    pub smooth: Option<SmoothScroll>,
    // Backdrop geometry, filled in once the loader finishes
    pub scene: Option<Scene>,
    // Nav item that Enter activates
    pub nav_focus: usize,
    // Terminal size
    pub size: Rect,
    // Time since start, drives the idle scene motion
    pub elapsed: Duration,
    pub dispatcher: Dispatcher,
    pub should_quit: bool,
}

fn column_width(page: Rect) -> usize {
    usize::from(centered_column(page, MAX_COLUMN_WIDTH).width)
}

impl App {
    pub fn new(content: Content, settings: Settings, size: Rect) -> Self {
        let registry = SectionRegistry::new(&settings.thresholds);
        let nav = NavState::new(registry.first(), settings.thresholds);
        let page = screen_areas(size).page;
        let layout = PageLayout::compute(&content, column_width(page), page.height, &settings.hidden);

        let mut app = Self {
            content,
            settings,
            registry,
            nav,
            tracker: ScrollTracker::new(),
            observer: VisibilityObserver::new(),
            entrances: Entrances::new(),
            layout,
            scroll: 0,
            smooth: None,
            scene: None,
            nav_focus: 0,
            size,
            elapsed: Duration::ZERO,
            dispatcher: Dispatcher::new(),
            should_quit: false,
        };
        app.mount();
        app
    }

    /// Register every section with the observer and take the first sample.
    fn mount(&mut self) {
        for section in self.registry.iter() {
            debug!(
                section = section.label,
                order = section.order,
                threshold = section.threshold,
                "mounting section"
            );
            let extent = self.layout.extent(section.id);
            if let Err(err) = self.observer.observe(section.id, section.threshold, extent) {
                warn!("{}", err);
            }
        }
        info!(
            sections = self.layout.sections().count(),
            rows = self.layout.total_rows(),
            "page mounted"
        );
        self.dispatcher.push(AppEvent::Scrolled(self.scroll));
    }

    pub fn push(&mut self, event: AppEvent) {
        self.dispatcher.push(event);
    }

    /// Run queued events in order, including any they enqueue, up to the
    /// per-frame cap. Returns how many ran.
    pub fn dispatch(&mut self) -> usize {
        let mut handled = 0;
        while handled < MAX_EVENTS_PER_FRAME {
            let Some(event) = self.dispatcher.pop() else {
                break;
            };
            self.handle(event);
            handled += 1;
        }
        if !self.dispatcher.is_empty() {
            debug!(pending = self.dispatcher.len(), "event backlog carried to next frame");
        }
        handled
    }

    fn handle(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(Event::Key(key)) => self.handle_key(key),
            AppEvent::Input(Event::Mouse(mouse)) => self.handle_mouse(mouse),
            AppEvent::Input(Event::Resize(width, height)) => {
                self.resize(Rect::new(0, 0, width, height));
            }
            AppEvent::Input(_) => {}
            AppEvent::Tick(delta) => self.tick(delta),
            AppEvent::Scrolled(offset) => self.on_scrolled(offset),
            AppEvent::Observed(Signal::Visibility(ev)) => {
                self.nav.apply(NavEvent::Visibility(ev));
            }
            AppEvent::Observed(Signal::Entered(section)) => {
                if self.entrances.mark(section) {
                    debug!(%section, "section entered");
                }
            }
            AppEvent::Navigate(id) => {
                let effect = self.nav.navigate(&id);
                self.perform(effect);
            }
            AppEvent::SceneReady(scene) => {
                debug!(segments = scene.segment_count(), "scene ready");
                self.scene = Some(scene);
            }
            AppEvent::Quit => self.should_quit = true,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let viewport = i64::from(self.layout.viewport_height());
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.push(AppEvent::Quit);
            }
            KeyCode::Char('q') => self.push(AppEvent::Quit),
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                self.click_item(index);
            }
            KeyCode::Tab => self.move_focus(1),
            KeyCode::BackTab => self.move_focus(-1),
            KeyCode::Enter => self.click_item(self.nav_focus),
            KeyCode::Char('m') => {
                self.nav.apply(NavEvent::ToggleMenu);
            }
            KeyCode::Esc => {
                self.nav.apply(NavEvent::CloseMenu);
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll_rows(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_rows(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_rows(viewport),
            KeyCode::PageUp => self.scroll_rows(-viewport),
            KeyCode::Home | KeyCode::Char('g') => self.jump(0),
            KeyCode::End | KeyCode::Char('G') => self.jump(self.layout.max_scroll()),
            // Hero buttons scroll without touching the nav state.
            KeyCode::Char('e') => self.scroll_to_section(SectionId::About),
            KeyCode::Char('c') => self.scroll_to_section(SectionId::Contact),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_rows(WHEEL_ROWS),
            MouseEventKind::ScrollUp => self.scroll_rows(-WHEEL_ROWS),
            MouseEventKind::Down(MouseButton::Left) => {
                let nav_area = screen_areas(self.size).nav;
                let targets = nav_targets(nav_area, &self.content.nav, self.nav.menu_open());
                match hit_test(&targets, mouse.column, mouse.row) {
                    Some(NavHit::Item(index)) => self.click_item(index),
                    Some(NavHit::MenuButton) => {
                        self.nav.apply(NavEvent::ToggleMenu);
                    }
                    None => {}
                }
            }
            _ => {}
        }
    }

    /// Click the nav item at `index`, by way of its raw id.
    fn click_item(&mut self, index: usize) {
        let Some(item) = self.content.nav.get(index) else {
            return;
        };
        self.nav_focus = index;
        self.push(AppEvent::Navigate(item.id.clone()));
    }

    fn move_focus(&mut self, step: isize) {
        let len = self.content.nav.len();
        if len == 0 {
            return;
        }
        self.nav_focus = (self.nav_focus as isize + step).rem_euclid(len as isize) as usize;
    }

    fn perform(&mut self, effect: Option<NavEffect>) {
        if let Some(NavEffect::ScrollTo(section)) = effect {
            self.scroll_to_section(section);
        }
    }

    /// Bring a section to the top of the viewport, animated unless motion
    /// is reduced. Sections that are not on the page are skipped.
    pub fn scroll_to_section(&mut self, section: SectionId) {
        let Some(target) = self.layout.anchor(section) else {
            debug!(%section, "section not on the page, scroll skipped");
            return;
        };
        if self.settings.smooth_scroll.is_zero() {
            self.smooth = None;
            self.set_scroll(target);
        } else {
            self.smooth = Some(SmoothScroll::new(
                self.scroll,
                target,
                self.settings.smooth_scroll,
            ));
        }
    }

    fn scroll_rows(&mut self, delta: i64) {
        self.smooth = None;
        self.set_scroll(scroll_by(self.scroll, delta, self.layout.max_scroll()));
    }

    fn jump(&mut self, offset: u32) {
        self.smooth = None;
        self.set_scroll(offset);
    }

    fn set_scroll(&mut self, offset: u32) {
        let offset = offset.min(self.layout.max_scroll());
        if offset != self.scroll {
            self.scroll = offset;
            self.push(AppEvent::Scrolled(offset));
        }
    }

    fn on_scrolled(&mut self, offset: u32) {
        self.tracker.record(offset);
        for signal in self.observer.sample(self.layout.viewport(offset)) {
            self.push(AppEvent::Observed(signal));
        }
    }

    fn tick(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
        self.entrances.advance(delta);
        if let Some(smooth) = self.smooth.as_mut() {
            let offset = smooth.advance(delta);
            if smooth.is_finished() {
                self.smooth = None;
            }
            self.set_scroll(offset);
        }
    }

    /// Re-measure the page for a new terminal size and resample visibility.
    pub fn resize(&mut self, size: Rect) {
        self.size = size;
        let page = screen_areas(size).page;
        self.layout = PageLayout::compute(
            &self.content,
            column_width(page),
            page.height,
            &self.settings.hidden,
        );
        for (section, extent) in self.layout.sections() {
            self.observer.relayout(section, extent);
        }
        self.scroll = self.scroll.min(self.layout.max_scroll());
        if let Some(smooth) = &self.smooth {
            let target = smooth.target().min(self.layout.max_scroll());
            self.smooth = Some(SmoothScroll::new(self.scroll, target, self.settings.smooth_scroll));
        }
        debug!(width = size.width, height = size.height, rows = self.layout.total_rows(), "resized");
        self.push(AppEvent::Scrolled(self.scroll));
    }

    pub fn layout_mode(&self) -> LayoutMode {
        nav_layout(screen_areas(self.size).nav, &self.content.nav)
    }

    /// Sphere, cube and torus poses for the current frame.
    pub fn scene_poses(&self) -> [Pose; 3] {
        let idle = (!self.settings.reduced_motion).then(|| self.elapsed.as_secs_f64());
        poses(self.tracker.offset(), idle)
    }

    /// Tear down observation before the page goes away.
    pub fn shutdown(&mut self) {
        self.observer.disconnect();
        info!(active = %self.nav.active(), "shutting down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FolioConfig;
    use crate::ui::draw;
    use ratatui::{Terminal, backend::TestBackend};

    fn reduced_motion() -> Settings {
        FolioConfig::parse("[ui]\nreduced_motion = true\n")
            .unwrap()
            .into_settings()
            .unwrap()
    }

    fn app_with(settings: Settings, width: u16, height: u16) -> App {
        let mut app = App::new(Content::default(), settings, Rect::new(0, 0, width, height));
        app.dispatch();
        app
    }

    fn app() -> App {
        app_with(reduced_motion(), 100, 30)
    }

    fn key(app: &mut App, code: KeyCode) {
        app.push(AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))));
        app.dispatch();
    }

    fn click(app: &mut App, column: u16, row: u16) {
        app.push(AppEvent::Input(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })));
        app.dispatch();
    }

    #[test]
    fn test_mount_starts_at_home() {
        let app = app();
        assert_eq!(app.nav.active(), SectionId::Home);
        assert!(!app.nav.menu_open());
        assert!(app.entrances.has_entered(SectionId::Home));
        assert!(!app.entrances.has_entered(SectionId::Contact));
        for id in SectionId::ALL {
            assert!(app.observer.is_observing(id));
        }
    }

    #[test]
    fn test_number_key_clicks_nav_item() {
        let mut app = app();
        key(&mut app, KeyCode::Char('4'));
        assert_eq!(app.nav.active(), SectionId::Projects);
        assert_eq!(Some(app.scroll), app.layout.anchor(SectionId::Projects));
        assert_eq!(app.tracker.offset(), app.scroll);
        assert!(app.entrances.has_entered(SectionId::Projects));
    }

    #[test]
    fn test_visibility_applies_after_click() {
        let mut app = app();
        key(&mut app, KeyCode::Char('4'));
        assert_eq!(app.nav.active(), SectionId::Projects);
        key(&mut app, KeyCode::Home);
        assert_eq!(app.scroll, 0);
        assert_eq!(app.nav.active(), SectionId::Home);
    }

    #[test]
    fn test_contact_click_lands_on_contact() {
        let mut app = app();
        key(&mut app, KeyCode::Char('7'));
        assert_eq!(Some(app.scroll), app.layout.anchor(SectionId::Contact));
        assert_eq!(app.nav.active(), SectionId::Contact);
        assert!(app.entrances.has_entered(SectionId::Contact));
    }

    #[test]
    fn test_unknown_nav_id_is_ignored() {
        let mut app = app();
        app.push(AppEvent::Navigate("pricing".to_string()));
        app.dispatch();
        assert_eq!(app.nav.active(), SectionId::Home);
        assert_eq!(app.scroll, 0);
        assert!(app.smooth.is_none());
    }

    #[test]
    fn test_unknown_content_nav_item_is_ignored() {
        let mut content = Content::default();
        content.nav[2].id = "pricing".to_string();
        let mut app = App::new(content, reduced_motion(), Rect::new(0, 0, 100, 30));
        app.dispatch();
        key(&mut app, KeyCode::Char('3'));
        assert_eq!(app.nav.active(), SectionId::Home);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_menu_toggles_and_closes_on_click() {
        let mut app = app_with(reduced_motion(), 60, 30);
        key(&mut app, KeyCode::Char('m'));
        assert!(app.nav.menu_open());
        key(&mut app, KeyCode::Char('m'));
        assert!(!app.nav.menu_open());

        key(&mut app, KeyCode::Char('m'));
        key(&mut app, KeyCode::Char('2'));
        assert!(!app.nav.menu_open());

        key(&mut app, KeyCode::Char('m'));
        key(&mut app, KeyCode::Esc);
        assert!(!app.nav.menu_open());
    }

    #[test]
    fn test_hidden_section_click_skips_scroll() {
        let mut settings = reduced_motion();
        settings.hidden = vec![SectionId::Blog];
        let mut app = app_with(settings, 100, 30);
        assert!(!app.observer.is_observing(SectionId::Blog));

        key(&mut app, KeyCode::Char('6'));
        assert_eq!(app.nav.active(), SectionId::Blog);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_entrance_flags_survive_scrolling_away() {
        let mut app = app();
        key(&mut app, KeyCode::End);
        assert!(app.entrances.has_entered(SectionId::Contact));
        key(&mut app, KeyCode::Home);
        assert!(app.entrances.has_entered(SectionId::Contact));
        assert_eq!(app.nav.active(), SectionId::Home);
    }

    #[test]
    fn test_scrolling_row_by_row_visits_every_section() {
        // Small terminals make several sections taller than the viewport.
        for (width, height) in [(100, 30), (80, 24), (60, 20), (40, 15)] {
            let mut app = app_with(reduced_motion(), width, height);
            let mut seen = vec![app.nav.active()];
            for _ in 0..app.layout.max_scroll() {
                key(&mut app, KeyCode::Char('j'));
                if seen.last() != Some(&app.nav.active()) {
                    seen.push(app.nav.active());
                }
            }
            assert_eq!(app.scroll, app.layout.max_scroll());
            for id in SectionId::ALL {
                assert!(app.entrances.has_entered(id), "{width}x{height}: {id} never entered");
                assert!(seen.contains(&id), "{width}x{height}: {id} never active in {seen:?}");
            }
            // Highlight follows document order on the way down.
            let positions: Vec<usize> = seen.iter().map(|s| s.index()).collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{width}x{height}: {seen:?}");
        }
    }

    #[test]
    fn test_crowded_nav_falls_back_to_menu() {
        let mut content = Content::default();
        let extra = content.nav.clone();
        content.nav.extend(extra);
        let mut app = App::new(content, reduced_motion(), Rect::new(0, 0, 100, 30));
        app.dispatch();
        assert!(app.layout_mode().is_mobile());

        let nav = screen_areas(app.size).nav;
        let (button, hit) = nav_targets(nav, &app.content.nav, false)[0];
        assert_eq!(hit, NavHit::MenuButton);
        click(&mut app, button.x, button.y);
        assert!(app.nav.menu_open());
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let mut app = app_with(Settings::default(), 100, 30);
        key(&mut app, KeyCode::Char('5'));
        assert_eq!(app.nav.active(), SectionId::Skills);
        assert!(app.smooth.is_some());

        let target = app.layout.anchor(SectionId::Skills).unwrap();
        for _ in 0..40 {
            app.push(AppEvent::Tick(Duration::from_millis(16)));
            app.dispatch();
        }
        assert!(app.smooth.is_none());
        assert_eq!(app.scroll, target);
    }

    #[test]
    fn test_manual_scroll_cancels_smooth_scroll() {
        let mut app = app_with(Settings::default(), 100, 30);
        key(&mut app, KeyCode::Char('7'));
        assert!(app.smooth.is_some());
        key(&mut app, KeyCode::Char('j'));
        assert!(app.smooth.is_none());
        assert_eq!(app.scroll, 1);
    }

    #[test]
    fn test_hero_buttons_scroll() {
        let mut app = app();
        key(&mut app, KeyCode::Char('e'));
        assert_eq!(Some(app.scroll), app.layout.anchor(SectionId::About));
        key(&mut app, KeyCode::Char('c'));
        assert_eq!(Some(app.scroll), app.layout.anchor(SectionId::Contact));
    }

    #[test]
    fn test_tab_focus_and_enter() {
        let mut app = app();
        key(&mut app, KeyCode::BackTab);
        assert_eq!(app.nav_focus, app.content.nav.len() - 1);
        key(&mut app, KeyCode::Tab);
        key(&mut app, KeyCode::Tab);
        key(&mut app, KeyCode::Tab);
        key(&mut app, KeyCode::Tab);
        assert_eq!(app.nav_focus, 3);
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.nav.active(), SectionId::Projects);
    }

    #[test]
    fn test_mouse_click_on_desktop_nav_item() {
        let mut app = app();
        let nav = screen_areas(app.size).nav;
        let targets = nav_targets(nav, &app.content.nav, false);
        let (rect, hit) = targets[3];
        assert_eq!(hit, NavHit::Item(3));
        click(&mut app, rect.x + 1, rect.y);
        assert_eq!(app.nav.active(), SectionId::Projects);
    }

    #[test]
    fn test_mouse_menu_button_and_entry() {
        let mut app = app_with(reduced_motion(), 60, 30);
        assert!(app.layout_mode().is_mobile());
        let nav = screen_areas(app.size).nav;

        let (button, _) = nav_targets(nav, &app.content.nav, false)[0];
        click(&mut app, button.x, button.y);
        assert!(app.nav.menu_open());

        let (entry, hit) = nav_targets(nav, &app.content.nav, true)[7];
        assert_eq!(hit, NavHit::Item(6));
        click(&mut app, entry.x, entry.y);
        assert!(!app.nav.menu_open());
        assert_eq!(app.nav.active(), SectionId::Contact);
    }

    #[test]
    fn test_mouse_wheel_scrolls() {
        let mut app = app();
        app.push(AppEvent::Input(Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        })));
        app.dispatch();
        assert_eq!(app.scroll, 3);
    }

    #[test]
    fn test_resize_relayouts_and_clamps() {
        let mut app = app();
        key(&mut app, KeyCode::End);
        let wide_rows = app.layout.total_rows();

        app.push(AppEvent::Input(Event::Resize(60, 30)));
        app.dispatch();
        assert!(app.layout_mode().is_mobile());
        assert!(app.layout.total_rows() > wide_rows);
        assert!(app.scroll <= app.layout.max_scroll());

        app.push(AppEvent::Input(Event::Resize(100, 30)));
        app.dispatch();
        assert_eq!(app.layout.total_rows(), wide_rows);
        assert!(app.scroll <= app.layout.max_scroll());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        key(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = self::app();
        app.push(AppEvent::Input(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        ))));
        app.dispatch();
        assert!(app.should_quit);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_scene_ready_fills_slot() {
        let mut app = app();
        assert!(app.scene.is_none());
        app.push(AppEvent::SceneReady(Scene::build()));
        app.dispatch();
        assert!(app.scene.is_some());
    }

    #[test]
    fn test_shutdown_stops_observation() {
        let mut app = app();
        app.shutdown();
        key(&mut app, KeyCode::End);
        assert_eq!(app.nav.active(), SectionId::Home);
        assert!(!app.entrances.has_entered(SectionId::Contact));
    }

    #[test]
    fn test_dispatch_caps_events_per_frame() {
        let mut app = app();
        for _ in 0..MAX_EVENTS_PER_FRAME + 10 {
            app.push(AppEvent::Tick(Duration::from_millis(1)));
        }
        assert_eq!(app.dispatch(), MAX_EVENTS_PER_FRAME);
        assert_eq!(app.dispatch(), 10);
    }

    #[test]
    fn test_draws_without_panicking() {
        for (width, height) in [(100, 30), (60, 20), (20, 6)] {
            let mut app = app_with(reduced_motion(), width, height);
            app.push(AppEvent::SceneReady(Scene::build()));
            key(&mut app, KeyCode::Char('m'));
            let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
            terminal.draw(|frame| draw(frame, &app)).unwrap();
            key(&mut app, KeyCode::End);
            terminal.draw(|frame| draw(frame, &app)).unwrap();
        }
    }

    #[test]
    fn test_draw_shows_nav_labels() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        for item in &app.content.nav {
            assert!(screen.contains(&item.label), "missing {}", item.label);
        }
        assert!(screen.contains("Explore My Work"));
    }
}
