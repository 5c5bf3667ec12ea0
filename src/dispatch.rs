//! Serialized event queue.
//!
//! Input, timer ticks, scroll changes, visibility reports and background
//! completions all go through one FIFO queue that the UI loop drains. A
//! handler may enqueue follow-up events; they run after everything already
//! queued, never re-entrantly.

use std::collections::VecDeque;
use std::time::Duration;

use crossterm::event::Event;

use crate::observer::Signal;
use crate::scene::Scene;

#[derive(Debug)]
pub enum AppEvent {
    Input(Event),
    Tick(Duration),
    /// Viewport moved to a new document offset.
    Scrolled(u32),
    Observed(Signal),
    /// Raw navigation-item id, validated by the state machine.
    Navigate(String),
    SceneReady(Scene),
    Quit,
}

/// Upper bound on events handled per frame so rendering never starves.
pub const MAX_EVENTS_PER_FRAME: usize = 256;

#[derive(Debug, Default)]
pub struct Dispatcher {
    queue: VecDeque<AppEvent>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: AppEvent) {
        self.queue.push_back(event);
    }

    pub fn pop(&mut self) -> Option<AppEvent> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
