//! Single-page portfolio rendered in the terminal.
//!
//! The page is a tall document of sections that scrolls under the terminal
//! window. A visibility observer reports which sections are in view, and a
//! small state machine in [`nav`] decides which navigation item is active.

pub mod app;
pub mod cli;
pub mod config;
pub mod content;
pub mod dispatch;
pub mod entrance;
pub mod error;
pub mod input;
pub mod models;
pub mod nav;
pub mod observer;
pub mod scene;
pub mod scroll;
pub mod theme;
pub mod ui;

pub use error::{FolioError, Result};
