//! Data models for the portfolio
//!
//! This module contains the core data structures:
//! - Section identities, thresholds and the ordered registry
//! - Enums for layout state

pub mod enums;
pub mod section;

// Re-exports for convenient access
pub use enums::LayoutMode;
pub use section::{Section, SectionId, SectionRegistry, Thresholds};
