//! Enums used throughout the portfolio UI

/// Terminals narrower than this get the collapsed mobile menu.
pub const DESKTOP_MIN_WIDTH: u16 = 80;

/// How the navigation bar is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    #[default]
    Desktop, // Inline nav items
    Mobile,  // Menu button with a dropdown list
}

impl LayoutMode {
    pub fn for_width(width: u16) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            LayoutMode::Desktop
        } else {
            LayoutMode::Mobile
        }
    }

    pub fn is_mobile(&self) -> bool {
        *self == LayoutMode::Mobile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_mode_for_width() {
        assert_eq!(LayoutMode::for_width(120), LayoutMode::Desktop);
        assert_eq!(LayoutMode::for_width(80), LayoutMode::Desktop);
        assert_eq!(LayoutMode::for_width(79), LayoutMode::Mobile);
    }

    #[test]
    fn test_layout_mode_default() {
        assert_eq!(LayoutMode::default(), LayoutMode::Desktop);
        assert!(!LayoutMode::default().is_mobile());
    }
}
