//! Theme module for folio
//!
//! Centralized color palette and styling constants for the neon-on-black
//! portfolio look, plus the color math used by entrance fades.

use ratatui::style::Color;

// ============================================================================
// Background Colors
// ============================================================================

/// Page background - near black (#05070a)
pub const BG_PRIMARY: Color = Color::Rgb(5, 7, 10);

/// Card background - gray-900 (#111827)
pub const BG_CARD: Color = Color::Rgb(17, 24, 39);

/// Nav bar background (#0b0f14)
pub const BG_NAV: Color = Color::Rgb(11, 15, 20);

/// Subtle cyan-tinted border (#123a44)
pub const BORDER_SUBTLE: Color = Color::Rgb(18, 58, 68);

// ============================================================================
// Accent Colors
// ============================================================================

/// Cyan-400 (#22d3ee)
pub const CYAN: Color = Color::Rgb(34, 211, 238);

/// Purple-600 (#9333ea)
pub const PURPLE: Color = Color::Rgb(147, 51, 234);

/// Pink-500 (#ec4899)
pub const PINK: Color = Color::Rgb(236, 72, 153);

/// Scene sphere (#00f5ff)
pub const SCENE_SPHERE: Color = Color::Rgb(0, 245, 255);

/// Scene cube (#ff6b6b)
pub const SCENE_CUBE: Color = Color::Rgb(255, 107, 107);

/// Scene torus (#4ecdc4)
pub const SCENE_TORUS: Color = Color::Rgb(78, 205, 196);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text - white (#f9fafb)
pub const TEXT_PRIMARY: Color = Color::Rgb(249, 250, 251);

/// Body text - gray-300 (#d1d5db)
pub const TEXT_SECONDARY: Color = Color::Rgb(209, 213, 219);

/// Muted text - gray-400 (#9ca3af)
pub const TEXT_MUTED: Color = Color::Rgb(156, 163, 175);

// ============================================================================
// Borders
// ============================================================================

pub use ratatui::symbols::border::ROUNDED as ROUNDED_BORDERS;

/// Linear blend between two colors; `t = 0` is `from`, `t = 1` is `to`.
/// Non-RGB colors snap at the halfway point.
pub fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// Color at position `t` along the cyan → purple → pink heading gradient.
pub fn gradient(t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        lerp_color(CYAN, PURPLE, t * 2.0)
    } else {
        lerp_color(PURPLE, PINK, (t - 0.5) * 2.0)
    }
}
