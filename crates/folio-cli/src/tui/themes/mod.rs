//! Color themes

mod definitions;
mod registry;

use once_cell::sync::Lazy;
use ratatui::style::Color;

pub use registry::ThemeRegistry;

/// All built-in themes, keyed by name
pub static THEME_REGISTRY: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::new);

/// Name of the theme used when none (or an unknown one) is requested
pub const DEFAULT_THEME: &str = "midnight";

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub display_name: String,
    pub bg_color: Color,
    pub text_color: Color,
    pub dim_color: Color,
    /// Color of content that has not been revealed yet
    pub hidden_color: Color,
    pub accent_color: Color,
    pub border_color: Color,
    /// Background of the active navigation entry
    pub highlight_bg_color: Color,
    pub status_bar_bg_color: Color,
    pub scrollbar_bg_color: Color,
}

/// Interpolate between two colors
///
/// RGB colors blend linearly; anything else switches halfway.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}
