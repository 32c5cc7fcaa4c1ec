//! Built-in theme definitions

use ratatui::style::Color;

use super::Theme;

/// Dark slate with blue accents
pub fn midnight() -> Theme {
    Theme {
        name: "midnight".to_string(),
        display_name: "Midnight".to_string(),
        bg_color: Color::Rgb(17, 24, 39),
        text_color: Color::Rgb(229, 231, 235),
        dim_color: Color::Rgb(156, 163, 175),
        hidden_color: Color::Rgb(31, 41, 55),
        accent_color: Color::Rgb(96, 165, 250),
        border_color: Color::Rgb(55, 65, 81),
        highlight_bg_color: Color::Rgb(30, 44, 78),
        status_bar_bg_color: Color::Rgb(31, 41, 55),
        scrollbar_bg_color: Color::Rgb(40, 50, 66),
    }
}

/// Light background, ink text
pub fn paper() -> Theme {
    Theme {
        name: "paper".to_string(),
        display_name: "Paper".to_string(),
        bg_color: Color::Rgb(250, 248, 243),
        text_color: Color::Rgb(40, 40, 40),
        dim_color: Color::Rgb(120, 120, 120),
        hidden_color: Color::Rgb(232, 229, 222),
        accent_color: Color::Rgb(124, 58, 237),
        border_color: Color::Rgb(210, 205, 195),
        highlight_bg_color: Color::Rgb(237, 233, 254),
        status_bar_bg_color: Color::Rgb(238, 235, 228),
        scrollbar_bg_color: Color::Rgb(225, 221, 212),
    }
}

/// Native terminal palette
pub fn terminal() -> Theme {
    Theme {
        name: "terminal".to_string(),
        display_name: "Terminal".to_string(),
        bg_color: Color::Reset,
        text_color: Color::Reset,
        dim_color: Color::Gray,
        hidden_color: Color::DarkGray,
        accent_color: Color::Cyan,
        border_color: Color::DarkGray,
        highlight_bg_color: Color::Reset,
        status_bar_bg_color: Color::Reset,
        scrollbar_bg_color: Color::DarkGray,
    }
}
