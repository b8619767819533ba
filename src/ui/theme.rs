//! Per-tick theme resolution.
//!
//! Priority order: host-supplied active palette, then the fallback
//! theme from configuration, then the built-in palette. Once resolved
//! the theme is immutable for the duration of the tick.

use crossterm::style::Color;

use crate::config::ThemeConfig;
use crate::constants::{BUILTIN_THEME_BG, BUILTIN_THEME_FG};
use crate::models::Palette;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
}

impl Theme {
    /// Hard-coded last-resort palette.
    pub fn builtin() -> Self {
        Self {
            bg: parse_color(BUILTIN_THEME_BG).unwrap_or(Color::Black),
            fg: parse_color(BUILTIN_THEME_FG).unwrap_or(Color::White),
        }
    }

    /// Resolve the theme for one tick. The second value is true when
    /// the host supplied no palette and a fallback was used.
    pub fn resolve(palette: Option<Palette>, fallback: &ThemeConfig) -> (Self, bool) {
        if let Some(p) = palette {
            return (Self { bg: p.bg, fg: p.fg }, false);
        }
        let builtin = Self::builtin();
        let theme = Self {
            bg: fallback
                .bg
                .as_deref()
                .and_then(parse_color)
                .unwrap_or(builtin.bg),
            fg: fallback
                .fg
                .as_deref()
                .and_then(parse_color)
                .unwrap_or(builtin.fg),
        };
        (theme, true)
    }
}

/// Parse a hex color string like "#FF8800" or "FF8800".
pub fn parse_color(s: &str) -> Option<Color> {
    let hex = s.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb { r, g, b })
}
