//! Colors resolved from the theme configuration.

use std::str::FromStr;

use ratatui::style::Color;
use tracing::warn;

use crate::config::ThemeConfig;

/// Resolved theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub up: Color,
    pub down: Color,
    pub border: Color,
    pub muted: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            up: Color::Green,
            down: Color::Red,
            border: Color::DarkGray,
            muted: Color::Gray,
        }
    }
}

impl From<&ThemeConfig> for Palette {
    /// Unparseable entries fall back to the built-in color.
    fn from(theme: &ThemeConfig) -> Self {
        let fallback = Self::default();
        Self {
            accent: parse_color("accent", &theme.accent, fallback.accent),
            up: parse_color("up", &theme.up, fallback.up),
            down: parse_color("down", &theme.down, fallback.down),
            border: parse_color("border", &theme.border, fallback.border),
            muted: parse_color("muted", &theme.muted, fallback.muted),
        }
    }
}

impl Palette {
    /// Color for a signed change.
    pub fn change(&self, up: bool) -> Color {
        if up { self.up } else { self.down }
    }
}

fn parse_color(name: &str, value: &str, fallback: Color) -> Color {
    Color::from_str(value).unwrap_or_else(|_| {
        warn!(name, value, "Invalid theme color, using default");
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_from_default_theme() {
        let palette = Palette::from(&ThemeConfig::default());
        assert_eq!(palette.up, Color::Rgb(0x2e, 0xa0, 0x43));
        assert_eq!(palette.down, Color::Rgb(0xf8, 0x51, 0x49));
    }

    #[test]
    fn test_invalid_color_falls_back() {
        let theme = ThemeConfig {
            accent: "not-a-color".to_string(),
            up: "yellow".to_string(),
            ..ThemeConfig::default()
        };
        let palette = Palette::from(&theme);
        assert_eq!(palette.accent, Palette::default().accent);
        assert_eq!(palette.up, Color::Yellow);
    }

    #[test]
    fn test_change_color() {
        let palette = Palette::default();
        assert_eq!(palette.change(true), Color::Green);
        assert_eq!(palette.change(false), Color::Red);
    }
}
