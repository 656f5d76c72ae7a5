use ratatui::style::Color;

use crate::model::config::UiConfig;
use crate::model::task::Priority;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub urgent: Color,
    pub medium: Color,
    pub low: Color,
    pub selection_bg: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            urgent: Color::Rgb(0xFF, 0x44, 0x44),
            medium: Color::Rgb(0xFF, 0xD7, 0x00),
            low: Color::Rgb(0x44, 0xFF, 0x88),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            warning: Color::Rgb(0xFF, 0xD7, 0x00),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "urgent" => theme.urgent = color,
                "medium" => theme.medium = color,
                "low" => theme.low = color,
                "selection_bg" => theme.selection_bg = color,
                "warning" => theme.warning = color,
                _ => {}
            }
        }
        theme
    }

    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::Urgent => self.urgent,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn config_overrides_named_slots() {
        let mut colors = HashMap::new();
        colors.insert("highlight".to_string(), "#112233".to_string());
        colors.insert("bogus".to_string(), "#445566".to_string());
        colors.insert("urgent".to_string(), "not-a-color".to_string());
        let theme = Theme::from_config(&UiConfig { colors });

        assert_eq!(theme.highlight, Color::Rgb(0x11, 0x22, 0x33));
        // Unknown keys and unparseable values fall back to defaults
        assert_eq!(theme.urgent, Theme::default().urgent);
    }
}
