//! Floating window component
//!
//! Centered overlay window used by the help overlay and dialogs. The
//! window clears the area behind it so background content never bleeds
//! through.

#![allow(dead_code)]

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::Colors;

/// Sizing and chrome configuration for a floating window
#[derive(Debug, Clone)]
pub struct FloatingWindowConfig {
    pub title: String,
    pub width_percent: u16,
    pub height_percent: u16,
    pub min_width: u16,
    pub min_height: u16,
    pub max_width: u16,
    pub max_height: u16,
    pub has_border: bool,
    pub danger: bool,
}

impl Default for FloatingWindowConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            width_percent: 60,
            height_percent: 60,
            min_width: 40,
            min_height: 10,
            max_width: 90,
            max_height: 30,
            has_border: true,
            danger: false,
        }
    }
}

/// A centered overlay window
#[derive(Debug, Clone)]
pub struct FloatingWindow {
    config: FloatingWindowConfig,
}

impl FloatingWindow {
    pub fn new(config: FloatingWindowConfig) -> Self {
        Self { config }
    }

    /// Compute the centered window area within `area`
    pub fn area_within(&self, area: Rect) -> Rect {
        let width = (area.width * self.config.width_percent / 100)
            .clamp(self.config.min_width, self.config.max_width)
            .min(area.width);
        let height = (area.height * self.config.height_percent / 100)
            .clamp(self.config.min_height, self.config.max_height)
            .min(area.height);

        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width, height)
    }

    /// Render the window with the given content lines
    pub fn render(&self, f: &mut Frame, area: Rect, content: Vec<Line<'static>>) {
        let window_area = self.area_within(area);
        f.render_widget(Clear, window_area);

        let bg = if self.config.danger {
            Colors::BG_DANGER
        } else {
            Colors::BG_PRIMARY
        };

        let mut block = Block::default().style(Style::default().bg(bg));
        if self.config.has_border {
            block = block
                .borders(Borders::ALL)
                .title(format!(" {} ", self.config.title))
                .border_style(Style::default().fg(if self.config.danger {
                    Colors::ERROR
                } else {
                    Colors::BORDER_ACTIVE
                }));
        }

        let paragraph = Paragraph::new(content).block(block);
        f.render_widget(paragraph, window_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_is_centered_and_clamped() {
        let window = FloatingWindow::new(FloatingWindowConfig {
            width_percent: 50,
            height_percent: 50,
            ..Default::default()
        });

        let area = Rect::new(0, 0, 100, 40);
        let inner = window.area_within(area);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 25);
        assert_eq!(inner.y, 10);
    }

    #[test]
    fn test_area_never_exceeds_terminal() {
        let window = FloatingWindow::new(FloatingWindowConfig::default());
        let area = Rect::new(0, 0, 30, 8);
        let inner = window.area_within(area);
        assert!(inner.width <= 30);
        assert!(inner.height <= 8);
    }
}
