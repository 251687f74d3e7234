//! Bottom navigation bar
//!
//! Single-line hint bar showing the most important keybindings for the
//! current mode.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::keybindings::NavBarItem;
use crate::theme::Colors;

/// One-line key hint bar
pub struct NavBar {
    items: Vec<NavBarItem>,
}

impl NavBar {
    pub fn new(items: Vec<NavBarItem>) -> Self {
        Self { items }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }

        let mut spans: Vec<Span> = Vec::new();
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  │  ", Style::default().fg(Colors::FG_MUTED)));
            }
            spans.push(Span::styled(
                item.key_display.clone(),
                Style::default()
                    .fg(Colors::SECONDARY)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {}", item.action_label),
                Style::default().fg(Colors::FG_SECONDARY),
            ));
        }

        let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(Colors::BG_SECONDARY));
        f.render_widget(bar, area);
    }
}
