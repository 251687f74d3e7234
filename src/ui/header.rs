//! Header and common widget rendering
//!
//! This module contains the ASCII art header, title rendering, the status
//! line, and the bottom navigation bar.

use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::nav_bar::NavBar;
use crate::theme::{Colors, Styles};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Header renderer containing the ASCII art header
pub struct HeaderRenderer {
    /// ASCII art header lines
    header_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    /// Create a new header renderer
    pub fn new() -> Self {
        Self {
            header_lines: Self::create_header(),
        }
    }

    /// Render the ASCII art header
    pub fn render_header(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header = Paragraph::new(self.header_lines.clone())
            .block(Block::default().borders(Borders::NONE))
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    /// Render a title section
    pub fn render_title(&self, f: &mut Frame, area: Rect, title: &str) {
        let title_widget = Paragraph::new(title)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Colors::PRIMARY));
        f.render_widget(title_widget, area);
    }

    /// Create the ASCII art header
    fn create_header() -> Vec<Line<'static>> {
        [
            " ███████ ██   ██  ██████  ██████  ████████ ██    ██ ██",
            " ██      ██   ██ ██    ██ ██   ██    ██    ██    ██ ██",
            " ███████ ███████ ██    ██ ██████     ██    ██    ██ ██",
            "      ██ ██   ██ ██    ██ ██         ██    ██    ██ ██",
            " ███████ ██   ██  ██████  ██         ██     ██████  ██",
        ]
        .iter()
        .map(|row| {
            Line::from(vec![Span::styled(
                *row,
                Style::default().fg(Colors::PRIMARY),
            )])
        })
        .collect()
    }
}

/// Render the status line above the nav bar
pub fn render_status_line(f: &mut Frame, state: &AppState, area: Rect) {
    let mut spans = vec![Span::styled(state.status_message.clone(), Styles::status())];

    // Cart badge on the right would need a second widget; keep it inline
    let units = state.store.cart_unit_count();
    if units > 0 {
        spans.push(Span::styled(
            format!("   [cart: {units}]"),
            Style::default().fg(Colors::SECONDARY),
        ));
    }

    let status = Paragraph::new(Line::from(spans));
    f.render_widget(status, area);
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let nav_items = keybinding_ctx.get_nav_items(&state.mode);
    let nav_bar = NavBar::new(nav_items);
    nav_bar.render(f, area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(&state.mode, keybinding_ctx);
    help_overlay.render(f, f.area());
}
