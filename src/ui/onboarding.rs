//! Onboarding screen rendering
//!
//! Draws the looping promo carousel: the slide nearest the current offset,
//! page dots for the real slides, and the get-started hints. The controller
//! decides which page is visible; this module only draws it.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::header::HeaderRenderer;
use crate::app::AppState;
use crate::theme::{Colors, Styles};
use crate::types::PromoSlide;

/// Render the onboarding screen in the given area
pub fn render_onboarding_in_area(
    f: &mut Frame,
    state: &AppState,
    area: Rect,
    header: &HeaderRenderer,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Header
            Constraint::Min(9),    // Slide
            Constraint::Length(1), // Page dots
            Constraint::Length(2), // Hint
        ])
        .split(area);

    header.render_header(f, chunks[0]);

    let Some(carousel) = state.onboarding.as_ref() else {
        // Empty slide deck: static placeholder, nothing scrolls
        let placeholder = Paragraph::new("No promotions right now - press Enter to continue")
            .alignment(Alignment::Center)
            .style(Styles::hint())
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(placeholder, chunks[1]);
        return;
    };

    let extended = carousel.extended_items();
    let visible = carousel.visible_extended_index();
    if let Some(slide) = extended.get(visible) {
        render_slide(f, slide, chunks[1]);
    }

    render_page_dots(f, carousel.len(), carousel.visible_real_index(), chunks[2]);

    let hint = Paragraph::new("Left/Right browse  ·  Enter get started  ·  S skip")
        .alignment(Alignment::Center)
        .style(Styles::hint());
    f.render_widget(hint, chunks[3]);
}

/// Render one slide as a full-width page
fn render_slide(f: &mut Frame, slide: &PromoSlide, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Colors::BORDER_ACTIVE))
        .style(Style::default().bg(Colors::BG_SECONDARY));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let pad = inner.height.saturating_sub(5) / 2;
    let mut lines: Vec<Line> = (0..pad).map(|_| Line::from("")).collect();
    lines.push(Line::from(vec![Span::styled(
        slide.title.clone(),
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD),
    )]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        slide.tagline.clone(),
        Style::default().fg(Colors::FG_PRIMARY),
    )]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        format!("art: {}", slide.image.as_str()),
        Styles::hint(),
    )]));

    let slide_widget = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(slide_widget, inner);
}

/// Render one dot per real slide, highlighting the visible one
fn render_page_dots(f: &mut Frame, count: usize, active: usize, area: Rect) {
    let mut spans: Vec<Span> = Vec::with_capacity(count * 2);
    for i in 0..count {
        let style = if i == active {
            Style::default().fg(Colors::DOT_ACTIVE)
        } else {
            Style::default().fg(Colors::DOT_INACTIVE)
        };
        spans.push(Span::styled("●", style));
        if i + 1 < count {
            spans.push(Span::raw(" "));
        }
    }
    let dots = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(dots, area);
}
