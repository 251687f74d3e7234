//! Sign-in, sign-up, and account screen rendering

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::header::HeaderRenderer;
use crate::app::AppState;
use crate::theme::{Colors, Styles};

/// Render the sign-in screen
pub fn render_sign_in_in_area(
    f: &mut Frame,
    _state: &AppState,
    area: Rect,
    header: &HeaderRenderer,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Header
            Constraint::Length(3), // Title
            Constraint::Min(6),    // Body
        ])
        .split(area);

    header.render_header(f, chunks[0]);
    header.render_title(f, chunks[1], "Sign In");

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Sign in to sync your cart and see your orders.",
            Styles::unselected(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Styles::selected()),
            Span::styled("  start sign in", Styles::hint()),
        ]),
        Line::from(vec![
            Span::styled("U    ", Styles::selected()),
            Span::styled("  create a new account", Styles::hint()),
        ]),
        Line::from(vec![
            Span::styled("G    ", Styles::selected()),
            Span::styled("  continue as guest", Styles::hint()),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(body, chunks[2]);
}

/// Render the sign-up screen
pub fn render_sign_up_in_area(
    f: &mut Frame,
    _state: &AppState,
    area: Rect,
    header: &HeaderRenderer,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Header
            Constraint::Length(3), // Title
            Constraint::Min(6),    // Body
        ])
        .split(area);

    header.render_header(f, chunks[0]);
    header.render_title(f, chunks[1], "Create Account");

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "You'll pick a username, email, password, and name.",
            Styles::unselected(),
        )),
        Line::from(Span::styled(
            "Members get 10% off their first order.",
            Styles::hint(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Styles::selected()),
            Span::styled("  start  ·  ", Styles::hint()),
            Span::styled("B", Styles::selected()),
            Span::styled(" back to sign in", Styles::hint()),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(body, chunks[2]);
}

/// Rows on the account screen
pub const ACCOUNT_FIELDS: [&str; 2] = ["Email", "Shipping address"];

/// Render the account screen
pub fn render_account_in_area(
    f: &mut Frame,
    state: &AppState,
    area: Rect,
    header: &HeaderRenderer,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Profile
            Constraint::Length(2), // Hint
        ])
        .split(area);

    header.render_title(f, chunks[0], "Account");

    let Some(user) = state.store.state().session.user.as_ref() else {
        let body = Paragraph::new("Not signed in")
            .style(Styles::hint())
            .block(Block::default().borders(Borders::ALL).title(" Profile "));
        f.render_widget(body, chunks[1]);
        return;
    };

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    let values = [
        user.email.clone(),
        user.address
            .as_ref()
            .map(|a| a.to_string())
            .unwrap_or_else(|| "not set".to_string()),
    ];

    let items: Vec<ListItem> = ACCOUNT_FIELDS
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let selected = index == state.account_selection;
            let style = if selected {
                Styles::selected()
            } else {
                Styles::unselected()
            };
            let prefix = if selected { "▸ " } else { "  " };
            ListItem::new(format!("{prefix}{field}")).style(style)
        })
        .collect();

    let menu = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Edit ")
            .title_style(Styles::title())
            .border_style(Style::default().fg(Colors::PRIMARY)),
    );
    f.render_widget(menu, content_chunks[0]);

    let profile = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Username:  ", Styles::hint()),
            Span::styled(
                user.username.clone(),
                Style::default()
                    .fg(Colors::FG_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Name:      ", Styles::hint()),
            Span::styled(user.full_name.clone(), Styles::unselected()),
        ]),
        Line::from(vec![
            Span::styled("Email:     ", Styles::hint()),
            Span::styled(values[0].clone(), Styles::unselected()),
        ]),
        Line::from(vec![
            Span::styled("Address:   ", Styles::hint()),
            Span::styled(values[1].clone(), Styles::unselected()),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Profile ")
            .title_style(Styles::title())
            .border_style(Style::default().fg(Colors::BORDER_INACTIVE)),
    );
    f.render_widget(profile, content_chunks[1]);

    let hint =
        Paragraph::new("Enter edit selected field  ·  S sign out  ·  B back").style(Styles::hint());
    f.render_widget(hint, chunks[2]);
}
