//! Input and confirmation dialog rendering

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::AppState;
use crate::components::floating_window::{FloatingWindow, FloatingWindowConfig};
use crate::input::{InputHandler, InputType};
use crate::theme::{Colors, Styles};

/// Render the active input dialog
pub fn render_input_dialog(f: &mut Frame, input_handler: &InputHandler) {
    let Some(dialog) = input_handler.dialog() else {
        return;
    };

    let window = FloatingWindow::new(FloatingWindowConfig {
        title: dialog.title.clone(),
        width_percent: 50,
        height_percent: 40,
        min_width: 44,
        min_height: 9,
        max_width: 70,
        max_height: 16,
        has_border: true,
        danger: false,
    });

    let mut lines: Vec<Line<'static>> = vec![Line::from("")];

    match &dialog.input_type {
        InputType::TextInput {
            current_value,
            placeholder,
            ..
        } => {
            lines.push(value_line(current_value, placeholder, false));
        }
        InputType::PasswordInput {
            current_value,
            placeholder,
            ..
        } => {
            lines.push(value_line(current_value, placeholder, true));
        }
        InputType::Selection {
            options,
            scroll_state,
            ..
        } => {
            for index in scroll_state.visible_range() {
                let selected = index == scroll_state.selected_index;
                let prefix = if selected { "▸ " } else { "  " };
                let style = if selected {
                    Styles::selected()
                } else {
                    Styles::unselected()
                };
                lines.push(Line::from(Span::styled(
                    format!("  {prefix}{}", options[index]),
                    style,
                )));
            }
        }
        InputType::Quantity {
            value, min, max, ..
        } => {
            lines.push(Line::from(vec![
                Span::styled("  quantity: ", Styles::hint()),
                Span::styled(
                    format!("{value}"),
                    Style::default()
                        .fg(Colors::SECONDARY)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("   ({min}-{max})"), Styles::hint()),
            ]));
        }
    }

    lines.push(Line::from(""));
    if let Some(ref error) = dialog.error {
        lines.push(Line::from(Span::styled(
            format!("  ✗ {error}"),
            Styles::error(),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        format!("  {}", dialog.instructions),
        Styles::hint(),
    )));

    window.render(f, f.area(), lines);
}

fn value_line(current_value: &str, placeholder: &str, obscured: bool) -> Line<'static> {
    if current_value.is_empty() {
        Line::from(Span::styled(
            format!("  {placeholder}"),
            Style::default()
                .fg(Colors::FG_MUTED)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        let shown = if obscured {
            "•".repeat(current_value.chars().count())
        } else {
            current_value.to_string()
        };
        Line::from(vec![
            Span::styled(format!("  {shown}"), Style::default().fg(Colors::FG_PRIMARY)),
            Span::styled("█", Style::default().fg(Colors::SECONDARY)),
        ])
    }
}

/// Render the confirmation dialog on top of the current screen
pub fn render_confirm_dialog(f: &mut Frame, state: &AppState) {
    let Some(dialog) = state.confirm_dialog.as_ref() else {
        return;
    };

    let window = FloatingWindow::new(FloatingWindowConfig {
        title: dialog.title.clone(),
        width_percent: 45,
        height_percent: 35,
        min_width: 44,
        min_height: 9,
        max_width: 64,
        max_height: 14,
        has_border: true,
        danger: dialog.danger,
    });

    let mut lines: Vec<Line<'static>> = vec![Line::from("")];
    for row in &dialog.message {
        lines.push(Line::from(Span::styled(
            format!("  {row}"),
            Styles::unselected(),
        )));
    }
    lines.push(Line::from(""));

    // No on the left, Yes on the right
    let (no_style, yes_style) = if dialog.is_confirmed() {
        (
            Styles::unselected(),
            Style::default()
                .fg(Colors::SELECTED_FG)
                .bg(Colors::SELECTED_BG)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default()
                .fg(Colors::SELECTED_FG)
                .bg(Colors::SELECTED_BG)
                .add_modifier(Modifier::BOLD),
            Styles::unselected(),
        )
    };
    lines.push(Line::from(vec![
        Span::raw("      "),
        Span::styled("  No  ", no_style),
        Span::raw("        "),
        Span::styled("  Yes  ", yes_style),
    ]));

    window.render(f, f.area(), lines);
}

/// Center-aligned paragraph helper used by empty states
#[allow(dead_code)]
pub fn centered_note(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Styles::hint())
}
