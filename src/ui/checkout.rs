//! Cart, checkout, and order history rendering

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use super::header::HeaderRenderer;
use crate::app::AppState;
use crate::theme::{Colors, Styles, order_status_color};
use crate::types::Money;

/// Render the cart screen
pub fn render_cart_in_area(f: &mut Frame, state: &AppState, area: Rect, header: &HeaderRenderer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(6),    // Lines
            Constraint::Length(3), // Totals
        ])
        .split(area);

    header.render_title(f, chunks[0], "Your Cart");

    let cart = &state.store.state().cart;
    if cart.is_empty() {
        let empty = Paragraph::new("Your cart is empty - browse the store and add something")
            .style(Styles::hint())
            .block(Block::default().borders(Borders::ALL).title(" Lines "));
        f.render_widget(empty, chunks[1]);
    } else {
        let items: Vec<ListItem> = cart
            .items
            .iter()
            .enumerate()
            .skip(state.cart_scroll.visible_range().start)
            .take(state.cart_scroll.visible_items)
            .map(|(index, item)| {
                let selected = index == state.cart_scroll.selected_index;
                let style = if selected {
                    Styles::selected()
                } else {
                    Styles::unselected()
                };
                let prefix = if selected { "▸ " } else { "  " };
                ListItem::new(format!(
                    "{prefix}{:>2} × {:<32} {:>9}",
                    item.quantity,
                    item.name,
                    item.line_total()
                        .display_with(&state.config.currency_symbol)
                ))
                .style(style)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Lines ({}) ", cart.items.len()))
                .title_style(Styles::title())
                .border_style(Style::default().fg(Colors::PRIMARY)),
        );
        f.render_widget(list, chunks[1]);
    }

    let subtotal = state.store.cart_subtotal();
    let totals = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} units", state.store.cart_unit_count()),
            Styles::hint(),
        ),
        Span::raw("    "),
        Span::styled("Subtotal: ", Styles::unselected()),
        Span::styled(
            subtotal.display_with(&state.config.currency_symbol),
            Styles::price(),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(totals, chunks[2]);
}

/// Render the checkout summary screen
pub fn render_checkout_in_area(
    f: &mut Frame,
    state: &AppState,
    area: Rect,
    header: &HeaderRenderer,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Summary
            Constraint::Length(2), // Hint
        ])
        .split(area);

    header.render_title(f, chunks[0], "Checkout");

    let cart = &state.store.state().cart;
    let symbol = &state.config.currency_symbol;

    let mut lines: Vec<Line> = Vec::new();
    for item in &cart.items {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>2} × {:<32}", item.quantity, item.name),
                Styles::unselected(),
            ),
            Span::styled(
                format!("{:>9}", item.line_total().display_with(symbol)),
                Styles::price(),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Total  ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            state.store.cart_subtotal().display_with(symbol),
            Styles::price(),
        ),
    ]));
    lines.push(Line::from(""));

    match state.store.state().session.user.as_ref() {
        Some(user) => {
            lines.push(Line::from(vec![
                Span::styled("Ship to: ", Styles::hint()),
                Span::styled(user.full_name.clone(), Styles::unselected()),
            ]));
            match user.address.as_ref() {
                Some(address) => lines.push(Line::from(Span::styled(
                    address.to_string(),
                    Styles::unselected(),
                ))),
                None => lines.push(Line::from(Span::styled(
                    "No shipping address on file - add one from the Account screen",
                    Styles::error(),
                ))),
            }
        }
        None => lines.push(Line::from(Span::styled(
            "Sign in to place an order",
            Styles::error(),
        ))),
    }

    let summary = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Order Summary ")
                .title_style(Styles::title())
                .border_style(Style::default().fg(Colors::PRIMARY)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(summary, chunks[1]);

    let hint = Paragraph::new("Enter place order  ·  B back to cart").style(Styles::hint());
    f.render_widget(hint, chunks[2]);
}

/// Render the order history screen
pub fn render_orders_in_area(f: &mut Frame, state: &AppState, area: Rect, header: &HeaderRenderer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(6),    // Orders
        ])
        .split(area);

    header.render_title(f, chunks[0], "Your Orders");

    let orders = &state.store.state().orders.orders;
    if orders.is_empty() {
        let empty = Paragraph::new("No orders yet")
            .style(Styles::hint())
            .block(Block::default().borders(Borders::ALL).title(" History "));
        f.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = orders
        .iter()
        .enumerate()
        .skip(state.orders_scroll.visible_range().start)
        .take(state.orders_scroll.visible_items)
        .map(|(index, order)| {
            let selected = index == state.orders_scroll.selected_index;
            let prefix = if selected { "▸ " } else { "  " };
            let row = Line::from(vec![
                Span::styled(
                    format!(
                        "{prefix}#{}  {}  ",
                        order.id.short(),
                        order.placed_at.format("%Y-%m-%d %H:%M")
                    ),
                    if selected {
                        Styles::selected()
                    } else {
                        Styles::unselected()
                    },
                ),
                Span::styled(
                    format!("{:<10}", order.status.to_string()),
                    Style::default().fg(order_status_color(order.status)),
                ),
                Span::styled(
                    format!(
                        "{:>9}",
                        order.total.display_with(&state.config.currency_symbol)
                    ),
                    Styles::price(),
                ),
            ]);
            ListItem::new(row)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" History ({}) ", orders.len()))
            .title_style(Styles::title())
            .border_style(Style::default().fg(Colors::PRIMARY)),
    );
    f.render_widget(list, chunks[1]);
}

/// Render the order detail screen
pub fn render_order_detail_in_area(
    f: &mut Frame,
    state: &AppState,
    area: Rect,
    header: &HeaderRenderer,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Detail
            Constraint::Length(2), // Hint
        ])
        .split(area);

    let order = state.selected_order.and_then(|id| state.store.order_by_id(id));

    let Some(order) = order else {
        header.render_title(f, chunks[0], "Order");
        let missing = Paragraph::new("Order not found")
            .style(Styles::error())
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(missing, chunks[1]);
        return;
    };

    header.render_title(f, chunks[0], &format!("Order #{}", order.id.short()));

    let symbol = &state.config.currency_symbol;
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Status: ", Styles::hint()),
            Span::styled(
                order.status.to_string(),
                Style::default()
                    .fg(order_status_color(order.status))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Placed: ", Styles::hint()),
            Span::styled(
                order.placed_at.format("%Y-%m-%d %H:%M UTC").to_string(),
                Styles::unselected(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Ship to: ", Styles::hint()),
            Span::styled(order.shipping_address.to_string(), Styles::unselected()),
        ]),
        Line::from(""),
    ];

    for item in &order.items {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>2} × {:<32}", item.quantity, item.name),
                Styles::unselected(),
            ),
            Span::styled(
                format!("{:>9}", item.line_total().display_with(symbol)),
                Styles::price(),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Total  ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(order.total.display_with(symbol), Styles::price()),
    ]));

    let detail = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Detail ")
                .title_style(Styles::title())
                .border_style(Style::default().fg(Colors::PRIMARY)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(detail, chunks[1]);

    let hint = if order.status.is_cancellable() {
        "X cancel order  ·  B back"
    } else {
        "B back"
    };
    f.render_widget(Paragraph::new(hint).style(Styles::hint()), chunks[2]);
}

/// Free-shipping threshold note shown on the cart totals row
#[allow(dead_code)] // API: referenced by promotional copy
pub fn free_shipping_gap(subtotal: Money) -> Option<Money> {
    const THRESHOLD: Money = Money::from_cents(7500);
    if subtotal < THRESHOLD && !subtotal.is_zero() {
        Some(Money::from_cents(THRESHOLD.cents() - subtotal.cents()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_shipping_gap() {
        assert_eq!(
            free_shipping_gap(Money::from_cents(5000)),
            Some(Money::from_cents(2500))
        );
        assert_eq!(free_shipping_gap(Money::from_cents(7500)), None);
        assert_eq!(free_shipping_gap(Money::zero()), None);
    }
}
