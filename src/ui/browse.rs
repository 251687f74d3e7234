//! Home, browse, and product detail rendering

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use strum::IntoEnumIterator;

use super::header::HeaderRenderer;
use crate::app::AppState;
use crate::components::product_card::{ProductCard, rating_stars};
use crate::theme::{Colors, Styles};
use crate::types::Category;

/// Category rows on the Home menu: "All products" plus each category
pub fn home_menu_len() -> usize {
    Category::iter().count() + 1
}

/// Render the Home screen: category menu plus featured products
pub fn render_home_in_area(f: &mut Frame, state: &AppState, area: Rect, header: &HeaderRenderer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Header
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Content
        ])
        .split(area);

    header.render_header(f, chunks[0]);
    header.render_title(f, chunks[1], "Browse the store");

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[2]);

    // Category menu
    let products = &state.store.state().catalog.products;
    let mut rows: Vec<(String, usize)> = vec![("All products".to_string(), products.len())];
    for category in Category::iter() {
        let count = products.iter().filter(|p| p.category == category).count();
        rows.push((category.label().to_string(), count));
    }

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(index, (name, count))| {
            let style = if index == state.home_selection {
                Styles::selected()
            } else {
                Styles::unselected()
            };
            let prefix = if index == state.home_selection {
                "▸ "
            } else {
                "  "
            };
            ListItem::new(format!("{prefix}{name}  ({count})")).style(style)
        })
        .collect();

    let menu = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Departments ")
            .title_style(Styles::title())
            .border_style(Style::default().fg(Colors::PRIMARY)),
    );
    f.render_widget(menu, content_chunks[0]);

    // Featured panel: best-rated products across the catalog
    let mut featured: Vec<_> = products.iter().collect();
    featured.sort_by(|a, b| b.rating.total_cmp(&a.rating));

    let mut lines: Vec<Line> = Vec::new();
    if state.store.state().catalog.loading {
        lines.push(Line::from(Span::styled(
            "Loading catalog...",
            Styles::hint(),
        )));
    } else if let Some(ref error) = state.store.state().catalog.last_error {
        lines.push(Line::from(Span::styled(
            format!("Catalog unavailable: {error}"),
            Styles::error(),
        )));
    } else {
        for product in featured.iter().take(6) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", rating_stars(product.rating)),
                    Style::default().fg(Colors::SECONDARY),
                ),
                Span::styled(product.name.clone(), Styles::unselected()),
                Span::raw("  "),
                Span::styled(
                    product.price.display_with(&state.config.currency_symbol),
                    Styles::price(),
                ),
            ]));
        }
    }

    let featured_widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Top Rated ")
                .title_style(Styles::title())
                .border_style(Style::default().fg(Colors::BORDER_INACTIVE)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(featured_widget, content_chunks[1]);
}

/// Render the Browse screen: product list plus detail panel
pub fn render_browse_in_area(f: &mut Frame, state: &AppState, area: Rect, header: &HeaderRenderer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Content
        ])
        .split(area);

    let catalog = &state.store.state().catalog;
    let mut title = match catalog.category_filter {
        Some(category) => format!("Browse - {}", category.label()),
        None => "Browse - All products".to_string(),
    };
    if !catalog.search_query.is_empty() {
        title.push_str(&format!("  ·  \"{}\"", catalog.search_query));
    }
    header.render_title(f, chunks[0], &title);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let products = state.store.visible_products();

    let items: Vec<ListItem> = products
        .iter()
        .enumerate()
        .skip(state.browse_scroll.visible_range().start)
        .take(state.browse_scroll.visible_items)
        .map(|(index, product)| {
            let selected = index == state.browse_scroll.selected_index;
            let style = if selected {
                Styles::selected()
            } else {
                Styles::unselected()
            };
            let prefix = if selected { "▸ " } else { "  " };
            ListItem::new(format!(
                "{prefix}{:<34} {:>9}",
                clip(&product.name, 34),
                product.price.display_with(&state.config.currency_symbol)
            ))
            .style(style)
        })
        .collect();

    let list_title = format!(" Products ({}) ", products.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(list_title)
            .title_style(Styles::title())
            .border_style(Style::default().fg(Colors::PRIMARY)),
    );
    f.render_widget(list, content_chunks[0]);

    // Detail panel for the highlighted product
    if let Some(product) = products.get(state.browse_scroll.selected_index) {
        ProductCard::new(product, &state.config.currency_symbol).render(f, content_chunks[1]);
    } else {
        let empty = Paragraph::new("No products match the current filters")
            .style(Styles::hint())
            .block(Block::default().borders(Borders::ALL).title(" Product "));
        f.render_widget(empty, content_chunks[1]);
    }
}

/// Render the product detail screen
pub fn render_product_detail_in_area(
    f: &mut Frame,
    state: &AppState,
    area: Rect,
    header: &HeaderRenderer,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Card
            Constraint::Length(2), // Hint
        ])
        .split(area);

    let product = state
        .selected_product
        .and_then(|id| state.store.product_by_id(id));

    let Some(product) = product else {
        header.render_title(f, chunks[0], "Product");
        let missing = Paragraph::new("Product is no longer available")
            .style(Styles::error())
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(missing, chunks[1]);
        return;
    };

    header.render_title(f, chunks[0], &product.name);
    ProductCard::new(product, &state.config.currency_symbol)
        .expanded()
        .render(f, chunks[1]);

    let in_cart = state
        .store
        .state()
        .cart
        .items
        .iter()
        .find(|i| i.product_id == product.id)
        .map(|i| i.quantity)
        .unwrap_or(0);
    let hint = if in_cart > 0 {
        format!("Enter add to cart ({in_cart} in cart)  ·  C cart  ·  B back")
    } else {
        "Enter add to cart  ·  C cart  ·  B back".to_string()
    };
    let hint_widget = Paragraph::new(hint).style(Styles::hint());
    f.render_widget(hint_widget, chunks[2]);
}

/// Clip a name to fit a fixed-width list column
fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let clipped: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{clipped}…")
    }
}

/// Selectable category for a Home menu row (None = all products)
pub fn home_selection_category(selection: usize) -> Option<Category> {
    if selection == 0 {
        None
    } else {
        Category::iter().nth(selection - 1)
    }
}
