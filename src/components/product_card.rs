//! Product card widget
//!
//! Bordered card with name, price, rating, stock, and description. Used by
//! the browse description panel and the product detail screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::theme::{Colors, Styles};
use crate::types::Product;

/// Render a star string for a 0.0..=5.0 rating
pub fn rating_stars(rating: f32) -> String {
    let full = rating.round().clamp(0.0, 5.0) as usize;
    let mut stars = "★".repeat(full);
    stars.push_str(&"☆".repeat(5 - full));
    stars
}

/// Bordered product card
pub struct ProductCard<'a> {
    product: &'a Product,
    currency_symbol: &'a str,
    /// Show the long description (detail view) or clip to the card
    expanded: bool,
}

impl<'a> ProductCard<'a> {
    pub fn new(product: &'a Product, currency_symbol: &'a str) -> Self {
        Self {
            product,
            currency_symbol,
            expanded: false,
        }
    }

    pub fn expanded(mut self) -> Self {
        self.expanded = true;
        self
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let p = self.product;

        let stock_span = if p.stock == 0 {
            Span::styled("Out of stock", Style::default().fg(Colors::ERROR))
        } else if p.stock < 10 {
            Span::styled(
                format!("Only {} left", p.stock),
                Style::default().fg(Colors::WARNING),
            )
        } else {
            Span::styled("In stock", Style::default().fg(Colors::SUCCESS))
        };

        let mut lines = vec![
            Line::from(vec![Span::styled(
                p.name.clone(),
                Style::default()
                    .fg(Colors::FG_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(vec![
                Span::styled(
                    p.price.display_with(self.currency_symbol),
                    Styles::price(),
                ),
                Span::raw("   "),
                Span::styled(
                    format!("{} {:.1}", rating_stars(p.rating), p.rating),
                    Style::default().fg(Colors::SECONDARY),
                ),
            ]),
            Line::from(vec![
                Span::styled(
                    format!("{}  ", p.category.label()),
                    Style::default().fg(Colors::INFO),
                ),
                stock_span,
            ]),
            Line::from(""),
        ];

        lines.push(Line::from(Span::styled(
            p.description.clone(),
            Style::default().fg(Colors::FG_SECONDARY),
        )));

        if self.expanded {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("art: {}", p.image.as_str()),
                Styles::hint(),
            )));
        }

        let card = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Product ")
                    .title_style(Styles::title())
                    .border_style(Style::default().fg(Colors::BORDER_ACTIVE)),
            )
            .wrap(Wrap { trim: true });

        f.render_widget(card, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_stars() {
        assert_eq!(rating_stars(4.6), "★★★★★");
        assert_eq!(rating_stars(4.4), "★★★★☆");
        assert_eq!(rating_stars(0.0), "☆☆☆☆☆");
        assert_eq!(rating_stars(9.9), "★★★★★");
    }
}
