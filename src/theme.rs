//! Centralized theme and styling for the TUI
//!
//! This module provides a single source of truth for all colors, styles,
//! and visual constants used throughout the application. This makes it easy
//! to maintain visual consistency and enables future theming support.

#![allow(dead_code)]

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
/// All colors should be defined here rather than hardcoded in components
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors (backgrounds, foregrounds)
    // -------------------------------------------------------------------------

    /// Primary dark background - used for most panels and dialogs
    pub const BG_PRIMARY: Color = Color::Rgb(18, 18, 26);

    /// Alternative dark background - used for contrast areas
    pub const BG_SECONDARY: Color = Color::Rgb(28, 28, 38);

    /// Danger dialog background (destructive confirmations)
    pub const BG_DANGER: Color = Color::Rgb(30, 20, 20);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors (branding, emphasis)
    // -------------------------------------------------------------------------

    /// Primary accent color - used for borders, titles, highlights
    pub const PRIMARY: Color = Color::Magenta;

    /// Secondary accent color - used for selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    /// Tertiary accent color
    pub const TERTIARY: Color = Color::Blue;

    // -------------------------------------------------------------------------
    // Semantic Colors (status, feedback)
    // -------------------------------------------------------------------------

    /// Success/positive feedback (in stock, order delivered)
    pub const SUCCESS: Color = Color::Green;

    /// Warning/caution feedback (low stock, pending orders)
    pub const WARNING: Color = Color::Yellow;

    /// Error/danger feedback (validation failures, cancelled orders)
    pub const ERROR: Color = Color::Red;

    /// Informational feedback
    pub const INFO: Color = Color::Blue;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Magenta;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected item highlight background
    pub const SELECTED_BG: Color = Color::Yellow;

    /// Selected item text (for contrast on yellow bg)
    pub const SELECTED_FG: Color = Color::Black;

    /// Unselected list item
    pub const UNSELECTED: Color = Color::Gray;

    /// Price tags
    pub const PRICE: Color = Color::Green;

    /// Carousel page-dot for the active page
    pub const DOT_ACTIVE: Color = Color::Yellow;

    /// Carousel page-dot for inactive pages
    pub const DOT_INACTIVE: Color = Color::DarkGray;
}

// =============================================================================
// SHARED STYLES
// =============================================================================

/// Pre-built styles for common UI elements
pub struct Styles;

impl Styles {
    /// Panel/section title style
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Currently selected list row
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Unselected list row
    pub fn unselected() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Price text
    pub fn price() -> Style {
        Style::default()
            .fg(Colors::PRICE)
            .add_modifier(Modifier::BOLD)
    }

    /// Muted helper/instruction text
    pub fn hint() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Validation error text inside dialogs
    pub fn error() -> Style {
        Style::default()
            .fg(Colors::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    /// Status bar message
    pub fn status() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }
}

/// Order status to color mapping for list and detail views
pub fn order_status_color(status: crate::types::OrderStatus) -> Color {
    use crate::types::OrderStatus;
    match status {
        OrderStatus::Pending => Colors::WARNING,
        OrderStatus::Confirmed => Colors::INFO,
        OrderStatus::Shipped => Colors::PRIMARY,
        OrderStatus::Delivered => Colors::SUCCESS,
        OrderStatus::Cancelled => Colors::ERROR,
    }
}
