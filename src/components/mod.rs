//! Reusable UI components
//!
//! Widgets shared across screens: the context-aware keybinding registry,
//! the floating window and help overlay, the confirmation dialog, the
//! bottom navigation bar, and the product card.

pub mod confirm_dialog;
pub mod floating_window;
pub mod help_overlay;
pub mod keybindings;
pub mod nav_bar;
pub mod product_card;
