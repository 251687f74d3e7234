//! User interface rendering module
//!
//! This module is organized into submodules for better maintainability:
//! - `header` - Header, title, status line, and nav bar rendering
//! - `onboarding` - Onboarding carousel screen
//! - `browse` - Home, product list, and product detail screens
//! - `checkout` - Cart, checkout, and order screens
//! - `account` - Sign-in, sign-up, and account screens
//! - `dialogs` - Input and confirmation dialog rendering

#![allow(dead_code)]

mod account;
mod browse;
mod checkout;
mod dialogs;
mod header;
mod onboarding;

pub use account::ACCOUNT_FIELDS;
pub use browse::{home_menu_len, home_selection_category};
pub use header::HeaderRenderer;

use crate::app::{AppMode, AppState};
use crate::components::keybindings::KeybindingContext;
use crate::input::InputHandler;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It delegates to
/// specialized submodules for different parts of the UI.
pub struct UiRenderer {
    /// Header renderer instance
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI with keybinding context
    pub fn render_with_context(
        &self,
        f: &mut Frame,
        state: &AppState,
        input_handler: &InputHandler,
        keybinding_ctx: &KeybindingContext,
    ) {
        // Create main layout with status and nav bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Main content area
                Constraint::Length(1), // Status line
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        let content_area = main_chunks[0];
        let status_area = main_chunks[1];
        let nav_bar_area = main_chunks[2];

        // Render main content based on mode
        match state.mode {
            AppMode::Onboarding => {
                onboarding::render_onboarding_in_area(f, state, content_area, &self.header);
            }
            AppMode::SignIn => {
                account::render_sign_in_in_area(f, state, content_area, &self.header);
            }
            AppMode::SignUp => {
                account::render_sign_up_in_area(f, state, content_area, &self.header);
            }
            AppMode::Home => {
                browse::render_home_in_area(f, state, content_area, &self.header);
            }
            AppMode::Browse => {
                browse::render_browse_in_area(f, state, content_area, &self.header);
            }
            AppMode::ProductDetail => {
                browse::render_product_detail_in_area(f, state, content_area, &self.header);
            }
            AppMode::Cart => {
                checkout::render_cart_in_area(f, state, content_area, &self.header);
            }
            AppMode::Checkout => {
                checkout::render_checkout_in_area(f, state, content_area, &self.header);
            }
            AppMode::Orders => {
                checkout::render_orders_in_area(f, state, content_area, &self.header);
            }
            AppMode::OrderDetail => {
                checkout::render_order_detail_in_area(f, state, content_area, &self.header);
            }
            AppMode::Account => {
                account::render_account_in_area(f, state, content_area, &self.header);
            }
            AppMode::ConfirmDialog => {
                // Render the pre-dialog screen behind the dialog
                match state.pre_dialog_mode.as_ref().unwrap_or(&AppMode::Home) {
                    AppMode::Cart => {
                        checkout::render_cart_in_area(f, state, content_area, &self.header)
                    }
                    AppMode::Checkout => {
                        checkout::render_checkout_in_area(f, state, content_area, &self.header)
                    }
                    AppMode::OrderDetail => {
                        checkout::render_order_detail_in_area(f, state, content_area, &self.header)
                    }
                    AppMode::Account => {
                        account::render_account_in_area(f, state, content_area, &self.header)
                    }
                    _ => browse::render_home_in_area(f, state, content_area, &self.header),
                }
                dialogs::render_confirm_dialog(f, state);
            }
        }

        // Input dialogs render on top of whatever screen opened them
        if input_handler.is_dialog_active() {
            dialogs::render_input_dialog(f, input_handler);
        }

        header::render_status_line(f, state, status_area);
        header::render_nav_bar(f, state, keybinding_ctx, nav_bar_area);

        // Render help overlay if visible (on top of everything)
        if state.help_visible {
            header::render_help_overlay(f, state, keybinding_ctx);
        }
    }
}
