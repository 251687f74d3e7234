//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current
//! application mode.

#![allow(dead_code)]

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    PageUp,
    PageDown,
    Home,
    End,
    Select,
    Back,
    Quit,
    Help,
    NextSlide,
    PrevSlide,
    Skip,
    Guest,
    SwitchSignUp,
    AddToCart,
    OpenCart,
    OpenOrders,
    OpenAccount,
    Search,
    CycleCategory,
    Increment,
    Decrement,
    SetQuantity,
    RemoveItem,
    ClearCart,
    Checkout,
    CancelOrder,
    SignOut,
    Confirm,
    Cancel,
    Toggle,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
        ];

        // Onboarding carousel
        self.mode_bindings.insert(
            AppMode::Onboarding,
            vec![
                Keybinding::new(KeyCode::Left, KeyAction::PrevSlide, "Left", "Previous slide"),
                Keybinding::new(KeyCode::Right, KeyAction::NextSlide, "Right", "Next slide"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Get started"),
                Keybinding::new(KeyCode::Char('s'), KeyAction::Skip, "S", "Skip"),
            ],
        );

        // Sign in
        self.mode_bindings.insert(
            AppMode::SignIn,
            vec![
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Sign in"),
                Keybinding::new(KeyCode::Char('u'), KeyAction::SwitchSignUp, "U", "Create account"),
                Keybinding::new(KeyCode::Char('g'), KeyAction::Guest, "G", "Browse as guest"),
            ],
        );

        // Sign up
        self.mode_bindings.insert(
            AppMode::SignUp,
            vec![
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Create account"),
                Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Back to sign in"),
            ],
        );

        // Home: category menu plus shortcuts into the other screens
        self.mode_bindings.insert(
            AppMode::Home,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Navigate up"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Navigate down"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Browse category"),
                Keybinding::new(KeyCode::Char('/'), KeyAction::Search, "/", "Search"),
                Keybinding::new(KeyCode::Char('c'), KeyAction::OpenCart, "C", "Cart"),
                Keybinding::new(KeyCode::Char('o'), KeyAction::OpenOrders, "O", "Orders"),
                Keybinding::new(KeyCode::Char('a'), KeyAction::OpenAccount, "A", "Account"),
            ],
        );

        // Browse
        self.mode_bindings.insert(
            AppMode::Browse,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Navigate up"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Navigate down"),
                Keybinding::new(KeyCode::PageUp, KeyAction::PageUp, "PgUp", "Page up"),
                Keybinding::new(KeyCode::PageDown, KeyAction::PageDown, "PgDn", "Page down"),
                Keybinding::new(KeyCode::Home, KeyAction::Home, "Home", "First product"),
                Keybinding::new(KeyCode::End, KeyAction::End, "End", "Last product"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "View product"),
                Keybinding::new(KeyCode::Char('f'), KeyAction::CycleCategory, "F", "Filter category"),
                Keybinding::new(KeyCode::Char('/'), KeyAction::Search, "/", "Search"),
                Keybinding::new(KeyCode::Char('c'), KeyAction::OpenCart, "C", "Cart"),
                Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Back"),
            ],
        );

        // Product detail
        self.mode_bindings.insert(
            AppMode::ProductDetail,
            vec![
                Keybinding::new(KeyCode::Enter, KeyAction::AddToCart, "Enter", "Add to cart"),
                Keybinding::new(KeyCode::Char('c'), KeyAction::OpenCart, "C", "Cart"),
                Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Back"),
            ],
        );

        // Cart
        self.mode_bindings.insert(
            AppMode::Cart,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Navigate up"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Navigate down"),
                Keybinding::new(KeyCode::Char('+'), KeyAction::Increment, "+", "One more"),
                Keybinding::new(KeyCode::Char('-'), KeyAction::Decrement, "-", "One fewer"),
                Keybinding::new(KeyCode::Char('n'), KeyAction::SetQuantity, "N", "Set quantity"),
                Keybinding::new(KeyCode::Char('d'), KeyAction::RemoveItem, "D", "Remove line"),
                Keybinding::new(KeyCode::Char('x'), KeyAction::ClearCart, "X", "Clear cart"),
                Keybinding::new(KeyCode::Enter, KeyAction::Checkout, "Enter", "Checkout"),
                Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Back"),
            ],
        );

        // Checkout
        self.mode_bindings.insert(
            AppMode::Checkout,
            vec![
                Keybinding::new(KeyCode::Enter, KeyAction::Confirm, "Enter", "Place order"),
                Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Back to cart"),
            ],
        );

        // Orders
        self.mode_bindings.insert(
            AppMode::Orders,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Navigate up"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Navigate down"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "View order"),
                Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Back"),
            ],
        );

        // Order detail
        self.mode_bindings.insert(
            AppMode::OrderDetail,
            vec![
                Keybinding::new(KeyCode::Char('x'), KeyAction::CancelOrder, "X", "Cancel order"),
                Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Back"),
            ],
        );

        // Account
        self.mode_bindings.insert(
            AppMode::Account,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Navigate up"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Navigate down"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Edit field"),
                Keybinding::new(KeyCode::Char('s'), KeyAction::SignOut, "S", "Sign out"),
                Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Back"),
            ],
        );

        // Confirm dialog
        self.mode_bindings.insert(
            AppMode::ConfirmDialog,
            vec![
                Keybinding::new(KeyCode::Left, KeyAction::Toggle, "Left", "Select No"),
                Keybinding::new(KeyCode::Right, KeyAction::Toggle, "Right", "Select Yes"),
                Keybinding::new(KeyCode::Tab, KeyAction::Toggle, "Tab", "Toggle selection"),
                Keybinding::new(KeyCode::Enter, KeyAction::Confirm, "Enter", "Confirm"),
                Keybinding::new(KeyCode::Esc, KeyAction::Cancel, "Esc", "Cancel"),
            ],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(mode);

        // Select key bindings to show in nav bar (most important ones)
        let priority_actions = match mode {
            AppMode::Onboarding => vec![
                KeyAction::PrevSlide,
                KeyAction::NextSlide,
                KeyAction::Select,
                KeyAction::Skip,
                KeyAction::Quit,
            ],
            AppMode::SignIn => vec![
                KeyAction::Select,
                KeyAction::SwitchSignUp,
                KeyAction::Guest,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::SignUp => vec![KeyAction::Select, KeyAction::Back, KeyAction::Quit],
            AppMode::Home => vec![
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::Select,
                KeyAction::Search,
                KeyAction::OpenCart,
                KeyAction::OpenOrders,
                KeyAction::OpenAccount,
                KeyAction::Quit,
            ],
            AppMode::Browse => vec![
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::Select,
                KeyAction::CycleCategory,
                KeyAction::Search,
                KeyAction::OpenCart,
                KeyAction::Back,
            ],
            AppMode::ProductDetail => vec![
                KeyAction::AddToCart,
                KeyAction::OpenCart,
                KeyAction::Back,
                KeyAction::Quit,
            ],
            AppMode::Cart => vec![
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::Increment,
                KeyAction::Decrement,
                KeyAction::RemoveItem,
                KeyAction::Checkout,
                KeyAction::Back,
            ],
            AppMode::Checkout => vec![KeyAction::Confirm, KeyAction::Back, KeyAction::Quit],
            AppMode::Orders => vec![
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::Select,
                KeyAction::Back,
                KeyAction::Quit,
            ],
            AppMode::OrderDetail => vec![KeyAction::CancelOrder, KeyAction::Back, KeyAction::Quit],
            AppMode::Account => vec![
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::Select,
                KeyAction::SignOut,
                KeyAction::Back,
            ],
            AppMode::ConfirmDialog => {
                vec![KeyAction::Toggle, KeyAction::Confirm, KeyAction::Cancel]
            }
        };

        // Combine Up/Down into single item for cleaner display
        let mut items: Vec<NavBarItem> = Vec::new();
        let mut has_nav = false;

        for action in priority_actions {
            if (action == KeyAction::NavigateUp || action == KeyAction::NavigateDown) && has_nav {
                continue;
            }

            if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                if action == KeyAction::NavigateUp || action == KeyAction::NavigateDown {
                    items.push(NavBarItem {
                        key_display: "Up/Dn".to_string(),
                        action_label: "Navigate".to_string(),
                    });
                    has_nav = true;
                } else {
                    items.push(NavBarItem {
                        key_display: binding.display.clone(),
                        action_label: binding.description.clone(),
                    });
                }
            }
        }

        items
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let mut sections = Vec::new();

        let nav_bindings: Vec<_> = self
            .get_bindings(mode)
            .into_iter()
            .filter(|b| {
                matches!(
                    b.action,
                    KeyAction::NavigateUp
                        | KeyAction::NavigateDown
                        | KeyAction::PageUp
                        | KeyAction::PageDown
                        | KeyAction::Home
                        | KeyAction::End
                        | KeyAction::NextSlide
                        | KeyAction::PrevSlide
                )
            })
            .collect();

        if !nav_bindings.is_empty() {
            sections.push(HelpSection {
                title: "Navigation".to_string(),
                items: nav_bindings
                    .iter()
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect(),
            });
        }

        let action_bindings: Vec<_> = self
            .get_bindings(mode)
            .into_iter()
            .filter(|b| {
                matches!(
                    b.action,
                    KeyAction::Select
                        | KeyAction::AddToCart
                        | KeyAction::OpenCart
                        | KeyAction::OpenOrders
                        | KeyAction::OpenAccount
                        | KeyAction::Search
                        | KeyAction::CycleCategory
                        | KeyAction::Increment
                        | KeyAction::Decrement
                        | KeyAction::SetQuantity
                        | KeyAction::RemoveItem
                        | KeyAction::ClearCart
                        | KeyAction::Checkout
                        | KeyAction::CancelOrder
                        | KeyAction::SignOut
                        | KeyAction::Skip
                        | KeyAction::Guest
                        | KeyAction::SwitchSignUp
                        | KeyAction::Confirm
                        | KeyAction::Cancel
                        | KeyAction::Toggle
                )
            })
            .collect();

        if !action_bindings.is_empty() {
            sections.push(HelpSection {
                title: "Actions".to_string(),
                items: action_bindings
                    .iter()
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect(),
            });
        }

        let general_bindings: Vec<_> = self
            .get_bindings(mode)
            .into_iter()
            .filter(|b| matches!(b.action, KeyAction::Back | KeyAction::Help | KeyAction::Quit))
            .collect();

        if !general_bindings.is_empty() {
            sections.push(HelpSection {
                title: "General".to_string(),
                items: general_bindings
                    .iter()
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect(),
            });
        }

        sections
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mode_has_nav_items() {
        let ctx = KeybindingContext::new();
        let modes = [
            AppMode::Onboarding,
            AppMode::SignIn,
            AppMode::SignUp,
            AppMode::Home,
            AppMode::Browse,
            AppMode::ProductDetail,
            AppMode::Cart,
            AppMode::Checkout,
            AppMode::Orders,
            AppMode::OrderDetail,
            AppMode::Account,
            AppMode::ConfirmDialog,
        ];
        for mode in modes {
            assert!(
                !ctx.get_nav_items(&mode).is_empty(),
                "mode {mode:?} has no nav items"
            );
        }
    }

    #[test]
    fn test_global_bindings_present_everywhere() {
        let ctx = KeybindingContext::new();
        let bindings = ctx.get_bindings(&AppMode::Cart);
        assert!(bindings.iter().any(|b| b.action == KeyAction::Help));
        assert!(bindings.iter().any(|b| b.action == KeyAction::Quit));
    }
}
