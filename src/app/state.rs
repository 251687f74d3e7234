//! Application state definitions
//!
//! Contains all state-related types for the application including AppState
//! and AppMode. Domain data lives in the store; this layer holds the
//! navigation and per-screen view state around it.

#![allow(dead_code)]

use crate::carousel::LoopingCarousel;
use crate::components::confirm_dialog::ConfirmDialogState;
use crate::config_file::ClientConfig;
use crate::scrolling::ScrollState;
use crate::store::Store;
use crate::types::{OrderId, PromoSlide};

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Client-side domain state (catalog, cart, session, orders)
    pub store: Store,
    /// Active client configuration
    pub config: ClientConfig,
    /// Onboarding carousel; mounted only while the Onboarding screen shows
    pub onboarding: Option<LoopingCarousel<PromoSlide>>,
    /// Home screen category selection
    pub home_selection: usize,
    /// Scroll state for the browse product list
    pub browse_scroll: ScrollState,
    /// Scroll state for cart lines
    pub cart_scroll: ScrollState,
    /// Scroll state for the order history
    pub orders_scroll: ScrollState,
    /// Account screen field selection
    pub account_selection: usize,
    /// Product shown on the detail screen
    pub selected_product: Option<u32>,
    /// Order shown on the detail screen
    pub selected_order: Option<OrderId>,
    /// Status message for user feedback
    pub status_message: String,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Confirmation dialog state
    pub confirm_dialog: Option<ConfirmDialogState>,
    /// Previous mode to return to after dialog
    pub pre_dialog_mode: Option<AppMode>,
}

/// Application operating modes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Onboarding carousel - first screen on launch
    Onboarding,
    /// Sign in with an existing account (or continue as guest)
    SignIn,
    /// Create a new account
    SignUp,
    /// Home - category menu and featured products
    Home,
    /// Browse - filtered, searchable product list
    Browse,
    /// Product detail
    ProductDetail,
    /// Cart lines with quantity editing
    Cart,
    /// Checkout summary before placing the order
    Checkout,
    /// Order history
    Orders,
    /// Single order detail
    OrderDetail,
    /// Account management (profile, email, address)
    Account,
    /// Confirmation dialog for destructive operations
    ConfirmDialog,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Onboarding,
            store: Store::new(),
            config: ClientConfig::default(),
            onboarding: None,
            home_selection: 0,
            browse_scroll: ScrollState::new(0, 10),
            cart_scroll: ScrollState::new(0, 10),
            orders_scroll: ScrollState::new(0, 10),
            account_selection: 0,
            selected_product: None,
            selected_order: None,
            status_message: "Welcome to the shoptui storefront".to_string(),
            help_visible: false,
            confirm_dialog: None,
            pre_dialog_mode: None,
        }
    }
}
