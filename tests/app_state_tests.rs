//! Tests for Application State Management
//!
//! These tests verify:
//! - AppState default initialization
//! - AppMode enum completeness
//! - State field interactions

use shoptui::app::{AppMode, AppState};

// =============================================================================
// AppState Default Tests
// =============================================================================

#[test]
fn test_app_state_default_mode_is_onboarding() {
    let state = AppState::default();
    assert_eq!(state.mode, AppMode::Onboarding);
}

#[test]
fn test_app_state_default_has_welcome_message() {
    let state = AppState::default();
    assert!(state.status_message.contains("Welcome"));
}

#[test]
fn test_app_state_default_selections_are_zero() {
    let state = AppState::default();
    assert_eq!(state.home_selection, 0);
    assert_eq!(state.account_selection, 0);
    assert_eq!(state.browse_scroll.selected_index, 0);
    assert_eq!(state.cart_scroll.selected_index, 0);
    assert_eq!(state.orders_scroll.selected_index, 0);
}

#[test]
fn test_app_state_default_help_not_visible() {
    let state = AppState::default();
    assert!(!state.help_visible);
}

#[test]
fn test_app_state_default_no_dialogs() {
    let state = AppState::default();
    assert!(state.confirm_dialog.is_none());
    assert!(state.pre_dialog_mode.is_none());
}

#[test]
fn test_app_state_default_no_selection_targets() {
    let state = AppState::default();
    assert!(state.selected_product.is_none());
    assert!(state.selected_order.is_none());
}

#[test]
fn test_app_state_default_carousel_not_mounted() {
    // The carousel mounts when the Onboarding screen opens, not at
    // state construction
    let state = AppState::default();
    assert!(state.onboarding.is_none());
}

#[test]
fn test_app_state_default_store_is_empty() {
    let state = AppState::default();
    assert!(state.store.state().catalog.products.is_empty());
    assert!(state.store.state().cart.is_empty());
    assert!(state.store.state().orders.orders.is_empty());
    assert!(!state.store.is_signed_in());
}

#[test]
fn test_app_state_default_config_is_valid() {
    let state = AppState::default();
    assert!(state.config.validate().is_ok());
}

// =============================================================================
// AppMode Enum Tests
// =============================================================================

#[test]
fn test_app_mode_equality() {
    assert_eq!(AppMode::Home, AppMode::Home);
    assert_ne!(AppMode::Home, AppMode::Cart);
}

#[test]
fn test_app_mode_clone() {
    let mode = AppMode::Checkout;
    let cloned = mode.clone();
    assert_eq!(mode, cloned);
}

#[test]
fn test_app_mode_debug_format() {
    let mode = AppMode::ProductDetail;
    let debug = format!("{:?}", mode);
    assert!(debug.contains("ProductDetail"));
}

#[test]
fn test_app_mode_hash_consistency() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(AppMode::Home);
    set.insert(AppMode::Cart);
    set.insert(AppMode::Home); // Duplicate

    assert_eq!(set.len(), 2);
}

#[test]
fn test_all_app_modes_are_distinct() {
    use std::collections::HashSet;

    let modes = vec![
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

    let unique: HashSet<_> = modes.iter().cloned().collect();
    assert_eq!(unique.len(), modes.len());
}
