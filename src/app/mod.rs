//! Application module
//!
//! Contains the main application loop, navigation, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode)
//! - Main module - App struct and event loop

mod state;

// Re-export state types for external use
pub use state::{AppMode, AppState};

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info};

use crate::api::{ApiClient, ApiMessage};
use crate::carousel::LoopingCarousel;
use crate::catalog::promo_slides;
use crate::components::confirm_dialog::{
    ConfirmAction, cancel_order_confirm, clear_cart_confirm, place_order_confirm,
    remove_item_confirm, sign_out_confirm,
};
use crate::config_file::ClientConfig;
use crate::error;
use crate::input::{CompletedForm, FormField, FormKind, InputHandler};
use crate::store::{
    Action, CartAction, CatalogAction, Order, OrdersAction, SessionAction,
};
use crate::types::{Address, Category, OrderId, OrderStatus, UserProfile};
use crate::ui::{UiRenderer, home_menu_len, home_selection_category};

/// How long the event loop waits for input before ticking timers
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Main application struct
pub struct App {
    state: Arc<Mutex<AppState>>,
    ui_renderer: UiRenderer,
    input_handler: InputHandler,
    keybinding_context: crate::components::keybindings::KeybindingContext,
    api: ApiClient,
    /// Channel sender for backend responses (cloned to request threads)
    api_tx: Sender<ApiMessage>,
    /// Channel receiver for backend responses (polled in main loop)
    api_rx: Receiver<ApiMessage>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: ClientConfig) -> Self {
        info!("Creating new App instance");
        let (api_tx, api_rx) = mpsc::channel();
        let api = ApiClient::new(&config);

        let mut state = AppState {
            config,
            ..AppState::default()
        };
        if state.config.skip_onboarding {
            state.mode = AppMode::Home;
        }

        // Kick off the catalog fetch right away so Home has data
        state.store.dispatch(Action::Catalog(CatalogAction::Loading));
        api.fetch_products(api_tx.clone());

        if state.mode == AppMode::Onboarding {
            let (width, _) = crossterm::terminal::size().unwrap_or((80, 24));
            Self::mount_onboarding(&mut state, width);
        }

        Self {
            state: Arc::new(Mutex::new(state)),
            ui_renderer: UiRenderer::new(),
            input_handler: InputHandler::new(),
            keybinding_context: crate::components::keybindings::KeybindingContext::new(),
            api,
            api_tx,
            api_rx,
        }
    }

    /// Helper function to safely lock the state mutex
    fn lock_state(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, AppState>, Box<dyn std::error::Error>> {
        self.state
            .lock()
            .map_err(|e| error::general_error(format!("Mutex poisoned: {}", e)).into())
    }

    /// Helper function to safely lock the state mutex mutably
    fn lock_state_mut(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, AppState>, Box<dyn std::error::Error>> {
        self.state
            .lock()
            .map_err(|e| error::general_error(format!("Mutex poisoned: {}", e)).into())
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&self) {
        if let Ok(mut state) = self.lock_state_mut() {
            state.help_visible = !state.help_visible;
        }
    }

    /// Mount the onboarding carousel at the current terminal width.
    ///
    /// Viewport width is fixed for the lifetime of the mount; a resize
    /// remounts instead of rescaling in place.
    fn mount_onboarding(state: &mut AppState, width: u16) {
        let interval = state.config.carousel_interval();
        state.onboarding = Some(LoopingCarousel::new(
            promo_slides(),
            f32::from(width),
            interval,
            Instant::now(),
        ));
    }

    /// Switch screens, tearing down the carousel when leaving Onboarding
    fn set_mode(state: &mut AppState, mode: AppMode) {
        if state.mode == AppMode::Onboarding && mode != AppMode::Onboarding {
            if let Some(ref mut carousel) = state.onboarding {
                carousel.stop();
            }
            // Unmount: the timer dies with the controller
            state.onboarding = None;
        }
        state.mode = mode;
    }

    /// Keep list scroll totals in sync with the store after dispatches
    fn sync_scroll_totals(state: &mut AppState) {
        let visible = state.store.visible_products().len();
        state.browse_scroll.set_total_items(visible);
        state.cart_scroll.set_total_items(state.store.cart_line_count());
        let order_count = state.store.state().orders.orders.len();
        state.orders_scroll.set_total_items(order_count);
    }

    /// Drive the onboarding carousel while its screen is visible
    fn tick_carousel(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut state = self.lock_state_mut()?;
        if state.mode == AppMode::Onboarding {
            if let Some(ref mut carousel) = state.onboarding {
                carousel.tick(Instant::now());
            }
        }
        Ok(())
    }

    /// Poll for backend responses from request threads
    fn poll_api_messages(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        // Process all pending messages without blocking
        while let Ok(msg) = self.api_rx.try_recv() {
            let mut state = self.lock_state_mut()?;

            match msg {
                ApiMessage::Products(products) => {
                    let count = products.len();
                    state
                        .store
                        .dispatch(Action::Catalog(CatalogAction::Loaded(products)));
                    Self::sync_scroll_totals(&mut state);
                    state.status_message = format!("Catalog loaded ({count} products)");
                }
                ApiMessage::OrderAccepted(order_id) => {
                    state.store.dispatch(Action::Orders(OrdersAction::SetStatus(
                        order_id,
                        OrderStatus::Confirmed,
                    )));
                    state.status_message = format!("Order #{} confirmed", order_id.short());
                }
                ApiMessage::Error(message) => {
                    state
                        .store
                        .dispatch(Action::Catalog(CatalogAction::LoadFailed(message.clone())));
                    state.status_message = format!("Backend error: {message}");
                }
            }
        }
        Ok(())
    }

    /// Run the main application loop
    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        info!("Starting main application loop");

        loop {
            // Drain backend responses
            self.poll_api_messages()?;

            // Advance the carousel timer/animation
            self.tick_carousel()?;

            // Handle input events
            if crossterm::event::poll(EVENT_POLL_INTERVAL)? {
                match crossterm::event::read()? {
                    Event::Key(key_event) => {
                        if self.handle_key_event(key_event)? {
                            break; // Exit requested
                        }
                    }
                    Event::Resize(width, _height) => {
                        self.handle_resize(width)?;
                    }
                    _ => {}
                }
            }

            // Render UI
            terminal.draw(|f| {
                let mut state = match self.state.lock() {
                    Ok(state) => state,
                    Err(_) => {
                        // If the mutex is poisoned we can't continue safely
                        eprintln!("Fatal error: Mutex poisoned, cannot continue");
                        std::process::exit(1);
                    }
                };
                // List viewports depend on the frame size; the catalog is
                // additionally capped at the configured page size
                let list_rows = f.area().height.saturating_sub(10).max(3) as usize;
                let page_rows = list_rows.min(state.config.page_size);
                state.browse_scroll.update_visible_items(page_rows);
                state.cart_scroll.update_visible_items(list_rows);
                state.orders_scroll.update_visible_items(list_rows);

                self.ui_renderer.render_with_context(
                    f,
                    &state,
                    &self.input_handler,
                    &self.keybinding_context,
                );
            })?;
        }

        Ok(())
    }

    /// Handle a terminal resize
    fn handle_resize(&mut self, width: u16) -> Result<(), Box<dyn std::error::Error>> {
        let mut state = self.lock_state_mut()?;
        if state.mode == AppMode::Onboarding {
            // Viewport width is fixed per mount, so a resize remounts
            Self::mount_onboarding(&mut state, width);
        }
        Ok(())
    }

    /// Handle keyboard input events
    fn handle_key_event(
        &mut self,
        key_event: KeyEvent,
    ) -> Result<bool, Box<dyn std::error::Error>> {
        let (current_mode, help_visible) = {
            if let Ok(state) = self.lock_state() {
                (state.mode.clone(), state.help_visible)
            } else {
                return Ok(false);
            }
        };

        // Handle help overlay - ? or Esc dismisses it
        if help_visible {
            match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc => {
                    self.toggle_help();
                }
                _ => {}
            }
            return Ok(false);
        }

        // Global help toggle with '?' (except while typing into a dialog)
        if key_event.code == KeyCode::Char('?') && !self.input_handler.is_dialog_active() {
            self.toggle_help();
            return Ok(false);
        }

        // Active input dialog consumes everything
        if self.input_handler.is_dialog_active() {
            if let Some(form) = self.input_handler.handle_input(key_event) {
                self.commit_form(form)?;
            }
            return Ok(false);
        }

        // Confirmation dialog mode
        if current_mode == AppMode::ConfirmDialog {
            self.handle_confirm_dialog_key(key_event)?;
            return Ok(false);
        }

        // Global quit
        if key_event.code == KeyCode::Char('q') {
            debug!("Quit requested");
            return Ok(true);
        }

        // Global back
        if matches!(key_event.code, KeyCode::Char('b') | KeyCode::Char('B')) {
            self.handle_back_key()?;
            return Ok(false);
        }

        match current_mode {
            AppMode::Onboarding => self.handle_onboarding_key(key_event.code)?,
            AppMode::SignIn => self.handle_sign_in_key(key_event.code)?,
            AppMode::SignUp => self.handle_sign_up_key(key_event.code)?,
            AppMode::Home => self.handle_home_key(key_event.code)?,
            AppMode::Browse => self.handle_browse_key(key_event.code)?,
            AppMode::ProductDetail => self.handle_product_detail_key(key_event.code)?,
            AppMode::Cart => self.handle_cart_key(key_event.code)?,
            AppMode::Checkout => self.handle_checkout_key(key_event.code)?,
            AppMode::Orders => self.handle_orders_key(key_event.code)?,
            AppMode::OrderDetail => self.handle_order_detail_key(key_event.code)?,
            AppMode::Account => self.handle_account_key(key_event.code)?,
            AppMode::ConfirmDialog => {}
        }

        Ok(false)
    }

    // -------------------------------------------------------------------------
    // Per-mode key handlers
    // -------------------------------------------------------------------------

    fn handle_onboarding_key(&mut self, code: KeyCode) -> Result<(), Box<dyn std::error::Error>> {
        let mut state = self.lock_state_mut()?;
        match code {
            KeyCode::Left => {
                if let Some(ref mut carousel) = state.onboarding {
                    carousel.retreat();
                }
            }
            KeyCode::Right => {
                if let Some(ref mut carousel) = state.onboarding {
                    carousel.advance();
                }
            }
            KeyCode::Enter => {
                Self::set_mode(&mut state, AppMode::SignIn);
                state.status_message = "Sign in or continue as guest".to_string();
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                Self::set_mode(&mut state, AppMode::Home);
                state.status_message = "Browsing as guest".to_string();
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_sign_in_key(&mut self, code: KeyCode) -> Result<(), Box<dyn std::error::Error>> {
        match code {
            KeyCode::Enter => {
                self.input_handler.start_form(FormKind::SignIn);
            }
            KeyCode::Char('u') | KeyCode::Char('U') => {
                let mut state = self.lock_state_mut()?;
                Self::set_mode(&mut state, AppMode::SignUp);
                state.status_message = "Create a new account".to_string();
            }
            KeyCode::Char('g') | KeyCode::Char('G') => {
                let mut state = self.lock_state_mut()?;
                Self::set_mode(&mut state, AppMode::Home);
                state.status_message = "Browsing as guest".to_string();
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_sign_up_key(&mut self, code: KeyCode) -> Result<(), Box<dyn std::error::Error>> {
        if code == KeyCode::Enter {
            self.input_handler.start_form(FormKind::SignUp);
        }
        Ok(())
    }

    fn handle_home_key(&mut self, code: KeyCode) -> Result<(), Box<dyn std::error::Error>> {
        match code {
            KeyCode::Up => {
                let mut state = self.lock_state_mut()?;
                if state.home_selection > 0 {
                    state.home_selection -= 1;
                }
            }
            KeyCode::Down => {
                let mut state = self.lock_state_mut()?;
                if state.home_selection + 1 < home_menu_len() {
                    state.home_selection += 1;
                }
            }
            KeyCode::Enter => {
                let mut state = self.lock_state_mut()?;
                let category = home_selection_category(state.home_selection);
                state
                    .store
                    .dispatch(Action::Catalog(CatalogAction::SetCategory(category)));
                Self::sync_scroll_totals(&mut state);
                state.browse_scroll.move_to_first();
                Self::set_mode(&mut state, AppMode::Browse);
                state.status_message = match category {
                    Some(c) => format!("Browsing {}", c.label()),
                    None => "Browsing all products".to_string(),
                };
            }
            KeyCode::Char('/') => {
                self.input_handler.start_form(FormKind::Search);
            }
            KeyCode::Char('c') | KeyCode::Char('C') => self.open_cart()?,
            KeyCode::Char('o') | KeyCode::Char('O') => self.open_orders()?,
            KeyCode::Char('a') | KeyCode::Char('A') => self.open_account()?,
            _ => {}
        }
        Ok(())
    }

    fn handle_browse_key(&mut self, code: KeyCode) -> Result<(), Box<dyn std::error::Error>> {
        match code {
            KeyCode::Up => self.lock_state_mut()?.browse_scroll.move_up(),
            KeyCode::Down => self.lock_state_mut()?.browse_scroll.move_down(),
            KeyCode::PageUp => self.lock_state_mut()?.browse_scroll.page_up(),
            KeyCode::PageDown => self.lock_state_mut()?.browse_scroll.page_down(),
            KeyCode::Home => self.lock_state_mut()?.browse_scroll.move_to_first(),
            KeyCode::End => self.lock_state_mut()?.browse_scroll.move_to_last(),
            KeyCode::Enter => {
                let mut state = self.lock_state_mut()?;
                let product_id = state
                    .store
                    .visible_products()
                    .get(state.browse_scroll.selected_index)
                    .map(|p| p.id);
                if let Some(id) = product_id {
                    state.selected_product = Some(id);
                    Self::set_mode(&mut state, AppMode::ProductDetail);
                }
            }
            KeyCode::Char('f') | KeyCode::Char('F') => {
                let mut state = self.lock_state_mut()?;
                let next = next_category(state.store.state().catalog.category_filter);
                state
                    .store
                    .dispatch(Action::Catalog(CatalogAction::SetCategory(next)));
                Self::sync_scroll_totals(&mut state);
                state.browse_scroll.move_to_first();
                state.status_message = match next {
                    Some(c) => format!("Filter: {}", c.label()),
                    None => "Filter: all products".to_string(),
                };
            }
            KeyCode::Char('/') => {
                self.input_handler.start_form(FormKind::Search);
            }
            KeyCode::Char('c') | KeyCode::Char('C') => self.open_cart()?,
            _ => {}
        }
        Ok(())
    }

    fn handle_product_detail_key(
        &mut self,
        code: KeyCode,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match code {
            KeyCode::Enter | KeyCode::Char('+') => {
                let mut state = self.lock_state_mut()?;
                let product = state
                    .selected_product
                    .and_then(|id| state.store.product_by_id(id))
                    .cloned();
                if let Some(product) = product {
                    if !product.in_stock() {
                        state.status_message = format!("{} is out of stock", product.name);
                        return Ok(());
                    }
                    state.store.dispatch(Action::Cart(CartAction::Add {
                        product_id: product.id,
                        name: product.name.clone(),
                        unit_price: product.price,
                    }));
                    Self::sync_scroll_totals(&mut state);
                    state.status_message = format!("Added {} to cart", product.name);
                }
            }
            KeyCode::Char('c') | KeyCode::Char('C') => self.open_cart()?,
            _ => {}
        }
        Ok(())
    }

    fn handle_cart_key(&mut self, code: KeyCode) -> Result<(), Box<dyn std::error::Error>> {
        match code {
            KeyCode::Up => self.lock_state_mut()?.cart_scroll.move_up(),
            KeyCode::Down => self.lock_state_mut()?.cart_scroll.move_down(),
            KeyCode::Char('+') => {
                let mut state = self.lock_state_mut()?;
                if let Some(id) = selected_cart_product(&state) {
                    state
                        .store
                        .dispatch(Action::Cart(CartAction::Increment { product_id: id }));
                    Self::sync_scroll_totals(&mut state);
                }
            }
            KeyCode::Char('-') => {
                let mut state = self.lock_state_mut()?;
                if let Some(id) = selected_cart_product(&state) {
                    state
                        .store
                        .dispatch(Action::Cart(CartAction::Decrement { product_id: id }));
                    Self::sync_scroll_totals(&mut state);
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                let state = self.lock_state()?;
                if let Some(id) = selected_cart_product(&state) {
                    let current = state
                        .store
                        .state()
                        .cart
                        .items
                        .iter()
                        .find(|i| i.product_id == id)
                        .map(|i| i.quantity)
                        .unwrap_or(1);
                    drop(state);
                    self.input_handler.start_quantity(id, current);
                }
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                let mut state = self.lock_state_mut()?;
                let line = selected_cart_product(&state).and_then(|id| {
                    state
                        .store
                        .state()
                        .cart
                        .items
                        .iter()
                        .find(|i| i.product_id == id)
                        .map(|i| (i.product_id, i.name.clone()))
                });
                if let Some((id, name)) = line {
                    Self::open_confirm(&mut state, remove_item_confirm(id, &name));
                }
            }
            KeyCode::Char('x') | KeyCode::Char('X') => {
                let mut state = self.lock_state_mut()?;
                let lines = state.store.cart_line_count();
                if lines > 0 {
                    Self::open_confirm(&mut state, clear_cart_confirm(lines));
                }
            }
            KeyCode::Enter => {
                let mut state = self.lock_state_mut()?;
                if state.store.state().cart.is_empty() {
                    state.status_message = "Cart is empty".to_string();
                } else if !state.store.is_signed_in() {
                    Self::set_mode(&mut state, AppMode::SignIn);
                    state.status_message = "Sign in to check out".to_string();
                } else if state
                    .store
                    .state()
                    .session
                    .user
                    .as_ref()
                    .and_then(|u| u.address.as_ref())
                    .is_none_or(|a| !a.is_complete())
                {
                    Self::set_mode(&mut state, AppMode::Account);
                    state.status_message =
                        "Add a shipping address before checking out".to_string();
                } else {
                    Self::set_mode(&mut state, AppMode::Checkout);
                    state.status_message = "Review your order".to_string();
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_checkout_key(&mut self, code: KeyCode) -> Result<(), Box<dyn std::error::Error>> {
        if code == KeyCode::Enter {
            let mut state = self.lock_state_mut()?;
            let total = state
                .store
                .cart_subtotal()
                .display_with(&state.config.currency_symbol);
            let address = state
                .store
                .state()
                .session
                .user
                .as_ref()
                .and_then(|u| u.address.as_ref())
                .map(|a| a.to_string());
            if let Some(address) = address {
                Self::open_confirm(&mut state, place_order_confirm(&total, &address));
            } else {
                state.status_message = "No shipping address on file".to_string();
            }
        }
        Ok(())
    }

    fn handle_orders_key(&mut self, code: KeyCode) -> Result<(), Box<dyn std::error::Error>> {
        match code {
            KeyCode::Up => self.lock_state_mut()?.orders_scroll.move_up(),
            KeyCode::Down => self.lock_state_mut()?.orders_scroll.move_down(),
            KeyCode::Enter => {
                let mut state = self.lock_state_mut()?;
                let order_id = state
                    .store
                    .state()
                    .orders
                    .orders
                    .get(state.orders_scroll.selected_index)
                    .map(|o| o.id);
                if let Some(id) = order_id {
                    state.selected_order = Some(id);
                    Self::set_mode(&mut state, AppMode::OrderDetail);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_order_detail_key(
        &mut self,
        code: KeyCode,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if matches!(code, KeyCode::Char('x') | KeyCode::Char('X')) {
            let mut state = self.lock_state_mut()?;
            let cancellable = state
                .selected_order
                .and_then(|id| state.store.order_by_id(id))
                .filter(|o| o.status.is_cancellable())
                .map(|o| o.id);
            match cancellable {
                Some(id) => Self::open_confirm(&mut state, cancel_order_confirm(id)),
                None => state.status_message = "This order can no longer be cancelled".to_string(),
            }
        }
        Ok(())
    }

    fn handle_account_key(&mut self, code: KeyCode) -> Result<(), Box<dyn std::error::Error>> {
        match code {
            KeyCode::Up => {
                let mut state = self.lock_state_mut()?;
                if state.account_selection > 0 {
                    state.account_selection -= 1;
                }
            }
            KeyCode::Down => {
                let mut state = self.lock_state_mut()?;
                if state.account_selection + 1 < crate::ui::ACCOUNT_FIELDS.len() {
                    state.account_selection += 1;
                }
            }
            KeyCode::Enter => {
                let (signed_in, selection) = {
                    let state = self.lock_state()?;
                    (state.store.is_signed_in(), state.account_selection)
                };
                if !signed_in {
                    let mut state = self.lock_state_mut()?;
                    Self::set_mode(&mut state, AppMode::SignIn);
                    state.status_message = "Sign in to manage your account".to_string();
                    return Ok(());
                }
                match selection {
                    0 => self.input_handler.start_form(FormKind::EditEmail),
                    _ => self.input_handler.start_form(FormKind::EditAddress),
                }
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                let mut state = self.lock_state_mut()?;
                let username = state
                    .store
                    .state()
                    .session
                    .user
                    .as_ref()
                    .map(|u| u.username.clone());
                if let Some(username) = username {
                    Self::open_confirm(&mut state, sign_out_confirm(&username));
                }
            }
            _ => {}
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Dialog plumbing
    // -------------------------------------------------------------------------

    /// Put a confirmation dialog on screen, remembering where to return
    fn open_confirm(
        state: &mut AppState,
        dialog: crate::components::confirm_dialog::ConfirmDialogState,
    ) {
        state.pre_dialog_mode = Some(state.mode.clone());
        state.confirm_dialog = Some(dialog);
        state.mode = AppMode::ConfirmDialog;
    }

    /// Handle keys while a confirmation dialog is open
    fn handle_confirm_dialog_key(
        &mut self,
        key_event: KeyEvent,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut state = self.lock_state_mut()?;
        let Some(dialog) = state.confirm_dialog.as_mut() else {
            return Ok(());
        };

        match key_event.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                dialog.toggle();
            }
            KeyCode::Enter => {
                let confirmed = dialog.is_confirmed();
                let action = dialog.confirm_action.clone();

                // Clear dialog and restore the previous mode
                state.confirm_dialog = None;
                if let Some(prev_mode) = state.pre_dialog_mode.take() {
                    state.mode = prev_mode;
                }

                if confirmed {
                    debug!(?action, "confirmed action");
                    // Drop the lock before executing the action
                    drop(state);
                    self.execute_confirmed_action(action)?;
                } else {
                    state.status_message = "Cancelled".to_string();
                }
            }
            KeyCode::Esc => {
                state.confirm_dialog = None;
                if let Some(prev_mode) = state.pre_dialog_mode.take() {
                    state.mode = prev_mode;
                }
                state.status_message = "Cancelled".to_string();
            }
            _ => {}
        }
        Ok(())
    }

    /// Execute an action after its confirmation dialog said Yes
    fn execute_confirmed_action(
        &mut self,
        action: ConfirmAction,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match action {
            ConfirmAction::RemoveCartItem(product_id) => {
                let mut state = self.lock_state_mut()?;
                state
                    .store
                    .dispatch(Action::Cart(CartAction::Remove { product_id }));
                Self::sync_scroll_totals(&mut state);
                state.status_message = "Line removed".to_string();
            }
            ConfirmAction::ClearCart => {
                let mut state = self.lock_state_mut()?;
                state.store.dispatch(Action::Cart(CartAction::Clear));
                Self::sync_scroll_totals(&mut state);
                state.status_message = "Cart cleared".to_string();
            }
            ConfirmAction::PlaceOrder => {
                self.place_order()?;
            }
            ConfirmAction::CancelOrder(order_id) => {
                let mut state = self.lock_state_mut()?;
                state
                    .store
                    .dispatch(Action::Orders(OrdersAction::Cancel(order_id)));
                state.status_message = format!("Order #{} cancelled", order_id.short());
            }
            ConfirmAction::SignOut => {
                let mut state = self.lock_state_mut()?;
                state.store.dispatch(Action::Session(SessionAction::SignOut));
                Self::set_mode(&mut state, AppMode::SignIn);
                state.status_message = "Signed out".to_string();
            }
        }
        Ok(())
    }

    /// Build the order from the cart, record it, and submit it
    fn place_order(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut state = self.lock_state_mut()?;

        let shipping_address = state
            .store
            .state()
            .session
            .user
            .as_ref()
            .and_then(|u| u.address.clone());
        let Some(shipping_address) = shipping_address else {
            state.status_message = "No shipping address on file".to_string();
            return Ok(());
        };
        if state.store.state().cart.is_empty() {
            state.status_message = "Cart is empty".to_string();
            return Ok(());
        }

        let order = Order {
            id: OrderId::new(),
            items: state.store.state().cart.items.clone(),
            total: state.store.cart_subtotal(),
            status: OrderStatus::Pending,
            shipping_address,
            placed_at: chrono::Utc::now(),
        };
        let order_id = order.id;
        info!(%order_id, total = order.total.cents(), "placing order");

        state.store.dispatch(Action::Orders(OrdersAction::Place(order)));
        state.store.dispatch(Action::Cart(CartAction::Clear));
        Self::sync_scroll_totals(&mut state);
        state.selected_order = Some(order_id);
        state.orders_scroll.move_to_first();
        Self::set_mode(&mut state, AppMode::Orders);
        state.status_message = format!("Order #{} placed", order_id.short());
        drop(state);

        self.api.submit_order(order_id, self.api_tx.clone());
        Ok(())
    }

    /// Apply a completed multi-field form
    fn commit_form(&mut self, form: CompletedForm) -> Result<(), Box<dyn std::error::Error>> {
        let mut state = self.lock_state_mut()?;
        match form.kind {
            FormKind::SignIn => {
                let username = form.get(FormField::SignInUsername).unwrap_or_default();
                // No backend: a validated credential pair materializes the
                // profile locally
                let profile = UserProfile {
                    username: username.to_string(),
                    email: format!("{username}@example.com"),
                    full_name: username.to_string(),
                    address: None,
                };
                state
                    .store
                    .dispatch(Action::Session(SessionAction::SignIn(profile)));
                Self::set_mode(&mut state, AppMode::Home);
                state.status_message = format!("Signed in as {username}");
            }
            FormKind::SignUp => {
                let username = form.get(FormField::SignUpUsername).unwrap_or_default();
                let profile = UserProfile {
                    username: username.to_string(),
                    email: form
                        .get(FormField::SignUpEmail)
                        .unwrap_or_default()
                        .to_string(),
                    full_name: form
                        .get(FormField::SignUpFullName)
                        .unwrap_or_default()
                        .to_string(),
                    address: None,
                };
                state
                    .store
                    .dispatch(Action::Session(SessionAction::SignIn(profile)));
                Self::set_mode(&mut state, AppMode::Home);
                state.status_message = format!("Welcome, {username}");
            }
            FormKind::EditEmail => {
                let email = form.get(FormField::EditEmail).unwrap_or_default();
                state
                    .store
                    .dispatch(Action::Session(SessionAction::UpdateEmail(
                        email.to_string(),
                    )));
                state.status_message = "Email updated".to_string();
            }
            FormKind::EditAddress => {
                let address = Address {
                    line1: form
                        .get(FormField::AddressLine1)
                        .unwrap_or_default()
                        .to_string(),
                    city: form
                        .get(FormField::AddressCity)
                        .unwrap_or_default()
                        .to_string(),
                    postal_code: form
                        .get(FormField::AddressPostal)
                        .unwrap_or_default()
                        .to_string(),
                    country: form
                        .get(FormField::AddressCountry)
                        .unwrap_or_default()
                        .to_string(),
                };
                state
                    .store
                    .dispatch(Action::Session(SessionAction::UpdateAddress(address)));
                state.status_message = "Shipping address updated".to_string();
            }
            FormKind::Search => {
                let query = form.get(FormField::SearchQuery).unwrap_or_default();
                if query.trim().is_empty() {
                    state
                        .store
                        .dispatch(Action::Catalog(CatalogAction::ClearSearch));
                    state.status_message = "Search cleared".to_string();
                } else {
                    state
                        .store
                        .dispatch(Action::Catalog(CatalogAction::SetSearch(
                            query.to_string(),
                        )));
                    state.status_message = format!("Searching for \"{query}\"");
                }
                Self::sync_scroll_totals(&mut state);
                state.browse_scroll.move_to_first();
                if state.mode == AppMode::Home {
                    Self::set_mode(&mut state, AppMode::Browse);
                }
            }
            FormKind::SetQuantity => {
                if let (Some(product_id), Some(value)) =
                    (form.context, form.get(FormField::Quantity))
                {
                    let quantity: u32 = value.parse().unwrap_or(1);
                    state.store.dispatch(Action::Cart(CartAction::SetQuantity {
                        product_id,
                        quantity,
                    }));
                    Self::sync_scroll_totals(&mut state);
                    state.status_message = if quantity == 0 {
                        "Line removed".to_string()
                    } else {
                        format!("Quantity set to {quantity}")
                    };
                }
            }
        }
        Ok(())
    }

    /// Handle back key navigation
    fn handle_back_key(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut state = self.lock_state_mut()?;
        match state.mode.clone() {
            AppMode::Onboarding => {
                state.status_message = "Press Enter to get started or S to skip".to_string();
            }
            AppMode::SignIn => {
                Self::set_mode(&mut state, AppMode::Home);
                state.status_message = "Browsing as guest".to_string();
            }
            AppMode::SignUp => {
                Self::set_mode(&mut state, AppMode::SignIn);
            }
            AppMode::Home => {
                state.status_message = "Press Q to quit or pick a department".to_string();
            }
            AppMode::Browse => {
                Self::set_mode(&mut state, AppMode::Home);
            }
            AppMode::ProductDetail => {
                state.selected_product = None;
                Self::set_mode(&mut state, AppMode::Browse);
            }
            AppMode::Cart => {
                Self::set_mode(&mut state, AppMode::Home);
            }
            AppMode::Checkout => {
                Self::set_mode(&mut state, AppMode::Cart);
            }
            AppMode::Orders => {
                Self::set_mode(&mut state, AppMode::Home);
            }
            AppMode::OrderDetail => {
                state.selected_order = None;
                Self::set_mode(&mut state, AppMode::Orders);
            }
            AppMode::Account => {
                Self::set_mode(&mut state, AppMode::Home);
            }
            AppMode::ConfirmDialog => {
                state.confirm_dialog = None;
                if let Some(prev_mode) = state.pre_dialog_mode.take() {
                    state.mode = prev_mode;
                }
            }
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Shared screen openers
    // -------------------------------------------------------------------------

    fn open_cart(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut state = self.lock_state_mut()?;
        Self::sync_scroll_totals(&mut state);
        state.cart_scroll.move_to_first();
        Self::set_mode(&mut state, AppMode::Cart);
        Ok(())
    }

    fn open_orders(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut state = self.lock_state_mut()?;
        Self::sync_scroll_totals(&mut state);
        state.orders_scroll.move_to_first();
        Self::set_mode(&mut state, AppMode::Orders);
        Ok(())
    }

    fn open_account(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut state = self.lock_state_mut()?;
        state.account_selection = 0;
        Self::set_mode(&mut state, AppMode::Account);
        Ok(())
    }
}

/// Product id of the highlighted cart line
fn selected_cart_product(state: &AppState) -> Option<u32> {
    state
        .store
        .state()
        .cart
        .items
        .get(state.cart_scroll.selected_index)
        .map(|i| i.product_id)
}

/// Next category in the browse filter cycle (None means all products)
fn next_category(current: Option<Category>) -> Option<Category> {
    use strum::IntoEnumIterator;
    match current {
        None => Category::iter().next(),
        Some(current) => {
            let mut iter = Category::iter().skip_while(|c| *c != current);
            iter.next(); // the current one
            iter.next() // None after the last wraps back to "all"
        }
    }
}
