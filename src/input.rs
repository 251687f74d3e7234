//! Input handling module
//!
//! Handles the input dialogs (text, password, selection, quantity) and the
//! sequential multi-field forms built from them (sign-in, sign-up, address
//! editing). Field values are validated on confirm; a rejected value keeps
//! the dialog open with the validation message displayed inline.

use crossterm::event::{KeyCode, KeyEvent};

use crate::scrolling::ScrollState;
use crate::validators;

/// Result of feeding a key event to a dialog
#[derive(Debug, Clone, PartialEq)]
pub enum InputResult {
    /// User confirmed a value
    Confirm(String),
    /// User cancelled the dialog
    Cancel,
    /// Dialog consumed the key and stays open
    Continue,
}

/// Types of input dialogs
#[derive(Debug, Clone, PartialEq)]
pub enum InputType {
    /// Text input for values like username, email, address lines
    TextInput {
        field_name: String,
        current_value: String,
        placeholder: String,
    },
    /// Password input with obscured echo
    PasswordInput {
        field_name: String,
        current_value: String,
        placeholder: String,
    },
    /// Selection from predefined options
    Selection {
        field_name: String,
        options: Vec<String>,
        scroll_state: ScrollState,
    },
    /// Bounded numeric quantity
    Quantity {
        field_name: String,
        value: u32,
        min: u32,
        max: u32,
    },
}

/// Input dialog state
#[derive(Debug, Clone)]
pub struct InputDialog {
    /// Type of input dialog
    pub input_type: InputType,
    /// Title of the dialog
    pub title: String,
    /// Instructions for the user
    pub instructions: String,
    /// Validation message from the last rejected confirm
    pub error: Option<String>,
}

impl InputDialog {
    /// Create a new input dialog
    pub fn new(input_type: InputType, title: String, instructions: String) -> Self {
        Self {
            input_type,
            title,
            instructions,
            error: None,
        }
    }

    /// Handle keyboard input for the dialog
    pub fn handle_input(&mut self, key_event: KeyEvent) -> InputResult {
        match &mut self.input_type {
            InputType::TextInput { current_value, .. }
            | InputType::PasswordInput { current_value, .. } => match key_event.code {
                KeyCode::Enter => {
                    return InputResult::Confirm(current_value.clone());
                }
                KeyCode::Esc => {
                    return InputResult::Cancel;
                }
                KeyCode::Backspace => {
                    current_value.pop();
                    self.error = None;
                }
                KeyCode::Char(c) => {
                    current_value.push(c);
                    self.error = None;
                }
                _ => {}
            },
            InputType::Selection {
                scroll_state,
                options,
                ..
            } => match key_event.code {
                KeyCode::Up => {
                    scroll_state.move_up();
                }
                KeyCode::Down => {
                    scroll_state.move_down();
                }
                KeyCode::PageUp => {
                    scroll_state.page_up();
                }
                KeyCode::PageDown => {
                    scroll_state.page_down();
                }
                KeyCode::Enter => {
                    if let Some(option) = options.get(scroll_state.selected_index) {
                        return InputResult::Confirm(option.clone());
                    }
                }
                KeyCode::Esc => {
                    return InputResult::Cancel;
                }
                _ => {}
            },
            InputType::Quantity {
                value, min, max, ..
            } => match key_event.code {
                KeyCode::Up | KeyCode::Char('+') => {
                    if *value < *max {
                        *value += 1;
                    }
                }
                KeyCode::Down | KeyCode::Char('-') => {
                    if *value > *min {
                        *value -= 1;
                    }
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    let digit = u32::from(c as u8 - b'0');
                    let typed = value.saturating_mul(10).saturating_add(digit);
                    *value = typed.clamp(*min, *max);
                }
                KeyCode::Backspace => {
                    *value = (*value / 10).max(*min);
                }
                KeyCode::Enter => {
                    return InputResult::Confirm(value.to_string());
                }
                KeyCode::Esc => {
                    return InputResult::Cancel;
                }
                _ => {}
            },
        }
        InputResult::Continue
    }
}

/// A single form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    SignInUsername,
    SignInPassword,
    SignUpUsername,
    SignUpEmail,
    SignUpPassword,
    SignUpFullName,
    EditEmail,
    AddressLine1,
    AddressCity,
    AddressPostal,
    AddressCountry,
    SearchQuery,
    Quantity,
}

impl FormField {
    /// Dialog title for this field
    pub fn title(&self) -> &'static str {
        match self {
            Self::SignInUsername => "Sign In - Username",
            Self::SignInPassword => "Sign In - Password",
            Self::SignUpUsername => "Create Account - Username",
            Self::SignUpEmail => "Create Account - Email",
            Self::SignUpPassword => "Create Account - Password",
            Self::SignUpFullName => "Create Account - Full Name",
            Self::EditEmail => "Update Email",
            Self::AddressLine1 => "Shipping Address - Street",
            Self::AddressCity => "Shipping Address - City",
            Self::AddressPostal => "Shipping Address - Postal Code",
            Self::AddressCountry => "Shipping Address - Country",
            Self::SearchQuery => "Search Products",
            Self::Quantity => "Set Quantity",
        }
    }

    /// Placeholder text for this field
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::SignInUsername | Self::SignUpUsername => "e.g. ada_lovelace",
            Self::SignInPassword | Self::SignUpPassword => "at least 8 characters",
            Self::SignUpEmail | Self::EditEmail => "e.g. ada@example.com",
            Self::SignUpFullName => "e.g. Ada Lovelace",
            Self::AddressLine1 => "e.g. 1 Market St",
            Self::AddressCity => "e.g. Springfield",
            Self::AddressPostal => "e.g. 94103",
            Self::AddressCountry => "",
            Self::SearchQuery => "name or description",
            Self::Quantity => "",
        }
    }

    /// Validate a confirmed value for this field
    pub fn validate(&self, value: &str) -> crate::error::Result<()> {
        match self {
            Self::SignInUsername | Self::SignUpUsername => validators::validate_username(value),
            Self::SignInPassword | Self::SignUpPassword => validators::validate_password(value),
            Self::SignUpEmail | Self::EditEmail => validators::validate_email(value),
            Self::SignUpFullName => validators::validate_full_name(value),
            Self::AddressLine1 => validators::validate_non_empty(value, "Street address"),
            Self::AddressCity => validators::validate_non_empty(value, "City"),
            Self::AddressPostal => validators::validate_postal_code(value),
            Self::AddressCountry => validators::validate_non_empty(value, "Country"),
            // Search accepts anything, including empty (which clears it)
            Self::SearchQuery => Ok(()),
            Self::Quantity => Ok(()),
        }
    }
}

/// A multi-field flow built from sequential dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    SignIn,
    SignUp,
    EditEmail,
    EditAddress,
    Search,
    SetQuantity,
}

impl FormKind {
    /// Ordered fields for this flow
    pub fn fields(&self) -> &'static [FormField] {
        match self {
            Self::SignIn => &[FormField::SignInUsername, FormField::SignInPassword],
            Self::SignUp => &[
                FormField::SignUpUsername,
                FormField::SignUpEmail,
                FormField::SignUpPassword,
                FormField::SignUpFullName,
            ],
            Self::EditEmail => &[FormField::EditEmail],
            Self::EditAddress => &[
                FormField::AddressLine1,
                FormField::AddressCity,
                FormField::AddressPostal,
                FormField::AddressCountry,
            ],
            Self::Search => &[FormField::SearchQuery],
            Self::SetQuantity => &[FormField::Quantity],
        }
    }
}

/// A finished form: every field confirmed and validated
#[derive(Debug, Clone)]
pub struct CompletedForm {
    pub kind: FormKind,
    pub values: Vec<(FormField, String)>,
    /// Product id for forms tied to a cart line
    pub context: Option<u32>,
}

impl CompletedForm {
    /// Value of a field, if present
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.values
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }
}

/// In-progress form state
#[derive(Debug, Clone)]
struct PendingForm {
    kind: FormKind,
    values: Vec<(FormField, String)>,
    context: Option<u32>,
}

/// Owns the active dialog and the form it belongs to
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    dialog: Option<InputDialog>,
    form: Option<PendingForm>,
}

const COUNTRY_OPTIONS: &[&str] = &[
    "United States",
    "Canada",
    "United Kingdom",
    "Germany",
    "France",
    "Netherlands",
    "Australia",
    "Japan",
];

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a dialog is currently open
    pub fn is_dialog_active(&self) -> bool {
        self.dialog.is_some()
    }

    /// The active dialog, for rendering
    pub fn dialog(&self) -> Option<&InputDialog> {
        self.dialog.as_ref()
    }

    /// The flow the active dialog belongs to
    pub fn active_form_kind(&self) -> Option<FormKind> {
        self.form.as_ref().map(|f| f.kind)
    }

    /// Begin a multi-field flow; opens the dialog for the first field
    pub fn start_form(&mut self, kind: FormKind) {
        self.start_form_with_context(kind, None, 1);
    }

    /// Begin a quantity flow for a cart line, seeded with its current quantity
    pub fn start_quantity(&mut self, product_id: u32, current: u32) {
        self.start_form_with_context(FormKind::SetQuantity, Some(product_id), current);
    }

    fn start_form_with_context(&mut self, kind: FormKind, context: Option<u32>, quantity: u32) {
        self.form = Some(PendingForm {
            kind,
            values: Vec::new(),
            context,
        });
        let first = kind.fields()[0];
        self.dialog = Some(Self::dialog_for(first, quantity));
    }

    /// Feed a key event to the active dialog.
    ///
    /// Returns the completed form once the last field confirms. Rejected
    /// values keep the dialog open with the validation message set.
    pub fn handle_input(&mut self, key_event: KeyEvent) -> Option<CompletedForm> {
        let dialog = self.dialog.as_mut()?;
        let form = self.form.as_mut()?;

        let current_field = form.kind.fields()[form.values.len()];
        match dialog.handle_input(key_event) {
            InputResult::Confirm(value) => match current_field.validate(&value) {
                Ok(()) => {
                    form.values.push((current_field, value));
                    if let Some(next) = form.kind.fields().get(form.values.len()) {
                        self.dialog = Some(Self::dialog_for(*next, 1));
                        None
                    } else {
                        let done = self.form.take().map(|f| CompletedForm {
                            kind: f.kind,
                            values: f.values,
                            context: f.context,
                        });
                        self.dialog = None;
                        done
                    }
                }
                Err(e) => {
                    dialog.error = Some(e.to_string());
                    None
                }
            },
            InputResult::Cancel => {
                self.cancel();
                None
            }
            InputResult::Continue => None,
        }
    }

    /// Abort the active dialog and form
    pub fn cancel(&mut self) {
        self.dialog = None;
        self.form = None;
    }

    fn dialog_for(field: FormField, quantity: u32) -> InputDialog {
        let input_type = match field {
            FormField::SignInPassword | FormField::SignUpPassword => InputType::PasswordInput {
                field_name: field.title().to_string(),
                current_value: String::new(),
                placeholder: field.placeholder().to_string(),
            },
            FormField::AddressCountry => InputType::Selection {
                field_name: field.title().to_string(),
                options: COUNTRY_OPTIONS.iter().map(|c| c.to_string()).collect(),
                scroll_state: ScrollState::new(COUNTRY_OPTIONS.len(), 8),
            },
            FormField::Quantity => InputType::Quantity {
                field_name: field.title().to_string(),
                value: quantity,
                min: 0,
                max: 99,
            },
            _ => InputType::TextInput {
                field_name: field.title().to_string(),
                current_value: String::new(),
                placeholder: field.placeholder().to_string(),
            },
        };

        let instructions = match field {
            FormField::AddressCountry => "Up/Down select, Enter confirm, Esc cancel".to_string(),
            FormField::Quantity => {
                "Up/+ more, Down/- fewer, digits set, Enter confirm, Esc cancel".to_string()
            }
            _ => "Type value, Enter confirm, Esc cancel".to_string(),
        };

        InputDialog::new(input_type, field.title().to_string(), instructions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_str(handler: &mut InputHandler, s: &str) -> Option<CompletedForm> {
        for c in s.chars() {
            if let Some(done) = handler.handle_input(key(KeyCode::Char(c))) {
                return Some(done);
            }
        }
        handler.handle_input(key(KeyCode::Enter))
    }

    #[test]
    fn test_sign_in_flow_completes() {
        let mut handler = InputHandler::new();
        handler.start_form(FormKind::SignIn);
        assert!(handler.is_dialog_active());

        assert!(type_str(&mut handler, "ada_lovelace").is_none());
        let done = type_str(&mut handler, "correct1horse").expect("form complete");

        assert_eq!(done.kind, FormKind::SignIn);
        assert_eq!(done.get(FormField::SignInUsername), Some("ada_lovelace"));
        assert_eq!(done.get(FormField::SignInPassword), Some("correct1horse"));
        assert!(!handler.is_dialog_active());
    }

    #[test]
    fn test_invalid_value_keeps_dialog_open_with_error() {
        let mut handler = InputHandler::new();
        handler.start_form(FormKind::SignIn);

        assert!(type_str(&mut handler, "x").is_none());
        let dialog = handler.dialog().expect("dialog still open");
        assert!(dialog.error.is_some());

        // Typing clears the error
        handler.handle_input(key(KeyCode::Char('y')));
        assert!(handler.dialog().expect("dialog").error.is_none());
    }

    #[test]
    fn test_cancel_aborts_form() {
        let mut handler = InputHandler::new();
        handler.start_form(FormKind::SignUp);
        handler.handle_input(key(KeyCode::Esc));
        assert!(!handler.is_dialog_active());
        assert!(handler.active_form_kind().is_none());
    }

    #[test]
    fn test_quantity_dialog_bounds() {
        let mut handler = InputHandler::new();
        handler.start_quantity(1001, 2);

        handler.handle_input(key(KeyCode::Up));
        handler.handle_input(key(KeyCode::Up));
        let done = handler
            .handle_input(key(KeyCode::Enter))
            .expect("form complete");
        assert_eq!(done.kind, FormKind::SetQuantity);
        assert_eq!(done.context, Some(1001));
        assert_eq!(done.get(FormField::Quantity), Some("4"));
    }

    #[test]
    fn test_quantity_digits_clamp_to_max() {
        let mut handler = InputHandler::new();
        handler.start_quantity(1001, 0);

        // 5, then 55, then 555 -> clamped to 99
        for _ in 0..3 {
            handler.handle_input(key(KeyCode::Char('5')));
        }
        let done = handler
            .handle_input(key(KeyCode::Enter))
            .expect("form complete");
        assert_eq!(done.get(FormField::Quantity), Some("99"));
    }

    #[test]
    fn test_country_selection() {
        let mut handler = InputHandler::new();
        handler.start_form(FormKind::EditAddress);

        assert!(type_str(&mut handler, "1 Market St").is_none());
        assert!(type_str(&mut handler, "Springfield").is_none());
        assert!(type_str(&mut handler, "94103").is_none());

        // Country dialog is a selection list
        handler.handle_input(key(KeyCode::Down));
        let done = handler
            .handle_input(key(KeyCode::Enter))
            .expect("form complete");
        assert_eq!(done.get(FormField::AddressCountry), Some("Canada"));
    }
}
