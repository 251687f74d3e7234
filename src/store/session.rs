//! Session slice
//!
//! The optional signed-in profile. There is no auth backend; sign-in
//! happens after client-side validation and materializes a profile.

use crate::types::{Address, UserProfile};

/// Session slice state
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub user: Option<UserProfile>,
}

/// Session slice actions
#[derive(Debug, Clone)]
pub enum SessionAction {
    SignIn(UserProfile),
    SignOut,
    UpdateEmail(String),
    UpdateAddress(Address),
}

impl SessionState {
    pub fn reduce(&mut self, action: SessionAction) {
        match action {
            SessionAction::SignIn(profile) => {
                self.user = Some(profile);
            }
            SessionAction::SignOut => {
                self.user = None;
            }
            SessionAction::UpdateEmail(email) => {
                if let Some(ref mut user) = self.user {
                    user.email = email;
                }
            }
            SessionAction::UpdateAddress(address) => {
                if let Some(ref mut user) = self.user {
                    user.address = Some(address);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            full_name: "Ada Lovelace".to_string(),
            address: None,
        }
    }

    #[test]
    fn test_sign_in_and_out() {
        let mut state = SessionState::default();
        state.reduce(SessionAction::SignIn(profile()));
        assert!(state.user.is_some());

        state.reduce(SessionAction::SignOut);
        assert!(state.user.is_none());
    }

    #[test]
    fn test_profile_updates_require_session() {
        let mut state = SessionState::default();
        // No session: updates are dropped
        state.reduce(SessionAction::UpdateEmail("x@example.com".to_string()));
        assert!(state.user.is_none());

        state.reduce(SessionAction::SignIn(profile()));
        state.reduce(SessionAction::UpdateEmail("new@example.com".to_string()));
        assert_eq!(
            state.user.as_ref().map(|u| u.email.as_str()),
            Some("new@example.com")
        );

        let addr = Address {
            line1: "1 Market St".to_string(),
            city: "Springfield".to_string(),
            postal_code: "94103".to_string(),
            country: "US".to_string(),
        };
        state.reduce(SessionAction::UpdateAddress(addr.clone()));
        assert_eq!(state.user.as_ref().and_then(|u| u.address.clone()), Some(addr));
    }
}
