use yewdux::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn,
}

/// Global app state shared by the hooks.
#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub error_message: Option<String>, // Global error handling
    pub auth_state: AuthState,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth_state, AuthState::LoggedIn)
    }

    pub fn logout(&mut self) {
        self.auth_state = AuthState::LoggedOut;
        self.error_message = None;
        // Future: clear other user-specific state here
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logout_clears_user_state() {
        let mut state = State {
            error_message: Some("stale".to_string()),
            auth_state: AuthState::LoggedIn,
        };
        assert!(state.is_authenticated());

        state.logout();
        assert!(!state.is_authenticated());
        assert!(matches!(state.auth_state, AuthState::LoggedOut));
        assert_eq!(state.error_message, None);
    }
}
