// Core types for the auth form - no dioxus imports needed here

/// Which face of the form is currently shown.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    /// The other mode. Toggling never touches field values.
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

/// All four credential fields, kept regardless of mode. Register-only values
/// survive a switch back to login; the payload layer decides what goes on
/// the wire.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FormFields {
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum AuthAction {
    ToggleMode,
    SetUsername(String),
    SetEmail(String),
    SetPhoneNumber(String),
    SetPassword(String),
    SetSubmitting(bool),
    /// Bulk reset of all fields after a successful submission. Mode stays.
    SubmitSucceeded,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct AuthState {
    pub mode: AuthMode,
    pub fields: FormFields,
    /// In-flight marker for button feedback. Submission is deliberately not
    /// guarded by it; overlapping requests are an accepted limitation.
    pub is_submitting: bool,
}

impl AuthState {
    /// Reduces the state in place based on an action, preserving Dioxus
    /// Signal reactivity.
    pub fn reduce_in_place(&mut self, action: AuthAction) {
        match action {
            AuthAction::ToggleMode => {
                self.mode = self.mode.toggled();
            }
            AuthAction::SetUsername(username) => {
                self.fields.username = username;
            }
            AuthAction::SetEmail(email) => {
                self.fields.email = email;
            }
            AuthAction::SetPhoneNumber(phone_number) => {
                self.fields.phone_number = phone_number;
            }
            AuthAction::SetPassword(password) => {
                self.fields.password = password;
            }
            AuthAction::SetSubmitting(submitting) => {
                self.is_submitting = submitting;
            }
            AuthAction::SubmitSucceeded => {
                self.fields = FormFields::default();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_reflect_last_write_per_key() {
        let mut state = AuthState::default();
        state.reduce_in_place(AuthAction::SetEmail("first@example.com".to_string()));
        state.reduce_in_place(AuthAction::SetPassword("hunter2".to_string()));
        state.reduce_in_place(AuthAction::SetEmail("second@example.com".to_string()));

        assert_eq!(state.fields.email, "second@example.com");
        assert_eq!(state.fields.password, "hunter2");
        // Keys never written stay empty.
        assert_eq!(state.fields.username, "");
        assert_eq!(state.fields.phone_number, "");
    }

    #[test]
    fn toggle_twice_restores_mode_and_keeps_fields() {
        let mut state = AuthState::default();
        state.reduce_in_place(AuthAction::SetUsername("ada".to_string()));
        state.reduce_in_place(AuthAction::SetPhoneNumber("555-0100".to_string()));

        assert_eq!(state.mode, AuthMode::Login);
        state.reduce_in_place(AuthAction::ToggleMode);
        assert_eq!(state.mode, AuthMode::Register);
        state.reduce_in_place(AuthAction::ToggleMode);
        assert_eq!(state.mode, AuthMode::Login);

        // Register-only values are retained across the round trip.
        assert_eq!(state.fields.username, "ada");
        assert_eq!(state.fields.phone_number, "555-0100");
    }

    #[test]
    fn success_resets_fields_but_not_mode() {
        let mut state = AuthState::default();
        state.reduce_in_place(AuthAction::ToggleMode);
        state.reduce_in_place(AuthAction::SetUsername("ada".to_string()));
        state.reduce_in_place(AuthAction::SetEmail("ada@example.com".to_string()));
        state.reduce_in_place(AuthAction::SetPhoneNumber("555-0100".to_string()));
        state.reduce_in_place(AuthAction::SetPassword("hunter2".to_string()));

        state.reduce_in_place(AuthAction::SubmitSucceeded);

        assert_eq!(state.fields, FormFields::default());
        assert_eq!(state.mode, AuthMode::Register);
    }
}
