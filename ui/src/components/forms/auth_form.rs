//! Toggled login/sign-up form submitting credentials to the auth endpoint

use dioxus::prelude::*;

use crate::components::inputs::{InputType, TextInput};
use crate::features::auth::{AuthAction, AuthMode, AuthState};
use crate::services::config::AuthConfig;

#[cfg(feature = "web")]
use crate::features::auth::{resolve_submission, LocalTokenStore, SubmitOutcome};
#[cfg(feature = "web")]
use crate::services::client::{AuthClient, AuthRequest};

#[derive(Props, PartialEq, Clone)]
pub struct AuthFormComponentProps {
    pub state: Signal<AuthState>,
    pub dispatch: EventHandler<AuthAction>,
    pub config: AuthConfig,
}

/// Blocking user-facing notification.
#[cfg(feature = "web")]
fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(feature = "web")]
#[component]
pub fn AuthFormComponent(props: AuthFormComponentProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let config = props.config;

    let is_login = state().mode == AuthMode::Login;

    rsx! {
        div {
            class: "auth-form-container",

            div {
                class: "auth-header",
                div {
                    class: "auth-title",
                    if is_login { "Login" } else { "Sign Up" }
                }
                div { class: "auth-underline" }
                div {
                    class: "auth-mode-toggle",
                    if is_login { "Don't have a login? " } else { "Already have a login? " }
                    span {
                        class: "auth-mode-toggle-link",
                        onclick: move |_| dispatch.call(AuthAction::ToggleMode),
                        if is_login { "Click here!" } else { "Back to Login" }
                    }
                }
            }

            div {
                class: "auth-inputs",

                // Username: register mode only
                if !is_login {
                    div {
                        class: "input-section",
                        TextInput {
                            value: state().fields.username,
                            placeholder: "Username".to_string(),
                            input_type: InputType::Text,
                            input_class: "input-field".to_string(),
                            on_change: move |data: String| {
                                dispatch.call(AuthAction::SetUsername(data));
                            }
                        }
                    }
                }

                div {
                    class: "input-section",
                    TextInput {
                        value: state().fields.email,
                        placeholder: "Email".to_string(),
                        input_type: InputType::Email,
                        input_class: "input-field".to_string(),
                        on_change: move |data: String| {
                            dispatch.call(AuthAction::SetEmail(data));
                        }
                    }
                }

                // Phone number: register mode only
                if !is_login {
                    div {
                        class: "input-section",
                        TextInput {
                            value: state().fields.phone_number,
                            placeholder: "Phone number".to_string(),
                            input_type: InputType::Tel,
                            input_class: "input-field".to_string(),
                            on_change: move |data: String| {
                                dispatch.call(AuthAction::SetPhoneNumber(data));
                            }
                        }
                    }
                }

                div {
                    class: "input-section",
                    TextInput {
                        value: state().fields.password,
                        placeholder: "Password".to_string(),
                        input_type: InputType::Password,
                        input_class: "input-field".to_string(),
                        on_change: move |data: String| {
                            dispatch.call(AuthAction::SetPassword(data));
                        }
                    }
                }
            }

            div {
                class: "button-section",
                button {
                    class: "submit-button",
                    // Deliberately never disabled: overlapping submissions
                    // are an accepted limitation of this form.
                    onclick: move |_| {
                        let current_state = state();
                        let request = AuthRequest::from_state(
                            current_state.mode,
                            &current_state.fields,
                        );
                        let config = config.clone();

                        dispatch.call(AuthAction::SetSubmitting(true));

                        spawn(async move {
                            let client = AuthClient::new(config);
                            let outcome =
                                resolve_submission(client.submit(&request).await, &LocalTokenStore);
                            match outcome {
                                SubmitOutcome::Success => {
                                    crate::console_info!("Authentication successful - token stored");
                                    dispatch.call(AuthAction::SubmitSucceeded);
                                }
                                SubmitOutcome::Failure { notice } => {
                                    crate::console_error!("Authentication failed: {}", notice);
                                    notify(&notice);
                                }
                            }
                            dispatch.call(AuthAction::SetSubmitting(false));
                        });
                    },
                    if state().is_submitting {
                        "Submitting..."
                    } else if is_login {
                        "Login"
                    } else {
                        "Sign Up"
                    }
                }
            }

            // Forgot-password affordance: login mode only
            if is_login {
                div {
                    class: "forgot-password",
                    "Lost Password? "
                    span { class: "forgot-password-link", "Click here!" }
                }
            }
        }
    }
}

// Fallback for when the web feature is disabled
#[cfg(not(feature = "web"))]
#[component]
pub fn AuthFormComponent(_props: AuthFormComponentProps) -> Element {
    rsx! {
        div {
            class: "auth-form-container",
            p {
                "Login is not available. Please enable the 'web' feature."
            }
        }
    }
}
