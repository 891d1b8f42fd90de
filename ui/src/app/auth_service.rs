use dioxus::prelude::*;

use crate::components::AuthFormComponent;
use crate::features::auth::{AuthAction, AuthState};
use crate::services::config::AuthConfig;

#[component]
pub fn AuthService() -> Element {
    // Consolidated state management
    let mut state = use_signal(AuthState::default);

    // Dispatch function for actions - using in-place reduction to preserve
    // Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: AuthAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    rsx! {
        div {
            class: "auth-service-container",

            AuthFormComponent {
                state: state,
                dispatch: dispatch,
                config: AuthConfig::default()
            }
        }
    }
}
