use serde::{Deserialize, Serialize};

use crate::features::auth::{AuthMode, FormFields};

/// Login payload: email and password only, regardless of what other field
/// values are sitting in memory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration payload: all four fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub password: String,
}

/// The mode-specific request sent on submit. Each variant carries only the
/// fields its endpoint accepts, so a login body can never leak
/// register-only keys.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum AuthRequest {
    Login(LoginRequest),
    Register(RegisterRequest),
}

impl AuthRequest {
    /// Build the payload for the current mode from a snapshot of the form.
    pub fn from_state(mode: AuthMode, fields: &FormFields) -> Self {
        match mode {
            AuthMode::Login => AuthRequest::Login(LoginRequest {
                email: fields.email.clone(),
                password: fields.password.clone(),
            }),
            AuthMode::Register => AuthRequest::Register(RegisterRequest {
                username: fields.username.clone(),
                email: fields.email.clone(),
                phone_number: fields.phone_number.clone(),
                password: fields.password.clone(),
            }),
        }
    }

    /// Path under the endpoint base this payload is posted to.
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            AuthRequest::Login(_) => "/auth/login",
            AuthRequest::Register(_) => "/auth/register",
        }
    }
}

/// Success response body. The endpoint contracts at least an access token.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub access_token: String,
}
