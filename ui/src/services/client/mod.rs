// Client-side plumbing for the login/sign-up form:
// - mode-specific payload shaping for the two auth endpoints
// - a single-attempt HTTP submission against the configured base URL
// - error mapping into the two user-facing notice channels

pub mod auth;
pub mod errors;
pub mod types;


pub use auth::AuthClient;
pub use errors::{ClientError, ClientResult, GENERIC_ERROR_NOTICE, REJECTION_FALLBACK_NOTICE};
pub use types::{AuthRequest, AuthSession, LoginRequest, RegisterRequest};
