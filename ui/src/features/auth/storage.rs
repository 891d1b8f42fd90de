use gloo_storage::{LocalStorage, Storage};

use crate::services::client::{AuthSession, ClientError, ClientResult};

/// Fixed key other parts of the application read the token from.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Destination for a freshly issued access token. The form takes this as an
/// injected capability rather than reaching into ambient browser storage,
/// so tests can substitute an in-memory fake.
pub trait TokenSink {
    fn store(&self, token: &str) -> Result<(), ClientError>;
}

/// Production sink: browser local storage under [`TOKEN_STORAGE_KEY`].
/// Write-only from this component: no read, no deletion, no expiry.
pub struct LocalTokenStore;

impl TokenSink for LocalTokenStore {
    fn store(&self, token: &str) -> Result<(), ClientError> {
        LocalStorage::set(TOKEN_STORAGE_KEY, token).map_err(|e| ClientError::Storage {
            message: e.to_string(),
        })
    }
}

/// What the form does after a submission settles.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Token went through the sink; all fields are to be reset.
    Success,
    /// Nothing was stored and fields are preserved for correction;
    /// `notice` is shown to the user.
    Failure { notice: String },
}

/// Fold a submission result and a sink into a UI outcome. The token is
/// stored only on success; a sink failure preserves the fields like any
/// other error.
pub fn resolve_submission(
    result: ClientResult<AuthSession>,
    sink: &dyn TokenSink,
) -> SubmitOutcome {
    match result {
        Ok(session) => match sink.store(&session.access_token) {
            Ok(()) => SubmitOutcome::Success,
            Err(e) => SubmitOutcome::Failure {
                notice: e.user_notice().to_string(),
            },
        },
        Err(e) => SubmitOutcome::Failure {
            notice: e.user_notice().to_string(),
        },
    }
}
