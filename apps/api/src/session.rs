//! Per-request identity.
//!
//! Handlers that touch user data take a `Session` argument; there is no
//! process-wide "current user".

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

pub const USER_ID_HEADER: &str = "x-user-id";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub user_id: Uuid,
}

impl Session {
    /// A present header must parse; only an absent header falls back to the
    /// development user.
    pub fn resolve(header: Option<&str>, dev_user_id: Option<Uuid>) -> Result<Self, AppError> {
        let user_id = match header.map(str::trim) {
            Some(raw) => Uuid::parse_str(raw).map_err(|_| AppError::Unauthorized)?,
            None => dev_user_id.ok_or(AppError::Unauthorized)?,
        };
        Ok(Self { user_id })
    }
}

#[axum::async_trait]
impl FromRequestParts<AppState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let header = match parts.headers.get(USER_ID_HEADER) {
            Some(value) => Some(value.to_str().map_err(|_| AppError::Unauthorized)?),
            None => None,
        };
        Session::resolve(header, state.config.dev_user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = "6f1c1b2e-8a4d-4c1e-9d3a-2b7e5f0a9c11";

    #[test]
    fn test_header_wins_over_dev_user() {
        let session = Session::resolve(Some(ALICE), Some(Uuid::nil())).unwrap();
        assert_eq!(session.user_id.to_string(), ALICE);
    }

    #[test]
    fn test_dev_user_when_header_absent() {
        let dev = Uuid::new_v4();
        assert_eq!(Session::resolve(None, Some(dev)).unwrap().user_id, dev);
    }

    #[test]
    fn test_missing_identity_is_unauthorized() {
        assert!(matches!(
            Session::resolve(None, None),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_malformed_header_is_unauthorized_even_with_dev_user() {
        assert!(matches!(
            Session::resolve(Some("not-a-uuid"), Some(Uuid::nil())),
            Err(AppError::Unauthorized)
        ));
    }
}
