//! Authenticated caller
//!
//! The bearer-token middleware puts an [`AuthenticatedUser`] into request
//! extensions. Resource handlers read it back as
//! `Option<Extension<AuthenticatedUser>>` so they also work unguarded.

use crate::id::UserId;

/// Caller identity carried in request extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

impl AuthenticatedUser {
    /// Value for the `actor` log field
    pub fn actor(caller: Option<&Self>) -> String {
        caller.map_or_else(|| "anonymous".to_owned(), |c| c.user_id.to_string())
    }
}
