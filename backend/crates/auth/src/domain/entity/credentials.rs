//! Credentials
//!
//! The slice of a stored user that login needs. Read-only for this crate;
//! the users resource owns the record.

use kernel::id::UserId;

/// Stored credentials, looked up by normalized email
#[derive(Clone)]
pub struct UserCredentials {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    /// Argon2id PHC string
    pub password_hash: String,
}

impl std::fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCredentials")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .field("password_hash", &"[HASH]")
            .finish()
    }
}

/// A user whose secret checked out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedUser {
    pub user_id: UserId,
    pub email: String,
    pub name: String,
}

impl From<UserCredentials> for VerifiedUser {
    fn from(creds: UserCredentials) -> Self {
        Self {
            user_id: creds.user_id,
            email: creds.email,
            name: creds.name,
        }
    }
}
