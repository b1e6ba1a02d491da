//! Password Credential Verifier
//!
//! [`CredentialVerifier`] backed by stored Argon2id hashes.

use std::sync::Arc;

use platform::password::{ClearTextPassword, HashedPassword};

use crate::domain::repository::{CredentialRepository, CredentialVerifier, VerifiedUser};
use crate::domain::value_object::identity::Identity;
use crate::error::{AuthError, AuthResult};

pub struct PasswordCredentialVerifier<R>
where
    R: CredentialRepository,
{
    repo: Arc<R>,
    pepper: Option<Vec<u8>>,
}

impl<R> PasswordCredentialVerifier<R>
where
    R: CredentialRepository,
{
    pub fn new(repo: Arc<R>, pepper: Option<Vec<u8>>) -> Self {
        Self { repo, pepper }
    }
}

impl<R> CredentialVerifier for PasswordCredentialVerifier<R>
where
    R: CredentialRepository + Send + Sync,
{
    async fn verify(&self, identity: &Identity, secret: &str) -> AuthResult<Option<VerifiedUser>> {
        let Some(credentials) = self
            .repo
            .find_credentials_by_email(identity.as_str())
            .await?
        else {
            return Ok(None);
        };

        let hashed = HashedPassword::from_phc_string(credentials.password_hash.as_str())
            .map_err(|e| AuthError::Internal(format!("Stored hash unreadable: {}", e)))?;
        let submitted = ClearTextPassword::for_verification(secret.to_owned());

        if hashed.verify(&submitted, self.pepper.as_deref()) {
            Ok(Some(credentials.into()))
        } else {
            Ok(None)
        }
    }
}
