//! PostgreSQL Repository Implementations

use sqlx::PgPool;
use uuid::Uuid;

use kernel::id::UserId;

use crate::domain::entity::credentials::UserCredentials;
use crate::domain::repository::CredentialRepository;
use crate::error::AuthResult;

/// PostgreSQL-backed credential lookup over the `users` table
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CredentialRepository for PgAuthRepository {
    async fn find_credentials_by_email(&self, email: &str) -> AuthResult<Option<UserCredentials>> {
        let row = sqlx::query_as::<_, CredentialsRow>(
            r#"
            SELECT
                id,
                name,
                email,
                password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CredentialsRow::into_credentials))
    }
}

#[derive(sqlx::FromRow)]
struct CredentialsRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
}

impl CredentialsRow {
    fn into_credentials(self) -> UserCredentials {
        UserCredentials {
            user_id: UserId::from_uuid(self.id),
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
        }
    }
}
