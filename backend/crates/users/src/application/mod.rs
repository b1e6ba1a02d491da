//! Application Layer
//!
//! Use cases and application services.

pub mod change_password;
pub mod config;
pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod update_user;

// Re-exports
pub use change_password::{ChangePasswordInput, ChangePasswordUseCase};
pub use config::UsersConfig;
pub use create_user::{CreateUserInput, CreateUserOutput, CreateUserUseCase};
pub use delete_user::DeleteUserUseCase;
pub use get_user::GetUserUseCase;
pub use list_users::ListUsersUseCase;
pub use update_user::{UpdateUserInput, UpdateUserUseCase};

use kernel::id::UserId;

use crate::error::{UserError, UserResult};

/// Path ids that are not UUIDs name no user
pub(crate) fn parse_user_id(raw: &str) -> UserResult<UserId> {
    UserId::parse_str(raw).ok_or(UserError::NotFound)
}

/// New password and its confirmation must agree
pub(crate) fn ensure_confirmed(password: &str, confirmation: &str) -> UserResult<()> {
    if password != confirmation {
        return Err(UserError::Validation(
            "Password confirmation does not match".to_string(),
        ));
    }
    Ok(())
}
