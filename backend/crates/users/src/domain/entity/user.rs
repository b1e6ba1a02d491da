//! User Entity

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;
use platform::query::{MatchStrategy, PageSize, QueryProfile, Queryable};
use serde::Serialize;

use crate::domain::value_object::{email::Email, user_name::UserName};

/// Search and sort configuration for `GET /users`
pub const USER_QUERY_PROFILE: QueryProfile = QueryProfile {
    searchable: &["email", "name"],
    sortable: &["email", "name"],
    strategy: MatchStrategy::Substring,
    default_page_size: PageSize::Unbounded,
    default_sort: None,
};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
    pub email: Email,
    pub password_hash: HashedPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: UserName, email: Email, password_hash: HashedPassword) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn rename(&mut self, name: UserName, email: Email) {
        self.name = name;
        self.email = email;
        self.updated_at = Utc::now();
    }

    pub fn set_password(&mut self, password_hash: HashedPassword) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    pub fn view(&self) -> UserView {
        UserView {
            id: self.id,
            name: self.name.as_str().to_string(),
            email: self.email.as_str().to_string(),
        }
    }
}

impl Queryable for User {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "email" => Some(Cow::Borrowed(self.email.as_str())),
            "name" => Some(Cow::Borrowed(self.name.as_str())),
            _ => None,
        }
    }
}

/// Public projection of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        user.view()
    }
}
