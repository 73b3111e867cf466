use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub type UserId = u64;

/// A stored directory entry. The password is kept exactly as submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Create input after validation; the store assigns the id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}

/// Search projection: only the fields a search result exposes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserSummary {
    pub name: String,
    pub email: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        UserSummary {
            name: user.name,
            email: user.email,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Email,
}

impl SearchField {
    pub const ALL: [SearchField; 2] = [SearchField::Name, SearchField::Email];

    pub fn value_of<'a>(&self, user: &'a User) -> &'a str {
        match self {
            SearchField::Name => &user.name,
            SearchField::Email => &user.email,
        }
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SearchField::Name => "name",
            SearchField::Email => "email",
        };
        write!(f, "{}", s)
    }
}
