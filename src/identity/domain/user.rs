//! User account shape consumed by authorization and notification delivery.

use super::UserId;
use serde::{Deserialize, Serialize};

/// Coarse role attached to every user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular account; authority over owned tasks only.
    User,
    /// Administrative account; authority over every task.
    Admin,
}

impl UserRole {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Returns `true` for administrative accounts.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Acting user resolved by the external authentication collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: Option<String>,
    role: UserRole,
}

impl User {
    /// Creates a user record.
    #[must_use]
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: Option<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email,
            role,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address, when one is on record.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the account role.
    #[must_use]
    pub const fn role(&self) -> UserRole {
        self.role
    }
}
