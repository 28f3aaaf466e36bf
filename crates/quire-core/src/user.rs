//! User identity.

use std::fmt;

/// A user identity, as presented to a document.
///
/// Carries only a username. No authentication is performed; whoever holds a
/// `User` is taken to be that user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    username: String,
}

impl User {
    /// Create a user with the given username.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    /// The user's username.
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}
