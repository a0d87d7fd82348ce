//! Admin credential entity - Reference data for the admin gate.

use serde::{Deserialize, Serialize};

/// Admin username/password pair, compared by exact equality
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredential {
    /// Admin login name
    pub username: String,
    /// Plain-text password
    pub password: String,
}

impl AdminCredential {
    /// Creates a credential pair
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}
