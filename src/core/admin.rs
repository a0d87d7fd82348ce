//! Admin gate - checks a username/password pair against the admin list.
//!
//! Comparison is exact string equality on both fields. No hashing, throttling or
//! sessions: each privileged operation authenticates on its own.

use crate::entities::AdminCredential;

/// The stored admin list
#[derive(Debug, Clone, Default)]
pub struct AdminGate {
    admins: Vec<AdminCredential>,
}

impl AdminGate {
    /// Creates a gate over `admins`
    #[must_use]
    pub const fn new(admins: Vec<AdminCredential>) -> Self {
        Self { admins }
    }

    /// True iff an admin with exactly this username and password exists
    #[must_use]
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.admins
            .iter()
            .any(|admin| admin.username == username && admin.password == password)
    }

    /// Number of configured admins
    #[must_use]
    pub fn len(&self) -> usize {
        self.admins.len()
    }

    /// Whether no admin is configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.admins.is_empty()
    }
}
