//! Access-control allow-list.
//!
//! Provides [`AccessControlService`], the set of usernames permitted to read
//! protected documents. One service is created up front and handed to every
//! proxy as an `Arc`, so an `allow` made through any handle is seen by all.
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use quire_acl::AccessControlService;
//!
//! let acl = Arc::new(AccessControlService::new());
//! assert!(!acl.is_allowed("sara"));
//!
//! acl.allow("sara");
//! assert!(acl.is_allowed("sara"));
//! ```

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared set of allowed usernames.
///
/// Poisoned locks are recovered: every write is a single insert.
#[derive(Default)]
pub struct AccessControlService {
    allowed: RwLock<HashSet<String>>,
}

impl AccessControlService {
    /// Create a service with an empty allow-list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service that already allows every username in `usernames`.
    pub fn with_allowed<I, S>(usernames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: RwLock::new(usernames.into_iter().map(Into::into).collect()),
        }
    }

    /// Add `username` to the allow-list.
    ///
    /// Idempotent. Returns `true` if the username was not already allowed.
    pub fn allow(&self, username: impl Into<String>) -> bool {
        let username = username.into();
        let added = self.write().insert(username.clone());
        if added {
            log::debug!("Allowed user '{username}'");
        }
        added
    }

    /// Whether `username` is currently on the allow-list.
    pub fn is_allowed(&self, username: &str) -> bool {
        self.read().contains(username)
    }

    /// Sorted snapshot of the allowed usernames.
    pub fn allowed_users(&self) -> Vec<String> {
        self.read()
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of allowed usernames.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if nobody is allowed.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashSet<String>> {
        self.allowed.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashSet<String>> {
        self.allowed.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl fmt::Debug for AccessControlService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessControlService")
            .field("allowed", &self.allowed_users())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
