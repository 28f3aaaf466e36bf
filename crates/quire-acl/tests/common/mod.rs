//! Shared fixtures for quire-acl integration tests.

use std::sync::Arc;

use quire_acl::{AccessControlService, DocumentProxy};
use quire_core::Document;

/// Text held by the protected fixture document.
pub const PROTECTED_TEXT: &str = "This is a protected document.";

/// Text held by the unprotected fixture document.
pub const UNPROTECTED_TEXT: &str = "This is an unprotected document.";

/// A shared service plus one protected and one unprotected document.
pub struct Library {
    /// Shared access-control service.
    pub acl: Arc<AccessControlService>,
    /// Document read without any check.
    pub unprotected: Document,
    /// Document behind the proxy.
    pub protected: DocumentProxy<Document>,
}

impl Library {
    /// Build a library whose allow-list starts with `allowed`.
    pub fn with_allowed(allowed: &[&str]) -> Self {
        let acl = Arc::new(AccessControlService::with_allowed(allowed.iter().copied()));
        Self {
            unprotected: Document::new(UNPROTECTED_TEXT),
            protected: DocumentProxy::new(Document::new(PROTECTED_TEXT), Arc::clone(&acl)),
            acl,
        }
    }
}
