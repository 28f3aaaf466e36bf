//! Access-checked document proxy.

use std::sync::Arc;

use quire_core::{DocumentSource, Error, Result, User};

use crate::service::AccessControlService;

/// Stands in for a document and releases its content only to allowed users.
///
/// The check runs against the shared [`AccessControlService`] on every read,
/// so users allowed after the proxy was built are let through.
#[derive(Debug)]
pub struct DocumentProxy<D> {
    inner: D,
    acl: Arc<AccessControlService>,
}

impl<D: DocumentSource> DocumentProxy<D> {
    /// Wrap `inner` behind the allow-list held by `acl`.
    pub fn new(inner: D, acl: Arc<AccessControlService>) -> Self {
        Self { inner, acl }
    }

    /// The wrapped source.
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// The access-control service consulted by this proxy.
    ///
    /// This is the same shared service the proxy was built with, so users can
    /// be granted access through any proxy that holds it:
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use quire_acl::{AccessControlService, DocumentProxy};
    /// use quire_core::{Document, DocumentSource, User};
    ///
    /// let acl = Arc::new(AccessControlService::new());
    /// let proxy = DocumentProxy::new(Document::new("minutes"), Arc::clone(&acl));
    /// let sami = User::new("sami");
    /// assert!(proxy.content(&sami).is_err());
    ///
    /// proxy.acl().allow("sami");
    /// assert!(acl.is_allowed("sami"));
    /// assert_eq!(proxy.content(&sami).ok(), Some("minutes"));
    /// ```
    pub fn acl(&self) -> &Arc<AccessControlService> {
        &self.acl
    }
}

impl<D: DocumentSource> DocumentSource for DocumentProxy<D> {
    fn content(&self, user: &User) -> Result<&str> {
        if !self.acl.is_allowed(user.username()) {
            log::warn!("Access denied for user '{user}'");
            return Err(Error::access_denied(user.username()));
        }
        log::debug!("Access granted for user '{user}'");
        self.inner.content(user)
    }
}

// ============================================================================
// Tests
// ============================================================================
