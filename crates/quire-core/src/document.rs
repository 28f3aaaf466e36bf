//! Documents and the source trait shared by documents and proxies.
//!
//! [`DocumentSource`] is the single interface callers read through. A plain
//! [`Document`] releases its content to anyone; access checks live in
//! wrappers that implement the same trait.

use crate::error::Result;
use crate::user::User;

// ============================================================================
// DocumentSource
// ============================================================================

/// Anything that can hand out document content to a user.
pub trait DocumentSource {
    /// Return the content visible to `user`.
    fn content(&self, user: &User) -> Result<&str>;
}

impl<T: DocumentSource + ?Sized> DocumentSource for &T {
    fn content(&self, user: &User) -> Result<&str> {
        (**self).content(user)
    }
}

impl<T: DocumentSource + ?Sized> DocumentSource for Box<T> {
    fn content(&self, user: &User) -> Result<&str> {
        (**self).content(user)
    }
}

// ============================================================================
// Document
// ============================================================================

/// A document with immutable content and no access control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    content: String,
}

impl Document {
    /// Create a document holding `content`.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// The raw content, without going through [`DocumentSource`].
    pub fn content_str(&self) -> &str {
        &self.content
    }
}

impl DocumentSource for Document {
    fn content(&self, user: &User) -> Result<&str> {
        log::trace!("Unprotected read by '{user}'");
        Ok(&self.content)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_document_content_any_user() {
        let doc = Document::new("This is an unprotected document.");
        for name in ["sara", "sami", ""] {
            let user = User::new(name);
            assert_eq!(
                doc.content(&user).unwrap(),
                "This is an unprotected document."
            );
        }
    }

    #[test]
    fn test_document_content_str() {
        let doc = Document::new("abc");
        assert_eq!(doc.content_str(), "abc");
    }

    #[test]
    fn test_document_source_through_box() {
        let doc: Box<dyn DocumentSource> = Box::new(Document::new("boxed"));
        assert_eq!(doc.content(&User::new("sami")).unwrap(), "boxed");
    }

    #[test]
    fn test_document_source_through_ref() {
        let doc = Document::new("borrowed");
        let by_ref = &doc;
        assert_eq!(
            DocumentSource::content(&by_ref, &User::new("sara")).unwrap(),
            "borrowed"
        );
    }
}
