//! Property-based tests for the allow-list and proxy.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use crate::{AccessControlService, DocumentProxy};
    use proptest::prelude::*;
    use quire_core::{Document, DocumentSource, User};

    proptest! {
        #[test]
        fn test_allow_idempotent(names in prop::collection::vec("[a-z]{1,8}", 0..16)) {
            let acl = AccessControlService::new();
            for name in &names {
                acl.allow(name.as_str());
            }
            let before = acl.allowed_users();
            for name in &names {
                prop_assert!(!acl.allow(name.as_str()));
            }
            prop_assert_eq!(acl.allowed_users(), before);
        }

        #[test]
        fn test_proxy_matches_allow_list(
            allowed in prop::collection::hash_set("[a-z]{1,6}", 0..8),
            reader in "[a-z]{1,6}",
            content in "\\PC*",
        ) {
            let acl = Arc::new(AccessControlService::with_allowed(allowed.iter().cloned()));
            let proxy = DocumentProxy::new(Document::new(content.clone()), acl);
            let result = proxy.content(&User::new(reader.clone()));
            if allowed.contains(&reader) {
                prop_assert_eq!(result.unwrap(), content.as_str());
            } else {
                let err = result.unwrap_err();
                prop_assert_eq!(err.denied_username(), Some(reader.as_str()));
            }
        }
    }
}
