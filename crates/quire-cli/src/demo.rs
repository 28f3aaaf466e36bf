//! The console demonstration.
//!
//! Builds one unprotected document and one protected document behind a
//! [`DocumentProxy`], then reads them as the configured users. The first
//! denial is printed and ends the run.

use std::io::Write;
use std::sync::Arc;

use quire_acl::{AccessControlService, DocumentProxy};
use quire_core::{Document, DocumentSource, Error, Result, User};

use crate::config::QuireConfig;

/// Run the demo against `config`, writing report lines to `out`.
///
/// Only I/O and configuration problems are returned as errors; an access
/// denial is part of the demo and is written to `out`.
pub fn run_demo<W: Write>(config: &QuireConfig, out: &mut W) -> Result<()> {
    let users: Vec<User> = config.users.iter().map(User::new).collect();
    let Some(first) = users.first() else {
        return Err(Error::config("at least one user is required"));
    };

    let acl = Arc::new(AccessControlService::new());
    for name in &config.allowed_users {
        acl.allow(name.as_str());
    }
    log::debug!("Allow-list: {:?}", acl.allowed_users());

    let unprotected = Document::new(config.documents.unprotected.as_str());
    let protected = DocumentProxy::new(
        Document::new(config.documents.protected.as_str()),
        acl,
    );

    if let Err(e) = read_all(first, &users, &unprotected, &protected, out) {
        if !e.is_access_denied() {
            return Err(e);
        }
        writeln!(out, "{e}")?;
    }
    Ok(())
}

fn read_all<W: Write>(
    first: &User,
    users: &[User],
    unprotected: &dyn DocumentSource,
    protected: &dyn DocumentSource,
    out: &mut W,
) -> Result<()> {
    writeln!(
        out,
        "Unprotected Document ({first}): {}",
        unprotected.content(first)?
    )?;
    for user in users {
        writeln!(
            out,
            "Protected Document ({user}): {}",
            protected.content(user)?
        )?;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
