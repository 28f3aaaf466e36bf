//! # quire-acl
//!
//! Access control for Quire documents.
//!
//! This crate provides:
//! - [`AccessControlService`]: the shared allow-list of usernames
//! - [`DocumentProxy`]: a [`DocumentSource`](quire_core::DocumentSource) that
//!   checks the allow-list before delegating to the real document
//!
//! The service is passed to each proxy explicitly as an
//! `Arc<AccessControlService>`; there is no global instance.

#![warn(clippy::all)]

pub mod proxy;
pub mod service;

mod proptests;

pub use proxy::DocumentProxy;
pub use service::AccessControlService;
