//! Quire Core — shared types, traits, and errors.
//!
//! This crate provides the foundational types used across all Quire crates.
//! It has no internal Quire dependencies.
//!
//! # Modules
//!
//! - [`document`]: [`Document`] and the [`DocumentSource`] trait
//! - [`user`]: [`User`] identity
//! - [`error`]: Error types and Result alias

#![warn(clippy::all)]

pub mod document;
pub mod error;
pub mod user;

// Re-export key types at crate root for convenience
pub use document::{Document, DocumentSource};
pub use error::{Error, Result};
pub use user::User;
