//! # quire-cli
//!
//! Console demonstration of Quire protected documents.
//!
//! - [`config`]: [`QuireConfig`] loading via `confyg`
//! - [`demo`]: [`run_demo`], which prints the access report

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod demo;

pub use config::{DocumentsConfig, QuireConfig};
pub use demo::run_demo;
