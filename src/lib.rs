//! gcollect Library
//!
//! Organizes movie directories: looks each one up in a remote catalog,
//! resolves the credited cast to canonical names, downloads the cover,
//! thumbnail and screenshots, and renames the directory to
//! `<people> @ <name> <tag>`.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod preflight;
pub mod services;
pub mod utils;

pub use error::{Error, Result};
