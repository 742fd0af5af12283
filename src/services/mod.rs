//! External service clients.

pub mod catalog;
pub mod download;
pub mod prompt;

pub use catalog::{CatalogApi, HttpCatalog};
pub use download::{Fetch, HttpFetcher};
pub use prompt::{LinePrompt, Prompt, TerminalPrompt};
