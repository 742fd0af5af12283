//! Core business logic modules.

pub mod actors;
pub mod assets;
pub mod batch;
pub mod cache;
pub mod catalog;
pub mod names;
pub mod organizer;
pub mod tagger;
