//! Long-lived services

pub mod menu_cache;

pub use menu_cache::MenuCache;
