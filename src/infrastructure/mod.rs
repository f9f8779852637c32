//! Infrastructure layer providing external service integrations.
//!
//! This module contains the contact stores (hosted REST table and local
//! outbox file), configuration loading and logging setup.

pub mod clipboard;
pub mod config;
pub mod logging;
pub mod persistence;
pub mod rest;
pub mod store;

pub use clipboard::*;
pub use config::*;
pub use logging::*;
pub use persistence::*;
pub use rest::*;
pub use store::*;
