//! OptAlpha - terminal rendition of the OptAlpha marketing site.
//!
//! Six static pages of product content and a contact form whose validated
//! submissions are inserted into a remote table or a local outbox.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::*;
pub use domain::*;
