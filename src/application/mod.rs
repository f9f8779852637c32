//! Application layer managing state and business workflows.
//!
//! This module coordinates between the domain layer and presentation layer:
//! page navigation, the contact form state machine, submission dispatch
//! and notifications.

pub mod dispatcher;
pub mod state;
pub mod toast;

#[cfg(test)]
pub(crate) mod testing;

pub use dispatcher::*;
pub use state::*;
pub use toast::*;
