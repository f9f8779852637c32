pub mod models;
pub mod validation;
pub mod content;
pub mod errors;

pub use models::*;
pub use validation::*;
pub use content::*;
pub use errors::*;
