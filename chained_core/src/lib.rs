//! Core trait and type declarations shared by the `chained` workspace.
mod core;
pub use self::core::*;
mod error;
pub use error::*;
