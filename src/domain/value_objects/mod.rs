//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod environment;
mod environments;
mod item_kind;

pub use environment::{Environment, EnvironmentError};
pub use environments::Environments;
pub use item_kind::ItemKind;
