//! Core types - pure abstractions shared across the codebase.

mod category;
pub mod ident;

pub use category::Category;
pub use ident::{ID_FIELD, IdentPattern};
