//! The in-memory automation graph and its editing operations.
//!
//! All mutations are synchronous and total: a rejected operation returns an
//! [`EditError`](crate::error::EditError) and leaves the graph untouched, so
//! the editor is never in a structurally invalid state.

pub mod model;
pub mod ops;

pub use model::*;
