//! The boundary to the remote API: wire shapes, the pre-save check and the
//! explicit save action.
//!
//! Nothing here talks HTTP: the [`PersistenceAdapter`] trait is the seam a
//! host application implements over its CRUD client.

pub mod adapter;
pub mod payload;
pub mod validate;

pub use adapter::*;
pub use payload::*;
pub use validate::*;
