//! The canvas controller: gestures in, model operations out.

pub mod controller;
pub mod viewport;

pub use controller::*;
pub use viewport::*;
