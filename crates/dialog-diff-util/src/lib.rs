//! dialog-diff-util - Utility functions for dialog-diff
//!
//! Leaf helpers shared by the diff engine: the recursive tree walker, deep
//! value equality, and value-shape predicates.

pub mod json_equal;
pub mod shape;
pub mod walk;

// Re-exports for convenience
pub use json_equal::deep_equal;
pub use shape::{is_container, same_shape, Shape};
pub use walk::{walk, walk_from};
