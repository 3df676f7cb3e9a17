//! Document tree data structures.
//!
//! The tree is an index arena using first-child / next-sibling / parent
//! links. Every node lives in [`Tree`] and is addressed by a [`NodeId`];
//! dropping or clearing the tree releases all of them at once.
//!
//! ```text
//! html
//!  └─ body ── (first_child)
//!      └─ p ─ next_sibling ─▶ div ─ next_sibling ─▶ #text
//! ```

pub mod error;
pub mod geometry;
pub mod node;
pub mod tree;

pub use error::{DomError, Result};
pub use geometry::Rect;
pub use node::{DrawObject, Node, NodeId, TEXT_TAG};
pub use tree::{Ancestors, Children, Descendants, Tree};
