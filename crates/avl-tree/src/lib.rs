//! AVL self-balancing binary search tree.
//!
//! Every node owns its two subtrees through `Option<Box<_>>`. Insert and
//! remove hand a subtree into a recursive helper by value and get the
//! (possibly rotated) subtree back, so rotations move pointers and never
//! copy values.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`AvlNode`] and the [`Link`] owning pointer |
//! [`util`] | rotations, `balance`, recursive `insert` / `remove`, validation |
//! [`tree`] | [`AvlTree`] container |
//! [`iter`] | [`Iter`] in-order iterator |
//! [`error`] | [`AvlError`] |
//! [`fuzzer`] | seeded random workloads for tests |

pub mod error;
pub mod fuzzer;
pub mod iter;
pub mod tree;
pub mod types;
pub mod util;

pub use error::AvlError;
pub use iter::Iter;
pub use tree::AvlTree;
pub use types::{AvlNode, Link};
