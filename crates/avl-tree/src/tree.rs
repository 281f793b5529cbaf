use std::fmt::Display;

use crate::error::AvlError;
use crate::iter::Iter;
use crate::types::{AvlNode, Link};
use crate::util;

/// Height-balanced binary search tree holding a multiset of ordered values.
///
/// Duplicates are kept: every [`insert`](AvlTree::insert) stores a new node,
/// and [`remove`](AvlTree::remove) deletes one matching node per call.
#[derive(Clone, Debug)]
pub struct AvlTree<T> {
    root: Link<T>,
    size: usize,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AvlTree<T> {
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Root node, for read-only inspection of the tree shape.
    pub fn root(&self) -> Option<&AvlNode<T>> {
        self.root.as_deref()
    }

    /// Height of the root in edges, `-1` for an empty tree.
    pub fn height(&self) -> i32 {
        util::height(&self.root)
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn length(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        log::debug!("clearing tree of {} values", self.size);
        self.root = None;
        self.size = 0;
    }

    pub fn min(&self) -> Result<&T, AvlError> {
        util::min(self.root.as_deref())
    }

    pub fn max(&self) -> Result<&T, AvlError> {
        util::max(self.root.as_deref())
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.size)
    }

    pub fn print(&self, tab: &str) -> String
    where
        T: Display,
    {
        util::print(self.root.as_deref(), tab)
    }
}

impl<T: Ord> AvlTree<T> {
    pub fn insert(&mut self, value: T) {
        self.root = Some(util::insert(self.root.take(), value));
        self.size += 1;
    }

    /// Removes one value equal to `value`. Returns `false` and leaves the tree
    /// untouched when no such value is stored.
    pub fn remove(&mut self, value: &T) -> bool {
        let (root, removed) = util::remove(self.root.take(), value);
        self.root = root;
        if removed {
            self.size -= 1;
        } else {
            log::debug!("remove: value not present");
        }
        removed
    }

    pub fn contains(&self, value: &T) -> bool {
        util::find(self.root.as_deref(), value).is_some()
    }

    pub fn assert_valid(&self) -> Result<(), AvlError> {
        util::assert_avl_tree(self.root.as_deref(), self.size)
    }
}

impl<T: Clone> AvlTree<T> {
    /// All values in non-decreasing order.
    pub fn inorder(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.size);
        util::inorder(self.root.as_deref(), &mut out);
        out
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
