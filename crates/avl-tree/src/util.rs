use std::cmp::Ordering;
use std::fmt::Display;

use crate::error::AvlError;
use crate::types::{AvlNode, Link};

#[inline]
pub fn height<T>(link: &Link<T>) -> i32 {
    link.as_ref().map_or(-1, |n| n.height)
}

#[inline]
pub fn reheight<T>(node: &mut AvlNode<T>) {
    node.height = 1 + height(&node.left).max(height(&node.right));
}

/// Balance factor, `height(left) - height(right)`.
#[inline]
pub fn difference<T>(node: &AvlNode<T>) -> i32 {
    height(&node.left) - height(&node.right)
}

/// Promotes the left child to subtree root. A node without a left child is
/// returned as is.
pub fn rotate_right<T>(mut node: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    let Some(mut root) = node.left.take() else {
        return node;
    };
    node.left = root.right.take();
    reheight(&mut node);
    root.right = Some(node);
    reheight(&mut root);
    log::trace!("rotate right: new subtree height {}", root.height);
    root
}

/// Promotes the right child to subtree root. A node without a right child is
/// returned as is.
pub fn rotate_left<T>(mut node: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    let Some(mut root) = node.right.take() else {
        return node;
    };
    node.right = root.left.take();
    reheight(&mut node);
    root.left = Some(node);
    reheight(&mut root);
    log::trace!("rotate left: new subtree height {}", root.height);
    root
}

/// Restores the balance factor of `node` to `-1..=1`, assuming both children
/// are already balanced and carry correct heights.
pub fn balance<T>(mut node: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    let factor = difference(&node);

    if factor > 1 {
        // left-right case
        if let Some(left) = node.left.take() {
            node.left = Some(if difference(&left) < 0 {
                rotate_left(left)
            } else {
                left
            });
        }
        return rotate_right(node);
    }

    if factor < -1 {
        // right-left case
        if let Some(right) = node.right.take() {
            node.right = Some(if difference(&right) > 0 {
                rotate_right(right)
            } else {
                right
            });
        }
        return rotate_left(node);
    }

    reheight(&mut node);
    node
}

/// Inserts `value` into the subtree. Equal values go left.
pub fn insert<T: Ord>(link: Link<T>, value: T) -> Box<AvlNode<T>> {
    let Some(mut node) = link else {
        return Box::new(AvlNode::new(value));
    };

    if value <= node.value {
        node.left = Some(insert(node.left.take(), value));
    } else {
        node.right = Some(insert(node.right.take(), value));
    }

    balance(node)
}

/// Removes one node equal to `value`. Returns the repaired subtree and
/// whether anything was removed.
pub fn remove<T: Ord>(link: Link<T>, value: &T) -> (Link<T>, bool) {
    let Some(mut node) = link else {
        return (None, false);
    };

    match value.cmp(&node.value) {
        Ordering::Less => {
            let (left, removed) = remove(node.left.take(), value);
            node.left = left;
            (Some(balance(node)), removed)
        }
        Ordering::Greater => {
            let (right, removed) = remove(node.right.take(), value);
            node.right = right;
            (Some(balance(node)), removed)
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => (None, true),
            (Some(child), None) | (None, Some(child)) => (Some(child), true),
            (Some(left), Some(right)) => {
                let (right, successor) = take_min(right);
                node.value = successor;
                node.left = Some(left);
                node.right = right;
                (Some(balance(node)), true)
            }
        },
    }
}

/// Detaches the leftmost node of a non-empty subtree, returning the repaired
/// subtree and the detached value.
fn take_min<T>(mut node: Box<AvlNode<T>>) -> (Link<T>, T) {
    match node.left.take() {
        Some(left) => {
            let (left, min) = take_min(left);
            node.left = left;
            (Some(balance(node)), min)
        }
        None => {
            let AvlNode { value, right, .. } = *node;
            (right, value)
        }
    }
}

pub fn min<T>(node: Option<&AvlNode<T>>) -> Result<&T, AvlError> {
    let mut curr = node.ok_or(AvlError::EmptyTree)?;
    while let Some(left) = curr.left.as_deref() {
        curr = left;
    }
    Ok(&curr.value)
}

pub fn max<T>(node: Option<&AvlNode<T>>) -> Result<&T, AvlError> {
    let mut curr = node.ok_or(AvlError::EmptyTree)?;
    while let Some(right) = curr.right.as_deref() {
        curr = right;
    }
    Ok(&curr.value)
}

/// Finds the first node on the search path equal to `value`.
pub fn find<'a, T: Ord>(node: Option<&'a AvlNode<T>>, value: &T) -> Option<&'a AvlNode<T>> {
    let mut curr = node;
    while let Some(n) = curr {
        curr = match value.cmp(&n.value) {
            Ordering::Equal => return Some(n),
            Ordering::Less => n.left.as_deref(),
            Ordering::Greater => n.right.as_deref(),
        };
    }
    None
}

pub fn inorder<T: Clone>(node: Option<&AvlNode<T>>, out: &mut Vec<T>) {
    if let Some(n) = node {
        inorder(n.left.as_deref(), out);
        out.push(n.value.clone());
        inorder(n.right.as_deref(), out);
    }
}

fn validate_heights<T>(node: &AvlNode<T>) -> Result<i32, AvlError> {
    let lh = match node.left.as_deref() {
        Some(l) => validate_heights(l)?,
        None => -1,
    };
    let rh = match node.right.as_deref() {
        Some(r) => validate_heights(r)?,
        None => -1,
    };

    let expected = 1 + lh.max(rh);
    if node.height != expected {
        return Err(AvlError::HeightMismatch {
            expected,
            actual: node.height,
        });
    }
    let factor = lh - rh;
    if !(-1..=1).contains(&factor) {
        return Err(AvlError::Unbalanced { factor });
    }
    Ok(expected)
}

fn validate_order<'a, T: Ord>(
    node: Option<&'a AvlNode<T>>,
    prev: &mut Option<&'a T>,
) -> Result<usize, AvlError> {
    let Some(n) = node else {
        return Ok(0);
    };
    let left = validate_order(n.left.as_deref(), prev)?;
    if let Some(p) = *prev {
        if *p > n.value {
            return Err(AvlError::OrderViolated);
        }
    }
    *prev = Some(&n.value);
    let right = validate_order(n.right.as_deref(), prev)?;
    Ok(left + 1 + right)
}

/// Checks cached heights, balance factors, in-order ordering and that the
/// subtree holds exactly `size` nodes.
pub fn assert_avl_tree<T: Ord>(root: Option<&AvlNode<T>>, size: usize) -> Result<(), AvlError> {
    if let Some(root) = root {
        validate_heights(root)?;
    }
    let counted = validate_order(root, &mut None)?;
    if counted != size {
        return Err(AvlError::SizeMismatch {
            counted,
            tracked: size,
        });
    }
    Ok(())
}

/// Debug printer for AVL subtrees.
pub fn print<T: Display>(node: Option<&AvlNode<T>>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(n) => {
            let left = print(n.left.as_deref(), &format!("{tab}  "));
            let right = print(n.right.as_deref(), &format!("{tab}  "));
            format!(
                "{} [h={}]\n{tab}L={left}\n{tab}R={right}",
                n.value, n.height
            )
        }
    }
}
