/// Owning pointer to a subtree. `None` is the empty subtree.
pub type Link<T> = Option<Box<AvlNode<T>>>;

/// A single stored value together with its two owned subtrees.
#[derive(Clone, Debug)]
pub struct AvlNode<T> {
    pub value: T,
    pub left: Link<T>,
    pub right: Link<T>,
    /// Cached subtree height in edges. A leaf is `0`.
    pub height: i32,
}

impl<T> AvlNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 0,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
