use crate::types::AvlNode;

/// Lazy in-order iterator over borrowed tree values.
///
/// Holds the path of nodes whose left subtrees have been entered but whose own
/// value has not yet been yielded, so memory use is bounded by the tree height.
pub struct Iter<'a, T> {
    stack: Vec<&'a AvlNode<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a AvlNode<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left(root);
        iter
    }

    fn push_left(&mut self, mut node: Option<&'a AvlNode<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> std::iter::FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::AvlTree;

    #[test]
    fn yields_sorted_values() {
        let tree: AvlTree<i32> = [5, 3, 8, 1, 4, 7, 9, 2, 6].into_iter().collect();
        let seen: Vec<i32> = tree.iter().copied().collect();
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let tree = AvlTree::<i32>::new();
        let mut it = tree.iter();
        assert_eq!(it.len(), 0);
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn len_tracks_progress() {
        let tree: AvlTree<i32> = (0..10).collect();
        let mut it = tree.iter();
        assert_eq!(it.len(), 10);
        it.next();
        it.next();
        assert_eq!(it.len(), 8);
        assert_eq!(it.count(), 8);
    }

    #[test]
    fn clone_restarts_from_same_position() {
        let tree: AvlTree<i32> = (0..5).collect();
        let mut it = tree.iter();
        it.next();
        let rest: Vec<i32> = it.clone().copied().collect();
        assert_eq!(rest, vec![1, 2, 3, 4]);
        assert_eq!(it.next(), Some(&1));
    }
}
