// Arena allocation for AST nodes
//
// Every node of a tree lives in one bump arena and refers to its children by
// shared reference. Nodes are never mutated after allocation, so a rewrite can
// hand back an existing subtree as-is and only allocate the spine above a
// change. Dropping the arena frees the whole tree at once.

use bumpalo::Bump;

/// Arena allocator for AST construction and rewriting
///
/// A rewritten tree may borrow from the arena of the input tree and from the
/// arena passed to the pass; both must outlive the result.
#[derive(Default)]
pub struct Arena {
    bump: Bump,
}

impl Arena {
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Move a node into the arena
    ///
    /// Values allocated here are never dropped. AST nodes hold only
    /// references and string slices, so nothing leaks.
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Copy a spelling into the arena
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    pub fn alloc_slice_copy<T: Copy>(&self, src: &[T]) -> &[T] {
        self.bump.alloc_slice_copy(src)
    }

    /// Collect child nodes into an arena slice
    pub fn alloc_slice_fill_iter<T, I>(&self, iter: I) -> &[T]
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        self.bump.alloc_slice_fill_iter(iter)
    }

    /// Bytes handed out so far; the pass only allocates when it rewrites
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Identifier, IntegerLiteral};
    use crate::span::Span;

    #[test]
    fn test_alloc_node() {
        let arena = Arena::new();
        let literal = arena.alloc(IntegerLiteral::new("42", Span::dummy()));
        assert_eq!(literal.value(), Some(42));
    }

    #[test]
    fn test_spelling_outlives_source_buffer() {
        let arena = Arena::new();
        let name = {
            let fresh = format!("$h{}", 3);
            arena.alloc_str(&fresh)
        };
        assert_eq!(name, "$h3");
    }

    #[test]
    fn test_children_slice() {
        let arena = Arena::new();
        let names = ["i", "n"]
            .iter()
            .map(|s| Identifier::new(s, Span::dummy()));
        let slice = arena.alloc_slice_fill_iter(names);
        assert_eq!(slice.len(), 2);
        assert_eq!(slice[1].spelling, "n");
        assert!(arena.allocated_bytes() > 0);
    }

    #[test]
    fn test_allocations_are_distinct() {
        let arena = Arena::new();
        let a = arena.alloc(7);
        let b = arena.alloc(7);
        assert!(!std::ptr::eq(a, b));
    }
}
