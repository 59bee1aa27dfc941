//! Arena allocator for syntax nodes.
//!
//! Uses `bumpalo` for bump allocation. All nodes of a single file are
//! allocated in the same arena and freed together once translation is done.

use bumpalo::Bump;

/// Arena allocator for syntax nodes.
///
/// # Example
///
/// ```rust
/// use tsxlate_ast::AstArena;
///
/// let arena = AstArena::new();
///
/// let slice = arena.alloc_slice_copy(&[1, 2, 3]);
/// assert_eq!(slice, &[1, 2, 3]);
/// ```
pub struct AstArena {
    bump: Bump,
}

impl AstArena {
    /// Creates a new arena allocator.
    #[inline]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Creates a new arena sized for roughly `source_len` bytes of source.
    ///
    /// Syntax trees average a few nodes per token, so the arena reserves a
    /// multiple of the source length up front.
    #[inline]
    pub fn for_source(source_len: usize) -> Self {
        Self {
            bump: Bump::with_capacity(source_len.saturating_mul(4)),
        }
    }

    /// Allocates a slice in the arena by copying from the input slice.
    #[inline]
    pub fn alloc_slice_copy<T: Copy>(&self, slice: &[T]) -> &[T] {
        self.bump.alloc_slice_copy(slice)
    }
}

impl Default for AstArena {
    fn default() -> Self {
        Self::new()
    }
}
