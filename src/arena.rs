//! Region allocator backing map slot arrays and key copies.
//!
//! [`Arena`] carves allocations out of large blocks obtained from the global
//! allocator and hands them out through a shared reference, so several maps
//! can borrow one arena at the same time. Nothing is freed individually:
//! every block is released together when the arena is dropped or
//! [`reset`](Arena::reset).

use alloc::alloc::handle_alloc_error;
use alloc::vec::Vec;
use core::alloc::Layout;
use core::cell::Cell;
use core::cell::RefCell;
use core::ptr::NonNull;

/// Block size used by [`Arena::new`].
pub const DEFAULT_BLOCK_SIZE: usize = 4096;

/// Minimum alignment of every block. Requests with a larger alignment get a
/// block aligned to that instead.
const BLOCK_ALIGN: usize = 16;

#[derive(Debug)]
struct Block {
    ptr: NonNull<u8>,
    layout: Layout,
}

/// A bump allocator with all-at-once release.
///
/// # Examples
///
/// ```rust
/// # use robin_map::Arena;
/// #
/// let arena = Arena::new();
/// let key = arena.alloc_bytes(b"albedo");
/// let slots = arena.alloc_slice_fill_copy(4, 0u64);
///
/// assert_eq!(key, b"albedo");
/// assert_eq!(slots, &[0, 0, 0, 0]);
/// assert_eq!(arena.allocated_bytes(), 6 + 4 * 8);
/// ```
#[derive(Debug)]
pub struct Arena {
    block_size: usize,
    blocks: RefCell<Vec<Block>>,
    /// Offset of the first free byte in the last block.
    cursor: Cell<usize>,
    allocated: Cell<usize>,
}

// SAFETY: The arena uniquely owns its blocks, and the `Cell`/`RefCell`
// bookkeeping only prevents sharing across threads, not moving the owner.
unsafe impl Send for Arena {}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Arena {
    fn drop(&mut self) {
        self.release();
    }
}

impl Arena {
    /// Creates an empty arena that grows in [`DEFAULT_BLOCK_SIZE`] blocks.
    ///
    /// No memory is requested until the first allocation.
    pub fn new() -> Self {
        Self::with_block_size(DEFAULT_BLOCK_SIZE)
    }

    /// Creates an empty arena that grows in blocks of at least `block_size`
    /// bytes.
    ///
    /// Allocations larger than `block_size` get a dedicated block.
    pub fn with_block_size(block_size: usize) -> Self {
        Self {
            block_size: block_size.max(1),
            blocks: RefCell::new(Vec::new()),
            cursor: Cell::new(0),
            allocated: Cell::new(0),
        }
    }

    /// Copies `bytes` into the arena and returns the arena-owned copy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use robin_map::Arena;
    /// #
    /// let arena = Arena::new();
    /// let original = String::from("diffuse");
    /// let copy = arena.alloc_bytes(original.as_bytes());
    /// drop(original);
    ///
    /// assert_eq!(copy, b"diffuse");
    /// ```
    pub fn alloc_bytes(&self, bytes: &[u8]) -> &[u8] {
        let ptr = self.alloc_layout(Layout::for_value(bytes));
        // SAFETY: `alloc_layout` returned a region valid for `bytes.len()`
        // writes that nothing else references, and the source cannot overlap
        // a region that was just carved out.
        unsafe {
            core::ptr::copy_nonoverlapping(bytes.as_ptr(), ptr.as_ptr(), bytes.len());
            core::slice::from_raw_parts(ptr.as_ptr(), bytes.len())
        }
    }

    /// Allocates a slice of `len` copies of `value`.
    ///
    /// The slice is aligned for `T` and lives as long as the borrow of the
    /// arena. `T` must be `Copy` because the arena never runs destructors.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_slice_fill_copy<T: Copy>(&self, len: usize, value: T) -> &mut [T] {
        let layout = Layout::array::<T>(len).expect("allocation size overflow");
        let ptr = self.alloc_layout(layout).cast::<T>();
        // SAFETY: The region is aligned for `T`, sized for `len` elements, and
        // handed out exactly once, so creating a unique slice over it is sound
        // once every element has been written.
        unsafe {
            for i in 0..len {
                ptr.add(i).write(value);
            }
            core::slice::from_raw_parts_mut(ptr.as_ptr(), len)
        }
    }

    /// Total bytes handed out since creation or the last [`reset`].
    ///
    /// Alignment padding and the unused tails of blocks are not counted.
    ///
    /// [`reset`]: Arena::reset
    pub fn allocated_bytes(&self) -> usize {
        self.allocated.get()
    }

    /// Number of blocks currently held.
    pub fn block_count(&self) -> usize {
        self.blocks.borrow().len()
    }

    /// Releases every block.
    ///
    /// Taking `&mut self` guarantees that no map or key copy still borrows
    /// from the arena.
    pub fn reset(&mut self) {
        self.release();
    }

    fn release(&mut self) {
        for block in self.blocks.get_mut().drain(..) {
            // SAFETY: Every block was allocated by `alloc_layout` with exactly
            // this layout and is deallocated once, here.
            unsafe { alloc::alloc::dealloc(block.ptr.as_ptr(), block.layout) };
        }
        self.cursor.set(0);
        self.allocated.set(0);
    }

    fn alloc_layout(&self, layout: Layout) -> NonNull<u8> {
        if layout.size() == 0 {
            // SAFETY: Alignments are never zero.
            return unsafe {
                NonNull::new_unchecked(core::ptr::without_provenance_mut(layout.align()))
            };
        }

        let mut blocks = self.blocks.borrow_mut();
        if let Some(block) = blocks.last() {
            let base = block.ptr.as_ptr().addr();
            let start = (base + self.cursor.get()).next_multiple_of(layout.align()) - base;
            if let Some(end) = start.checked_add(layout.size()) {
                if end <= block.layout.size() {
                    self.cursor.set(end);
                    self.allocated.set(self.allocated.get() + layout.size());
                    // SAFETY: `start + layout.size()` is within the block.
                    return unsafe { block.ptr.add(start) };
                }
            }
        }

        let block_layout = Layout::from_size_align(
            layout.size().max(self.block_size),
            layout.align().max(BLOCK_ALIGN),
        )
        .expect("allocation size overflow");
        // SAFETY: `block_layout` has a non-zero size.
        let raw = unsafe { alloc::alloc::alloc(block_layout) };
        let Some(ptr) = NonNull::new(raw) else {
            handle_alloc_error(block_layout);
        };

        log::debug!(
            "arena grew to {} blocks ({} bytes in new block)",
            blocks.len() + 1,
            block_layout.size()
        );

        blocks.push(Block {
            ptr,
            layout: block_layout,
        });
        self.cursor.set(layout.size());
        self.allocated.set(self.allocated.get() + layout.size());
        ptr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_are_independent_of_source() {
        let arena = Arena::new();
        let mut source = alloc::vec![1u8, 2, 3];
        let copy = arena.alloc_bytes(&source);
        source[0] = 9;
        assert_eq!(copy, &[1, 2, 3]);
    }

    #[test]
    fn sequential_allocations_do_not_overlap() {
        let arena = Arena::new();
        let a = arena.alloc_bytes(b"first");
        let b = arena.alloc_bytes(b"second");

        let a_range = a.as_ptr_range();
        let b_start = b.as_ptr();
        assert!(b_start >= a_range.end || b.as_ptr_range().end <= a_range.start);
        assert_eq!(a, b"first");
        assert_eq!(b, b"second");
        assert_eq!(arena.block_count(), 1);
    }

    #[test]
    fn typed_slices_are_aligned() {
        let arena = Arena::new();
        arena.alloc_bytes(b"x");
        let wide = arena.alloc_slice_fill_copy(3, 7u64);
        assert_eq!(wide.as_ptr().addr() % core::mem::align_of::<u64>(), 0);
        assert_eq!(wide, &[7, 7, 7]);

        arena.alloc_bytes(b"yz");
        let wider = arena.alloc_slice_fill_copy(2, 1u128);
        assert_eq!(wider.as_ptr().addr() % core::mem::align_of::<u128>(), 0);
        wider[1] = 5;
        assert_eq!(wider, &[1, 5]);
    }

    #[test]
    fn oversized_request_gets_its_own_block() {
        let arena = Arena::with_block_size(64);
        arena.alloc_bytes(&[0u8; 16]);
        let big = arena.alloc_slice_fill_copy(100, 0xAAu8);
        assert_eq!(big.len(), 100);
        assert!(big.iter().all(|&b| b == 0xAA));
        assert_eq!(arena.block_count(), 2);
        assert_eq!(arena.allocated_bytes(), 116);
    }

    #[test]
    fn zero_sized_requests_allocate_nothing() {
        let arena = Arena::new();
        let empty = arena.alloc_bytes(b"");
        let units = arena.alloc_slice_fill_copy(8, ());
        assert!(empty.is_empty());
        assert_eq!(units.len(), 8);
        assert_eq!(arena.block_count(), 0);
        assert_eq!(arena.allocated_bytes(), 0);
    }

    #[test]
    fn reset_releases_blocks() {
        let mut arena = Arena::with_block_size(32);
        for _ in 0..10 {
            arena.alloc_bytes(&[1u8; 20]);
        }
        assert_eq!(arena.block_count(), 10);
        assert_eq!(arena.allocated_bytes(), 200);

        arena.reset();
        assert_eq!(arena.block_count(), 0);
        assert_eq!(arena.allocated_bytes(), 0);

        assert_eq!(arena.alloc_bytes(b"again"), b"again");
        assert_eq!(arena.block_count(), 1);
    }
}
