use core::mem::{size_of, MaybeUninit};
use core::ops::{Index, IndexMut, Range};
use std::collections::VecDeque;
use std::fmt;

use crate::cursor::Cursor;
use crate::error::CapacityError;
use crate::iter::{IntoIter, Iter, IterMut};

/// A trait for abstraction over different double-ended queue types.
///
/// This is the generic contract a bounded-queue or blocking wrapper consumes:
/// anything that can push and pop at both ends and inspect its ends. It is
/// implemented for [`RingDeque`] and for `std::collections::VecDeque`, so
/// callers can swap one backing structure for the other.
pub trait AnyDeque<T> {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn push_back(&mut self, item: T);
    fn push_front(&mut self, item: T);
    fn pop_back(&mut self) -> Option<T>;
    fn pop_front(&mut self) -> Option<T>;
    fn clear(&mut self);
    fn front(&self) -> Option<&T>;
    fn back(&self) -> Option<&T>;
    fn front_mut(&mut self) -> Option<&mut T>;
    fn back_mut(&mut self) -> Option<&mut T>;
}

impl<T> AnyDeque<T> for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
    fn front_mut(&mut self) -> Option<&mut T> {
        self.front_mut()
    }
    fn back_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }
}

impl<T> AnyDeque<T> for RingDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
    fn front_mut(&mut self) -> Option<&mut T> {
        self.front_mut()
    }
    fn back_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }
}

/// A fixed-capacity double-ended queue in one contiguous allocation, with
/// overwrite-oldest eviction when full.
///
/// # Overview
/// `RingDeque` behaves like a `VecDeque` whose capacity never grows on its
/// own: pushing into a full buffer evicts the element at the opposite end and
/// returns it, so the buffer always holds the most recent `capacity()`
/// elements pushed from one side. This is the primitive beneath sliding
/// windows, audit rings and bounded work queues.
///
/// Elements are addressable by logical index in O(1), iterable in both
/// directions, and mid-buffer insertion/removal is supported via swap-based
/// relocation.
///
/// # Invariants
/// * `0 <= len() <= capacity()` in every reachable state.
/// * The head and tail cursors each carry a raw slot index in
///   `[0, capacity())` plus a parity bit; equal cursors mean empty, equal
///   indices with opposite parity mean full. There is no separate length
///   field to keep in sync.
/// * Slots in the circular range `[head, tail)` are initialized; all other
///   slots are uninitialized memory.
///
/// # Examples
/// ```
/// use ring_collections::RingDeque;
///
/// let mut window: RingDeque<u32> = RingDeque::with_capacity(4);
/// for sample in [10, 20, 30, 40] {
///     assert_eq!(window.push_back(sample), None);
/// }
/// // Full: the oldest sample is evicted and handed back.
/// assert_eq!(window.push_back(50), Some(10));
/// assert_eq!(window.iter().copied().collect::<Vec<_>>(), vec![20, 30, 40, 50]);
/// ```
pub struct RingDeque<T> {
    slots: Box<[MaybeUninit<T>]>,
    head: Cursor,
    tail: Cursor,
}

impl<T> RingDeque<T> {
    /// Creates an empty buffer with exactly `capacity` slots.
    ///
    /// # Panics
    /// Panics if `capacity` is zero. Use [`RingDeque::try_with_capacity`] to
    /// handle that case (and allocation failure) as an error instead.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "ring capacity must be greater than zero");
        Self {
            slots: Self::alloc_slots(capacity),
            head: Cursor::zero(),
            tail: Cursor::zero(),
        }
    }

    /// Fallible variant of [`RingDeque::with_capacity`].
    pub fn try_with_capacity(capacity: usize) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError::ZeroCapacity);
        }
        Ok(Self {
            slots: Self::try_alloc_slots(capacity)?,
            head: Cursor::zero(),
            tail: Cursor::zero(),
        })
    }

    /// Creates a full buffer of `capacity` copies of `value`.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn with_fill(capacity: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut out = Self::with_capacity(capacity);
        while !out.is_full() {
            out.push_back(value.clone());
        }
        out
    }

    fn alloc_slots(n: usize) -> Box<[MaybeUninit<T>]> {
        let mut block = Vec::with_capacity(n);
        block.resize_with(n, MaybeUninit::uninit);
        block.into_boxed_slice()
    }

    fn try_alloc_slots(n: usize) -> Result<Box<[MaybeUninit<T>]>, CapacityError> {
        let mut block: Vec<MaybeUninit<T>> = Vec::new();
        block
            .try_reserve_exact(n)
            .map_err(|_| CapacityError::AllocFailed(n))?;
        block.resize_with(n, MaybeUninit::uninit);
        Ok(block.into_boxed_slice())
    }

    // --- Inspection ---

    /// Number of elements currently held, derived from the cursors alone.
    pub fn len(&self) -> usize {
        self.head.distance_to(self.tail, self.capacity()) as usize
    }

    /// Number of slots in the storage block. Fixed until a capacity-changing
    /// operation (`reserve`, `resize`, `shrink_to_fit`) replaces the block.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// True when every slot holds a live element; the next push will evict.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Ceiling on the capacity any `RingDeque<T>` could be given.
    pub fn max_size(&self) -> usize {
        if size_of::<T>() == 0 {
            usize::MAX
        } else {
            isize::MAX as usize / size_of::<T>()
        }
    }

    // --- Element access ---

    /// Returns a reference to the element at logical index `index`, counted
    /// from the oldest element.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len() {
            let raw = self.raw_index(index);
            // SAFETY: logical index < len, so the slot is live.
            Some(unsafe { self.slots[raw].assume_init_ref() })
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at logical index `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len() {
            let raw = self.raw_index(index);
            // SAFETY: logical index < len, so the slot is live.
            Some(unsafe { self.slots[raw].assume_init_mut() })
        } else {
            None
        }
    }

    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    pub fn back(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.len().checked_sub(1).and_then(move |i| self.get_mut(i))
    }

    // --- End operations ---

    /// Appends `value` at the back.
    ///
    /// If the buffer is full, the element at the *front* (the oldest) is
    /// evicted and returned; the logical window slides forward by one. The
    /// cursors are only updated once the new value is in its slot.
    pub fn push_back(&mut self, value: T) -> Option<T> {
        if self.capacity() == 0 {
            // Zero-capacity degenerate state: the pushed value is its own
            // eviction victim.
            return Some(value);
        }
        if self.is_full() {
            // SAFETY: the buffer is full, so the slot at head is live.
            let evicted = unsafe { self.take_slot(self.head.index) };
            self.slots[self.head.index].write(value);
            self.head = self.step(self.head, 1);
            self.tail = self.step(self.tail, 1);
            Some(evicted)
        } else {
            self.slots[self.tail.index].write(value);
            self.tail = self.step(self.tail, 1);
            None
        }
    }

    /// Prepends `value` at the front.
    ///
    /// If the buffer is full, the element at the *back* (the newest) is
    /// evicted and returned; the logical window slides backward by one.
    pub fn push_front(&mut self, value: T) -> Option<T> {
        if self.capacity() == 0 {
            return Some(value);
        }
        if self.is_full() {
            let new_head = self.step(self.head, -1);
            // SAFETY: full buffer; the slot just before head is the live
            // back element.
            let evicted = unsafe { self.take_slot(new_head.index) };
            self.slots[new_head.index].write(value);
            self.head = new_head;
            self.tail = self.step(self.tail, -1);
            Some(evicted)
        } else {
            self.head = self.step(self.head, -1);
            self.slots[self.head.index].write(value);
            None
        }
    }

    /// Removes and returns the element at the back, or `None` when empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.tail = self.step(self.tail, -1);
        // SAFETY: the buffer was non-empty; the slot just before the old
        // tail is live, and retreating the cursor first marks it dead.
        Some(unsafe { self.take_slot(self.tail.index) })
    }

    /// Removes and returns the element at the front, or `None` when empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: non-empty, so the slot at head is live.
        let value = unsafe { self.take_slot(self.head.index) };
        self.head = self.step(self.head, 1);
        Some(value)
    }

    // --- Relocation engine ---

    /// Inserts `value` before logical index `index`, shifting later elements
    /// toward the back.
    ///
    /// The value is materialized with a push at the back, then swapped one
    /// adjacent position at a time down to `index`; this stays correct across
    /// the wrap boundary without any block-shift special case. If the buffer
    /// was full, the front element is evicted (and returned), and the
    /// insertion point slides down by one with it.
    ///
    /// # Panics
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Option<T> {
        let len = self.len();
        assert!(index <= len, "insert index (is {index}) should be <= len (is {len})");
        let evicted = self.push_back(value);
        let target = if evicted.is_some() {
            index.saturating_sub(1)
        } else {
            index
        };
        self.rotate_tail_into(target, 1);
        evicted
    }

    /// Inserts every element of `iterable` before logical index `index`, in
    /// order.
    ///
    /// When the source holds at least `capacity()` elements, the result is
    /// the final `capacity()` of them in order: everything previously in the
    /// buffer (and every earlier source element) is evicted by the pushes,
    /// and no relocation pass runs.
    ///
    /// # Panics
    /// Panics if `index > len()`.
    pub fn insert_many<I>(&mut self, index: usize, iterable: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let len = self.len();
        assert!(index <= len, "insert index (is {index}) should be <= len (is {len})");
        let mut iter = iterable.into_iter();
        let n = iter.len();
        if n == 0 {
            return;
        }
        let cap = self.capacity();
        if n > cap {
            // Only the final `cap` items can survive; the earlier ones would
            // be evicted by the later pushes anyway.
            for _ in 0..n - cap {
                iter.next();
            }
        }
        let mut evictions = 0usize;
        for value in iter {
            if self.push_back(value).is_some() {
                evictions += 1;
            }
        }
        if n >= cap {
            return;
        }
        // Each eviction consumed one element in front of the insertion
        // point, so the target logical index slides down with it.
        self.rotate_tail_into(index.saturating_sub(evictions), n);
    }

    /// Removes and returns the element at logical index `index`, shifting
    /// later elements toward the front. Returns `None` if out of range.
    ///
    /// The element is swapped one adjacent position at a time up to the back
    /// and then popped.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len() {
            return None;
        }
        self.rotate_into_back(index, 1);
        self.pop_back()
    }

    /// Removes the logical range `[range.start, range.end)`, dropping the
    /// elements.
    ///
    /// # Panics
    /// Panics if the range is out of bounds or inverted.
    pub fn remove_range(&mut self, range: Range<usize>) {
        let len = self.len();
        assert!(
            range.start <= range.end && range.end <= len,
            "remove_range {range:?} out of bounds for len {len}"
        );
        let count = range.end - range.start;
        if count == 0 {
            return;
        }
        self.rotate_into_back(range.start, count);
        for _ in 0..count {
            self.pop_back();
        }
    }

    /// Drops all elements past logical index `len`, keeping capacity.
    pub fn truncate(&mut self, len: usize) {
        while self.len() > len {
            self.pop_back();
        }
    }

    /// Drops every element. Capacity is kept; the cursors return to the
    /// unwrapped origin.
    pub fn clear(&mut self) {
        while self.pop_back().is_some() {}
        self.head = Cursor::zero();
        self.tail = Cursor::zero();
    }

    // --- Reallocation engine ---

    /// Replaces the storage block with one of exactly `n` slots, unless
    /// `n <= len()` (a no-op). Note that `n` below the current capacity
    /// shrinks the buffer.
    ///
    /// Reallocation always unwraps: afterwards the oldest element sits at
    /// raw slot 0 and neither cursor carries parity.
    pub fn reserve(&mut self, n: usize) {
        if n <= self.len() {
            return;
        }
        let new_slots = Self::alloc_slots(n);
        self.move_into(new_slots);
    }

    /// Fallible variant of [`RingDeque::reserve`]; on error the buffer is
    /// untouched.
    pub fn try_reserve(&mut self, n: usize) -> Result<(), CapacityError> {
        if n <= self.len() {
            return Ok(());
        }
        let new_slots = Self::try_alloc_slots(n)?;
        self.move_into(new_slots);
        Ok(())
    }

    /// Reduces capacity to exactly `len()`. No-op when already tight.
    pub fn shrink_to_fit(&mut self) {
        if self.capacity() == self.len() {
            return;
        }
        let new_slots = Self::alloc_slots(self.len());
        self.move_into(new_slots);
    }

    /// Sets both size and capacity to `n`.
    ///
    /// Growing fills the new slots with copies of `value`; shrinking pops
    /// from the back and then releases the spare capacity.
    pub fn resize(&mut self, n: usize, value: T)
    where
        T: Clone,
    {
        let len = self.len();
        if n == len {
            return;
        }
        if n > len {
            self.reserve(n);
            while !self.is_full() {
                self.push_back(value.clone());
            }
        } else {
            self.truncate(n);
            self.shrink_to_fit();
        }
    }

    /// Rearranges the storage so the whole content is one contiguous slice,
    /// and returns it. Capacity is unchanged; a wrapped buffer is rebuilt
    /// through the reallocation engine.
    pub fn make_contiguous(&mut self) -> &mut [T] {
        let len = self.len();
        let cap = self.capacity();
        if self.head.index + len > cap {
            let new_slots = Self::alloc_slots(cap);
            self.move_into(new_slots);
        }
        let start = self.head.index;
        // SAFETY: [start, start + len) is exactly the live range and is
        // contiguous after the unwrap above.
        unsafe { assume_init_slice_mut(&mut self.slots[start..start + len]) }
    }

    /// Replaces contents and capacity with `n` copies of `value`.
    ///
    /// # Panics
    /// Panics if `n` is zero.
    pub fn assign_fill(&mut self, n: usize, value: T)
    where
        T: Clone,
    {
        assert!(n > 0, "cannot assign a capacity of zero");
        *self = Self::with_fill(n, value);
    }

    /// Replaces contents and capacity with the elements of `iterable`; the
    /// new capacity is the source length.
    ///
    /// # Panics
    /// Panics if the source is empty.
    pub fn assign_iter<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = iterable.into_iter();
        assert!(iter.len() > 0, "cannot assign a capacity of zero");
        let mut out = Self::with_capacity(iter.len());
        for value in iter {
            out.push_back(value);
        }
        *self = out;
    }

    // --- Slices & iteration ---

    /// Returns the contents as at most two contiguous slices in logical
    /// order. The second slice is empty unless the buffer is wrapped.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let len = self.len();
        let cap = self.capacity();
        let start = self.head.index;
        if start + len <= cap {
            // SAFETY: [start, start + len) is the live range.
            (unsafe { assume_init_slice(&self.slots[start..start + len]) }, &[])
        } else {
            let wrap = start + len - cap;
            // SAFETY: the live range is [start, cap) followed by [0, wrap).
            unsafe {
                (
                    assume_init_slice(&self.slots[start..cap]),
                    assume_init_slice(&self.slots[..wrap]),
                )
            }
        }
    }

    /// Mutable variant of [`RingDeque::as_slices`].
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let len = self.len();
        let cap = self.capacity();
        let start = self.head.index;
        if start + len <= cap {
            let live = &mut self.slots[start..start + len];
            // SAFETY: [start, start + len) is the live range.
            (unsafe { assume_init_slice_mut(live) }, &mut [])
        } else {
            let wrap = start + len - cap;
            let (low, high) = self.slots.split_at_mut(start);
            // SAFETY: the live range is [start, cap) followed by [0, wrap).
            unsafe {
                (
                    assume_init_slice_mut(high),
                    assume_init_slice_mut(&mut low[..wrap]),
                )
            }
        }
    }

    /// Copies the logical range `[range.start, range.end)` into the front of
    /// `dest`, flattening any wrap into at most two `copy_from_slice` calls.
    ///
    /// # Panics
    /// Panics if the range is out of bounds or `dest` is too short.
    pub fn copy_range_to_slice(&self, range: Range<usize>, dest: &mut [T])
    where
        T: Copy,
    {
        let len = self.len();
        assert!(
            range.start <= range.end && range.end <= len,
            "copy range {range:?} out of bounds for len {len}"
        );
        let count = range.end - range.start;
        assert!(
            dest.len() >= count,
            "destination holds {} elements but {count} are being copied",
            dest.len()
        );
        let (a, b) = self.as_slices();
        if range.start < a.len() {
            let a_end = range.end.min(a.len());
            let first = a_end - range.start;
            dest[..first].copy_from_slice(&a[range.start..a_end]);
            if range.end > a.len() {
                dest[first..count].copy_from_slice(&b[..range.end - a.len()]);
            }
        } else {
            dest[..count].copy_from_slice(&b[range.start - a.len()..range.end - a.len()]);
        }
    }

    /// Copies the entire logical contents into the front of `dest`.
    pub fn copy_to_slice(&self, dest: &mut [T])
    where
        T: Copy,
    {
        self.copy_range_to_slice(0..self.len(), dest);
    }

    /// Front-to-back iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots, self.head, self.tail)
    }

    /// Front-to-back iterator of mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.slots, self.head, self.tail)
    }

    // --- Internals ---

    #[inline]
    fn step(&self, cursor: Cursor, n: isize) -> Cursor {
        cursor.advance(self.capacity(), n)
    }

    /// Raw slot index of the element at logical index `index`.
    #[inline]
    fn raw_index(&self, index: usize) -> usize {
        debug_assert!(index <= self.capacity());
        self.head.advance(self.capacity(), index as isize).index
    }

    /// Reads the value out of a slot, leaving it logically dead.
    ///
    /// # Safety
    /// The slot at `raw` must be live, and the caller must move the cursors
    /// (or overwrite the slot) so it is never read again.
    #[inline]
    unsafe fn take_slot(&mut self, raw: usize) -> T {
        self.slots[raw].as_ptr().read()
    }

    /// Swaps the elements at two logical indices by swapping whole slots.
    /// Both slots stay live throughout, so the ring invariants hold at every
    /// step of a relocation pass.
    fn swap_slots(&mut self, a: usize, b: usize) {
        let ra = self.raw_index(a);
        let rb = self.raw_index(b);
        self.slots.swap(ra, rb);
    }

    /// Moves the run of `n` freshly pushed elements from the back down to
    /// logical index `target`, one adjacent swap at a time, `n` passes.
    fn rotate_tail_into(&mut self, target: usize, n: usize) {
        let len = self.len();
        if n == 0 || len == 0 || target + n >= len {
            // Insertion at the tail: the pushed run already sits where it
            // belongs.
            return;
        }
        for _ in 0..n {
            let mut j = len - 1;
            while j > target {
                self.swap_slots(j, j - 1);
                j -= 1;
            }
        }
    }

    /// Moves the run of `n` elements starting at logical index `start` to
    /// the back, one adjacent swap at a time, `n` passes.
    fn rotate_into_back(&mut self, start: usize, n: usize) {
        let len = self.len();
        if n == 0 || start + n >= len {
            // The run already ends at the tail.
            return;
        }
        for _ in 0..n {
            let mut j = start;
            while j + 1 < len {
                self.swap_slots(j, j + 1);
                j += 1;
            }
        }
    }

    /// Moves every element, oldest first, into `new_slots` starting at raw
    /// slot 0, then adopts the block. The source shrinks as the destination
    /// grows, so the buffer is internally consistent at every step.
    fn move_into(&mut self, mut new_slots: Box<[MaybeUninit<T>]>) {
        let mut count = 0;
        while let Some(value) = self.pop_front() {
            new_slots[count].write(value);
            count += 1;
        }
        self.slots = new_slots;
        self.head = Cursor::zero();
        self.tail = Cursor::zero().advance(self.capacity(), count as isize);
    }
}

/// # Safety
/// Every element of `slice` must be initialized.
unsafe fn assume_init_slice<T>(slice: &[MaybeUninit<T>]) -> &[T] {
    &*(slice as *const [MaybeUninit<T>] as *const [T])
}

/// # Safety
/// Every element of `slice` must be initialized.
unsafe fn assume_init_slice_mut<T>(slice: &mut [MaybeUninit<T>]) -> &mut [T] {
    &mut *(slice as *mut [MaybeUninit<T>] as *mut [T])
}

// --- Traits ---

impl<T> Drop for RingDeque<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// The empty, zero-capacity buffer; also the state a moved-from buffer is
/// left in by `std::mem::take`.
impl<T> Default for RingDeque<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new().into_boxed_slice(),
            head: Cursor::zero(),
            tail: Cursor::zero(),
        }
    }
}

impl<T: Clone> Clone for RingDeque<T> {
    fn clone(&self) -> Self {
        let mut out = Self {
            slots: Self::alloc_slots(self.capacity()),
            head: Cursor::zero(),
            tail: Cursor::zero(),
        };
        for value in self.iter() {
            out.push_back(value.clone());
        }
        out
    }
}

impl<T: fmt::Debug> fmt::Debug for RingDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for RingDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for RingDeque<T> {}

impl<T> Index<usize> for RingDeque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!(
                "index out of bounds: the len is {} but the index is {index}",
                self.len()
            ),
        }
    }
}

impl<T> IndexMut<usize> for RingDeque<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("index out of bounds: the len is {len} but the index is {index}"),
        }
    }
}

/// Pushes each item at the back; a full buffer keeps evicting from the front.
impl<T> Extend<T> for RingDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

/// Capacity is the source length; an empty source yields the zero-capacity
/// default.
impl<T> From<Vec<T>> for RingDeque<T> {
    fn from(vec: Vec<T>) -> Self {
        if vec.is_empty() {
            return Self::default();
        }
        let mut out = Self::with_capacity(vec.len());
        out.extend(vec);
        out
    }
}

impl<T> FromIterator<T> for RingDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> IntoIterator for RingDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a RingDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingDeque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// --- Tests ---
