use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem::MaybeUninit;

use crate::cursor::Cursor;
use crate::ring_deque::RingDeque;

/// Immutable front-to-back iterator over a [`RingDeque`].
///
/// Position and distance arithmetic go through the cursor type, so stepping,
/// `nth` and `len` are all exact across the wrap boundary.
pub struct Iter<'a, T> {
    slots: &'a [MaybeUninit<T>],
    pos: Cursor,
    end: Cursor,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [MaybeUninit<T>], pos: Cursor, end: Cursor) -> Self {
        Iter { slots, pos, end }
    }

    fn remaining(&self) -> usize {
        self.pos.distance_to(self.end, self.slots.len()) as usize
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.pos == self.end {
            return None;
        }
        // SAFETY: pos is inside the live range [pos, end).
        let value = unsafe { self.slots[self.pos.index].assume_init_ref() };
        self.pos = self.pos.advance(self.slots.len(), 1);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }

    fn nth(&mut self, n: usize) -> Option<&'a T> {
        if n >= self.remaining() {
            self.pos = self.end;
            return None;
        }
        self.pos = self.pos.advance(self.slots.len(), n as isize);
        self.next()
    }

    fn count(self) -> usize {
        self.remaining()
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.pos == self.end {
            return None;
        }
        self.end = self.end.advance(self.slots.len(), -1);
        // SAFETY: end just retreated onto the last live slot of [pos, end).
        Some(unsafe { self.slots[self.end.index].assume_init_ref() })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

// Manual impl: cloning the iterator must not require T: Clone.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            slots: self.slots,
            pos: self.pos,
            end: self.end,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Mutable front-to-back iterator over a [`RingDeque`].
pub struct IterMut<'a, T> {
    slots: *mut MaybeUninit<T>,
    cap: usize,
    pos: Cursor,
    end: Cursor,
    _marker: PhantomData<&'a mut T>,
}

// The raw pointer is only ever used to hand out disjoint &mut T for the
// iterator's lifetime, same aliasing story as a slice IterMut.
unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(slots: &'a mut [MaybeUninit<T>], pos: Cursor, end: Cursor) -> Self {
        IterMut {
            cap: slots.len(),
            slots: slots.as_mut_ptr(),
            pos,
            end,
            _marker: PhantomData,
        }
    }

    fn remaining(&self) -> usize {
        self.pos.distance_to(self.end, self.cap) as usize
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.pos == self.end {
            return None;
        }
        // SAFETY: pos is inside the live range [pos, end), and each slot is
        // yielded at most once, so the &mut references never alias.
        let value = unsafe { &mut *(*self.slots.add(self.pos.index)).as_mut_ptr() };
        self.pos = self.pos.advance(self.cap, 1);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }

    fn nth(&mut self, n: usize) -> Option<&'a mut T> {
        if n >= self.remaining() {
            self.pos = self.end;
            return None;
        }
        self.pos = self.pos.advance(self.cap, n as isize);
        self.next()
    }

    fn last(mut self) -> Option<&'a mut T> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.pos == self.end {
            return None;
        }
        self.end = self.end.advance(self.cap, -1);
        // SAFETY: end just retreated onto the last live slot, which has not
        // been yielded from either direction.
        Some(unsafe { &mut *(*self.slots.add(self.end.index)).as_mut_ptr() })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.remaining()
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator: drains the buffer front to back, dropping whatever the
/// caller does not consume.
pub struct IntoIter<T> {
    ring: RingDeque<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(ring: RingDeque<T>) -> Self {
        IntoIter { ring }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.ring.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.ring.len();
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.ring.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.ring.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.ring).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapped_ring() -> RingDeque<i32> {
        // Capacity 4 holding [3, 4, 5, 6] split across the wrap boundary.
        let mut r = RingDeque::with_capacity(4);
        for v in [1, 2, 3, 4, 5, 6] {
            r.push_back(v);
        }
        r
    }

    #[test]
    fn test_iter_forward_across_wrap() {
        let r = wrapped_ring();
        assert_eq!(r.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_iter_backward_across_wrap() {
        let r = wrapped_ring();
        assert_eq!(r.iter().rev().copied().collect::<Vec<_>>(), vec![6, 5, 4, 3]);
    }

    #[test]
    fn test_iter_meet_in_the_middle() {
        let r = wrapped_ring();
        let mut it = r.iter();
        assert_eq!(it.next(), Some(&3));
        assert_eq!(it.next_back(), Some(&6));
        assert_eq!(it.len(), 2);
        assert_eq!(it.next(), Some(&4));
        assert_eq!(it.next_back(), Some(&5));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None); // fused
    }

    #[test]
    fn test_iter_exact_size_and_nth() {
        let r = wrapped_ring();
        assert_eq!(r.iter().len(), 4);
        assert_eq!(r.iter().count(), 4);
        assert_eq!(r.iter().last(), Some(&6));

        let mut it = r.iter();
        // nth(2) jumps over the wrap in one cursor advance.
        assert_eq!(it.nth(2), Some(&5));
        assert_eq!(it.len(), 1);
        assert_eq!(it.nth(5), None);
        assert_eq!(it.len(), 0);
    }

    #[test]
    fn test_iter_clone_is_independent() {
        let r = wrapped_ring();
        let mut a = r.iter();
        a.next();
        let mut b = a.clone();
        assert_eq!(a.next(), b.next());
        assert_eq!(format!("{b:?}"), "[5, 6]");
    }

    #[test]
    fn test_iter_mut_mutation_across_wrap() {
        let mut r = wrapped_ring();
        for v in r.iter_mut() {
            *v *= 10;
        }
        assert_eq!(r.iter().copied().collect::<Vec<_>>(), vec![30, 40, 50, 60]);

        let last = r.iter_mut().next_back().unwrap();
        *last = 0;
        assert_eq!(r.back(), Some(&0));
    }

    #[test]
    fn test_into_iter_drains_front_to_back() {
        let r = wrapped_ring();
        assert_eq!(r.into_iter().collect::<Vec<_>>(), vec![3, 4, 5, 6]);

        let r = wrapped_ring();
        let mut it = r.into_iter();
        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some(3));
        assert_eq!(it.next_back(), Some(6));
        assert_eq!(it.len(), 2);
        // Dropping the iterator drops the unconsumed middle.
    }

    #[test]
    fn test_iter_empty_ring() {
        let r: RingDeque<i32> = RingDeque::with_capacity(3);
        assert_eq!(r.iter().next(), None);
        assert_eq!(r.iter().len(), 0);

        let z: RingDeque<i32> = RingDeque::default();
        assert_eq!(z.iter().next(), None);
    }

    #[test]
    fn test_iter_full_ring_covers_every_slot() {
        // Full buffer: pos and end share a raw index with opposite parity,
        // which must read as capacity remaining, not zero.
        let mut r: RingDeque<i32> = RingDeque::with_capacity(3);
        r.extend([1, 2, 3]);
        assert!(r.is_full());
        assert_eq!(r.iter().len(), 3);
        assert_eq!(r.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
