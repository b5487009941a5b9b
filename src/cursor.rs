/// A position inside the storage block: a raw slot index plus a parity bit.
///
/// The parity bit flips every time the index is pushed past either end of the
/// block. Two cursors with the same index and the same parity denote the same
/// logical position; the same index with *opposite* parity means one cursor is
/// a full lap ahead of the other. That single bit is what lets the container
/// tell a full buffer apart from an empty one without a separate length field:
/// `head == tail` with equal parity is empty, with unequal parity is full.
///
/// A cursor does not know the capacity it wraps at; every operation takes it
/// as a parameter so the type stays `Copy` and trivially comparable.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub(crate) struct Cursor {
    pub(crate) index: usize,
    pub(crate) parity: bool,
}

impl Cursor {
    /// Cursor at raw slot 0 with parity false (the unwrapped origin).
    pub(crate) const fn zero() -> Self {
        Cursor {
            index: 0,
            parity: false,
        }
    }

    /// Moves the cursor by `n` slots (either direction), wrapping modulo
    /// `cap` and flipping parity exactly once per boundary crossing.
    ///
    /// Callers never pass `|n| > cap`; a single lap correction is all the
    /// container ever needs, and the arithmetic relies on it.
    pub(crate) fn advance(self, cap: usize, n: isize) -> Self {
        debug_assert!(n.unsigned_abs() <= cap, "cursor moved more than one lap");
        if cap == 0 {
            // Degenerate zero-capacity buffer; the only valid position is 0.
            return self;
        }
        let cap = cap as isize;
        let i = self.index as isize + n;
        if i >= cap {
            Cursor {
                index: (i - cap) as usize,
                parity: !self.parity,
            }
        } else if i < 0 {
            Cursor {
                index: (i + cap) as usize,
                parity: !self.parity,
            }
        } else {
            Cursor {
                index: i as usize,
                parity: self.parity,
            }
        }
    }

    /// Signed logical distance from `self` to `other`; its sign is also the
    /// logical ordering of the two cursors.
    ///
    /// With equal parity the cursors are on the same lap and the distance is
    /// the plain index difference. With opposite parity, `other` has wrapped
    /// past the end of the block relative to `self`, so the distance is the
    /// capacity minus the backwards index gap. Note the sense of the raw
    /// index comparison inverts across the wrap: a numerically smaller index
    /// on the far side is logically *later*.
    pub(crate) fn distance_to(self, other: Cursor, cap: usize) -> isize {
        if self.parity == other.parity {
            other.index as isize - self.index as isize
        } else {
            cap as isize - (self.index as isize - other.index as isize)
        }
    }
}
