//! # Ring Collections
//!
//! A fixed-capacity circular deque backed by one contiguous heap allocation,
//! with overwrite-oldest eviction when full.
//!
//! This crate provides [`RingDeque`], a double-ended queue whose capacity is
//! chosen at construction and never grows behind your back. Pushing into a
//! full buffer evicts the element at the opposite end and hands it back, so
//! the buffer always holds the most recent `capacity()` elements: the
//! primitive beneath sliding windows, audit rings and bounded work queues.
//!
//! ## Key Features
//!
//! * **O(1) end operations:** `push_back`, `push_front`, `pop_back` and
//!   `pop_front` never allocate, never shift elements, and report evictions
//!   through their return value.
//! * **Random access:** elements are addressable by logical index in O(1)
//!   (`get`, `get_mut`, `Index`), and iterators step in both directions with
//!   exact `len`/`nth` arithmetic across the wrap boundary.
//! * **Full vs empty without a length field:** head and tail cursors carry a
//!   parity bit that flips once per lap, so the two states are distinguished
//!   by the cursors alone.
//! * **Mid-buffer editing:** `insert`, `insert_many`, `remove` and
//!   `remove_range` relocate elements with adjacent swaps, correct across the
//!   wrap with no special cases.
//! * **Explicit capacity control:** `reserve`, `try_reserve`, `resize`,
//!   `shrink_to_fit` and `make_contiguous` replace the storage block and
//!   always leave the contents unwrapped from slot 0.
//! * **Interoperability:** the [`AnyDeque`] trait abstracts over `RingDeque`
//!   and `std::collections::VecDeque`, so either can back the same code.
//!
//! ## Examples
//!
//! ### A sliding window of the latest samples
//!
//! ```rust
//! use ring_collections::RingDeque;
//!
//! let mut window: RingDeque<i32> = RingDeque::with_capacity(4);
//! for sample in 1..=6 {
//!     window.push_back(sample);
//! }
//!
//! // Only the last four pushes survive, in order.
//! assert_eq!(window.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5, 6]);
//! assert_eq!(window[0], 3);
//! ```
//!
//! ### Evictions are returned, not dropped
//!
//! ```rust
//! use ring_collections::RingDeque;
//!
//! let mut recent: RingDeque<&str> = RingDeque::with_capacity(2);
//! assert_eq!(recent.push_back("a"), None);
//! assert_eq!(recent.push_back("b"), None);
//! assert_eq!(recent.push_back("c"), Some("a"));
//! ```
//!
//! ### Growing and flattening
//!
//! ```rust
//! use ring_collections::RingDeque;
//!
//! let mut ring: RingDeque<u8> = RingDeque::with_capacity(3);
//! for byte in [1, 2, 3, 4] {
//!     ring.push_back(byte); // wraps; holds [2, 3, 4]
//! }
//!
//! ring.reserve(6); // reallocates and unwraps
//! assert_eq!(ring.as_slices().0, &[2, 3, 4]);
//! assert_eq!(ring.capacity(), 6);
//! ```

// --- Module Declarations ---

mod cursor;
pub mod error;
pub mod iter;
pub mod ring_deque;

// --- Re-exports ---

pub use error::CapacityError;
pub use iter::{IntoIter, Iter, IterMut};
pub use ring_deque::{AnyDeque, RingDeque};
