//! A growable array container with explicit capacity control.
//!
//! [`DynArray`] owns a contiguous heap buffer and keeps the allocated slot
//! count part of the public contract: growth follows a fixed doubling
//! policy (minimum step 2), shrinking happens only on request, and every
//! bounds violation surfaces as a recoverable [`ArrayError`] instead of a
//! silent out-of-range read.
//!
//! # Architecture
//!
//! ```text
//! DynArray<T> (sole owner of the buffer)
//! ├── Vec<T> backing storage + explicit capacity field
//! ├── ArrayError (OutOfRange / Empty / InvalidPosition)
//! ├── Cursor<'_, T>        (random access: peek, seek, ordering, distance)
//! ├── ForwardCursor<'_, T> (single-step advance, equality only)
//! └── IterMut<'_, T>       (mutable forward traversal)
//! ```
//!
//! Cursors borrow the array, so holding one across a mutation is rejected
//! at compile time; re-acquire cursors after mutating.
//!
//! # Quick start
//!
//! ```rust
//! use dynarr::DynArray;
//!
//! let mut arr: DynArray<i32> = DynArray::new();
//! arr.push(7);
//! arr.push(8);
//! arr.push(9);
//! arr.insert(1, 42)?;
//! assert_eq!(arr.len(), 4);
//! assert_eq!(arr.capacity(), 4);
//! assert_eq!(arr.remove(1)?, 42);
//! assert_eq!(arr.find(&8).unwrap().position(), 1);
//! assert_eq!(format!("{arr}"), "{ 7, 8, 9 }");
//! # Ok::<(), dynarr::ArrayError>(())
//! ```
//!
//! Single-threaded by design: every mutating operation takes `&mut self`
//! and there is no internal locking. Callers needing shared access across
//! threads must synchronize externally.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod cursor;
pub mod error;
mod search;

pub use array::DynArray;
pub use cursor::{Cursor, ForwardCursor, IterMut};
pub use error::ArrayError;
