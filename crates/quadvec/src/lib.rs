//! A growable contiguous container with quadrupling growth and
//! fallible allocation.
//!
//! [`QuadVec<T>`] is a dynamic array: contiguous storage, amortized
//! constant-time append, random-access indexing, and the full sequence
//! operation set (insert, erase, resize, assign). It differs from
//! `std::vec::Vec` in two deliberate ways:
//!
//! - **Every capacity-growing operation is fallible.** Allocation
//!   failure and layout overflow surface as [`VecError`] values
//!   rather than aborting the process, and always leave the container
//!   unchanged. Trait-surface operations that cannot return `Result`
//!   (`Clone`, `Extend`, `FromIterator`, the [`quadvec!`] macro) panic
//!   on allocation failure and say so in their docs.
//! - **Growth quadruples.** Exhausted capacity grows by a factor of
//!   four (first allocation: 4 slots), trading peak memory for fewer
//!   relocations on append-heavy workloads. [`QuadVec::reserve`] and
//!   [`QuadVec::shrink_to_fit`] remain exact.
//!
//! # Architecture
//!
//! ```text
//! QuadVec<T> (length + growth policy + range-mutation algorithms)
//! ├── RawBuffer<T> (owned allocation: pointer + capacity, fallible grow)
//! ├── IntoIter<T> (owned iteration, drops the unconsumed tail)
//! └── dump (diagnostic collaborator, writes to any io::Write sink)
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use quadvec::{quadvec, QuadVec};
//!
//! let mut v = QuadVec::new();
//! v.push("a")?;
//! v.push("c")?;
//! v.insert(1, "b")?;
//! assert_eq!(v, ["a", "b", "c"]);
//!
//! let squares: QuadVec<i32> = (1..4).map(|x| x * x).collect();
//! assert_eq!(squares, [1, 4, 9]);
//!
//! let sevens = quadvec![7; 3];
//! assert_eq!(sevens, [7, 7, 7]);
//! # Ok::<(), quadvec::VecError>(())
//! ```
//!
//! # Safety
//!
//! `unsafe` is confined to the `raw`, `vec`, and `iter` modules, and
//! every block carries a `SAFETY` comment. Iterator invalidation is
//! enforced statically: mutating operations take `&mut self`, so a
//! live borrow makes the call a compile error instead of a dangling
//! position.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod dump;
pub mod error;
pub mod iter;
mod raw;
pub mod vec;

// Public re-exports for the primary API surface.
pub use dump::dump;
pub use error::VecError;
pub use iter::IntoIter;
pub use vec::QuadVec;

/// Create a [`QuadVec`] from a list of elements or a `value; count`
/// repetition, mirroring `vec!`.
///
/// # Panics
///
/// Panics on allocation failure; use the fallible constructors
/// ([`QuadVec::from_slice`], [`QuadVec::from_elem`]) when failure must
/// be handled.
///
/// # Examples
///
/// ```
/// use quadvec::quadvec;
///
/// let a = quadvec![1, 2, 3];
/// assert_eq!(a, [1, 2, 3]);
///
/// let b = quadvec![0u8; 4];
/// assert_eq!(b, [0, 0, 0, 0]);
///
/// let empty: quadvec::QuadVec<i32> = quadvec![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! quadvec {
    () => {
        $crate::QuadVec::new()
    };
    ($value:expr; $count:expr) => {
        $crate::QuadVec::from_elem($count, $value).expect("allocation failed")
    };
    ($($value:expr),+ $(,)?) => {
        $crate::QuadVec::from([$($value),+])
    };
}
