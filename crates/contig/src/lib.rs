//! Contiguous growable storage built directly on raw, uninitialized memory.
//!
//! This crate implements a generic dynamic array from first principles,
//! keeping "memory that exists" and "values that are alive" strictly
//! separate. This crate contains `unsafe` code; every unsafe block
//! carries a `// SAFETY:` comment.
//!
//! # Architecture
//!
//! ```text
//! ContigVec<T> (value lifecycle: construct, destroy, relocate + live count)
//! └── RawStorage<T> (block lifecycle: allocate, release + slot addresses)
//! ```
//!
//! [`RawStorage`] owns an uninitialized block sized for `capacity` values
//! and knows nothing about which slots hold live values. [`ContigVec`]
//! owns exactly one block plus a live-element count, and is the only
//! place a `T` is ever constructed or destroyed.
//!
//! # Growth protocol
//!
//! Every operation that outgrows the current block follows the same
//! commit-or-abandon sequence:
//!
//! 1. Allocate a new block (the old state is untouched; a failed
//!    allocation returns here with the container unmodified).
//! 2. Construct any new value directly into the new block.
//! 3. Relocate the live elements bitwise (relocation cannot fail).
//! 4. Swap blocks; the old one is released without running destructors,
//!    because its values now live in the new block.
//!
//! The container is never observably in an intermediate state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod iter;
pub mod raw;
pub mod vec;

// Public re-exports for the primary API surface.
pub use error::AllocError;
pub use iter::IntoIter;
pub use raw::RawStorage;
pub use vec::ContigVec;
