//! The implementation of a hash table with separate-chaining collision resolution
//! [(Knuth, 1998)].
//!
//! [(Knuth, 1998)]: https://dl.acm.org/doi/10.5555/280635
mod core;
pub use core::*;
mod ctors;
mod hash_map;
