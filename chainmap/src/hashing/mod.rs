//! Byte-wise string hashing strategies with precisely pinned arithmetic.
//!
//! Each strategy is exposed both as a free function over raw bytes and as a zero-sized
//! type implementing [`chainmap_core::HashStrategy`] for any key that can be viewed as
//! bytes. The arithmetic of every strategy is fully defined (wrapping or Euclidean, never
//! platform-dependent) so collision counts are reproducible bit-for-bit across builds.
pub mod djb2;
pub use djb2::Djb2;
pub mod polynomial;
pub use polynomial::Polynomial;
pub mod shift_xor;
pub use shift_xor::ShiftXor;
