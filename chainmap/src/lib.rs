pub mod core {
    pub use chainmap_core::*;
}
pub mod chain;
pub mod hashing;
