pub mod core;
pub use core::*;
pub mod error;
pub use error::*;
