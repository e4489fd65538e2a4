#![allow(dead_code)]
#![allow(unused_imports)]

pub mod generate;
pub use generate::*;

pub mod survey;
pub use survey::*;

pub mod stat;
pub use stat::*;

pub mod strategy;
pub use strategy::*;
