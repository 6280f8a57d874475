pub mod block;
pub mod catalog;

pub use block::*;
pub use catalog::*;
