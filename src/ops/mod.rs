pub mod engine;
pub mod menu;
pub mod store;

pub use engine::*;
pub use menu::*;
pub use store::*;
