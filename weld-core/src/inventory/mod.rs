//! Item containers and the crafting-remainder correction.

mod container;
pub mod crafting;
mod simple_container;

pub use container::Container;
pub use simple_container::SimpleContainer;
