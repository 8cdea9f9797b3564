//! UI widget constructors

pub mod builder;
pub mod conditional;
pub mod grid;
pub mod leaf;
pub mod stack;

pub use builder::*;
pub use conditional::*;
pub use grid::*;
pub use leaf::*;
pub use stack::*;
