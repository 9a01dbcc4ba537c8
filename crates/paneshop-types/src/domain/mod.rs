pub mod catalog;
pub mod orientation;
pub mod product;

pub use catalog::*;
pub use orientation::*;
pub use product::*;
