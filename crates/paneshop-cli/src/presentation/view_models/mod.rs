pub mod catalog;
pub mod common;
pub mod layout;
pub mod product;
pub mod result;

pub use catalog::{CatalogEntryViewModel, CatalogViewModel};
pub use common::Guidance;
pub use layout::LayoutViewModel;
pub use product::ProductViewModel;
pub use result::CommandResultViewModel;
