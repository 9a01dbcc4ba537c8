pub mod browse;
pub mod catalog;
pub mod layout;
pub mod show;
