pub mod catalog;
pub mod view;
