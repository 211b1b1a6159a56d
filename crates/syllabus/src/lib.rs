pub mod anchors;
pub mod catalog;
pub mod extract;
pub mod segment;
pub mod source;
pub mod util;

pub use catalog::{CatalogOptions, build_catalog, build_catalog_from_pages};
pub use extract::extract;
pub use segment::segment;
