pub mod course_record;
pub mod error;
pub mod palette;
pub mod roster;

pub use course_record::{Availability, Catalog, CourseRecord};
pub use roster::{Roster, RosterEntry};
