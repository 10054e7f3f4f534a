pub mod details;
pub mod list;

pub use details::CourseDetails;
pub use list::CourseList;
