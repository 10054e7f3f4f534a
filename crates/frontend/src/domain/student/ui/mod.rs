pub mod details;
pub mod list;

pub use details::StudentDetails;
pub use list::StudentList;
