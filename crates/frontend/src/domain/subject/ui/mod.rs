pub mod details;
pub mod list;

pub use details::SubjectDetails;
pub use list::SubjectList;
