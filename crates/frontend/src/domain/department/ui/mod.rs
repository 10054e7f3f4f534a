pub mod details;
pub mod list;

pub use details::DepartmentDetails;
pub use list::DepartmentList;
