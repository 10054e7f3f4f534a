pub mod details;
pub mod list;

pub use details::EmployeeDetails;
pub use list::EmployeeList;
