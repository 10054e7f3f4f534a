pub mod details;
pub mod list;

pub use details::BranchDetails;
pub use list::BranchList;
