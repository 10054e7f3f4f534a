pub mod details;
pub mod list;

pub use details::ProgramDetails;
pub use list::ProgramList;
