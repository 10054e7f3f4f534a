pub mod details;
pub mod list;

pub use details::VideoClassDetails;
pub use list::VideoClassList;
