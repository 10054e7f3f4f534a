pub mod details;
pub mod list;

pub use details::SyllabusDetails;
pub use list::SyllabusList;
