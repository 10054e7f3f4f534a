pub mod details;
pub mod list;

pub use details::StudyMaterialDetails;
pub use list::StudyMaterialList;
