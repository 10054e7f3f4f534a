pub mod branch;
pub mod course;
pub mod department;
pub mod employee;
pub mod program;
pub mod student;
pub mod study_material;
pub mod subject;
pub mod syllabus;
pub mod video_class;
