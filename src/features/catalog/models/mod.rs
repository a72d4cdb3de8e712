pub mod course;
pub mod instructor;

pub use course::{Category, Course, Subcategory};
pub use instructor::Instructor;
