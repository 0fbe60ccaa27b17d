pub mod course;

pub use course::{CourseShell, CourseStatus, SisCourse};
