pub mod category;
pub mod course;
pub mod student;

/// Backend identifier of a student (`StudentID`).
pub type StudentId = i64;

/// Backend identifier of a course (`CourseID`).
pub type CourseId = i64;
