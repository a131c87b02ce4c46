pub mod course_picker;
pub mod student_fields;
pub mod registration;
pub mod roster;
