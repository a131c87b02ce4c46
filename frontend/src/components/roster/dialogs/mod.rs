mod add_courses;
mod edit;

pub use add_courses::add_courses_sheet;
pub use edit::edit_sheet;
