use common::api::ApiError;
use common::model::category::CategoryFilter;
use common::model::course::Course;
use common::model::student::StudentDetail;
use common::model::{CourseId, StudentId};
use common::validation::FormField;

pub enum Msg {
    ToggleRow(StudentId),
    /// Detail reply, tagged with the cache generation it was requested under.
    DetailLoaded(StudentId, u64, Result<StudentDetail, ApiError>),

    OpenEdit(StudentId),
    SetEditField(FormField, String),
    SubmitEdit,
    EditFinished(StudentId, Result<(), ApiError>),
    CloseEdit,

    Delete(StudentId),
    DeleteFinished(StudentId, Result<(), ApiError>),

    OpenAddCourses(StudentId),
    CoursesLoaded(StudentId, Result<Vec<Course>, ApiError>),
    ToggleCourse(CourseId),
    SetSearch(String),
    SetCategory(CategoryFilter),
    SubmitAddCourses,
    AddCoursesFinished(StudentId, Result<(), ApiError>),
    CloseAddCourses,

    RemoveCourse(StudentId, CourseId),
    RemoveCourseFinished(StudentId, Result<(), ApiError>),
}
