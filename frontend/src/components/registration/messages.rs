use common::api::ApiError;
use common::model::category::CategoryFilter;
use common::model::course::Course;
use common::model::CourseId;
use common::validation::FormField;

pub enum Msg {
    CoursesLoaded(Result<Vec<Course>, ApiError>),
    SetField(FormField, String),
    ToggleCourse(CourseId),
    SetSearch(String),
    SetCategory(CategoryFilter),
    Submit,
    SubmitFinished(Result<(), ApiError>),
    Clear,
}
