//! Registration form state: personal fields, course catalog and selection.

use crate::api::{ApiCall, ApiError};
use crate::filter::CourseFilter;
use crate::model::category::CategoryFilter;
use crate::model::course::Course;
use crate::model::CourseId;
use crate::validation::{FormField, StudentForm};

use super::{CourseSelection, Effect};

const NO_COURSES: &str = "No courses available in the database.";
const COURSES_FAILED: &str = "Failed to load courses. Please check your connection.";
const REGISTER_FAILED: &str = "Failed to register student. Please try again.";
const REGISTERED: &str = "Student registered successfully!";

#[derive(Debug, Default)]
pub struct RegistrationState {
    pub form: StudentForm,
    /// Full catalog, fetched once when the form mounts.
    pub courses: Vec<Course>,
    pub courses_loading: bool,
    pub filter: CourseFilter,
    pub selection: CourseSelection,
    pub submitting: bool,
    /// Inline message shown above the form.
    pub error: Option<String>,
}

impl RegistrationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self) -> Vec<Effect> {
        self.courses_loading = true;
        self.error = None;
        vec![Effect::Call(ApiCall::ListCourses)]
    }

    pub fn courses_loaded(&mut self, result: Result<Vec<Course>, ApiError>) {
        self.courses_loading = false;
        match result {
            Ok(courses) => {
                if courses.is_empty() {
                    self.error = Some(NO_COURSES.to_string());
                }
                self.courses = courses;
            }
            Err(err) => {
                self.error = Some(err.user_message(COURSES_FAILED));
                self.courses.clear();
            }
        }
    }

    /// Catalog entries passing the current search and category filter.
    pub fn visible_courses(&self) -> Vec<&Course> {
        self.filter.apply(&self.courses)
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        self.form.set(field, value);
        self.error = None;
    }

    pub fn toggle_course(&mut self, id: CourseId) {
        self.selection.toggle(id);
    }

    pub fn set_search(&mut self, search: String) {
        self.filter.search = search;
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
    }

    /// Validates and, when the form is complete, issues the create request.
    pub fn submit(&mut self) -> Vec<Effect> {
        self.error = None;
        if let Err(err) = self.form.validate() {
            self.error = Some(err.to_string());
            return Vec::new();
        }
        self.submitting = true;
        let request = self.form.to_create_request(self.selection.ids().to_vec());
        vec![Effect::Call(ApiCall::CreateStudent(request))]
    }

    pub fn submit_finished(&mut self, result: Result<(), ApiError>) -> Vec<Effect> {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.clear();
                vec![Effect::Notify(REGISTERED.to_string()), Effect::NotifyParent]
            }
            Err(err) => {
                self.error = Some(err.user_message(REGISTER_FAILED));
                Vec::new()
            }
        }
    }

    /// Resets every user input; the fetched catalog is kept.
    pub fn clear(&mut self) {
        self.form = StudentForm::default();
        self.selection.clear();
        self.filter.reset();
        self.error = None;
    }
}
