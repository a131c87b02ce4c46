//! Roster view state: row expansion, the detail cache and the edit and
//! add-courses modals.
//!
//! Mutations never patch cached data. Each successful mutation invalidates
//! the affected detail, re-fetches what the view still shows and asks the
//! shell to reload the roster.

use std::collections::HashSet;

use crate::api::{ApiCall, ApiError};
use crate::filter::CourseFilter;
use crate::model::category::CategoryFilter;
use crate::model::course::Course;
use crate::model::student::{Student, StudentDetail};
use crate::model::{CourseId, StudentId};
use crate::requests::AddCoursesRequest;
use crate::validation::{FormField, StudentForm};

use super::{CourseSelection, DetailCache, Effect, ModalState};

const DETAIL_FAILED: &str = "Failed to load student details";
const UPDATE_FAILED: &str = "Failed to update student";
const DELETE_FAILED: &str = "Failed to delete student";
const COURSES_FAILED: &str = "Failed to load courses";
const ADD_FAILED: &str = "Failed to add courses";
const REMOVE_FAILED: &str = "Failed to remove course";

/// Contents of the edit dialog.
#[derive(Debug, Default)]
pub struct EditModal {
    pub form: StudentForm,
    pub saving: bool,
    pub error: Option<String>,
}

/// Contents of the add-courses dialog.
#[derive(Debug, Default)]
pub struct AddCoursesModal {
    /// Full catalog, fetched each time the dialog opens.
    pub catalog: Vec<Course>,
    pub loading: bool,
    pub filter: CourseFilter,
    pub selection: CourseSelection,
    pub submitting: bool,
    pub error: Option<String>,
}

impl AddCoursesModal {
    pub fn can_submit(&self) -> bool {
        !self.selection.is_empty() && !self.submitting
    }
}

#[derive(Debug, Default)]
pub struct RosterState {
    pub expanded: Option<StudentId>,
    pub details: DetailCache,
    /// Students whose detail request is in flight.
    pub loading_details: HashSet<StudentId>,
    pub edit: ModalState<EditModal>,
    pub add_courses: ModalState<AddCoursesModal>,
}

impl RosterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: StudentId) -> bool {
        self.expanded == Some(id)
    }

    pub fn is_loading_detail(&self, id: StudentId) -> bool {
        self.loading_details.contains(&id)
    }

    fn collapse_if_expanded(&mut self, id: StudentId) {
        if self.is_expanded(id) {
            self.expanded = None;
        }
    }

    fn fetch_detail(&mut self, id: StudentId) -> Effect {
        self.loading_details.insert(id);
        Effect::Call(ApiCall::GetStudent(id))
    }

    /// Expands or collapses a row. Only the first expansion of a student
    /// whose detail is not cached fetches it.
    pub fn toggle_row(&mut self, id: StudentId) -> Vec<Effect> {
        if self.is_expanded(id) {
            self.expanded = None;
            return Vec::new();
        }
        self.expanded = Some(id);
        if self.details.contains(id) || self.is_loading_detail(id) {
            return Vec::new();
        }
        vec![self.fetch_detail(id)]
    }

    /// Handles a detail reply. `generation` is the cache generation the
    /// request was issued under; replies that predate a mutation of the
    /// student are dropped.
    pub fn detail_loaded(
        &mut self,
        id: StudentId,
        generation: u64,
        result: Result<StudentDetail, ApiError>,
    ) -> Vec<Effect> {
        if generation != self.details.generation(id) {
            return Vec::new();
        }
        self.loading_details.remove(&id);
        match result {
            Ok(detail) => {
                self.details.insert(generation, detail);
                Vec::new()
            }
            Err(_) => {
                self.collapse_if_expanded(id);
                if let Some(modal) = self.add_courses.for_student_mut(id) {
                    modal.error = Some(DETAIL_FAILED.to_string());
                }
                vec![Effect::Alert(DETAIL_FAILED.to_string())]
            }
        }
    }

    pub fn open_edit(&mut self, student: &Student) {
        self.edit = ModalState::OpenFor(
            student.id,
            EditModal {
                form: StudentForm::from_student(student),
                ..EditModal::default()
            },
        );
    }

    pub fn set_edit_field(&mut self, field: FormField, value: String) {
        if let Some((_, modal)) = self.edit.contents_mut() {
            modal.form.set(field, value);
            modal.error = None;
        }
    }

    pub fn submit_edit(&mut self) -> Vec<Effect> {
        let Some((id, modal)) = self.edit.contents_mut() else {
            return Vec::new();
        };
        modal.error = None;
        if let Err(err) = modal.form.validate() {
            modal.error = Some(err.to_string());
            return Vec::new();
        }
        modal.saving = true;
        vec![Effect::Call(ApiCall::UpdateStudent(id, modal.form.to_update_request()))]
    }

    pub fn edit_finished(&mut self, id: StudentId, result: Result<(), ApiError>) -> Vec<Effect> {
        match result {
            Ok(()) => {
                if self.edit.student_id() == Some(id) {
                    self.edit.close();
                }
                self.details.invalidate(id);
                self.loading_details.remove(&id);
                self.collapse_if_expanded(id);
                vec![Effect::Notify("Student updated successfully".to_string()), Effect::NotifyParent]
            }
            Err(err) => {
                if let Some(modal) = self.edit.for_student_mut(id) {
                    modal.saving = false;
                    modal.error = Some(err.user_message(UPDATE_FAILED));
                    Vec::new()
                } else {
                    vec![Effect::Alert(err.user_message(UPDATE_FAILED))]
                }
            }
        }
    }

    pub fn close_edit(&mut self) {
        self.edit.close();
    }

    /// Text of the confirmation asked before deleting `student`.
    pub fn delete_prompt(student: &Student) -> String {
        format!("Are you sure you want to delete {}?", student.full_name())
    }

    /// Deletes a student once the user has confirmed.
    pub fn delete_student(&mut self, id: StudentId, confirmed: bool) -> Vec<Effect> {
        if !confirmed {
            return Vec::new();
        }
        vec![Effect::Call(ApiCall::DeleteStudent(id))]
    }

    pub fn delete_finished(&mut self, id: StudentId, result: Result<(), ApiError>) -> Vec<Effect> {
        match result {
            Ok(()) => {
                self.details.invalidate(id);
                self.loading_details.remove(&id);
                self.collapse_if_expanded(id);
                if self.edit.student_id() == Some(id) {
                    self.edit.close();
                }
                if self.add_courses.student_id() == Some(id) {
                    self.add_courses.close();
                }
                vec![Effect::Notify("Student deleted successfully".to_string()), Effect::NotifyParent]
            }
            Err(err) => vec![Effect::Alert(err.user_message(DELETE_FAILED))],
        }
    }

    /// Opens the add-courses dialog and fetches a fresh catalog. The
    /// student's detail is fetched too when it is not cached, since it
    /// decides which courses are still available.
    pub fn open_add_courses(&mut self, id: StudentId) -> Vec<Effect> {
        self.add_courses = ModalState::OpenFor(
            id,
            AddCoursesModal {
                loading: true,
                ..AddCoursesModal::default()
            },
        );
        let mut effects = vec![Effect::Call(ApiCall::ListCourses)];
        if !self.details.contains(id) && !self.is_loading_detail(id) {
            effects.push(self.fetch_detail(id));
        }
        effects
    }

    pub fn courses_loaded(&mut self, id: StudentId, result: Result<Vec<Course>, ApiError>) {
        let Some(modal) = self.add_courses.for_student_mut(id) else {
            return;
        };
        modal.loading = false;
        match result {
            Ok(catalog) => modal.catalog = catalog,
            Err(err) => {
                modal.catalog.clear();
                modal.error = Some(err.user_message(COURSES_FAILED));
            }
        }
    }

    /// Whether the open dialog is still waiting for the catalog or for the
    /// student's enrollments.
    pub fn add_courses_loading(&self) -> bool {
        match self.add_courses.contents() {
            Some((id, modal)) => modal.loading || (!self.details.contains(id) && modal.error.is_none()),
            None => false,
        }
    }

    /// Catalog entries the open dialog may offer: not yet enrolled, and
    /// passing the dialog's filter. Empty until the student's enrollments
    /// are known.
    pub fn available_courses(&self) -> Vec<&Course> {
        let Some((id, modal)) = self.add_courses.contents() else {
            return Vec::new();
        };
        let Some(detail) = self.details.get(id) else {
            return Vec::new();
        };
        let enrolled: HashSet<CourseId> = detail.enrolled_ids().collect();
        modal.filter.apply(modal.catalog.iter().filter(|course| !enrolled.contains(&course.id)))
    }

    pub fn toggle_course(&mut self, course_id: CourseId) {
        if let Some((_, modal)) = self.add_courses.contents_mut() {
            modal.selection.toggle(course_id);
        }
    }

    pub fn set_search(&mut self, search: String) {
        if let Some((_, modal)) = self.add_courses.contents_mut() {
            modal.filter.search = search;
        }
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        if let Some((_, modal)) = self.add_courses.contents_mut() {
            modal.filter.category = category;
        }
    }

    /// Enrolls the student in the selected courses. Nothing is sent while
    /// the selection is empty.
    pub fn submit_add_courses(&mut self) -> Vec<Effect> {
        let Some((id, modal)) = self.add_courses.contents_mut() else {
            return Vec::new();
        };
        if !modal.can_submit() {
            return Vec::new();
        }
        modal.submitting = true;
        modal.error = None;
        let request = AddCoursesRequest {
            course_ids: modal.selection.ids().to_vec(),
        };
        vec![Effect::Call(ApiCall::AddCourses(id, request))]
    }

    pub fn add_courses_finished(&mut self, id: StudentId, result: Result<(), ApiError>) -> Vec<Effect> {
        match result {
            Ok(()) => {
                if self.add_courses.student_id() == Some(id) {
                    self.add_courses.close();
                }
                self.details.invalidate(id);
                vec![
                    self.fetch_detail(id),
                    Effect::NotifyParent,
                    Effect::Notify("Courses added successfully".to_string()),
                ]
            }
            Err(err) => {
                if let Some(modal) = self.add_courses.for_student_mut(id) {
                    modal.submitting = false;
                    modal.error = Some(err.user_message(ADD_FAILED));
                    Vec::new()
                } else {
                    vec![Effect::Alert(err.user_message(ADD_FAILED))]
                }
            }
        }
    }

    pub fn close_add_courses(&mut self) {
        self.add_courses.close();
    }

    /// Text of the confirmation asked before dropping an enrollment.
    pub fn remove_prompt(course: &Course) -> String {
        format!("Remove {} - {} from this student's courses?", course.code, course.name)
    }

    /// Drops one enrollment once the user has confirmed.
    pub fn remove_course(&mut self, id: StudentId, course_id: CourseId, confirmed: bool) -> Vec<Effect> {
        if !confirmed {
            return Vec::new();
        }
        vec![Effect::Call(ApiCall::RemoveCourse {
            student_id: id,
            course_id,
        })]
    }

    pub fn remove_course_finished(&mut self, id: StudentId, result: Result<(), ApiError>) -> Vec<Effect> {
        match result {
            Ok(()) => {
                self.details.invalidate(id);
                vec![
                    self.fetch_detail(id),
                    Effect::NotifyParent,
                    Effect::Notify("Course removed successfully".to_string()),
                ]
            }
            Err(err) => vec![Effect::Alert(err.user_message(REMOVE_FAILED))],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::category::Category;
    use crate::requests::UpdateStudentRequest;
    use crate::state::fixtures::{catalog, detail, student};
    use rstest::{fixture, rstest};

    fn calls(effects: &[Effect]) -> Vec<&ApiCall> {
        effects.iter().filter_map(Effect::call).collect()
    }

    /// Delivers a detail reply to a request issued just now.
    fn reply(roster: &mut RosterState, id: StudentId, result: Result<StudentDetail, ApiError>) -> Vec<Effect> {
        let generation = roster.details.generation(id);
        roster.detail_loaded(id, generation, result)
    }

    fn available_ids(roster: &RosterState) -> Vec<CourseId> {
        roster.available_courses().iter().map(|c| c.id).collect()
    }

    /// Roster with student 5 expanded and its detail cached.
    #[fixture]
    fn expanded_five() -> RosterState {
        let mut roster = RosterState::new();
        roster.toggle_row(5);
        reply(&mut roster, 5, Ok(detail(5, &[12])));
        roster
    }

    #[test]
    fn first_expansion_fetches_detail_once() {
        let mut roster = RosterState::new();
        assert_eq!(roster.toggle_row(7), [Effect::Call(ApiCall::GetStudent(7))]);
        assert!(roster.is_loading_detail(7));
        reply(&mut roster, 7, Ok(detail(7, &[])));

        assert!(roster.toggle_row(7).is_empty());
        assert_eq!(roster.expanded, None);
        assert!(roster.toggle_row(7).is_empty());
        assert!(roster.is_expanded(7));
    }

    #[test]
    fn clicking_while_loading_does_not_refetch() {
        let mut roster = RosterState::new();
        roster.toggle_row(7);
        roster.toggle_row(7);
        assert!(roster.toggle_row(7).is_empty());
    }

    #[test]
    fn expanding_another_row_switches_expansion() {
        let mut roster = RosterState::new();
        roster.toggle_row(1);
        let effects = roster.toggle_row(2);
        assert_eq!(calls(&effects), [&ApiCall::GetStudent(2)]);
        assert!(roster.is_expanded(2));
    }

    #[test]
    fn failed_detail_alerts_and_collapses() {
        let mut roster = RosterState::new();
        roster.toggle_row(7);
        let effects = reply(&mut roster, 7, Err(ApiError::Network("offline".into())));
        assert_eq!(effects, [Effect::Alert(DETAIL_FAILED.into())]);
        assert_eq!(roster.expanded, None);
        assert!(!roster.details.contains(7));
        assert_eq!(roster.toggle_row(7), [Effect::Call(ApiCall::GetStudent(7))]);
    }

    #[rstest]
    fn edit_prefills_and_normalises_dates(mut expanded_five: RosterState) {
        expanded_five.open_edit(&student(5, "Alan", "Turing"));
        let Some((id, modal)) = expanded_five.edit.contents() else {
            panic!("edit modal should be open");
        };
        assert_eq!(id, 5);
        assert_eq!(modal.form.first_name, "Alan");
        assert_eq!(modal.form.date_of_birth, "2000-03-04");
    }

    #[rstest]
    fn edit_with_blank_email_is_rejected_locally(mut expanded_five: RosterState) {
        expanded_five.open_edit(&student(5, "Alan", "Turing"));
        expanded_five.set_edit_field(FormField::Email, "  ".into());
        assert!(expanded_five.submit_edit().is_empty());
        let (_, modal) = expanded_five.edit.contents().unwrap();
        assert!(modal.error.is_some());
        assert!(!modal.saving);
    }

    #[rstest]
    fn successful_edit_invalidates_and_collapses(mut expanded_five: RosterState) {
        expanded_five.open_edit(&student(5, "Alan", "Turing"));
        expanded_five.set_edit_field(FormField::LastName, "Mathison".into());
        let effects = expanded_five.submit_edit();
        match calls(&effects).as_slice() {
            [ApiCall::UpdateStudent(5, UpdateStudentRequest { last_name, .. })] => {
                assert_eq!(last_name, "Mathison")
            }
            other => panic!("unexpected calls {:?}", other),
        }

        let effects = expanded_five.edit_finished(5, Ok(()));
        assert!(effects.contains(&Effect::NotifyParent));
        assert!(!expanded_five.edit.is_open());
        assert!(!expanded_five.details.contains(5));
        assert_eq!(expanded_five.expanded, None);
        assert_eq!(expanded_five.toggle_row(5), [Effect::Call(ApiCall::GetStudent(5))]);
    }

    #[rstest]
    fn clearing_a_phone_number_is_sent_as_null(mut expanded_five: RosterState) {
        let mut alan = student(5, "Alan", "Turing");
        alan.phone_number = Some("555-0100".into());
        expanded_five.open_edit(&alan);
        expanded_five.set_edit_field(FormField::PhoneNumber, String::new());

        let effects = expanded_five.submit_edit();
        let issued = calls(&effects);
        let body = match issued.as_slice() {
            [ApiCall::UpdateStudent(5, request)] => serde_json::to_value(request).unwrap(),
            other => panic!("unexpected calls {:?}", other),
        };
        assert_eq!(body["phoneNumber"], serde_json::Value::Null);
        assert_eq!(body["dateOfBirth"], "2000-03-04");
    }

    #[rstest]
    fn failed_edit_keeps_modal_and_cache(mut expanded_five: RosterState) {
        expanded_five.open_edit(&student(5, "Alan", "Turing"));
        expanded_five.submit_edit();
        let effects = expanded_five.edit_finished(
            5,
            Err(ApiError::from_response(409, r#"{"error":"Email already in use"}"#)),
        );
        assert!(effects.is_empty());
        let (_, modal) = expanded_five.edit.contents().unwrap();
        assert_eq!(modal.error.as_deref(), Some("Email already in use"));
        assert!(!modal.saving);
        assert!(expanded_five.details.contains(5));
        assert!(expanded_five.is_expanded(5));
    }

    #[test]
    fn unconfirmed_delete_issues_nothing() {
        let mut roster = RosterState::new();
        assert!(roster.delete_student(3, false).is_empty());
    }

    #[rstest]
    fn confirmed_delete_invalidates_detail(mut expanded_five: RosterState) {
        assert_eq!(expanded_five.delete_student(5, true), [Effect::Call(ApiCall::DeleteStudent(5))]);
        let effects = expanded_five.delete_finished(5, Ok(()));
        assert_eq!(
            effects,
            [Effect::Notify("Student deleted successfully".into()), Effect::NotifyParent]
        );
        assert!(!expanded_five.details.contains(5));
        assert_eq!(expanded_five.expanded, None);
    }

    #[rstest]
    fn failed_delete_alerts_and_keeps_state(mut expanded_five: RosterState) {
        let effects = expanded_five.delete_finished(5, Err(ApiError::Network("offline".into())));
        assert_eq!(effects, [Effect::Alert(DELETE_FAILED.into())]);
        assert!(expanded_five.details.contains(5));
        assert!(expanded_five.is_expanded(5));
    }

    #[test]
    fn delete_prompt_names_student() {
        assert_eq!(
            RosterState::delete_prompt(&student(3, "Grace", "Hopper")),
            "Are you sure you want to delete Grace Hopper?"
        );
    }

    #[rstest]
    fn add_modal_fetches_catalog_and_hides_enrolled(mut expanded_five: RosterState) {
        assert_eq!(expanded_five.open_add_courses(5), [Effect::Call(ApiCall::ListCourses)]);
        expanded_five.courses_loaded(5, Ok(catalog()));
        let ids: Vec<_> = expanded_five.available_courses().iter().map(|c| c.id).collect();
        assert_eq!(ids, [10, 11, 13]);
    }

    #[test]
    fn add_modal_without_cached_detail_fetches_it() {
        let mut roster = RosterState::new();
        let effects = roster.open_add_courses(9);
        assert_eq!(
            calls(&effects),
            [&ApiCall::ListCourses, &ApiCall::GetStudent(9)]
        );
    }

    #[rstest]
    fn add_modal_filters_available_courses(mut expanded_five: RosterState) {
        expanded_five.open_add_courses(5);
        expanded_five.courses_loaded(5, Ok(catalog()));
        expanded_five.set_category(CategoryFilter::Only(Category::It));
        expanded_five.set_search("102".into());
        let ids: Vec<_> = expanded_five.available_courses().iter().map(|c| c.id).collect();
        assert_eq!(ids, [11]);
    }

    #[rstest]
    fn empty_selection_cannot_be_submitted(mut expanded_five: RosterState) {
        expanded_five.open_add_courses(5);
        expanded_five.courses_loaded(5, Ok(catalog()));
        assert!(expanded_five.submit_add_courses().is_empty());
    }

    #[rstest]
    fn adding_courses_refetches_detail_and_roster(mut expanded_five: RosterState) {
        expanded_five.open_add_courses(5);
        expanded_five.courses_loaded(5, Ok(catalog()));
        expanded_five.toggle_course(10);
        expanded_five.toggle_course(11);

        let effects = expanded_five.submit_add_courses();
        assert_eq!(
            effects,
            [Effect::Call(ApiCall::AddCourses(
                5,
                AddCoursesRequest {
                    course_ids: vec![10, 11]
                }
            ))]
        );

        let effects = expanded_five.add_courses_finished(5, Ok(()));
        assert_eq!(effects[0], Effect::Call(ApiCall::GetStudent(5)));
        assert_eq!(effects[1], Effect::NotifyParent);
        assert!(!expanded_five.add_courses.is_open());
        assert!(!expanded_five.details.contains(5));
        assert!(expanded_five.is_expanded(5));
    }

    #[rstest]
    fn added_courses_leave_the_available_list(mut expanded_five: RosterState) {
        expanded_five.open_add_courses(5);
        expanded_five.courses_loaded(5, Ok(catalog()));
        expanded_five.toggle_course(10);
        expanded_five.toggle_course(11);
        expanded_five.submit_add_courses();
        expanded_five.add_courses_finished(5, Ok(()));
        reply(&mut expanded_five, 5, Ok(detail(5, &[10, 11, 12])));

        let effects = expanded_five.open_add_courses(5);
        assert_eq!(calls(&effects), [&ApiCall::ListCourses]);
        expanded_five.courses_loaded(5, Ok(catalog()));
        let ids: Vec<_> = expanded_five.available_courses().iter().map(|c| c.id).collect();
        assert_eq!(ids, [13]);
    }

    #[rstest]
    fn failed_add_keeps_selection(mut expanded_five: RosterState) {
        expanded_five.open_add_courses(5);
        expanded_five.courses_loaded(5, Ok(catalog()));
        expanded_five.toggle_course(13);
        expanded_five.submit_add_courses();
        let effects = expanded_five.add_courses_finished(5, Err(ApiError::Network("offline".into())));
        assert!(effects.is_empty());
        let (_, modal) = expanded_five.add_courses.contents().unwrap();
        assert_eq!(modal.error.as_deref(), Some(ADD_FAILED));
        assert_eq!(modal.selection.ids(), [13]);
        assert!(expanded_five.details.contains(5));
    }

    #[rstest]
    fn catalog_for_a_closed_modal_is_ignored(mut expanded_five: RosterState) {
        expanded_five.open_add_courses(5);
        expanded_five.close_add_courses();
        expanded_five.courses_loaded(5, Ok(catalog()));
        assert!(!expanded_five.add_courses.is_open());
        assert!(expanded_five.available_courses().is_empty());
    }

    #[rstest]
    fn unconfirmed_removal_issues_nothing(mut expanded_five: RosterState) {
        assert!(expanded_five.remove_course(5, 12, false).is_empty());
        assert!(expanded_five.details.contains(5));
    }

    #[rstest]
    fn removing_a_course_refetches_detail(mut expanded_five: RosterState) {
        assert_eq!(
            expanded_five.remove_course(5, 12, true),
            [Effect::Call(ApiCall::RemoveCourse {
                student_id: 5,
                course_id: 12
            })]
        );
        let effects = expanded_five.remove_course_finished(5, Ok(()));
        assert_eq!(calls(&effects), [&ApiCall::GetStudent(5)]);
        assert!(effects.contains(&Effect::NotifyParent));
        assert!(!expanded_five.details.contains(5));
    }

    #[rstest]
    fn failed_removal_alerts_with_backend_text(mut expanded_five: RosterState) {
        let effects = expanded_five.remove_course_finished(
            5,
            Err(ApiError::from_response(404, r#"{"error":"Enrollment not found"}"#)),
        );
        assert_eq!(effects, [Effect::Alert("Enrollment not found".into())]);
        assert!(expanded_five.details.contains(5));
    }

    #[test]
    fn detail_reply_that_predates_an_edit_is_dropped() {
        let mut roster = RosterState::new();
        roster.toggle_row(5);
        let issued = roster.details.generation(5);
        roster.open_edit(&student(5, "Alan", "Turing"));
        roster.set_edit_field(FormField::LastName, "Mathison".into());
        roster.submit_edit();
        roster.edit_finished(5, Ok(()));

        assert!(roster.detail_loaded(5, issued, Ok(detail(5, &[12]))).is_empty());
        assert!(!roster.details.contains(5));
        assert!(!roster.is_loading_detail(5));
        assert_eq!(roster.toggle_row(5), [Effect::Call(ApiCall::GetStudent(5))]);
    }

    #[test]
    fn detail_reply_that_predates_a_delete_is_dropped() {
        let mut roster = RosterState::new();
        roster.toggle_row(5);
        let issued = roster.details.generation(5);
        roster.delete_student(5, true);
        roster.delete_finished(5, Ok(()));

        roster.detail_loaded(5, issued, Ok(detail(5, &[])));
        assert!(!roster.details.contains(5));
    }

    #[test]
    fn refetch_after_removal_wins_over_an_older_reply() {
        let mut roster = RosterState::new();
        roster.toggle_row(5);
        let older = roster.details.generation(5);
        roster.remove_course(5, 12, true);
        roster.remove_course_finished(5, Ok(()));
        let fresh = roster.details.generation(5);

        roster.detail_loaded(5, fresh, Ok(detail(5, &[])));
        roster.detail_loaded(5, older, Ok(detail(5, &[12])));
        assert!(roster.details.get(5).is_some_and(|d| d.courses.is_empty()));
        assert!(!roster.is_loading_detail(5));
    }

    #[rstest]
    fn add_dialog_waits_for_enrollments_before_offering_courses(mut expanded_five: RosterState) {
        expanded_five.open_add_courses(5);
        expanded_five.courses_loaded(5, Ok(catalog()));
        expanded_five.toggle_course(10);
        expanded_five.toggle_course(11);
        expanded_five.submit_add_courses();
        expanded_five.add_courses_finished(5, Ok(()));

        let effects = expanded_five.open_add_courses(5);
        assert_eq!(calls(&effects), [&ApiCall::ListCourses]);
        expanded_five.courses_loaded(5, Ok(catalog()));
        assert!(expanded_five.add_courses_loading());
        assert!(available_ids(&expanded_five).is_empty());

        reply(&mut expanded_five, 5, Ok(detail(5, &[10, 11, 12])));
        assert!(!expanded_five.add_courses_loading());
        assert_eq!(available_ids(&expanded_five), [13]);
    }

    #[test]
    fn failed_detail_stops_the_add_dialog_waiting() {
        let mut roster = RosterState::new();
        roster.open_add_courses(9);
        roster.courses_loaded(9, Ok(catalog()));
        reply(&mut roster, 9, Err(ApiError::Network("offline".into())));

        assert!(!roster.add_courses_loading());
        let (_, modal) = roster.add_courses.contents().unwrap();
        assert_eq!(modal.error.as_deref(), Some(DETAIL_FAILED));
        assert!(available_ids(&roster).is_empty());
    }
}
