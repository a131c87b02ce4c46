//! Message handling for the roster view.
//!
//! Every message is forwarded to [`RosterState`]; this module only adds what
//! needs the browser: native confirmation dialogs, looking rows up in the
//! props, and issuing the requests the state asks for.
//!
//! [`RosterState`]: common::state::roster::RosterState

use common::api::ApiCall;
use common::state::roster::RosterState;
use common::state::{DetailCache, Effect};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::client;
use crate::helpers::{confirm, run_effects};

use super::messages::Msg;
use super::state::{find_student, RosterView};

pub fn update(component: &mut RosterView, ctx: &Context<RosterView>, msg: Msg) -> bool {
    let students = &ctx.props().students;
    let state = &mut component.state;

    let effects = match msg {
        Msg::ToggleRow(id) => state.toggle_row(id),
        Msg::DetailLoaded(id, generation, result) => state.detail_loaded(id, generation, result),

        Msg::OpenEdit(id) => {
            if let Some(student) = find_student(students, id) {
                state.open_edit(student);
            }
            Vec::new()
        }
        Msg::SetEditField(field, value) => {
            state.set_edit_field(field, value);
            Vec::new()
        }
        Msg::SubmitEdit => state.submit_edit(),
        Msg::EditFinished(id, result) => state.edit_finished(id, result),
        Msg::CloseEdit => {
            state.close_edit();
            Vec::new()
        }

        Msg::Delete(id) => {
            let confirmed = find_student(students, id)
                .is_some_and(|student| confirm(&RosterState::delete_prompt(student)));
            state.delete_student(id, confirmed)
        }
        Msg::DeleteFinished(id, result) => state.delete_finished(id, result),

        Msg::OpenAddCourses(id) => state.open_add_courses(id),
        Msg::CoursesLoaded(id, result) => {
            state.courses_loaded(id, result);
            Vec::new()
        }
        Msg::ToggleCourse(course_id) => {
            state.toggle_course(course_id);
            Vec::new()
        }
        Msg::SetSearch(search) => {
            state.set_search(search);
            Vec::new()
        }
        Msg::SetCategory(category) => {
            state.set_category(category);
            Vec::new()
        }
        Msg::SubmitAddCourses => state.submit_add_courses(),
        Msg::AddCoursesFinished(id, result) => state.add_courses_finished(id, result),
        Msg::CloseAddCourses => {
            state.close_add_courses();
            Vec::new()
        }

        Msg::RemoveCourse(id, course_id) => {
            let confirmed = state
                .details
                .get(id)
                .and_then(|detail| detail.courses.iter().find(|c| c.course.id == course_id))
                .is_some_and(|enrolled| confirm(&RosterState::remove_prompt(&enrolled.course)));
            state.remove_course(id, course_id, confirmed)
        }
        Msg::RemoveCourseFinished(id, result) => state.remove_course_finished(id, result),
    };

    apply(component, ctx, effects);
    true
}

fn apply(component: &RosterView, ctx: &Context<RosterView>, effects: Vec<Effect>) {
    // The catalog request carries no student id; it belongs to whichever
    // add-courses sheet is open when it is issued.
    let sheet_owner = component.state.add_courses.student_id();
    let details = &component.state.details;
    run_effects(ctx.link(), effects, Some(&ctx.props().on_update), |link, call| {
        dispatch(link, call, sheet_owner, details)
    });
}

fn dispatch(
    link: &Scope<RosterView>,
    call: ApiCall,
    sheet_owner: Option<common::model::StudentId>,
    details: &DetailCache,
) {
    let link = link.clone();
    let generation = match &call {
        ApiCall::GetStudent(id) => details.generation(*id),
        _ => 0,
    };
    spawn_local(async move {
        let msg = match &call {
            ApiCall::GetStudent(id) => Msg::DetailLoaded(*id, generation, client::fetch_json(&call).await),
            ApiCall::UpdateStudent(id, _) => Msg::EditFinished(*id, client::execute(&call).await),
            ApiCall::DeleteStudent(id) => Msg::DeleteFinished(*id, client::execute(&call).await),
            ApiCall::AddCourses(id, _) => Msg::AddCoursesFinished(*id, client::execute(&call).await),
            ApiCall::RemoveCourse { student_id, .. } => {
                Msg::RemoveCourseFinished(*student_id, client::execute(&call).await)
            }
            ApiCall::ListCourses => match sheet_owner {
                Some(id) => Msg::CoursesLoaded(id, client::fetch_json(&call).await),
                None => return,
            },
            other => {
                gloo_console::warn!(format!("roster view does not issue {}", other));
                return;
            }
        };
        link.send_message(msg);
    });
}
