use yew::html::Scope;
use yew::prelude::*;

use crate::components::course_picker::CoursePicker;
use crate::components::roster::{Msg, RosterView};
use crate::sheet::Sheet;

/// Add-courses sheet: the catalog minus the student's current enrollments.
/// The confirm button stays disabled while nothing is selected.
pub fn add_courses_sheet(component: &RosterView, link: &Scope<RosterView>) -> Html {
    let state = &component.state;
    let Some((id, modal)) = state.add_courses.contents() else {
        return html! {};
    };
    let available = state.available_courses().into_iter().cloned().collect::<Vec<_>>();
    let title = state
        .details
        .get(id)
        .map(|detail| format!("Add Courses for {}", detail.student.full_name()))
        .unwrap_or_else(|| "Add Courses".to_string());
    let selected = modal.selection.len();

    html! {
        <Sheet {title} on_close={link.callback(|_| Msg::CloseAddCourses)}>
            {
                if let Some(error) = &modal.error {
                    html! { <div class="error-banner">{ error.clone() }</div> }
                } else {
                    html! {}
                }
            }
            <CoursePicker
                courses={available}
                total={modal.catalog.len()}
                loading={state.add_courses_loading()}
                filter={modal.filter.clone()}
                selection={modal.selection.clone()}
                on_toggle={link.callback(Msg::ToggleCourse)}
                on_search={link.callback(Msg::SetSearch)}
                on_category={link.callback(Msg::SetCategory)}
            />
            <div class="form-actions">
                <button type="button" class="secondary" onclick={link.callback(|_| Msg::CloseAddCourses)}>{ "Cancel" }</button>
                <button
                    type="button"
                    class="primary"
                    disabled={!modal.can_submit()}
                    onclick={link.callback(|_| Msg::SubmitAddCourses)}
                >
                    {
                        if modal.submitting {
                            "Adding...".to_string()
                        } else {
                            format!("Add {} Course(s)", selected)
                        }
                    }
                </button>
            </div>
        </Sheet>
    }
}
