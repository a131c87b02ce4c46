use common::dates::format_long;
use common::model::student::{Student, StudentDetail};
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::{add_courses_sheet, edit_sheet};
use super::messages::Msg;
use super::state::RosterView;

pub fn view(component: &RosterView, ctx: &Context<RosterView>) -> Html {
    let props = ctx.props();
    let link = ctx.link();

    if props.loading {
        return html! {
            <div class="loading">
                <div class="spin large"></div>
                <p>{ "Loading students..." }</p>
            </div>
        };
    }

    if props.students.is_empty() {
        return match &props.error {
            Some(error) => html! {
                <div class="empty">
                    <p class="error-text">{ error.clone() }</p>
                    <p>{ "The roster could not be loaded. Switch tabs to try again." }</p>
                </div>
            },
            None => html! {
                <div class="empty">
                    <p>{ "No students registered yet." }</p>
                    <p class="hint">{ "Register a new student to get started." }</p>
                </div>
            },
        };
    }

    html! {
        <div class="roster">
            <h2>{ "Registered Students" }</h2>
            <div class="rows">
                { for props.students.iter().map(|student| build_row(component, student, link)) }
            </div>
            { edit_sheet(component, link) }
            { add_courses_sheet(component, link) }
        </div>
    }
}

fn build_row(component: &RosterView, student: &Student, link: &Scope<RosterView>) -> Html {
    let id = student.id;
    let expanded = component.state.is_expanded(id);
    let on_edit = link.callback(move |e: MouseEvent| {
        e.stop_propagation();
        Msg::OpenEdit(id)
    });
    let on_delete = link.callback(move |e: MouseEvent| {
        e.stop_propagation();
        Msg::Delete(id)
    });

    html! {
        <div key={id.to_string()} class="row">
            <div class="row-summary" onclick={link.callback(move |_| Msg::ToggleRow(id))}>
                <div class="row-text">
                    <h3>{ student.full_name() }</h3>
                    <p class="email">{ student.email.clone() }</p>
                    {
                        match &student.phone_number {
                            Some(phone) if !phone.is_empty() => html! { <p class="phone">{ phone.clone() }</p> },
                            _ => html! {},
                        }
                    }
                    {
                        match &student.enrolled_courses {
                            Some(courses) if !courses.is_empty() => html! {
                                <p class="courses"><strong>{ "Courses: " }</strong>{ courses.clone() }</p>
                            },
                            _ => html! {},
                        }
                    }
                </div>
                <div class="row-actions">
                    <button class="secondary small" onclick={on_edit}>{ "Edit" }</button>
                    <button class="danger small" onclick={on_delete}>{ "Delete" }</button>
                    <span class={classes!("chevron", expanded.then_some("open"))}>{ "▾" }</span>
                </div>
            </div>
            { if expanded { build_detail(component, id, link) } else { html! {} } }
        </div>
    }
}

fn build_detail(component: &RosterView, id: common::model::StudentId, link: &Scope<RosterView>) -> Html {
    let body = match component.state.details.get(id) {
        Some(detail) => detail_body(detail, link),
        None if component.state.is_loading_detail(id) => html! {
            <div class="loading"><div class="spin"></div></div>
        },
        None => html! {},
    };
    html! { <div class="row-detail">{ body }</div> }
}

fn detail_body(detail: &StudentDetail, link: &Scope<RosterView>) -> Html {
    let student = &detail.student;
    let id = student.id;

    let courses = if detail.courses.is_empty() {
        html! { <p class="hint">{ "No courses enrolled" }</p> }
    } else {
        detail
            .courses
            .iter()
            .map(|enrolled| {
                let course = &enrolled.course;
                let course_id = course.id;
                html! {
                    <div key={course_id.to_string()} class="enrollment">
                        <div>
                            <div class="course-title">{ format!("{} - {}", course.code, course.name) }</div>
                            <div class="hint">
                                { format!(
                                    "Enrolled: {} | {} credits",
                                    format_long(enrolled.enrollment_date.as_deref()),
                                    course.credits.unwrap_or(0)
                                ) }
                            </div>
                        </div>
                        <button class="danger small" onclick={link.callback(move |_| Msg::RemoveCourse(id, course_id))}>
                            { "Remove" }
                        </button>
                    </div>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class="detail-grid">
            <div>
                <h4>{ "Personal Details" }</h4>
                <p><strong>{ "Date of Birth: " }</strong>{ format_long(student.date_of_birth.as_deref()) }</p>
                <p><strong>{ "Address: " }</strong>{ student.address.clone().filter(|a| !a.is_empty()).unwrap_or_else(|| "N/A".to_string()) }</p>
                <p><strong>{ "Registered: " }</strong>{ format_long(student.created_at.as_deref()) }</p>
            </div>
            <div>
                <div class="section-head">
                    <h4>{ "Enrolled Courses" }</h4>
                    <button class="primary small" onclick={link.callback(move |_| Msg::OpenAddCourses(id))}>
                        { "Add Courses" }
                    </button>
                </div>
                { courses }
            </div>
        </div>
    }
}
