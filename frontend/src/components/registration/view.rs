use common::validation::FormField;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::course_picker::CoursePicker;
use crate::components::student_fields::personal_fields;

use super::messages::Msg;
use super::state::RegistrationForm;

pub fn view(component: &RegistrationForm, ctx: &Context<RegistrationForm>) -> Html {
    let link = ctx.link();
    let state = &component.state;
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="registration">
            <h2>{ "Student Registration Form" }</h2>
            {
                if let Some(error) = &state.error {
                    html! { <div class="error-banner">{ error.clone() }</div> }
                } else {
                    html! {}
                }
            }
            <form {onsubmit}>
                <section class="card">
                    <h3>{ "Personal Information" }</h3>
                    { personal_fields(&state.form, link.callback(|(field, value): (FormField, String)| Msg::SetField(field, value))) }
                </section>
                { build_course_section(component, link) }
                <div class="form-actions">
                    <button type="button" class="secondary" onclick={link.callback(|_| Msg::Clear)}>
                        { "Clear Form" }
                    </button>
                    <button type="submit" class="primary" disabled={state.submitting}>
                        { if state.submitting { "Registering..." } else { "Register Student" } }
                    </button>
                </div>
            </form>
        </div>
    }
}

fn build_course_section(component: &RegistrationForm, link: &Scope<RegistrationForm>) -> Html {
    let state = &component.state;
    let selected = state.selection.len();
    let visible = state.visible_courses().into_iter().cloned().collect::<Vec<_>>();

    html! {
        <section class="card">
            <div class="section-head">
                <h3>
                    { "Course Enrollment" }
                    <span class="hint">{ "(Select one or more courses)" }</span>
                </h3>
                {
                    if selected > 0 {
                        html! { <div class="count-badge">{ format!("{} Selected", selected) }</div> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <CoursePicker
                courses={visible}
                total={state.courses.len()}
                loading={state.courses_loading}
                filter={state.filter.clone()}
                selection={state.selection.clone()}
                on_toggle={link.callback(Msg::ToggleCourse)}
                on_search={link.callback(Msg::SetSearch)}
                on_category={link.callback(Msg::SetCategory)}
            />
            {
                if selected > 0 {
                    html! { <p class="selection-summary"><strong>{ selected }</strong>{ " course(s) selected" }</p> }
                } else {
                    html! {}
                }
            }
        </section>
    }
}
