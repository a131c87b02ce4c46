use common::api::ApiCall;
use common::state::Effect;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::client;
use crate::helpers::run_effects;

use super::messages::Msg;
use super::state::RegistrationForm;

pub fn update(component: &mut RegistrationForm, ctx: &Context<RegistrationForm>, msg: Msg) -> bool {
    let state = &mut component.state;
    let effects = match msg {
        Msg::CoursesLoaded(result) => {
            state.courses_loaded(result);
            Vec::new()
        }
        Msg::SetField(field, value) => {
            state.set_field(field, value);
            Vec::new()
        }
        Msg::ToggleCourse(id) => {
            state.toggle_course(id);
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
        Msg::Submit => state.submit(),
        Msg::SubmitFinished(result) => state.submit_finished(result),
        Msg::Clear => {
            state.clear();
            Vec::new()
        }
    };
    apply(ctx, effects);
    true
}

pub fn apply(ctx: &Context<RegistrationForm>, effects: Vec<Effect>) {
    let on_added = &ctx.props().on_student_added;
    run_effects(ctx.link(), effects, Some(on_added), dispatch);
}

fn dispatch(link: &Scope<RegistrationForm>, call: ApiCall) {
    let link = link.clone();
    spawn_local(async move {
        let msg = match &call {
            ApiCall::ListCourses => Msg::CoursesLoaded(client::fetch_json(&call).await),
            ApiCall::CreateStudent(_) => Msg::SubmitFinished(client::execute(&call).await),
            other => {
                gloo_console::warn!(format!("registration form does not issue {}", other));
                return;
            }
        };
        link.send_message(msg);
    });
}
