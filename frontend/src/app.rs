//! Top-level shell: header, tab bar and the active view.

use common::api::{ApiCall, ApiError};
use common::model::student::Student;
use common::state::shell::{ShellState, Tab};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::client;
use crate::components::registration::RegistrationForm;
use crate::components::roster::RosterView;
use crate::helpers::run_effects;

pub enum Msg {
    SelectTab(Tab),
    StudentAdded,
    Refresh,
    RosterLoaded(Result<Vec<Student>, ApiError>),
}

pub struct App {
    state: ShellState,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: ShellState::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let effects = match msg {
            Msg::SelectTab(tab) => self.state.select_tab(tab),
            Msg::StudentAdded => self.state.student_added(),
            Msg::Refresh => self.state.refresh(),
            Msg::RosterLoaded(result) => self.state.roster_loaded(result),
        };
        run_effects(ctx.link(), effects, None, dispatch);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="app-root">
                <header class="app-header">
                    <h1>{ "Student Registration System" }</h1>
                    <p>{ "Register students and manage course enrollments" }</p>
                </header>
                <main class="app-main">
                    { self.build_tab_bar(link) }
                    <div class="panel">
                        {
                            match self.state.active_tab {
                                Tab::Register => html! {
                                    <RegistrationForm on_student_added={link.callback(|_| Msg::StudentAdded)} />
                                },
                                Tab::List => html! {
                                    <RosterView
                                        students={self.state.students.clone()}
                                        loading={self.state.loading}
                                        error={self.state.roster_error.clone()}
                                        on_update={link.callback(|_| Msg::Refresh)}
                                    />
                                },
                            }
                        }
                    </div>
                </main>
            </div>
        }
    }
}

impl App {
    fn build_tab_bar(&self, link: &Scope<Self>) -> Html {
        let tab_class = |tab: Tab| classes!("tab-btn", (self.state.active_tab == tab).then_some("active"));
        html! {
            <div class="tab-bar">
                <button class={tab_class(Tab::Register)} onclick={link.callback(|_| Msg::SelectTab(Tab::Register))}>
                    { "Register Student" }
                </button>
                <button class={tab_class(Tab::List)} onclick={link.callback(|_| Msg::SelectTab(Tab::List))}>
                    { format!("View Students ({})", self.state.students.len()) }
                </button>
            </div>
        }
    }
}

fn dispatch(link: &Scope<App>, call: ApiCall) {
    let link = link.clone();
    spawn_local(async move {
        match call {
            ApiCall::ListStudents => {
                link.send_message(Msg::RosterLoaded(client::fetch_json(&call).await));
            }
            other => gloo_console::warn!(format!("shell does not issue {}", other)),
        }
    });
}
