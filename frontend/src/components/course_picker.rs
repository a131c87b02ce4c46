//! Search box, category chips and a grid of selectable course cards.
//!
//! Used by the registration form and by the roster's add-courses sheet. The
//! owner keeps the filter and selection state and passes in the courses that
//! already passed the filter.

use common::filter::CourseFilter;
use common::model::category::CategoryFilter;
use common::model::course::Course;
use common::model::CourseId;
use common::state::CourseSelection;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub struct CoursePicker;

#[derive(Properties, PartialEq)]
pub struct CoursePickerProps {
    /// Courses left after filtering.
    pub courses: Vec<Course>,
    /// Size of the list before filtering; tells "none at all" from "none match".
    pub total: usize,
    pub loading: bool,
    pub filter: CourseFilter,
    pub selection: CourseSelection,
    pub on_toggle: Callback<CourseId>,
    pub on_search: Callback<String>,
    pub on_category: Callback<CategoryFilter>,
}

impl Component for CoursePicker {
    type Message = ();
    type Properties = CoursePickerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CoursePicker
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="course-picker">
                { build_filters(props) }
                { build_grid(props) }
            </div>
        }
    }
}

fn build_filters(props: &CoursePickerProps) -> Html {
    let on_search = props.on_search.reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    let chips = CategoryFilter::choices()
        .map(|choice| {
            let on_category = props.on_category.reform(move |_: MouseEvent| choice);
            let class = classes!("chip", (props.filter.category == choice).then_some("active"));
            html! {
                <button type="button" key={choice.label()} class={class} onclick={on_category}>
                    { choice.label() }
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <div class="course-filters">
            <input
                type="text"
                class="search"
                placeholder="Search courses by code, name, or description..."
                value={props.filter.search.clone()}
                oninput={on_search}
            />
            <div class="chips">{ chips }</div>
        </div>
    }
}

fn build_grid(props: &CoursePickerProps) -> Html {
    if props.loading {
        return html! {
            <div class="loading">
                <div class="spin"></div>
                <p>{ "Loading courses..." }</p>
            </div>
        };
    }
    if props.courses.is_empty() {
        let message = if props.total == 0 {
            "No courses available."
        } else {
            "No courses match your search criteria."
        };
        return html! { <p class="empty">{ message }</p> };
    }

    html! {
        <div class="course-grid">
            { for props.courses.iter().map(|course| course_card(course, props)) }
        </div>
    }
}

fn course_card(course: &Course, props: &CoursePickerProps) -> Html {
    let id = course.id;
    let selected = props.selection.contains(id);
    let on_toggle = props.on_toggle.reform(move |_: Event| id);

    html! {
        <label key={id.to_string()} class={classes!("course-card", selected.then_some("selected"))}>
            <input type="checkbox" checked={selected} onchange={on_toggle} />
            <div class="course-info">
                <div class="course-head">
                    <span class="course-code">{ course.code.clone() }</span>
                    {
                        if let Some(category) = course.category {
                            html! { <span class={classes!("badge", category.badge_class())}>{ category.label() }</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <div class="course-name">{ course.name.clone() }</div>
                {
                    if let Some(description) = &course.description {
                        html! { <div class="course-description">{ description.clone() }</div> }
                    } else {
                        html! {}
                    }
                }
                <div class="course-credits">{ format!("{} credits", course.credits.unwrap_or(0)) }</div>
            </div>
        </label>
    }
}
