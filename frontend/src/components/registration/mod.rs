//! Registration form: personal details plus an initial course selection.
//!
//! The catalog is fetched once, on first render. Submission is blocked
//! locally until the required fields are filled; on success the parent is
//! told through `on_student_added`.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::RegistrationProps;
pub use state::RegistrationForm;

impl Component for RegistrationForm {
    type Message = Msg;
    type Properties = RegistrationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        RegistrationForm::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            let effects = self.state.mount();
            update::apply(ctx, effects);
        }
    }
}
