//! Roster view: the list of registered students.
//!
//! Rows expand into a detail panel fetched lazily and cached per student.
//! Edit, delete and enrollment changes each issue one request. On success the
//! affected detail is dropped from the cache and `on_update` asks the shell
//! to reload the roster.

use yew::prelude::*;

mod dialogs;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::RosterProps;
pub use state::RosterView;

impl Component for RosterView {
    type Message = Msg;
    type Properties = RosterProps;

    fn create(_ctx: &Context<Self>) -> Self {
        RosterView::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
