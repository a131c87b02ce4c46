//! Browser feedback helpers: toasts and the native alert/confirm dialogs.

use common::state::Effect;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::html::Scope;
use yew::{Callback, Component};

use common::api::ApiCall;

/// Displays a temporary notification at the bottom of the screen.
///
/// The toast is a styled `div` appended to `<body>` that removes itself after
/// three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                html_toast.set_class_name("toast");

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Blocking message box.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Blocking yes/no question. Anything but an explicit "OK" counts as no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Carries out the effects returned by a state transition, in order.
///
/// `dispatch` issues a request on behalf of component `C` and feeds the
/// outcome back as a message; `on_parent` is the callback the parent passed in.
pub fn run_effects<C: Component>(
    link: &Scope<C>,
    effects: Vec<Effect>,
    on_parent: Option<&Callback<()>>,
    mut dispatch: impl FnMut(&Scope<C>, ApiCall),
) {
    for effect in effects {
        match effect {
            Effect::Call(call) => dispatch(link, call),
            Effect::Alert(message) => alert(&message),
            Effect::Notify(message) => show_toast(&message),
            Effect::NotifyParent => {
                if let Some(callback) = on_parent {
                    callback.emit(());
                }
            }
        }
    }
}
