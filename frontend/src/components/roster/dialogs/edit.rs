use common::validation::FormField;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::roster::{Msg, RosterView};
use crate::components::student_fields::personal_fields;
use crate::sheet::Sheet;

/// Edit sheet for the student the edit modal is open for, if any.
pub fn edit_sheet(component: &RosterView, link: &Scope<RosterView>) -> Html {
    let Some((_, modal)) = component.state.edit.contents() else {
        return html! {};
    };
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitEdit
    });

    html! {
        <Sheet title="Edit Student" on_close={link.callback(|_| Msg::CloseEdit)}>
            <form {onsubmit}>
                {
                    if let Some(error) = &modal.error {
                        html! { <div class="error-banner">{ error.clone() }</div> }
                    } else {
                        html! {}
                    }
                }
                { personal_fields(&modal.form, link.callback(|(field, value): (FormField, String)| Msg::SetEditField(field, value))) }
                <div class="form-actions">
                    <button type="button" class="secondary" onclick={link.callback(|_| Msg::CloseEdit)}>{ "Cancel" }</button>
                    <button type="submit" class="primary" disabled={modal.saving}>
                        { if modal.saving { "Saving..." } else { "Save Changes" } }
                    </button>
                </div>
            </form>
        </Sheet>
    }
}
