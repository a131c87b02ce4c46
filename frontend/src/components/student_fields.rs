use common::validation::{FormField, StudentForm};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Inputs for the six student fields, used by the registration form and the
/// roster's edit sheet. Each keystroke is reported as `(field, value)`.
pub fn personal_fields(form: &StudentForm, on_change: Callback<(FormField, String)>) -> Html {
    let input = |label: &'static str, field: FormField, kind: &'static str, placeholder: &'static str, required: bool| {
        let on_change = on_change.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            on_change.emit((field, value));
        });
        html! {
            <div class="field">
                <label>
                    { label }
                    { if required { html! { <span class="required">{ " *" }</span> } } else { html! {} } }
                </label>
                <input type={kind} value={form.get(field).to_string()} {placeholder} {oninput} />
            </div>
        }
    };

    let on_address = {
        let on_change = on_change.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            on_change.emit((FormField::Address, value));
        })
    };

    html! {
        <div class="field-grid">
            { input("First Name", FormField::FirstName, "text", "Enter first name", true) }
            { input("Last Name", FormField::LastName, "text", "Enter last name", true) }
            { input("Email", FormField::Email, "email", "student@example.com", true) }
            { input("Phone Number", FormField::PhoneNumber, "tel", "+1 (555) 123-4567", false) }
            { input("Date of Birth", FormField::DateOfBirth, "date", "", false) }
            <div class="field wide">
                <label>{ "Address" }</label>
                <textarea rows="3" placeholder="Enter address" value={form.address.clone()} oninput={on_address} />
            </div>
        </div>
    }
}
