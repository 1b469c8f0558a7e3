use dioxus::prelude::*;
use store::{FormField, FormState};

/// The single create/update form. Inputs are bound to [`FormState`]; what a
/// submit does depends on its mode.
#[component]
pub fn UserForm(
    form: FormState,
    on_input: EventHandler<(FormField, String)>,
    on_submit: EventHandler<()>,
) -> Element {
    let (title, submit_label) = match form.editing_id() {
        None => ("Add User".to_string(), "Add User"),
        Some(id) => (format!("Edit User #{id}"), "Update User"),
    };

    rsx! {
        form {
            id: "userForm",
            class: "user-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            h2 { "{title}" }
            FormInput {
                id: "firstName",
                label: "First Name",
                input_type: "text",
                field: FormField::FirstName,
                value: form.get(FormField::FirstName).to_string(),
                on_input,
            }
            FormInput {
                id: "lastName",
                label: "Last Name",
                input_type: "text",
                field: FormField::LastName,
                value: form.get(FormField::LastName).to_string(),
                on_input,
            }
            FormInput {
                id: "email",
                label: "Email",
                input_type: "email",
                field: FormField::Email,
                value: form.get(FormField::Email).to_string(),
                on_input,
            }
            FormInput {
                id: "phone",
                label: "Phone",
                input_type: "tel",
                field: FormField::Phone,
                value: form.get(FormField::Phone).to_string(),
                on_input,
            }
            button { r#type: "submit", class: "primary", "{submit_label}" }
        }
    }
}

#[component]
fn FormInput(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    field: FormField,
    value: String,
    on_input: EventHandler<(FormField, String)>,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            label { r#for: id, "{label}" }
            input {
                id,
                r#type: input_type,
                value,
                oninput: move |evt: FormEvent| on_input.call((field, evt.value())),
            }
        }
    }
}
