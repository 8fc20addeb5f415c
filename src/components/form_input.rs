//! Form Input Component
//!
//! One labeled input bound to a single field of the store's draft.

use leptos::prelude::*;

use crate::form::{FieldChange, FormField, InputKind};
use crate::store::{store_edit_draft, use_directory_store, DirectoryStateStoreFields};

#[component]
pub fn FormInput(field: FormField) -> impl IntoView {
    let store = use_directory_store();
    let value = move || {
        store
            .draft()
            .with(|d| d.as_ref().map(|d| field.value(d).to_string()).unwrap_or_default())
    };
    let on_input = move |ev: web_sys::Event| {
        store_edit_draft(&store, FieldChange::new(field, event_target_value(&ev)));
    };

    let control = if field.kind() == InputKind::MultiLine {
        view! {
            <textarea
                id=field.name()
                name=field.name()
                rows="2"
                placeholder=field.placeholder()
                required=field.required()
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=field.kind().as_attr()
                id=field.name()
                name=field.name()
                placeholder=field.placeholder()
                required=field.required()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="form-field">
            <label for=field.name()>{field.label()}</label>
            {control}
        </div>
    }
}
