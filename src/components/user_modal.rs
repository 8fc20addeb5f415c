//! Add User Modal
//!
//! Modal form over the store's open draft. Submit validates and appends
//! through the store; cancel drops the draft.

use leptos::prelude::*;

use crate::components::FormInput;
use crate::form::FormSection;
use crate::store::{store_close_modal, store_submit_draft, use_directory_store};

/// Modal dialog for adding a user
#[component]
pub fn UserModal() -> impl IntoView {
    let store = use_directory_store();

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Err(e) = store_submit_draft(&store) {
            log::warn!("[MODAL] Submit refused: {}", e);
        }
    };

    let render_section = |section: FormSection| {
        view! {
            <div class="form-section">
                <h3>{section.title()}</h3>
                {section.fields().map(|field| view! { <FormInput field=field /> }).collect_view()}
            </div>
        }
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2>"Add New User"</h2>
                <form class="user-form" on:submit=handle_submit>
                    <div class="form-column">
                        {render_section(FormSection::Personal)}
                    </div>
                    <div class="form-column">
                        {render_section(FormSection::Address)}
                        {render_section(FormSection::Company)}
                    </div>
                    <div class="form-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| store_close_modal(&store)>
                            "Cancel"
                        </button>
                        <button type="submit" class="submit-btn">"Add User"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
