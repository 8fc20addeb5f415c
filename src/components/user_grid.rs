//! User Grid Component
//!
//! Card grid over the store's user list, with loading and error states.

use leptos::prelude::*;

use crate::components::UserCard;
use crate::store::{use_directory_store, DirectoryStateStoreFields, LoadState};

#[component]
pub fn UserGrid() -> impl IntoView {
    let store = use_directory_store();

    move || match store.load().get() {
        LoadState::Loading => view! {
            <p class="grid-status">"Loading users..."</p>
        }
        .into_any(),
        LoadState::Failed(message) => view! {
            <div class="grid-error">
                <p>"Could not load users."</p>
                <p class="grid-error-detail">{message}</p>
            </div>
        }
        .into_any(),
        LoadState::Ready => view! {
            <Show
                when=move || store.users().with(|users| !users.is_empty())
                fallback=|| view! { <p class="grid-status">"No users yet."</p> }
            >
                <div class="user-grid">
                    <For
                        each=move || store.users().get()
                        key=|user| user.id
                        children=move |user| view! { <UserCard user=user /> }
                    />
                </div>
            </Show>
            <p class="user-count">
                {move || format!("{} users", store.users().with(|users| users.len()))}
            </p>
        }
        .into_any(),
    }
}
