//! User Directory App
//!
//! Page layout: header with the add trigger, the card grid and the modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{UserGrid, UserModal};
use crate::config::AppConfig;
use crate::store::{
    store_initialize, store_load_failed, store_modal_open, store_open_modal, DirectoryState,
    DirectoryStore,
};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store: DirectoryStore = Store::new(DirectoryState::default());
    provide_context(store);

    // Load users once on mount
    let endpoint = config.users_endpoint;
    Effect::new(move |_| {
        let endpoint = endpoint.clone();
        spawn_local(async move {
            match api::fetch_users(&endpoint).await {
                Ok(users) => store_initialize(&store, users),
                Err(e) => {
                    log::error!("[APP] Failed to load users: {}", e);
                    store_load_failed(&store, e.to_string());
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <header class="page-header">
                <h1>"Users"</h1>
                <button class="add-user-btn" on:click=move |_| store_open_modal(&store)>
                    "Add User"
                </button>
            </header>

            <main class="main-content">
                <UserGrid />
            </main>

            <Show when=move || store_modal_open(&store)>
                <UserModal />
            </Show>
        </div>
    }
}
