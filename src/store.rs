//! User Directory State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The list and the
//! add-user draft are only changed through the helpers below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::SubmitError;
use crate::form::{merge, FieldChange};
use crate::models::{UserDraft, UserRecord};

/// Outcome of the initial feed load
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Directory state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DirectoryState {
    /// Canonical in-memory user list
    pub users: Vec<UserRecord>,
    /// Add-user form; `Some` while the modal is open
    pub draft: Option<UserDraft>,
    pub load: LoadState,
}

/// Type alias for the store
pub type DirectoryStore = Store<DirectoryState>;

/// Get the directory store from context
pub fn use_directory_store() -> DirectoryStore {
    expect_context::<DirectoryStore>()
}

/// Next free id: one past the largest id in `users`, starting at 1.
/// `None` once `u32::MAX` is taken.
pub fn next_user_id(users: &[UserRecord]) -> Option<u32> {
    users.iter().map(|u| u.id).max().unwrap_or(0).checked_add(1)
}

/// Assign the next id to `draft` and append it
pub fn append_user(users: &mut Vec<UserRecord>, draft: UserDraft) -> Result<UserRecord, SubmitError> {
    let id = next_user_id(users).ok_or(SubmitError::IdsExhausted)?;
    let record = draft.into_record(id);
    users.push(record.clone());
    Ok(record)
}

// ========================
// Store Helper Functions
// ========================

/// Replace the list with the fetched payload
pub fn store_initialize(store: &DirectoryStore, users: Vec<UserRecord>) {
    log::info!("[STORE] Loaded {} users", users.len());
    store.users().set(users);
    store.load().set(LoadState::Ready);
}

pub fn store_load_failed(store: &DirectoryStore, message: String) {
    store.load().set(LoadState::Failed(message));
}

/// Add a completed draft to the list
pub fn store_add_user(store: &DirectoryStore, draft: UserDraft) -> Result<UserRecord, SubmitError> {
    let record = append_user(&mut store.users().write(), draft)?;
    log::info!("[STORE] Added user #{} ({})", record.id, record.username);
    Ok(record)
}

/// Open the modal with an empty draft
pub fn store_open_modal(store: &DirectoryStore) {
    store.draft().set(Some(UserDraft::default()));
}

/// Close the modal, discarding any draft
pub fn store_close_modal(store: &DirectoryStore) {
    store.draft().set(None);
}

pub fn store_modal_open(store: &DirectoryStore) -> bool {
    store.draft().with(Option::is_some)
}

/// Apply one input change to the open draft
pub fn store_edit_draft(store: &DirectoryStore, change: FieldChange) {
    if let Some(draft) = store.draft().write().as_mut() {
        *draft = merge(std::mem::take(draft), change);
    }
}

/// Validate the open draft, append it and close the modal.
/// On error the draft stays open for correction.
pub fn store_submit_draft(store: &DirectoryStore) -> Result<UserRecord, SubmitError> {
    let draft = store.draft().get_untracked().ok_or(SubmitError::NotOpen)?;
    let missing = draft.missing_required();
    if !missing.is_empty() {
        return Err(SubmitError::MissingFields(missing));
    }
    let record = store_add_user(store, draft)?;
    store_close_modal(store);
    Ok(record)
}
