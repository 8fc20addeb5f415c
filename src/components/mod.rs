//! UI Components
//!
//! Reusable Leptos components.

mod form_input;
mod user_card;
mod user_grid;
mod user_modal;

pub use form_input::FormInput;
pub use user_card::UserCard;
pub use user_grid::UserGrid;
pub use user_modal::UserModal;
