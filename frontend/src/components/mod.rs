pub mod cards;
pub mod confirm_dialog;
pub mod empty_state;
pub mod error;
pub mod guard;
pub mod layout;
pub mod status_badge;
