pub mod error;
pub mod mood;
pub mod save_state;
pub mod view_state;
