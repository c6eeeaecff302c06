//! Application module
//!
//! Contains the core application architecture:
//! - Actions: What can happen
//! - State: What is true right now (UI-local; notes live in the provider)
//! - Reducer: Pure function (State, Action) -> State
//! - Keymap: Key presses to actions
//! - Controller: Runs provider operations for actions that need them

pub mod actions;
pub mod controller;
pub mod event;
pub mod keymap;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::Action;
pub use controller::Controller;
pub use keymap::map_key;
pub use reducer::reduce;
pub use state::{Focus, FormField, FormState, StatusBarState, UiConfig, UiState};
