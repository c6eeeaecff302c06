//! Client-side state containers
//!
//! Two independent reducers, each a pure function `(State, Action) -> State`:
//! - `list`: the notes collection and the currently selected note
//! - `modal`: which dialog is open
//!
//! The provider (see `provider.rs`) owns one value of each and is the only
//! place that dispatches actions.

pub mod list;
pub mod modal;

pub use list::{ListAction, NoteListState};
pub use modal::{ModalAction, ModalKind, ModalState};
