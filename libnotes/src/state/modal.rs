//! Modal visibility reducer

/// Which dialog content is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalKind {
    /// Read-only note detail
    #[default]
    Show,
    /// Create form
    Add,
    /// Update form for the selected note
    Edit,
    /// Delete confirmation for the selected note
    Confirm,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    pub is_open: bool,
    /// Meaningless while `is_open` is false
    pub kind: ModalKind,
}

impl ModalState {
    /// Kind of the modal currently on screen, if any
    pub fn active(&self) -> Option<ModalKind> {
        self.is_open.then_some(self.kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    Open(ModalKind),
    Close,
}

/// Pure reducer for modal state
pub fn reduce(state: ModalState, action: ModalAction) -> ModalState {
    match action {
        ModalAction::Open(kind) => ModalState {
            is_open: true,
            kind,
        },

        // `kind` is left stale on purpose; consumers check `is_open` first.
        ModalAction::Close => ModalState {
            is_open: false,
            ..state
        },
    }
}
