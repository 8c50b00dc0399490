use super::model::SegmentId;

/// Which segment, if any, is lifted out and bound to the value editor.
///
/// This is the only record of selection in the chart. A segment's "active" flag is
/// always read from here, never stored next to the segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionState {
    #[default]
    Deselected,
    Selected(SegmentId),
}

/// Outcome of one transition: the segment that lost selection and the one that gained it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionChange {
    pub deactivated: Option<SegmentId>,
    pub activated: Option<SegmentId>,
}

impl SelectionChange {
    pub fn is_empty(&self) -> bool {
        self.deactivated.is_none() && self.activated.is_none()
    }
}

impl SelectionState {
    /// Returns the state after tapping `id` together with what changed.
    pub fn tap(self, id: SegmentId) -> (Self, SelectionChange) {
        match self {
            Self::Selected(current) if current == id => (
                Self::Deselected,
                SelectionChange {
                    deactivated: Some(id),
                    activated: None,
                },
            ),
            Self::Selected(current) => (
                Self::Selected(id),
                SelectionChange {
                    deactivated: Some(current),
                    activated: Some(id),
                },
            ),
            Self::Deselected => (
                Self::Selected(id),
                SelectionChange {
                    deactivated: None,
                    activated: Some(id),
                },
            ),
        }
    }

    /// Drops the selection if it points at `id`.
    pub fn forget(self, id: SegmentId) -> (Self, SelectionChange) {
        match self {
            Self::Selected(current) if current == id => (
                Self::Deselected,
                SelectionChange {
                    deactivated: Some(id),
                    activated: None,
                },
            ),
            other => (other, SelectionChange::default()),
        }
    }

    pub fn selected(self) -> Option<SegmentId> {
        match self {
            Self::Selected(id) => Some(id),
            Self::Deselected => None,
        }
    }

    pub fn is_active(self, id: SegmentId) -> bool {
        self.selected() == Some(id)
    }
}
