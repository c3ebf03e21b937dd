//! User input delivered by the host.
//!
//! The host owns the native widgets. When one of them is tapped or edited
//! it reports the matching [`ElementId`] here and the engine runs the
//! handler it attached when the element was created.

use crate::element::ElementId;

/// Clickable sub-area of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    /// The element as a whole.
    #[default]
    Body,
    /// A header's leading icon (back arrow or menu).
    LeadingIcon,
    /// One entry of a collection, such as a chip in a chip group.
    Item(usize),
}

/// One interaction reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    /// The text of an input changed.
    TextChanged {
        /// Edited element.
        element: ElementId,
        /// Full new text.
        text: String,
    },
    /// A region of an element was tapped.
    Click {
        /// Tapped element.
        element: ElementId,
        /// Tapped region.
        region: Region,
    },
}

impl UserInput {
    /// A body tap.
    #[must_use]
    pub const fn click(element: ElementId) -> Self {
        Self::Click {
            element,
            region: Region::Body,
        }
    }

    /// A text edit.
    #[must_use]
    pub fn text(element: ElementId, text: impl Into<String>) -> Self {
        Self::TextChanged {
            element,
            text: text.into(),
        }
    }

    /// Target element.
    #[must_use]
    pub const fn element(&self) -> ElementId {
        match self {
            Self::TextChanged { element, .. } | Self::Click { element, .. } => *element,
        }
    }
}
