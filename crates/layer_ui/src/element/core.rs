//! Core element types.

use super::kind::ElementKind;
use crate::layout::LayoutParams;
use crate::style::Style;

/// Unique identifier for an element in its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl ElementId {
    /// Id of an element not yet inserted in a tree.
    pub const DETACHED: Self = Self(0);

    /// Creates a new element ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Element state flags (bitfield).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementFlags(u32);

impl ElementFlags {
    /// Element accepts input.
    pub const ENABLED: u32 = 1 << 0;
    /// Element reacts to taps.
    pub const CLICKABLE: u32 = 1 << 1;
    /// Element can take focus.
    pub const FOCUSABLE: u32 = 1 << 2;
    /// Element changed since the host last synced it.
    pub const DIRTY: u32 = 1 << 3;

    /// Default flags for a new element.
    pub const DEFAULT: Self = Self(Self::ENABLED | Self::DIRTY);

    /// Creates new flags with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Returns true if the flag is set.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: u32) -> bool {
        (self.0 & flag) != 0
    }

    /// Sets a flag.
    #[inline]
    pub fn set(&mut self, flag: u32) {
        self.0 |= flag;
    }

    /// Clears a flag.
    #[inline]
    pub fn clear(&mut self, flag: u32) {
        self.0 &= !flag;
    }

    /// Sets or clears a flag.
    #[inline]
    pub fn assign(&mut self, flag: u32, on: bool) {
        if on {
            self.set(flag);
        } else {
            self.clear(flag);
        }
    }
}

impl Default for ElementFlags {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How assistive technology should treat an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum A11yImportance {
    /// Platform decides.
    #[default]
    Auto,
    /// Always exposed.
    Yes,
    /// Hidden from assistive technology.
    No,
}

/// Whether changes to an element are announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiveRegion {
    /// Silent.
    #[default]
    None,
    /// Announced when the user is idle.
    Polite,
}

/// Accessibility state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accessibility {
    /// Content description.
    pub label: Option<String>,
    /// Label of the click action.
    pub hint: Option<String>,
    /// Marked as a heading.
    pub heading: bool,
    /// Exposure to assistive technology.
    pub importance: A11yImportance,
    /// Current state (error text while a field is invalid).
    pub state_description: Option<String>,
    /// Announcement mode.
    pub live_region: LiveRegion,
    /// Announcements requested so far.
    pub announcements: u32,
}

/// Explicit focus targets, by schema id.
///
/// Unset directions leave traversal to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusLinks {
    /// Target when moving up.
    pub up: Option<String>,
    /// Target when moving down.
    pub down: Option<String>,
    /// Target when moving left.
    pub left: Option<String>,
    /// Target when moving right.
    pub right: Option<String>,
}

impl FocusLinks {
    /// True if no direction is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.up.is_none() && self.down.is_none() && self.left.is_none() && self.right.is_none()
    }
}

/// One rendered node.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tree id, [`ElementId::DETACHED`] until inserted.
    pub id: ElementId,
    /// Schema type tag this element was built from.
    pub component_type: String,
    /// Schema id, if the component had a non-empty one.
    pub component_id: Option<String>,
    /// Parent in the tree, `None` for roots and detached elements.
    pub parent: Option<ElementId>,
    /// Type-specific content.
    pub kind: ElementKind,
    /// Visual style.
    pub style: Style,
    /// Layout parameters.
    pub layout: LayoutParams,
    /// Accessibility state.
    pub a11y: Accessibility,
    /// Directional focus targets.
    pub focus: FocusLinks,
    /// State flags.
    pub flags: ElementFlags,
}

impl Element {
    /// Creates a detached element with default style and layout.
    #[must_use]
    pub fn new(component_type: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: ElementId::DETACHED,
            component_type: component_type.into(),
            component_id: None,
            parent: None,
            kind,
            style: Style::default(),
            layout: LayoutParams::default(),
            a11y: Accessibility::default(),
            focus: FocusLinks::default(),
            flags: ElementFlags::DEFAULT,
        }
    }

    /// Sets layout parameters.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutParams) -> Self {
        self.layout = layout;
        self
    }

    /// Returns true if the element accepts input.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.flags.has(ElementFlags::ENABLED)
    }

    /// Returns true if the element is rendered.
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.style.is_visible()
    }

    /// Returns true if the element can be activated right now.
    #[inline]
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.is_enabled() && self.is_visible()
    }

    /// Returns true if the host should re-sync this element.
    #[inline]
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.flags.has(ElementFlags::DIRTY)
    }

    /// Marks the element as needing a re-sync.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.flags.set(ElementFlags::DIRTY);
    }

    /// Sets enabled state and the matching opacity.
    pub fn set_enabled(&mut self, enabled: bool, disabled_alpha: f32) {
        self.flags.assign(ElementFlags::ENABLED, enabled);
        self.style.alpha = if enabled { 1.0 } else { disabled_alpha };
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::TextData;

    #[test]
    fn test_flags() {
        let mut flags = ElementFlags::new();
        assert!(flags.has(ElementFlags::ENABLED));
        flags.assign(ElementFlags::ENABLED, false);
        assert!(!flags.has(ElementFlags::ENABLED));
        flags.set(ElementFlags::CLICKABLE);
        assert!(flags.has(ElementFlags::CLICKABLE));
    }

    #[test]
    fn test_set_enabled_dims() {
        let mut element = Element::new("Text", ElementKind::Text(TextData::default()));
        element.set_enabled(false, 0.5);
        assert!(!element.is_enabled());
        assert!(!element.is_interactive());
        assert!((element.style.alpha - 0.5).abs() < f32::EPSILON);
        element.set_enabled(true, 0.5);
        assert!((element.style.alpha - 1.0).abs() < f32::EPSILON);
    }
}
