//! Element system.
//!
//! Elements are the engine's stand-ins for platform views. The host maps
//! each one onto a native widget and reads back nothing but user input.

mod core;
mod kind;
mod tree;

pub use self::core::{
    A11yImportance, Accessibility, Element, ElementFlags, ElementId, FocusLinks, LiveRegion,
};
pub use self::kind::{
    ButtonData, ButtonVariant, ChipData, ChipGroupColors, ChipGroupData, ContainerData, ElementKind,
    HeaderData, IconButtonData, ImageData, InputData, KeyboardType, LeadingIcon, MenuItemData,
    NewsCardData, NotificationCardData, ProgressData, TextData, TextSpan, TextStyle,
};
pub use self::tree::ElementTree;
