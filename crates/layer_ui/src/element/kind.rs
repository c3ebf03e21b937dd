//! Type-specific element content.

use crate::layout::{Direction, Gravity};
use crate::style::Color;

/// Typographic role of a text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    /// Screen title.
    Header,
    /// Section title.
    Subtitle,
    /// Body copy.
    #[default]
    Body,
}

impl TextStyle {
    /// Parses `header` / `subtitle`; anything else is body copy.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("header") => Self::Header,
            Some("subtitle") => Self::Subtitle,
            _ => Self::Body,
        }
    }
}

/// A colored run of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    /// Run text.
    pub text: String,
    /// Run color.
    pub color: Color,
}

/// Text content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextData {
    /// Plain text.
    pub text: String,
    /// Typographic role.
    pub style: TextStyle,
    /// Colored runs. When present they replace `text` on screen.
    pub spans: Vec<TextSpan>,
    /// Host font resource name.
    pub typeface: Option<String>,
}

impl TextData {
    /// Text as displayed (spans concatenated when present).
    #[must_use]
    pub fn display_text(&self) -> String {
        if self.spans.is_empty() {
            self.text.clone()
        } else {
            self.spans.iter().map(|span| span.text.as_str()).collect()
        }
    }
}

/// Soft keyboard requested by an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardType {
    /// Free text.
    #[default]
    Text,
    /// Email address.
    Email,
    /// Masked password.
    Password,
    /// Document number.
    Cpf,
    /// Digits.
    Number,
    /// Phone number.
    Phone,
}

impl KeyboardType {
    /// Parses a keyboard name, case-insensitive. Unknown names are text.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::to_ascii_uppercase).as_deref() {
            Some("EMAIL") => Self::Email,
            Some("PASSWORD") => Self::Password,
            Some("CPF") => Self::Cpf,
            Some("NUMBER") => Self::Number,
            Some("PHONE") => Self::Phone,
            _ => Self::Text,
        }
    }
}

/// Editable text field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputData {
    /// Current text.
    pub value: String,
    /// Placeholder.
    pub hint: String,
    /// Keyboard kind.
    pub keyboard: KeyboardType,
    /// Error text currently displayed.
    pub error: Option<String>,
}

/// Visual variant of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Filled accent.
    #[default]
    Primary,
    /// Filled neutral.
    Secondary,
    /// Outline only.
    Outlined,
    /// Destructive.
    Danger,
}

impl ButtonVariant {
    /// Parses a `buttonType` value. Unknown values are primary.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("secondary") => Self::Secondary,
            Some("outlined") => Self::Outlined,
            Some("danger") => Self::Danger,
            _ => Self::Primary,
        }
    }
}

/// Push button.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ButtonData {
    /// Label.
    pub text: String,
    /// Visual variant.
    pub variant: ButtonVariant,
    /// Host font resource name.
    pub typeface: Option<String>,
}

/// Icon with an optional badge.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconButtonData {
    /// Host drawable name.
    pub icon: String,
    /// Icon content description.
    pub description: Option<String>,
    /// Badge content description.
    pub badge_description: Option<String>,
    /// Badge counter, 0 hides the badge.
    pub badge_count: i32,
}

/// Linear container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContainerData {
    /// Stacking direction.
    pub direction: Direction,
    /// Placement of children inside the container.
    pub gravity: Gravity,
}

/// Toggleable chip.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChipData {
    /// Label.
    pub text: String,
    /// Selection state.
    pub selected: bool,
}

/// Chip colors of a chip group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChipGroupColors {
    /// Selected chip background.
    pub selected_bg: Color,
    /// Selected chip text.
    pub selected_text: Color,
    /// Unselected chip background.
    pub unselected_bg: Color,
    /// Unselected chip text.
    pub unselected_text: Color,
}

/// Wrapping group of single-select chips.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChipGroupData {
    /// Chip labels in order.
    pub items: Vec<String>,
    /// Gap between chips in px.
    pub spacing: f32,
    /// Custom colors, host defaults when absent.
    pub colors: Option<ChipGroupColors>,
    /// Index of the selected chip.
    pub selected: Option<usize>,
}

/// Remote image.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageData {
    /// Image location.
    pub url: Option<String>,
    /// Scale to fill and crop the overflow.
    pub center_crop: bool,
}

/// Progress indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressData {
    /// Spinner instead of a bar.
    pub indeterminate: bool,
    /// Indicator tint.
    pub color: Color,
    /// Takes all leftover space.
    pub full_screen: bool,
}

/// Glyph of a header's leading icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeadingIcon {
    /// Back arrow.
    #[default]
    Back,
    /// Hamburger menu.
    Menu,
}

/// Toolbar with a title and a leading icon.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeaderData {
    /// Title text.
    pub title: String,
    /// Leading icon glyph.
    pub leading_icon: LeadingIcon,
}

/// Row of a navigation menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemData {
    /// Host drawable name.
    pub icon: Option<String>,
    /// Icon tint.
    pub icon_color: Color,
    /// Label.
    pub text: String,
    /// Label size in sp.
    pub text_size: f32,
    /// Host font resource name.
    pub typeface: Option<String>,
}

/// News teaser card.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewsCardData {
    /// Headline.
    pub title: String,
    /// Teaser text.
    pub description: String,
    /// Publication time, preformatted.
    pub date: String,
    /// Thumbnail location.
    pub image_url: Option<String>,
}

/// Notification list card.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationCardData {
    /// Title.
    pub title: String,
    /// Timestamp, preformatted.
    pub date_time: String,
    /// Unread marker.
    pub is_new: bool,
    /// Category chip label.
    pub chip_text: Option<String>,
    /// Category chip background.
    pub chip_bg: Option<Color>,
    /// Category chip text color.
    pub chip_text_color: Option<Color>,
}

/// What an element is.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// Static text.
    Text(TextData),
    /// Editable text field.
    Input(InputData),
    /// Push button.
    Button(ButtonData),
    /// Icon with badge.
    IconButton(IconButtonData),
    /// Linear container.
    Container(ContainerData),
    /// Toggleable chip.
    Chip(ChipData),
    /// Single-select chip group.
    ChipGroup(ChipGroupData),
    /// Remote image.
    Image(ImageData),
    /// Progress indicator.
    Progress(ProgressData),
    /// Toolbar.
    Header(HeaderData),
    /// Menu row.
    MenuItem(MenuItemData),
    /// News card.
    NewsCard(NewsCardData),
    /// Notification card.
    NotificationCard(NotificationCardData),
    /// Visible stand-in for an unrecognized component type.
    ErrorPlaceholder {
        /// The unrecognized type tag.
        component_type: String,
        /// Text shown on screen.
        message: String,
    },
}

impl ElementKind {
    /// Short name for outlines and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Input(_) => "Input",
            Self::Button(_) => "Button",
            Self::IconButton(_) => "IconButton",
            Self::Container(_) => "Container",
            Self::Chip(_) => "Chip",
            Self::ChipGroup(_) => "ChipGroup",
            Self::Image(_) => "Image",
            Self::Progress(_) => "Progress",
            Self::Header(_) => "Header",
            Self::MenuItem(_) => "MenuItem",
            Self::NewsCard(_) => "NewsCard",
            Self::NotificationCard(_) => "NotificationCard",
            Self::ErrorPlaceholder { .. } => "ErrorPlaceholder",
        }
    }

    /// True for editable fields.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }

    /// True for kinds whose text color follows `textColor`.
    #[must_use]
    pub const fn is_text_bearing(&self) -> bool {
        matches!(
            self,
            Self::Text(_) | Self::Input(_) | Self::Button(_) | Self::Chip(_) | Self::ErrorPlaceholder { .. }
        )
    }

    /// True for kinds that hold child elements.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Container(_))
    }

    /// Text a sighted user reads on this element, if any.
    #[must_use]
    pub fn visible_text(&self) -> Option<String> {
        let text = match self {
            Self::Text(data) => data.display_text(),
            Self::Input(data) => data.value.clone(),
            Self::Button(data) => data.text.clone(),
            Self::Chip(data) => data.text.clone(),
            Self::ErrorPlaceholder { message, .. } => message.clone(),
            _ => return None,
        };
        (!text.trim().is_empty()).then_some(text)
    }
}
