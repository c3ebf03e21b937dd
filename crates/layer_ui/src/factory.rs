//! # Component Factory
//!
//! Maps a schema type tag plus its props to a detached [`Element`] and a
//! [`Behavior`] descriptor. Pure: no registry access, no events.
//!
//! Unrecognized tags never fail. They build a visible placeholder so a
//! screen author notices the typo while the rest of the screen renders.

use crate::element::{
    ButtonData, ButtonVariant, ChipData, ChipGroupColors, ChipGroupData, ContainerData, Element,
    ElementFlags, ElementKind, HeaderData, IconButtonData, ImageData, InputData, KeyboardType,
    LeadingIcon, MenuItemData, NewsCardData, NotificationCardData, ProgressData, TextData,
    TextSpan, TextStyle,
};
use crate::layout::{Density, Direction, Gravity, Insets, LayoutParams, SizeSpec};
use crate::style::{parse_color_prop, Background, Color, Stroke, Visibility};
use layer_shared::constants::{
    ACTION_MENU_OPEN, ACTION_NAVIGATE_BACK, PROP_BACKGROUND_COLOR, PROP_BORDER_COLOR,
    PROP_BORDER_RADIUS, PROP_ENABLED, PROP_FLEX, PROP_MARGIN_BOTTOM, PROP_MARGIN_LEFT,
    PROP_MARGIN_RIGHT, PROP_MARGIN_TOP, PROP_SHOW_MENU, PROP_TEXT_COLOR, PROP_VISIBILITY,
    STROKE_WIDTH_DP,
};
use layer_shared::Props;

// =============================================================================
// DEFAULTS
// =============================================================================

const DEFAULT_INPUT_HEIGHT_DP: i32 = 48;
const DEFAULT_ICON: &str = "ds_icon_notification";
const DEFAULT_CHIP_SPACING_DP: i32 = 12;
const UNSELECTED_CHIP_BG: Color = Color::hex(0xF3F3_F3FF);
const DETAILS_IMAGE_HEIGHT_DP: f32 = 310.0;
const PROGRESS_COLOR: Color = Color::hex(0x0E64_D2FF);
const MENU_ICON_COLOR: Color = Color::hex(0x4242_42FF);
const MENU_TEXT_SIZE_SP: f32 = 16.0;
const SPAN_DEFAULT_COLOR: Color = Color::BLACK;
/// Placeholder padding, in raw px.
const PLACEHOLDER_PADDING_PX: f32 = 20.0;

// =============================================================================
// BEHAVIOR
// =============================================================================

/// How the engine wires interaction for a freshly built element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// No kind-specific interaction.
    Plain,
    /// Text field: change events, validation, submit gating.
    Input,
    /// Button: submit or action on click.
    Actionable,
    /// Toolbar whose leading icon emits an action.
    HeaderContainer {
        /// Action used when the component has no `action` prop.
        default_action: &'static str,
    },
    /// Menu row emitting its `action` on click.
    MenuItem,
    /// Holds children that the engine builds recursively.
    Container,
    /// Chip or chip group with selection state.
    Selectable,
}

/// Output of a factory.
#[derive(Debug, Clone, PartialEq)]
pub struct Built {
    /// The detached element.
    pub element: Element,
    /// Interaction descriptor.
    pub behavior: Behavior,
}

impl Built {
    fn new(element: Element, behavior: Behavior) -> Self {
        Self { element, behavior }
    }
}

/// Seam between the engine and whatever builds elements.
///
/// Returning `None` drops the component from the screen.
pub trait ElementFactory: Send {
    /// Builds one element.
    fn create(&self, component_type: &str, props: &Props) -> Option<Built>;
}

// =============================================================================
// COMPONENT FACTORY
// =============================================================================

/// The built-in factory covering every known component type.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentFactory {
    density: Density,
}

impl ComponentFactory {
    /// Creates a factory converting dp with the given density.
    #[must_use]
    pub const fn new(density: Density) -> Self {
        Self { density }
    }

    /// Density used for dp to px conversion.
    #[must_use]
    pub const fn density(&self) -> Density {
        self.density
    }

    /// Builds an element for `component_type`. Never fails.
    #[must_use]
    pub fn build(&self, component_type: &str, props: &Props) -> Built {
        let mut built = match component_type {
            "Text" => Built::new(self.text(props), Behavior::Plain),
            "Input" => Built::new(self.input(props), Behavior::Input),
            "Button" => Built::new(self.button(props), Behavior::Actionable),
            "IconButton" => Built::new(self.icon_button(props), Behavior::Plain),
            "HorizontalContainer" => {
                Built::new(self.container(Direction::Horizontal), Behavior::Container)
            }
            "VerticalContainer" => Built::new(self.container(Direction::Vertical), Behavior::Container),
            "SelectableChip" => Built::new(self.chip(props), Behavior::Selectable),
            "FlowContainer" => Built::new(self.chip_group(props), Behavior::Selectable),
            "DetailsImage" => Built::new(self.details_image(props), Behavior::Plain),
            "ProgressBar" => Built::new(self.progress(props), Behavior::Plain),
            "Header" => self.header(props),
            "MenuItem" => Built::new(self.menu_item(props), Behavior::MenuItem),
            "NewsCard" => Built::new(self.news_card(props), Behavior::Plain),
            "NotificationCard" => Built::new(self.notification_card(props), Behavior::Plain),
            unknown => Built::new(self.placeholder(unknown), Behavior::Plain),
        };
        built.element.component_type = component_type.to_owned();
        self.apply_generic(&mut built.element, props);
        built
    }

    fn px(&self, dp: f32) -> f32 {
        self.density.px(dp)
    }

    #[allow(clippy::cast_precision_loss)]
    fn px_i(&self, dp: i32) -> f32 {
        self.px(dp as f32)
    }

    // -------------------------------------------------------------------------
    // Per-type builders
    // -------------------------------------------------------------------------

    fn placeholder(&self, component_type: &str) -> Element {
        let mut element = Element::new(
            component_type,
            ElementKind::ErrorPlaceholder {
                component_type: component_type.to_owned(),
                message: format!("ERROR: component '{component_type}' not mapped"),
            },
        )
        .with_layout(LayoutParams::default().with_padding(Insets::uniform(PLACEHOLDER_PADDING_PX)));
        element.style.text_color = Some(Color::RED);
        element.style.background = Some(Background {
            fill: Color::YELLOW,
            ..Background::default()
        });
        element
    }

    fn text(&self, props: &Props) -> Element {
        let spans = props
            .get_list("spans")
            .map(|raw| {
                raw.iter()
                    .filter_map(|value| value.as_map())
                    .map(|span| TextSpan {
                        text: span.get_string("text").unwrap_or_default(),
                        color: parse_color_prop("spans.color", span.get_str("color"))
                            .unwrap_or(SPAN_DEFAULT_COLOR),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Element::new(
            "Text",
            ElementKind::Text(TextData {
                text: props.get_string("title").unwrap_or_default(),
                style: TextStyle::parse(props.get_string("textStyle").as_deref()),
                spans,
                typeface: props.get_string("typeface"),
            }),
        )
    }

    fn input(&self, props: &Props) -> Element {
        let height = props.get_i32("height").unwrap_or(DEFAULT_INPUT_HEIGHT_DP);
        let mut element = Element::new(
            "Input",
            ElementKind::Input(InputData {
                value: String::new(),
                hint: props.get_string("hint").unwrap_or_default(),
                keyboard: KeyboardType::parse(props.get_string("keyboardType").as_deref()),
                error: None,
            }),
        )
        .with_layout(LayoutParams::fixed_height(self.px_i(height)));
        element.flags.set(ElementFlags::FOCUSABLE);
        element
    }

    fn button(&self, props: &Props) -> Element {
        let mut element = Element::new(
            "Button",
            ElementKind::Button(ButtonData {
                text: props.get_string("text").unwrap_or_default(),
                variant: ButtonVariant::parse(props.get_string("buttonType").as_deref()),
                typeface: props.get_string("typeface"),
            }),
        );
        element.flags.set(ElementFlags::CLICKABLE | ElementFlags::FOCUSABLE);
        element
    }

    fn icon_button(&self, props: &Props) -> Element {
        Element::new(
            "IconButton",
            ElementKind::IconButton(IconButtonData {
                icon: props.get_string("icon").unwrap_or_else(|| DEFAULT_ICON.to_owned()),
                description: props.get_string("iconDescription"),
                badge_description: props.get_string("badgeDescription"),
                badge_count: number_as_i32(props, "badgeCount").unwrap_or(0),
            }),
        )
        .with_layout(LayoutParams::wrap())
    }

    fn container(&self, direction: Direction) -> Element {
        let gravity = match direction {
            Direction::Horizontal => Gravity::CenterVertical,
            Direction::Vertical => Gravity::Start,
        };
        Element::new("Container", ElementKind::Container(ContainerData { direction, gravity }))
    }

    fn chip(&self, props: &Props) -> Element {
        let mut element = Element::new(
            "SelectableChip",
            ElementKind::Chip(ChipData {
                text: props.get_string("text").unwrap_or_default(),
                selected: false,
            }),
        )
        .with_layout(LayoutParams::wrap());
        element.flags.set(ElementFlags::CLICKABLE);
        element
    }

    fn chip_group(&self, props: &Props) -> Element {
        let spacing = number_as_i32(props, "chipSpacing").unwrap_or(DEFAULT_CHIP_SPACING_DP);
        let selected_bg = parse_color_prop("selectedBg", props.get_str("selectedBg"));
        let selected_text = parse_color_prop("selectedText", props.get_str("selectedText"));
        let colors = match (selected_bg, selected_text) {
            (Some(selected_bg), Some(selected_text)) => Some(ChipGroupColors {
                selected_bg,
                selected_text,
                unselected_bg: UNSELECTED_CHIP_BG,
                unselected_text: Color::BLACK,
            }),
            _ => None,
        };
        let mut element = Element::new(
            "FlowContainer",
            ElementKind::ChipGroup(ChipGroupData {
                items: props.get_string_list("items"),
                spacing: self.px_i(spacing),
                colors,
                selected: None,
            }),
        );
        element.flags.set(ElementFlags::CLICKABLE);
        element
    }

    fn details_image(&self, props: &Props) -> Element {
        Element::new(
            "DetailsImage",
            ElementKind::Image(ImageData {
                url: props.get_string("imageUrl"),
                center_crop: true,
            }),
        )
        .with_layout(LayoutParams::fixed_height(self.px(DETAILS_IMAGE_HEIGHT_DP)))
    }

    fn progress(&self, props: &Props) -> Element {
        let full_screen = props.get_flag("fullScreen") == Some(true);
        let color = match props.get_string("color") {
            Some(raw) => parse_color_prop("color", Some(&raw)).unwrap_or(PROGRESS_COLOR),
            None => PROGRESS_COLOR,
        };
        let mut layout = LayoutParams::wrap().with_gravity(Gravity::Center);
        if full_screen {
            layout.weight = 1.0;
            layout.height = SizeSpec::MatchParent;
        }
        Element::new(
            "ProgressBar",
            ElementKind::Progress(ProgressData {
                indeterminate: props.get_flag("isIndeterminate").unwrap_or(true),
                color,
                full_screen,
            }),
        )
        .with_layout(layout)
    }

    fn header(&self, props: &Props) -> Built {
        let show_menu = props.get_flag(PROP_SHOW_MENU) == Some(true);
        let (leading_icon, default_action) = if show_menu {
            (LeadingIcon::Menu, ACTION_MENU_OPEN)
        } else {
            (LeadingIcon::Back, ACTION_NAVIGATE_BACK)
        };
        let mut element = Element::new(
            "Header",
            ElementKind::Header(HeaderData {
                title: props.get_string("title").unwrap_or_default(),
                leading_icon,
            }),
        );
        element.a11y.heading = true;
        Built::new(element, Behavior::HeaderContainer { default_action })
    }

    fn menu_item(&self, props: &Props) -> Element {
        let icon_color = props
            .get_string("iconColor")
            .and_then(|raw| parse_color_prop("iconColor", Some(&raw)))
            .unwrap_or(MENU_ICON_COLOR);
        let padding = Insets::symmetric(self.px(24.0), self.px(16.0));
        let mut element = Element::new(
            "MenuItem",
            ElementKind::MenuItem(MenuItemData {
                icon: props.get_string("icon"),
                icon_color,
                text: props.get_string("text").unwrap_or_default(),
                text_size: MENU_TEXT_SIZE_SP,
                typeface: props.get_string("typeface"),
            }),
        )
        .with_layout(
            LayoutParams::default()
                .with_padding(padding)
                .with_gravity(Gravity::CenterVertical),
        );
        element.style.text_color = Some(
            props
                .get_string(PROP_TEXT_COLOR)
                .and_then(|raw| parse_color_prop(PROP_TEXT_COLOR, Some(&raw)))
                .unwrap_or(Color::BLACK),
        );
        element.flags.set(ElementFlags::CLICKABLE | ElementFlags::FOCUSABLE);
        element
    }

    fn news_card(&self, props: &Props) -> Element {
        Element::new(
            "NewsCard",
            ElementKind::NewsCard(NewsCardData {
                title: props.get_string("title").unwrap_or_default(),
                description: props.get_string("description").unwrap_or_default(),
                date: props.get_string("date").unwrap_or_default(),
                image_url: props.get_string("imageUrl"),
            }),
        )
    }

    fn notification_card(&self, props: &Props) -> Element {
        Element::new(
            "NotificationCard",
            ElementKind::NotificationCard(NotificationCardData {
                title: props.get_string("title").unwrap_or_default(),
                date_time: props
                    .get_string("date")
                    .or_else(|| props.get_string("dateTime"))
                    .unwrap_or_default(),
                is_new: props.get_flag("isNew").unwrap_or(false),
                chip_text: props.get_string("chipText"),
                chip_bg: parse_color_prop("chipBgColor", props.get_str("chipBgColor")),
                chip_text_color: parse_color_prop("chipTextColor", props.get_str("chipTextColor")),
            }),
        )
    }

    // -------------------------------------------------------------------------
    // Generic props
    // -------------------------------------------------------------------------

    fn apply_generic(&self, element: &mut Element, props: &Props) {
        let fill = parse_color_prop(PROP_BACKGROUND_COLOR, props.get_str(PROP_BACKGROUND_COLOR));
        let border = parse_color_prop(PROP_BORDER_COLOR, props.get_str(PROP_BORDER_COLOR));
        let radius = props.get_f32(PROP_BORDER_RADIUS).unwrap_or(0.0);

        if fill.is_some() || border.is_some() || radius > 0.0 {
            let fill = fill.unwrap_or(Color::TRANSPARENT);
            if matches!(element.kind, ElementKind::Button(_)) {
                element.style.tint = Some(fill);
            } else {
                element.style.background = Some(Background {
                    fill,
                    corner_radius: self.px(radius),
                    stroke: border.map(|color| Stroke {
                        width: self.px(STROKE_WIDTH_DP),
                        color,
                    }),
                });
            }
        }

        element.style.visibility = Visibility::from_prop(props.get_string(PROP_VISIBILITY).as_deref());

        if element.kind.is_text_bearing() {
            if let Some(color) = parse_color_prop(PROP_TEXT_COLOR, props.get_str(PROP_TEXT_COLOR)) {
                element.style.text_color = Some(color);
            }
        }

        let margin = |key: &str| self.px_i(props.get_i32(key).unwrap_or(0));
        element.layout.margin = Insets::new(
            margin(PROP_MARGIN_LEFT),
            margin(PROP_MARGIN_TOP),
            margin(PROP_MARGIN_RIGHT),
            margin(PROP_MARGIN_BOTTOM),
        );
        let flex = props.get_f32(PROP_FLEX).unwrap_or(0.0);
        if flex > 0.0 {
            element.layout.weight = flex;
            element.layout.width = SizeSpec::Fixed(0.0);
        }

        let enabled = props.get_flag(PROP_ENABLED).unwrap_or(true);
        element.flags.assign(ElementFlags::ENABLED, enabled);
    }
}

/// Strict numeric read: numeric strings do not count.
#[allow(clippy::cast_possible_truncation)]
fn number_as_i32(props: &Props, key: &str) -> Option<i32> {
    props.get(key).and_then(|value| value.as_f64()).map(|n| n as i32)
}

impl ElementFactory for ComponentFactory {
    fn create(&self, component_type: &str, props: &Props) -> Option<Built> {
        Some(self.build(component_type, props))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(json: &str) -> Props {
        serde_json::from_str(json).unwrap()
    }

    fn factory() -> ComponentFactory {
        ComponentFactory::new(Density(2.0))
    }

    #[test]
    fn test_unknown_type_placeholder() {
        let built = factory().build("Carousel", &Props::new());
        assert_eq!(built.behavior, Behavior::Plain);
        assert_eq!(built.element.component_type, "Carousel");
        match &built.element.kind {
            ElementKind::ErrorPlaceholder { message, .. } => {
                assert_eq!(message, "ERROR: component 'Carousel' not mapped");
            }
            other => panic!("unexpected kind {other:?}"),
        }
        assert_eq!(built.element.style.text_color, Some(Color::RED));
        assert_eq!(built.element.style.background.unwrap().fill, Color::YELLOW);
        assert_eq!(built.element.layout.padding, Insets::uniform(20.0));
    }

    #[test]
    fn test_input_defaults() {
        let built = factory().build("Input", &props(r#"{"hint": "Email", "keyboardType": "email"}"#));
        assert_eq!(built.behavior, Behavior::Input);
        assert_eq!(built.element.layout.height, SizeSpec::Fixed(96.0));
        let ElementKind::Input(data) = &built.element.kind else {
            panic!("not an input");
        };
        assert_eq!(data.hint, "Email");
        assert_eq!(data.keyboard, KeyboardType::Email);
        assert!(data.value.is_empty());
    }

    #[test]
    fn test_button_gets_tint_not_shape() {
        let built = factory().build("Button", &props(r##"{"text": "Go", "backgroundColor": "#FF0000"}"##));
        assert_eq!(built.behavior, Behavior::Actionable);
        assert_eq!(built.element.style.tint, Some(Color::RED));
        assert!(built.element.style.background.is_none());
    }

    #[test]
    fn test_background_shape() {
        let built = factory().build(
            "VerticalContainer",
            &props(r##"{"border_radius": 8, "border_color": "#000000"}"##),
        );
        let background = built.element.style.background.unwrap();
        assert_eq!(background.fill, Color::TRANSPARENT);
        assert_eq!(background.corner_radius, 16.0);
        let stroke = background.stroke.unwrap();
        assert_eq!(stroke.width, 4.0);
        assert_eq!(stroke.color, Color::BLACK);
    }

    #[test]
    fn test_malformed_color_is_skipped() {
        let built = factory().build("Text", &props(r#"{"title": "Hi", "backgroundColor": "bluish"}"#));
        assert!(built.element.style.background.is_none());
        assert_eq!(built.element.kind.visible_text().as_deref(), Some("Hi"));
    }

    #[test]
    fn test_margins_flex_visibility_enabled() {
        let built = factory().build(
            "Text",
            &props(r#"{"margin_top": 8, "margin_left": "4", "flex": 1, "visibility": "hidden", "enabled": false}"#),
        );
        let element = built.element;
        assert_eq!(element.layout.margin, Insets::new(8.0, 16.0, 0.0, 0.0));
        assert_eq!(element.layout.weight, 1.0);
        assert_eq!(element.layout.width, SizeSpec::Fixed(0.0));
        assert!(!element.is_visible());
        assert!(!element.is_enabled());
    }

    #[test]
    fn test_header_default_action() {
        let back = factory().build("Header", &props(r#"{"title": "Home"}"#));
        assert_eq!(back.behavior, Behavior::HeaderContainer { default_action: "navigate:back" });
        let menu = factory().build("Header", &props(r#"{"showMenu": true}"#));
        assert_eq!(menu.behavior, Behavior::HeaderContainer { default_action: "menu:open" });
        let ElementKind::Header(data) = &menu.element.kind else {
            panic!("not a header");
        };
        assert_eq!(data.leading_icon, LeadingIcon::Menu);
    }

    #[test]
    fn test_chip_group_colors_need_both() {
        let only_bg = factory().build("FlowContainer", &props(r##"{"items": ["A", "B"], "selectedBg": "#0000FF"}"##));
        let ElementKind::ChipGroup(data) = &only_bg.element.kind else {
            panic!("not a chip group");
        };
        assert_eq!(data.items, vec!["A", "B"]);
        assert_eq!(data.spacing, 24.0);
        assert!(data.colors.is_none());

        let both = factory().build(
            "FlowContainer",
            &props(r##"{"selectedBg": "#0000FF", "selectedText": "#FFFFFF", "chipSpacing": 4}"##),
        );
        let ElementKind::ChipGroup(data) = &both.element.kind else {
            panic!("not a chip group");
        };
        assert_eq!(data.spacing, 8.0);
        assert_eq!(data.colors.unwrap().unselected_bg, UNSELECTED_CHIP_BG);
    }

    #[test]
    fn test_progress_and_menu_defaults() {
        let progress = factory().build("ProgressBar", &props(r#"{"color": "nope", "fullScreen": true}"#));
        let ElementKind::Progress(data) = progress.element.kind else {
            panic!("not a progress bar");
        };
        assert!(data.indeterminate);
        assert_eq!(data.color, PROGRESS_COLOR);
        assert_eq!(progress.element.layout.weight, 1.0);

        let menu = factory().build("MenuItem", &props(r#"{"text": "Logout"}"#));
        assert_eq!(menu.behavior, Behavior::MenuItem);
        assert_eq!(menu.element.style.text_color, Some(Color::BLACK));
        assert_eq!(menu.element.layout.padding, Insets::symmetric(48.0, 32.0));
    }

    #[test]
    fn test_text_spans() {
        let built = factory().build(
            "Text",
            &props(r##"{"title": "x", "spans": [{"text": "Hello "}, {"text": "you", "color": "#FF0000"}]}"##),
        );
        let ElementKind::Text(data) = &built.element.kind else {
            panic!("not text");
        };
        assert_eq!(data.spans[0].color, Color::BLACK);
        assert_eq!(data.spans[1].color, Color::RED);
        assert_eq!(data.display_text(), "Hello you");
    }

    #[test]
    fn test_notification_date_fallback() {
        let built = factory().build("NotificationCard", &props(r#"{"dateTime": "10:00", "isNew": true}"#));
        let ElementKind::NotificationCard(data) = &built.element.kind else {
            panic!("not a notification card");
        };
        assert_eq!(data.date_time, "10:00");
        assert!(data.is_new);
    }
}
