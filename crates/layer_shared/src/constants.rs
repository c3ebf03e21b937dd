//! # Engine Constants
//!
//! Values both the engine and the host shell agree on.
//! Prop keys live here so a typo fails to compile instead of silently
//! reading nothing.

// =============================================================================
// GENERIC PROP KEYS
// =============================================================================

/// Flat background color.
pub const PROP_BACKGROUND_COLOR: &str = "backgroundColor";
/// Corner radius in dp.
pub const PROP_BORDER_RADIUS: &str = "border_radius";
/// Stroke color.
pub const PROP_BORDER_COLOR: &str = "border_color";
/// Left margin in dp.
pub const PROP_MARGIN_LEFT: &str = "margin_left";
/// Top margin in dp.
pub const PROP_MARGIN_TOP: &str = "margin_top";
/// Right margin in dp.
pub const PROP_MARGIN_RIGHT: &str = "margin_right";
/// Bottom margin in dp.
pub const PROP_MARGIN_BOTTOM: &str = "margin_bottom";
/// `"hidden"` collapses the element.
pub const PROP_VISIBILITY: &str = "visibility";
/// Enabled flag, default true.
pub const PROP_ENABLED: &str = "enabled";
/// Opaque host action string.
pub const PROP_ACTION: &str = "action";
/// Marks a submit trigger.
pub const PROP_SUBMIT: &str = "submit";
/// Validation rule list.
pub const PROP_RULES: &str = "rules";
/// Re-validate a field on every change.
pub const PROP_VALIDATE_ON_CHANGE: &str = "validateOnChange";
/// Text color for text-bearing elements.
pub const PROP_TEXT_COLOR: &str = "textColor";
/// Layout weight.
pub const PROP_FLEX: &str = "flex";
/// Layout gravity (`"center"`).
pub const PROP_GRAVITY: &str = "gravity";
/// Text alignment applied by the engine.
pub const PROP_ALIGN: &str = "align";
/// Analytics event name emitted on click.
pub const PROP_ANALYTICS: &str = "analytics";
/// Emits `Click` when no other body handler applies.
pub const PROP_CLICKABLE: &str = "clickable";
/// Header: leading icon opens a menu instead of navigating back.
pub const PROP_SHOW_MENU: &str = "showMenu";

// =============================================================================
// ACCESSIBILITY PROP KEYS
// =============================================================================

/// `yes` / `no` / `auto`.
pub const PROP_IMPORTANT_FOR_A11Y: &str = "importantForAccessibility";
/// Content description.
pub const PROP_A11Y_LABEL: &str = "accessibilityLabel";
/// Click action hint.
pub const PROP_A11Y_HINT: &str = "accessibilityHint";
/// Heading marker.
pub const PROP_IS_HEADING: &str = "isHeading";

// =============================================================================
// FOCUS NAVIGATION PROP KEYS
// =============================================================================

/// Id of the element focused when moving up.
pub const PROP_NEXT_FOCUS_UP: &str = "next_focus_up";
/// Id of the element focused when moving down.
pub const PROP_NEXT_FOCUS_DOWN: &str = "next_focus_down";
/// Id of the element focused when moving left.
pub const PROP_NEXT_FOCUS_LEFT: &str = "next_focus_left";
/// Id of the element focused when moving right.
pub const PROP_NEXT_FOCUS_RIGHT: &str = "next_focus_right";

// =============================================================================
// DEFAULTS
// =============================================================================

/// Header action when `showMenu` is set.
pub const ACTION_MENU_OPEN: &str = "menu:open";
/// Header action otherwise.
pub const ACTION_NAVIGATE_BACK: &str = "navigate:back";

/// Per-subscriber event buffer.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Alpha applied to disabled elements.
pub const DISABLED_ALPHA: f32 = 0.5;

/// Stroke width for borders and error outlines, in dp.
pub const STROKE_WIDTH_DP: f32 = 2.0;

/// Border color of a field showing an error.
pub const ERROR_BORDER_COLOR: &str = "#FF0000";
/// Border color of a field after its error is cleared.
pub const NEUTRAL_BORDER_COLOR: &str = "#CCCCCC";

/// Screen loaded when the host starts.
pub const DEFAULT_INITIAL_SCREEN: &str = "login_screen";

// =============================================================================
// DEFAULT VALIDATION MESSAGES
// =============================================================================

/// `required` rule.
pub const MSG_REQUIRED: &str = "Required field";
/// `email` rule.
pub const MSG_EMAIL: &str = "Invalid email";
/// `cpf` rule.
pub const MSG_CPF: &str = "Invalid document number";
/// `match` rule.
pub const MSG_MATCH: &str = "Fields do not match";
/// `regex` rule.
pub const MSG_REGEX: &str = "Invalid format";

/// `minlength` rule message for a given minimum.
#[must_use]
pub fn min_length_message(min: i32) -> String {
    format!("Minimum of {min} characters")
}
