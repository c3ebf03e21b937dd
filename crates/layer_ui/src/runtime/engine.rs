//! # Runtime Engine
//!
//! Wraps the factory with everything that makes a screen live:
//!
//! ```text
//! Component ──> factory ──> Element + Behavior
//!                              │
//!          engine props ◄──────┤  (align, gravity, accessibility)
//!          registries  ◄───────┤  (views, inputs, rules, submit button)
//!          handlers    ◄───────┘  (click / text-change wiring)
//!
//! host input ──> handlers ──> validation ──> EventStream
//! ```
//!
//! The engine is single-threaded and driven through `&mut self`. Only the
//! event stream is shared with other threads.

use super::registry::Registries;
use super::validation::{evaluate, CompiledRule};
use crate::config::EngineConfig;
use crate::element::{
    A11yImportance, ContainerData, Element, ElementFlags, ElementId, ElementKind, ElementTree,
    LiveRegion,
};
use crate::events::{EventStream, EventSubscription};
use crate::factory::{Behavior, Built, ComponentFactory, ElementFactory};
use crate::input::{Region, UserInput};
use crate::layout::Gravity;
use crate::style::{Background, Color, Stroke, TextAlign};
use layer_shared::constants::{
    ERROR_BORDER_COLOR, NEUTRAL_BORDER_COLOR, PROP_A11Y_HINT, PROP_A11Y_LABEL, PROP_ACTION,
    PROP_ALIGN, PROP_ANALYTICS, PROP_CLICKABLE, PROP_GRAVITY, PROP_IMPORTANT_FOR_A11Y,
    PROP_IS_HEADING, PROP_NEXT_FOCUS_DOWN, PROP_NEXT_FOCUS_LEFT, PROP_NEXT_FOCUS_RIGHT,
    PROP_NEXT_FOCUS_UP, PROP_SUBMIT, PROP_VALIDATE_ON_CHANGE, STROKE_WIDTH_DP,
};
use layer_shared::{Component, Props, UiEvent, ValidationErrors, ValidationResult, ValidationRule};
use std::collections::HashMap;

/// Corner radius given to an input that had no background before its
/// first error border, in dp.
const ERROR_BORDER_RADIUS_DP: f32 = 5.0;

// =============================================================================
// HANDLERS
// =============================================================================

/// What a body click does.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BodyHandler {
    /// Validate the whole form, emit `Submit` if valid.
    Submit,
    /// Emit `Action` with the (possibly empty) action.
    Action(String),
    /// Emit `Action`, then run submit handling if `submit` is set.
    GenericAction { action: String, submit: bool },
    /// Flip a chip's selection.
    ToggleChip,
    /// Emit `Click`.
    Click,
}

/// Interaction wired to one element.
#[derive(Debug, Clone, Default)]
struct Handlers {
    component_id: String,
    body: Option<BodyHandler>,
    leading_icon: Option<String>,
    analytics: Option<String>,
    select_items: bool,
    /// `Some` for inputs; the flag is `validateOnChange`.
    text_change: Option<bool>,
}

// =============================================================================
// ENGINE
// =============================================================================

/// Interprets components into a live element tree.
pub struct RuntimeEngine {
    config: EngineConfig,
    factory: Box<dyn ElementFactory>,
    tree: ElementTree,
    registries: Registries,
    handlers: HashMap<ElementId, Handlers>,
    events: EventStream,
    announcement: Option<String>,
}

impl RuntimeEngine {
    /// Creates an engine with the built-in factory.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_factory(config, Box::new(ComponentFactory::new(config.density)))
    }

    /// Creates an engine with a custom factory.
    #[must_use]
    pub fn with_factory(config: EngineConfig, factory: Box<dyn ElementFactory>) -> Self {
        Self {
            config,
            factory,
            tree: ElementTree::new(),
            registries: Registries::default(),
            handlers: HashMap::new(),
            events: EventStream::new(config.event_capacity),
            announcement: None,
        }
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The element tree.
    #[must_use]
    pub fn tree(&self) -> &ElementTree {
        &self.tree
    }

    /// Mutable element tree, for hosts that manage their own containers.
    pub fn tree_mut(&mut self) -> &mut ElementTree {
        &mut self.tree
    }

    /// Current registries.
    #[must_use]
    pub fn registries(&self) -> &Registries {
        &self.registries
    }

    /// Adds an empty vertical container as a new root, for use as a
    /// render target.
    pub fn create_root_container(&mut self) -> ElementId {
        self.tree.add_root(Element::new(
            "VerticalContainer",
            ElementKind::Container(ContainerData::default()),
        ))
    }

    /// Element registered under a component id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<ElementId> {
        self.registries.views.get(id).copied()
    }

    /// The designated submit trigger.
    #[must_use]
    pub fn submit_button(&self) -> Option<ElementId> {
        self.registries.submit_button
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Opens a new event subscription.
    #[must_use]
    pub fn subscribe(&self) -> EventSubscription {
        self.events.subscribe()
    }

    /// Handle to the event stream.
    #[must_use]
    pub fn event_stream(&self) -> EventStream {
        self.events.clone()
    }

    fn emit(&self, event: UiEvent) {
        tracing::trace!("Emitting {:?}", event);
        self.events.publish(&event);
    }

    // -------------------------------------------------------------------------
    // View creation
    // -------------------------------------------------------------------------

    /// Builds a component (and its children) into the tree as a new root.
    ///
    /// Returns `None` if the factory rejected the component.
    pub fn create_view(&mut self, component: &Component) -> Option<ElementId> {
        let Built { mut element, behavior } = self
            .factory
            .create(&component.component_type, &component.props)?;

        let id = component.id_or_empty();
        if !id.is_empty() {
            element.component_id = Some(id.to_owned());
        }
        apply_engine_props(&mut element, &component.props);

        let element_id = self.tree.add_root(element);
        self.attach_behavior(element_id, behavior, component);

        if !id.is_empty() {
            self.registries.views.insert(id, element_id);
        }

        if behavior == Behavior::Container {
            for child in &component.children {
                if let Some(child_id) = self.create_view(child) {
                    self.tree.attach(child_id, element_id);
                }
            }
        }
        Some(element_id)
    }

    fn attach_behavior(&mut self, element_id: ElementId, behavior: Behavior, component: &Component) {
        let props = &component.props;
        let id = component.id_or_empty();
        let action = props.get_string(PROP_ACTION);
        let submit = props.get_flag(PROP_SUBMIT) == Some(true);

        let mut handlers = Handlers {
            component_id: id.to_owned(),
            ..Handlers::default()
        };

        match behavior {
            Behavior::Input => {
                if !id.is_empty() {
                    self.registries.inputs.insert(id, element_id);
                    let rules = ValidationRule::list_from_props(props);
                    self.registries.rules.insert(id, CompiledRule::compile_all(&rules));
                }
                handlers.text_change = Some(props.is_truthy(PROP_VALIDATE_ON_CHANGE));
            }
            Behavior::Actionable => {
                if submit {
                    self.registries.submit_button = Some(element_id);
                    let alpha = self.config.disabled_alpha;
                    if let Some(element) = self.tree.get_mut(element_id) {
                        element.set_enabled(false, alpha);
                    }
                    handlers.body = Some(BodyHandler::Submit);
                } else {
                    handlers.body = Some(BodyHandler::Action(action.clone().unwrap_or_default()));
                }
            }
            Behavior::HeaderContainer { default_action } => {
                handlers.leading_icon =
                    Some(action.clone().unwrap_or_else(|| default_action.to_owned()));
            }
            Behavior::MenuItem => {
                handlers.body = action.clone().map(BodyHandler::Action);
            }
            Behavior::Selectable => match self.tree.get(element_id).map(|e| &e.kind) {
                Some(ElementKind::Chip(_)) => handlers.body = Some(BodyHandler::ToggleChip),
                Some(ElementKind::ChipGroup(_)) => handlers.select_items = true,
                _ => {}
            },
            Behavior::Container | Behavior::Plain => {}
        }

        // An explicit action replaces whatever the kind wired.
        if let Some(action) = action {
            handlers.body = Some(BodyHandler::GenericAction { action, submit });
        }
        handlers.analytics = props.get_string(PROP_ANALYTICS).filter(|name| !name.is_empty());
        if handlers.body.is_none() && props.is_truthy(PROP_CLICKABLE) {
            handlers.body = Some(BodyHandler::Click);
        }

        if handlers.body.is_some() || handlers.analytics.is_some() {
            if let Some(element) = self.tree.get_mut(element_id) {
                element.flags.set(ElementFlags::CLICKABLE);
            }
        }
        self.handlers.insert(element_id, handlers);
    }

    // -------------------------------------------------------------------------
    // Interaction
    // -------------------------------------------------------------------------

    /// Routes host input. Input on disabled or hidden elements is ignored.
    ///
    /// Returns true if a handler ran.
    pub fn dispatch(&mut self, input: UserInput) -> bool {
        let interactive = self
            .tree
            .get(input.element())
            .is_some_and(Element::is_interactive);
        if !interactive {
            tracing::debug!("Ignoring input on inactive element {:?}", input.element());
            return false;
        }
        match input {
            UserInput::TextChanged { element, text } => self.input_text(element, &text),
            UserInput::Click { element, region } => self.click_region(element, region),
        }
    }

    /// Replaces an input's text and runs its change handler.
    ///
    /// Programmatic: runs even if the element is disabled.
    pub fn input_text(&mut self, element: ElementId, text: &str) -> bool {
        let Some(handlers) = self.handlers.get(&element) else {
            return false;
        };
        let Some(validate_on_change) = handlers.text_change else {
            return false;
        };
        let component_id = handlers.component_id.clone();

        if let Some(node) = self.tree.get_mut(element) {
            if let ElementKind::Input(data) = &mut node.kind {
                data.value = text.to_owned();
                node.mark_dirty();
            }
        }

        self.emit(UiEvent::change(component_id.as_str(), text));

        if validate_on_change {
            let error = self.field_error(&component_id, text);
            self.show_error_with_border(element, error.as_deref());
        }
        self.update_submit_state();
        true
    }

    /// Activates an element's body. Programmatic: runs even if disabled.
    pub fn click(&mut self, element: ElementId) -> bool {
        self.click_region(element, Region::Body)
    }

    /// Activates a region of an element.
    pub fn click_region(&mut self, element: ElementId, region: Region) -> bool {
        let Some(handlers) = self.handlers.get(&element).cloned() else {
            return false;
        };
        let id = handlers.component_id;
        match region {
            Region::Body => {
                if let Some(name) = &handlers.analytics {
                    self.emit(UiEvent::analytics(name.as_str()));
                }
                match handlers.body {
                    Some(body) => self.run_body(element, &id, body),
                    None => handlers.analytics.is_some(),
                }
            }
            Region::LeadingIcon => match handlers.leading_icon {
                Some(action) => {
                    tracing::debug!("Header '{}' clicked, action {}", id, action);
                    self.emit(UiEvent::action(id, action));
                    true
                }
                None => false,
            },
            Region::Item(index) => handlers.select_items && self.select_item(element, &id, index),
        }
    }

    fn run_body(&mut self, element: ElementId, id: &str, body: BodyHandler) -> bool {
        match body {
            BodyHandler::Submit => self.handle_submit(id),
            BodyHandler::Action(action) => self.emit(UiEvent::action(id, action)),
            BodyHandler::GenericAction { action, submit } => {
                self.emit(UiEvent::action(id, action));
                if submit {
                    self.handle_submit(id);
                }
            }
            BodyHandler::ToggleChip => {
                let Some(node) = self.tree.get_mut(element) else {
                    return false;
                };
                let ElementKind::Chip(chip) = &mut node.kind else {
                    return false;
                };
                chip.selected = !chip.selected;
                let selected = chip.selected;
                node.mark_dirty();
                self.emit(UiEvent::change(id, selected.to_string()));
            }
            BodyHandler::Click => self.emit(UiEvent::click(id)),
        }
        true
    }

    fn select_item(&mut self, element: ElementId, id: &str, index: usize) -> bool {
        let Some(node) = self.tree.get_mut(element) else {
            return false;
        };
        let ElementKind::ChipGroup(group) = &mut node.kind else {
            return false;
        };
        let Some(item) = group.items.get(index).cloned() else {
            return false;
        };
        group.selected = Some(index);
        node.mark_dirty();
        self.emit(UiEvent::change(id, item));
        true
    }

    fn handle_submit(&mut self, id: &str) {
        match self.validate(&[]) {
            ValidationResult::Valid => self.emit(UiEvent::submit(id)),
            ValidationResult::Invalid(errors) => {
                if let Some((field, message)) = errors.first() {
                    tracing::debug!("Submit '{}' blocked by '{}': {}", id, field, message);
                    self.announcement = Some(message.to_owned());
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    fn input_value(&self, id: &str) -> Option<&str> {
        let element = self.registries.inputs.get(id)?;
        match &self.tree.get(*element)?.kind {
            ElementKind::Input(data) => Some(data.value.as_str()),
            _ => None,
        }
    }

    fn field_error(&self, id: &str, value: &str) -> Option<String> {
        let rules = self.registries.rules.get(id)?;
        evaluate(rules, value, |target| self.input_value(target)).map(str::to_owned)
    }

    /// Enables the submit trigger iff every registered input passes.
    fn update_submit_state(&mut self) {
        let Some(button) = self.registries.submit_button else {
            return;
        };
        let all_valid = self.registries.inputs.ids().all(|id| {
            let value = self.input_value(id).unwrap_or("");
            self.field_error(id, value).is_none()
        });
        let alpha = self.config.disabled_alpha;
        if let Some(element) = self.tree.get_mut(button) {
            element.set_enabled(all_valid, alpha);
        }
    }

    fn targets(&self, ids: &[&str]) -> Vec<(String, ElementId)> {
        if ids.is_empty() {
            self.registries
                .inputs
                .iter()
                .map(|(id, element)| (id.to_owned(), *element))
                .collect()
        } else {
            ids.iter()
                .filter_map(|id| self.registries.inputs.get(id).map(|e| ((*id).to_owned(), *e)))
                .collect()
        }
    }

    /// Validates the named inputs, or every registered input if `ids` is
    /// empty. Unknown ids are skipped.
    ///
    /// Failing fields show their error; passing fields have it cleared.
    pub fn validate(&mut self, ids: &[&str]) -> ValidationResult {
        let outcomes: Vec<(String, ElementId, Option<String>)> = self
            .targets(ids)
            .into_iter()
            .map(|(id, element)| {
                let value = self.input_value(&id).unwrap_or("");
                let error = self.field_error(&id, value);
                (id, element, error)
            })
            .collect();

        let mut errors = ValidationErrors::new();
        for (id, element, error) in outcomes {
            match error {
                Some(message) => {
                    self.show_error(element, &message);
                    errors.insert(id, message);
                }
                None => self.clear_error(element),
            }
        }
        ValidationResult::from_errors(errors)
    }

    /// Clears the error display of the named inputs (all if empty)
    /// without evaluating rules.
    pub fn clear_validation(&mut self, ids: &[&str]) {
        for (_, element) in self.targets(ids) {
            self.clear_error(element);
        }
    }

    /// Sets or clears an input's error display, border included.
    pub fn set_error(&mut self, id: &str, message: Option<&str>) {
        if let Some(element) = self.registries.inputs.get(id).copied() {
            self.show_error_with_border(element, message);
        }
    }

    fn show_error_with_border(&mut self, element: ElementId, message: Option<&str>) {
        let border = match message {
            Some(message) => {
                self.show_error(element, message);
                ERROR_BORDER_COLOR
            }
            None => {
                self.clear_error(element);
                NEUTRAL_BORDER_COLOR
            }
        };
        let Ok(color) = Color::parse(border) else {
            return;
        };
        let density = self.config.density;
        if let Some(node) = self.tree.get_mut(element) {
            let background = node.style.background.get_or_insert(Background {
                fill: Color::TRANSPARENT,
                corner_radius: density.px(ERROR_BORDER_RADIUS_DP),
                stroke: None,
            });
            background.stroke = Some(Stroke {
                width: density.px(STROKE_WIDTH_DP),
                color,
            });
            node.mark_dirty();
        }
    }

    fn show_error(&mut self, element: ElementId, message: &str) {
        if let Some(node) = self.tree.get_mut(element) {
            if let ElementKind::Input(data) = &mut node.kind {
                data.error = Some(message.to_owned());
            }
            node.a11y.state_description = Some(message.to_owned());
            node.a11y.live_region = LiveRegion::Polite;
            node.a11y.announcements += 1;
            node.mark_dirty();
        }
    }

    fn clear_error(&mut self, element: ElementId) {
        if let Some(node) = self.tree.get_mut(element) {
            if let ElementKind::Input(data) = &mut node.kind {
                data.error = None;
            }
            node.a11y.state_description = None;
            node.a11y.live_region = LiveRegion::None;
            node.mark_dirty();
        }
    }

    // -------------------------------------------------------------------------
    // State access
    // -------------------------------------------------------------------------

    /// Enables or disables a registered element, with the matching opacity.
    ///
    /// Returns false if the id is unknown.
    pub fn set_enabled(&mut self, id: &str, enabled: bool) -> bool {
        let Some(element) = self.registries.views.get(id).copied() else {
            return false;
        };
        let alpha = self.config.disabled_alpha;
        match self.tree.get_mut(element) {
            Some(node) => {
                node.set_enabled(enabled, alpha);
                true
            }
            None => false,
        }
    }

    /// Current text of a registered input.
    #[must_use]
    pub fn get_value(&self, id: &str) -> Option<String> {
        self.input_value(id).map(str::to_owned)
    }

    /// First error from the last blocked submit, if not yet taken.
    pub fn take_announcement(&mut self) -> Option<String> {
        self.announcement.take()
    }

    /// Forgets the current screen: registries, handlers and any pending
    /// announcement. Elements already in the tree become inert.
    pub fn clear(&mut self) {
        let views = self.registries.views.len();
        self.registries.clear();
        self.handlers.clear();
        self.announcement = None;
        tracing::debug!("Engine cleared for the next screen ({} views dropped)", views);
    }
}

impl std::fmt::Debug for RuntimeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeEngine")
            .field("config", &self.config)
            .field("elements", &self.tree.len())
            .field("views", &self.registries.views.len())
            .field("inputs", &self.registries.inputs.len())
            .finish_non_exhaustive()
    }
}

/// Alignment, gravity, focus and accessibility props handled above the factory.
fn apply_engine_props(element: &mut Element, props: &Props) {
    if element.kind.is_text_bearing() {
        if let Some(align) = props.get_string(PROP_ALIGN).as_deref().and_then(TextAlign::parse) {
            element.style.text_align = align;
        }
    }

    if props
        .get_string(PROP_GRAVITY)
        .is_some_and(|gravity| gravity.eq_ignore_ascii_case("center"))
    {
        element.layout.gravity = Gravity::CenterHorizontal;
    }

    let focus_target = |key: &str| {
        props
            .get_string(key)
            .map(|target| target.trim().to_owned())
            .filter(|target| !target.is_empty())
    };
    element.focus.up = focus_target(PROP_NEXT_FOCUS_UP);
    element.focus.down = focus_target(PROP_NEXT_FOCUS_DOWN);
    element.focus.left = focus_target(PROP_NEXT_FOCUS_LEFT);
    element.focus.right = focus_target(PROP_NEXT_FOCUS_RIGHT);

    match props
        .get_string(PROP_IMPORTANT_FOR_A11Y)
        .map(|value| value.to_ascii_lowercase())
        .as_deref()
    {
        Some("yes") => element.a11y.importance = A11yImportance::Yes,
        Some("no") => element.a11y.importance = A11yImportance::No,
        _ => {}
    }

    if let Some(label) = props.get_string(PROP_A11Y_LABEL).filter(|l| !l.trim().is_empty()) {
        // Visible text already describes the element.
        if element.kind.visible_text().is_none() {
            element.a11y.label = Some(label);
        }
    }
    if let Some(hint) = props.get_string(PROP_A11Y_HINT).filter(|h| !h.trim().is_empty()) {
        element.a11y.hint = Some(hint);
    }
    if props.is_truthy(PROP_IS_HEADING) {
        element.a11y.heading = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> RuntimeEngine {
        RuntimeEngine::new(EngineConfig::default())
    }

    fn component(json: &str) -> Component {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_registration_requires_id() {
        let mut engine = engine();
        engine.create_view(&component(r#"{"component": "Input"}"#)).unwrap();
        engine.create_view(&component(r#"{"component": "Input", "id": ""}"#)).unwrap();
        assert!(engine.registries().is_empty());
        engine.create_view(&component(r#"{"component": "Input", "id": "name"}"#)).unwrap();
        assert_eq!(engine.registries().inputs.len(), 1);
        assert_eq!(engine.registries().views.len(), 1);
        assert_eq!(engine.get_value("name").as_deref(), Some(""));
    }

    #[test]
    fn test_submit_button_starts_disabled() {
        let mut engine = engine();
        let button = engine
            .create_view(&component(r#"{"component": "Button", "id": "go", "props": {"submit": true}}"#))
            .unwrap();
        let element = engine.tree().get(button).unwrap();
        assert!(!element.is_enabled());
        assert!((element.style.alpha - 0.5).abs() < f32::EPSILON);
        assert_eq!(engine.submit_button(), Some(button));
    }

    #[test]
    fn test_engine_props() {
        let mut engine = engine();
        let text = engine
            .create_view(&component(
                r#"{"component": "Text", "props": {"title": "Hi", "align": "center", "gravity": "CENTER",
                    "accessibilityLabel": "ignored", "accessibilityHint": "Opens", "isHeading": true,
                    "importantForAccessibility": "no"}}"#,
            ))
            .unwrap();
        let element = engine.tree().get(text).unwrap();
        assert_eq!(element.style.text_align, TextAlign::Center);
        assert_eq!(element.layout.gravity, Gravity::CenterHorizontal);
        assert_eq!(element.a11y.label, None);
        assert_eq!(element.a11y.hint.as_deref(), Some("Opens"));
        assert!(element.a11y.heading);
        assert_eq!(element.a11y.importance, A11yImportance::No);

        let image = engine
            .create_view(&component(
                r#"{"component": "DetailsImage", "props": {"accessibilityLabel": "Cover photo"}}"#,
            ))
            .unwrap();
        assert_eq!(
            engine.tree().get(image).unwrap().a11y.label.as_deref(),
            Some("Cover photo")
        );
    }

    #[test]
    fn test_focus_links() {
        let mut engine = engine();
        let input = engine
            .create_view(&component(
                r#"{"component": "Input", "id": "email", "props": {"next_focus_down": "password",
                    "next_focus_up": 7, "next_focus_left": "  ", "next_focus_right": {"id": "x"}}}"#,
            ))
            .unwrap();
        let focus = &engine.tree().get(input).unwrap().focus;
        assert_eq!(focus.down.as_deref(), Some("password"));
        assert_eq!(focus.up.as_deref(), Some("7"));
        assert_eq!(focus.left, None);
        assert_eq!(focus.right, None);

        let text = engine
            .create_view(&component(r#"{"component": "Text", "props": {"title": "Hi"}}"#))
            .unwrap();
        assert!(engine.tree().get(text).unwrap().focus.is_empty());
    }

    #[test]
    fn test_clickable_and_analytics() {
        let mut engine = engine();
        let events = engine.subscribe();
        let card = engine
            .create_view(&component(
                r#"{"component": "NewsCard", "id": "card", "props": {"clickable": true, "analytics": "news_open"}}"#,
            ))
            .unwrap();
        assert!(engine.tree().get(card).unwrap().flags.has(ElementFlags::CLICKABLE));
        assert!(engine.click(card));
        assert_eq!(
            events.drain(),
            vec![UiEvent::analytics("news_open"), UiEvent::click("card")]
        );
    }

    #[test]
    fn test_chip_toggle_and_group_select() {
        let mut engine = engine();
        let events = engine.subscribe();
        let chip = engine
            .create_view(&component(r#"{"component": "SelectableChip", "id": "c", "props": {"text": "News"}}"#))
            .unwrap();
        let group = engine
            .create_view(&component(r#"{"component": "FlowContainer", "id": "g", "props": {"items": ["A", "B"]}}"#))
            .unwrap();

        assert!(engine.click(chip));
        assert!(engine.click_region(group, Region::Item(1)));
        assert!(!engine.click_region(group, Region::Item(5)));
        assert_eq!(
            events.drain(),
            vec![UiEvent::change("c", "true"), UiEvent::change("g", "B")]
        );
        let ElementKind::ChipGroup(data) = &engine.tree().get(group).unwrap().kind else {
            panic!("not a chip group");
        };
        assert_eq!(data.selected, Some(1));
    }

    #[test]
    fn test_dispatch_ignores_disabled() {
        let mut engine = engine();
        let events = engine.subscribe();
        let button = engine
            .create_view(&component(r#"{"component": "Button", "id": "b", "props": {"enabled": false}}"#))
            .unwrap();
        assert!(!engine.dispatch(UserInput::click(button)));
        assert!(events.drain().is_empty());
        assert!(engine.set_enabled("b", true));
        assert!(engine.dispatch(UserInput::click(button)));
        assert_eq!(events.drain(), vec![UiEvent::action("b", "")]);
    }

    #[test]
    fn test_set_error_borders() {
        let mut engine = engine();
        let input = engine
            .create_view(&component(r#"{"component": "Input", "id": "email"}"#))
            .unwrap();
        engine.set_error("email", Some("Taken"));
        let element = engine.tree().get(input).unwrap();
        let stroke = element.style.background.unwrap().stroke.unwrap();
        assert_eq!(stroke.color, Color::RED);
        assert_eq!(element.a11y.state_description.as_deref(), Some("Taken"));
        assert_eq!(element.a11y.live_region, LiveRegion::Polite);

        engine.set_error("email", None);
        let element = engine.tree().get(input).unwrap();
        let stroke = element.style.background.unwrap().stroke.unwrap();
        assert_eq!(stroke.color.to_argb(), 0xFFCC_CCCC);
        assert_eq!(element.a11y.state_description, None);
    }
}
