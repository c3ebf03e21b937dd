//! # Screen Renderer
//!
//! Replaces the content of a container with a freshly built screen.

use crate::element::ElementId;
use crate::runtime::RuntimeEngine;
use layer_shared::ScreenDefinition;

/// What one render pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Top-level elements appended, in component order.
    pub rendered: Vec<ElementId>,
    /// Top-level components the factory rejected.
    pub skipped: usize,
    /// Elements removed from the container first (descendants included).
    pub removed: usize,
}

impl RenderReport {
    /// Number of top-level elements appended.
    #[must_use]
    pub fn rendered_count(&self) -> usize {
        self.rendered.len()
    }
}

/// Stateless renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenRenderer;

impl ScreenRenderer {
    /// Empties `container`, then builds and appends one element per
    /// top-level component in order.
    ///
    /// An unknown container yields an empty report.
    pub fn render(
        engine: &mut RuntimeEngine,
        container: ElementId,
        screen: &ScreenDefinition,
    ) -> RenderReport {
        if !engine.tree().contains(container) {
            tracing::warn!("Render target {:?} is not in the tree", container);
            return RenderReport::default();
        }

        let mut report = RenderReport {
            removed: engine.tree_mut().clear_children(container),
            ..RenderReport::default()
        };

        for component in &screen.components {
            match engine.create_view(component) {
                Some(element) => {
                    engine.tree_mut().attach(element, container);
                    report.rendered.push(element);
                }
                None => report.skipped += 1,
            }
        }

        tracing::debug!(
            "Rendered screen '{}': {} elements, {} skipped",
            screen.name,
            report.rendered.len(),
            report.skipped
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    #[test]
    fn test_render_is_idempotent() {
        let screen = ScreenDefinition::from_json(
            r#"{"screen": "home", "components": [
                {"component": "Text", "props": {"title": "A"}},
                {"component": "VerticalContainer", "children": [{"component": "Text"}]}
            ]}"#,
        )
        .unwrap();
        let mut engine = RuntimeEngine::new(EngineConfig::default());
        let root = engine.create_root_container();

        let first = ScreenRenderer::render(&mut engine, root, &screen);
        assert_eq!(first.rendered_count(), 2);
        assert_eq!(first.removed, 0);

        let second = ScreenRenderer::render(&mut engine, root, &screen);
        assert_eq!(second.rendered_count(), 2);
        assert_eq!(second.removed, 3);
        assert_eq!(engine.tree().children(root), second.rendered.as_slice());
        assert_eq!(engine.tree().len(), 4);
    }

    #[test]
    fn test_untyped_node_renders_placeholder() {
        let screen = layer_shared::parse_screen(
            r#"{"screen": "s", "components": [
                {"component": "Text", "props": {"title": "Hi"}},
                {"id": "typo"},
                {"component": "Text", "id": 5, "props": []},
                {"component": "Input", "id": "email"}
            ]}"#,
        )
        .unwrap();
        let mut engine = RuntimeEngine::new(EngineConfig::default());
        let root = engine.create_root_container();

        let report = ScreenRenderer::render(&mut engine, root, &screen);

        assert_eq!(report.rendered_count(), 4);
        let kinds: Vec<_> = report
            .rendered
            .iter()
            .map(|id| engine.tree().get(*id).unwrap().kind.name())
            .collect();
        assert_eq!(kinds, vec!["Text", "ErrorPlaceholder", "Text", "Input"]);
        assert!(engine.find("5").is_some());
        assert_eq!(engine.get_value("email").as_deref(), Some(""));
    }

    #[test]
    fn test_unknown_container() {
        let mut engine = RuntimeEngine::new(EngineConfig::default());
        let report = ScreenRenderer::render(&mut engine, ElementId::new(42), &ScreenDefinition::default());
        assert_eq!(report, RenderReport::default());
    }
}
