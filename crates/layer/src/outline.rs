//! Text outline of an element tree.

use layer_ui::element::ElementKind;
use layer_ui::{Element, ElementId, ElementTree};
use std::fmt::Write;

/// One line per element below `root`, indented by depth.
///
/// ```text
/// VerticalContainer
///   Input #email value="" error="Required field"
///   Button #login "Enter" [disabled]
/// ```
#[must_use]
pub fn outline(tree: &ElementTree, root: ElementId) -> String {
    let mut out = String::new();
    for id in tree.iter_subtree(root).skip(1) {
        let Some(element) = tree.get(id) else {
            continue;
        };
        let depth = tree.ancestors(id).position(|ancestor| ancestor == root).unwrap_or(0);
        let _ = writeln!(out, "{}{}", "  ".repeat(depth), describe(element));
    }
    out
}

fn describe(element: &Element) -> String {
    let mut line = element.component_type.clone();
    if let Some(id) = &element.component_id {
        let _ = write!(line, " #{id}");
    }
    match &element.kind {
        ElementKind::Input(data) => {
            let _ = write!(line, " value={:?}", data.value);
            if let Some(error) = &data.error {
                let _ = write!(line, " error={error:?}");
            }
        }
        ElementKind::Header(data) => {
            let _ = write!(line, " {:?} ({:?})", data.title, data.leading_icon);
        }
        ElementKind::ChipGroup(data) => {
            let _ = write!(line, " {:?}", data.items);
        }
        kind => {
            if let Some(text) = kind.visible_text() {
                let _ = write!(line, " {text:?}");
            }
        }
    }
    if !element.is_visible() {
        line.push_str(" [gone]");
    } else if !element.is_enabled() {
        line.push_str(" [disabled]");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use layer_shared::ScreenDefinition;
    use layer_ui::{EngineConfig, RuntimeEngine, ScreenRenderer};

    #[test]
    fn test_outline_nesting() {
        let screen = ScreenDefinition::from_json(
            r#"{"screen": "s", "components": [
                {"component": "VerticalContainer", "children": [
                    {"component": "Input", "id": "email"}
                ]},
                {"component": "Button", "id": "go", "props": {"text": "Go", "submit": true}}
            ]}"#,
        )
        .unwrap();
        let mut engine = RuntimeEngine::new(EngineConfig::default());
        let root = engine.create_root_container();
        ScreenRenderer::render(&mut engine, root, &screen);

        assert_eq!(
            outline(engine.tree(), root),
            "VerticalContainer\n  Input #email value=\"\"\nButton #go \"Go\" [disabled]\n"
        );
    }
}
