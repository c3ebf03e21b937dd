//! # Property Tests
//!
//! Invariants of document validation, rule ordering and rendering that
//! must hold for any input.

use layer_shared::{Component, Props, RuleKind, ScreenDefinition, ValidationRule};
use layer_ui::runtime::validation::{evaluate, CompiledRule};
use layer_ui::{
    cpf_check_digits, is_valid_cpf, Built, ComponentFactory, ElementFactory, EngineConfig,
    RuntimeEngine, ScreenRenderer,
};
use proptest::prelude::*;

/// Builds everything except types starting with `Skip`.
struct SelectiveFactory(ComponentFactory);

impl ElementFactory for SelectiveFactory {
    fn create(&self, component_type: &str, props: &Props) -> Option<Built> {
        if component_type.starts_with("Skip") {
            None
        } else {
            self.0.create(component_type, props)
        }
    }
}

fn format_cpf(digits: &[u8]) -> String {
    let raw: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    format!("{}.{}.{}-{}", &raw[..3], &raw[3..6], &raw[6..9], &raw[9..])
}

fn component_type() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Text".to_owned()),
        Just("Input".to_owned()),
        Just("Button".to_owned()),
        Just("Carousel".to_owned()),
        Just("SkipMe".to_owned()),
        Just("SkipToo".to_owned()),
    ]
}

proptest! {
    /// Property: a base completed with its own check digits is a valid CPF,
    /// formatted or not.
    #[test]
    fn generated_cpf_is_valid(base in prop::array::uniform9(0u8..10)) {
        prop_assume!(base.iter().any(|&d| d != base[0]));
        let [first, second] = cpf_check_digits(&base);
        let mut digits = base.to_vec();
        digits.extend([first, second]);

        prop_assert!(is_valid_cpf(&format_cpf(&digits)));
        let plain: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        prop_assert!(is_valid_cpf(&plain));
    }

    /// Property: a wrong last digit always fails.
    #[test]
    fn tampered_cpf_is_invalid(base in prop::array::uniform9(0u8..10), bump in 1u8..10) {
        let [first, second] = cpf_check_digits(&base);
        let mut digits = base.to_vec();
        digits.extend([first, (second + bump) % 10]);
        prop_assert!(!is_valid_cpf(&format_cpf(&digits)));
    }

    /// Property: eleven identical digits never pass.
    #[test]
    fn repeated_digit_cpf_is_invalid(digit in 0u8..10) {
        let digits = [digit; 11];
        prop_assert!(!is_valid_cpf(&format_cpf(&digits)));
    }

    /// Property: any digit count other than eleven fails.
    #[test]
    fn wrong_length_cpf_is_invalid(raw in "[0-9]{0,30}") {
        prop_assume!(raw.len() != 11);
        prop_assert!(!is_valid_cpf(&raw));
    }

    /// Property: the first failing rule decides the message.
    #[test]
    fn first_rule_short_circuits(value in "\\PC{0,20}") {
        let rules = CompiledRule::compile_all(&[
            ValidationRule::new(RuleKind::Required),
            ValidationRule::new(RuleKind::MinLength)
                .with_params(Props::new().with("min", 8))
                .with_message("Too short"),
        ]);
        let outcome = evaluate(&rules, &value, |_| None);

        if value.trim().is_empty() {
            prop_assert_eq!(outcome, Some("Required field"));
        } else if value.chars().count() < 8 {
            prop_assert_eq!(outcome, Some("Too short"));
        } else {
            prop_assert_eq!(outcome, None);
        }
    }

    /// Property: every top-level component is either rendered in order or
    /// counted as skipped, and rendering twice yields the same shape.
    #[test]
    fn render_accounts_for_every_component(types in prop::collection::vec(component_type(), 0..12)) {
        let screen = ScreenDefinition {
            name: "generated".to_owned(),
            components: types.iter().map(|t| Component::new(t.as_str())).collect(),
        };
        let expected_skips = types.iter().filter(|t| t.starts_with("Skip")).count();

        let config = EngineConfig::default();
        let mut engine = RuntimeEngine::with_factory(
            config,
            Box::new(SelectiveFactory(ComponentFactory::new(config.density))),
        );
        let root = engine.create_root_container();

        let first = ScreenRenderer::render(&mut engine, root, &screen);
        prop_assert_eq!(first.skipped, expected_skips);
        prop_assert_eq!(first.rendered_count() + first.skipped, types.len());
        prop_assert_eq!(engine.tree().children(root), first.rendered.as_slice());
        let rendered_types: Vec<String> = engine
            .tree()
            .children(root)
            .iter()
            .map(|id| engine.tree().get(*id).unwrap().component_type.clone())
            .collect();
        let kept: Vec<String> = types.iter().filter(|t| !t.starts_with("Skip")).cloned().collect();
        prop_assert_eq!(rendered_types, kept);

        let second = ScreenRenderer::render(&mut engine, root, &screen);
        prop_assert_eq!(second.removed, first.rendered_count());
        prop_assert_eq!(second.rendered_count(), first.rendered_count());
        prop_assert_eq!(engine.tree().len(), 1 + second.rendered_count());
    }
}
