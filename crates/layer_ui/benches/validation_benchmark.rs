//! Benchmark for per-keystroke validation.
//!
//! TARGET: a keystroke (text change, validate-on-change, submit gating)
//! well under one frame on a form of a dozen fields.
//!
//! Run with: cargo bench --package layer_ui --bench validation_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use layer_shared::{Props, RuleKind, ScreenDefinition, ValidationRule};
use layer_ui::runtime::validation::{evaluate, CompiledRule};
use layer_ui::{is_valid_cpf, EngineConfig, RuntimeEngine, ScreenRenderer};

fn signup_screen(fields: usize) -> ScreenDefinition {
    let inputs: Vec<String> = (0..fields)
        .map(|i| {
            format!(
                r#"{{"component": "Input", "id": "field_{i}", "props": {{
                    "validateOnChange": true,
                    "rules": [
                        {{"component": "required"}},
                        {{"component": "email"}},
                        {{"component": "minlength", "params": {{"min": 8}}}}
                    ]
                }}}}"#
            )
        })
        .collect();
    let json = format!(
        r#"{{"screen": "signup", "components": [{}, {{"component": "Button", "id": "send", "props": {{"submit": true}}}}]}}"#,
        inputs.join(",")
    );
    ScreenDefinition::from_json(&json).expect("benchmark screen parses")
}

fn benchmark_rule_evaluation(c: &mut Criterion) {
    let rules = CompiledRule::compile_all(&[
        ValidationRule::new(RuleKind::Required),
        ValidationRule::new(RuleKind::Email),
        ValidationRule::new(RuleKind::MinLength).with_params(Props::new().with("min", 8)),
    ]);

    c.bench_function("evaluate_email_rules", |b| {
        b.iter(|| evaluate(black_box(&rules), black_box("someone@example.com"), |_| None));
    });

    c.bench_function("cpf_check", |b| {
        b.iter(|| is_valid_cpf(black_box("529.982.247-25")));
    });
}

fn benchmark_keystroke(c: &mut Criterion) {
    let screen = signup_screen(12);
    let mut engine = RuntimeEngine::new(EngineConfig::default());
    let root = engine.create_root_container();
    ScreenRenderer::render(&mut engine, root, &screen);
    let field = engine.find("field_0").expect("field registered");

    let mut flip = false;
    c.bench_function("keystroke_twelve_fields", |b| {
        b.iter(|| {
            flip = !flip;
            let text = if flip { "someone@example.com" } else { "someone@" };
            engine.input_text(black_box(field), black_box(text))
        });
    });
}

fn benchmark_render(c: &mut Criterion) {
    let screen = signup_screen(12);
    let mut engine = RuntimeEngine::new(EngineConfig::default());
    let root = engine.create_root_container();

    c.bench_function("render_signup_screen", |b| {
        b.iter(|| {
            engine.clear();
            ScreenRenderer::render(&mut engine, root, black_box(&screen))
        });
    });
}

criterion_group!(
    benches,
    benchmark_rule_evaluation,
    benchmark_keystroke,
    benchmark_render
);
criterion_main!(benches);
