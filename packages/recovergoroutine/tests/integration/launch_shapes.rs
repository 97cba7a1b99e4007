//! Launch shapes
//!
//! One test per way a goroutine can be started: literals, named functions
//! across files, methods, stored function values, and custom recovery
//! helpers.

#[path = "../common/mod.rs"]
mod common;

use common::*;
use pretty_assertions::assert_eq;
use recovergoroutine::{Analyzer, AnalyzerConfig, Diagnostic, RecoverError};

fn lines(files: &[(&str, &str)]) -> Vec<u32> {
    lines_with(AnalyzerConfig::default(), files)
}

fn lines_with(config: AnalyzerConfig, files: &[(&str, &str)]) -> Vec<u32> {
    Analyzer::new(config)
        .run_sources(files)
        .unwrap()
        .diagnostics
        .iter()
        .map(Diagnostic::line)
        .collect()
}

#[test]
fn test_named_function_in_other_file() {
    let main = "package p\n\nfunc run() {\n\tgo serve()\n\tgo idle()\n}\n";
    let other = "package p\n\nfunc serve() {\n\tdefer func() { recover() }()\n}\n\nfunc idle() {}\n";
    assert_eq!(lines(&[("p/main.go", main), ("p/other.go", other)]), vec![5]);
}

#[test]
fn test_helper_closure_defers_recovery() {
    let source = fixture_package(
        "\tgo func() {\n\t\tguard := func() {\n\t\t\tdefer func() { recover() }()\n\t\t}\n\t\tdefer guard()\n\t}()\n",
    );
    assert_eq!(lines(&[("p/p.go", source.as_str())]), Vec::<u32>::new());
}

#[test]
fn test_stored_function_value_is_flagged() {
    let source = "package p\n\nfunc safe() {\n\tdefer func() { recover() }()\n}\n\nfunc run() {\n\tf := safe\n\tgo f()\n}\n";
    assert_eq!(lines(&[("p/p.go", source)]), vec![9]);
}

#[test]
fn test_returned_closure_is_flagged() {
    let source = "package p\n\nfunc build() func() {\n\treturn func() {}\n}\n\nfunc run() {\n\tgo build()()\n}\n";
    assert_eq!(lines(&[("p/p.go", source)]), vec![8]);
}

#[test]
fn test_pointer_receiver_method() {
    let source = "package p\n\ntype W struct{}\n\nfunc (w *W) loop() {\n\tdefer func() { recover() }()\n}\n\nfunc (w *W) spin() {}\n\nfunc run(w *W) {\n\tgo w.loop()\n\tgo w.spin()\n}\n";
    assert_eq!(lines(&[("p/p.go", source)]), vec![13]);
}

#[test]
fn test_value_receiver_is_flagged() {
    let source = "package p\n\ntype W struct{}\n\nfunc (w *W) loop() {\n\tdefer func() { recover() }()\n}\n\nfunc run() {\n\tvar w W\n\tgo w.loop()\n}\n";
    assert_eq!(lines(&[("p/p.go", source)]), vec![11]);
}

#[test]
fn test_receiver_from_constructor() {
    let source = "package p\n\ntype W struct{}\n\nfunc New() *W {\n\treturn &W{}\n}\n\nfunc (w *W) loop() {\n\tdefer func() { recover() }()\n}\n\nfunc run() {\n\tw := New()\n\tgo w.loop()\n}\n";
    assert_eq!(lines(&[("p/p.go", source)]), Vec::<u32>::new());
}

#[test]
fn test_package_level_receiver() {
    let source = "package p\n\ntype W struct{}\n\nvar global = &W{}\n\nfunc (w *W) loop() {\n\tdefer func() { recover() }()\n}\n\nfunc run() {\n\tgo global.loop()\n}\n";
    assert_eq!(lines(&[("p/p.go", source)]), Vec::<u32>::new());
}

#[test]
fn test_block_scoped_receivers_shadow_package_variable() {
    let source = concat!(
        "package p\n",
        "\n",
        "type Safe struct{}\n",
        "type Other struct{}\n",
        "\n",
        "var w = &Safe{}\n",
        "\n",
        "func (s *Safe) run() {\n",
        "\tdefer func() { recover() }()\n",
        "}\n",
        "\n",
        "func (o *Other) run() {}\n",
        "\n",
        "func start(ws []*Other) {\n",
        "\tfor _, w := range ws {\n",
        "\t\tgo w.run()\n",
        "\t}\n",
        "}\n",
        "\n",
        "func pick(x interface{}) {\n",
        "\tswitch w := x.(type) {\n",
        "\tcase *Other:\n",
        "\t\tgo w.run()\n",
        "\t}\n",
        "}\n",
        "\n",
        "func receive(ch chan *Other) {\n",
        "\tselect {\n",
        "\tcase w := <-ch:\n",
        "\t\tgo w.run()\n",
        "\t}\n",
        "}\n",
        "\n",
        "func global() {\n",
        "\tgo w.run()\n",
        "}\n",
    );
    assert_eq!(lines(&[("p/p.go", source)]), vec![16, 23, 30]);
}

#[test]
fn test_shadowed_recover_is_not_builtin() {
    let source = fixture_package(
        "\tgo func() {\n\t\trecover := func() {}\n\t\tdefer recover()\n\t}()\n",
    );
    assert_eq!(lines(&[("p/p.go", source.as_str())]), vec![4]);
}

#[test]
fn test_package_variable_shadows_recover() {
    let source = "package p\n\nvar recover = func() interface{} { return nil }\n\nfunc run() {\n\tgo func() {\n\t\tdefer recover()\n\t}()\n}\n";
    assert_eq!(lines(&[("p/p.go", source)]), vec![6]);
}

#[test]
fn test_recovery_delegation_is_one_level() {
    let source = "package p\n\nfunc outer() {\n\tinner()\n}\n\nfunc inner() {\n\trecover()\n}\n\nfunc run() {\n\tgo func() {\n\t\tdefer outer()\n\t}()\n\tgo func() {\n\t\tdefer inner()\n\t}()\n}\n";
    assert_eq!(lines(&[("p/p.go", source)]), vec![12]);
}

#[test]
fn test_custom_recover_name() {
    let source = "package p\n\nimport \"example.com/safe\"\n\nfunc run() {\n\tgo func() {\n\t\tdefer safe.Guard()\n\t}()\n\tgo func() {\n\t\tdefer Guard()\n\t}()\n}\n";
    assert_eq!(lines(&[("p/p.go", source)]), vec![6, 9]);

    let config = AnalyzerConfig::new().with_recover("Guard").unwrap();
    assert_eq!(lines_with(config, &[("p/p.go", source)]), Vec::<u32>::new());
}

#[test]
fn test_custom_recover_inside_helper() {
    let source = "package p\n\nimport \"example.com/safe\"\n\nfunc protect() {\n\tsafe.Guard()\n}\n\nfunc run() {\n\tgo func() {\n\t\tdefer protect()\n\t}()\n}\n";
    assert_eq!(lines(&[("p/p.go", source)]), vec![10]);

    let config = AnalyzerConfig::new().with_recover("Guard").unwrap();
    assert_eq!(lines_with(config, &[("p/p.go", source)]), Vec::<u32>::new());
}

#[test]
fn test_nested_goroutine_recovery_does_not_protect_outer() {
    let source = fixture_package(
        "\tgo func() {\n\t\tgo func() {\n\t\t\tdefer func() { recover() }()\n\t\t}()\n\t}()\n",
    );
    assert_eq!(lines(&[("p/p.go", source.as_str())]), vec![4]);
}

#[test]
fn test_nested_goroutine_in_safe_launch_is_judged() {
    let source = fixture_package(
        "\tgo func() {\n\t\tdefer func() { recover() }()\n\t\tgo func() {}()\n\t}()\n",
    );
    assert_eq!(lines(&[("p/p.go", source.as_str())]), vec![6]);
}

#[test]
fn test_diagnostic_text() {
    let source = fixture_package(fixture_unsafe_launch());
    let report = Analyzer::default().run_sources(&[("p/p.go", &source)]).unwrap();
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(
        report.diagnostics[0].to_string(),
        "p/p.go:4:2: goroutine must have recover"
    );
}

#[test]
fn test_bodyless_declaration_is_hard_error() {
    let source = "package p\n\nfunc asm()\n\nfunc run() {\n\tgo asm()\n}\n";
    let err = Analyzer::default().run_sources(&[("p/p.go", source)]).unwrap_err();
    assert!(matches!(err, RecoverError::SourceAccess { .. }), "got {err:?}");
}

#[test]
fn test_parse_error_is_hard_error() {
    let err = Analyzer::default()
        .run_sources(&[("p/p.go", "package p\n\nfunc run() {\n\tgo func( {\n}\n")])
        .unwrap_err();
    assert!(matches!(err, RecoverError::Parse { .. }), "got {err:?}");
}
