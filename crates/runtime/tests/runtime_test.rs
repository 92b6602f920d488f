use varscope_api::{MethodModel, ProgramModel};
use varscope_core::config::NamingConfig;
use varscope_runtime::NamingRuntime;

fn fixture() -> ProgramModel {
    serde_json::from_str(include_str!("fixtures/capture_model.json")).unwrap()
}

fn method<'a>(model: &'a ProgramModel, class: &str, name: &str) -> &'a MethodModel {
    model
        .classes
        .iter()
        .find(|c| c.name == class)
        .and_then(|c| c.methods.iter().find(|m| m.name == name))
        .unwrap()
}

fn names(method: &MethodModel) -> Vec<Option<&str>> {
    method
        .local_variables
        .iter()
        .map(|entry| entry.name.as_deref())
        .collect()
}

#[test]
fn test_failed_class_does_not_stop_others() {
    let runtime = NamingRuntime::new(NamingConfig::default().with_threads(Some(4))).unwrap();
    assert_eq!(runtime.threads(), 4);

    let outcome = runtime.name_model(fixture()).unwrap();

    assert_eq!(outcome.report.named_classes, 2);
    assert_eq!(outcome.report.failures.len(), 1);
    assert_eq!(outcome.report.failures[0].class, "test/Broken");
    assert!(outcome.report.failures[0].error.contains("Ambiguous live range"));
    assert!(!outcome.report.is_success());

    let process = method(&outcome.model, "test/Outer", "process");
    let lambda = method(&outcome.model, "test/Outer", "lambda$process$0");
    assert_eq!(names(process), vec![Some("chunk1")]);
    assert_eq!(names(lambda), vec![Some("chunk1")]);
    assert_eq!(lambda.parameters, vec![Some("chunk1".to_string())]);
}

#[test]
fn test_diagnostics_are_collected_across_threads() {
    let runtime = NamingRuntime::new(NamingConfig::default().with_threads(Some(2))).unwrap();
    let outcome = runtime.name_model(fixture()).unwrap();

    let missed = outcome.diagnostics.missed_suggestions();
    assert_eq!(missed.len(), 1);
    assert_eq!(missed[0].0.method_name, "load");

    // The worker constructor is the only non-synthetic method with parameters.
    let missing = outcome.diagnostics.missing_parameter_mappings();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].0.method.name, "<init>");
    assert_eq!(missing[0].0.type_text, "test.Chunk");
}

#[test]
fn test_single_thread_matches_parallel() {
    let single = NamingRuntime::new(NamingConfig::default().with_threads(Some(1)))
        .unwrap()
        .name_model(fixture())
        .unwrap();
    let parallel = NamingRuntime::new(NamingConfig::default().with_threads(Some(8)))
        .unwrap()
        .name_model(fixture())
        .unwrap();

    for class in ["test/Outer", "test/Outer$1Worker"] {
        let expected = &single.model.classes.iter().find(|c| c.name == class).unwrap().methods;
        let actual = &parallel.model.classes.iter().find(|c| c.name == class).unwrap().methods;
        for (a, b) in expected.iter().zip(actual) {
            assert_eq!(a.local_variables, b.local_variables);
            assert_eq!(a.parameters, b.parameters);
        }
    }
}
