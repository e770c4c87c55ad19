use super::*;

fn vars(pairs: &[(&str, &str)]) -> VariableMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn hydrate_replaces_every_occurrence() {
    let out = hydrate(
        "{TOPIC} then {TOPIC} and {SUBJECT}",
        &vars(&[("TOPIC", "Atoms"), ("SUBJECT", "Chemistry")]),
    );
    assert_eq!(out, "Atoms then Atoms and Chemistry");
}

#[test]
fn hydrate_leaves_missing_placeholders_verbatim() {
    let out = hydrate("Explain {TOPIC} for {CLASS_NUMBER}", &vars(&[("TOPIC", "Gravity")]));
    assert_eq!(out, "Explain Gravity for {CLASS_NUMBER}");
}

#[test]
fn hydrate_does_not_rescan_substituted_values() {
    let map = vars(&[("NAME", "{SUBJECT}"), ("SUBJECT", "Math")]);
    let once = hydrate("Hello {NAME}", &map);
    assert_eq!(once, "Hello {SUBJECT}");

    let mut only_name = VariableMap::new();
    only_name.insert("NAME".into(), "{SUBJECT}".into());
    assert_eq!(hydrate("Hello {NAME}", &only_name), "Hello {SUBJECT}");
}

#[test]
fn hydrate_ignores_lowercase_and_unused_keys() {
    let out = hydrate(
        "Keep {lower} and {TOPIC}",
        &vars(&[("lower", "x"), ("TOPIC", "Cells"), ("EXTRA", "unused")]),
    );
    assert_eq!(out, "Keep {lower} and Cells");
}

#[test]
fn report_lists_unresolved_once_in_order() {
    let report = hydrate_with_report(
        "{B} {A} {B} {C}",
        &vars(&[("C", "c")]),
    );
    assert_eq!(report.text, "{B} {A} {B} c");
    assert_eq!(report.unresolved, vec!["B".to_string(), "A".to_string()]);
    assert!(!report.is_complete());
}

#[test]
fn registry_covers_every_template_driven_tool() {
    let registry = TemplateRegistry::new();
    for tool in ToolId::ALL {
        assert_eq!(
            registry.contains(tool),
            !tool.is_conversational(),
            "registry mismatch for {tool}"
        );
    }
    assert_eq!(registry.len(), ToolId::ALL.len() - 1);
}

#[test]
fn registry_rejects_conversational_tutor() {
    let registry = TemplateRegistry::new();
    assert_eq!(
        registry.get(ToolId::AiTutor).unwrap_err(),
        TemplateError::NotFound { tool: ToolId::AiTutor }
    );
}

#[test]
fn placeholders_are_distinct_and_ordered() {
    let registry = TemplateRegistry::new();
    let template = registry.get(ToolId::DoubtSolver).unwrap();
    assert_eq!(
        template.placeholders(),
        vec![
            "CLASS_NUMBER",
            "SUBJECT",
            "TOPIC",
            "LEARNING_PACE",
            "STUDENT_QUESTION"
        ]
    );
}

#[test]
fn full_coverage_leaves_no_tokens() {
    let registry = TemplateRegistry::new();
    for template in registry.iter() {
        let map: VariableMap = template
            .placeholders()
            .into_iter()
            .map(|name| (name.to_string(), format!("value-{}", name.to_lowercase())))
            .collect();
        let hydrated = template.hydrate(&map);
        assert!(hydrated.is_complete(), "{} left {:?}", template.tool(), hydrated.unresolved);
        assert!(!PLACEHOLDER.is_match(&hydrated.text));
    }
}
