use entrepo_demo::{DemoConfig, OutputFormat, load_config, render, run};
use entrepo_repository::{NotifyPolicy, RepositoryConfig};
use entrepo_types::LifecycleEvent;
use pretty_assertions::assert_eq;
use std::io::Write;

// ── Scenario ─────────────────────────────────────────────────────

#[test]
fn run_audits_final_stores() {
    let outcome = run(RepositoryConfig::default()).unwrap();
    let customer_ids: Vec<_> = outcome
        .report
        .records
        .iter()
        .filter(|r| r.entity_type == "Customer")
        .map(|r| r.id.get())
        .collect();
    let order_ids: Vec<_> = outcome
        .report
        .records
        .iter()
        .filter(|r| r.entity_type == "Order")
        .map(|r| r.id.get())
        .collect();

    assert_eq!(customer_ids, vec![2, 3, 4]);
    assert_eq!(order_ids, vec![1, 2, 3]);
    assert_eq!(outcome.report.summary.total, 6);
}

#[test]
fn run_trail_holds_repository_mutations_after_narrowing() {
    let outcome = run(RepositoryConfig::default()).unwrap();
    let trail: Vec<_> = outcome
        .trail
        .iter()
        .map(|(event, header)| (*event, header.entity_type, header.id.get()))
        .collect();
    assert_eq!(
        trail,
        vec![
            (LifecycleEvent::Created, "Customer", 4),
            (LifecycleEvent::Deleted, "Customer", 1),
            (LifecycleEvent::Updated, "Order", 3),
        ]
    );
}

#[test]
fn run_with_on_change_policy_yields_same_stores() {
    let config = RepositoryConfig::default().with_notify(NotifyPolicy::OnChange);
    let outcome = run(config).unwrap();
    assert_eq!(outcome.report.summary.total, 6);
    assert_eq!(outcome.trail.len(), 3);
}

// ── Rendering ────────────────────────────────────────────────────

#[test]
fn render_text_and_json() {
    let outcome = run(RepositoryConfig::default()).unwrap();
    let text = render(&outcome.report, OutputFormat::Text).unwrap();
    assert!(text.ends_with("6 entities (6 active, 0 inactive)"));

    let json = render(&outcome.report, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["summary"]["total"], 6);
}

// ── Config loading ───────────────────────────────────────────────

#[test]
fn load_config_reads_notify_policy() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"repository": {{"notify": "on-change"}}}}"#).unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.repository.notify, NotifyPolicy::OnChange);
}

#[test]
fn load_config_defaults_missing_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{}}").unwrap();

    assert_eq!(load_config(file.path()).unwrap(), DemoConfig::default());
}

#[test]
fn load_config_reports_bad_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("parsing config"));
}

#[test]
fn load_config_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(&dir.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().starts_with("reading config"));
}
