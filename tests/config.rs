// tests/config.rs
//
// dashboard.toml parsing and how it reshapes the page catalog.
//
use std::path::{Path, PathBuf};

use fraud_dash::config::{DashConfig, MenuChoice};
use fraud_dash::core::PageKind;
use fraud_dash::error::ConfigError;

#[test]
fn missing_file_means_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = DashConfig::load(&dir.path().join("dashboard.toml")).unwrap();
    assert_eq!(cfg, DashConfig::default());
    assert_eq!(DashConfig::parse("").unwrap(), DashConfig::default());
}

#[test]
fn full_file_parses_and_overrides_catalog() {
    let text = r#"
        root = "/srv/fraud"
        title = "Risk Desk"
        menu = "plain"
        log_file = "logs/dash.log"

        [interpreters]
        py = "python3 -u"
        r = "Rscript"

        [pages.transaction_predictor]
        label = "Predictor"
        files = ["tools/predict.py", "/opt/predict.py"]

        [[sync]]
        name = "Model"
        from = "../training/models"
        to = "models"
    "#;
    let cfg = DashConfig::parse(text).unwrap();

    assert_eq!(cfg.title, "Risk Desk");
    assert_eq!(cfg.menu, MenuChoice::Plain);
    assert_eq!(cfg.log_file, PathBuf::from("logs/dash.log"));
    assert_eq!(cfg.sync.len(), 1);
    assert_eq!(cfg.sync[0].name, "Model");

    let interp = cfg.interpreters();
    assert_eq!(interp["py"], "python3 -u");
    assert_eq!(interp["sh"], "sh"); // default kept
    assert_eq!(interp["r"], "Rscript");

    let catalog = cfg.catalog();
    let tx = catalog.iter().find(|s| s.kind == PageKind::TransactionPredictor).unwrap();
    assert_eq!(tx.label, "Predictor");
    assert_eq!(
        tx.files,
        vec![PathBuf::from("/srv/fraud/tools/predict.py"), PathBuf::from("/opt/predict.py")]
    );
    // untouched lists keep their defaults
    assert_eq!(tx.modules, vec!["pages.transaction_predictor".to_string()]);
    assert_eq!(tx.functions.first().map(String::as_str), Some("transaction_predictor"));

    let legacy = catalog.iter().find(|s| s.kind == PageKind::FraudDetection).unwrap();
    assert!(legacy.files.iter().all(|f| f.starts_with("/srv/fraud")));
}

#[test]
fn default_catalog_order_and_candidates() {
    let cfg = DashConfig::default();
    let catalog = cfg.catalog();
    let kinds: Vec<PageKind> = catalog.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, PageKind::ALL.to_vec());

    let app2 = &catalog[1];
    assert_eq!(app2.modules, vec!["pages.fraud_detection_app2", "pages.Fraud_Detection_App2"]);
    assert_eq!(app2.functions, vec!["fraud_detection_app2", "main", "run", "app", "render", "show"]);
    assert_eq!(app2.files.len(), 6);
    assert_eq!(app2.files[0], Path::new(".").join("src/pages/fraud_detection_app2.py"));
}

#[test]
fn unknown_page_key_is_rejected() {
    let err = DashConfig::parse("[pages.reports]\nfiles = [\"r.py\"]\n").unwrap_err();
    match err {
        ConfigError::UnknownPage(key, known) => {
            assert_eq!(key, "reports");
            assert!(known.contains("transaction_predictor"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn unknown_field_and_bad_menu_are_parse_errors() {
    assert!(matches!(DashConfig::parse("colour = \"blue\"\n"), Err(ConfigError::Toml(_))));
    assert!(matches!(DashConfig::parse("menu = \"fancy\"\n"), Err(ConfigError::Toml(_))));
}

#[test]
fn label_taken_by_home_or_about_is_rejected() {
    let err = DashConfig::parse("[pages.transaction_predictor]\nlabel = \"Home\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateLabel(ref l) if l == "Home"), "{err:?}");

    let err = DashConfig::parse("[pages.fraud_detection]\nlabel = \"About\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateLabel(ref l) if l == "About"), "{err:?}");
}

#[test]
fn label_shared_by_two_pages_is_rejected() {
    let defaults = DashConfig::default().catalog();
    let taken = &defaults
        .iter()
        .find(|s| s.kind == PageKind::TransactionPredictor)
        .unwrap()
        .label;

    let text = format!("[pages.fraud_detection]\nlabel = \"{taken}\"\n");
    let err = DashConfig::parse(&text).unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateLabel(ref l) if l == taken), "{err:?}");

    // Renaming both apart is fine
    let text = format!(
        "[pages.fraud_detection]\nlabel = \"{taken}\"\n[pages.transaction_predictor]\nlabel = \"Predictor\"\n"
    );
    assert!(DashConfig::parse(&text).is_ok());
}
