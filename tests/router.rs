// tests/router.rs
//
// Menu assembly from availability, dispatch, and the navigation states.
//
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use fraud_dash::config::DashConfig;
use fraud_dash::config::consts::UNAVAILABLE_MSG;
use fraud_dash::core::{
    Availability, Block, Frame, Level, Module, ModuleRegistry, Outcome, PageKind, Resolver,
    ScriptRunner,
};
use fraud_dash::pages::{default_catalog, register_builtins};
use fraud_dash::router::{Dispatch, Nav, Router, Target};

fn resolver(registry: ModuleRegistry, root: &Path) -> Resolver {
    Resolver::new(registry, ScriptRunner::new(root, BTreeMap::new()))
}

fn builtins() -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    register_builtins(&mut registry);
    registry
}

fn router_with(flags: [(PageKind, bool); 3], registry: ModuleRegistry) -> Router {
    Router::new(default_catalog(), Availability::from_flags(flags), resolver(registry, Path::new(".")))
}

#[test]
fn menu_hides_unavailable_pages_in_catalog_order() {
    let router = router_with(
        [
            (PageKind::FraudDetection, false),
            (PageKind::FraudDetectionApp2, true),
            (PageKind::TransactionPredictor, true),
        ],
        builtins(),
    );

    assert_eq!(
        router.labels(),
        vec!["Home", "Fraud Detection (RAW/PCA)", "Transaction Predictor", "About"]
    );
    let targets: Vec<Target> = router.menu().into_iter().map(|e| e.target).collect();
    assert_eq!(
        targets,
        vec![
            Target::Home,
            Target::Page(PageKind::FraudDetectionApp2),
            Target::Page(PageKind::TransactionPredictor),
            Target::About,
        ]
    );
}

#[test]
fn menu_with_everything_and_with_nothing() {
    let all = router_with(
        [
            (PageKind::FraudDetection, true),
            (PageKind::FraudDetectionApp2, true),
            (PageKind::TransactionPredictor, true),
        ],
        builtins(),
    );
    assert_eq!(
        all.labels(),
        vec!["Home", "Fraud Detection", "Fraud Detection (RAW/PCA)", "Transaction Predictor", "About"]
    );

    let none = Router::new(default_catalog(), Availability::default(), resolver(builtins(), Path::new(".")));
    assert_eq!(none.labels(), vec!["Home", "About"]);
}

#[test]
fn hidden_page_dispatches_to_unavailable_notice() {
    // Resolvable, but probing said no: the router trusts the cached flags
    let mut registry = builtins();
    registry.register_module(Module::new("pages.fraud_detection").export("run", |_: &mut Frame| Ok(())));
    let router = router_with(
        [
            (PageKind::FraudDetection, false),
            (PageKind::FraudDetectionApp2, false),
            (PageKind::TransactionPredictor, false),
        ],
        registry,
    );

    let mut frame = Frame::new();
    assert_eq!(router.dispatch("Fraud Detection", &mut frame), Dispatch::Unavailable);
    assert_eq!(frame.blocks(), &[Block::Notice(Level::Info, UNAVAILABLE_MSG.into())]);

    let mut frame = Frame::new();
    assert_eq!(router.dispatch("Reports", &mut frame), Dispatch::Unavailable);
    assert_eq!(frame.notices(Level::Info).count(), 1);
}

#[test]
fn home_and_about_use_builtins_or_fall_back() {
    let router = Router::new(default_catalog(), Availability::default(), resolver(builtins(), Path::new(".")));
    let mut frame = Frame::new();
    assert_eq!(router.dispatch("Home", &mut frame), Dispatch::Home);
    assert_eq!(frame.blocks()[0], Block::Heading { level: 1, text: "Fraud Detection".into() });
    assert!(frame.blocks().iter().any(|b| matches!(b, Block::Table { .. })));

    // Nothing registered: plain headings
    let bare = Router::new(default_catalog(), Availability::default(), resolver(ModuleRegistry::new(), Path::new(".")));
    let mut frame = Frame::new();
    assert_eq!(bare.dispatch("Home", &mut frame), Dispatch::Home);
    assert_eq!(frame.blocks(), &[Block::Heading { level: 2, text: "Welcome".into() }]);

    // Broken about module: warning, then the fallback
    let mut registry = ModuleRegistry::new();
    registry.register("pages.about", || Err("missing README".into()));
    let broken = Router::new(default_catalog(), Availability::default(), resolver(registry, Path::new(".")));
    let mut frame = Frame::new();
    assert_eq!(broken.dispatch("About", &mut frame), Dispatch::About);
    assert!(frame.notices(Level::Warning).next().unwrap().contains("missing README"));
    assert_eq!(frame.blocks().last(), Some(&Block::Heading { level: 2, text: "About".into() }));
}

#[test]
fn probing_never_runs_page_code() {
    let loaded = Arc::new(AtomicBool::new(false));
    let flag = loaded.clone();

    let mut registry = builtins();
    registry.register("pages.transaction_predictor", move || {
        flag.store(true, Ordering::SeqCst);
        Ok(Module::new("pages.transaction_predictor").export("transaction_predictor", |f: &mut Frame| {
            f.heading(1, "Transaction Predictor");
            Ok(())
        }))
    });

    let dir = tempfile::tempdir().unwrap();
    let catalog = default_catalog().into_iter().map(|s| s.rooted(dir.path())).collect();
    let router = Router::probed(catalog, resolver(registry, dir.path()));

    assert!(router.availability().is_available(PageKind::TransactionPredictor));
    assert!(!router.availability().is_available(PageKind::FraudDetection));
    assert!(!loaded.load(Ordering::SeqCst), "probe must not load modules");

    let mut frame = Frame::new();
    let result = router.dispatch("Transaction Predictor", &mut frame);
    assert_eq!(
        result,
        Dispatch::Page(Outcome::Invoked {
            module: "pages.transaction_predictor".into(),
            function: "transaction_predictor".into(),
        })
    );
    assert!(loaded.load(Ordering::SeqCst));
}

#[test]
fn script_files_make_pages_available() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("pages")).unwrap();
    fs::write(dir.path().join("pages/Fraud_Detection_App2.py"), "").unwrap();

    let catalog = default_catalog().into_iter().map(|s| s.rooted(dir.path())).collect();
    let router = Router::probed(catalog, resolver(builtins(), dir.path()));

    assert_eq!(router.labels(), vec!["Home", "Fraud Detection (RAW/PCA)", "About"]);
}

#[test]
fn nav_renders_once_per_selection() {
    let router = router_with(
        [
            (PageKind::FraudDetection, false),
            (PageKind::FraudDetectionApp2, false),
            (PageKind::TransactionPredictor, false),
        ],
        builtins(),
    );

    let mut nav = Nav::default();
    assert_eq!(nav, Nav::MenuShown);
    assert!(nav.frame().is_none());

    assert!(nav.select(&router, "Home"));
    assert_eq!(nav.current_label(), Some("Home"));
    assert!(!nav.frame().unwrap().is_empty());

    // Same selection again: no re-dispatch
    assert!(!nav.select(&router, "Home"));

    assert!(nav.select(&router, "About"));
    assert_eq!(nav.current_label(), Some("About"));
    assert_eq!(
        nav.frame().unwrap().blocks()[0],
        Block::Heading { level: 1, text: "About".into() }
    );
}

#[cfg(unix)]
#[test]
fn relative_root_runs_scripts_from_inside_it() {
    // Relative to the test's working directory, like `root = "dash"` in dashboard.toml
    let dir = tempfile::tempdir_in(".").unwrap();
    let root = Path::new(".").join(dir.path().file_name().unwrap());
    assert!(root.is_relative());

    fs::create_dir_all(root.join("pages")).unwrap();
    fs::write(root.join("pages/transaction_predictor.py"), "cat marker.txt\n").unwrap();
    fs::write(root.join("marker.txt"), "inside root\n").unwrap();

    let mut cfg = DashConfig::default();
    cfg.root = root.clone();
    cfg.interpreters.insert("py".into(), "sh".into());

    let resolver = Resolver::new(ModuleRegistry::new(), ScriptRunner::new(&cfg.root, cfg.interpreters()));
    let router = Router::probed(cfg.catalog(), resolver);
    assert!(router.availability().is_available(PageKind::TransactionPredictor));

    let mut frame = Frame::new();
    match router.dispatch("Transaction Predictor", &mut frame) {
        Dispatch::Page(Outcome::Executed { path }) => {
            assert_eq!(path, root.join("pages/transaction_predictor.py"));
        }
        other => panic!("expected Executed, got {other:?} with {:?}", frame.blocks()),
    }
    assert_eq!(frame.blocks(), [Block::Output("inside root".into())]);
}
