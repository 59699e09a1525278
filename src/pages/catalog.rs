// src/pages/catalog.rs
use crate::core::{PageKind, PageSpec};

/// Entry names tried after the page-specific one.
const GENERIC_ENTRIES: [&str; 5] = ["main", "run", "app", "render", "show"];

fn entries(specific: &[&str]) -> Vec<String> {
    specific.iter().chain(GENERIC_ENTRIES.iter()).map(|s| s!(*s)).collect()
}

/// The optional pages in menu order. File candidates are relative to the
/// dashboard root; anchor them with `PageSpec::rooted`.
pub fn default_catalog() -> Vec<PageSpec> {
    vec![
        PageSpec::new(PageKind::FraudDetection, "Fraud Detection")
            .icon("📊")
            .modules(["pages.fraud_detection"])
            .functions(entries(&["fraud_detection_app"]))
            .files([
                "src/pages/fraud_detection.py",
                "pages/fraud_detection.py",
                "fraud_detection.py",
            ]),

        PageSpec::new(PageKind::FraudDetectionApp2, "Fraud Detection (RAW/PCA)")
            .icon("📈")
            .modules(["pages.fraud_detection_app2", "pages.Fraud_Detection_App2"])
            .functions(entries(&["fraud_detection_app2"]))
            .files([
                "src/pages/fraud_detection_app2.py",
                "src/pages/Fraud_Detection_App2.py",
                "pages/fraud_detection_app2.py",
                "pages/Fraud_Detection_App2.py",
                "fraud_detection_app2.py",
                "Fraud_Detection_App2.py",
            ]),

        PageSpec::new(PageKind::TransactionPredictor, "Transaction Predictor")
            .icon("🧮")
            .modules(["pages.transaction_predictor"])
            .functions(entries(&["transaction_predictor", "fraud_detection_app2"]))
            .files([
                "src/pages/03_Transaction_Predictor.py",
                "pages/03_Transaction_Predictor.py",
                "03_Transaction_Predictor.py",
                "src/pages/transaction_predictor.py",
                "pages/transaction_predictor.py",
            ]),
    ]
}
