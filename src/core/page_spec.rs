// src/core/page_spec.rs
use std::path::{Path, PathBuf};

/// The optional analytic pages the shell knows how to find.
/// Order here is menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageKind {
    /// Legacy single-model fraud detection.
    FraudDetection,
    /// Fraud detection on RAW or PCA features.
    FraudDetectionApp2,
    TransactionPredictor,
}

impl PageKind {
    pub const ALL: [PageKind; 3] = [
        PageKind::FraudDetection,
        PageKind::FraudDetectionApp2,
        PageKind::TransactionPredictor,
    ];

    /// Stable key used in `dashboard.toml` (`[pages.<key>]`).
    pub fn key(self) -> &'static str {
        match self {
            PageKind::FraudDetection       => "fraud_detection",
            PageKind::FraudDetectionApp2   => "fraud_detection_app2",
            PageKind::TransactionPredictor => "transaction_predictor",
        }
    }

    pub fn from_key(key: &str) -> Option<PageKind> {
        PageKind::ALL.into_iter().find(|k| k.key() == key)
    }
}

/// Static description of a logical page and where its entry point may live.
/// Built once at startup; never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageSpec {
    pub kind: PageKind,
    pub label: String,
    pub icon: String,
    /// Registry ids, tried in order.
    pub modules: Vec<String>,
    /// Entry-point names tried per module, specific before generic.
    pub functions: Vec<String>,
    /// Script paths tried as a last resort.
    pub files: Vec<PathBuf>,
}

impl PageSpec {
    pub fn new(kind: PageKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            icon: s!(),
            modules: Vec::new(),
            functions: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self { self.icon = icon.into(); self }

    pub fn modules<I, S>(mut self, ids: I) -> Self
    where I: IntoIterator<Item = S>, S: Into<String> {
        self.modules = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn functions<I, S>(mut self, names: I) -> Self
    where I: IntoIterator<Item = S>, S: Into<String> {
        self.functions = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn files<I, P>(mut self, paths: I) -> Self
    where I: IntoIterator<Item = P>, P: Into<PathBuf> {
        self.files = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Anchor relative file candidates at the dashboard root.
    pub fn rooted(mut self, root: &Path) -> Self {
        for f in &mut self.files {
            if f.is_relative() {
                *f = root.join(&*f);
            }
        }
        self
    }
}
