// src/config/settings.rs
//
// dashboard.toml. Every field is optional; a missing file means defaults.
//
//   root = "."
//   menu = "auto"            # auto | rich | plain
//   [interpreters]
//   py = "python3 -u"
//   [pages.transaction_predictor]
//   files = ["tools/predictor.py"]
//   [[sync]]
//   name = "Model"
//   from = "../training/models"
//   to = "models"

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::consts::*;
use crate::core::{PageKind, PageSpec};
use crate::error::ConfigError;
use crate::pages::default_catalog;

/// Which menu renderer to use. `Auto` picks the rich menu when it was compiled in.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MenuChoice {
    #[default]
    Auto,
    Rich,
    Plain,
}

/// Replaces (not extends) the matching candidate list of a catalog page.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PageOverride {
    pub label: Option<String>,
    pub modules: Option<Vec<String>>,
    pub functions: Option<Vec<String>>,
    pub files: Option<Vec<PathBuf>>,
}

/// One best-effort copy performed at startup.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SyncTask {
    pub name: String,
    pub from: PathBuf,
    pub to: PathBuf,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DashConfig {
    pub root: PathBuf,
    pub title: String,
    pub menu: MenuChoice,
    pub log_file: PathBuf,
    pub icon: Option<PathBuf>,
    /// Merged over `DEFAULT_INTERPRETERS`.
    pub interpreters: BTreeMap<String, String>,
    pub pages: BTreeMap<String, PageOverride>,
    pub sync: Vec<SyncTask>,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            title: s!(DEFAULT_TITLE),
            menu: MenuChoice::Auto,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            icon: None,
            interpreters: BTreeMap::new(),
            pages: BTreeMap::new(),
            sync: Vec::new(),
        }
    }
}

impl DashConfig {
    /// Missing file → defaults. Unreadable or invalid file → error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            logd!("Config: {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let cfg = Self::parse(&text)?;
        logf!("Config: loaded {}", path.display());
        Ok(cfg)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let cfg: DashConfig = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for key in self.pages.keys() {
            if PageKind::from_key(key).is_none() {
                let known = PageKind::ALL.map(PageKind::key).join(", ");
                return Err(ConfigError::UnknownPage(key.clone(), known));
            }
        }

        // Dispatch goes by label, so a repeated one leaves a dead entry
        let mut seen = vec![HOME_LABEL, ABOUT_LABEL];
        let catalog = default_catalog();
        for spec in &catalog {
            let label = self
                .pages
                .get(spec.kind.key())
                .and_then(|o| o.label.as_deref())
                .unwrap_or(spec.label.as_str());
            if seen.contains(&label) {
                return Err(ConfigError::DuplicateLabel(s!(label)));
            }
            seen.push(label);
        }
        Ok(())
    }

    pub fn interpreters(&self) -> BTreeMap<String, String> {
        let mut map: BTreeMap<String, String> = DEFAULT_INTERPRETERS
            .iter()
            .map(|(ext, cmd)| (s!(*ext), s!(*cmd)))
            .collect();
        map.extend(self.interpreters.clone());
        map
    }

    /// Path relative to the dashboard root (absolute paths pass through).
    pub fn rooted(&self, p: &Path) -> PathBuf {
        if p.is_absolute() { p.to_path_buf() } else { self.root.join(p) }
    }

    /// Default catalog with `[pages.*]` overrides applied, files anchored at `root`.
    pub fn catalog(&self) -> Vec<PageSpec> {
        default_catalog()
            .into_iter()
            .map(|mut spec| {
                if let Some(o) = self.pages.get(spec.kind.key()) {
                    if let Some(label) = &o.label { spec.label = label.clone(); }
                    if let Some(m) = &o.modules { spec.modules = m.clone(); }
                    if let Some(f) = &o.functions { spec.functions = f.clone(); }
                    if let Some(f) = &o.files { spec.files = f.clone(); }
                }
                spec.rooted(&self.root)
            })
            .collect()
    }
}
