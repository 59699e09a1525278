// src/pages/welcome.rs
use crate::config::consts::{WELCOME_FN, WELCOME_MODULE};
use crate::core::{Frame, Module};

pub fn module() -> Module {
    Module::new(WELCOME_MODULE).export(WELCOME_FN, |frame| {
        show_welcome_page(frame);
        Ok(())
    })
}

fn show_welcome_page(frame: &mut Frame) {
    frame.heading(1, "Fraud Detection");
    frame.text(
        "Screen card transactions for fraud and estimate the risk of new ones. \
         Pick a tool from the sidebar; tools that aren't installed are hidden.",
    );
    frame.heading(2, "Tools");
    frame.table(
        strings!["Tool", "What it does"],
        vec![
            strings!["Fraud Detection", "Legacy single-model scoring"],
            strings!["Fraud Detection (RAW/PCA)", "Score on raw features or PCA components"],
            strings!["Transaction Predictor", "Estimate fraud probability for one transaction"],
        ],
    );
}
