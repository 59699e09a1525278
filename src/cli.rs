// src/cli.rs
//
// Terminal front end: same router, frames printed as text.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    config::{consts::DEFAULT_CONFIG_FILE, DashConfig},
    core::{probe, Frame},
    dashboard::Dashboard,
    router::Dispatch,
};

#[derive(Debug, Parser)]
#[command(name = "fraud_dash", version, about = "Fraud detection dashboard shell (terminal)")]
pub struct Cli {
    /// Config file (missing file → defaults)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Dashboard root; overrides `root` from the config file
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the visible menu entries
    Menu,
    /// Show which candidate makes each optional page available
    Probe,
    /// Render a page and print it
    Open {
        /// Menu label, e.g. "Transaction Predictor"
        label: String,
    },
}

pub fn run(cli: Cli) -> color_eyre::Result<()> {
    let mut config = DashConfig::load(&cli.config)?;
    if let Some(root) = cli.root {
        config.root = root;
    }
    if let Err(e) = crate::log::init(&config.log_file) {
        eprintln!("Logging disabled: {e}");
    }

    let dash = Dashboard::start(config, Frame::new());
    if !dash.notices.is_empty() {
        eprintln!("{}", dash.notices);
    }

    match cli.command {
        Command::Menu => {
            for (i, e) in dash.router.menu().iter().enumerate() {
                println!("{:>2}. {}  {}", i + 1, e.icon, e.label);
            }
        }
        Command::Probe => {
            let registry = dash.router.resolver().registry();
            for spec in dash.router.catalog() {
                match probe::find_candidate(spec, registry) {
                    Some(hit) => println!("{:<28} available  ({hit})", spec.label),
                    None      => println!("{:<28} missing", spec.label),
                }
            }
        }
        Command::Open { label } => {
            let mut frame = Frame::new();
            let result = dash.router.dispatch(&label, &mut frame);
            println!("{frame}");
            if let Dispatch::Unavailable = result {
                let known: Vec<String> = dash.router.labels();
                eprintln!("Known pages: {}", known.join(", "));
            }
        }
    }
    Ok(())
}

