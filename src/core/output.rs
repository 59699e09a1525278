// src/core/output.rs
//
// Retained render output. Pages (modules or scripts) write blocks into a Frame;
// the GUI draws it and the CLI prints it. Nothing here knows about egui.

use std::fmt::{self, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl Level {
    pub fn tag(self) -> &'static str {
        match self {
            Level::Info    => "info",
            Level::Warning => "warning",
            Level::Error   => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Text(String),
    /// Captured program output, shown monospace.
    Output(String),
    Table { headers: Vec<String>, rows: Vec<Vec<String>> },
    Notice(Level, String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    blocks: Vec<Block>,
}

impl Frame {
    pub fn new() -> Self { Self::default() }

    pub fn blocks(&self) -> &[Block] { &self.blocks }
    pub fn is_empty(&self) -> bool { self.blocks.is_empty() }

    pub fn push(&mut self, block: Block) { self.blocks.push(block); }

    pub fn heading(&mut self, level: u8, text: impl Into<String>) {
        self.push(Block::Heading { level: level.clamp(1, 3), text: text.into() });
    }

    pub fn text(&mut self, text: impl Into<String>) { self.push(Block::Text(text.into())); }

    pub fn output(&mut self, text: impl Into<String>) { self.push(Block::Output(text.into())); }

    pub fn table(&mut self, headers: Vec<String>, rows: Vec<Vec<String>>) {
        self.push(Block::Table { headers, rows });
    }

    pub fn info(&mut self, msg: impl Into<String>) { self.push(Block::Notice(Level::Info, msg.into())); }
    pub fn warning(&mut self, msg: impl Into<String>) { self.push(Block::Notice(Level::Warning, msg.into())); }
    pub fn error(&mut self, msg: impl Into<String>) { self.push(Block::Notice(Level::Error, msg.into())); }

    /// Messages of the given notice level, in order.
    pub fn notices(&self, level: Level) -> impl Iterator<Item = &str> + '_ {
        self.blocks.iter().filter_map(move |b| match b {
            Block::Notice(l, msg) if *l == level => Some(msg.as_str()),
            _ => None,
        })
    }
}

/// Plain-text rendering for terminals and logs.
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = s!();
        for block in &self.blocks {
            match block {
                Block::Heading { level, text } => {
                    let _ = writeln!(out, "{} {}", "#".repeat(*level as usize), text);
                }
                Block::Text(t) => { let _ = writeln!(out, "{t}"); }
                Block::Output(t) => {
                    for line in t.lines() {
                        let _ = writeln!(out, "    {line}");
                    }
                }
                Block::Table { headers, rows } => {
                    let _ = writeln!(out, "{}", headers.join(" | "));
                    for r in rows {
                        let _ = writeln!(out, "{}", r.join(" | "));
                    }
                }
                Block::Notice(level, msg) => {
                    let _ = writeln!(out, "[{}] {}", level.tag(), msg);
                }
            }
        }
        f.write_str(out.trim_end())
    }
}
