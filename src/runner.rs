use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cli::{Cli, Command};
use crate::fs::{DryRunFs, LocalFs};
use crate::layout::ProjectLayout;
use crate::scaffold::{self, flutter};

const SUCCESS_MESSAGE: &str = "Project structure created successfully!";

pub fn run(cli: Cli) -> Result<()> {
    let ctx = CliContext::from(&cli);
    ctx.apply_chdir()?;

    match cli.command.unwrap_or(Command::Init) {
        Command::Init => handle_init(&ctx),
        Command::List { json } => handle_list(&flutter::LAYOUT, json),
    }
}

fn handle_init(ctx: &CliContext) -> Result<()> {
    if ctx.dry_run {
        scaffold::install(DryRunFs)?;
        return Ok(());
    }

    let local = scaffold::install(LocalFs::default())
        .with_context(|| format!("creating the {}/ skeleton", flutter::BASE_DIR))?;
    info!(root = %local.root(), "skeleton ready");
    println!("{SUCCESS_MESSAGE}");
    Ok(())
}

fn handle_list(layout: &ProjectLayout, json: bool) -> Result<()> {
    print!("{}", render_listing(layout, json)?);
    Ok(())
}

#[derive(Debug, Serialize)]
struct ListedEntry {
    kind: &'static str,
    path: String,
}

fn render_listing(layout: &ProjectLayout, json: bool) -> Result<String> {
    if json {
        let entries: Vec<ListedEntry> = layout
            .entries()
            .map(|entry| ListedEntry {
                kind: entry.kind(),
                path: entry.path().to_string(),
            })
            .collect();
        let mut out = serde_json::to_string_pretty(&entries).context("encoding layout as JSON")?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    for entry in layout.entries() {
        let _ = writeln!(out, "{}", entry.display_path());
    }
    Ok(out)
}

struct CliContext {
    chdir: Option<PathBuf>,
    dry_run: bool,
}

impl From<&Cli> for CliContext {
    fn from(cli: &Cli) -> Self {
        Self {
            chdir: cli.chdir.clone(),
            dry_run: cli.dry_run,
        }
    }
}

impl CliContext {
    fn apply_chdir(&self) -> Result<()> {
        if let Some(path) = &self.chdir {
            std::env::set_current_dir(path)
                .with_context(|| format!("changing directory to {}", path.display()))?;
        }
        Ok(())
    }
}
