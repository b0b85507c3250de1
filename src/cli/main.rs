use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use dirsort::core::config::Config;
use dirsort::core::telemetry::logging::init_logging;
use dirsort::ui::format::format_entries;
use dirsort::ui::Shell;
use dirsort::{DirectoryView, FileEntry, SortKey};

/// List and sort the files of a directory.
#[derive(Debug, Parser)]
#[command(name = "dirsort", version)]
struct Cli {
    /// Directory to open (defaults to the working directory)
    path: Option<PathBuf>,

    /// Sort key: name or size
    #[arg(long)]
    sort: Option<SortKey>,

    /// Sort in descending order
    #[arg(long, conflicts_with = "asc")]
    desc: bool,

    /// Sort in ascending order (overrides `descending` from the config file)
    #[arg(long)]
    asc: bool,

    /// Print the listing as JSON
    #[arg(long, conflicts_with = "interactive")]
    json: bool,

    /// Read navigation commands from stdin
    #[arg(short, long)]
    interactive: bool,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Command-line direction flags win over the config file.
    fn descending(&self, config: &Config) -> bool {
        if self.desc {
            true
        } else if self.asc {
            false
        } else {
            config.descending
        }
    }
}

#[derive(Serialize)]
struct Snapshot<'a> {
    path: String,
    entries: &'a [FileEntry],
    subdirectories: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_optional(cli.config.as_deref()).context("loading config")?;
    init_logging(&config.log_filter);

    let mut view = match cli.path.as_ref().or(config.start_dir.as_ref()) {
        Some(path) => DirectoryView::open(path),
        None => DirectoryView::new(),
    }
    .context("opening start directory")?;

    let key = cli.sort.unwrap_or(config.sort_key);
    let descending = cli.descending(&config);
    view.sorted_entries(key, descending);
    tracing::debug!("initial sort by {} (descending: {})", key, descending);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.interactive {
        let stdin = io::stdin();
        Shell::new(&mut view).run(stdin.lock(), &mut out)?;
        return Ok(());
    }

    let subdirectories = view.list_subdirectory_names()?;
    if cli.json {
        let snapshot = Snapshot {
            path: view.current_path().display().to_string(),
            entries: view.entries(),
            subdirectories,
        };
        serde_json::to_writer_pretty(&mut out, &snapshot)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", view.current_path().display())?;
        for line in format_entries(view.entries()) {
            writeln!(out, "{}", line)?;
        }
        for name in subdirectories {
            writeln!(out, "[{}]", name)?;
        }
    }

    Ok(())
}
