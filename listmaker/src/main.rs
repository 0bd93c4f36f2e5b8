//! Console list manager.
//!
//! Opens, edits and saves simple lists of text items, one item per line.
//! Saved lists go to `lists/<name>.txt` under the working directory unless
//! configured otherwise.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use listmaker::console::Console;
use listmaker::io::chooser::PromptFileChooser;
use listmaker::io::config::{DEFAULT_CONFIG_FILE, load_config};
use listmaker::io::input::InputReader;
use listmaker::io::list_store::ListStore;
use listmaker::logging;
use listmaker::session::ListSession;

#[derive(Parser)]
#[command(
    name = "listmaker",
    version,
    about = "Open, edit and save simple text lists"
)]
struct Cli {
    /// Configuration file (TOML). Missing file means defaults.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Directory saved lists are written to (overrides the config file).
    #[arg(long)]
    lists_dir: Option<PathBuf>,

    /// List file to open at startup.
    file: Option<PathBuf>,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("resolve working directory")?;

    let mut config = load_config(&cwd.join(&cli.config)).context("load config")?;
    if let Some(lists_dir) = cli.lists_dir {
        config.lists_dir = lists_dir;
        config.validate().context("validate --lists-dir")?;
    }
    let store = ListStore::from_config(&config, &cwd);
    debug!(lists_dir = %store.dir().display(), "list store ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let input = InputReader::new(stdin.lock(), stdout.lock());
    let mut console = Console::new(
        input,
        ListSession::new(store),
        PromptFileChooser::new(&cwd),
    )
    .context("build console")?;

    if let Some(file) = cli.file {
        console
            .open_path(&cwd.join(file))
            .context("open startup list")?;
    }
    console.run().context("interactive session")?;
    Ok(())
}
