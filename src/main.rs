use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use notes::core::config::{self, ResolvedConfig};
use notes::core::editor::CommandEditor;
use notes::core::error::NotesError;
use notes::core::state::App;
use notes::core::store::FsStore;
use notes::core::write::{Mode, write_note};
use notes::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(
    name = "notes",
    about = "Plain-text notes in notebooks",
    long_about = "Without arguments, browse notebooks. With a notebook name, write a new note in it."
)]
struct Args {
    /// Notebook to write a new note into (omit to browse)
    #[arg(value_name = "NOTEBOOK")]
    notebooks: Vec<String>,

    /// Notes directory [default: $NOTES_DIR or ~/.notes]
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), NotesError> {
    // Validate before anything touches the disk
    let mode = Mode::from_args(&args.notebooks)?;

    dotenv::dotenv().ok();
    init_logging();

    let config = config::resolve(args.root.as_deref())?;
    log::info!("Notes starting up in {:?} mode, root {}", mode, config.root.display());

    match mode {
        Mode::Browse => browse(&config),
        Mode::Write(notebook) => {
            let store = FsStore::new(&config.root);
            let editor = CommandEditor::new(&config.editor);
            let path = write_note(&store, &editor, &notebook)?;
            println!("Created: {}", path.display());
            Ok(())
        }
    }
}

fn browse(config: &ResolvedConfig) -> Result<(), NotesError> {
    // Startup enumeration failing is fatal: there is nothing to browse
    let app = App::new(Box::new(FsStore::new(&config.root)))?;
    let editor = CommandEditor::new(&config.editor);
    tui::run(app, &editor).map_err(NotesError::Terminal)
}

/// File logger - the terminal belongs to the TUI.
fn init_logging() {
    let Some(path) = config::log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&path) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }
}
