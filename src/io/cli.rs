//! Command-line interface for replaying stroke scripts onto an autotiled map

use crate::algorithm::session::{EditorSession, Scheme};
use crate::io::configuration::{DEFAULT_TILE_SIZE, SCRIPT_EXTENSION, SessionConfig};
use crate::io::error::{ErrorContext, Result, WithContext};
use crate::io::progress::ProgressManager;
use crate::io::script::StrokeScript;
use clap::Parser;
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "autotile")]
#[command(
    author,
    version,
    about = "Replay paint/erase strokes and print the resulting tile indices"
)]
/// Command-line arguments for the stroke replay tool
pub struct Cli {
    /// Stroke script or directory of `.strokes` scripts
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Encoding scheme used for every stroke
    #[arg(short, long, value_enum, default_value_t = Scheme::Corner)]
    pub scheme: Scheme,

    /// Grid rows (defaults depend on the scheme)
    #[arg(short, long)]
    pub rows: Option<usize>,

    /// Grid columns (defaults depend on the scheme)
    #[arg(short, long)]
    pub cols: Option<usize>,

    /// Tile size in pixels, used to map `px` strokes
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: f32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Session parameters after applying scheme defaults
    pub fn session_config(&self) -> SessionConfig {
        let defaults = SessionConfig::for_scheme(self.scheme);
        SessionConfig {
            rows: self.rows.unwrap_or(defaults.rows),
            cols: self.cols.unwrap_or(defaults.cols),
            tile_width: self.tile_size,
            tile_height: self.tile_size,
            ..defaults
        }
    }
}

/// Orchestrates batch replay of stroke scripts with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Replay scripts according to CLI arguments, printing maps to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, script parsing, replay or
    /// writing the output fails
    pub fn process(&mut self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.process_to(&mut out)
    }

    /// Replay scripts according to CLI arguments, writing maps to `out`
    ///
    /// A single script prints its bare tile map; a directory prefixes each
    /// map with a `== name ==` header.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, script parsing, replay or
    /// writing the output fails
    pub fn process_to<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let result = self.replay_files(&files, out);

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        result
    }

    /// Progress display, absent when running quietly
    pub const fn progress(&self) -> Option<&ProgressManager> {
        self.progress_manager.as_ref()
    }

    fn replay_files<W: Write>(&mut self, files: &[PathBuf], out: &mut W) -> Result<()> {
        let with_headers = files.len() > 1 || self.cli.target.is_dir();
        for (index, file) in files.iter().enumerate() {
            let session = self.process_file(file, index)?;

            let write_context = ErrorContext {
                path: Some(file.clone()),
                operation: Some("write tile map"),
                ..Default::default()
            };
            if with_headers {
                let name = file.file_name().unwrap_or_default().to_string_lossy();
                writeln!(out, "== {name} ==").with_context(write_context.clone())?;
            }
            write!(out, "{}", session.grid()).with_context(write_context)?;
        }
        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            Ok(vec![self.cli.target.clone()])
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if Self::is_script(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(crate::io::error::io_error(
                "Target must be a stroke script or directory",
            ))
        }
    }

    fn is_script(path: &Path) -> bool {
        path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(SCRIPT_EXTENSION)
    }

    fn process_file(&mut self, path: &Path, index: usize) -> Result<EditorSession> {
        let script = StrokeScript::from_path(path)?;
        let mut session = EditorSession::new(&self.cli.session_config())?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, path, script.len());
        }

        let summary = match self.progress_manager {
            Some(ref mut pm) => {
                script.replay_with(&mut session, |done| pm.update_strokes(index, done))?
            }
            None => script.replay(&mut session)?,
        };

        info!(
            "{}: {} strokes applied, {} off-map, {} cells filled",
            path.display(),
            summary.applied,
            summary.skipped,
            session.grid().filled_count()
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(session)
    }
}
