//! Line-based stroke scripts for replaying editor input
//!
//! One stroke per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! paint 3 4        # grid coordinates (cell or vertex, per scheme)
//! erase 3 4
//! paint px 100 64  # pointer position in pixels
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::algorithm::autotiler::{Action, StrokeEvent};
use crate::algorithm::session::EditorSession;
use crate::io::error::{AutotileError, ErrorContext, Result, WithContext};

/// Where a scripted stroke lands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeTarget {
    /// Grid coordinates used as-is
    Grid {
        /// Origin row
        row: usize,
        /// Origin column
        col: usize,
    },
    /// Screen position mapped through the session's pointer layout
    Pointer {
        /// Pointer x in pixels
        x: f32,
        /// Pointer y in pixels
        y: f32,
    },
}

/// One parsed script line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptCommand {
    /// 1-based source line
    pub line: usize,
    /// Paint or erase
    pub action: Action,
    /// Stroke origin
    pub target: StrokeTarget,
}

/// Outcome of replaying a script onto a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Strokes that reached the map
    pub applied: usize,
    /// Pointer strokes that fell off the map
    pub skipped: usize,
}

/// Parsed sequence of strokes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeScript {
    commands: Vec<ScriptCommand>,
}

impl StrokeScript {
    /// Parse script text
    ///
    /// # Errors
    ///
    /// Returns `ScriptParse` with the offending line number for unknown
    /// actions, missing or extra operands, or malformed numbers
    pub fn parse(text: &str) -> Result<Self> {
        let mut commands = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let content = raw.split('#').next().unwrap_or_default().trim();
            if content.is_empty() {
                continue;
            }
            commands.push(Self::parse_line(line, content)?);
        }

        Ok(Self { commands })
    }

    /// Read and parse a script file
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be read and `ScriptParse` if
    /// its contents are malformed
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_context(ErrorContext {
            path: Some(path.to_path_buf()),
            operation: Some("read script"),
            ..Default::default()
        })?;
        Self::parse(&text)
    }

    /// Parsed commands in script order
    pub const fn commands(&self) -> &[ScriptCommand] {
        self.commands.as_slice()
    }

    /// Number of strokes in the script
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the script holds no strokes
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Apply every stroke to a session in order
    ///
    /// # Errors
    ///
    /// Stops at the first stroke the session rejects and reports it as a
    /// `ScriptParse` error against that line
    pub fn replay(&self, session: &mut EditorSession) -> Result<ReplaySummary> {
        self.replay_with(session, |_| {})
    }

    /// Apply every stroke, reporting the count processed after each one
    ///
    /// # Errors
    ///
    /// Stops at the first stroke the session rejects and reports it as a
    /// `ScriptParse` error against that line
    pub fn replay_with<F>(
        &self,
        session: &mut EditorSession,
        mut on_step: F,
    ) -> Result<ReplaySummary>
    where
        F: FnMut(usize),
    {
        let mut summary = ReplaySummary::default();

        for (done, command) in self.commands.iter().enumerate() {
            match command.target {
                StrokeTarget::Grid { row, col } => {
                    session
                        .apply(StrokeEvent {
                            action: command.action,
                            row,
                            col,
                        })
                        .with_line(command.line)?;
                    summary.applied += 1;
                }
                StrokeTarget::Pointer { x, y } => {
                    let hit = session
                        .apply_at_pointer(command.action, x, y)
                        .with_line(command.line)?;
                    if hit.is_some() {
                        summary.applied += 1;
                    } else {
                        summary.skipped += 1;
                    }
                }
            }
            on_step(done + 1);
        }

        debug!(
            "replayed {} strokes ({} skipped)",
            summary.applied, summary.skipped
        );
        Ok(summary)
    }

    fn parse_line(line: usize, content: &str) -> Result<ScriptCommand> {
        let mut tokens = content.split_whitespace();

        let action = match tokens.next() {
            Some("paint") => Action::Paint,
            Some("erase") => Action::Erase,
            Some(other) => {
                return Err(AutotileError::ScriptParse {
                    line,
                    reason: format!("unknown action '{other}'"),
                });
            }
            None => {
                return Err(AutotileError::ScriptParse {
                    line,
                    reason: "empty command".to_string(),
                });
            }
        };

        let operands: Vec<&str> = tokens.collect();
        let target = match operands.as_slice() {
            ["px", x, y] => StrokeTarget::Pointer {
                x: Self::parse_number(line, "x", x)?,
                y: Self::parse_number(line, "y", y)?,
            },
            [row, col] => StrokeTarget::Grid {
                row: Self::parse_number(line, "row", row)?,
                col: Self::parse_number(line, "col", col)?,
            },
            _ => {
                return Err(AutotileError::ScriptParse {
                    line,
                    reason: format!(
                        "expected '{} <row> <col>' or '{} px <x> <y>'",
                        action.keyword(),
                        action.keyword()
                    ),
                });
            }
        };

        Ok(ScriptCommand {
            line,
            action,
            target,
        })
    }

    fn parse_number<T>(line: usize, name: &str, token: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        token.parse().map_err(|error| AutotileError::ScriptParse {
            line,
            reason: format!("invalid {name} '{token}': {error}"),
        })
    }
}
