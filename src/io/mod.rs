//! Shell-facing input/output and configuration
//!
//! Everything the core needs from, or hands back to, an editor shell:
//! errors, defaults, atlas slicing, stroke scripts and the replay CLI.

/// Tile atlas slicing and variant fill decoding
pub mod atlas;
/// Command-line replay of stroke scripts
pub mod cli;
/// Constants and session configuration
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Replay progress display
pub mod progress;
/// Stroke script parsing and replay
pub mod script;
