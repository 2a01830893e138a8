//! Tests for command-line parsing and stroke script replay

#[cfg(test)]
mod tests {
    use autotile::AutotileError;
    use autotile::algorithm::Scheme;
    use autotile::io::cli::{Cli, FileProcessor};
    use autotile::io::progress::ProgressManager;
    use autotile::io::configuration::{CORNER_DEFAULT_ROWS, DEFAULT_TILE_SIZE, VERTEX_DEFAULT_COLS};
    use clap::Parser;
    use std::path::PathBuf;

    fn run(args: &[&str]) -> autotile::Result<String> {
        let cli = Cli::parse_from(args.iter().copied());
        let mut processor = FileProcessor::new(cli);
        let mut out = Vec::new();
        processor.process_to(&mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    // Tests CLI parsing with only the required target
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "map.strokes"]);

        assert_eq!(cli.target, PathBuf::from("map.strokes"));
        assert_eq!(cli.scheme, Scheme::Corner);
        assert_eq!(cli.rows, None);
        assert!((cli.tile_size - DEFAULT_TILE_SIZE).abs() < f32::EPSILON);
        assert!(cli.should_show_progress());

        let config = cli.session_config();
        assert_eq!(config.rows, CORNER_DEFAULT_ROWS);
    }

    // Tests CLI parsing with all available arguments
    // Verified by ignoring the explicit row count
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "maps",
            "--scheme",
            "vertex",
            "--rows",
            "4",
            "--tile-size",
            "16",
            "--quiet",
        ]);

        assert_eq!(cli.scheme, Scheme::Vertex);
        assert!(!cli.should_show_progress());

        let config = cli.session_config();
        assert_eq!(config.scheme, Scheme::Vertex);
        assert_eq!(config.rows, 4);
        assert_eq!(config.cols, VERTEX_DEFAULT_COLS);
        assert!((config.tile_width - 16.0).abs() < f32::EPSILON);
    }

    // Tests a single script prints its bare tile map
    // Verified by printing masks before replay
    #[test]
    fn test_process_single_script() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.strokes");
        std::fs::write(&path, "paint 0 0\n").unwrap();

        let output = run(&[
            "program",
            path.to_str().unwrap(),
            "--rows",
            "2",
            "--cols",
            "3",
            "--quiet",
        ])
        .unwrap();

        assert_eq!(output, "f 5 0\n3 1 0\n");
    }

    // Tests directories replay every script in name order with headers
    // Verified by skipping the sort of collected files
    #[test]
    fn test_process_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.strokes"), "paint 1 1\n").unwrap();
        std::fs::write(dir.path().join("a.strokes"), "paint 0 0\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "paint 0 0\n").unwrap();

        let output = run(&[
            "program",
            dir.path().to_str().unwrap(),
            "--scheme",
            "vertex",
            "--rows",
            "1",
            "--cols",
            "1",
            "--quiet",
        ])
        .unwrap();

        assert_eq!(output, "== a.strokes ==\n1\n== b.strokes ==\n8\n");
    }

    // Tests missing targets are rejected
    // Verified by treating missing targets as empty directories
    #[test]
    fn test_missing_target() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let result = run(&["program", missing.to_str().unwrap(), "--quiet"]);
        assert!(matches!(
            result,
            Err(AutotileError::InvalidParameter { parameter: "path", .. })
        ));
    }

    // Tests replay errors propagate with their script line
    // Verified by ignoring stroke errors during replay
    #[test]
    fn test_replay_error_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.strokes");
        std::fs::write(&path, "paint 0 0\npaint 5 5\n").unwrap();

        let result = run(&[
            "program",
            path.to_str().unwrap(),
            "--rows",
            "2",
            "--cols",
            "2",
            "--quiet",
        ]);
        assert!(matches!(
            result,
            Err(AutotileError::ScriptParse { line: 2, .. })
        ));
    }

    // Tests progress displays are cleaned up when a script fails
    // Verified by returning before finishing the progress manager
    #[test]
    fn test_progress_finished_after_replay_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.strokes"), "paint 0 0\n").unwrap();
        std::fs::write(dir.path().join("b.strokes"), "paint 9 9\n").unwrap();

        let cli = Cli::parse_from([
            "program",
            dir.path().to_str().unwrap(),
            "--rows",
            "2",
            "--cols",
            "2",
        ]);
        let mut processor = FileProcessor::new(cli);
        let mut out = Vec::new();

        let result = processor.process_to(&mut out);
        assert!(matches!(
            result,
            Err(AutotileError::ScriptParse { line: 1, .. })
        ));
        assert!(processor.progress().is_some_and(ProgressManager::is_finished));
    }
}
