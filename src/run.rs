//! One averaging run: read the input, average it, write the summary.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::accumulator::Accumulator;
use crate::error::AverageError;
use crate::record::parse_line;
use crate::summary::{write_summary, Summary};

/// Paths for a single run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Config {
    /// Both paths are required; any missing one is a usage error.
    pub fn new(input: Option<PathBuf>, output: Option<PathBuf>) -> Result<Self, AverageError> {
        match (input, output) {
            (Some(input), Some(output)) => Ok(Self { input, output }),
            (input, output) => {
                let mut missing = Vec::new();
                if input.is_none() {
                    missing.push("--input <FILE>");
                }
                if output.is_none() {
                    missing.push("--output <FILE>");
                }
                Err(AverageError::Usage(format!(
                    "please set a valid input file and output file (missing {})",
                    missing.join(", ")
                )))
            }
        }
    }
}

/// Fold every record of `reader` into an accumulator.
///
/// Every line must be a record; the first one that is not, blank lines
/// included, stops the read with [`AverageError::Parse`]. `source` only
/// labels I/O errors.
pub fn accumulate<R: BufRead>(reader: R, source: &Path) -> Result<Accumulator, AverageError> {
    let mut acc = Accumulator::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| AverageError::io_error(source, e))?;
        let line_no = idx + 1;

        let record = parse_line(&line).map_err(|e| AverageError::Parse {
            line: line_no,
            text: line.clone(),
            source: e,
        })?;
        acc.add(&record);
    }

    Ok(acc)
}

/// Average the records in the file at `path`.
pub fn average_file<P: AsRef<Path>>(path: P) -> Result<Summary, AverageError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| AverageError::io_error(path, e))?;
    let acc = accumulate(BufReader::new(file), path)?;

    info!(records = acc.count(), "input consumed");

    acc.finalize().map_err(|_| AverageError::EmptyInput {
        path: path.to_path_buf(),
    })
}

/// Run the whole pipeline for `config`.
///
/// The output file is only touched once the input has been fully read and
/// averaged, so a failed run leaves any existing output in place.
pub fn run(config: &Config) -> Result<Summary, AverageError> {
    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        "averaging started"
    );

    let summary = average_file(&config.input)?;
    write_summary(&config.output, &summary)?;

    info!(
        path = %config.output.display(),
        records = summary.records(),
        "summary written"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::LineError;
    use crate::Field;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    const LINE_A: &str = "Runtime: 10.0\tThroughput: 100.0\tPower: 5.0\tCommits: 2.0\tError: 0.0";
    const LINE_B: &str = "Runtime: 20.0\tThroughput: 200.0\tPower: 15.0\tCommits: 4.0\tError: 0.0";
    const EXPECTED: &str =
        "Net_runtime: 15.0\tNet_throughput: 150.0\tNet_power: 10.0\tNet_commits: 3.0\tNet_error: 0.0";

    fn config_in(dir: &Path, input: &str) -> Config {
        let input_path = dir.join("input.txt");
        fs::write(&input_path, input).unwrap();
        Config {
            input: input_path,
            output: dir.join("output.txt"),
        }
    }

    #[test]
    fn test_config_requires_both_paths() {
        let ok = Config::new(Some("in".into()), Some("out".into())).unwrap();
        assert_eq!(ok.input, PathBuf::from("in"));

        let err = Config::new(None, Some("out".into())).unwrap_err();
        assert!(matches!(&err, AverageError::Usage(m) if m.contains("--input") && !m.contains("--output")));

        let err = Config::new(None, None).unwrap_err();
        assert!(matches!(&err, AverageError::Usage(m) if m.contains("--input") && m.contains("--output")));
    }

    #[test]
    fn test_reference_scenario() {
        let dir = tempdir().unwrap();
        let cfg = config_in(dir.path(), &format!("{LINE_A}\n{LINE_B}\n"));

        let summary = run(&cfg).unwrap();
        assert_eq!(summary.records(), 2);
        assert_eq!(fs::read_to_string(&cfg.output).unwrap(), EXPECTED);
    }

    #[test]
    fn test_no_trailing_newline_and_crlf() {
        let dir = tempdir().unwrap();
        let cfg = config_in(dir.path(), &format!("{LINE_A}\r\n{LINE_B}"));

        run(&cfg).unwrap();
        assert_eq!(fs::read_to_string(&cfg.output).unwrap(), EXPECTED);
    }

    #[test]
    fn test_blank_line_mid_file_aborts() {
        let input = format!("{LINE_A}\n\t\t\n   \n{LINE_B}\n");
        let err = accumulate(Cursor::new(input), Path::new("mem")).unwrap_err();
        match err {
            AverageError::Parse { line, text, source } => {
                assert_eq!(line, 2);
                assert_eq!(text, "\t\t");
                assert_eq!(
                    source,
                    LineError::MissingColon {
                        field: Field::Runtime
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_trailing_newline_is_not_a_blank_line() {
        let acc = accumulate(Cursor::new(format!("{LINE_A}\n")), Path::new("mem")).unwrap();
        assert_eq!(acc.count(), 1);
    }

    #[test]
    fn test_empty_input_is_error_and_writes_nothing() {
        let dir = tempdir().unwrap();
        let cfg = config_in(dir.path(), "");

        let err = run(&cfg).unwrap_err();
        assert!(matches!(err, AverageError::EmptyInput { ref path } if *path == cfg.input));
        assert!(!cfg.output.exists());
    }

    #[test]
    fn test_blank_only_input_is_parse_error() {
        let dir = tempdir().unwrap();
        let cfg = config_in(dir.path(), "\n\n  \n");

        let err = run(&cfg).unwrap_err();
        assert!(matches!(err, AverageError::Parse { line: 1, .. }));
        assert!(!cfg.output.exists());
    }

    #[test]
    fn test_malformed_line_aborts_with_line_number() {
        let dir = tempdir().unwrap();
        let bad = "Runtime: 30.0\tThroughput 300.0\tPower: 1.0\tCommits: 1.0\tError: 0.0";
        let cfg = config_in(dir.path(), &format!("{LINE_A}\n{bad}\n{LINE_B}\n"));

        let err = run(&cfg).unwrap_err();
        match err {
            AverageError::Parse { line, text, source } => {
                assert_eq!(line, 2);
                assert_eq!(text, bad);
                assert_eq!(
                    source,
                    LineError::MissingColon {
                        field: Field::Throughput
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!cfg.output.exists());
    }

    #[test]
    fn test_failed_run_keeps_existing_output() {
        let dir = tempdir().unwrap();
        let cfg = config_in(dir.path(), "Runtime: 1.0\n");
        fs::write(&cfg.output, "previous").unwrap();

        assert!(run(&cfg).is_err());
        assert_eq!(fs::read_to_string(&cfg.output).unwrap(), "previous");
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let dir = tempdir().unwrap();
        let cfg = Config {
            input: dir.path().join("absent.txt"),
            output: dir.path().join("out.txt"),
        };

        let err = run(&cfg).unwrap_err();
        assert!(matches!(err, AverageError::Io { ref path, .. } if *path == cfg.input));
        assert!(err.to_string().contains("absent.txt"));
    }

    #[test]
    fn test_non_utf8_input_is_io_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.txt");
        fs::write(&input, [0xff, 0xfe, b'\n']).unwrap();

        let err = average_file(&input).unwrap_err();
        assert!(matches!(err, AverageError::Io { .. }));
    }
}
