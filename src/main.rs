//! sqleq CLI
//!
//! Split SQL scripts and compare query sequences from the command line.

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use itertools::Itertools as _;
use sqleq::{Config, Error, Operand, Query, Result, ScriptSplitter, compare, normalize, tokenize};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Whitespace-insensitive SQL query sequence comparison.
#[derive(Parser)]
#[command(name = "sqleq")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a script into statements.
    Split {
        /// Script to split.
        file: PathBuf,

        /// Initial statement delimiter (defaults to SQLEQ_DELIMITER or `;`).
        #[arg(short, long)]
        delimiter: Option<String>,

        /// Print each statement's normalized tokens instead of its raw text.
        #[arg(short, long)]
        tokens: bool,
    },

    /// Print the tokens of one statement, one per line.
    Tokenize {
        /// SQL statement.
        sql: String,
    },

    /// Compare two operands. `.json` files hold a string or nested array of
    /// strings; any other file is split as a script.
    Compare {
        expected: PathBuf,
        actual: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = run(cli.command, &config);
    match &result {
        Ok(()) => {}
        Err(Error::Mismatch(report)) => println!("{report}"),
        Err(e) => eprintln!("Error: {e}"),
    }
    ExitCode::from(status(&result))
}

/// 0 on success, 1 when the operands differ, 2 on any other failure.
fn status(result: &Result) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) if e.is_mismatch() => 1,
        Err(_) => 2,
    }
}

fn run(command: Commands, config: &Config) -> Result {
    match command {
        Commands::Split {
            file,
            delimiter,
            tokens,
        } => {
            let splitter = ScriptSplitter::with_delimiter(delimiter.unwrap_or_else(|| config.delimiter.clone()));
            let statements = splitter.load_file(&file)?;
            debug!("{} statement(s) in {}", statements.len(), file.display());
            let rendered = if tokens {
                normalize(statements).export()
            } else {
                statements
            };
            println!("{}", rendered.iter().join("\n\n"));
        }
        Commands::Tokenize { sql } => {
            for token in tokenize(&sql).iter() {
                println!("{token}");
            }
        }
        Commands::Compare { expected, actual } => {
            let expected = operand(&expected, Operand::First, config)?;
            let actual = operand(&actual, Operand::Second, config)?;
            compare(expected, actual)?;
            println!("OK");
        }
    }
    Ok(())
}

fn operand(path: &Path, position: Operand, config: &Config) -> Result<Query> {
    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
        let text = std::fs::read_to_string(path).map_err(|source| Error::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let value: serde_json::Value = serde_json::from_str(&text)?;
        return Query::from_json(position, &value);
    }
    Ok(Query::from(
        ScriptSplitter::with_delimiter(config.delimiter.clone()).load_file(path)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn config() -> Config {
        Config {
            delimiter: ";".to_owned(),
            log: "warn".to_owned(),
        }
    }

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).expect("write fixture");
        path
    }

    fn compare_files(expected: (&str, &str), actual: (&str, &str)) -> Result {
        let dir = TempDir::new().expect("temp dir");
        let command = Commands::Compare {
            expected: write(&dir, expected.0, expected.1),
            actual: write(&dir, actual.0, actual.1),
        };
        run(command, &config())
    }

    #[test]
    fn json_operand_is_parsed() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "queries.json", r#"["SELECT 1", ["SELECT 2"]]"#);
        let query = operand(&path, Operand::First, &config()).unwrap();
        assert_eq!(query.leaves().collect::<Vec<_>>(), ["SELECT 1", "SELECT 2"]);
    }

    #[test]
    fn json_extension_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "queries.JSON", r#""SELECT 1""#);
        let query = operand(&path, Operand::First, &config()).unwrap();
        assert_eq!(query.leaves().collect::<Vec<_>>(), ["SELECT 1"]);
    }

    #[rstest]
    #[case(Operand::First, "42", "number")]
    #[case(Operand::Second, r#"{"sql": "SELECT 1"}"#, "object")]
    #[case(Operand::Second, r#"["SELECT 1", null]"#, "null")]
    fn non_string_json_operand_is_rejected(
        #[case] position: Operand,
        #[case] json: &str,
        #[case] found: &str,
    ) {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "operand.json", json);
        match operand(&path, position, &config()) {
            Err(Error::InvalidOperand {
                position: reported,
                found: actual,
                ..
            }) => {
                assert_eq!(reported, position);
                assert_eq!(actual, found);
            }
            other => panic!("expected InvalidOperand, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "broken.json", "[\"SELECT 1\"");
        let err = operand(&path, Operand::First, &config()).unwrap_err();
        assert!(matches!(err, Error::Json(_)), "{err:?}");
    }

    #[test]
    fn other_files_are_split_as_scripts() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "script.sql", "SELECT 1;\nSELECT\n  2;\n");
        let query = operand(&path, Operand::Second, &config()).unwrap();
        assert_eq!(query.leaves().collect::<Vec<_>>(), ["SELECT 1", "SELECT\n  2"]);
    }

    #[test]
    fn script_operand_uses_configured_delimiter() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "script.sql", "SELECT 1;\nSELECT 2$$\n");
        let config = Config {
            delimiter: "$$".to_owned(),
            ..config()
        };
        let query = operand(&path, Operand::First, &config).unwrap();
        assert_eq!(query.leaves().count(), 1);
    }

    #[test]
    fn missing_operand_file_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let err = operand(&dir.path().join("absent.json"), Operand::First, &config())
            .unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable { .. }), "{err:?}");
        assert_eq!(status(&Err(err)), 2);
    }

    #[test]
    fn equal_operands_exit_zero() {
        let result = compare_files(
            ("expected.json", r#"["SELECT * FROM `t1`"]"#),
            ("actual.sql", "SELECT *\n  FROM `t1`;\n"),
        );
        assert!(result.is_ok(), "{result:?}");
        assert_eq!(status(&result), 0);
    }

    #[test]
    fn different_operands_exit_one() {
        let result = compare_files(
            ("expected.json", r#"["SELECT 1"]"#),
            ("actual.json", r#"["SELECT 2"]"#),
        );
        assert!(matches!(result, Err(Error::Mismatch(_))), "{result:?}");
        assert_eq!(status(&result), 1);
    }

    #[test]
    fn invalid_operand_exits_two() {
        let result = compare_files(("expected.json", "[\"SELECT 1\"]"), ("actual.json", "7"));
        assert!(matches!(
            result,
            Err(Error::InvalidOperand {
                position: Operand::Second,
                ..
            })
        ));
        assert_eq!(status(&result), 2);
    }
}
