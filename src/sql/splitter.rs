//! Script splitting with a redefinable statement delimiter.
//!
//! Scripts are scanned line by line. A line starting with `DELIMITER `
//! (any case) switches the active delimiter for the rest of the script.
//! Any other line whose trailing-whitespace-trimmed text ends with the
//! active delimiter closes the current statement.
//!
//! The delimiter is only ever looked for at the end of a line, so
//! `SELECT 1; SELECT 2;` on one line stays a single statement, and a
//! delimiter inside a quoted literal in mid-line never splits.
use crate::sql::{trim_blank, trim_blank_end};
use crate::*;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    mem,
    path::Path,
};

/// Delimiter in force at the start of a script unless configured otherwise.
pub const DEFAULT_DELIMITER: &str = ";";

const DIRECTIVE: &str = "DELIMITER ";

/// Splits scripts into raw statement strings.
///
/// The splitter itself holds only the initial delimiter. Directive changes
/// are local to one `split*` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSplitter {
    delimiter: String,
}

impl Default for ScriptSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptSplitter {
    pub fn new() -> Self {
        Self::with_delimiter(DEFAULT_DELIMITER)
    }

    pub fn with_delimiter(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Split in-memory script text.
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut scan = Scan::new(&self.delimiter);
        for line in text.split_inclusive('\n') {
            scan.line(line);
        }
        scan.finish()
    }

    /// Split a line-oriented stream. Fails only if reading fails.
    ///
    /// Bytes that are not valid UTF-8 (e.g. a Latin-1 dump) are replaced
    /// with U+FFFD rather than rejected.
    pub fn split_reader(&self, mut reader: impl BufRead) -> Result<Vec<String>> {
        let mut scan = Scan::new(&self.delimiter);
        let mut line = Vec::new();
        while reader.read_until(b'\n', &mut line)? > 0 {
            scan.line(&String::from_utf8_lossy(&line));
            line.clear();
        }
        Ok(scan.finish())
    }

    /// Split the script stored at `path`. Open and read failures both
    /// surface as [`Error::SourceUnavailable`] naming `path`.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Vec<String>> {
        let path = path.as_ref();
        let unavailable = |source| Error::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(unavailable)?;
        debug!("Splitting script {}", path.display());
        self.split_reader(BufReader::new(file)).map_err(|e| match e {
            Error::Io(source) => unavailable(source),
            other => other,
        })
    }
}

/// Split in-memory script text starting from the `;` delimiter.
pub fn split(text: &str) -> Vec<String> {
    ScriptSplitter::new().split(text)
}

/// Split the script stored at `path` starting from the `;` delimiter.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    ScriptSplitter::new().load_file(path)
}

/// State of one scan: the active delimiter, the open statement and the
/// statements closed so far.
struct Scan {
    delimiter: String,
    buffer: String,
    statements: Vec<String>,
}

impl Scan {
    fn new(delimiter: &str) -> Self {
        Self {
            delimiter: delimiter.to_owned(),
            buffer: String::new(),
            statements: Vec::new(),
        }
    }

    /// Feed one line, line terminator included.
    fn line(&mut self, line: &str) {
        if let Some(delimiter) = directive(line) {
            trace!("Delimiter changed from {:?} to {delimiter:?}", self.delimiter);
            self.delimiter = delimiter.to_owned();
            return;
        }

        match self.terminated(trim_blank_end(line)) {
            Some(body) => {
                self.buffer.push_str(body);
                self.statements.push(mem::take(&mut self.buffer));
            }
            None => self.buffer.push_str(line),
        }
    }

    /// Statement body of `trimmed` if it ends with the active delimiter.
    /// An empty delimiter only terminates a blank line.
    fn terminated<'l>(&self, trimmed: &'l str) -> Option<&'l str> {
        if self.delimiter.is_empty() {
            return trimmed.is_empty().then_some(trimmed);
        }
        trimmed.strip_suffix(self.delimiter.as_str())
    }

    fn finish(mut self) -> Vec<String> {
        if !trim_blank(&self.buffer).is_empty() {
            self.statements.push(self.buffer);
        }
        trace!("Split script into {} statement(s)", self.statements.len());
        self.statements
    }
}

/// The new delimiter if `line` is a `DELIMITER` directive.
fn directive(line: &str) -> Option<&str> {
    let (prefix, rest) = line.split_at_checked(DIRECTIVE.len())?;
    prefix
        .eq_ignore_ascii_case(DIRECTIVE)
        .then(|| trim_blank(rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[rstest]
    #[case("DELIMITER //\n", Some("//"))]
    #[case("delimiter $$  \r\n", Some("$$"))]
    #[case("Delimiter ;", Some(";"))]
    #[case("DELIMITER \n", Some(""))]
    #[case("DELIMITER", None)]
    #[case("DELIMITER;\n", None)]
    #[case(" DELIMITER //\n", None)]
    #[case("SELECT 1;\n", None)]
    #[case("DELIMITÉR //\n", None)]
    fn directive_detection(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(directive(line), expected);
    }

    #[test]
    fn same_line_statements_are_not_split() {
        assert_eq!(
            split("SELECT * FROM `t1`; SELECT * FROM `t2`;\n"),
            vec!["SELECT * FROM `t1`; SELECT * FROM `t2`"]
        );
    }

    #[test]
    fn unterminated_trailing_text_is_kept() {
        assert_eq!(split("SELECT 1;\nSELECT 2"), vec!["SELECT 1", "SELECT 2"]);
        assert_eq!(split("SELECT 2\n"), vec!["SELECT 2\n"]);
    }

    #[test]
    fn blank_residue_is_dropped() {
        assert_eq!(split("SELECT 1;\n\n  \n"), vec!["SELECT 1"]);
        assert!(split("").is_empty());
        assert!(split("\n\t\n").is_empty());
    }

    #[test]
    fn blank_lines_before_a_statement_are_kept() {
        assert_eq!(split("SELECT 1;\n\nSELECT 2;\n"), vec!["SELECT 1", "\nSELECT 2"]);
    }

    #[test]
    fn trailing_whitespace_after_delimiter() {
        assert_eq!(split("SELECT 1;   \t\r\n"), vec!["SELECT 1"]);
    }

    #[test]
    fn multi_character_delimiter() {
        let script = "DELIMITER $$\nCREATE TRIGGER t BEGIN\n  SET x = 1;\nEND$$\nDELIMITER ;\nSELECT 1;\n";
        assert_eq!(
            split(script),
            vec!["CREATE TRIGGER t BEGIN\n  SET x = 1;\nEND", "SELECT 1"]
        );
    }

    #[test]
    fn empty_directive_sets_empty_delimiter() {
        assert_eq!(
            split("DELIMITER \nSELECT 1;\nSELECT 2;\n"),
            vec!["SELECT 1;\nSELECT 2;\n"]
        );
    }

    #[test]
    fn empty_delimiter_ends_statements_at_blank_lines() {
        assert_eq!(
            split("DELIMITER \nSELECT 1;\n\nSELECT 2\n  \nDELIMITER ;\nSELECT 3;\n"),
            vec!["SELECT 1;\n", "SELECT 2\n", "SELECT 3"]
        );
    }

    #[test]
    fn directive_change_does_not_outlive_the_call() {
        let splitter = ScriptSplitter::new();
        assert_eq!(splitter.split("DELIMITER //\nSELECT 1//\n"), vec!["SELECT 1"]);
        assert_eq!(splitter.split("SELECT 1;\n"), vec!["SELECT 1"]);
        assert_eq!(splitter.delimiter(), DEFAULT_DELIMITER);
    }

    #[test]
    fn configured_initial_delimiter() {
        let splitter = ScriptSplitter::with_delimiter("GO");
        assert_eq!(
            splitter.split("SELECT 1\nGO\nSELECT 2 GO\n"),
            vec!["SELECT 1\n", "SELECT 2 "]
        );
    }

    #[test]
    fn reader_and_text_agree() {
        let script = "SELECT *\nFROM t1;\nDELIMITER //\nSELECT 2//\nSELECT 3";
        let from_reader = ScriptSplitter::new()
            .split_reader(script.as_bytes())
            .expect("in-memory read");
        assert_eq!(from_reader, split(script));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let bytes: &[u8] = b"SELECT 1;\nSELECT 'caf\xe9';\n";
        let statements = ScriptSplitter::new()
            .split_reader(bytes)
            .expect("non-UTF-8 bytes are not a read failure");
        assert_eq!(statements, vec!["SELECT 1", "SELECT 'caf\u{fffd}'"]);
    }

    struct Broken;

    impl std::io::Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("device gone"))
        }
    }

    #[test]
    fn read_failure_is_an_io_error() {
        let err = ScriptSplitter::new()
            .split_reader(BufReader::new(Broken))
            .expect_err("reader fails");
        assert!(matches!(err, Error::Io(_)));
    }
}
