use std::{
    error::Error,
    fmt,
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, Result};
use crossword_core::{CellCoord, CellKeyError, Submission};

/// Path value that selects standard input instead of a file.
const STDIN_PATH: &str = "-";
/// Delimiter separating the cell key from the entered letter in `--fill`.
const FILL_DELIMITER: char = '=';

/// Letter entered for a single cell on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CellFill {
    /// Cell receiving the letter.
    pub(crate) coord: CellCoord,
    /// Entered text, kept untrimmed like any other submission entry.
    pub(crate) value: String,
}

impl CellFill {
    /// Parses a `x,y=L` argument.
    pub(crate) fn parse(argument: &str) -> Result<Self, FillError> {
        let (key, value) = argument
            .split_once(FILL_DELIMITER)
            .ok_or_else(|| FillError::MissingDelimiter(argument.to_owned()))?;
        let coord = key.parse::<CellCoord>().map_err(FillError::InvalidCell)?;
        Ok(Self {
            coord,
            value: value.to_owned(),
        })
    }
}

/// Errors that can occur while parsing `--fill` arguments.
#[derive(Debug)]
pub(crate) enum FillError {
    /// The argument did not contain the `=` separator.
    MissingDelimiter(String),
    /// The part before `=` was not a cell key.
    InvalidCell(CellKeyError),
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDelimiter(argument) => {
                write!(f, "expected x,y=LETTER but found '{argument}'")
            }
            Self::InvalidCell(error) => write!(f, "{error}"),
        }
    }
}

impl Error for FillError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidCell(error) => Some(error),
            Self::MissingDelimiter(_) => None,
        }
    }
}

/// Assembles a submission from an optional answers document and inline fills.
///
/// The document is a JSON object keyed by `"x,y"`, read from `path` or from
/// standard input when the path is `-`. Inline fills override the document.
pub(crate) fn collect_submission(path: Option<&Path>, fills: &[CellFill]) -> Result<Submission> {
    let mut submission = match path {
        Some(path) => read_submission(path)?,
        None => Submission::new(),
    };
    for fill in fills {
        let _ = submission.insert(fill.coord, fill.value.clone());
    }
    Ok(submission)
}

fn read_submission(path: &Path) -> Result<Submission> {
    let json = if path == Path::new(STDIN_PATH) {
        let mut json = String::new();
        let _ = io::stdin()
            .read_to_string(&mut json)
            .context("failed to read answers from standard input")?;
        json
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read answers file {}", path.display()))?
    };
    parse_submission(&json)
}

fn parse_submission(json: &str) -> Result<Submission> {
    serde_json::from_str(json).context("answers must be a JSON object mapping \"x,y\" to a letter")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_parses_cell_and_letter() {
        let fill = CellFill::parse("2,-1=q").expect("fill parses");
        assert_eq!(fill.coord, CellCoord::new(2, -1));
        assert_eq!(fill.value, "q");
    }

    #[test]
    fn fill_keeps_blank_letters() {
        let fill = CellFill::parse("0,0=").expect("blank fill parses");
        assert_eq!(fill.value, "");
    }

    #[test]
    fn fill_rejects_missing_delimiter() {
        let error = CellFill::parse("0,0").expect_err("no letter given");
        assert_eq!(error.to_string(), "expected x,y=LETTER but found '0,0'");
    }

    #[test]
    fn fill_rejects_bad_cell() {
        let error = CellFill::parse("a,b=c").expect_err("bad key");
        assert!(matches!(error, FillError::InvalidCell(_)));
        assert!(error.source().is_some());
    }

    #[test]
    fn fills_override_document_entries() {
        let mut submission = parse_submission(r#"{"0,0": "x", "1,0": "a"}"#).expect("parses");
        let fills = [CellFill::parse("0,0=c").expect("fill parses")];
        for fill in &fills {
            let _ = submission.insert(fill.coord, fill.value.clone());
        }
        assert_eq!(submission.get(CellCoord::new(0, 0)), Some("c"));
        assert_eq!(submission.get(CellCoord::new(1, 0)), Some("a"));
    }

    #[test]
    fn inline_fills_alone_form_a_submission() {
        let fills = [
            CellFill::parse("0,0=c").expect("fill parses"),
            CellFill::parse("1,0=a").expect("fill parses"),
        ];
        let submission = collect_submission(None, &fills).expect("no file needed");
        assert_eq!(submission.len(), 2);
    }

    #[test]
    fn non_object_documents_are_rejected() {
        assert!(parse_submission(r#"["c", "a"]"#).is_err());
    }
}
