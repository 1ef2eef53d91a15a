//! Typed arguments for each file command.
//!
//! Every parser validates the raw string against its grammar first and returns a
//! [`CommandError::Usage`] without looking at any capture when it does not match.

use crate::error::CommandError;
use crate::grammar::{self, Grammar};
use regex::Captures;

/// Arguments of `copy "<source.txt>" "<dest.txt>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyArgs {
    pub source: String,
    pub destination: String,
}

/// Arguments of `create -f "<path.txt>" ["<text>"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateArgs {
    pub path: String,
    pub text: Option<String>,
}

/// Arguments of `delete -f "<path.txt>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteArgs {
    pub path: String,
}

/// Arguments of `update -f "<path.txt>" ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateArgs {
    pub path: String,
    pub edit: LineEdit,
}

/// The one transform an `update` applies to a file's lines.
///
/// Line numbers are 1-based, exactly as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEdit {
    /// `"<text>"`: the file becomes the single line `text`.
    Replace { text: String },
    /// `-a "<text>"`: `text` becomes the new last line.
    Append { text: String },
    /// `-nl <n> "<text>"`: `text` becomes line `n`.
    InsertAt { line: usize, text: String },
    /// `-dl <n>`: line `n` is removed.
    DeleteAt { line: usize },
}

fn matched<'a>(grammar: &Grammar, args: &'a str) -> Result<Captures<'a>, CommandError> {
    let usage = || CommandError::Usage {
        command: grammar.command(),
        usage: grammar.usage(),
    };
    if !grammar.validate(args) {
        return Err(usage());
    }
    grammar.captures(args).ok_or_else(usage)
}

fn group(caps: &Captures<'_>, index: usize) -> Option<String> {
    caps.get(index).map(|m| m.as_str().to_string())
}

fn required(caps: &Captures<'_>, index: usize) -> String {
    group(caps, index).unwrap_or_default()
}

impl CopyArgs {
    pub fn parse(args: &str) -> Result<Self, CommandError> {
        let caps = matched(&grammar::COPY, args)?;
        Ok(Self {
            source: required(&caps, 1),
            destination: required(&caps, 2),
        })
    }
}

impl CreateArgs {
    pub fn parse(args: &str) -> Result<Self, CommandError> {
        let caps = matched(&grammar::CREATE, args)?;
        Ok(Self {
            path: required(&caps, 1),
            text: group(&caps, 2),
        })
    }
}

impl DeleteArgs {
    pub fn parse(args: &str) -> Result<Self, CommandError> {
        let caps = matched(&grammar::DELETE, args)?;
        Ok(Self {
            path: required(&caps, 1),
        })
    }
}

impl UpdateArgs {
    pub fn parse(args: &str) -> Result<Self, CommandError> {
        let caps = matched(&grammar::UPDATE, args)?;
        let path = required(&caps, 1);

        // Only the alternative that matched has its groups populated.
        let edit = if let Some(text) = group(&caps, 2) {
            LineEdit::Append { text }
        } else if let Some(digits) = caps.get(3) {
            let line = digits.as_str().parse().map_err(|_| {
                CommandError::InsertOutOfRange {
                    line: digits.as_str().to_string(),
                }
            })?;
            LineEdit::InsertAt {
                line,
                text: required(&caps, 4),
            }
        } else if let Some(digits) = caps.get(5) {
            let line = digits.as_str().parse().map_err(|_| {
                CommandError::DeleteOutOfRange {
                    line: digits.as_str().to_string(),
                }
            })?;
            LineEdit::DeleteAt { line }
        } else {
            LineEdit::Replace {
                text: required(&caps, 6),
            }
        };

        Ok(Self { path, edit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_copy() {
        let parsed = CopyArgs::parse(r#""in/a.txt" "out/b.txt""#).unwrap();
        assert_eq!(
            parsed,
            CopyArgs {
                source: "in/a.txt".to_string(),
                destination: "out/b.txt".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_create_with_and_without_text() {
        let bare = CreateArgs::parse(r#"-f "a.txt""#).unwrap();
        assert_eq!(bare.path, "a.txt");
        assert_eq!(bare.text, None);

        let with_text = CreateArgs::parse(r#"-f "a.txt" "first line""#).unwrap();
        assert_eq!(with_text.text.as_deref(), Some("first line"));
    }

    #[test]
    fn test_parse_delete() {
        let parsed = DeleteArgs::parse(r#"-f "dir/old.txt""#).unwrap();
        assert_eq!(parsed.path, "dir/old.txt");
    }

    #[test]
    fn test_parse_update_variants() {
        let cases = [
            (
                r#"-f "a.txt" -a "tail""#,
                LineEdit::Append {
                    text: "tail".to_string(),
                },
            ),
            (
                r#"-f "a.txt" -nl 12 "mid""#,
                LineEdit::InsertAt {
                    line: 12,
                    text: "mid".to_string(),
                },
            ),
            (r#"-f "a.txt" -dl 3"#, LineEdit::DeleteAt { line: 3 }),
            (
                r#"-f "a.txt" "all new""#,
                LineEdit::Replace {
                    text: "all new".to_string(),
                },
            ),
        ];

        for (input, expected) in cases {
            let parsed = UpdateArgs::parse(input).unwrap();
            assert_eq!(parsed.path, "a.txt");
            assert_eq!(parsed.edit, expected, "input: {input}");
        }
    }

    #[test]
    fn test_parse_update_keeps_zero_for_execution_check() {
        let parsed = UpdateArgs::parse(r#"-f "a.txt" -nl 0 "x""#).unwrap();
        assert_eq!(
            parsed.edit,
            LineEdit::InsertAt {
                line: 0,
                text: "x".to_string()
            }
        );
    }

    #[test]
    fn test_overflowing_line_number_is_a_range_error() {
        let err = UpdateArgs::parse(r#"-f "a.txt" -dl 99999999999999999999999999"#).unwrap_err();
        assert!(matches!(err, CommandError::DeleteOutOfRange { .. }));

        let err =
            UpdateArgs::parse(r#"-f "a.txt" -nl 99999999999999999999999999 "x""#).unwrap_err();
        assert!(matches!(err, CommandError::InsertOutOfRange { .. }));
    }

    #[test]
    fn test_invalid_arguments_give_usage_error() {
        let err = UpdateArgs::parse(r#"-f "a.txt" -dl -2"#).unwrap_err();
        match err {
            CommandError::Usage { command, usage } => {
                assert_eq!(command, "update");
                assert!(usage.contains("-dl"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(CopyArgs::parse(r#""a.txt" b.txt"#).is_err());
        assert!(CreateArgs::parse(r#"-f "a.doc""#).is_err());
        assert!(DeleteArgs::parse("").is_err());
    }
}
