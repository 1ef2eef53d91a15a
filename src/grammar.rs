//! Argument grammars for the file commands.
//!
//! A grammar is an anchored regular expression over the raw argument string (the
//! text after the command name). Capture groups are positional; each parser in
//! [`crate::args`] knows the indices for its own grammar.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Accepted textual shape of one command's argument string.
pub(crate) struct Grammar {
    command: &'static str,
    usage: &'static str,
    re: Regex,
}

impl Grammar {
    fn new(command: &'static str, usage: &'static str, pattern: &str) -> Self {
        let re = Regex::new(&format!(r"\A(?:{pattern})\z"))
            .unwrap_or_else(|e| panic!("invalid {command} grammar: {e}"));
        Self { command, usage, re }
    }

    /// Lower-case command name, used in usage messages.
    pub(crate) fn command(&self) -> &'static str {
        self.command
    }

    /// Expected format shown to the user when validation fails.
    pub(crate) fn usage(&self) -> &'static str {
        self.usage
    }

    /// Full-string match; prefixes and trailing garbage do not count.
    pub(crate) fn validate(&self, args: &str) -> bool {
        self.re.is_match(args)
    }

    /// Capture groups of a full-string match.
    pub(crate) fn captures<'a>(&self, args: &'a str) -> Option<Captures<'a>> {
        self.re.captures(args)
    }
}

/// `"<source.txt>" "<dest.txt>"`
///
/// Groups: 1 = source, 2 = destination.
pub(crate) static COPY: LazyLock<Grammar> = LazyLock::new(|| {
    Grammar::new(
        "copy",
        r#"copy "sourcefile.txt" "destinationfile.txt""#,
        r#""([^"]+\.txt)" "([^"]+\.txt)"\s*"#,
    )
});

/// `-f "<path.txt>" ["<text>"]`
///
/// Groups: 1 = path, 2 = text (optional).
pub(crate) static CREATE: LazyLock<Grammar> = LazyLock::new(|| {
    Grammar::new(
        "create",
        r#"create -f "path/to/yourfile.txt" ["your text content"]"#,
        r#"-f "([^"]+\.txt)"(?: "([^"]+)")?\s*"#,
    )
});

/// `-f "<path.txt>"`
///
/// Groups: 1 = path.
pub(crate) static DELETE: LazyLock<Grammar> = LazyLock::new(|| {
    Grammar::new(
        "delete",
        r#"delete -f "path/to/yourfile.txt""#,
        r#"-f "([^"]+\.txt)"\s*"#,
    )
});

/// `-f "<path.txt>" ( -a "<text>" | -nl <n> "<text>" | -dl <n> | "<text>" )`
///
/// Groups: 1 = path, 2 = append text, 3/4 = insert line/text, 5 = delete line,
/// 6 = replacement text. Exactly one alternative is populated per match.
pub(crate) static UPDATE: LazyLock<Grammar> = LazyLock::new(|| {
    Grammar::new(
        "update",
        r#"update -f "path/to/yourfile.txt" [-a | -nl <line> | -dl <line>] "your text content" (-dl takes no text)"#,
        r#"-f "([^"]+\.txt)" (?:-a "([^"]+)"|-nl ([0-9]+) "([^"]+)"|-dl ([0-9]+)|"([^"]+)")\s*"#,
    )
});
