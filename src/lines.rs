use crate::args::LineEdit;
use crate::error::{CommandError, IoContext};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Most blank lines an insert past the end of a file may add.
pub(crate) const MAX_PADDING_LINES: usize = 1 << 20;

impl LineEdit {
    /// Apply this edit to a file's lines.
    ///
    /// On error `lines` is left exactly as it was.
    pub fn apply(&self, lines: &mut Vec<String>) -> Result<(), CommandError> {
        match self {
            LineEdit::Replace { text } => {
                lines.clear();
                lines.push(text.clone());
            }
            LineEdit::Append { text } => lines.push(text.clone()),
            LineEdit::InsertAt { line, text } => {
                if *line == 0 {
                    return Err(CommandError::InsertOutOfRange {
                        line: line.to_string(),
                    });
                }
                let index = line - 1;
                let padding = index.saturating_sub(lines.len());
                let out_of_range = || CommandError::InsertOutOfRange {
                    line: line.to_string(),
                };
                if padding > MAX_PADDING_LINES {
                    return Err(out_of_range());
                }
                lines.try_reserve(padding + 1).map_err(|_| out_of_range())?;
                if padding > 0 {
                    log::debug!("padding {padding} blank line(s) before line {line}");
                    lines.resize(index, String::new());
                }
                lines.insert(index, text.clone());
            }
            LineEdit::DeleteAt { line } => {
                if *line == 0 || *line > lines.len() {
                    return Err(CommandError::DeleteOutOfRange {
                        line: line.to_string(),
                    });
                }
                lines.remove(line - 1);
            }
        }
        Ok(())
    }
}

/// Read a text file as a sequence of lines. `\n` and `\r\n` are both terminators.
pub(crate) fn read_lines(path: &Path) -> Result<Vec<String>, CommandError> {
    let content = fs::read_to_string(path)
        .io_context(|| format!("failed to read {}", path.display()))?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Replace the file's content with `lines`, each terminated by `\n`.
///
/// The new content goes to a temporary file in the same directory which is then
/// renamed over `path`, so readers never observe a half-written file.
pub(crate) fn write_lines(path: &Path, lines: &[String]) -> Result<(), CommandError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let context = || format!("failed to write {}", path.display());

    let mut tmp = tempfile::NamedTempFile::new_in(dir).io_context(context)?;
    for line in lines {
        writeln!(tmp, "{line}").io_context(context)?;
    }
    tmp.as_file().sync_all().io_context(context)?;
    tmp.persist(path).map_err(|e| CommandError::io(context(), e.error))?;
    Ok(())
}
