use crate::args::{CopyArgs, CreateArgs, DeleteArgs, UpdateArgs};
use crate::command::CommandHandler;
use crate::env::Environment;
use crate::error::{CommandError, IoContext};
use crate::lines;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// `copy "<source.txt>" "<dest.txt>"`: overwrite `dest` with the content of `source`.
pub(crate) struct CopyFile;

impl CommandHandler for CopyFile {
    fn execute(
        &self,
        args: &str,
        _out: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<(), CommandError> {
        log::info!("copy arguments: {args}");
        let CopyArgs {
            source,
            destination,
        } = CopyArgs::parse(args)?;

        let source = env.resolve(&source);
        let destination = env.resolve(&destination);
        if !source.is_file() {
            return Err(CommandError::MissingSource { path: source });
        }
        if same_file(&source, &destination) {
            log::info!("{} is copied onto itself, nothing to do", source.display());
            return Ok(());
        }

        fs::copy(&source, &destination).io_context(|| {
            format!(
                "failed to copy {} to {}",
                source.display(),
                destination.display()
            )
        })?;
        log::info!("copied {} to {}", source.display(), destination.display());
        Ok(())
    }
}

/// Whether both paths name the same existing file. `fs::copy` truncates the
/// destination before reading, so that case must not reach it.
fn same_file(source: &Path, destination: &Path) -> bool {
    match (fs::canonicalize(source), fs::canonicalize(destination)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// `create -f "<path.txt>" ["<text>"]`: create or truncate the file, creating
/// missing parent directories first.
pub(crate) struct CreateFile;

impl CommandHandler for CreateFile {
    fn execute(
        &self,
        args: &str,
        _out: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<(), CommandError> {
        log::info!("create arguments: {args}");
        let CreateArgs { path, text } = CreateArgs::parse(args)?;
        let path = env.resolve(&path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .io_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, text.unwrap_or_default())
            .io_context(|| format!("failed to create {}", path.display()))?;
        log::info!("created {}", path.display());
        Ok(())
    }
}

/// `delete -f "<path.txt>"`: remove the file. A missing file is not an error.
pub(crate) struct DeleteFile;

impl CommandHandler for DeleteFile {
    fn execute(
        &self,
        args: &str,
        _out: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<(), CommandError> {
        log::info!("delete arguments: {args}");
        let DeleteArgs { path } = DeleteArgs::parse(args)?;
        let path = env.resolve(&path);

        match fs::remove_file(&path) {
            Ok(()) => log::info!("deleted {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("{} does not exist, nothing to delete", path.display())
            }
            Err(e) => {
                return Err(CommandError::io(
                    format!("failed to delete {}", path.display()),
                    e,
                ));
            }
        }
        Ok(())
    }
}

/// `update -f "<path.txt>" ...`: read the file, apply one [`crate::LineEdit`],
/// write the whole file back.
pub(crate) struct UpdateFile;

impl CommandHandler for UpdateFile {
    fn execute(
        &self,
        args: &str,
        _out: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<(), CommandError> {
        log::info!("update arguments: {args}");
        let UpdateArgs { path, edit } = UpdateArgs::parse(args)?;
        let path = env.resolve(&path);
        if !path.is_file() {
            return Err(CommandError::MissingFile { path });
        }

        let mut content = lines::read_lines(&path)?;
        edit.apply(&mut content)?;
        lines::write_lines(&path, &content)?;
        log::info!("updated {} ({} line(s))", path.display(), content.len());
        Ok(())
    }
}

/// `exit`: ask the read loop to stop. Arguments are ignored.
pub(crate) struct Exit;

impl CommandHandler for Exit {
    fn execute(
        &self,
        _args: &str,
        _out: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<(), CommandError> {
        log::info!("exit requested");
        env.should_exit = true;
        Ok(())
    }
}

/// Fallback for names that are not in the registry.
pub(crate) struct UnknownCommand;

pub(crate) const UNKNOWN_COMMAND_MESSAGE: &str = "Invalid command. Please try again.";

impl CommandHandler for UnknownCommand {
    fn execute(
        &self,
        args: &str,
        out: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<(), CommandError> {
        log::warn!("unknown command with arguments: {args:?}");
        if let Err(e) = writeln!(out, "{UNKNOWN_COMMAND_MESSAGE}") {
            log::debug!("can't write to session output: {e}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Environment) {
        let dir = TempDir::new().expect("failed to create temp dir");
        let env = Environment::with_dir(dir.path());
        (dir, env)
    }

    fn run(
        handler: &dyn CommandHandler,
        args: &str,
        env: &mut Environment,
    ) -> Result<String, CommandError> {
        let mut out = Vec::new();
        handler.execute(args, &mut out, env)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_copy_overwrites_destination() {
        let (dir, mut env) = setup();
        fs::write(dir.path().join("src.txt"), "alpha\nbeta\n").unwrap();
        fs::write(dir.path().join("dst.txt"), "old content that is longer").unwrap();

        run(&CopyFile, r#""src.txt" "dst.txt""#, &mut env).unwrap();

        assert_eq!(read(&dir.path().join("dst.txt")), "alpha\nbeta\n");
        assert_eq!(read(&dir.path().join("src.txt")), "alpha\nbeta\n");
    }

    #[test]
    fn test_copy_onto_itself_keeps_content() {
        let (dir, mut env) = setup();
        let path = dir.path().join("same.txt");
        fs::write(&path, "precious\ndata\n").unwrap();

        run(&CopyFile, r#""same.txt" "same.txt""#, &mut env).unwrap();
        assert_eq!(read(&path), "precious\ndata\n");

        // Same file reached through a different spelling.
        fs::create_dir(dir.path().join("sub")).unwrap();
        run(&CopyFile, r#""same.txt" "sub/../same.txt""#, &mut env).unwrap();
        assert_eq!(read(&path), "precious\ndata\n");
    }

    #[test]
    fn test_copy_missing_source() {
        let (dir, mut env) = setup();
        let err = run(&CopyFile, r#""nope.txt" "dst.txt""#, &mut env).unwrap_err();
        assert!(matches!(err, CommandError::MissingSource { .. }));
        assert!(!dir.path().join("dst.txt").exists());
    }

    #[test]
    fn test_create_empty_file_with_parents() {
        let (dir, mut env) = setup();
        run(&CreateFile, r#"-f "a/b/c.txt""#, &mut env).unwrap();

        let path = dir.path().join("a/b/c.txt");
        assert!(path.is_file());
        assert_eq!(read(&path), "");
    }

    #[test]
    fn test_create_with_text_truncates_existing() {
        let (dir, mut env) = setup();
        let path = dir.path().join("note.txt");
        fs::write(&path, "previous\ncontent\n").unwrap();

        run(&CreateFile, r#"-f "note.txt" "X""#, &mut env).unwrap();
        assert_eq!(read(&path), "X");
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (dir, mut env) = setup();
        let path = dir.path().join("gone.txt");
        fs::write(&path, "bye").unwrap();

        run(&DeleteFile, r#"-f "gone.txt""#, &mut env).unwrap();
        assert!(!path.exists());
        run(&DeleteFile, r#"-f "gone.txt""#, &mut env).unwrap();
    }

    #[test]
    fn test_update_append_and_insert() {
        let (dir, mut env) = setup();
        let path = dir.path().join("u.txt");
        fs::write(&path, "L1\nL2\n").unwrap();

        run(&UpdateFile, r#"-f "u.txt" -a "L3""#, &mut env).unwrap();
        assert_eq!(read(&path), "L1\nL2\nL3\n");

        run(&UpdateFile, r#"-f "u.txt" -nl 2 "X""#, &mut env).unwrap();
        assert_eq!(read(&path), "L1\nX\nL2\nL3\n");
    }

    #[test]
    fn test_update_insert_beyond_end() {
        let (dir, mut env) = setup();
        let path = dir.path().join("u.txt");
        fs::write(&path, "L1\n").unwrap();

        run(&UpdateFile, r#"-f "u.txt" -nl 4 "X""#, &mut env).unwrap();
        assert_eq!(read(&path), "L1\n\n\nX\n");
    }

    #[test]
    fn test_update_delete_and_replace() {
        let (dir, mut env) = setup();
        let path = dir.path().join("u.txt");
        fs::write(&path, "L1\nL2\nL3\n").unwrap();

        run(&UpdateFile, r#"-f "u.txt" -dl 2"#, &mut env).unwrap();
        assert_eq!(read(&path), "L1\nL3\n");

        run(&UpdateFile, r#"-f "u.txt" "Z""#, &mut env).unwrap();
        assert_eq!(read(&path), "Z\n");
    }

    #[test]
    fn test_update_delete_out_of_range_keeps_file() {
        let (dir, mut env) = setup();
        let path = dir.path().join("u.txt");
        fs::write(&path, "L1\nL2\nL3\n").unwrap();

        for args in [r#"-f "u.txt" -dl 0"#, r#"-f "u.txt" -dl 4"#] {
            let err = run(&UpdateFile, args, &mut env).unwrap_err();
            assert!(matches!(err, CommandError::DeleteOutOfRange { .. }));
            assert_eq!(read(&path), "L1\nL2\nL3\n");
        }
    }

    #[test]
    fn test_update_missing_file() {
        let (_dir, mut env) = setup();
        let err = run(&UpdateFile, r#"-f "absent.txt" -a "x""#, &mut env).unwrap_err();
        assert!(matches!(err, CommandError::MissingFile { .. }));
    }

    #[test]
    fn test_invalid_arguments_do_not_touch_files() {
        let (dir, mut env) = setup();
        let path = dir.path().join("keep.txt");
        fs::write(&path, "keep\n").unwrap();

        let cases: [(&dyn CommandHandler, &str); 4] = [
            (&UpdateFile, r#"-f "keep.txt" -nl -1 "x""#),
            (&DeleteFile, r#"-f keep.txt"#),
            (&CreateFile, r#"-f "keep.md""#),
            (&CopyFile, r#""keep.txt" "copy.doc""#),
        ];
        for (handler, args) in cases {
            let err = run(handler, args, &mut env).unwrap_err();
            assert!(matches!(err, CommandError::Usage { .. }), "args: {args}");
        }
        assert_eq!(read(&path), "keep\n");
        assert!(!dir.path().join("keep.md").exists());
    }

    #[test]
    fn test_exit_sets_flag_and_ignores_arguments() {
        let (_dir, mut env) = setup();
        run(&Exit, "whatever 42", &mut env).unwrap();
        assert!(env.should_exit);
    }

    #[test]
    fn test_unknown_command_reports_message() {
        let (_dir, mut env) = setup();
        let out = run(&UnknownCommand, r#"-f "x.txt""#, &mut env).unwrap();
        assert_eq!(out, format!("{UNKNOWN_COMMAND_MESSAGE}\n"));
        assert!(!env.should_exit);
    }
}
