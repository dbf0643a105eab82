use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::common::is_in_path;
use crate::io::execute;
use crate::modes::FileRecord;

/// Opens the matches with the configured program.
#[derive(Clone, Debug)]
pub struct Opener {
    /// Program used to open a file. It may hold some arguments: `code -r`.
    program: String,
}

impl Opener {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_owned(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Open a file, using the configured program.
    ///
    /// # Errors
    ///
    /// It may fail if the file is a directory, if the program isn't installed
    /// or if it can't be started.
    pub fn open(&self, record: &FileRecord) -> Result<()> {
        let filepath = record.path();
        if filepath.is_dir() {
            return Err(anyhow!("open can't execute a directory"));
        }
        let (exe, mut args) = self.split_program()?;
        if !is_in_path(exe) {
            return Err(anyhow!("{exe} isn't installed"));
        }
        args.push(path_arg(filepath)?);
        execute(exe, &args)?;
        Ok(())
    }

    fn split_program(&self) -> Result<(&str, Vec<&str>)> {
        let mut parts = self.program.split_whitespace();
        let exe = parts.next().context("no opener configured")?;
        Ok((exe, parts.collect()))
    }
}

fn path_arg(path: &Path) -> Result<&str> {
    path.to_str()
        .with_context(|| format!("couldn't read {path}", path = path.display()))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn program_arguments_are_kept() {
        let opener = Opener::new("code -r");
        let (exe, args) = opener.split_program().unwrap();
        assert_eq!(exe, "code");
        assert_eq!(args, vec!["-r"]);
    }

    #[test]
    fn empty_opener_is_refused() {
        let opener = Opener::new("  ");
        let record = FileRecord::new(PathBuf::from("/ws/a.rs"), Path::new("a.rs"));
        assert!(opener.open(&record).is_err());
    }

    #[test]
    fn directories_are_not_opened() {
        let dir = tempfile::tempdir().unwrap();
        let record = FileRecord::new(dir.path().to_path_buf(), Path::new("."));
        let error = Opener::new("xdg-open").open(&record).unwrap_err();
        assert!(error.to_string().contains("directory"));
    }
}
