use std::io::Write;

use anyhow::Result;
use strum::IntoEnumIterator;

use crate::app::{Redraw, Status};
use crate::common::HELP_FIRST_SENTENCE;
use crate::event::ActionMap;
use crate::modes::InputMode;

/// Width of the name column in the list of matches.
const NAME_WIDTH: usize = 28;

/// Is responsible for displaying content in the terminal.
/// Everything is written line by line, nothing is erased.
pub struct Display<W: Write> {
    writer: W,
}

impl<W: Write> Display<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Display what the status requires.
    /// While a change of the matches is expected, only reported errors are
    /// displayed: the change itself will trigger the rest.
    ///
    /// # Errors
    ///
    /// Fails if the terminal can't be written.
    pub fn display_all(&mut self, status: &mut Status) -> Result<()> {
        let reported = status.take_report();
        if status.is_awaiting_results() {
            if reported {
                self.status_line(status)?;
                self.prompt(status.mode)?;
            }
            return Ok(());
        }
        match status.take_redraw() {
            Redraw::Nothing => return Ok(()),
            Redraw::StatusLine => (),
            Redraw::Help => self.help()?,
            Redraw::Matches => self.matches(status)?,
        }
        self.status_line(status)?;
        self.prompt(status.mode)
    }

    /// One line per match: its index, a selection mark, its name and its relative path.
    fn matches(&mut self, status: &Status) -> Result<()> {
        let pattern = status.engine.pattern();
        let matches = status.engine.matches();
        if pattern.is_empty() {
            writeln!(self.writer, "No filter")?;
            return Ok(());
        }
        writeln!(
            self.writer,
            "Filter \"{pattern}\": {len} files, {selected} selected",
            len = matches.len(),
            selected = status.selection.len()
        )?;
        for (index, record) in matches.iter().enumerate() {
            let mark = if status.selection.is_selected(index) {
                'x'
            } else {
                ' '
            };
            writeln!(
                self.writer,
                "{index:>4} [{mark}] {name:<NAME_WIDTH$} {relative}",
                name = record.name(),
                relative = record.relative_path()
            )?;
        }
        Ok(())
    }

    fn help(&mut self) -> Result<()> {
        writeln!(self.writer, "{HELP_FIRST_SENTENCE}")?;
        for action_map in ActionMap::iter() {
            let command = format!("{action_map} {usage}", usage = action_map.usage());
            writeln!(
                self.writer,
                "  {command:<20} {description}",
                description = action_map.description()
            )?;
        }
        Ok(())
    }

    fn status_line(&mut self, status: &Status) -> Result<()> {
        writeln!(self.writer, "{}", status.message())?;
        Ok(())
    }

    fn prompt(&mut self, mode: InputMode) -> Result<()> {
        for line in mode.help_lines() {
            writeln!(self.writer, "{line}")?;
        }
        write!(self.writer, "{}", mode.prompt())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write the matches as `name<TAB>relative path`, one per line.
    /// Used when ffilter prints its result and quits.
    ///
    /// # Errors
    ///
    /// Fails if the terminal can't be written.
    pub fn print_records<'a, I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a crate::modes::FileRecord>,
    {
        for record in records {
            writeln!(
                self.writer,
                "{name}\t{relative}",
                name = record.name(),
                relative = record.relative_path()
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::sync::mpsc;
    use std::sync::Arc;

    use super::*;
    use crate::io::Opener;
    use crate::modes::{ClipboardWriter, FileEnumerator, FileRecord};

    struct Universe;

    impl FileEnumerator for Universe {
        fn enumerate_files(&self) -> Result<Vec<FileRecord>> {
            Ok(["README.md", "src/main.rs"]
                .iter()
                .map(|relative| {
                    FileRecord::new(PathBuf::from("/ws").join(relative), Path::new(relative))
                })
                .collect())
        }
    }

    struct NoClipboard;

    impl ClipboardWriter for NoClipboard {
        fn write_clipboard(&mut self, _text: &str) -> Result<()> {
            Ok(())
        }
    }

    fn rendered(display: Display<Vec<u8>>) -> String {
        String::from_utf8(display.writer).unwrap()
    }

    #[test]
    fn first_display_is_the_prompt() {
        let (tx, _rx) = mpsc::channel();
        let mut status = Status::new(
            Arc::new(Universe),
            Box::new(NoClipboard),
            Opener::new("xdg-open"),
            tx,
        );
        let mut display = Display::new(vec![]);
        display.display_all(&mut status).unwrap();
        assert_eq!(rendered(display), "Ready\nffilter> ");
    }

    #[test]
    fn matches_show_selection_marks() {
        let (tx, rx) = mpsc::channel();
        let mut status = Status::new(
            Arc::new(Universe),
            Box::new(NoClipboard),
            Opener::new("xdg-open"),
            tx,
        );
        status.set_pattern("\\.rs$|readme").unwrap();
        let Ok(crate::event::FmEvents::Scanned { ticket, universe }) = rx.recv() else {
            panic!("a scan was expected");
        };
        status.on_scanned(ticket, universe).unwrap();
        status.on_result_changed();
        status.toggle(&[1]).unwrap();

        let mut display = Display::new(vec![]);
        display.display_all(&mut status).unwrap();
        let output = rendered(display);

        assert!(output.starts_with("Filter \"\\.rs$|readme\": 2 files, 1 selected\n"));
        assert!(output.contains("   0 [ ] README.md"));
        assert!(output.contains("   1 [x] main.rs"));
        assert!(output.contains("src/main.rs"));
        assert!(output.ends_with("ffilter> "));
    }

    #[test]
    fn error_is_displayed_while_a_scan_is_pending() {
        let (tx, rx) = mpsc::channel();
        let mut status = Status::new(
            Arc::new(Universe),
            Box::new(NoClipboard),
            Opener::new("xdg-open"),
            tx,
        );
        status.set_pattern("readme").unwrap();
        let error = status.set_pattern("(").unwrap_err();
        status.report(&error);

        let mut display = Display::new(vec![]);
        display.display_all(&mut status).unwrap();
        let output = rendered(display);
        assert!(output.starts_with("Error: Invalid regular expression"));
        assert!(output.ends_with("ffilter> "));

        let Ok(crate::event::FmEvents::Scanned { ticket, universe }) = rx.recv() else {
            panic!("a scan was expected");
        };
        status.on_scanned(ticket, universe).unwrap();
        status.on_result_changed();
        let mut display = Display::new(vec![]);
        display.display_all(&mut status).unwrap();
        let output = rendered(display);
        assert!(output.starts_with("Filter \"readme\": 1 files, 0 selected\n"));
        assert!(!output.contains("Invalid regular expression"));
    }

    #[test]
    fn nothing_is_displayed_while_a_scan_is_pending() {
        let (tx, _rx) = mpsc::channel();
        let mut status = Status::new(
            Arc::new(Universe),
            Box::new(NoClipboard),
            Opener::new("xdg-open"),
            tx,
        );
        status.set_pattern("readme").unwrap();
        let mut display = Display::new(vec![]);
        display.display_all(&mut status).unwrap();
        assert_eq!(rendered(display), "");
    }

    #[test]
    fn pattern_prompt_shows_an_example() {
        let (tx, _rx) = mpsc::channel();
        let mut status = Status::new(
            Arc::new(Universe),
            Box::new(NoClipboard),
            Opener::new("xdg-open"),
            tx,
        );
        status.prompt_pattern();
        let mut display = Display::new(vec![]);
        display.display_all(&mut status).unwrap();
        let output = rendered(display);
        assert!(output.contains("regular expressions supported"));
        assert!(output.ends_with("pattern> "));
    }

    #[test]
    fn records_are_tab_separated() {
        let records = Universe.enumerate_files().unwrap();
        let mut display = Display::new(vec![]);
        display.print_records(&records).unwrap();
        assert_eq!(rendered(display), "README.md\tREADME.md\nmain.rs\tsrc/main.rs\n");
    }
}
