use anyhow::Result;

use crate::app::{Redraw, Status};
use crate::event::{Action, FmEvents};
use crate::io::parse_prompt_answer;
use crate::modes::InputMode;

/// Struct which mutates the status according to the received events.
///
/// Failed actions never stop the application: their error is
/// displayed in the status line and we wait for the next event.
#[derive(Default)]
pub struct EventDispatcher {}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {}
    }

    /// Reaction to received events.
    pub fn dispatch(&self, status: &mut Status, ev: FmEvents) -> Result<()> {
        let result = match ev {
            FmEvents::Line(line) => self.line_matcher(status, &line),
            FmEvents::EndOfInput => {
                status.quit();
                Ok(())
            }
            FmEvents::Scanned { ticket, universe } => status.on_scanned(ticket, universe),
            FmEvents::ResultChanged => {
                status.on_result_changed();
                Ok(())
            }
        };
        if let Err(error) = result {
            status.report(&error);
        }
        Ok(())
    }

    /// A typed line is either a command or the answer to the pattern prompt.
    fn line_matcher(&self, status: &mut Status, line: &str) -> Result<()> {
        status.set_redraw(Redraw::StatusLine);
        match status.mode {
            InputMode::Pattern => status.on_pattern_answer(parse_prompt_answer(Some(line))),
            InputMode::Command if line.trim().is_empty() => Ok(()),
            InputMode::Command => Action::parse(line)?.matcher(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::sync::mpsc::{self, Receiver};
    use std::sync::Arc;

    use anyhow::anyhow;

    use super::*;
    use crate::app::Level;
    use crate::io::Opener;
    use crate::modes::{ClipboardWriter, FileEnumerator, FileRecord};

    struct Universe;

    impl FileEnumerator for Universe {
        fn enumerate_files(&self) -> Result<Vec<FileRecord>> {
            Ok(["README.md", "src/index.ts", "src/index.test.ts"]
                .iter()
                .map(|relative| {
                    FileRecord::new(PathBuf::from("/ws").join(relative), Path::new(relative))
                })
                .collect())
        }
    }

    struct Unreadable;

    impl FileEnumerator for Unreadable {
        fn enumerate_files(&self) -> Result<Vec<FileRecord>> {
            Err(anyhow!("workspace vanished"))
        }
    }

    struct NoClipboard;

    impl ClipboardWriter for NoClipboard {
        fn write_clipboard(&mut self, _text: &str) -> Result<()> {
            Err(anyhow!("no display"))
        }
    }

    fn status_with(
        enumerator: Arc<dyn FileEnumerator + Send + Sync>,
    ) -> (Status, Receiver<FmEvents>) {
        let (tx, rx) = mpsc::channel();
        let status = Status::new(
            enumerator,
            Box::new(NoClipboard),
            Opener::new("xdg-open"),
            tx,
        );
        (status, rx)
    }

    /// Dispatch every pending event until the matches changed.
    fn settle(dispatcher: &EventDispatcher, status: &mut Status, rx: &Receiver<FmEvents>) {
        while status.is_awaiting_results() {
            let event = rx.recv().unwrap();
            dispatcher.dispatch(status, event).unwrap();
        }
    }

    fn type_line(dispatcher: &EventDispatcher, status: &mut Status, line: &str) {
        dispatcher
            .dispatch(status, FmEvents::Line(line.to_owned()))
            .unwrap();
    }

    #[test]
    fn typed_filter_updates_the_matches() {
        let dispatcher = EventDispatcher::new();
        let (mut status, rx) = status_with(Arc::new(Universe));
        type_line(&dispatcher, &mut status, "filter \\.test\\.ts$");
        settle(&dispatcher, &mut status, &rx);
        assert_eq!(
            status.engine.matches().relative_paths(),
            vec!["src/index.test.ts"]
        );
        assert_eq!(status.take_redraw(), Redraw::Matches);
    }

    #[test]
    fn prompt_answer_sets_the_pattern() {
        let dispatcher = EventDispatcher::new();
        let (mut status, rx) = status_with(Arc::new(Universe));
        type_line(&dispatcher, &mut status, "filter");
        assert_eq!(status.mode, InputMode::Pattern);
        type_line(&dispatcher, &mut status, "^src/");
        settle(&dispatcher, &mut status, &rx);
        assert_eq!(status.mode, InputMode::Command);
        assert_eq!(status.engine.matches().len(), 2);
    }

    #[test]
    fn empty_prompt_answer_clears() {
        let dispatcher = EventDispatcher::new();
        let (mut status, rx) = status_with(Arc::new(Universe));
        type_line(&dispatcher, &mut status, "filter src");
        settle(&dispatcher, &mut status, &rx);
        type_line(&dispatcher, &mut status, "filter");
        type_line(&dispatcher, &mut status, "");
        settle(&dispatcher, &mut status, &rx);
        assert!(status.engine.pattern().is_empty());
        assert!(status.engine.matches().is_empty());
    }

    #[test]
    fn failures_are_reported_not_propagated() {
        let dispatcher = EventDispatcher::new();
        let (mut status, rx) = status_with(Arc::new(Universe));
        type_line(&dispatcher, &mut status, "launch rockets");
        assert_eq!(status.message().level, Level::Error);

        type_line(&dispatcher, &mut status, "filter readme");
        settle(&dispatcher, &mut status, &rx);
        type_line(&dispatcher, &mut status, "copy 0");
        assert_eq!(status.message().level, Level::Error);
        assert!(status.message().text.contains("no display"));
        assert!(!status.must_quit());
    }

    #[test]
    fn enumeration_failure_empties_the_matches() {
        let dispatcher = EventDispatcher::new();
        let (mut status, rx) = status_with(Arc::new(Unreadable));
        type_line(&dispatcher, &mut status, "filter src");
        settle(&dispatcher, &mut status, &rx);
        assert!(status.engine.matches().is_empty());
        assert_eq!(status.message().level, Level::Error);
        assert!(status.message().text.contains("workspace vanished"));
    }

    #[test]
    fn end_of_input_quits() {
        let dispatcher = EventDispatcher::new();
        let (mut status, _rx) = status_with(Arc::new(Universe));
        dispatcher.dispatch(&mut status, FmEvents::EndOfInput).unwrap();
        assert!(status.must_quit());
    }
}
