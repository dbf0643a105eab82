use std::fmt;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

use anyhow::{anyhow, Context, Result};

use crate::common::{FilterError, FILTER_CLEARED, READY};
use crate::event::FmEvents;
use crate::io::Opener;
use crate::modes::{
    copy_confirmation, copy_to_clipboard, ClipboardWriter, FileEnumerator, FileRecord,
    FilterEngine, InputMode, ScanOutcome, ScanTicket, Selection,
};
use crate::{log_info, log_line};

/// Severity of the status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

/// The status line: the outcome of the last action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub level: Level,
    pub text: String,
}

impl Message {
    pub fn info<S: Into<String>>(text: S) -> Self {
        Self {
            level: Level::Info,
            text: text.into(),
        }
    }

    pub fn warning<S: Into<String>>(text: S) -> Self {
        Self {
            level: Level::Warning,
            text: text.into(),
        }
    }

    pub fn error<S: Into<String>>(text: S) -> Self {
        Self {
            level: Level::Error,
            text: text.into(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.level {
            Level::Info => write!(f, "{}", self.text),
            Level::Warning => write!(f, "Warning: {}", self.text),
            Level::Error => write!(f, "Error: {}", self.text),
        }
    }
}

/// What should be displayed after an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Redraw {
    /// Nothing, we're waiting for another event.
    #[default]
    Nothing,
    /// The status line and the prompt.
    StatusLine,
    /// The help, the status line and the prompt.
    Help,
    /// The matches, the status line and the prompt.
    Matches,
}

/// Holds every mutable parameter of the application.
///
/// The engine holds the pattern and its matches, the selection refers to those matches.
/// Enumerations are executed in a thread and their results are sent back as
/// [`FmEvents::Scanned`] events, only the last requested one is applied by the engine.
/// Mutation of this struct are mostly done externally, by the event module:
/// `crate::event::EventAction`.
pub struct Status {
    /// Pattern and matching files.
    pub engine: FilterEngine,
    /// Matches chosen by the user.
    pub selection: Selection,
    /// What the next typed line is used for.
    pub mode: InputMode,
    /// Lists the files of the workspace.
    enumerator: Arc<dyn FileEnumerator + Send + Sync>,
    clipboard: Box<dyn ClipboardWriter>,
    opener: Opener,
    /// Used to send the results of the scans.
    fm_sender: Sender<FmEvents>,
    message: Message,
    /// True while a change of the matches is expected.
    awaiting_results: bool,
    /// An error or a warning was reported and hasn't been displayed yet.
    unseen_report: bool,
    redraw: Redraw,
    must_quit: bool,
}

impl Status {
    /// Creates a new status. The engine will notify its changes to `fm_sender`.
    pub fn new(
        enumerator: Arc<dyn FileEnumerator + Send + Sync>,
        clipboard: Box<dyn ClipboardWriter>,
        opener: Opener,
        fm_sender: Sender<FmEvents>,
    ) -> Self {
        let mut engine = FilterEngine::new();
        let listener_sender = fm_sender.clone();
        engine.subscribe(Box::new(move || {
            let _ = listener_sender.send(FmEvents::ResultChanged);
        }));
        Self {
            engine,
            selection: Selection::default(),
            mode: InputMode::default(),
            enumerator,
            clipboard,
            opener,
            fm_sender,
            message: Message::info(READY),
            awaiting_results: false,
            unseen_report: false,
            redraw: Redraw::StatusLine,
            must_quit: false,
        }
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn must_quit(&self) -> bool {
        self.must_quit
    }

    pub fn quit(&mut self) {
        self.must_quit = true;
    }

    /// True while an enumeration or a clear hasn't been displayed yet.
    pub fn is_awaiting_results(&self) -> bool {
        self.awaiting_results
    }

    /// True once after a report: it must be displayed even while awaiting results.
    pub fn take_report(&mut self) -> bool {
        std::mem::take(&mut self.unseen_report)
    }

    /// Returns what should be displayed and reset it.
    pub fn take_redraw(&mut self) -> Redraw {
        std::mem::take(&mut self.redraw)
    }

    pub fn set_redraw(&mut self, redraw: Redraw) {
        self.redraw = redraw;
    }

    /// Display the outcome of an action. Errors of the filtering core which are
    /// only warnings are displayed as such.
    pub fn report(&mut self, error: &anyhow::Error) {
        log_info!("action failed: {error:#}");
        self.message = match error.downcast_ref::<FilterError>() {
            Some(filter_error) if filter_error.is_warning() => {
                Message::warning(filter_error.to_string())
            }
            _ => Message::error(format!("{error:#}")),
        };
        self.unseen_report = true;
        self.redraw = Redraw::StatusLine;
    }

    pub fn set_message(&mut self, message: Message) {
        self.message = message;
        if self.redraw == Redraw::Nothing {
            self.redraw = Redraw::StatusLine;
        }
    }

    /// Set a new pattern. An empty pattern clears the filter.
    /// The files are enumerated in a thread and the result will come back later.
    ///
    /// # Errors
    ///
    /// Fails if the pattern can't be compiled. Nothing changed then.
    pub fn set_pattern(&mut self, pattern: &str) -> Result<()> {
        if pattern.is_empty() {
            self.clear_filter();
            return Ok(());
        }
        let ticket = self.engine.prepare_scan(pattern)?;
        self.spawn_scan(ticket);
        Ok(())
    }

    /// Empty the filter. Any scan in flight is discarded.
    pub fn clear_filter(&mut self) {
        self.awaiting_results = true;
        self.engine.clear();
        self.selection.clear();
        log_line!("{FILTER_CLEARED}");
        self.message = Message::info(FILTER_CLEARED);
    }

    /// Enumerate the files again with the last requested pattern,
    /// even if its first scan hasn't completed yet.
    ///
    /// # Errors
    ///
    /// Fails if no filter is active or requested.
    pub fn refresh(&mut self) -> Result<()> {
        if self.engine.requested_pattern().is_empty() {
            return Err(anyhow!("no filter to refresh"));
        }
        let ticket = self.engine.reissue();
        self.spawn_scan(ticket);
        Ok(())
    }

    fn spawn_scan(&mut self, ticket: ScanTicket) {
        log_info!(
            "scan #{generation} for {pattern}",
            generation = ticket.generation(),
            pattern = ticket.pattern()
        );
        self.awaiting_results = true;
        self.message = Message::info(format!("Filtering with \"{}\"...", ticket.pattern()));
        let enumerator = Arc::clone(&self.enumerator);
        let fm_sender = self.fm_sender.clone();
        thread::spawn(move || {
            let universe = enumerator.enumerate_files();
            let _ = fm_sender.send(FmEvents::Scanned { ticket, universe });
        });
    }

    /// Apply the result of a scan. Stale results are ignored.
    /// The selection is reset as soon as the matches change, before any
    /// queued line is handled.
    ///
    /// # Errors
    ///
    /// Fails if the enumeration failed. The matches are emptied.
    pub fn on_scanned(
        &mut self,
        ticket: ScanTicket,
        universe: Result<Vec<FileRecord>>,
    ) -> Result<()> {
        let pattern = ticket.pattern().to_string();
        let outcome = self.engine.apply_scan(ticket, universe);
        if !matches!(outcome, Ok(ScanOutcome::Stale)) {
            self.selection.clear();
        }
        match outcome? {
            ScanOutcome::Applied(len) => {
                log_line!("Filter \"{pattern}\" applied: {len} files");
                self.message = Message::info(format!("Filter \"{pattern}\" applied"));
            }
            ScanOutcome::Stale => (),
        }
        Ok(())
    }

    /// The matches changed and can be displayed.
    pub fn on_result_changed(&mut self) {
        self.awaiting_results = false;
        self.redraw = Redraw::Matches;
    }

    /// The next typed line will be a pattern.
    pub fn prompt_pattern(&mut self) {
        self.mode = InputMode::Pattern;
        self.redraw = Redraw::StatusLine;
    }

    /// The user answered the pattern prompt. `None` means the prompt was cancelled and nothing happens.
    ///
    /// # Errors
    ///
    /// Fails if the pattern can't be compiled.
    pub fn on_pattern_answer(&mut self, answer: Option<String>) -> Result<()> {
        self.mode = InputMode::Command;
        match answer {
            Some(pattern) => self.set_pattern(&pattern),
            None => {
                self.redraw = Redraw::StatusLine;
                Ok(())
            }
        }
    }

    /// The match at `index`.
    ///
    /// # Errors
    ///
    /// Fails if there's no such match.
    pub fn record(&self, index: usize) -> Result<&FileRecord> {
        self.engine
            .matches()
            .get(index)
            .with_context(|| format!("no match at index {index}"))
    }

    /// Select or unselect some matches.
    ///
    /// # Errors
    ///
    /// Fails on the first index out of the matches. Previous ones are toggled.
    pub fn toggle(&mut self, indexes: &[usize]) -> Result<()> {
        for &index in indexes {
            if !self.selection.toggle(index, self.engine.matches()) {
                return Err(anyhow!("no match at index {index}"));
            }
        }
        self.redraw = Redraw::Matches;
        Ok(())
    }

    pub fn select_all(&mut self) {
        self.selection.select_all(self.engine.matches());
        self.redraw = Redraw::Matches;
    }

    pub fn unselect(&mut self) {
        self.selection.clear();
        self.redraw = Redraw::Matches;
    }

    /// Copy the relative path of a single match.
    ///
    /// # Errors
    ///
    /// Fails if there's no such match or if the clipboard can't be written.
    pub fn copy_one(&mut self, index: usize) -> Result<()> {
        let record = self
            .engine
            .matches()
            .get(index)
            .with_context(|| format!("no match at index {index}"))?;
        let count = copy_to_clipboard([record], self.clipboard.as_mut())?;
        self.set_message(Message::info(copy_confirmation(count)));
        Ok(())
    }

    /// Copy the relative paths of the selected matches, in selection order.
    ///
    /// # Errors
    ///
    /// Fails with [`FilterError::EmptySelection`] if nothing is selected,
    /// or if the clipboard can't be written.
    pub fn copy_selected(&mut self) -> Result<()> {
        let records = self.selection.records(self.engine.matches());
        let count = copy_to_clipboard(records, self.clipboard.as_mut())?;
        self.set_message(Message::info(copy_confirmation(count)));
        Ok(())
    }

    /// Open a match with the configured opener.
    ///
    /// # Errors
    ///
    /// Fails if there's no such match or if the opener failed.
    pub fn open(&mut self, index: usize) -> Result<()> {
        let record = self.record(index)?;
        self.opener.open(record)?;
        let message = Message::info(format!("Opened {}", record.relative_path()));
        self.set_message(message);
        Ok(())
    }
}
