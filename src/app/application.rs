use std::io::{self, BufReader, Stdout};
use std::path::Path;
use std::sync::mpsc;
use std::sync::Arc;

use anyhow::Result;

use crate::app::Status;
use crate::config::{load_config, Config};
use crate::event::{EventDispatcher, EventReader, FmEvents};
use crate::common::FilterError;
use crate::io::{Args, Display, LinePrompt, Opener, SystemClipboard, WorkspaceWalker};
use crate::log_info;
use crate::modes::{copy_confirmation, copy_to_clipboard, FilterEngine, PatternPrompt};

/// Holds everything about the application itself.
pub struct FM {
    /// Receives the typed lines, the completed scans and the changes of the matches.
    event_reader: EventReader,
    /// Associate the event to a method, modifing the status.
    event_dispatcher: EventDispatcher,
    /// Current status of the application: the engine, the selection, the clipboard...
    status: Status,
    /// Responsible for the display on screen.
    display: Display<Stdout>,
}

impl FM {
    /// Setup everything the application needs in its main loop :
    /// an `EventReader`,
    /// an `EventDispatcher`,
    /// a `Status`,
    /// a `Display`.
    /// It reads and drops the configuration from the config file.
    ///
    /// # Errors
    ///
    /// May fail if the config file can't be read or if the workspace doesn't exist.
    pub fn start(args: &Args) -> Result<Self> {
        let config = read_config(args)?;
        let walker = WorkspaceWalker::new(Path::new(&args.path), &config)?;
        log_info!("workspace: {root}", root = walker.root().display());
        let (fm_sender, fm_receiver) = mpsc::channel::<FmEvents>();
        let status = Status::new(
            Arc::new(walker),
            Box::new(SystemClipboard),
            Opener::new(&config.opener),
            fm_sender.clone(),
        );
        let event_reader = EventReader::new(BufReader::new(io::stdin()), fm_sender, fm_receiver);
        drop(config);
        Ok(Self {
            event_reader,
            event_dispatcher: EventDispatcher::new(),
            status,
            display: Display::new(io::stdout()),
        })
    }

    /// Return the last event received.
    ///
    /// # Errors
    ///
    /// May fail if every sender is closed.
    pub fn poll_event(&self) -> Result<FmEvents> {
        self.event_reader.poll_event()
    }

    /// Update itself, changing its status.
    pub fn update(&mut self, event: FmEvents) -> Result<()> {
        self.event_dispatcher.dispatch(&mut self.status, event)
    }

    /// Display itself using its `display` attribute.
    ///
    /// # Errors
    ///
    /// May fail if the terminal can't be written.
    pub fn display(&mut self) -> Result<()> {
        self.display.display_all(&mut self.status)
    }

    /// True iff the application must quit.
    pub fn must_quit(&self) -> bool {
        self.status.must_quit()
    }

    /// Drop everything. The thread reading the input is left behind,
    /// it stops with the process.
    pub fn quit(self) -> Result<()> {
        drop(self.event_reader);
        drop(self.event_dispatcher);
        drop(self.display);
        drop(self.status);
        println!();
        log_info!("ffilter is shutting down");
        Ok(())
    }
}

/// Filter once and print the matches, without starting a session.
///
/// The pattern is read from the arguments or asked to the user.
/// A cancelled prompt prints nothing.
///
/// # Errors
///
/// May fail if the pattern is invalid, if the files can't be listed or if
/// the clipboard can't be written.
pub fn run_once(args: &Args) -> Result<()> {
    let config = read_config(args)?;
    let walker = WorkspaceWalker::new(Path::new(&args.path), &config)?;
    let pattern = match &args.regex {
        Some(pattern) => pattern.to_owned(),
        None => {
            let mut prompt = LinePrompt::new(io::stdin().lock(), io::stderr());
            let Some(pattern) = prompt.prompt_for_pattern()? else {
                log_info!("prompt cancelled");
                return Ok(());
            };
            pattern
        }
    };
    let mut engine = FilterEngine::new();
    let matches = engine.set_pattern(&pattern, &walker)?;
    Display::new(io::stdout()).print_records(matches)?;
    if !args.copy {
        return Ok(());
    }
    match copy_to_clipboard(matches, &mut SystemClipboard) {
        Ok(count) => eprintln!("{}", copy_confirmation(count)),
        Err(error) if is_warning(&error) => eprintln!("Warning: {error}"),
        Err(error) => return Err(error),
    }
    Ok(())
}

fn is_warning(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<FilterError>()
        .is_some_and(FilterError::is_warning)
}

fn read_config(args: &Args) -> Result<Config> {
    let mut config = load_config(&args.config)?;
    config.update_from_args(args);
    Ok(config)
}
