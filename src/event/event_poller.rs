use std::io::BufRead;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use anyhow::{Context, Result};

use crate::event::FmEvents;
use crate::log_info;

/// Simple struct to read the events.
///
/// Typed lines are read by a thread which sends them as [`FmEvents::Line`].
/// The same channel receives the results of the scans and the notifications of the engine.
pub struct EventReader {
    pub fm_receiver: Receiver<FmEvents>,
}

impl EventReader {
    /// Creates a new reader and spawn the thread reading the lines of `input`.
    /// The thread stops after sending [`FmEvents::EndOfInput`] or once the receiver is dropped.
    pub fn new<R>(input: R, fm_sender: Sender<FmEvents>, fm_receiver: Receiver<FmEvents>) -> Self
    where
        R: BufRead + Send + 'static,
    {
        thread::spawn(move || {
            for line in input.lines() {
                let Ok(line) = line else {
                    break;
                };
                if fm_sender.send(FmEvents::Line(line)).is_err() {
                    return;
                }
            }
            log_info!("input closed");
            let _ = fm_sender.send(FmEvents::EndOfInput);
        });
        Self { fm_receiver }
    }

    /// Returns the events as they're received. Wait indefinitely for a new one.
    /// We should spend most of the application life here, doing nothing :)
    ///
    /// # Errors
    ///
    /// Fails if every sender was dropped.
    pub fn poll_event(&self) -> Result<FmEvents> {
        self.fm_receiver.recv().context("every event sender is closed")
    }
}
