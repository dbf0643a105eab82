use anyhow::Result;
use clap::Parser;

use ffilter::app::{run_once, FM};
use ffilter::io::{set_loggers, Args};
use ffilter::log_info;

/// Main function
/// With `--regex` or `--ask`, filter once, print the matches and quit.
/// Otherwise, start a session: read the typed commands and the internal events.
/// The application is redrawn after every event.
/// When the user issues a quit event, the main loop is broken.
fn main() -> Result<()> {
    let args = Args::parse();
    set_loggers(args.log)?;
    if args.is_one_shot() {
        return run_once(&args);
    }
    let mut fm = FM::start(&args)?;
    fm.display()?;

    while let Ok(event) = fm.poll_event() {
        fm.update(event)?;
        fm.display()?;

        if fm.must_quit() {
            break;
        }
    }

    log_info!("main loop exited");
    fm.quit()
}
