use std::ffi::OsStr;
use std::fmt;
use std::process::{Child, Command, Stdio};
use std::thread;

use anyhow::{Context, Result};

use crate::common::{is_in_path, SETSID};
use crate::{log_info, log_line};

/// Start a program detached from ffilter, with its streams redirected to null.
/// It goes through `setsid` when available so it survives ffilter.
///
/// The child is waited on in a thread, it won't stay a zombie once it exits.
///
/// # Errors
///
/// May fail if the command can't be spawned.
pub fn execute<S, P>(exe: S, args: &[P]) -> Result<()>
where
    S: AsRef<OsStr> + fmt::Debug,
    P: AsRef<OsStr> + fmt::Debug,
{
    log_info!("execute. executable: {exe:?}, arguments: {args:?}");
    log_line!("Execute: {exe:?}, arguments: {args:?}");
    let child = detached_command(exe.as_ref(), args)
        .spawn()
        .with_context(|| format!("couldn't start {exe:?}"))?;
    reap(child);
    Ok(())
}

fn detached_command<P: AsRef<OsStr>>(exe: &OsStr, args: &[P]) -> Command {
    let mut command = if is_in_path(SETSID) {
        let mut command = Command::new(SETSID);
        command.arg(exe);
        command
    } else {
        Command::new(exe)
    };
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    command
}

/// Wait for the child in a thread and log how it ended.
fn reap(mut child: Child) {
    let pid = child.id();
    thread::spawn(move || match child.wait() {
        Ok(exit) => log_info!("process {pid} exited: {exit}"),
        Err(error) => log_info!("couldn't wait for process {pid}: {error}"),
    });
}
