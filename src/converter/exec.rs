//! Subprocess invocation of the pandoc executable.
//!
//! The command line is constructed as a single string and handed to a
//! shell (`sh -c`), matching pandoc's own quoting conventions for option
//! arguments. Option values and file paths are not shell-escaped; callers
//! are responsible for supplying safe values.

use std::io::{Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::{LazyLock, RwLock};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::error::{Error, Result};

/// Exit code a POSIX shell reports when the command was not found.
const EXIT_COMMAND_NOT_FOUND: i32 = 127;

/// How often a time-bounded invocation polls the child for completion.
const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(10);

static PANDOC_PATH: LazyLock<RwLock<String>> =
    LazyLock::new(|| RwLock::new("pandoc".to_string()));

/// Returns the executable invoked for conversions (default `pandoc`,
/// resolved via `PATH`).
pub fn pandoc_path() -> String {
    match PANDOC_PATH.read() {
        Ok(path) => path.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Overrides the executable invoked for conversions, process-wide.
///
/// The change applies to all subsequent invocations. It is not
/// synchronized against conversions already in flight; do not race this
/// against concurrent `convert` calls.
pub fn set_pandoc_path(path: impl Into<String>) {
    match PANDOC_PATH.write() {
        Ok(mut guard) => *guard = path.into(),
        Err(poisoned) => *poisoned.into_inner() = path.into(),
    }
}

/// Runs `command` through the shell, optionally piping `stdin_data` to its
/// standard input, and returns the captured standard output on success.
///
/// A non-zero exit becomes [`Error::External`] carrying the captured
/// stderr verbatim, except exit 127 (command not found) which becomes
/// [`Error::Invocation`]. When `timeout` is set and expires, the child is
/// killed and [`Error::Timeout`] is returned.
pub(crate) fn run(
    command: &str,
    stdin_data: Option<&str>,
    timeout: Option<Duration>,
) -> Result<Vec<u8>> {
    log::debug!("invoking: {command}");

    let mut child = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(if stdin_data.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| Error::Invocation(format!("failed to launch `{command}`: {e}")))?;

    // Feed stdin from its own thread so a child that fills its output pipe
    // before draining its input cannot deadlock us.
    if let (Some(data), Some(mut stdin)) = (stdin_data, child.stdin.take()) {
        let data = data.to_owned();
        thread::spawn(move || {
            let _ = stdin.write_all(data.as_bytes());
        });
    }

    let stdout = spawn_capture(child.stdout.take());
    let stderr = spawn_capture(child.stderr.take());

    let status = match timeout {
        Some(limit) => wait_with_deadline(&mut child, limit)?,
        None => child.wait()?,
    };

    let stdout = join_capture(stdout)?;
    let stderr = join_capture(stderr)?;

    if status.success() {
        Ok(stdout)
    } else {
        let message = String::from_utf8_lossy(&stderr).into_owned();
        log::debug!("pandoc exited with {status}: {message}");
        if status.code() == Some(EXIT_COMMAND_NOT_FOUND) {
            Err(Error::Invocation(message))
        } else {
            Err(Error::External(message))
        }
    }
}

fn spawn_capture<R: Read + Send + 'static>(source: Option<R>) -> Option<JoinHandle<Vec<u8>>> {
    source.map(|mut stream| {
        thread::spawn(move || {
            let mut buffer = Vec::new();
            let _ = stream.read_to_end(&mut buffer);
            buffer
        })
    })
}

fn join_capture(handle: Option<JoinHandle<Vec<u8>>>) -> Result<Vec<u8>> {
    match handle {
        Some(handle) => handle
            .join()
            .map_err(|_| Error::Invocation("output capture thread panicked".to_string())),
        None => Ok(Vec::new()),
    }
}

/// Waits for the child to exit, polling so the wait can be bounded.
/// On expiry the child is killed, reaped, and a timeout error returned.
fn wait_with_deadline(child: &mut Child, limit: Duration) -> Result<ExitStatus> {
    let deadline = Instant::now() + limit;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Err(Error::Timeout(limit));
        }
        thread::sleep(WAIT_POLL_INTERVAL);
    }
}
