use std::io;
use std::path::Path;
use std::process::Stdio;

use tokio::process::{Child, ChildStdout, Command};
use tracing::{debug, info, warn};

use crate::relay::RelayError;

/// A spawned generator process and the read end of its output pipe
///
/// The generator runs autonomously once launched; the relay never signals it
/// beyond the eventual forced termination. Both the process handle and the
/// pipe are owned here for the whole streaming phase, and `terminate`
/// consumes the value, so kill and reap happen exactly once.
#[derive(Debug)]
pub struct GeneratorProcess {
    child: Child,
    stdout: ChildStdout,
}

impl GeneratorProcess {
    /// Launch the generator with the source reference as its only argument
    ///
    /// Stdout is captured through a pipe; stdin is closed so a generator
    /// that reads it sees EOF instead of stealing the terminal. The spawn
    /// primitive resets signal dispositions (including SIGPIPE) and clears
    /// the signal mask in the child before exec.
    pub fn spawn(path: &Path, source: &str) -> Result<Self, RelayError> {
        debug!("Launching generator: {} {}", path.display(), source);

        let mut child = Command::new(path)
            .arg(source)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| RelayError::Launch {
                path: path.to_path_buf(),
                source: e,
            })?;

        let stdout = child.stdout.take().ok_or_else(|| RelayError::Launch {
            path: path.to_path_buf(),
            source: io::Error::other("generator stdout was not captured"),
        })?;

        info!("Generator started (pid {:?})", child.id());

        Ok(Self { child, stdout })
    }

    /// Read end of the generator's output pipe
    pub fn stdout(&mut self) -> &mut ChildStdout {
        &mut self.stdout
    }

    /// OS process id, while the process is still running
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    /// Kill the generator and collect its exit status
    ///
    /// Invoked on every session exit path; consuming `self` makes a second
    /// kill or reap unrepresentable. A generator that already exited on its
    /// own is just reaped.
    pub async fn terminate(mut self) {
        if let Err(e) = self.child.start_kill() {
            debug!("Generator already finished: {}", e);
        }

        match self.child.wait().await {
            Ok(status) => debug!("Generator reaped: {}", status),
            Err(e) => warn!("Failed to reap generator: {}", e),
        }
    }
}
