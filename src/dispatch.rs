use crate::catalog::{Item, ItemKind};
use crate::settings::Settings;
use crate::terminal;
use std::io::Read;
use std::process::{Command, Stdio};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

/// Uniform result of launching an item. Host-call failures are converted to
/// `Failed`; nothing escapes the dispatcher as a panic or error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The action was carried out. Inline commands carry their captured
    /// stdout; everything else launches fire-and-forget.
    Launched { output: Option<String> },
    Failed { reason: String },
    /// The item's type did not resolve to any action (hand-edited config).
    UnknownKind,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Launched { .. })
    }

    fn failed(reason: impl Into<String>) -> Self {
        Outcome::Failed {
            reason: reason.into(),
        }
    }
}

/// Resolve an item's type to a concrete OS action and run it.
pub fn dispatch(item: &Item, settings: &Settings) -> Outcome {
    tracing::debug!("dispatching '{}' ({})", item.name, item.kind.label());
    match item.kind {
        ItemKind::Url => open_url(&item.command),
        ItemKind::File | ItemKind::Folder => open_path(&item.command),
        ItemKind::Command => {
            if item.run_in_terminal.unwrap_or(false) {
                match terminal::launch(&item.command) {
                    Ok(()) => Outcome::Launched { output: None },
                    Err(e) => Outcome::failed(e.to_string()),
                }
            } else {
                run_inline(&item.command, settings.command_timeout)
            }
        }
        ItemKind::Unknown => {
            tracing::warn!("unknown item type for '{}'; nothing launched", item.name);
            Outcome::UnknownKind
        }
    }
}

/// Prepend `https://` when the command string carries no scheme.
pub fn normalize_url(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}

fn open_url(raw: &str) -> Outcome {
    let url = normalize_url(raw);
    match open::that(&url) {
        Ok(()) => Outcome::Launched { output: None },
        Err(e) => Outcome::failed(format!("could not open {url}: {e}")),
    }
}

fn open_path(path: &str) -> Outcome {
    match open::that(path) {
        Ok(()) => Outcome::Launched { output: None },
        Err(e) => Outcome::failed(format!("could not open {path}: {e}")),
    }
}

fn shell_command(cmd: &str) -> Command {
    #[cfg(target_os = "windows")]
    {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(cmd);
        c
    }
    #[cfg(not(target_os = "windows"))]
    {
        let mut c = Command::new("sh");
        c.arg("-c").arg(cmd);
        c
    }
}

/// Run a command through the platform shell, capturing stdout and stderr.
/// A non-zero exit or any stderr output counts as failure. When `timeout`
/// is set the child is polled and killed at the deadline; otherwise this
/// blocks until the command finishes.
pub fn run_inline(cmd: &str, timeout_secs: Option<u64>) -> Outcome {
    let mut command = shell_command(cmd);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(e) => return Outcome::failed(format!("failed to start '{cmd}': {e}")),
    };

    let (status, stdout, stderr) = if let Some(secs) = timeout_secs {
        // The pipes must be drained while polling; a child whose output
        // overruns the pipe buffer would otherwise block on write and
        // sit there until the deadline kills it.
        let stdout_reader = child.stdout.take().map(spawn_reader);
        let stderr_reader = child.stderr.take().map(spawn_reader);
        let deadline = Instant::now() + Duration::from_secs(secs);
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Outcome::failed(format!("'{cmd}' timed out after {secs}s"));
                }
                Ok(None) => std::thread::sleep(Duration::from_millis(25)),
                Err(e) => {
                    let _ = child.kill();
                    return Outcome::failed(format!("failed waiting on '{cmd}': {e}"));
                }
            }
        };
        let stdout = stdout_reader.map(join_reader).unwrap_or_default();
        let stderr = stderr_reader.map(join_reader).unwrap_or_default();
        (status, stdout, stderr)
    } else {
        match child.wait_with_output() {
            Ok(output) => (output.status, output.stdout, output.stderr),
            Err(e) => return Outcome::failed(format!("failed waiting on '{cmd}': {e}")),
        }
    };

    let stderr = String::from_utf8_lossy(&stderr);
    let stderr = stderr.trim();
    if !status.success() {
        return Outcome::failed(if stderr.is_empty() {
            format!("'{cmd}' exited with {status}")
        } else {
            stderr.to_string()
        });
    }
    if !stderr.is_empty() {
        return Outcome::failed(stderr.to_string());
    }

    let stdout = String::from_utf8_lossy(&stdout).trim().to_string();
    Outcome::Launched {
        output: if stdout.is_empty() {
            None
        } else {
            Some(stdout)
        },
    }
}

fn spawn_reader<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<Vec<u8>> {
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        buf
    })
}

fn join_reader(handle: JoinHandle<Vec<u8>>) -> Vec<u8> {
    handle.join().unwrap_or_default()
}
