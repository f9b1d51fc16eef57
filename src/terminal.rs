use anyhow::{Context, Result};
use std::process::{Command, Stdio};

/// A resolved terminal invocation: program plus fully-built argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalCommand {
    pub program: String,
    pub args: Vec<String>,
}

/// Platform strategy for opening a visible terminal running a command
/// followed by an interactive shell, so the window stays open after the
/// command finishes.
pub trait TerminalStrategy: Send + Sync {
    fn command_line(&self, command: &str) -> TerminalCommand;
}

/// `cmd.exe /k` keeps the window open.
pub struct WindowsShell;

impl TerminalStrategy for WindowsShell {
    fn command_line(&self, command: &str) -> TerminalCommand {
        TerminalCommand {
            program: "cmd.exe".into(),
            args: vec!["/k".into(), command.into()],
        }
    }
}

/// Drives the Terminal application through the system script runner.
pub struct MacTerminal;

impl TerminalStrategy for MacTerminal {
    fn command_line(&self, command: &str) -> TerminalCommand {
        let script = format!(
            "tell app \"Terminal\" to do script \"{}; bash\"",
            escape_shell(command)
        );
        TerminalCommand {
            program: "osascript".into(),
            args: vec!["-e".into(), script],
        }
    }
}

/// Known emulators in priority order, each with its own flag for passing a
/// command. First binary resolvable on `PATH` wins.
pub const UNIX_TERMINALS: &[(&str, &str)] = &[
    ("gnome-terminal", "--"),
    ("konsole", "-e"),
    ("xfce4-terminal", "-x"),
    ("terminator", "-x"),
    ("tilix", "--"),
    ("mate-terminal", "--"),
];

/// Probes `PATH` for a known emulator, falling back to the generic
/// `x-terminal-emulator` alias when none resolves.
pub struct UnixTerminal;

impl TerminalStrategy for UnixTerminal {
    fn command_line(&self, command: &str) -> TerminalCommand {
        resolve_unix_with(binary_on_path, command)
    }
}

/// PATH-probing resolution with an injectable lookup, so the candidate
/// table and argument shapes stay testable on any machine.
pub fn resolve_unix_with(lookup: impl Fn(&str) -> bool, command: &str) -> TerminalCommand {
    let payload = format!("{}; bash", escape_shell(command));
    for (bin, flag) in UNIX_TERMINALS {
        if lookup(bin) {
            return TerminalCommand {
                program: bin.to_string(),
                args: vec![flag.to_string(), "bash".into(), "-c".into(), payload],
            };
        }
    }
    TerminalCommand {
        program: "x-terminal-emulator".into(),
        args: vec!["-e".into(), format!("bash -c '{payload}'")],
    }
}

/// Backslash-escape the characters that would otherwise be interpreted when
/// the command string is embedded in a shell-quoted argument. Reduces, not
/// eliminates, injection surface; the strings are authored by the user
/// themselves.
pub fn escape_shell(command: &str) -> String {
    let mut escaped = String::with_capacity(command.len());
    for ch in command.chars() {
        if matches!(ch, '"' | '\'' | '$' | '`' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

pub fn binary_on_path(name: &str) -> bool {
    let Some(paths) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&paths).any(|dir| dir.join(name).is_file())
}

/// Pick the strategy for the current OS family. Called once per launch; the
/// selection itself is compile-time.
pub fn detect() -> Box<dyn TerminalStrategy> {
    #[cfg(target_os = "windows")]
    return Box::new(WindowsShell);
    #[cfg(target_os = "macos")]
    return Box::new(MacTerminal);
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    Box::new(UnixTerminal)
}

/// Launch a detached terminal session running `command`. Returns as soon as
/// the spawn succeeds; the session's lifetime is not tied to ours.
pub fn launch(command: &str) -> Result<()> {
    let resolved = detect().command_line(command);
    tracing::debug!("spawning terminal: {} {:?}", resolved.program, resolved.args);
    Command::new(&resolved.program)
        .args(&resolved.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .with_context(|| format!("could not launch terminal '{}'", resolved.program))
}
