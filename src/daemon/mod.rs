use std::ffi::OsString;
use std::io;

pub mod awww;
pub mod system;

#[cfg(test)]
pub(crate) mod fake;

pub use awww::{Awww, DaemonState};
pub use system::SystemRunner;

/// A program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
}

impl Invocation {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub success: bool,
    /// Human readable exit status, e.g. `exit status: 1`.
    pub status: String,
    pub stderr: String,
}

/// Seam between the dispatcher and the operating system's process APIs.
pub trait CommandRunner {
    /// Runs to completion and reports whether it exited successfully.
    fn succeeds(&self, invocation: &Invocation) -> bool;
    /// Starts a background process that may outlive this one.
    fn spawn_detached(&self, invocation: &Invocation) -> io::Result<()>;
    /// Runs to completion, capturing the outcome.
    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutcome>;
}
