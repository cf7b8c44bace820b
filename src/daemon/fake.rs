use super::{CommandOutcome, CommandRunner, Invocation};
use std::cell::{Cell, RefCell};
use std::io;

/// Records every invocation instead of spawning anything.
#[derive(Debug, Default)]
pub struct FakeRunner {
    pub running: Cell<bool>,
    pub launch_error: bool,
    pub set_stderr: Option<String>,
    pub calls: RefCell<Vec<Invocation>>,
}

impl FakeRunner {
    pub fn running() -> Self {
        Self {
            running: Cell::new(true),
            ..Self::default()
        }
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|call| call.program.clone())
            .collect()
    }

    pub fn last(&self) -> Option<Invocation> {
        self.calls.borrow().last().cloned()
    }
}

impl CommandRunner for FakeRunner {
    fn succeeds(&self, invocation: &Invocation) -> bool {
        self.calls.borrow_mut().push(invocation.clone());
        self.running.get()
    }

    fn spawn_detached(&self, invocation: &Invocation) -> io::Result<()> {
        self.calls.borrow_mut().push(invocation.clone());
        if self.launch_error {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such program"));
        }
        self.running.set(true);
        Ok(())
    }

    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutcome> {
        self.calls.borrow_mut().push(invocation.clone());
        Ok(match &self.set_stderr {
            None => CommandOutcome {
                success: true,
                status: "exit status: 0".to_string(),
                stderr: String::new(),
            },
            Some(stderr) => CommandOutcome {
                success: false,
                status: "exit status: 1".to_string(),
                stderr: stderr.clone(),
            },
        })
    }
}
